use shared::TimeSlot;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimeButtonProps {
    pub slot: TimeSlot,
    pub selected: bool,
    /// False for reserved slots and locked dates
    pub interactive: bool,
    pub on_pointer_down: Callback<TimeSlot>,
    pub on_pointer_enter: Callback<TimeSlot>,
}

/// Unavailable slots get `pointer-events: none` from the stylesheet instead of
/// `disabled`, so a drag released over one still reaches the window listener.
fn slot_class(selected: bool, interactive: bool) -> Classes {
    classes!(
        "time-slot",
        (!interactive).then_some("unavailable"),
        selected.then_some("selected"),
    )
}

#[function_component(TimeButton)]
pub fn time_button(props: &TimeButtonProps) -> Html {
    let onmousedown = {
        let slot = props.slot;
        let on_pointer_down = props.on_pointer_down.clone();
        Callback::from(move |e: MouseEvent| {
            // Keep the sweep from selecting button text
            e.prevent_default();
            on_pointer_down.emit(slot);
        })
    };

    let onmouseenter = {
        let slot = props.slot;
        let on_pointer_enter = props.on_pointer_enter.clone();
        Callback::from(move |_: MouseEvent| on_pointer_enter.emit(slot))
    };

    let class = slot_class(props.selected, props.interactive);
    let aria_disabled = (!props.interactive).then_some("true");

    html! {
        <button
            type="button"
            {class}
            aria-disabled={aria_disabled}
            tabindex={(!props.interactive).then_some("-1")}
            {onmousedown}
            {onmouseenter}
        >
            {props.slot.label()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_unavailable_slot_class() {
        let class = slot_class(false, false);
        assert!(class.contains("time-slot"));
        assert!(class.contains("unavailable"));
        assert!(!class.contains("selected"));
    }

    #[wasm_bindgen_test]
    fn test_selected_slot_class() {
        let class = slot_class(true, true);
        assert!(class.contains("selected"));
        assert!(!class.contains("unavailable"));
    }
}
