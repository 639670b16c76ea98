use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Emits whenever the mouse button is released anywhere in the window.
///
/// A drag that ends outside any slot button must still end the drag.
#[hook]
pub fn use_window_mouseup(on_release: Callback<()>) {
    use_effect_with(on_release, |on_release| {
        let on_release = on_release.clone();
        let listener = web_sys::window().map(|window| {
            EventListener::new(&window, "mouseup", move |_| on_release.emit(()))
        });
        move || drop(listener)
    });
}

/// Emits when Escape is pressed while the component is mounted
#[hook]
pub fn use_escape_key(on_escape: Callback<()>) {
    use_effect_with(on_escape, |on_escape| {
        let on_escape = on_escape.clone();
        let listener = web_sys::window()
            .and_then(|window| window.document())
            .map(|document| {
                EventListener::new(&document, "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map_or(false, |event| event.key() == "Escape");
                    if is_escape {
                        on_escape.emit(());
                    }
                })
            });
        move || drop(listener)
    });
}
