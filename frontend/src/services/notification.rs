//! Blocking user notifications for submit outcomes.

pub const CREATE_SUCCESS: &str = "성공적으로 작성되었습니다!";
pub const CREATE_REJECTED: &str = "작성에 실패했습니다. 다시 시도해주세요.";
pub const NETWORK_FAILURE: &str = "요청 중 문제가 발생했습니다. 네트워크를 확인해주세요.";

pub fn notify(message: &str) {
    gloo::dialogs::alert(message);
}
