use log::warn;

/// Blocking browser dialog.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        warn!("No window to show alert: {message}");
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        warn!("Failed to show alert: {:?}", err);
    }
}
