// Small helpers shared across components.

/// Formats hours/minutes as a HH:MM clock string.
pub fn format_hm(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours, minutes)
}

/// Local wall-clock HH:MM for an epoch-milliseconds timestamp.
pub fn format_clock(epoch_ms: f64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(epoch_ms));
    format_hm(date.get_hours(), date.get_minutes())
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_hm_pads() {
        assert_eq!(format_hm(7, 5), "07:05");
        assert_eq!(format_hm(23, 59), "23:59");
        assert_eq!(format_hm(0, 0), "00:00");
    }
}
