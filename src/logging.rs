use serde_json::{Map, Number, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

pub fn format_event(
    threshold: LogLevel,
    level: LogLevel,
    event: &str,
    fields: Value,
    ts_millis: u64,
) -> Option<String> {
    if level < threshold {
        return None;
    }

    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts_millis)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(Value::Object(payload).to_string())
}

pub fn log_event(threshold: LogLevel, level: LogLevel, event: &str, fields: Value) {
    if let Some(line) = format_event(threshold, level, event, fields, now_unix_millis()) {
        write_line(level, &line);
    }
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&line),
        LogLevel::Info => web_sys::console::info_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: LogLevel, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_below_threshold_are_suppressed() {
        let line = format_event(LogLevel::Info, LogLevel::Debug, "noise", json!({}), 1);
        assert!(line.is_none());
    }

    #[test]
    fn event_fields_are_merged_into_payload() {
        let line = format_event(
            LogLevel::Debug,
            LogLevel::Warn,
            "content_load_failed",
            json!({ "reason": "bad json" }),
            1_700_000_000_000,
        )
        .expect("warn passes a debug threshold");

        let parsed: Value = serde_json::from_str(&line).expect("payload is JSON");
        assert_eq!(parsed["level"], "warn");
        assert_eq!(parsed["event"], "content_load_failed");
        assert_eq!(parsed["reason"], "bad json");
        assert_eq!(parsed["ts"], 1_700_000_000_000u64);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert_eq!(LogLevel::from_str("warn"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("trace"), None);
    }
}
