use std::sync::atomic::{AtomicU8, Ordering};

use serde_json::{Map, Number, Value};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    fn rank(self) -> u8 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
            Self::Warn => 2,
            Self::Error => 3,
        }
    }

    fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            _ => Self::Error,
        }
    }
}

pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

static MAX_LEVEL: AtomicU8 = AtomicU8::new(1);

pub fn set_log_level(level: LogLevel) {
    MAX_LEVEL.store(level.rank(), Ordering::Relaxed);
}

pub fn log_level() -> LogLevel {
    LogLevel::from_rank(MAX_LEVEL.load(Ordering::Relaxed))
}

pub fn enabled(level: LogLevel) -> bool {
    level >= log_level()
}

/// Emits one JSON line: `ts`, `level`, `event`, then every key of `fields`.
pub fn log_event(level: LogLevel, event: &str, fields: Value) {
    if !enabled(level) {
        return;
    }

    let line = Value::Object(build_event(now_unix_millis(), level, event, fields)).to_string();
    emit(level, &line);
}

fn build_event(ts: u64, level: LogLevel, event: &str, fields: Value) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert(
        "level".to_string(),
        Value::String(level.as_str().to_string()),
    );
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    payload
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let line = JsValue::from_str(line);
    match level {
        LogLevel::Debug => console::debug_1(&line),
        LogLevel::Info => console::log_1(&line),
        LogLevel::Warn => console::warn_1(&line),
        LogLevel::Error => console::error_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}
