//! Shared helpers for WASM API operations
//!
//! Console logging, serialization and error conversion used by the
//! exported functions. On native targets (tests, rlib consumers) the
//! logging macros go through the `log` facade instead of the console.

use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn js_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = info)]
    fn js_info(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn js_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn js_error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    js_log(&format!("[WASM] {}", msg));
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("[WASM] {}", msg);
}

pub fn log_info(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    js_info(&format!("[WASM] {}", msg));
    #[cfg(not(target_arch = "wasm32"))]
    log::info!("[WASM] {}", msg);
}

pub fn log_warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    js_warn(&format!("[WASM] ⚠️ {}", msg));
    #[cfg(not(target_arch = "wasm32"))]
    log::warn!("[WASM] {}", msg);
}

pub fn log_error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    js_error(&format!("[WASM] ❌ {}", msg));
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("[WASM] {}", msg);
}

// ============================================================================
// Serialization Helpers
// ============================================================================

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to a JSON string with automatic error handling
pub fn to_json<T: Serialize>(value: &T, error_context: &str) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        msg
    })
}

// ============================================================================
// Input Helpers
// ============================================================================

/// JavaScript numbers arrive as f64; only finite whole numbers are integers
pub fn whole_number(number: f64) -> Option<i64> {
    if number.is_finite() && number.fract() == 0.0 {
        Some(number as i64)
    } else {
        None
    }
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert an error message to a JsValue
pub fn error_value(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_number() {
        assert_eq!(whole_number(1994.0), Some(1994));
        assert_eq!(whole_number(-1.0), Some(-1));
        assert_eq!(whole_number(1.5), None);
        assert_eq!(whole_number(f64::NAN), None);
        assert_eq!(whole_number(f64::INFINITY), None);
    }

    #[test]
    fn test_to_json() {
        assert_eq!(to_json(&vec![1, 2], "ctx"), Ok("[1,2]".to_string()));
    }
}
