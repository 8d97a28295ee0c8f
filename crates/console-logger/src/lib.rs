//! Console Logger
//!
//! `log` backend for the browser. Lines are tagged with the last segment of
//! the record target, e.g. `[CONTROLLER] adding Apple x2 to cart`, and routed
//! to the console method matching the level.

use std::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug => console::log_1(&line),
            Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Later calls are ignored.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// `[TAG] message`, where TAG is the upper-cased last path segment of `target`
pub fn format_line(target: &str, message: impl fmt::Display) -> String {
    let tag = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", tag.to_uppercase(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_is_last_module_segment() {
        assert_eq!(
            format_line("cart_core::controller", "adding Apple x2"),
            "[CONTROLLER] adding Apple x2"
        );
        assert_eq!(format_line("cart_ui", format_args!("{} items", 3)), "[CART_UI] 3 items");
    }
}
