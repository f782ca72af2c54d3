use super::Value;
use crate::interpreter::error::RuntimeError;

pub trait ValueFormatter {
    fn format(&self, value: &Value) -> String;
    fn format_error(&self, error: &RuntimeError) -> String;
}

/// Prints values with `Display` and errors as `[code] message`.
pub struct BasicFormatter;

impl ValueFormatter for BasicFormatter {
    fn format(&self, value: &Value) -> String {
        format!("{value}")
    }

    fn format_error(&self, error: &RuntimeError) -> String {
        format!("[{}] {error}", error.code())
    }
}
