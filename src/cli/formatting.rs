//! Formatting utilities for CLI output.

use std::time::Duration;

use crate::value::DynamicValue;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats secondary information with dim styling
pub fn format_dim(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}Error:{} {}", Colors::BOLD, Colors::RED, Colors::RESET, text)
}

/// Format duration as MM:SS
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Renders a dynamic value for display
pub fn format_value(value: &DynamicValue) -> String {
    match value {
        DynamicValue::Bool(v) => v.to_string(),
        DynamicValue::Str(v) | DynamicValue::ObjectPath(v) => v.clone(),
        DynamicValue::Int32(v) => v.to_string(),
        DynamicValue::Int64(v) => v.to_string(),
        DynamicValue::UInt64(v) => v.to_string(),
        DynamicValue::Double(v) => v.to_string(),
        DynamicValue::StrList(items) => items.join(", "),
        DynamicValue::List { items, .. } => {
            let rendered: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        DynamicValue::Map { entries, .. } => {
            let mut rendered: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("{key}: {}", format_value(value)))
                .collect();
            rendered.sort();
            format!("{{{}}}", rendered.join(", "))
        }
        DynamicValue::Variant(inner) => format_value(inner),
    }
}
