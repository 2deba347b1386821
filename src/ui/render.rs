//! Leveled, tagged user-facing output.
//!
//! `RenderSink` is the contract the dispatcher writes through; `Renderer` is
//! the terminal implementation.

use crossterm::style::{Color, Stylize};

pub const LABEL_INFO: &str = "[INFO]";
pub const LABEL_WARNING: &str = "[WARNING]";
pub const LABEL_ERROR: &str = "[ERROR]";

/// Injectable output interface used by command handlers.
pub trait RenderSink {
    /// Render an informational line.
    fn info(&self, msg: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
    /// Render untagged text to stdout.
    fn plain(&self, text: &str);
    /// Render one `key: value` row.
    fn field(&self, key: &str, value: &str);
}

/// Wrap `text` in `color` and a reset when `enabled`; identity otherwise.
pub fn colorize(enabled: bool, color: Color, text: &str) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

/// Terminal renderer. Info and warnings go to stdout, errors to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    fn tagged(&self, label: &str, color: Color, msg: &str) -> String {
        format!("{} {msg}", colorize(self.color, color, label))
    }
}

impl RenderSink for Renderer {
    fn info(&self, msg: &str) {
        println!("{}", self.tagged(LABEL_INFO, Color::Green, msg));
    }

    fn warn(&self, msg: &str) {
        println!("{}", self.tagged(LABEL_WARNING, Color::Yellow, msg));
    }

    fn error(&self, msg: &str) {
        eprintln!("{}", self.tagged(LABEL_ERROR, Color::Red, msg));
    }

    fn plain(&self, text: &str) {
        println!("{text}");
    }

    fn field(&self, key: &str, value: &str) {
        if self.color {
            println!("  {} {value}", format!("{key}:").with(Color::Cyan));
        } else {
            println!("  {key}: {value}");
        }
    }
}
