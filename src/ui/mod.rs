//! Terminal-facing output: color detection and the tagged message renderer.

pub mod color;
pub mod render;

pub use color::{detect_color_support, detect_color_support_with};
pub use render::{colorize, RenderSink, Renderer};
