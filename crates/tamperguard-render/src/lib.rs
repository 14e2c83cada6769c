//! Rendering utilities for human-facing surfaces (Markdown, terminal text).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{RenderableData, RenderableReport, RenderableVerdict, RenderableViolation};
pub use text::render_text;
