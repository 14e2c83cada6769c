//! Render use cases: JSON, Markdown and plain text from in-memory reports.

use crate::report::{serialize_report, to_renderable};
use anyhow::Context;
use tamperguard_types::TamperguardReport;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
    Markdown,
}

pub fn render_report(report: &TamperguardReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let bytes = serialize_report(report)?;
            let mut text = String::from_utf8(bytes).context("report JSON is not UTF-8")?;
            text.push('\n');
            Ok(text)
        }
        OutputFormat::Text => Ok(tamperguard_render::render_text(&to_renderable(report))),
        OutputFormat::Markdown => Ok(tamperguard_render::render_markdown(&to_renderable(report))),
    }
}
