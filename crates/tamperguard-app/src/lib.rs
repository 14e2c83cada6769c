//! Use case orchestration for tamperguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! and render layers. Facts arrive through a [`FactsProvider`](tamperguard_domain::FactsProvider)
//! chosen by the caller, so nothing here touches the filesystem.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod diagnose;
mod explain;
mod render;
mod report;
mod schema;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use diagnose::{DiagnoseInput, run_diagnose, serialize_diagnostics};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{OutputFormat, render_report};
pub use report::{parse_report_json, serialize_report, to_renderable};
pub use schema::{SchemaKind, generate_schema};
