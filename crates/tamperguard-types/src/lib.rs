//! Stable DTOs and IDs used across the tamperguard workspace.
//!
//! This crate is intentionally boring:
//! - stable check IDs and failure codes
//! - the closed failure-kind enumeration
//! - data types for the emitted report
//! - well-known installer identifiers
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod kind;
pub mod receipt;
pub mod stores;

pub use explain::{Explanation, lookup_explanation};
pub use kind::{CheckId, FailureKind};
pub use receipt::{
    EvaluationMode, SCHEMA_REPORT_V1, TamperguardData, TamperguardReport, ToolMeta, Verdict,
    ViolationRecord,
};
