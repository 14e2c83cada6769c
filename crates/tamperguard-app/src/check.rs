//! The `check` use case: resolve the policy, evaluate it, and produce a report.

use anyhow::Context;
use tamperguard_domain::{FactsProvider, evaluate_with_mode};
use tamperguard_settings::{Overrides, ResolvedConfig};
use tamperguard_types::{
    EvaluationMode, SCHEMA_REPORT_V1, TamperguardData, TamperguardReport, ToolMeta, Verdict,
};
use time::OffsetDateTime;

/// Input for the check use case.
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    pub facts: &'a dyn FactsProvider,
    pub mode: EvaluationMode,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: TamperguardReport,
    /// The resolved configuration used.
    pub resolved: ResolvedConfig,
}

pub(crate) fn resolve(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        tamperguard_settings::TamperguardConfigV1::default()
    } else {
        tamperguard_settings::parse_config_toml(config_text).context("parse config")?
    };

    tamperguard_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Run the check use case: parse config, resolve the policy, evaluate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = resolve(input.config_text, input.overrides)?;
    let violations = evaluate_with_mode(&resolved.policy, input.facts, input.mode);

    let finished_at = OffsetDateTime::now_utc();

    let verdict = if violations.is_empty() {
        Verdict::Valid
    } else {
        Verdict::Tampered
    };
    tracing::info!(
        profile = %resolved.profile,
        violations = violations.len(),
        "verdict: {verdict:?}"
    );

    let report = TamperguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "tamperguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        violations: violations.iter().map(|v| v.to_record()).collect(),
        data: TamperguardData {
            profile: resolved.profile.clone(),
            mode: input.mode,
            checks_enabled: resolved.policy.enabled_checks(),
            violations_total: u32::try_from(violations.len()).unwrap_or(u32::MAX),
        },
    };

    Ok(CheckOutput { report, resolved })
}

/// Map verdict to exit code: 0 = valid, 2 = tampered.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Valid => 0,
        Verdict::Tampered => 2,
    }
}
