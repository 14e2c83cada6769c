//! The `diagnose` use case: report every raw fact without judging it.

use anyhow::Context;
use tamperguard_domain::FactsProvider;
use tamperguard_domain::diagnostics::{self, Diagnostics};
use tamperguard_settings::Overrides;

/// Input for the diagnose use case. The config only contributes the code entry name.
pub struct DiagnoseInput<'a> {
    pub config_text: &'a str,
    pub overrides: Overrides,
    pub facts: &'a dyn FactsProvider,
}

pub fn run_diagnose(input: DiagnoseInput<'_>) -> anyhow::Result<Diagnostics> {
    let resolved = crate::check::resolve(input.config_text, input.overrides)?;
    Ok(diagnostics::collect(input.facts, &resolved.policy.code_entry))
}

pub fn serialize_diagnostics(diagnostics: &Diagnostics) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(diagnostics).context("serialize diagnostics")
}
