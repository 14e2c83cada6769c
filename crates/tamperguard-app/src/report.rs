use anyhow::Context;
use tamperguard_render::{RenderableData, RenderableReport, RenderableVerdict, RenderableViolation};
use tamperguard_types::{EvaluationMode, SCHEMA_REPORT_V1, TamperguardReport, Verdict};

pub fn parse_report_json(text: &str) -> anyhow::Result<TamperguardReport> {
    let report: TamperguardReport = serde_json::from_str(text).context("parse report json")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!(
            "unknown report schema: {} (expected {SCHEMA_REPORT_V1})",
            report.schema
        );
    }
    Ok(report)
}

pub fn serialize_report(report: &TamperguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &TamperguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Valid => RenderableVerdict::Valid,
            Verdict::Tampered => RenderableVerdict::Tampered,
        },
        violations: report
            .violations
            .iter()
            .map(|v| RenderableViolation {
                check_id: v.check_id.as_str().to_string(),
                code: v.code.code().to_string(),
                message: v.message.clone(),
                help: v.help.clone(),
            })
            .collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            mode: match report.data.mode {
                EvaluationMode::FailFast => "fail-fast".to_string(),
                EvaluationMode::CollectAll => "collect-all".to_string(),
            },
            checks_enabled: report
                .data
                .checks_enabled
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
        },
    }
}
