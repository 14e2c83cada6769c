use crate::{RenderableReport, RenderableVerdict};

/// One line per violation, then a summary line.
///
/// Format: `{check_id}: {code}: {message}`
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    for v in &report.violations {
        out.push_str(&format!("{}: {}: {}\n", v.check_id, v.code, v.message));
    }

    let summary = match report.verdict {
        RenderableVerdict::Valid => format!(
            "valid ({} checks enabled, profile {})",
            report.data.checks_enabled.len(),
            report.data.profile
        ),
        RenderableVerdict::Tampered => format!(
            "tampered ({} of {} checks failed, profile {})",
            report.violations.len(),
            report.data.checks_enabled.len(),
            report.data.profile
        ),
    };
    out.push_str(&summary);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableViolation};

    #[test]
    fn renders_one_line_per_violation_and_summary() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Tampered,
            violations: vec![RenderableViolation {
                check_id: "app.installer".to_string(),
                code: "installer_empty".to_string(),
                message: "side-loaded".to_string(),
                help: Some("ignored in text output".to_string()),
            }],
            data: RenderableData {
                profile: "release".to_string(),
                mode: "collect_all".to_string(),
                checks_enabled: vec![
                    "app.debug_mode".to_string(),
                    "device.emulator".to_string(),
                    "app.installer".to_string(),
                ],
            },
        };

        let text = render_text(&report);
        assert_eq!(
            text,
            "app.installer: installer_empty: side-loaded\n\
             tampered (1 of 3 checks failed, profile release)\n"
        );
    }

    #[test]
    fn renders_valid_summary_only() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Valid,
            violations: Vec::new(),
            data: RenderableData {
                profile: "permissive".to_string(),
                mode: "fail_fast".to_string(),
                checks_enabled: Vec::new(),
            },
        };
        assert_eq!(
            render_text(&report),
            "valid (0 checks enabled, profile permissive)\n"
        );
    }
}
