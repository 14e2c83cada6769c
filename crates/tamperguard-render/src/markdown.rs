use crate::{RenderableReport, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Tamperguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Valid => "VALID",
        RenderableVerdict::Tampered => "TAMPERED",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Profile: `{}` ({})\n- Violations: {}\n",
        verdict,
        report.data.profile,
        report.data.mode,
        report.violations.len()
    ));

    if report.data.checks_enabled.is_empty() {
        out.push_str("- Checks enabled: none\n\n");
    } else {
        let checks: Vec<String> = report
            .data
            .checks_enabled
            .iter()
            .map(|c| format!("`{c}`"))
            .collect();
        out.push_str(&format!("- Checks enabled: {}\n\n", checks.join(", ")));
    }

    if report.violations.is_empty() {
        out.push_str("No violations.\n");
        return out;
    }

    out.push_str("## Violations\n\n");

    for v in &report.violations {
        out.push_str(&format!("- `{}` / `{}`: {}\n", v.check_id, v.code, v.message));
        if let Some(help) = &v.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableViolation};

    fn data(checks: &[&str]) -> RenderableData {
        RenderableData {
            profile: "release".to_string(),
            mode: "fail_fast".to_string(),
            checks_enabled: checks.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn renders_valid_report() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Valid,
            violations: Vec::new(),
            data: data(&["app.debug_mode", "device.emulator"]),
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **VALID**"));
        assert!(md.contains("`app.debug_mode`, `device.emulator`"));
        assert!(md.contains("No violations"));
    }

    #[test]
    fn renders_violations_with_help() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Tampered,
            violations: vec![
                RenderableViolation {
                    check_id: "app.signature".to_string(),
                    code: "signature_not_accepted".to_string(),
                    message: "no accepted signer".to_string(),
                    help: Some("add the release fingerprint".to_string()),
                },
                RenderableViolation {
                    check_id: "app.bundle_checksum".to_string(),
                    code: "checksum_not_accepted".to_string(),
                    message: "bundle rebuilt".to_string(),
                    help: None,
                },
            ],
            data: data(&["app.signature", "app.bundle_checksum"]),
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **TAMPERED**"));
        assert!(md.contains("Violations: 2"));
        assert!(md.contains("## Violations"));
        assert!(md.contains("`app.signature` / `signature_not_accepted`: no accepted signer"));
        assert!(md.contains("help: add the release fingerprint"));
        assert_eq!(md.matches("help:").count(), 1);
    }

    #[test]
    fn renders_no_enabled_checks() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Valid,
            violations: Vec::new(),
            data: data(&[]),
        };
        assert!(render_markdown(&report).contains("Checks enabled: none"));
    }
}
