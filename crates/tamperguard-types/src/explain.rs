//! Explain registry for checks and failure codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to resolve a failure.
    pub remediation: &'static str,
    /// Before/after `tamperguard.toml` snippets, for check-level entries.
    pub examples: Option<ExamplePair>,
}

/// Before and after configuration examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Configuration that leaves the check disabled.
    pub before: &'static str,
    /// Configuration that enables the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_APP_DEBUG_MODE => Some(explain_debug_mode()),
        ids::CHECK_DEVICE_EMULATOR => Some(explain_emulator()),
        ids::CHECK_APP_PACKAGE_ID => Some(explain_package_id()),
        ids::CHECK_APP_INSTALLER => Some(explain_installer()),
        ids::CHECK_APP_SIGNATURE => Some(explain_signature()),
        ids::CHECK_APP_BUNDLE_CHECKSUM => Some(explain_bundle_checksum()),

        // Codes
        ids::CODE_DEBUG_MODE_DETECTED => Some(code(
            "Debug Mode Detected",
            "The application is debuggable: the build-time flag, the runtime manifest flag, or both are set.",
            "Ship a release build with the manifest `debuggable` attribute unset.",
        )),
        ids::CODE_EMULATOR_DETECTED => Some(code(
            "Emulator Detected",
            "At least five of the seven device identity signals match known emulator values.",
            "Run on physical hardware, or set `allow_emulator = true` for test environments.",
        )),
        ids::CODE_PACKAGE_ID_EMPTY => Some(code(
            "Package ID Empty",
            "The platform reported an empty package identifier for the running application. \
This indicates a platform anomaly rather than a renamed package.",
            "Investigate the host environment; a genuine installation always has a package identifier.",
        )),
        ids::CODE_PACKAGE_ID_NOT_ACCEPTED => Some(code(
            "Package ID Not Accepted",
            "The running package identifier is not in `accepted_package_ids`. A common sign of an \
application repackaged and redistributed under another name.",
            "Add every legitimate identifier (for example Lite and Pro variants) to `accepted_package_ids`.",
        )),
        ids::CODE_INSTALLER_EMPTY => Some(code(
            "Installer Empty",
            "No installer is recorded for the package: it was side-loaded rather than installed from a store.",
            "Install from an approved store, or clear `accepted_installers` to allow side-loading.",
        )),
        ids::CODE_INSTALLER_NOT_ACCEPTED => Some(code(
            "Installer Not Accepted",
            "The package was installed by a channel that is not in `accepted_installers`.",
            "Add the channel's installer id (or an alias such as `google-play`) to `accepted_installers`.",
        )),
        ids::CODE_SIGNATURES_EMPTY => Some(code(
            "No Signers",
            "The platform reported no signing certificates for the package.",
            "A genuine installed package is always signed; treat this as tampering or a platform fault.",
        )),
        ids::CODE_SIGNATURE_NOT_ACCEPTED => Some(code(
            "Signature Not Accepted",
            "None of the package's signer fingerprints is in `accepted_signatures`. The application \
was most likely re-signed with another key.",
            "Add the fingerprint of every legitimate signing key (release and debug keystores) to `accepted_signatures`.",
        )),
        ids::CODE_SIGNATURE_PROVIDER_ERROR => Some(code(
            "Signature Lookup Failed",
            "The signer certificates could not be read, so the signature policy could not be evaluated.",
            "Check that the package is installed and its certificates are readable.",
        )),
        ids::CODE_CHECKSUM_NOT_ACCEPTED => Some(code(
            "Checksum Not Accepted",
            "The CRC sum of the bundle's compiled code entries is not in `accepted_bundle_checksums`. \
The code was modified after the build.",
            "Record the checksum of each released build in `accepted_bundle_checksums`.",
        )),
        ids::CODE_CHECKSUM_PROVIDER_ERROR => Some(code(
            "Checksum Lookup Failed",
            "The installed bundle could not be opened, or its primary code entry is missing.",
            "Check the bundle path and `code_entry` setting.",
        )),
        ids::CODE_UNKNOWN_ERROR => Some(code(
            "Unknown Error",
            "A check aborted unexpectedly: the facts provider panicked while answering a query.",
            "Re-run with `-v` and inspect the log output; the provider, not the application, is at fault.",
        )),

        _ => None,
    }
}

/// List all known check IDs, in dispatch order.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_APP_DEBUG_MODE,
        ids::CHECK_DEVICE_EMULATOR,
        ids::CHECK_APP_PACKAGE_ID,
        ids::CHECK_APP_INSTALLER,
        ids::CHECK_APP_SIGNATURE,
        ids::CHECK_APP_BUNDLE_CHECKSUM,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_DEBUG_MODE_DETECTED,
        ids::CODE_EMULATOR_DETECTED,
        ids::CODE_PACKAGE_ID_EMPTY,
        ids::CODE_PACKAGE_ID_NOT_ACCEPTED,
        ids::CODE_INSTALLER_EMPTY,
        ids::CODE_INSTALLER_NOT_ACCEPTED,
        ids::CODE_SIGNATURES_EMPTY,
        ids::CODE_SIGNATURE_NOT_ACCEPTED,
        ids::CODE_SIGNATURE_PROVIDER_ERROR,
        ids::CODE_CHECKSUM_NOT_ACCEPTED,
        ids::CODE_CHECKSUM_PROVIDER_ERROR,
        ids::CODE_UNKNOWN_ERROR,
    ]
}

fn code(
    title: &'static str,
    description: &'static str,
    remediation: &'static str,
) -> Explanation {
    Explanation {
        title,
        description,
        remediation,
        examples: None,
    }
}

// --- Check-level explanations ---

fn explain_debug_mode() -> Explanation {
    Explanation {
        title: "Debug Mode",
        description: "\
Fails when the application runs in debug mode.

Two independent signals are consulted:
- the debuggable flag compiled into the build artifact
- the debuggable flag of the installed package manifest

Either one set is a failure. Both are always read, so a patched build flag
alone does not hide a debuggable manifest, and the failure names every
source that tripped.",
        remediation: "\
Ship release builds. Keep `allow_debug = true` only for development profiles.",
        examples: Some(ExamplePair {
            before: r#"allow_debug = true"#,
            after: r#"allow_debug = false"#,
        }),
    }
}

fn explain_emulator() -> Explanation {
    Explanation {
        title: "Emulator",
        description: "\
Scores seven device identity signals (product, manufacturer, brand, device,
model, hardware, build fingerprint) against values known to be reported by
emulators. Each matching signal adds one point. The device is classified as
an emulator only when the score is greater than four, so a customized
physical device matching a couple of signals is not rejected.",
        remediation: "\
Run on physical hardware. Test environments can set `allow_emulator = true`.",
        examples: Some(ExamplePair {
            before: r#"allow_emulator = true"#,
            after: r#"allow_emulator = false"#,
        }),
    }
}

fn explain_package_id() -> Explanation {
    Explanation {
        title: "Package Identifier",
        description: "\
Compares the running package identifier, case-insensitively, against the
accepted identifiers. Catches repackaged copies sold under another name.
An empty identifier is reported separately as a platform anomaly.",
        remediation: "\
List every identifier you publish under, including Lite/Pro variants.",
        examples: Some(ExamplePair {
            before: r#"accepted_package_ids = []"#,
            after: r#"accepted_package_ids = ["ru.lazard.sample", "ru.lazard.sample.Pro_Version"]"#,
        }),
    }
}

fn explain_installer() -> Explanation {
    Explanation {
        title: "Installer Channel",
        description: "\
Requires that the package was installed by one of the accepted distribution
channels. An empty installer means the package was side-loaded by hand.",
        remediation: "\
List the stores you distribute through. The aliases `google-play`, `amazon`
and `samsung` expand to their installer identifiers.",
        examples: Some(ExamplePair {
            before: r#"accepted_installers = []"#,
            after: r#"accepted_installers = ["google-play", "amazon"]"#,
        }),
    }
}

fn explain_signature() -> Explanation {
    Explanation {
        title: "Signing Certificate",
        description: "\
Compares the fingerprints of the package's signing certificates against the
accepted fingerprints. The check passes when any current signer matches any
accepted fingerprint.

Fingerprints are colon-separated hex digests of the certificate bytes (MD5 as
printed by `keytool -list -v`, or SHA-256). Comparison ignores case.",
        remediation: "\
Add the fingerprint of your release key (and debug key if debug builds are
allowed). `tamperguard fingerprint <cert.der>` prints it.",
        examples: Some(ExamplePair {
            before: r#"accepted_signatures = []"#,
            after: r#"accepted_signatures = ["CC:0C:FB:83:8C:88:A9:66:BB:0D:C9:C8:EB:A6:4F:32"]"#,
        }),
    }
}

fn explain_bundle_checksum() -> Explanation {
    Explanation {
        title: "Bundle Checksum",
        description: "\
Sums the CRC-32 of the compiled code entries in the installed bundle:
`classes.dex`, then `classes2.dex`, `classes3.dex` and so on until the first
missing part. The sum must equal one of the accepted values exactly.",
        remediation: "\
Record the checksum of every released build. Keep the values out of the code
being checked, for example in resources or native code.",
        examples: Some(ExamplePair {
            before: r#"accepted_bundle_checksums = []"#,
            after: r#"accepted_bundle_checksums = [3421780262]"#,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_check_id() {
        assert!(lookup_explanation(ids::CHECK_APP_DEBUG_MODE).is_some());
        assert!(lookup_explanation(ids::CHECK_DEVICE_EMULATOR).is_some());
        assert!(lookup_explanation(ids::CHECK_APP_BUNDLE_CHECKSUM).is_some());
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_explanation("unknown.check").is_none());
        assert!(lookup_explanation("unknown_code").is_none());
    }

    #[test]
    fn all_check_ids_are_valid() {
        for id in all_check_ids() {
            let exp = lookup_explanation(id)
                .unwrap_or_else(|| panic!("check_id {id} should be in registry"));
            assert!(exp.examples.is_some(), "check_id {id} should have examples");
        }
    }

    #[test]
    fn all_codes_are_valid() {
        for code in all_codes() {
            assert!(
                lookup_explanation(code).is_some(),
                "code {} should be in registry",
                code
            );
        }
    }

    #[test]
    fn registry_covers_every_failure_kind() {
        for kind in crate::FailureKind::ALL {
            assert!(all_codes().contains(&kind.code()), "{kind} missing");
        }
        for check in crate::CheckId::ALL {
            assert!(all_check_ids().contains(&check.as_str()), "{check} missing");
        }
    }
}
