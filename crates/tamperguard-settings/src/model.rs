use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "tamperguard.config.v1";

/// `tamperguard.toml` schema v1.
///
/// Every key is optional; a key that is present replaces the profile's value, so
/// `accepted_installers = []` switches the installer check off even under `release`.
/// Unknown keys are rejected: a misspelled key would otherwise silently disable a check.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TamperguardConfigV1 {
    /// Optional schema string for tooling (`tamperguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `permissive` (default) or `release`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_debug: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_emulator: Option<bool>,

    /// Installer ids or store aliases (`google-play`, `amazon`, `samsung`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_installers: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_package_ids: Option<Vec<String>>,

    /// MD5 or SHA-256 signer fingerprints, colon-separated hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_signatures: Option<Vec<String>>,

    /// Sums of code entry CRC-32 values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_bundle_checksums: Option<Vec<u64>>,

    /// Primary compiled-code entry inside the bundle (default `classes.dex`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_entry: Option<String>,
}
