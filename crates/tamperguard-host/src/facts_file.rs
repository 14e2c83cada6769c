use anyhow::Context;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use tamperguard_domain::DeviceIdentity;

/// On-disk description of an installed application and its device.
///
/// Relative paths are resolved against the directory holding the facts file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactsFile {
    #[serde(default)]
    pub device: DeviceIdentity,

    pub package_id: String,

    /// Installer id; empty or absent for side-loaded installs.
    #[serde(default)]
    pub installer: String,

    #[serde(default)]
    pub debug_build: bool,

    #[serde(default)]
    pub debug_manifest: bool,

    /// Fingerprints reported directly by the platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signers: Option<Vec<String>>,

    /// DER certificate files, hashed to MD5 fingerprints on each query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_certificates: Option<Vec<Utf8PathBuf>>,

    /// Installed application archive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<Utf8PathBuf>,
}

/// Parse a facts file body.
pub fn parse_facts_json(input: &str) -> anyhow::Result<FactsFile> {
    let facts: FactsFile = serde_json::from_str(input).context("parse facts JSON")?;
    Ok(facts)
}
