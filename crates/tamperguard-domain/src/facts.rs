//! The boundary between the engine and the host platform.

use crate::model::DeviceIdentity;
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;
use thiserror::Error;

/// A fact could not be obtained.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bundle {bundle} has no entry named {entry}")]
    BundleEntryMissing { bundle: Utf8PathBuf, entry: String },

    #[error("bundle {bundle} is not a readable archive: {reason}")]
    Bundle { bundle: Utf8PathBuf, reason: String },

    #[error("package {package_id} is not installed")]
    PackageNotFound { package_id: String },

    #[error("{0}")]
    Unavailable(String),
}

/// Answers questions about the running application and its host.
///
/// Implementations that are shared between threads must be safe for concurrent reads; the
/// engine never mutates a provider and never caches facts between calls.
pub trait FactsProvider {
    fn device_identity(&self) -> DeviceIdentity;

    /// Identifier of the running package, empty if unavailable.
    fn current_package_id(&self) -> String;

    /// Identifier of the channel that installed `package_id`, empty if side-loaded or unknown.
    fn installer_id(&self, package_id: &str) -> String;

    /// One normalized hex-colon fingerprint per signer certificate, in platform order.
    fn signer_fingerprints(&self, package_id: &str) -> Result<Vec<String>, ProviderError>;

    /// Location of the installed application bundle.
    fn bundle_path(&self) -> Result<Utf8PathBuf, ProviderError>;

    /// Sum of the CRC-32 values of `code_entry` and its numbered parts, see
    /// [`sum_entry_crcs`] for the contract.
    fn bundle_checksum(&self, bundle: &Utf8Path, code_entry: &str) -> Result<u64, ProviderError>;

    fn is_debug_build(&self) -> bool;

    fn is_debug_manifest(&self, package_id: &str) -> bool;
}

/// Name of numbered part `n` of `primary`. The number goes before the extension of the file
/// name, so `classes.dex` gives `classes2.dex` and `assets.v1/code` gives `assets.v1/code2`.
pub fn code_part_name(primary: &str, n: usize) -> String {
    let name_start = primary.rfind('/').map_or(0, |idx| idx + 1);
    match primary[name_start..].rfind('.') {
        Some(dot) if dot > 0 => {
            let (stem, ext) = primary.split_at(name_start + dot);
            format!("{stem}{n}{ext}")
        }
        _ => format!("{primary}{n}"),
    }
}

/// `primary`, then `classes2.dex`, `classes3.dex`, ... without an upper bound.
pub fn code_entry_names(primary: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(primary.to_string()).chain((2..).map(move |n| code_part_name(primary, n)))
}

/// Accumulate entry CRCs in order.
///
/// `code_entry` must exist. The first missing numbered part ends the summation, so a bundle
/// whose code is split into `classes.dex` and `classes2.dex` sums exactly those two.
pub fn sum_entry_crcs<F>(
    bundle: &Utf8Path,
    code_entry: &str,
    mut lookup: F,
) -> Result<u64, ProviderError>
where
    F: FnMut(&str) -> Result<Option<u32>, ProviderError>,
{
    let mut sum: u64 = 0;
    for (idx, entry) in code_entry_names(code_entry).enumerate() {
        match lookup(entry.as_str())? {
            Some(crc) => sum = sum.wrapping_add(u64::from(crc)),
            None if idx == 0 => {
                return Err(ProviderError::BundleEntryMissing {
                    bundle: bundle.to_path_buf(),
                    entry,
                });
            }
            None => break,
        }
    }
    Ok(sum)
}

/// CRC sum of `code_entry` and its numbered parts in the provider's bundle.
pub fn code_checksum<P: FactsProvider + ?Sized>(
    facts: &P,
    code_entry: &str,
) -> Result<u64, ProviderError> {
    let bundle = facts.bundle_path()?;
    facts.bundle_checksum(&bundle, code_entry)
}

/// Facts collected ahead of time, held in memory.
///
/// `signers: None` models a platform that refuses to report signers.
#[derive(Clone, Debug, Default)]
pub struct FactsSnapshot {
    pub device: DeviceIdentity,
    pub package_id: String,
    pub installer: String,
    pub signers: Option<Vec<String>>,
    pub bundle_path: Utf8PathBuf,
    /// CRC-32 of each bundle entry, by name.
    pub bundle_entries: BTreeMap<String, u32>,
    pub debug_build: bool,
    pub debug_manifest: bool,
}

impl FactsProvider for FactsSnapshot {
    fn device_identity(&self) -> DeviceIdentity {
        self.device.clone()
    }

    fn current_package_id(&self) -> String {
        self.package_id.clone()
    }

    fn installer_id(&self, package_id: &str) -> String {
        if package_id == self.package_id {
            self.installer.clone()
        } else {
            String::new()
        }
    }

    fn signer_fingerprints(&self, package_id: &str) -> Result<Vec<String>, ProviderError> {
        if package_id != self.package_id {
            return Err(ProviderError::PackageNotFound {
                package_id: package_id.to_string(),
            });
        }
        self.signers
            .clone()
            .ok_or_else(|| ProviderError::Unavailable("signers not reported".to_string()))
    }

    fn bundle_path(&self) -> Result<Utf8PathBuf, ProviderError> {
        Ok(self.bundle_path.clone())
    }

    fn bundle_checksum(&self, bundle: &Utf8Path, code_entry: &str) -> Result<u64, ProviderError> {
        sum_entry_crcs(bundle, code_entry, |name| Ok(self.bundle_entries.get(name).copied()))
    }

    fn is_debug_build(&self) -> bool {
        self.debug_build
    }

    fn is_debug_manifest(&self, package_id: &str) -> bool {
        package_id == self.package_id && self.debug_manifest
    }
}
