use crate::bundle;
use crate::facts_file::{FactsFile, parse_facts_json};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use tamperguard_domain::fingerprint::{md5_fingerprint, normalize_fingerprint};
use tamperguard_domain::{DeviceIdentity, FactsProvider, ProviderError};

/// [`FactsProvider`] backed by a facts file plus the certificate and bundle files it names.
#[derive(Clone, Debug)]
pub struct SnapshotProvider {
    facts: FactsFile,
    base_dir: Utf8PathBuf,
}

impl SnapshotProvider {
    /// Read and parse a facts file. Relative paths inside it resolve against its directory.
    pub fn load(path: &Utf8Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read facts file {path}"))?;
        let facts = parse_facts_json(&text).with_context(|| format!("load facts file {path}"))?;
        let base_dir = path
            .parent()
            .map(Utf8Path::to_path_buf)
            .unwrap_or_default();
        tracing::debug!(path = %path, package_id = %facts.package_id, "loaded facts file");
        Ok(Self::new(facts, base_dir))
    }

    pub fn new(facts: FactsFile, base_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            facts,
            base_dir: base_dir.into(),
        }
    }

    pub fn facts(&self) -> &FactsFile {
        &self.facts
    }

    fn resolve(&self, path: &Utf8Path) -> Utf8PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    fn owns(&self, package_id: &str) -> bool {
        package_id == self.facts.package_id
    }

    fn certificate_fingerprint(&self, certificate: &Utf8Path) -> Result<String, ProviderError> {
        let path = self.resolve(certificate);
        let bytes = std::fs::read(&path).map_err(|source| ProviderError::Io {
            path: path.clone(),
            source,
        })?;
        let fingerprint = md5_fingerprint(&bytes);
        tracing::debug!(certificate = %path, %fingerprint, "hashed signer certificate");
        Ok(fingerprint)
    }
}

impl FactsProvider for SnapshotProvider {
    fn device_identity(&self) -> DeviceIdentity {
        self.facts.device.clone()
    }

    fn current_package_id(&self) -> String {
        self.facts.package_id.clone()
    }

    fn installer_id(&self, package_id: &str) -> String {
        if self.owns(package_id) {
            self.facts.installer.clone()
        } else {
            String::new()
        }
    }

    fn signer_fingerprints(&self, package_id: &str) -> Result<Vec<String>, ProviderError> {
        if !self.owns(package_id) {
            return Err(ProviderError::PackageNotFound {
                package_id: package_id.to_string(),
            });
        }
        if self.facts.signers.is_none() && self.facts.signer_certificates.is_none() {
            return Err(ProviderError::Unavailable(
                "facts file lists no signers or signer certificates".to_string(),
            ));
        }

        let mut fingerprints: Vec<String> = self
            .facts
            .signers
            .iter()
            .flatten()
            .map(|s| normalize_fingerprint(s))
            .collect();
        for certificate in self.facts.signer_certificates.iter().flatten() {
            fingerprints.push(self.certificate_fingerprint(certificate)?);
        }
        Ok(fingerprints)
    }

    fn bundle_path(&self) -> Result<Utf8PathBuf, ProviderError> {
        self.facts
            .bundle
            .as_deref()
            .map(|bundle| self.resolve(bundle))
            .ok_or_else(|| ProviderError::Unavailable("facts file names no bundle".to_string()))
    }

    fn bundle_checksum(&self, bundle: &Utf8Path, code_entry: &str) -> Result<u64, ProviderError> {
        bundle::bundle_checksum(bundle, code_entry)
    }

    fn is_debug_build(&self) -> bool {
        self.facts.debug_build
    }

    fn is_debug_manifest(&self, package_id: &str) -> bool {
        self.owns(package_id) && self.facts.debug_manifest
    }
}
