use std::collections::BTreeSet;
use tamperguard_types::CheckId;

/// Name of the primary compiled-code entry inside an Android package.
pub const DEFAULT_CODE_ENTRY: &str = "classes.dex";

/// Accepted values for each check.
///
/// An empty accepted-set disables the corresponding check, and `allow_*` flags set to `true`
/// disable the debug and emulator checks. The default policy therefore accepts everything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    pub accepted_installers: BTreeSet<String>,
    pub accepted_package_ids: BTreeSet<String>,
    pub accepted_signatures: BTreeSet<String>,
    pub accepted_bundle_checksums: BTreeSet<u64>,
    pub allow_emulator: bool,
    pub allow_debug: bool,
    /// Primary code entry; numbered parts (`classes2.dex`, ...) are derived from it.
    pub code_entry: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            accepted_installers: BTreeSet::new(),
            accepted_package_ids: BTreeSet::new(),
            accepted_signatures: BTreeSet::new(),
            accepted_bundle_checksums: BTreeSet::new(),
            allow_emulator: true,
            allow_debug: true,
            code_entry: DEFAULT_CODE_ENTRY.to_string(),
        }
    }
}

impl Policy {
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    pub fn is_enabled(&self, check: CheckId) -> bool {
        match check {
            CheckId::DebugMode => !self.allow_debug,
            CheckId::Emulator => !self.allow_emulator,
            CheckId::PackageId => !self.accepted_package_ids.is_empty(),
            CheckId::Installer => !self.accepted_installers.is_empty(),
            CheckId::Signature => !self.accepted_signatures.is_empty(),
            CheckId::BundleChecksum => !self.accepted_bundle_checksums.is_empty(),
        }
    }

    /// Enabled checks, in dispatch order.
    pub fn enabled_checks(&self) -> Vec<CheckId> {
        CheckId::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }
}

/// Builds an immutable [`Policy`].
#[derive(Clone, Debug, Default)]
pub struct PolicyBuilder {
    policy: Policy,
}

impl PolicyBuilder {
    pub fn accept_installers<I, S>(mut self, installers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy
            .accepted_installers
            .extend(installers.into_iter().map(Into::into));
        self
    }

    pub fn accept_package_ids<I, S>(mut self, package_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy
            .accepted_package_ids
            .extend(package_ids.into_iter().map(Into::into));
        self
    }

    pub fn accept_signatures<I, S>(mut self, fingerprints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy
            .accepted_signatures
            .extend(fingerprints.into_iter().map(Into::into));
        self
    }

    pub fn accept_bundle_checksums<I>(mut self, checksums: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        self.policy.accepted_bundle_checksums.extend(checksums);
        self
    }

    pub fn allow_emulator(mut self, allow: bool) -> Self {
        self.policy.allow_emulator = allow;
        self
    }

    pub fn allow_debug(mut self, allow: bool) -> Self {
        self.policy.allow_debug = allow;
        self
    }

    pub fn code_entry(mut self, entry: impl Into<String>) -> Self {
        self.policy.code_entry = entry.into();
        self
    }

    pub fn build(self) -> Policy {
        self.policy
    }
}
