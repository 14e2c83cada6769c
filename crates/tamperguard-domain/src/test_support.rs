use crate::emulator::EmulatorSignal;
use crate::facts::{FactsProvider, FactsSnapshot, ProviderError};
use crate::model::DeviceIdentity;
use crate::policy::Policy;
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;
use tamperguard_types::stores;

pub const PACKAGE_ID: &str = "ru.lazard.sample";
pub const TRUSTED_SIGNER: &str = "CC:0C:FB:83:8C:88:A9:66:BB:0D:C9:C8:EB:A6:4F:32";
pub const UNTRUSTED_SIGNER: &str = "AC:AC:AB:A3:AC:88:A9:66:AB:0D:C9:A8:AB:A6:AF:A2";
pub const CODE_CRC: u32 = 0xCBF4_3926;

pub fn physical_identity() -> DeviceIdentity {
    DeviceIdentity {
        product: "cheetah".to_string(),
        manufacturer: "Google".to_string(),
        brand: "google".to_string(),
        device: "cheetah".to_string(),
        model: "Pixel 7 Pro".to_string(),
        hardware: "cheetah".to_string(),
        fingerprint: "google/cheetah/cheetah:14/UQ1A.240205.004/11269751:user/release-keys"
            .to_string(),
    }
}

pub fn emulator_identity() -> DeviceIdentity {
    DeviceIdentity {
        product: "sdk".to_string(),
        manufacturer: "unknown".to_string(),
        brand: "generic".to_string(),
        device: "generic".to_string(),
        model: "sdk".to_string(),
        hardware: "goldfish".to_string(),
        fingerprint: "generic/sdk/generic:4.4/KK/123:eng/test-keys".to_string(),
    }
}

/// A physical identity with exactly the given signals replaced by emulator values.
pub fn identity_matching(signals: &[EmulatorSignal]) -> DeviceIdentity {
    let emulator = emulator_identity();
    let mut identity = physical_identity();
    for signal in signals {
        match signal {
            EmulatorSignal::Product => identity.product = emulator.product.clone(),
            EmulatorSignal::Manufacturer => identity.manufacturer = emulator.manufacturer.clone(),
            EmulatorSignal::Brand => identity.brand = emulator.brand.clone(),
            EmulatorSignal::Device => identity.device = emulator.device.clone(),
            EmulatorSignal::Model => identity.model = emulator.model.clone(),
            EmulatorSignal::Hardware => identity.hardware = emulator.hardware.clone(),
            EmulatorSignal::Fingerprint => identity.fingerprint = emulator.fingerprint.clone(),
        }
    }
    identity
}

/// A release build installed from Google Play on a physical device.
pub fn genuine_facts() -> FactsSnapshot {
    let mut bundle_entries = BTreeMap::new();
    bundle_entries.insert("classes.dex".to_string(), CODE_CRC);
    bundle_entries.insert("AndroidManifest.xml".to_string(), 7);

    FactsSnapshot {
        device: physical_identity(),
        package_id: PACKAGE_ID.to_string(),
        installer: stores::GOOGLE_PLAY_STORE.to_string(),
        signers: Some(vec![TRUSTED_SIGNER.to_string()]),
        bundle_path: Utf8PathBuf::from("/data/app/ru.lazard.sample/base.apk"),
        bundle_entries,
        debug_build: false,
        debug_manifest: false,
    }
}

/// Every check enabled, accepting exactly [`genuine_facts`].
pub fn strict_policy() -> Policy {
    Policy::builder()
        .allow_debug(false)
        .allow_emulator(false)
        .accept_package_ids([PACKAGE_ID])
        .accept_installers([stores::GOOGLE_PLAY_STORE])
        .accept_signatures([TRUSTED_SIGNER])
        .accept_bundle_checksums([u64::from(CODE_CRC)])
        .build()
}

/// Provider that panics on any query; proves a disabled check never asks for its fact.
pub struct RefusingFacts;

impl FactsProvider for RefusingFacts {
    fn device_identity(&self) -> DeviceIdentity {
        panic!("device identity queried")
    }

    fn current_package_id(&self) -> String {
        panic!("package id queried")
    }

    fn installer_id(&self, _package_id: &str) -> String {
        panic!("installer queried")
    }

    fn signer_fingerprints(&self, _package_id: &str) -> Result<Vec<String>, ProviderError> {
        panic!("signers queried")
    }

    fn bundle_path(&self) -> Result<Utf8PathBuf, ProviderError> {
        panic!("bundle path queried")
    }

    fn bundle_checksum(&self, _bundle: &Utf8Path, _code_entry: &str) -> Result<u64, ProviderError> {
        panic!("bundle checksum queried")
    }

    fn is_debug_build(&self) -> bool {
        panic!("build flag queried")
    }

    fn is_debug_manifest(&self, _package_id: &str) -> bool {
        panic!("manifest flag queried")
    }
}

/// Genuine facts whose signer and bundle lookups fail with I/O errors.
pub struct BrokenIoFacts(pub FactsSnapshot);

impl FactsProvider for BrokenIoFacts {
    fn device_identity(&self) -> DeviceIdentity {
        self.0.device_identity()
    }

    fn current_package_id(&self) -> String {
        self.0.current_package_id()
    }

    fn installer_id(&self, package_id: &str) -> String {
        self.0.installer_id(package_id)
    }

    fn signer_fingerprints(&self, _package_id: &str) -> Result<Vec<String>, ProviderError> {
        Err(ProviderError::Io {
            path: Utf8PathBuf::from("/data/system/packages.xml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        })
    }

    fn bundle_path(&self) -> Result<Utf8PathBuf, ProviderError> {
        self.0.bundle_path()
    }

    fn bundle_checksum(&self, bundle: &Utf8Path, _code_entry: &str) -> Result<u64, ProviderError> {
        Err(ProviderError::Io {
            path: bundle.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        })
    }

    fn is_debug_build(&self) -> bool {
        self.0.is_debug_build()
    }

    fn is_debug_manifest(&self, package_id: &str) -> bool {
        self.0.is_debug_manifest(package_id)
    }
}
