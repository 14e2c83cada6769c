use serde::{Deserialize, Serialize};

/// Build identification strings reported by the host device.
///
/// Fields missing from serialized input read as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceIdentity {
    pub product: String,
    pub manufacturer: String,
    pub brand: String,
    pub device: String,
    pub model: String,
    pub hardware: String,
    /// Full build fingerprint, e.g. `google/sdk_gphone_x86/generic_x86:11/...`.
    pub fingerprint: String,
}

/// The two independent debuggable signals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugSignals {
    /// Flag compiled into the build artifact.
    pub build: bool,
    /// Flag declared by the installed package manifest.
    pub manifest: bool,
}

impl DebugSignals {
    pub fn any(self) -> bool {
        self.build || self.manifest
    }

    /// Names of the sources that report debuggable, in a fixed order.
    pub fn tripped_sources(self) -> Vec<&'static str> {
        let mut sources = Vec::new();
        if self.build {
            sources.push("build flag");
        }
        if self.manifest {
            sources.push("manifest flag");
        }
        sources
    }
}
