//! Emulator heuristic.
//!
//! Seven independent identity signals are compared against values reported by the stock SDK
//! emulator and Genymotion. Each matching signal scores one point; the device is classified
//! as an emulator when the score exceeds [`EMULATOR_THRESHOLD`].

use crate::model::DeviceIdentity;
use serde::Serialize;

/// Scores at or below this value are treated as physical devices.
pub const EMULATOR_THRESHOLD: usize = 4;

pub const EMULATOR_PRODUCTS: &[&str] = &["sdk", "google_sdk", "sdk_x86", "vbox86p"];
pub const EMULATOR_MANUFACTURERS: &[&str] = &["unknown", "Genymotion"];
pub const EMULATOR_BRANDS: &[&str] = &["generic", "generic_x86"];
pub const EMULATOR_DEVICES: &[&str] = &["generic", "generic_x86", "vbox86p"];
pub const EMULATOR_MODELS: &[&str] = &["sdk", "google_sdk", "Android SDK built for x86"];
pub const EMULATOR_HARDWARE: &[&str] = &["goldfish", "vbox86"];
/// Matched as substrings of the build fingerprint.
pub const EMULATOR_FINGERPRINT_FRAGMENTS: &[&str] = &[
    "generic/sdk/generic",
    "generic_x86/sdk_x86/generic_x86",
    "generic/google_sdk/generic",
    "generic/vbox86p/vbox86p",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmulatorSignal {
    Product,
    Manufacturer,
    Brand,
    Device,
    Model,
    Hardware,
    Fingerprint,
}

impl EmulatorSignal {
    pub const ALL: [EmulatorSignal; 7] = [
        EmulatorSignal::Product,
        EmulatorSignal::Manufacturer,
        EmulatorSignal::Brand,
        EmulatorSignal::Device,
        EmulatorSignal::Model,
        EmulatorSignal::Hardware,
        EmulatorSignal::Fingerprint,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmulatorSignal::Product => "product",
            EmulatorSignal::Manufacturer => "manufacturer",
            EmulatorSignal::Brand => "brand",
            EmulatorSignal::Device => "device",
            EmulatorSignal::Model => "model",
            EmulatorSignal::Hardware => "hardware",
            EmulatorSignal::Fingerprint => "fingerprint",
        }
    }

    fn matches(self, identity: &DeviceIdentity) -> bool {
        match self {
            EmulatorSignal::Product => exact(&identity.product, EMULATOR_PRODUCTS),
            EmulatorSignal::Manufacturer => exact(&identity.manufacturer, EMULATOR_MANUFACTURERS),
            EmulatorSignal::Brand => exact(&identity.brand, EMULATOR_BRANDS),
            EmulatorSignal::Device => exact(&identity.device, EMULATOR_DEVICES),
            EmulatorSignal::Model => exact(&identity.model, EMULATOR_MODELS),
            EmulatorSignal::Hardware => exact(&identity.hardware, EMULATOR_HARDWARE),
            EmulatorSignal::Fingerprint => EMULATOR_FINGERPRINT_FRAGMENTS
                .iter()
                .any(|fragment| identity.fingerprint.contains(*fragment)),
        }
    }
}

fn exact(value: &str, table: &[&str]) -> bool {
    table.iter().any(|candidate| *candidate == value)
}

/// Signals that matched, in [`EmulatorSignal::ALL`] order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EmulatorScore {
    pub matched: Vec<EmulatorSignal>,
}

impl EmulatorScore {
    pub fn score(&self) -> usize {
        self.matched.len()
    }

    pub fn is_emulator(&self) -> bool {
        self.score() > EMULATOR_THRESHOLD
    }
}

/// Evaluate every signal; no early exit.
pub fn score(identity: &DeviceIdentity) -> EmulatorScore {
    EmulatorScore {
        matched: EmulatorSignal::ALL
            .into_iter()
            .filter(|signal| signal.matches(identity))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{emulator_identity, physical_identity};

    #[test]
    fn stock_emulator_matches_every_signal() {
        let result = score(&emulator_identity());
        assert_eq!(result.score(), 7);
        assert!(result.is_emulator());
    }

    #[test]
    fn physical_device_scores_zero() {
        let result = score(&physical_identity());
        assert_eq!(result.score(), 0);
        assert!(!result.is_emulator());
    }

    #[test]
    fn genymotion_identity_is_detected() {
        let identity = DeviceIdentity {
            product: "vbox86p".to_string(),
            manufacturer: "Genymotion".to_string(),
            brand: "generic".to_string(),
            device: "vbox86p".to_string(),
            model: "Custom Phone".to_string(),
            hardware: "vbox86".to_string(),
            fingerprint: "generic/vbox86p/vbox86p:5.1/LMY47D/eng.buildbot:userdebug/test-keys"
                .to_string(),
        };
        let result = score(&identity);
        assert_eq!(result.score(), 6);
        assert!(!result.matched.contains(&EmulatorSignal::Model));
        assert!(result.is_emulator());
    }

    #[test]
    fn exact_matches_are_case_sensitive() {
        let identity = DeviceIdentity {
            manufacturer: "genymotion".to_string(),
            ..physical_identity()
        };
        assert_eq!(score(&identity).score(), 0);
    }

    #[test]
    fn four_signals_stay_below_threshold() {
        let identity = DeviceIdentity {
            product: "sdk".to_string(),
            manufacturer: "unknown".to_string(),
            brand: "generic".to_string(),
            device: "generic".to_string(),
            ..physical_identity()
        };
        let result = score(&identity);
        assert_eq!(result.score(), 4);
        assert!(!result.is_emulator());
    }
}
