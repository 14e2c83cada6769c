use crate::facts::FactsProvider;
use crate::outcome::Violation;
use crate::policy::Policy;
use tamperguard_types::CheckId;

mod bundle_checksum;
mod debug_mode;
mod emulator;
mod installer;
mod package_id;
mod signature;
mod utils;


/// Run a single check. Disabled checks return `None` without touching `facts`.
pub fn run_check<P: FactsProvider + ?Sized>(
    check: CheckId,
    policy: &Policy,
    facts: &P,
) -> Option<Violation> {
    match check {
        CheckId::DebugMode => debug_mode::run(policy, facts),
        CheckId::Emulator => emulator::run(policy, facts),
        CheckId::PackageId => package_id::run(policy, facts),
        CheckId::Installer => installer::run(policy, facts),
        CheckId::Signature => signature::run(policy, facts),
        CheckId::BundleChecksum => bundle_checksum::run(policy, facts),
    }
}
