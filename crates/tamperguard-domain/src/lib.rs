//! Pure integrity policy evaluation.
//!
//! Input: a [`Policy`] and a [`FactsProvider`] that answers questions about the running
//! application and its host.
//! Output: the first violated check, every violated check, or a boolean.
//!
//! The engine itself does no I/O. Facts are requested lazily and only for checks the policy
//! enables, so a disabled check can never fail because its fact source is broken.

#![forbid(unsafe_code)]

pub mod diagnostics;
pub mod emulator;
pub mod facts;
pub mod fingerprint;
pub mod model;
pub mod outcome;
pub mod policy;

pub mod checks;
mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate, evaluate_all, evaluate_as_bool, evaluate_with_mode};
pub use facts::{FactsProvider, FactsSnapshot, ProviderError};
pub use model::DeviceIdentity;
pub use outcome::{ValidationOutcome, Violation};
pub use policy::{Policy, PolicyBuilder};
