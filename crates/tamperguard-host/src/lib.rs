//! Host adapters: answer fact queries from files on disk.
//!
//! This crate is allowed to do filesystem IO. It never caches facts: every query re-reads the
//! certificate files or reopens the bundle archive, so a provider always reflects what is on
//! disk at the time of the query.

#![forbid(unsafe_code)]

mod bundle;
mod facts_file;
mod provider;

pub use bundle::{bundle_checksum, entry_crc};
pub use facts_file::{FactsFile, parse_facts_json};
pub use provider::SnapshotProvider;
