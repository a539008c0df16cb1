//! One-shot data patches for the GST compliance engine
//!
//! Patches run once during an upgrade. They are best effort: a patch that
//! fails logs the failure and reports it in its [`PatchOutcome`] rather than
//! aborting the batch it runs in.
//!
//! Reports are reached through the [`ReportStore`] trait so the same patch
//! runs against the framework's database, a JSON fixture file
//! ([`JsonFileReportStore`]) or memory ([`InMemoryReportStore`]).

pub mod legacy_reports;
pub mod store;

pub use legacy_reports::*;
pub use store::*;
