//! Batch statistics reporting for BNB RDF data.
//!
//! Scans directories of line-delimited RDF triple files, counts lines and
//! fixed triple patterns (BNB identifier assignments and links to external
//! authority vocabularies), and aggregates the counts per category for a
//! plain-text report.

pub mod domain;
pub use domain::{Categories, Category, CountMode, Counters, LinkKind};

/// Filesystem scanning and transient match-file management.
pub mod scan;
pub use scan::{MatchFiles, scan_directory};

/// Plain-text report formatting.
pub mod report;
pub use report::ReportWriter;
