//! Plain-text report formatting.
//!
//! The report is append-only: one header block, then one block per
//! category as each category's scan completes.

use std::{
    io::{self, Write},
    path::Path,
};

use chrono::{DateTime, Local};

use crate::domain::Counters;

/// Writes the statistics report.
///
/// Generic over the destination so the formatting can be exercised against
/// an in-memory buffer.
#[derive(Debug)]
pub struct ReportWriter<W> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    /// Creates a report writer and writes the header block: the report
    /// title, the run timestamp, and a separator rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(mut writer: W, started: DateTime<Local>) -> io::Result<Self> {
        writeln!(writer, "Statistics for BNB RDF data")?;
        writeln!(writer, "{}", started.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(writer)?;
        write!(writer, "{}", "=".repeat(30))?;
        Ok(Self { writer })
    }

    /// Appends the block for one scanned category: the label, source
    /// directory, file count, and the nine counters in fixed order.
    ///
    /// # Errors
    ///
    /// Returns an error if the block cannot be written.
    pub fn write_category(
        &mut self,
        label: &str,
        directory: &Path,
        files: usize,
        counters: &Counters,
    ) -> io::Result<()> {
        let w = &mut self.writer;
        write!(w, "\n\nStats for {label}:\n")?;
        writeln!(w, "Source directory: {}", directory.display())?;
        writeln!(w, "Number of files: {files}")?;
        writeln!(w, "{}\t RDF triples", counters.rdf_lines)?;
        writeln!(w, "{}\t BNB numbers", counters.bnb_numbers)?;
        writeln!(w, "{}\t links to Dewey info", counters.dewey)?;
        writeln!(w, "{}\t links to VIAF records for people", counters.viaf_person)?;
        writeln!(
            w,
            "{}\t links to VIAF records for organizations",
            counters.viaf_organization
        )?;
        writeln!(w, "{}\t links to ISNI records for people", counters.isni_person)?;
        writeln!(
            w,
            "{}\t links to ISNI records for organizations",
            counters.isni_organization
        )?;
        writeln!(w, "{}\t links to LCSH for topics", counters.lcsh_topic)?;
        writeln!(w, "{}\t links to LCSH for places", counters.lcsh_place)?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if buffered output cannot be flushed.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
