//! Command-line driver for the statistics reporter.

use std::{
    io::{self, BufRead, BufWriter},
    path::{Path, PathBuf},
};

mod terminal;

use bnbstats::{Categories, CountMode, Counters, MatchFiles, ReportWriter, scan_directory};
use chrono::{DateTime, Local};
use clap::ArgAction;
use terminal::Colorize;
use tracing::instrument;

/// A tool to produce statistics from directories of BNB RDF triple files.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Path to the configuration file mapping category labels to
    /// directories of triple files
    #[arg(short, long, default_value = "bnb_rdf_stats.cfg")]
    config: PathBuf,

    /// Path to save the report to (defaults to a date-stamped file in the
    /// working directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report exact line and match counts instead of reproducing the
    /// historical trailing-blank-line convention
    #[arg(long)]
    exact: bool,
}

impl Cli {
    /// Runs the full scan-and-report pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error for the fatal failure classes: an unusable
    /// configuration or output path, or an I/O failure on the report or
    /// the intermediate match files.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        println!("========================================");
        println!("bnb-rdf-stats");
        println!("========================================");
        println!("A tool to produce statistics from files of BNB RDF data\n");

        let started = Local::now();
        let mode = if self.exact {
            CountMode::Exact
        } else {
            CountMode::Legacy
        };

        check_extension(&self.config, "cfg", "config")?;
        if !self.config.is_file() {
            anyhow::bail!("the config file {} cannot be found", self.config.display());
        }

        let output = self.output.unwrap_or_else(|| {
            PathBuf::from(format!("bnb_rdf_stats_{}.txt", started.format("%Y-%m-%d")))
        });
        check_extension(&output, "txt", "output")?;

        let work_dir = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("could not determine the working directory: {e}"))?;

        execute(&self.config, &output, &work_dir, mode, started)?;

        println!("\n{}", "All processing complete".success());
        println!("Report written to {}", output.display());
        Ok(())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Runs the pipeline: load the categories, then scan, tally, and report
/// each one in insertion order, recreating and removing the intermediate
/// match files around every category.
#[instrument(level = "debug", skip(started))]
fn execute(
    config: &Path,
    output: &Path,
    work_dir: &Path,
    mode: CountMode,
    started: DateTime<Local>,
) -> anyhow::Result<()> {
    let categories = Categories::load(config)
        .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", config.display()))?;

    let file = std::fs::File::create(output)
        .map_err(|e| anyhow::anyhow!("failed to create output file {}: {e}", output.display()))?;
    let mut report = ReportWriter::new(BufWriter::new(file), started)
        .map_err(|e| anyhow::anyhow!("failed to write the report header: {e}"))?;

    for category in &categories {
        let label = category.label();
        let directory = category.directory();
        println!("\nReading files in the {label} directory ...");
        println!("{}", directory.display().to_string().dim());

        let mut counters = Counters::default();
        let mut matches = MatchFiles::create(work_dir)
            .map_err(|e| anyhow::anyhow!("failed to create intermediate match files: {e}"))?;

        let files = scan_directory(directory, &mut counters, &mut matches, mode)
            .map_err(|e| anyhow::anyhow!("failed to record matched lines: {e}"))?;
        matches
            .tally(&mut counters, mode)
            .map_err(|e| anyhow::anyhow!("failed to tally matched lines: {e}"))?;

        report
            .write_category(label, directory, files, &counters)
            .map_err(|e| anyhow::anyhow!("failed to write the report section for {label}: {e}"))?;
        matches
            .remove()
            .map_err(|e| anyhow::anyhow!("failed to remove intermediate match files: {e}"))?;

        if files == 0 {
            println!(
                "{}",
                format!("no triple files found in the {label} directory").warning()
            );
        } else {
            println!(
                "{}",
                format!(
                    "{files} triple files, {} BNB numbers",
                    counters.bnb_numbers
                )
                .success()
            );
        }
    }

    report
        .finish()
        .map_err(|e| anyhow::anyhow!("failed to flush the report: {e}"))?;
    Ok(())
}

/// Validates that `path` carries the expected filename extension.
fn check_extension(path: &Path, expected: &str, function: &str) -> anyhow::Result<()> {
    if path.extension().and_then(std::ffi::OsStr::to_str) == Some(expected) {
        return Ok(());
    }
    anyhow::bail!("the {function} file should have the extension .{expected}")
}

/// Prints the acknowledgment prompt and waits for Enter, so an
/// interactively-launched console window stays open long enough to read
/// the diagnostic.
pub fn prompt_to_exit() {
    eprint!("\nPress [Enter] to exit...");
    let stdin = io::stdin();
    let mut line = String::new();
    let _ = stdin.lock().read_line(&mut line);
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("stats.cfg");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn execute_writes_one_section_per_valid_category() {
        let tmp = tempdir().unwrap();
        let books = tmp.path().join("books");
        fs::create_dir_all(&books).unwrap();
        fs::write(books.join("a.nt"), "<s> <p> <o> .\n").unwrap();

        let config = write_config(
            tmp.path(),
            &format!(
                "a line with no separator\nbooks: {}\nghosts: {}\n",
                books.display(),
                tmp.path().join("does-not-exist").display()
            ),
        );
        let output = tmp.path().join("report.txt");

        execute(&config, &output, tmp.path(), CountMode::Legacy, Local::now()).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text.matches("Stats for ").count(), 1);
        assert!(text.contains("Stats for books:"));
        assert!(text.contains("Number of files: 1"));
    }

    #[test]
    fn execute_reports_legacy_counts_for_empty_category() {
        let tmp = tempdir().unwrap();
        let empty = tmp.path().join("empty");
        fs::create_dir_all(&empty).unwrap();

        let config = write_config(tmp.path(), &format!("empty: {}\n", empty.display()));
        let output = tmp.path().join("report.txt");

        execute(&config, &output, tmp.path(), CountMode::Legacy, Local::now()).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("0\t RDF triples"));
        assert!(text.contains("1\t BNB numbers"));
        assert!(text.contains("0\t links to Dewey info"));
        assert!(text.contains("0\t links to LCSH for places"));
    }

    #[test]
    fn execute_counts_viaf_person_link() {
        let tmp = tempdir().unwrap();
        let books = tmp.path().join("books");
        fs::create_dir_all(&books).unwrap();
        fs::write(
            books.join("a.nt"),
            "<http://bnb.data.bl.uk/id/resource/123456789> \
             <http://www.bl.uk/schemas/bibliographic/blterms#bnb> \"GB1\" .\n\
             <http://bnb.data.bl.uk/id/person/123456789> \
             <http://www.w3.org/2002/07/owl#sameAs> <http://viaf.org/viaf/1> .\n",
        )
        .unwrap();

        let config = write_config(tmp.path(), &format!("books: {}\n", books.display()));
        let output = tmp.path().join("report.txt");

        execute(&config, &output, tmp.path(), CountMode::Legacy, Local::now()).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("1\t links to VIAF records for people"));
        assert!(text.contains("0\t links to VIAF records for organizations"));
        assert!(text.contains("0\t links to ISNI records for people"));
    }

    #[test]
    fn execute_removes_intermediate_files() {
        let tmp = tempdir().unwrap();
        let books = tmp.path().join("books");
        fs::create_dir_all(&books).unwrap();

        let config = write_config(tmp.path(), &format!("books: {}\n", books.display()));
        let output = tmp.path().join("report.txt");

        execute(&config, &output, tmp.path(), CountMode::Legacy, Local::now()).unwrap();

        assert!(!tmp.path().join("ids").exists());
        assert!(!tmp.path().join("links").exists());
    }

    #[test]
    fn execute_overwrites_an_existing_report() {
        let tmp = tempdir().unwrap();
        let config = write_config(tmp.path(), "\n");
        let output = tmp.path().join("report.txt");
        fs::write(&output, "left over from a previous run").unwrap();

        execute(&config, &output, tmp.path(), CountMode::Legacy, Local::now()).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("Statistics for BNB RDF data"));
        assert!(!text.contains("left over"));
    }

    #[test]
    fn check_extension_accepts_matching_suffix() {
        assert!(check_extension(Path::new("stats.cfg"), "cfg", "config").is_ok());
        assert!(check_extension(Path::new("/tmp/out.txt"), "txt", "output").is_ok());
    }

    #[test]
    fn check_extension_rejects_other_suffixes() {
        assert!(check_extension(Path::new("stats.ini"), "cfg", "config").is_err());
        assert!(check_extension(Path::new("stats"), "cfg", "config").is_err());
    }
}
