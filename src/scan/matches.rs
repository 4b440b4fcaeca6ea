//! The transient intermediate files holding extracted lines.

use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use super::lines::{LossyLines, count_lines};
use crate::domain::{CountMode, Counters, classify};

const IDS_FILE: &str = "ids";
const LINKS_FILE: &str = "links";

/// The two transient files accumulating matched lines for one category:
/// `ids` for identifier lines, `links` for link lines.
///
/// Created fresh per category, removing any leftovers from an earlier run,
/// and removed again once the category's counts have been tallied. Nothing
/// may persist between categories.
#[derive(Debug)]
pub struct MatchFiles {
    ids_path: PathBuf,
    links_path: PathBuf,
    ids: BufWriter<File>,
    links: BufWriter<File>,
}

impl MatchFiles {
    /// Creates fresh `ids` and `links` files in `dir`, removing any
    /// leftovers first.
    ///
    /// # Errors
    ///
    /// Returns an error if a leftover file cannot be removed or a fresh
    /// file cannot be created.
    pub fn create(dir: &Path) -> io::Result<Self> {
        let ids_path = dir.join(IDS_FILE);
        let links_path = dir.join(LINKS_FILE);
        remove_if_present(&ids_path)?;
        remove_if_present(&links_path)?;

        let ids = BufWriter::new(File::create(&ids_path)?);
        let links = BufWriter::new(File::create(&links_path)?);

        Ok(Self {
            ids_path,
            links_path,
            ids,
            links,
        })
    }

    /// Appends an identifier line, preserving its original text.
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be written.
    pub fn record_id(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.ids, "{line}")
    }

    /// Appends a link line, preserving its original text.
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be written.
    pub fn record_link(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.links, "{line}")
    }

    /// Path of the identifier match file.
    #[must_use]
    pub fn ids_path(&self) -> &Path {
        &self.ids_path
    }

    /// Path of the link match file.
    #[must_use]
    pub fn links_path(&self) -> &Path {
        &self.links_path
    }

    /// Flushes buffered matches and folds them into `counters`: the BNB
    /// total from the identifier file's line count under `mode`, and one
    /// increment per classified link line.
    ///
    /// # Errors
    ///
    /// Returns an error if either match file cannot be flushed or read
    /// back.
    pub fn tally(&mut self, counters: &mut Counters, mode: CountMode) -> io::Result<()> {
        self.ids.flush()?;
        self.links.flush()?;

        let raw_ids = count_lines(BufReader::new(File::open(&self.ids_path)?))?;
        counters.bnb_numbers = mode.bnb_total(raw_ids);

        let mut lines = LossyLines::new(BufReader::new(File::open(&self.links_path)?));
        while let Some(line) = lines.next_line()? {
            if let Some(kind) = classify::classify_link(&line) {
                counters.record(kind);
            }
        }
        Ok(())
    }

    /// Removes both match files.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be deleted.
    pub fn remove(self) -> io::Result<()> {
        drop(self.ids);
        drop(self.links);
        fs::remove_file(&self.ids_path)?;
        fs::remove_file(&self.links_path)
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(error),
    }
}
