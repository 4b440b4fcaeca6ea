//! Category configuration: a mapping of labels to scan directories.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// A named directory of RDF triple files to be scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    label: String,
    directory: PathBuf,
}

impl Category {
    /// The category label, as written in the configuration file.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The directory this category scans.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// The categories read from a configuration file, in the order they were
/// encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories(Vec<Category>);

impl Categories {
    /// Loads categories from a configuration file.
    ///
    /// Each meaningful line has the form `label : directory`, with both
    /// parts trimmed of surrounding whitespace. Lines without a colon and
    /// lines with an empty label are ignored. An entry whose directory does
    /// not exist on disk is skipped with a warning. A repeated label
    /// overwrites the stored directory but keeps its original position, so
    /// report ordering stays deterministic.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file itself cannot be read. Invalid
    /// bytes in the file are replaced rather than rejected.
    pub fn load(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    fn parse(content: &str) -> Self {
        let mut entries: Vec<Category> = Vec::new();

        for line in content.lines() {
            let Some((label, directory)) = line.split_once(':') else {
                continue;
            };
            let label = label.trim();
            let directory = Path::new(directory.trim());

            if label.is_empty() {
                tracing::debug!("ignoring config line with empty label: {line:?}");
                continue;
            }
            if !directory.is_dir() {
                tracing::warn!(
                    "the {label} directory {} could not be found; skipping",
                    directory.display()
                );
                continue;
            }

            if let Some(existing) = entries.iter_mut().find(|entry| entry.label == label) {
                existing.directory = directory.to_path_buf();
            } else {
                entries.push(Category {
                    label: label.to_string(),
                    directory: directory.to_path_buf(),
                });
            }
        }

        Self(entries)
    }

    /// Iterates over the categories in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.0.iter()
    }

    /// The number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no categories were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Categories {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn parse_preserves_insertion_order() {
        let tmp = tempdir().unwrap();
        let books = tmp.path().join("books");
        let serials = tmp.path().join("serials");
        std::fs::create_dir_all(&books).unwrap();
        std::fs::create_dir_all(&serials).unwrap();

        let content = format!("books: {}\nserials: {}\n", books.display(), serials.display());
        let categories = Categories::parse(&content);

        let labels: Vec<_> = categories.iter().map(Category::label).collect();
        assert_eq!(labels, ["books", "serials"]);
        assert_eq!(categories.len(), 2);
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let tmp = tempdir().unwrap();
        let books = tmp.path().join("books");
        std::fs::create_dir_all(&books).unwrap();

        let content = format!("this line has no separator\nbooks: {}\n", books.display());
        let categories = Categories::parse(&content);

        assert_eq!(categories.len(), 1);
        assert_eq!(categories.iter().next().unwrap().label(), "books");
    }

    #[test]
    fn missing_directory_is_skipped() {
        let tmp = tempdir().unwrap();
        let books = tmp.path().join("books");
        std::fs::create_dir_all(&books).unwrap();

        let content = format!(
            "ghosts: {}\nbooks: {}\n",
            tmp.path().join("does-not-exist").display(),
            books.display()
        );
        let categories = Categories::parse(&content);

        let labels: Vec<_> = categories.iter().map(Category::label).collect();
        assert_eq!(labels, ["books"]);
    }

    #[test]
    fn empty_label_is_ignored() {
        let tmp = tempdir().unwrap();
        let content = format!(" : {}\n", tmp.path().display());

        assert!(Categories::parse(&content).is_empty());
    }

    #[test]
    fn duplicate_label_overwrites_in_place() {
        let tmp = tempdir().unwrap();
        let first = tmp.path().join("first");
        let second = tmp.path().join("second");
        let other = tmp.path().join("other");
        std::fs::create_dir_all(&first).unwrap();
        std::fs::create_dir_all(&second).unwrap();
        std::fs::create_dir_all(&other).unwrap();

        let content = format!(
            "books: {}\nserials: {}\nbooks: {}\n",
            first.display(),
            other.display(),
            second.display()
        );
        let categories = Categories::parse(&content);

        let entries: Vec<_> = categories
            .iter()
            .map(|c| (c.label().to_string(), c.directory().to_path_buf()))
            .collect();
        assert_eq!(
            entries,
            [
                ("books".to_string(), second),
                ("serials".to_string(), other)
            ]
        );
    }

    #[test]
    fn whitespace_around_parts_is_trimmed() {
        let tmp = tempdir().unwrap();
        let content = format!("  books  :   {}  \n", tmp.path().display());
        let categories = Categories::parse(&content);

        let category = categories.iter().next().unwrap();
        assert_eq!(category.label(), "books");
        assert_eq!(category.directory(), tmp.path());
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("missing.cfg");

        assert!(Categories::load(&missing).is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let tmp = tempdir().unwrap();
        let books = tmp.path().join("books");
        std::fs::create_dir_all(&books).unwrap();
        let config = tmp.path().join("stats.cfg");
        std::fs::write(&config, format!("books: {}\n", books.display())).unwrap();

        let categories = Categories::load(&config).unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories.iter().next().unwrap().directory(), books);
    }
}
