// ============================================================
// Layer 4 — Directory Scanner
// ============================================================
// Lists the image files in a data directory and derives a label
// per file from the <label>.<id>.<ext> naming convention.
//
// Two details matter here:
//
//   Ordering — readdir order depends on the filesystem, so the
//   scanner sorts by filename. Predictions are reported in this
//   order, and the train/validation split shuffles from it with
//   a fixed seed, so the whole pipeline is reproducible.
//
//   Fail fast — a missing or empty directory is an error, not an
//   empty dataset. Training on nothing and inferring over nothing
//   both look like success until someone reads the output.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{bail, Context, Result};
use std::{fs, path::Path};

use crate::domain::image_record::ImageRecord;
use crate::domain::traits::ImageSource;

/// File extensions the scanner accepts, lowercase.
const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Lists image files from a single directory.
/// Implements the ImageSource trait from Layer 3.
pub struct DirectoryScanner {
    /// Path to the directory containing image files
    dir: String,

    /// Whether filenames carry labels (training set) or not (test set)
    labeled: bool,
}

impl DirectoryScanner {
    /// Scanner for a training directory — labels derived from filenames.
    pub fn labeled(dir: impl Into<String>) -> Self {
        Self { dir: dir.into(), labeled: true }
    }

    /// Scanner for an inference directory — no labels.
    pub fn unlabeled(dir: impl Into<String>) -> Self {
        Self { dir: dir.into(), labeled: false }
    }
}

impl ImageSource for DirectoryScanner {
    fn scan(&self) -> Result<Vec<ImageRecord>> {
        let dir = Path::new(&self.dir);

        if !dir.is_dir() {
            bail!("image directory '{}' does not exist", self.dir);
        }

        // Collect the filenames of every supported image file
        let mut filenames: Vec<String> = Vec::new();
        for entry in fs::read_dir(dir)
            .with_context(|| format!("cannot read directory '{}'", self.dir))?
        {
            let path = entry?.path();
            if !is_supported_image(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                filenames.push(name.to_string());
            }
        }

        if filenames.is_empty() {
            bail!(
                "no image files ({}) found in '{}'",
                SUPPORTED_EXTENSIONS.join("/"),
                self.dir
            );
        }

        // Stable listing order regardless of filesystem
        filenames.sort();

        let records: Vec<ImageRecord> = filenames
            .into_iter()
            .map(|name| {
                if self.labeled {
                    ImageRecord::labeled(name)
                } else {
                    ImageRecord::unlabeled(name)
                }
            })
            .collect();

        tracing::info!("Found {} images in '{}'", records.len(), self.dir);
        Ok(records)
    }
}

/// True when the path has one of the supported image extensions.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::label::Label;
    use std::path::PathBuf;

    /// Create a throwaway directory with the given (empty) files.
    fn scratch_dir(name: &str, files: &[&str]) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("pet-classifier-test-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for f in files {
            fs::write(dir.join(f), b"").unwrap();
        }
        dir
    }

    #[test]
    fn test_labels_match_filename_convention() {
        let dir = scratch_dir("labels", &["cat.1.jpg", "dog.1.jpg"]);
        let records = DirectoryScanner::labeled(dir.to_str().unwrap())
            .scan()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].filename, "cat.1.jpg");
        assert_eq!(records[0].label, Some(Label::Cat));
        assert_eq!(records[1].filename, "dog.1.jpg");
        assert_eq!(records[1].label, Some(Label::Dog));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_listing_is_sorted_and_filtered() {
        let dir = scratch_dir(
            "order",
            &["9.jpg", "10.png", "1.jpeg", "notes.txt", "model.bin"],
        );
        let records = DirectoryScanner::unlabeled(dir.to_str().unwrap())
            .scan()
            .unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.filename.as_str()).collect();
        // Lexicographic order, non-image files skipped
        assert_eq!(names, vec!["1.jpeg", "10.png", "9.jpg"]);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = DirectoryScanner::labeled("no/such/directory").scan();
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_directory_is_an_error() {
        let dir = scratch_dir("empty", &["readme.md"]);
        let result = DirectoryScanner::labeled(dir.to_str().unwrap()).scan();
        assert!(result.is_err());
        fs::remove_dir_all(dir).unwrap();
    }
}
