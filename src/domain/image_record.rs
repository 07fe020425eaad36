// ============================================================
// Layer 3 — ImageRecord Domain Type
// ============================================================
// Represents a single image file found by the scanner.
// This is a plain data struct with no behaviour —
// just a filename and the label derived from it.
//
// The label is Option because the same record type serves both
// halves of the pipeline: the training scanner derives a label
// from the filename, the inference scanner has none to derive.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

use crate::domain::label::Label;

/// One image file as listed from a data directory.
/// Created once by the scanner, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    /// The filename relative to the scanned directory — kept
    /// so predictions can be correlated back to their files
    pub filename: String,

    /// The class derived from the filename convention,
    /// or None for the unlabeled inference set
    pub label: Option<Label>,
}

impl ImageRecord {
    /// Create a labeled record, deriving the class from the filename.
    pub fn labeled(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let label    = Label::from_filename(&filename);
        Self { filename, label: Some(label) }
    }

    /// Create an unlabeled record for the inference set.
    pub fn unlabeled(filename: impl Into<String>) -> Self {
        Self { filename: filename.into(), label: None }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_record_derives_from_filename() {
        let rec = ImageRecord::labeled("dog.7.jpg");
        assert_eq!(rec.label, Some(Label::Dog));
        assert_eq!(rec.filename, "dog.7.jpg");
    }

    #[test]
    fn test_unlabeled_record_has_no_label() {
        let rec = ImageRecord::unlabeled("17.jpg");
        assert_eq!(rec.label, None);
    }
}
