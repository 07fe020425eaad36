// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - DirectoryScanner implements ImageSource
//   - A future ArchiveScanner could also implement ImageSource
//   - The application layer only sees ImageSource
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use crate::domain::image_record::ImageRecord;
use crate::domain::prediction::Prediction;

// ─── ImageSource ──────────────────────────────────────────────────────────────
/// Any component that can produce the list of images to work on.
///
/// Implementations:
///   - DirectoryScanner → lists image files from a directory
pub trait ImageSource {
    /// List all available images from this source, in a stable order.
    /// Returns an error when the source is missing or empty.
    fn scan(&self) -> Result<Vec<ImageRecord>>;
}

// ─── LabelPredictor ───────────────────────────────────────────────────────────
/// Any component that can assign a class to every image in a set.
///
/// Implementations:
///   - PredictUseCase → uses the trained CNN
pub trait LabelPredictor {
    /// Predict a label for every image, preserving input order.
    fn predict_all(&self) -> Result<Vec<Prediction>>;
}
