// ============================================================
// Layer 3 — Prediction Domain Type
// ============================================================
// One row of inference output: which file, which class.
// Produced transiently for display — never persisted.

use serde::{Deserialize, Serialize};

use crate::domain::label::Label;

/// An image filename paired with its predicted class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// The filename the prediction belongs to
    pub filename: String,

    /// The class the model assigned
    pub label: Label,
}

impl Prediction {
    pub fn new(filename: impl Into<String>, label: Label) -> Self {
        Self {
            filename: filename.into(),
            label,
        }
    }
}
