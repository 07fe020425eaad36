// ============================================================
// Layer 3 — Label Domain Type
// ============================================================
// The two classes the model distinguishes, and both directions
// of the mapping the pipeline needs:
//
//   filename → label   (training: "dog.42.jpg" is a dog picture)
//   index    → label   (inference: argmax output back to a word)
//
// The filename convention is <label>.<id>.<ext>: everything
// before the first '.' names the class. A prefix of "dog" is a
// dog; any other prefix is a cat.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary image class. The numeric encoding (cat = 0, dog = 1)
/// is part of the persisted model contract: the output layer's
/// class indices mean nothing without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Cat,
    Dog,
}

impl Label {
    /// Derive the label from a training filename.
    /// "dog.3.jpg" → Dog, "cat.3.jpg" → Cat.
    /// Any prefix other than "dog" is a cat.
    pub fn from_filename(filename: &str) -> Self {
        match filename.split('.').next() {
            Some("dog") => Label::Dog,
            _           => Label::Cat,
        }
    }

    /// The class index this label occupies in the model output.
    pub fn index(self) -> usize {
        match self {
            Label::Cat => 0,
            Label::Dog => 1,
        }
    }

    /// Map a predicted class index back to a label.
    /// Index 1 is dog; everything else is cat.
    pub fn from_index(index: usize) -> Self {
        if index == 1 { Label::Dog } else { Label::Cat }
    }

    /// The human-readable label string
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Cat => "cat",
            Label::Dog => "dog",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_filename() {
        assert_eq!(Label::from_filename("cat.1.jpg"), Label::Cat);
        assert_eq!(Label::from_filename("dog.1.jpg"), Label::Dog);
    }

    #[test]
    fn test_unknown_prefix_is_cat() {
        // The convention labels everything that is not a dog as a cat
        assert_eq!(Label::from_filename("bird.1.jpg"), Label::Cat);
        assert_eq!(Label::from_filename("noextension"), Label::Cat);
    }

    #[test]
    fn test_index_round_trip() {
        assert_eq!(Label::from_index(Label::Cat.index()), Label::Cat);
        assert_eq!(Label::from_index(Label::Dog.index()), Label::Dog);
    }

    #[test]
    fn test_display() {
        assert_eq!(Label::Cat.to_string(), "cat");
        assert_eq!(Label::Dog.to_string(), "dog");
    }
}
