use burn::data::dataset::Dataset;
use image::imageops::FilterType;
use std::path::PathBuf;

use crate::domain::image_record::ImageRecord;

/// Class index used for samples without a label (inference set).
/// Never reaches a loss function — the inference path ignores targets.
const NO_LABEL: i32 = -1;

/// One decoded, resized image ready for batching.
/// Pixels are raw RGB bytes in row-major [H, W, C] order,
/// `size * size * 3` of them.
#[derive(Debug, Clone)]
pub struct ImageSample {
    pub filename: String,
    pub pixels:   Vec<u8>,
    pub label:    i32,
}

/// A directory-backed image dataset. Holds only the record list;
/// pixels are decoded lazily when the data loader pulls an index,
/// so memory stays flat no matter how many files are listed.
pub struct ImageDataset {
    root:       PathBuf,
    records:    Vec<ImageRecord>,
    image_size: usize,
}

impl ImageDataset {
    pub fn new(root: impl Into<PathBuf>, records: Vec<ImageRecord>, image_size: usize) -> Self {
        Self {
            root: root.into(),
            records,
            image_size,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.records.len()
    }
}

impl Dataset<ImageSample> for ImageDataset {
    fn get(&self, index: usize) -> Option<ImageSample> {
        let record = self.records.get(index)?;
        let path   = self.root.join(&record.filename);

        // An undecodable file aborts the run; skipping it would silently
        // desynchronise predictions from the record list.
        let decoded = match image::open(&path) {
            Ok(img) => img,
            Err(e)  => panic!("cannot decode image '{}': {e}", path.display()),
        };

        let side   = self.image_size as u32;
        let pixels = decoded
            .resize_exact(side, side, FilterType::Triangle)
            .to_rgb8()
            .into_raw();

        Some(ImageSample {
            filename: record.filename.clone(),
            pixels,
            label: record.label.map(|l| l.index() as i32).unwrap_or(NO_LABEL),
        })
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_matches_records() {
        let records = vec![
            ImageRecord::labeled("cat.1.jpg"),
            ImageRecord::labeled("dog.1.jpg"),
        ];
        let dataset = ImageDataset::new("data/train", records, 128);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.sample_count(), 2);
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let dataset = ImageDataset::new("data/train", Vec::new(), 128);
        assert!(dataset.get(0).is_none());
    }
}
