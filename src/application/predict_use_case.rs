// ============================================================
// Layer 2 — Predict Use Case
// ============================================================
// Loads the persisted model and labels every image in a
// directory, in listing order:
//
//   1. Rebuild model from checkpoint + saved config
//   2. Scan the unlabeled directory (sorted, fail-fast)
//   3. Stream batches through the model without shuffling
//   4. Map each argmax index back to its label string

use anyhow::Result;

use crate::data::{dataset::ImageDataset, scanner::DirectoryScanner};
use crate::domain::prediction::Prediction;
use crate::domain::traits::{ImageSource, LabelPredictor};
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::inferencer::Inferencer;

pub struct PredictUseCase {
    test_dir:   String,
    inferencer: Inferencer,
}

impl PredictUseCase {
    pub fn new(checkpoint_dir: String, test_dir: String) -> Result<Self> {
        let ckpt       = CheckpointManager::new(&checkpoint_dir);
        let inferencer = Inferencer::from_checkpoint(&ckpt)?;
        Ok(Self { test_dir, inferencer })
    }
}

impl LabelPredictor for PredictUseCase {
    /// Label every image in the test directory.
    /// Output order is the scanner's listing order — the loader never
    /// shuffles, so row i of the result is file i of the listing.
    fn predict_all(&self) -> Result<Vec<Prediction>> {
        let scanner = DirectoryScanner::unlabeled(&self.test_dir);
        let records = scanner.scan()?;

        let dataset = ImageDataset::new(
            &self.test_dir,
            records,
            self.inferencer.image_size(),
        );

        self.inferencer.predict(dataset)
    }
}
