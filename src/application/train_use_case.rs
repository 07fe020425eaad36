// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Scan the labeled image directory   (Layer 4 - data)
//   Step 2: Split train/validation             (Layer 4 - data)
//   Step 3: Build lazy image datasets          (Layer 4 - data)
//   Step 4: Save config                        (Layer 6 - infra)
//   Step 5: Run training loop                  (Layer 5 - ml)
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §5 (Training)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::ImageDataset,
    scanner::DirectoryScanner,
    splitter::split_train_val,
};
use crate::domain::traits::ImageSource;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::trainer::run_training;

// ─── Training Configuration ──────────────────────────────────────────────────
// All hyperparameters for a training run.
// Serialisable so it can be saved to disk and reloaded for inference.
// The #[derive(Serialize, Deserialize)] macros from serde handle
// reading/writing this struct to JSON automatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub data_dir:            String,
    pub checkpoint_dir:      String,
    pub image_size:          usize,
    pub batch_size:          usize,
    pub epochs:              usize,
    pub lr:                  f64,
    pub min_lr:              f64,
    pub lr_factor:           f64,
    pub lr_patience:         usize,
    pub early_stop_patience: usize,
    pub train_fraction:      f64,
    pub seed:                u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_dir:            "data/train".to_string(),
            checkpoint_dir:      "checkpoints".to_string(),
            image_size:          128,
            batch_size:          15,
            epochs:              10,
            lr:                  1e-3,
            min_lr:              1e-5,
            lr_factor:           0.5,
            lr_patience:         2,
            early_stop_patience: 10,
            train_fraction:      0.8,
            seed:                42,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full training pipeline.
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    /// Create a new TrainUseCase with the given configuration
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Scan the labeled image directory ──────────────────────────
        // The scanner lists files in stable order and derives a label per
        // filename; a missing or empty directory fails here, before any
        // model work starts.
        tracing::info!("Scanning labeled images in '{}'", cfg.data_dir);
        let scanner = DirectoryScanner::labeled(&cfg.data_dir);
        let records = scanner.scan()?;
        tracing::info!("Found {} labeled images", records.len());

        // ── Step 2: Train / validation split ──────────────────────────────────
        // Seeded shuffle and split so the model is evaluated on unseen data
        // and the partition is identical across runs
        let (train_records, val_records) =
            split_train_val(records, cfg.train_fraction, cfg.seed);
        tracing::info!(
            "Split: {} train, {} validation",
            train_records.len(),
            val_records.len()
        );

        // ── Step 3: Build Burn datasets ───────────────────────────────────────
        // ImageDataset implements Burn's Dataset trait so the DataLoader
        // can call .get(index) and .len() on it; decoding is lazy
        let train_dataset = ImageDataset::new(&cfg.data_dir, train_records, cfg.image_size);
        let val_dataset   = ImageDataset::new(&cfg.data_dir, val_records, cfg.image_size);

        // ── Step 4: Save config for inference ─────────────────────────────────
        // The inferencer needs to know the model architecture to rebuild it
        let ckpt_manager = CheckpointManager::new(&cfg.checkpoint_dir);
        ckpt_manager.save_config(cfg)?;

        // ── Step 5: Run training loop (Layer 5) ───────────────────────────────
        run_training(cfg, train_dataset, val_dataset, ckpt_manager)?;

        Ok(())
    }
}
