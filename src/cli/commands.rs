// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `predict`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::train_use_case::TrainConfig;

/// Epoch count used when --fast-run is set — enough to exercise
/// the whole pipeline, not enough to converge.
const FAST_RUN_EPOCHS: usize = 3;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the classifier on a directory of labeled images
    Train(TrainArgs),

    /// Label a directory of images using a trained checkpoint
    Predict(PredictArgs),
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Directory of labeled training images, named <label>.<id>.<ext>
    #[arg(long, default_value = "data/train")]
    pub data_dir: String,

    /// Directory to save model checkpoints and the training config
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// Side length images are resized to before entering the network
    #[arg(long, default_value_t = 128)]
    pub image_size: usize,

    /// Number of images processed together in one forward pass
    #[arg(long, default_value_t = 15)]
    pub batch_size: usize,

    /// Number of full passes through the training partition
    #[arg(long, default_value_t = 10)]
    pub epochs: usize,

    /// Initial learning rate — decayed on validation-accuracy plateaus
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,

    /// Floor the learning rate never decays below
    #[arg(long, default_value_t = 1e-5)]
    pub min_lr: f64,

    /// Multiplier applied to the learning rate on a plateau
    #[arg(long, default_value_t = 0.5)]
    pub lr_factor: f64,

    /// Epochs of flat validation accuracy before the rate is reduced
    #[arg(long, default_value_t = 2)]
    pub lr_patience: usize,

    /// Epochs of flat validation loss before training stops early
    #[arg(long, default_value_t = 10)]
    pub early_stop_patience: usize,

    /// Fraction of the labeled set used for training (rest validates)
    #[arg(long, default_value_t = 0.8)]
    pub train_fraction: f64,

    /// Seed for the train/validation shuffle — same seed, same split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Run only a few epochs to check the pipeline end to end
    #[arg(long)]
    pub fast_run: bool,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            data_dir:            a.data_dir,
            checkpoint_dir:      a.checkpoint_dir,
            image_size:          a.image_size,
            batch_size:          a.batch_size,
            epochs:              if a.fast_run { FAST_RUN_EPOCHS } else { a.epochs },
            lr:                  a.lr,
            min_lr:              a.min_lr,
            lr_factor:           a.lr_factor,
            lr_patience:         a.lr_patience,
            early_stop_patience: a.early_stop_patience,
            train_fraction:      a.train_fraction,
            seed:                a.seed,
        }
    }
}

/// All arguments for the `predict` command
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Directory of unlabeled images, named <id>.<ext>
    #[arg(long, default_value = "data/test")]
    pub test_dir: String,

    /// Directory where checkpoints were saved during training
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_run_overrides_epochs() {
        let args = TrainArgs {
            data_dir:            "data/train".into(),
            checkpoint_dir:      "checkpoints".into(),
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
            fast_run:            true,
        };
        let cfg: TrainConfig = args.into();
        assert_eq!(cfg.epochs, FAST_RUN_EPOCHS);
    }
}
