// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Full train + validation loop using Burn's DataLoader and RMSProp.
//
// Key backend insight:
//   - Training uses MyBackend (Autodiff<Wgpu>) for gradients
//   - model.valid() returns model on MyInnerBackend (Wgpu)
//   - Validation batcher must also use MyInnerBackend
//   - argmax(1) returns [batch,1] so we flatten before .equal()
//
// After every validation pass the two policies run:
//   - PlateauScheduler may reduce the learning rate
//   - EarlyStopping may end the epoch loop
//
// Reference: Burn Book §5, Tieleman & Hinton (2012) RMSProp

use anyhow::Result;
use burn::{
    data::dataloader::DataLoaderBuilder,
    module::AutodiffModule,
    optim::{GradientsParams, Optimizer, RmsPropConfig},
    prelude::*,
};

use crate::application::train_use_case::TrainConfig;
use crate::data::{batcher::ImageBatcher, dataset::ImageDataset};
use crate::infra::checkpoint::CheckpointManager;
use crate::infra::metrics::{EpochMetrics, MetricsLogger};
use crate::ml::model::{CnnConfig, CnnModel};
use crate::ml::schedule::{EarlyStopping, PlateauScheduler};

type MyBackend      = burn::backend::Autodiff<burn::backend::Wgpu>;
type MyInnerBackend = burn::backend::Wgpu;

/// Number of output classes — cat and dog.
pub const NUM_CLASSES: usize = 2;

pub fn run_training(
    cfg:           &TrainConfig,
    train_dataset: ImageDataset,
    val_dataset:   ImageDataset,
    ckpt_manager:  CheckpointManager,
) -> Result<()> {
    let device = burn::backend::wgpu::WgpuDevice::default();
    tracing::info!("Using WGPU device: {:?}", device);
    train_loop(cfg, train_dataset, val_dataset, ckpt_manager, device)
}

fn train_loop(
    cfg:           &TrainConfig,
    train_dataset: ImageDataset,
    val_dataset:   ImageDataset,
    ckpt_manager:  CheckpointManager,
    device:        burn::backend::wgpu::WgpuDevice,
) -> Result<()> {

    // ── Build model ───────────────────────────────────────────────────────────
    let model_cfg = CnnConfig::new(NUM_CLASSES, cfg.image_size);
    let mut model: CnnModel<MyBackend> = model_cfg.init(&device);
    tracing::info!("Model ready: 3 conv blocks, image_size={}", cfg.image_size);

    // ── RMSProp optimiser ─────────────────────────────────────────────────────
    // v = α*v + (1-α)*g²       (running squared-gradient average)
    // θ = θ - lr * g / (√v + ε) (update)
    let optim_cfg = RmsPropConfig::new();
    let mut optim = optim_cfg.init();

    // ── Training data loader (AutodiffBackend) ────────────────────────────────
    let train_batcher = ImageBatcher::<MyBackend>::new(device.clone(), cfg.image_size);
    let train_loader  = DataLoaderBuilder::new(train_batcher)
        .batch_size(cfg.batch_size)
        .shuffle(cfg.seed)
        .num_workers(1)
        .build(train_dataset);

    // ── Validation data loader (InnerBackend — no autodiff overhead) ──────────
    let val_batcher = ImageBatcher::<MyInnerBackend>::new(device.clone(), cfg.image_size);
    let val_loader  = DataLoaderBuilder::new(val_batcher)
        .batch_size(cfg.batch_size)
        .num_workers(1)
        .build(val_dataset);

    // ── Epoch-level policies and metrics ──────────────────────────────────────
    let metrics_logger = MetricsLogger::new(&cfg.checkpoint_dir)?;
    let mut early_stop = EarlyStopping::new(cfg.early_stop_patience);
    let mut scheduler  = PlateauScheduler::new(cfg.lr_patience, cfg.lr_factor, cfg.min_lr);
    let mut lr         = cfg.lr;

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {

        // ── Training phase ────────────────────────────────────────────────────
        let mut train_loss_sum = 0.0f64;
        let mut train_batches  = 0usize;

        for batch in train_loader.iter() {
            let (loss, _) = model.forward_loss(batch.images, batch.targets);

            let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();
            train_loss_sum += loss_val;
            train_batches  += 1;

            // Backward pass + RMSProp update
            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(lr, model, grads);
        }

        let avg_train_loss = if train_batches > 0 {
            train_loss_sum / train_batches as f64
        } else { f64::NAN };

        // ── Validation phase ──────────────────────────────────────────────────
        // model.valid() → CnnModel<MyInnerBackend>
        // dropout disabled for deterministic evaluation
        let model_valid = model.valid();

        let mut val_loss_sum  = 0.0f64;
        let mut val_batches   = 0usize;
        let mut correct       = 0usize;
        let mut total_samples = 0usize;

        for batch in val_loader.iter() {
            let logits = model_valid.forward(batch.images);

            let ce = burn::nn::loss::CrossEntropyLossConfig::new()
                .init(&logits.device());

            let batch_loss: f64 = ce
                .forward(logits.clone(), batch.targets.clone())
                .into_scalar().elem::<f64>();
            val_loss_sum += batch_loss;
            val_batches  += 1;

            // argmax(1) returns shape [batch, 1] — flatten to [batch]
            // before comparing with targets which is [batch]
            let predicted = logits.argmax(1).flatten::<1>(0, 1);

            total_samples += batch.targets.dims()[0];

            let batch_correct: i64 = predicted
                .equal(batch.targets)
                .int().sum().into_scalar().elem::<i64>();
            correct += batch_correct as usize;
        }

        let avg_val_loss = if val_batches   > 0 { val_loss_sum / val_batches as f64 } else { f64::NAN };
        let val_acc      = if total_samples > 0 { correct as f64 / total_samples as f64 } else { 0.0 };

        println!(
            "Epoch {:>3}/{} | train_loss={:.4} | val_loss={:.4} | val_acc={:.1}% | lr={:.6}",
            epoch, cfg.epochs, avg_train_loss, avg_val_loss, val_acc * 100.0, lr,
        );

        metrics_logger.log(&EpochMetrics::new(
            epoch, avg_train_loss, avg_val_loss, val_acc, lr,
        ))?;

        ckpt_manager.save_model(&model, epoch)?;
        tracing::info!("Checkpoint saved for epoch {}", epoch);

        // ── Policies ──────────────────────────────────────────────────────────
        lr = scheduler.observe(val_acc, lr);

        if early_stop.observe(avg_val_loss) {
            tracing::info!(
                "Validation loss flat for {} epochs — stopping at epoch {}",
                cfg.early_stop_patience, epoch,
            );
            break;
        }
    }

    tracing::info!("Training complete!");
    Ok(())
}
