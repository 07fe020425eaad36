// ============================================================
// Layer 5 — Inferencer
// ============================================================
use anyhow::Result;
use burn::{data::dataloader::DataLoaderBuilder, prelude::*};

use crate::data::{batcher::ImageBatcher, dataset::ImageDataset};
use crate::domain::label::Label;
use crate::domain::prediction::Prediction;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::{CnnConfig, CnnModel};
use crate::ml::trainer::NUM_CLASSES;

type InferBackend = burn::backend::Wgpu;

pub struct Inferencer {
    model:      CnnModel<InferBackend>,
    image_size: usize,
    batch_size: usize,
    device:     burn::backend::wgpu::WgpuDevice,
}

impl Inferencer {
    pub fn from_checkpoint(ckpt_manager: &CheckpointManager) -> Result<Self> {
        let device = burn::backend::wgpu::WgpuDevice::default();
        let cfg    = ckpt_manager.load_config()?;

        // Rebuild the architecture the checkpoint was trained with;
        // dropout off — inference must be deterministic.
        let model_cfg = CnnConfig::new(NUM_CLASSES, cfg.image_size)
            .with_conv_dropout(0.0)
            .with_dense_dropout(0.0);
        let model: CnnModel<InferBackend> = model_cfg.init(&device);
        let model = ckpt_manager.load_model(model, &device)?;
        tracing::info!("Model loaded from checkpoint");

        Ok(Self {
            model,
            image_size: cfg.image_size,
            batch_size: cfg.batch_size,
            device,
        })
    }

    /// Side length the model expects — the dataset must resize to this.
    pub fn image_size(&self) -> usize {
        self.image_size
    }

    /// Label every image in the dataset, preserving dataset order.
    ///
    /// The loader is built WITHOUT .shuffle() so batches arrive in
    /// dataset order, and each batch carries its filenames, so the
    /// (filename, label) pairing never depends on outside bookkeeping.
    pub fn predict(&self, dataset: ImageDataset) -> Result<Vec<Prediction>> {
        let total = dataset.sample_count();

        let batcher = ImageBatcher::<InferBackend>::new(self.device.clone(), self.image_size);
        let loader  = DataLoaderBuilder::new(batcher)
            .batch_size(self.batch_size)
            .num_workers(1)
            .build(dataset);

        let mut predictions = Vec::with_capacity(total);

        for batch in loader.iter() {
            let logits = self.model.forward(batch.images);

            // Highest-scoring class per image
            let classes: Vec<i32> = logits
                .argmax(1)
                .flatten::<1>(0, 1)
                .into_data()
                .to_vec::<i32>()
                .map_err(|e| anyhow::anyhow!("cannot read predictions from device: {e:?}"))?;

            for (filename, class) in batch.filenames.into_iter().zip(classes) {
                predictions.push(Prediction::new(filename, Label::from_index(class as usize)));
            }
        }

        tracing::info!("Predicted labels for {} images", predictions.len());
        Ok(predictions)
    }
}
