// ============================================================
// Layer 4 — Image Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<ImageSample>
// into GPU-ready tensors.
//
// What is a Batcher?
//   A Batcher takes a list of individual samples and stacks
//   them into a single batch tensor. This is necessary because
//   GPUs are most efficient when processing many samples at once.
//
// How batching works here:
//   Input:  Vec of N ImageSamples, each S*S*3 bytes in [H, W, C]
//   Output: ImageBatch with an images tensor of shape [N, 3, S, S]
//
//   We flatten all pixels into one long Vec (rescaling each byte
//   to [0, 1] on the way), reshape to [N, S, S, 3], then permute
//   the channel axis to the front because Burn's conv layers
//   expect channels-first input.
//
// The batch also carries the source filenames so the inference
// driver can pair each prediction row with its file without
// relying on anything outside the batch.
//
// Reference: Burn Book §4 (Batcher)
//            Rust Book §8 (Vectors)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::ImageSample;

// ─── ImageBatch ───────────────────────────────────────────────────────────────
/// A batch of image samples ready for the model forward pass.
/// All tensors have batch_size as their first dimension.
///
/// B is the Burn Backend (e.g. Wgpu, NdArray) —
/// generic so the same batcher works on any device.
#[derive(Debug, Clone)]
pub struct ImageBatch<B: Backend> {
    /// Pixel data — shape: [batch_size, 3, size, size], values in [0, 1]
    pub images: Tensor<B, 4>,

    /// Class indices — shape: [batch_size]; -1 for unlabeled samples
    pub targets: Tensor<B, 1, Int>,

    /// Source filename per row, in batch order
    pub filenames: Vec<String>,
}

// ─── ImageBatcher ─────────────────────────────────────────────────────────────
/// The batcher struct — holds the target device so tensors
/// are created on the correct GPU/CPU, and the image side
/// length so pixel buffers can be reshaped.
#[derive(Clone, Debug)]
pub struct ImageBatcher<B: Backend> {
    /// The device to create tensors on (e.g. GPU index 0)
    pub device: B::Device,

    /// Side length every sample was resized to
    pub image_size: usize,
}

impl<B: Backend> ImageBatcher<B> {
    /// Create a new batcher for the given device and image size
    pub fn new(device: B::Device, image_size: usize) -> Self {
        Self { device, image_size }
    }
}

// ─── Burn Batcher Trait Implementation ────────────────────────────────────────
// This is what makes ImageBatcher work with Burn's DataLoader.
// The DataLoader calls .batch(items) with each mini-batch of samples.
impl<B: Backend> Batcher<ImageSample, ImageBatch<B>> for ImageBatcher<B> {
    /// Convert a Vec of ImageSamples into a single ImageBatch.
    ///
    /// Steps:
    ///   1. Flatten all pixel bytes into one Vec<f32>, rescaled /255
    ///   2. Create a 1D tensor and reshape to [N, S, S, 3]
    ///   3. Permute to channels-first [N, 3, S, S]
    ///   4. Create the 1D target tensor and collect filenames
    fn batch(&self, items: Vec<ImageSample>) -> ImageBatch<B> {
        let batch_size = items.len();
        let size       = self.image_size;

        // ── Flatten and rescale pixels ────────────────────────────────────────
        // Every sample contributes size*size*3 bytes; rescaling to [0, 1]
        // happens here so the dataset stays a plain byte buffer.
        let pixel_flat: Vec<f32> = items
            .iter()
            .flat_map(|s| s.pixels.iter().map(|&p| p as f32 / 255.0))
            .collect();

        // ── Collect targets and filenames ─────────────────────────────────────
        let targets: Vec<i32> = items.iter().map(|s| s.label).collect();

        let filenames: Vec<String> = items
            .into_iter()
            .map(|s| s.filename)
            .collect();

        // ── Create tensors ────────────────────────────────────────────────────
        // The decoded buffers are [H, W, C]; Burn's conv stack wants
        // [C, H, W], so swap the channel axis to the front after reshaping.
        let images = Tensor::<B, 1>::from_floats(pixel_flat.as_slice(), &self.device)
            .reshape([batch_size, size, size, 3]) // [N, H, W, C]
            .swap_dims(3, 1)                      // [N, C, W, H]
            .swap_dims(2, 3);                     // [N, C, H, W]

        let targets = Tensor::<B, 1, Int>::from_ints(
            targets.as_slice(), &self.device,
        );

        ImageBatch {
            images,
            targets,
            filenames,
        }
    }
}
