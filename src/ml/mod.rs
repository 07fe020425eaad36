// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one
// and the data layer's Dataset/Batcher implementations.
//
// Why isolate Burn code here?
//   - If Burn's API changes, we only update this layer
//   - Other layers are testable without a GPU
//   - The model architecture is clearly separated from
//     data loading and application logic
//
// What's in this layer:
//
//   model.rs      — The convolutional network
//                   Three conv blocks (conv → batch norm → ReLU
//                   → max pool → dropout) followed by a dense
//                   head producing one logit per class
//
//   schedule.rs   — The two epoch-level training policies:
//                   early stopping on flat validation loss, and
//                   learning-rate reduction on flat validation
//                   accuracy. Pure state machines, no tensors.
//
//   trainer.rs    — The training loop
//                   Handles forward pass, loss computation,
//                   backward pass, optimiser step, validation
//                   metrics, policy decisions, and checkpoint
//                   saving per epoch
//
//   inferencer.rs — The inference engine
//                   Loads a checkpoint, streams unlabeled images
//                   through the model in order, takes the argmax
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)

/// Convolutional classifier architecture
pub mod model;

/// Early-stopping and learning-rate-plateau policies
pub mod schedule;

/// Full training loop with validation and checkpointing
pub mod trainer;

/// Inference engine — loads checkpoint and labels images
pub mod inferencer;
