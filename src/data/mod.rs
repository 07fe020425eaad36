// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw image files
// all the way to GPU-ready tensor batches.
//
// The pipeline flows in this order:
//
//   image files (<label>.<id>.<ext>)
//       │
//       ▼
//   DirectoryScanner  → lists files, derives labels from names
//       │
//       ▼
//   split_train_val   → seeded shuffle, 80/20 partition
//       │
//       ▼
//   ImageDataset      → decodes + resizes lazily, Burn Dataset trait
//       │
//       ▼
//   ImageBatcher      → stacks samples into [N, 3, S, S] tensors
//       │
//       ▼
//   DataLoader        → feeds batches to the training loop
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Lists image files from a directory and derives labels
pub mod scanner;

/// Shuffles and splits records into train/validation sets
pub mod splitter;

/// Implements Burn's Dataset trait with lazy image decoding
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
