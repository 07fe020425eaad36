// ============================================================
// Layer 4 — Train/Validation Splitter
// ============================================================
// Randomly shuffles records and splits them into two sets:
//   - Training set:   used to update model weights
//   - Validation set: used to measure performance on unseen data
//
// Why do we need a validation set?
//   If we only train and test on the same data, the model
//   could memorise the answers without actually learning.
//   The validation set tells us if the model generalises
//   to data it has never seen before.
//
// Why shuffle before splitting?
//   The scanner lists files sorted by name, so every cat comes
//   before every dog. Without shuffling, the validation set
//   would contain only dogs. Shuffling gives both sets a
//   representative mix of classes.
//
// Why a fixed seed?
//   The same seed produces the same partition on every run,
//   so training runs are comparable and the split invariant
//   (disjoint, union = input) can be tested directly.
//
// Split ratio: 80% training, 20% validation (configurable)
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom
// which is the standard unbiased shuffle algorithm.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Shuffle `records` with a seeded RNG and split into (train, validation).
///
/// # Arguments
/// * `records`        - All available records (consumed by this function)
/// * `train_fraction` - Proportion for training, e.g. 0.8 = 80%
/// * `seed`           - Shuffle seed; the same seed yields the same split
///
/// # Returns
/// A tuple (train_records, val_records)
pub fn split_train_val<T>(
    mut records:    Vec<T>,
    train_fraction: f64,
    seed:           u64,
) -> (Vec<T>, Vec<T>) {
    // Deterministic RNG — the split is part of the run's reproducibility
    let mut rng = StdRng::seed_from_u64(seed);

    // Fisher-Yates shuffle — every permutation is equally likely
    records.shuffle(&mut rng);

    // Calculate the split index
    // e.g. 100 records * 0.8 = 80 → first 80 are training
    let total    = records.len();
    let split_at = ((total as f64) * train_fraction).round() as usize;

    // Clamp to valid range to avoid panics on tiny datasets
    let split_at = split_at.min(total);

    // split_off(n) removes elements [n..] from the Vec and returns them
    // After this: records = [0..split_at], val = [split_at..total]
    let val = records.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} validation ({}% / {}%)",
        records.len(),
        val.len(),
        (records.len() * 100) / total.max(1),
        (val.len()     * 100) / total.max(1),
    );

    (records, val)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, val)      = split_train_val(items, 0.8, 42);
        assert_eq!(train.len(), 80);
        assert_eq!(val.len(),   20);
    }

    #[test]
    fn test_all_items_preserved() {
        // No items should be lost in the split
        let items: Vec<usize> = (0..50).collect();
        let (train, val)      = split_train_val(items, 0.7, 42);
        assert_eq!(train.len() + val.len(), 50);
    }

    #[test]
    fn test_partitions_are_disjoint() {
        let items: Vec<usize>  = (0..40).collect();
        let (train, val)       = split_train_val(items, 0.8, 7);
        let mut all: Vec<usize> = train.iter().chain(val.iter()).copied().collect();
        all.sort();
        // Union equals the original set, so no element appears twice
        assert_eq!(all, (0..40).collect::<Vec<usize>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let a = split_train_val((0..30).collect::<Vec<usize>>(), 0.8, 42);
        let b = split_train_val((0..30).collect::<Vec<usize>>(), 0.8, 42);
        assert_eq!(a.0, b.0);
        assert_eq!(a.1, b.1);
    }

    #[test]
    fn test_ratio_holds_within_rounding() {
        for n in [10usize, 11, 25, 99] {
            let (train, _) = split_train_val((0..n).collect::<Vec<usize>>(), 0.8, 42);
            let expected   = ((n as f64) * 0.8).round() as usize;
            assert_eq!(train.len(), expected);
        }
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        let (train, val)      = split_train_val(items, 0.8, 42);
        assert!(train.is_empty());
        assert!(val.is_empty());
    }

    #[test]
    fn test_full_training_split() {
        // 1.0 fraction means everything goes to training
        let items: Vec<usize> = (0..10).collect();
        let (train, val)      = split_train_val(items, 1.0, 42);
        assert_eq!(train.len(), 10);
        assert!(val.is_empty());
    }
}
