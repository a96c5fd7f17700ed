//! Per-peer score vector
//!
//! One floating-point score per metagraph UID position. A reply that matches
//! the expected digest moves the peer's score with an exponential update; a
//! miss decays it straight to zero. Normalization turns the vector into the
//! weight distribution submitted on-chain.

use tracing::debug;

/// Smoothing factor for score updates.
pub const ALPHA: f64 = 0.9;

/// Score vector, index-aligned with the metagraph's UID positions.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreVector {
    scores: Vec<f64>,
}

impl ScoreVector {
    /// Every peer starts at 1.0.
    pub fn ones(n: usize) -> Self {
        Self {
            scores: vec![1.0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.scores.get(index).copied()
    }

    /// Apply one observation for the peer at `index`.
    ///
    /// `score = ALPHA * m + (1 - ALPHA) * 0` with `m` 1 on a match and 0
    /// otherwise: the previous value is fully displaced, a miss lands at 0,
    /// a hit at ALPHA.
    pub fn apply(&mut self, index: usize, matched: bool) {
        let Some(slot) = self.scores.get_mut(index) else {
            // Peer set changed under us mid-round
            debug!("Score index {} out of range ({})", index, self.scores.len());
            return;
        };
        let m = if matched { 1.0 } else { 0.0 };
        *slot = ALPHA * m + (1.0 - ALPHA) * 0.0;
    }

    /// L1-normalized copy of the vector. Sums to 1.0 whenever any score is
    /// positive; an all-zero vector normalizes to all zeros, never NaN.
    pub fn normalized(&self) -> Vec<f64> {
        let total: f64 = self.scores.iter().sum();
        if total > 0.0 {
            self.scores.iter().map(|s| s / total).collect()
        } else {
            self.scores.clone()
        }
    }

    /// Resize to the peer count of a refreshed metagraph. Existing entries
    /// keep their scores, new peers start at 1.0.
    pub fn resize(&mut self, n: usize) {
        self.scores.resize(n, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ones() {
        let scores = ScoreVector::ones(4);
        assert_eq!(scores.len(), 4);
        assert_eq!(scores.get(0), Some(1.0));
        assert_eq!(scores.get(4), None);
    }

    #[test]
    fn test_apply_match_and_miss() {
        let mut scores = ScoreVector::ones(2);

        scores.apply(0, true);
        assert_eq!(scores.get(0), Some(ALPHA));

        scores.apply(1, false);
        assert_eq!(scores.get(1), Some(0.0));

        // A later miss erases an earlier hit entirely
        scores.apply(0, false);
        assert_eq!(scores.get(0), Some(0.0));
    }

    #[test]
    fn test_apply_out_of_range_is_noop() {
        let mut scores = ScoreVector::ones(2);
        scores.apply(5, true);
        assert_eq!(scores.normalized().len(), 2);
    }

    #[test]
    fn test_normalized_sums_to_one() {
        let mut scores = ScoreVector::ones(3);
        scores.apply(0, true);
        scores.apply(1, false);
        // scores: [0.9, 0.0, 1.0]

        let normalized = scores.normalized();
        let sum: f64 = normalized.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(normalized[1], 0.0);
        assert!(normalized[2] > normalized[0]);
    }

    #[test]
    fn test_normalized_all_zero() {
        let mut scores = ScoreVector::ones(3);
        for i in 0..3 {
            scores.apply(i, false);
        }
        assert_eq!(scores.normalized(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_normalized_empty() {
        let scores = ScoreVector::ones(0);
        assert!(scores.normalized().is_empty());
    }

    #[test]
    fn test_resize_keeps_existing() {
        let mut scores = ScoreVector::ones(2);
        scores.apply(0, true);

        scores.resize(4);
        assert_eq!(scores.get(0), Some(ALPHA));
        assert_eq!(scores.get(3), Some(1.0));

        scores.resize(1);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get(0), Some(ALPHA));
    }
}
