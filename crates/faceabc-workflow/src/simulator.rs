//! Simulated recognition confidence.
//!
//! There is no recognition model: every uploaded frame gets a uniformly drawn
//! score. The controller never draws scores itself; callers pass them in.

use faceabc_core::SimulatorConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of confidence scores.
pub trait ConfidenceSource: Send {
    /// Draw the next score.
    fn sample(&mut self) -> f64;
}

/// Uniform scores in `[min, max)`.
#[derive(Debug)]
pub struct RandomConfidence {
    rng: StdRng,
    min: f64,
    max: f64,
}

impl RandomConfidence {
    /// Build from configuration. A configured seed makes the sequence repeatable.
    pub fn from_config(config: &SimulatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            min: config.min_confidence,
            max: config.max_confidence,
        }
    }
}

impl ConfidenceSource for RandomConfidence {
    fn sample(&mut self) -> f64 {
        if self.min >= self.max {
            return self.min;
        }
        self.rng.random_range(self.min..self.max)
    }
}

/// Replays a fixed list of scores, repeating the last one.
#[derive(Debug, Clone)]
pub struct FixedConfidence {
    scores: Vec<f64>,
    next: usize,
}

impl FixedConfidence {
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores, next: 0 }
    }
}

impl ConfidenceSource for FixedConfidence {
    fn sample(&mut self) -> f64 {
        let Some(last) = self.scores.len().checked_sub(1) else {
            return 0.0;
        };
        let score = self.scores[self.next.min(last)];
        self.next += 1;
        score
    }
}

/// Coarse banding of a score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    /// At or above the routing threshold.
    High,
    /// Below the threshold but at least [`ConfidenceBand::MEDIUM_FLOOR`].
    Medium,
    Low,
}

impl ConfidenceBand {
    pub const MEDIUM_FLOOR: f64 = 0.5;

    pub fn classify(confidence: f64, threshold: f64) -> Self {
        if confidence >= threshold {
            Self::High
        } else if confidence >= Self::MEDIUM_FLOOR {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::High => "System confident with match.",
            Self::Medium => "Medium confidence – human verification suggested.",
            Self::Low => "Low confidence – requires immediate human review.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_scores_stay_in_range() {
        let mut source = RandomConfidence::from_config(&SimulatorConfig::default());
        for _ in 0..1000 {
            let score = source.sample();
            assert!((0.20..0.99).contains(&score), "score out of range: {score}");
        }
    }

    #[test]
    fn test_seeded_scores_repeat() {
        let config = SimulatorConfig {
            seed: Some(42),
            ..Default::default()
        };
        let a: Vec<f64> = {
            let mut s = RandomConfidence::from_config(&config);
            (0..5).map(|_| s.sample()).collect()
        };
        let b: Vec<f64> = {
            let mut s = RandomConfidence::from_config(&config);
            (0..5).map(|_| s.sample()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_confidence_repeats_last() {
        let mut source = FixedConfidence::new(vec![0.9, 0.4]);
        assert_eq!(source.sample(), 0.9);
        assert_eq!(source.sample(), 0.4);
        assert_eq!(source.sample(), 0.4);
        assert_eq!(FixedConfidence::new(vec![]).sample(), 0.0);
    }

    #[test]
    fn test_bands() {
        assert_eq!(ConfidenceBand::classify(0.85, 0.85), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::classify(0.84, 0.85), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::classify(0.5, 0.85), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::classify(0.49, 0.85), ConfidenceBand::Low);
    }
}
