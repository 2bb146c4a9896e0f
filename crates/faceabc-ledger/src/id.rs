//! Incident identifier generation.

/// Prefix of every minted incident id.
pub const INCIDENT_ID_PREFIX: &str = "INC-";

/// Monotonic incident id counter, scoped to one session.
///
/// The counter is incremented before formatting, so a generator seeded at 1000
/// issues `INC-1001` first.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    counter: u64,
}

impl IdGenerator {
    pub fn new(seed: u64) -> Self {
        Self { counter: seed }
    }

    /// Mint the next incident id.
    pub fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{INCIDENT_ID_PREFIX}{}", self.counter)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_id() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_id(), "INC-1001");
        assert_eq!(ids.next_id(), "INC-1002");
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut ids = IdGenerator::new(1000);
        let seqs: Vec<u64> = (0..50)
            .map(|_| {
                ids.next_id()
                    .strip_prefix(INCIDENT_ID_PREFIX)
                    .unwrap()
                    .parse()
                    .unwrap()
            })
            .collect();

        assert!(seqs.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(seqs.first(), Some(&1001));
        assert_eq!(seqs.last(), Some(&1050));
    }
}
