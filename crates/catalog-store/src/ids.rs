//! Id Generation
//!
//! Ids are `prefix-millis-seq`: the epoch base is captured once per source,
//! and the per-source counter keeps rapid successive adds collision-free.

use std::cell::Cell;

use chrono::Utc;

/// Generator for entity ids
#[derive(Debug)]
pub struct IdSource {
    base: i64,
    seq: Cell<u64>,
}

impl IdSource {
    pub fn new() -> Self {
        Self::with_base(Utc::now().timestamp_millis())
    }

    /// Fixed-base source for deterministic tests
    pub fn with_base(base: i64) -> Self {
        Self {
            base,
            seq: Cell::new(0),
        }
    }

    /// Next id for the given prefix, e.g. `svc-1754550000000-3`
    pub fn next(&self, prefix: &str) -> String {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        format!("{}-{}-{}", prefix, self.base, seq)
    }
}

impl Default for IdSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rapid_ids_never_collide() {
        let ids = IdSource::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ids.next("svc")));
        }
    }

    #[test]
    fn test_prefix_and_base_appear_in_id() {
        let ids = IdSource::with_base(42);
        assert_eq!(ids.next("item"), "item-42-0");
        assert_eq!(ids.next("item"), "item-42-1");
    }
}
