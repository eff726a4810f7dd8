//! Work counters with budgets.
//!
//! The enumerating search is bounded by construction, but configs may raise `max_depth`, and
//! the path set grows exponentially with it. Solvers bump these counters as they go and stop
//! with [`Error::LimitExceeded`] instead of running away.

use crate::config::ResourceLimits;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Running counters tracked during a search.
pub struct ResourceCounts {
    pub tilts: u64,
    pub sequences: u64,
}

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a search.
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    #[inline]
    pub fn bump_tilts(&mut self, delta: u64) -> Result<()> {
        let limit = self.limits.max_tilts;
        self.bump("tilts", delta, limit, |c| &mut c.tilts)
    }

    #[inline]
    pub fn bump_sequences(&mut self, delta: u64) -> Result<()> {
        let limit = self.limits.max_sequences;
        self.bump("sequences", delta, limit, |c| &mut c.sequences)
    }

    fn bump(
        &mut self,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut ResourceCounts) -> &mut u64,
    ) -> Result<()> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(Error::LimitExceeded {
                metric,
                limit,
                observed,
            });
        }

        Ok(())
    }
}
