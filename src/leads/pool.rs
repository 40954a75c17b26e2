//! Rotation over a fixed set of leads without repeats within a cycle.

use rand::seq::IndexedRandom;

use super::Lead;

/// Picks leads at random, avoiding repetition until every lead was shown.
#[derive(Clone, Debug, Default)]
pub struct LeadPool {
    leads: Vec<Lead>,
    shown: Vec<String>,
}

impl LeadPool {
    /// Build a pool over the given leads.
    pub fn new(leads: Vec<Lead>) -> Self {
        Self {
            leads,
            shown: Vec::new(),
        }
    }

    /// Pool seeded with the built-in demo leads.
    pub fn demo() -> Self {
        Self::new(super::demo_leads())
    }

    /// Number of leads in the pool.
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    /// Whether the pool holds no leads at all.
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Return a random lead not yet shown this cycle.
    ///
    /// Once every lead has been shown the cycle resets, so the pool never
    /// runs dry unless it is empty.
    pub fn next(&mut self) -> Option<Lead> {
        if self.leads.is_empty() {
            return None;
        }
        if self.shown.len() >= self.leads.len() {
            self.shown.clear();
        }
        let available: Vec<&Lead> = self
            .leads
            .iter()
            .filter(|lead| !self.shown.iter().any(|id| id == &lead.id))
            .collect();
        let selected = (*available.choose(&mut rand::rng())?).clone();
        self.shown.push(selected.id.clone());
        Some(selected)
    }

    /// Forget which leads were already shown.
    pub fn reset(&mut self) {
        self.shown.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cycle_covers_every_lead_without_repeats() {
        let mut pool = LeadPool::demo();
        let mut seen = HashSet::new();
        for _ in 0..pool.len() {
            let lead = pool.next().unwrap();
            assert!(seen.insert(lead.id), "lead repeated within a cycle");
        }
        assert_eq!(seen.len(), pool.len());
    }

    #[test]
    fn pool_restarts_after_exhaustion() {
        let mut pool = LeadPool::demo();
        for _ in 0..pool.len() {
            pool.next().unwrap();
        }
        assert!(pool.next().is_some());
    }

    #[test]
    fn reset_clears_shown_history() {
        let leads = super::super::demo_leads()[..1].to_vec();
        let mut pool = LeadPool::new(leads);
        let first = pool.next().unwrap();
        pool.reset();
        let again = pool.next().unwrap();
        assert_eq!(first.id, again.id);
    }

    #[test]
    fn empty_pool_yields_nothing() {
        let mut pool = LeadPool::new(Vec::new());
        assert!(pool.next().is_none());
        assert!(pool.is_empty());
    }
}
