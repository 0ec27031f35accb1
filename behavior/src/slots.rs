//! Cancellation tickets for running animations.
//!
//! At most one animation is live per key. Beginning a new one on a key stales
//! the previous ticket, so a frame loop that checks [`AnimationSlots::is_live`]
//! before every write stops on its own instead of fighting the newer loop.

#[cfg(test)]
#[path = "slots_test.rs"]
mod slots_test;

use std::collections::HashMap;
use std::hash::Hash;

/// Handle held by one running animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket<K> {
    key: K,
    generation: u64,
}

impl<K: Copy> Ticket<K> {
    #[must_use]
    pub fn key(&self) -> K {
        self.key
    }
}

#[derive(Clone, Debug)]
pub struct AnimationSlots<K> {
    next_generation: u64,
    live: HashMap<K, u64>,
}

impl<K> Default for AnimationSlots<K> {
    fn default() -> Self {
        Self { next_generation: 0, live: HashMap::new() }
    }
}

impl<K: Copy + Eq + Hash> AnimationSlots<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an animation on `key`, cancelling whatever ran there before.
    pub fn begin(&mut self, key: K) -> Ticket<K> {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.live.insert(key, generation);
        Ticket { key, generation }
    }

    #[must_use]
    pub fn is_live(&self, ticket: &Ticket<K>) -> bool {
        self.live.get(&ticket.key) == Some(&ticket.generation)
    }

    /// Release the slot after a natural finish. Stale tickets are ignored.
    pub fn finish(&mut self, ticket: &Ticket<K>) {
        if self.is_live(ticket) {
            self.live.remove(&ticket.key);
        }
    }

    /// Cancel the animation on `key`. Returns `true` if one was running.
    pub fn cancel(&mut self, key: K) -> bool {
        self.live.remove(&key).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.live.clear();
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.live.len()
    }
}
