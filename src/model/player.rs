use serde::{Deserialize, Serialize};

use crate::model::reply::ItemDelta;

pub const MAX_HEALTH: i32 = 100;

/// Player-owned state: a bag of item names plus health and score
/// counters. Items match by exact string and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    inventory: Vec<String>,
    health: i32,
    score: u32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            inventory: Vec::new(),
            health: MAX_HEALTH,
            score: 0,
        }
    }
}

impl PlayerState {
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Applies one signed inventory operation. Removal takes out the
    /// first matching entry only; removing an item that is not held is
    /// a no-op, the generator is not trusted to know the inventory.
    pub fn apply_delta(&mut self, delta: &ItemDelta) {
        match delta {
            ItemDelta::Add(item) => self.inventory.push(item.clone()),
            ItemDelta::Remove(item) => {
                if let Some(pos) = self.inventory.iter().position(|i| i == item) {
                    self.inventory.remove(pos);
                }
            }
        }
    }

    /// Applies deltas strictly in the order given, so a removal followed
    /// by an addition of the same name re-adds it.
    pub fn apply_deltas(&mut self, deltas: &[ItemDelta]) {
        for delta in deltas {
            self.apply_delta(delta);
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Moves health by delta, clamped to [0, MAX_HEALTH].
    pub fn adjust_health(&mut self, delta: i32) {
        self.health = (self.health + delta).clamp(0, MAX_HEALTH);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn reset(&mut self) {
        self.inventory.clear();
        self.health = MAX_HEALTH;
        self.score = 0;
    }
}
