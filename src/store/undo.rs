// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::{Duration, Instant};

use crate::models::{SavingsGoal, SavingsRecord, Transaction, WishItem};
use crate::utils::new_id;

pub const DEFAULT_UNDO_EXPIRY: Duration = Duration::from_millis(5000);

/// Tagged descriptor of what a reversal re-applies. Entities are carried
/// by value so the interpreter can re-insert them verbatim.
#[derive(Debug, Clone)]
pub enum UndoPayload {
    Transactions(Vec<Transaction>),
    Goal {
        goal: SavingsGoal,
        records: Vec<SavingsRecord>,
    },
    Wish(WishItem),
}

struct UndoEntry {
    id: String,
    message: String,
    payload: UndoPayload,
    expires_at: Instant,
}

/// Transient queue of reversible deletions. Never persisted. Entries
/// expire after a fixed window; expired entries are purged on every
/// access, which makes a fired timeout and a dismissed entry
/// indistinguishable to callers.
pub struct UndoQueue {
    entries: Vec<UndoEntry>,
    expiry: Duration,
}

impl Default for UndoQueue {
    fn default() -> Self {
        UndoQueue {
            entries: Vec::new(),
            expiry: DEFAULT_UNDO_EXPIRY,
        }
    }
}

impl UndoQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expiry(expiry: Duration) -> Self {
        UndoQueue {
            entries: Vec::new(),
            expiry,
        }
    }

    pub fn push(&mut self, message: &str, payload: UndoPayload) -> String {
        self.purge();
        let id = new_id();
        self.entries.push(UndoEntry {
            id: id.clone(),
            message: message.into(),
            payload,
            expires_at: Instant::now() + self.expiry,
        });
        id
    }

    /// Remove and return the payload for one entry. Absent or expired
    /// ids yield `None`, so a reversal can only ever run once.
    pub fn take(&mut self, id: &str) -> Option<UndoPayload> {
        self.purge();
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos).payload)
    }

    /// Drop an entry without applying its reversal.
    pub fn dismiss(&mut self, id: &str) {
        self.purge();
        self.entries.retain(|e| e.id != id);
    }

    /// Pending (id, message) pairs, oldest first.
    pub fn pending(&mut self) -> Vec<(String, String)> {
        self.purge();
        self.entries
            .iter()
            .map(|e| (e.id.clone(), e.message.clone()))
            .collect()
    }

    fn purge(&mut self) {
        let now = Instant::now();
        self.entries.retain(|e| e.expires_at > now);
    }
}
