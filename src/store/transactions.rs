// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use std::collections::HashSet;

use crate::db::{keys, Db};
use crate::models::{Cents, NewTransaction, Transaction, TransactionPatch, TxFilter, TxKind};
use crate::store::{Listener, Subscribers};
use crate::utils::{month_of, new_id};

/// The primary ledger collection. Newest entries are kept first by
/// insertion; queries re-sort by (date desc, created_at desc).
#[derive(Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    subs: Subscribers,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, db: &Db) {
        self.transactions = db.get(keys::TRANSACTIONS, Vec::new());
    }

    pub fn add(&mut self, db: &Db, data: NewTransaction) -> Transaction {
        let tx = Transaction {
            id: new_id(),
            kind: data.kind,
            amount: data.amount,
            category_id: data.category_id,
            wallet_id: data.wallet_id,
            tags: data.tags,
            note: data.note,
            date: data.date,
            created_at: Utc::now(),
            recurring_id: data.recurring_id,
        };
        self.transactions.insert(0, tx.clone());
        self.commit(db);
        tx
    }

    /// Merge a partial patch into an existing transaction. Unknown id is
    /// a silent no-op.
    pub fn update(&mut self, db: &Db, id: &str, patch: TransactionPatch) {
        let Some(tx) = self.transactions.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if let Some(kind) = patch.kind {
            tx.kind = kind;
        }
        if let Some(amount) = patch.amount {
            tx.amount = amount;
        }
        if let Some(category_id) = patch.category_id {
            tx.category_id = category_id;
        }
        if let Some(wallet_id) = patch.wallet_id {
            tx.wallet_id = Some(wallet_id);
        }
        if let Some(tags) = patch.tags {
            tx.tags = tags;
        }
        if let Some(note) = patch.note {
            tx.note = note;
        }
        if let Some(date) = patch.date {
            tx.date = date;
        }
        self.commit(db);
    }

    /// Remove one transaction, returning it so the caller can offer undo.
    pub fn delete(&mut self, db: &Db, id: &str) -> Option<Transaction> {
        let pos = self.transactions.iter().position(|t| t.id == id)?;
        let removed = self.transactions.remove(pos);
        self.commit(db);
        Some(removed)
    }

    /// Remove a batch of transactions in one persisted write.
    pub fn delete_many(&mut self, db: &Db, ids: &[String]) -> Vec<Transaction> {
        let id_set: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let mut removed = Vec::new();
        self.transactions.retain(|t| {
            if id_set.contains(t.id.as_str()) {
                removed.push(t.clone());
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            self.commit(db);
        }
        removed
    }

    /// Re-insert previously removed transactions verbatim (undo path).
    pub fn restore(&mut self, db: &Db, txs: Vec<Transaction>) {
        for tx in txs {
            self.transactions.insert(0, tx);
        }
        self.commit(db);
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Apply filter criteria as ANDed independent predicates and sort the
    /// result by date descending, then creation timestamp descending, so
    /// same-day entries order deterministically regardless of edit history.
    pub fn filtered(&self, f: &TxFilter) -> Vec<&Transaction> {
        let keyword = f.keyword.as_ref().map(|k| k.to_lowercase());
        let mut list: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| f.kind.map_or(true, |k| t.kind == k))
            .filter(|t| f.category_id.as_ref().map_or(true, |c| &t.category_id == c))
            .filter(|t| f.wallet_id.as_ref().map_or(true, |w| t.wallet_id.as_ref() == Some(w)))
            .filter(|t| f.tags.is_empty() || f.tags.iter().any(|tag| t.tags.contains(tag)))
            .filter(|t| f.start_date.map_or(true, |d| t.date >= d))
            .filter(|t| f.end_date.map_or(true, |d| t.date <= d))
            .filter(|t| f.min_amount.map_or(true, |a| t.amount >= a))
            .filter(|t| f.max_amount.map_or(true, |a| t.amount <= a))
            .filter(|t| {
                keyword
                    .as_ref()
                    .map_or(true, |k| t.note.to_lowercase().contains(k))
            })
            .collect();
        list.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        list
    }

    pub fn by_month(&self, ym: &str) -> Vec<&Transaction> {
        let mut list: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| month_of(t.date) == ym)
            .collect();
        list.sort_by(|a, b| b.date.cmp(&a.date));
        list
    }

    /// Sum of amounts for one month and kind. The building block for
    /// budgets, trends, and unlock predicates.
    pub fn monthly_total(&self, ym: &str, kind: TxKind) -> Cents {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind && month_of(t.date) == ym)
            .map(|t| t.amount)
            .sum()
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.subs.subscribe(listener);
    }

    fn commit(&self, db: &Db) {
        db.set(keys::TRANSACTIONS, &self.transactions);
        self.subs.notify();
    }
}
