// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Days, NaiveDate};

use crate::db::{keys, Db};
use crate::models::{Cents, Frequency, RecurringTransaction, TxKind};
use crate::store::{Listener, Subscribers};
use crate::utils::{new_id, next_occurrence};

pub struct NewRecurring {
    pub kind: TxKind,
    pub amount: Cents,
    pub category_id: String,
    pub wallet_id: Option<String>,
    pub tags: Vec<String>,
    pub note: String,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// Templates that generate transactions on a schedule. Due-computation
/// lives here; the generation workflow is driven by the ledger.
#[derive(Default)]
pub struct RecurringStore {
    recurrings: Vec<RecurringTransaction>,
    subs: Subscribers,
}

impl RecurringStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, db: &Db) {
        self.recurrings = db.get(keys::RECURRING, Vec::new());
    }

    pub fn add(&mut self, db: &Db, data: NewRecurring) -> RecurringTransaction {
        let item = RecurringTransaction {
            id: new_id(),
            kind: data.kind,
            amount: data.amount,
            category_id: data.category_id,
            wallet_id: data.wallet_id,
            tags: data.tags,
            note: data.note,
            frequency: data.frequency,
            start_date: data.start_date,
            end_date: data.end_date,
            last_generated: None,
            is_active: true,
        };
        self.recurrings.push(item.clone());
        self.commit(db);
        item
    }

    pub fn update(&mut self, db: &Db, id: &str, f: impl FnOnce(&mut RecurringTransaction)) {
        let Some(r) = self.recurrings.iter_mut().find(|r| r.id == id) else {
            return;
        };
        f(r);
        self.commit(db);
    }

    pub fn delete(&mut self, db: &Db, id: &str) {
        let before = self.recurrings.len();
        self.recurrings.retain(|r| r.id != id);
        if self.recurrings.len() != before {
            self.commit(db);
        }
    }

    pub fn toggle_active(&mut self, db: &Db, id: &str) {
        let Some(r) = self.recurrings.iter_mut().find(|r| r.id == id) else {
            return;
        };
        r.is_active = !r.is_active;
        self.commit(db);
    }

    /// Items whose next scheduled occurrence falls on or before `today`.
    /// Inactive items and items past their end date are excluded. The
    /// anchor is the last generation date, or one day before the start
    /// date for an item that has never fired (so it is due immediately at
    /// or after its start date).
    pub fn due(&self, today: NaiveDate) -> Vec<&RecurringTransaction> {
        self.recurrings
            .iter()
            .filter(|r| r.is_active)
            .filter(|r| r.end_date.map_or(true, |end| end >= today))
            .filter(|r| {
                let anchor = r
                    .last_generated
                    .unwrap_or_else(|| r.start_date - Days::new(1));
                next_occurrence(anchor, r.frequency) <= today
            })
            .collect()
    }

    /// Advance the anchor after the caller has created the generated
    /// transaction. After this, the item is not due again until a full
    /// period has passed.
    pub fn mark_generated(&mut self, db: &Db, id: &str, date: NaiveDate) {
        let Some(r) = self.recurrings.iter_mut().find(|r| r.id == id) else {
            return;
        };
        r.last_generated = Some(date);
        self.commit(db);
    }

    pub fn get(&self, id: &str) -> Option<&RecurringTransaction> {
        self.recurrings.iter().find(|r| r.id == id)
    }

    pub fn all(&self) -> &[RecurringTransaction] {
        &self.recurrings
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.subs.subscribe(listener);
    }

    fn commit(&self, db: &Db) {
        db.set(keys::RECURRING, &self.recurrings);
        self.subs.notify();
    }
}
