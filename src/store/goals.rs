// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};

use crate::db::{keys, Db};
use crate::models::{Cents, GoalStatus, RecordKind, SavingsGoal, SavingsRecord};
use crate::store::{Listener, Subscribers};
use crate::utils::new_id;

/// Savings goals plus the append-only ledger of deposit/withdraw records.
/// `current_amount` is derived solely from the records and is never set
/// directly.
#[derive(Default)]
pub struct GoalStore {
    goals: Vec<SavingsGoal>,
    records: Vec<SavingsRecord>,
    subs: Subscribers,
}

impl GoalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, db: &Db) {
        self.goals = db.get(keys::GOALS, Vec::new());
        self.records = db.get(keys::SAVINGS_RECORDS, Vec::new());
    }

    pub fn add(
        &mut self,
        db: &Db,
        name: &str,
        target_amount: Cents,
        deadline: NaiveDate,
        icon: &str,
        color: &str,
    ) -> SavingsGoal {
        let goal = SavingsGoal {
            id: new_id(),
            name: name.into(),
            target_amount,
            current_amount: 0,
            deadline,
            status: GoalStatus::Active,
            icon: icon.into(),
            color: color.into(),
            created_at: Utc::now(),
        };
        self.goals.push(goal.clone());
        self.commit_goals(db);
        goal
    }

    /// Rename/retarget only; status and current_amount move exclusively
    /// through their dedicated operations.
    pub fn update(&mut self, db: &Db, id: &str, f: impl FnOnce(&mut SavingsGoal)) {
        let Some(g) = self.goals.iter_mut().find(|g| g.id == id) else {
            return;
        };
        let status = g.status;
        let current = g.current_amount;
        f(g);
        g.status = status;
        g.current_amount = current;
        self.commit_goals(db);
    }

    /// Cascade delete: the goal and every record referencing it go in one
    /// persisted batch. Returns the removed pair for undo.
    pub fn delete(&mut self, db: &Db, id: &str) -> Option<(SavingsGoal, Vec<SavingsRecord>)> {
        let pos = self.goals.iter().position(|g| g.id == id)?;
        let goal = self.goals.remove(pos);
        let mut removed_records = Vec::new();
        self.records.retain(|r| {
            if r.goal_id == id {
                removed_records.push(r.clone());
                false
            } else {
                true
            }
        });
        db.set(keys::GOALS, &self.goals);
        db.set(keys::SAVINGS_RECORDS, &self.records);
        self.subs.notify();
        Some((goal, removed_records))
    }

    /// Re-insert a previously deleted goal with its records (undo path).
    pub fn restore(&mut self, db: &Db, goal: SavingsGoal, records: Vec<SavingsRecord>) {
        self.goals.push(goal);
        for r in records {
            self.records.insert(0, r);
        }
        db.set(keys::GOALS, &self.goals);
        db.set(keys::SAVINGS_RECORDS, &self.records);
        self.subs.notify();
    }

    pub fn deposit(&mut self, db: &Db, goal_id: &str, amount: Cents, note: &str, date: NaiveDate) {
        self.append_record(db, goal_id, RecordKind::Deposit, amount, note, date);
    }

    /// Withdraw clamps the goal balance at zero; the record still carries
    /// the requested amount.
    pub fn withdraw(&mut self, db: &Db, goal_id: &str, amount: Cents, note: &str, date: NaiveDate) {
        self.append_record(db, goal_id, RecordKind::Withdraw, amount, note, date);
    }

    fn append_record(
        &mut self,
        db: &Db,
        goal_id: &str,
        kind: RecordKind,
        amount: Cents,
        note: &str,
        date: NaiveDate,
    ) {
        let Some(g) = self.goals.iter_mut().find(|g| g.id == goal_id) else {
            return;
        };
        g.current_amount = match kind {
            RecordKind::Deposit => g.current_amount + amount,
            RecordKind::Withdraw => (g.current_amount - amount).max(0),
        };
        let record = SavingsRecord {
            id: new_id(),
            goal_id: goal_id.into(),
            kind,
            amount,
            note: note.into(),
            date,
        };
        self.records.insert(0, record);
        db.set(keys::SAVINGS_RECORDS, &self.records);
        db.set(keys::GOALS, &self.goals);
        self.subs.notify();
    }

    pub fn complete(&mut self, db: &Db, id: &str) {
        self.transition(db, id, GoalStatus::Completed);
    }

    pub fn abandon(&mut self, db: &Db, id: &str) {
        self.transition(db, id, GoalStatus::Abandoned);
    }

    /// Completed/abandoned are terminal; only an active goal may move.
    fn transition(&mut self, db: &Db, id: &str, status: GoalStatus) {
        let Some(g) = self
            .goals
            .iter_mut()
            .find(|g| g.id == id && g.status == GoalStatus::Active)
        else {
            return;
        };
        g.status = status;
        self.commit_goals(db);
    }

    pub fn get(&self, id: &str) -> Option<&SavingsGoal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn all(&self) -> &[SavingsGoal] {
        &self.goals
    }

    pub fn records_for(&self, goal_id: &str) -> Vec<&SavingsRecord> {
        let mut list: Vec<&SavingsRecord> = self
            .records
            .iter()
            .filter(|r| r.goal_id == goal_id)
            .collect();
        list.sort_by(|a, b| b.date.cmp(&a.date));
        list
    }

    pub fn all_records(&self) -> &[SavingsRecord] {
        &self.records
    }

    /// Cumulative savings across all goals, for unlock predicates.
    pub fn total_saved(&self) -> Cents {
        self.goals.iter().map(|g| g.current_amount).sum()
    }

    pub fn completed_count(&self) -> usize {
        self.goals
            .iter()
            .filter(|g| g.status == GoalStatus::Completed)
            .count()
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.subs.subscribe(listener);
    }

    fn commit_goals(&self, db: &Db) {
        db.set(keys::GOALS, &self.goals);
        self.subs.notify();
    }
}
