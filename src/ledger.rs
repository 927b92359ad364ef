// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::db::{keys, Db};
use crate::models::{Achievement, Backup, NewTransaction, Transaction, TxKind};
use crate::store::{
    AchievementStore, CategoryStore, GoalStore, RecurringStore, SettingsStore, TagStore,
    TemplateStore, TransactionStore, UndoPayload, UndoQueue, UnlockContext, WalletStore, WishStore,
};
use crate::utils::month_of;

pub const BACKUP_VERSION: &str = "2.0";

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("malformed backup document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The aggregate of all entity stores over one persistence adapter.
/// Constructed once at process start and passed by reference; there is
/// exactly one logical writer, so no locking.
pub struct Ledger {
    pub db: Db,
    pub transactions: TransactionStore,
    pub categories: CategoryStore,
    pub wallets: WalletStore,
    pub tags: TagStore,
    pub settings: SettingsStore,
    pub goals: GoalStore,
    pub recurring: RecurringStore,
    pub templates: TemplateStore,
    pub wishes: WishStore,
    pub achievements: AchievementStore,
    pub undo: UndoQueue,
}

impl Ledger {
    pub fn open() -> Result<Self> {
        Ok(Self::with_db(Db::open()?))
    }

    pub fn with_db(db: Db) -> Self {
        Ledger {
            db,
            transactions: TransactionStore::new(),
            categories: CategoryStore::new(),
            wallets: WalletStore::new(),
            tags: TagStore::new(),
            settings: SettingsStore::new(),
            goals: GoalStore::new(),
            recurring: RecurringStore::new(),
            templates: TemplateStore::new(),
            wishes: WishStore::new(),
            achievements: AchievementStore::new(),
            undo: UndoQueue::new(),
        }
    }

    /// Startup step one: load every store once.
    pub fn load_all(&mut self) {
        self.settings.load(&self.db);
        self.categories.load(&self.db);
        self.transactions.load(&self.db);
        self.goals.load(&self.db);
        self.wallets.load(&self.db);
        self.tags.load(&self.db);
        self.recurring.load(&self.db);
        self.templates.load(&self.db);
        self.wishes.load(&self.db);
        self.achievements.load(&self.db);
    }

    /// Startup step two: one atomic generation pass over due recurring
    /// items. Each due item yields a transaction carrying its id and is
    /// marked generated in the same pass, so due-ness is recomputed from
    /// the advanced anchor and a retry on the same day finds nothing due.
    pub fn generate_due(&mut self, today: NaiveDate) -> Vec<Transaction> {
        let due_ids: Vec<String> = self
            .recurring
            .due(today)
            .into_iter()
            .map(|r| r.id.clone())
            .collect();
        let mut generated = Vec::with_capacity(due_ids.len());
        for id in due_ids {
            let Some(r) = self.recurring.get(&id) else {
                continue;
            };
            let note = if r.note.is_empty() {
                "[auto]".to_string()
            } else {
                format!("[auto] {}", r.note)
            };
            let tx = self.transactions.add(
                &self.db,
                NewTransaction {
                    kind: r.kind,
                    amount: r.amount,
                    category_id: r.category_id.clone(),
                    wallet_id: r.wallet_id.clone(),
                    tags: r.tags.clone(),
                    note,
                    date: today,
                    recurring_id: Some(id.clone()),
                },
            );
            self.recurring.mark_generated(&self.db, &id, today);
            generated.push(tx);
        }
        generated
    }

    /// Assemble the snapshot the achievement evaluator reads. Budget is
    /// considered kept when no limit is set or this month's expenses stay
    /// within it.
    pub fn unlock_context(&self, today: NaiveDate) -> UnlockContext {
        let record_dates: Vec<NaiveDate> = self
            .transactions
            .all()
            .iter()
            .map(|t| t.date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let limit = self.settings.get().budget.monthly_limit;
        let spent = self
            .transactions
            .monthly_total(&month_of(today), TxKind::Expense);
        UnlockContext {
            total_records: self.transactions.len() as u32,
            record_dates,
            total_saved: self.goals.total_saved(),
            completed_goals: self.goals.completed_count() as u32,
            budget_ok: limit > 0 && spent <= limit,
        }
    }

    /// Snapshot, evaluate, and surface at most the newest unlock.
    pub fn check_achievements(&mut self, today: NaiveDate) -> Option<Achievement> {
        let ctx = self.unlock_context(today);
        self.achievements.check_and_unlock(&self.db, &ctx, today)
    }

    /// Delete a batch of transactions and queue a single aggregate undo
    /// entry. Returns the undo id, or `None` when nothing matched.
    pub fn delete_transactions_undoable(&mut self, ids: &[String]) -> Option<String> {
        let removed = self.transactions.delete_many(&self.db, ids);
        if removed.is_empty() {
            return None;
        }
        let message = format!("Deleted {} transaction(s)", removed.len());
        Some(self.undo.push(&message, UndoPayload::Transactions(removed)))
    }

    pub fn delete_goal_undoable(&mut self, id: &str) -> Option<String> {
        let (goal, records) = self.goals.delete(&self.db, id)?;
        let message = format!("Deleted goal '{}'", goal.name);
        Some(self.undo.push(&message, UndoPayload::Goal { goal, records }))
    }

    pub fn delete_wish_undoable(&mut self, id: &str) -> Option<String> {
        let wish = self.wishes.delete(&self.db, id)?;
        let message = format!("Deleted wish '{}'", wish.name);
        Some(self.undo.push(&message, UndoPayload::Wish(wish)))
    }

    /// Interpret one undo payload by re-inserting the entities it carries.
    /// Expired or already-taken ids are silent no-ops.
    pub fn undo(&mut self, id: &str) {
        match self.undo.take(id) {
            Some(UndoPayload::Transactions(txs)) => self.transactions.restore(&self.db, txs),
            Some(UndoPayload::Goal { goal, records }) => {
                self.goals.restore(&self.db, goal, records)
            }
            Some(UndoPayload::Wish(wish)) => self.wishes.restore(&self.db, wish),
            None => {}
        }
    }

    pub fn export_backup(&self) -> Backup {
        Backup {
            version: BACKUP_VERSION.into(),
            exported_at: Utc::now(),
            transactions: Some(self.transactions.all().to_vec()),
            categories: Some(self.categories.all().to_vec()),
            goals: Some(self.goals.all().to_vec()),
            savings_records: Some(self.goals.all_records().to_vec()),
            settings: Some(self.settings.get().clone()),
            wallets: Some(self.wallets.all().to_vec()),
            tags: Some(self.tags.all().to_vec()),
            recurrings: Some(self.recurring.all().to_vec()),
            templates: Some(self.templates.all().to_vec()),
        }
    }

    /// Parse-then-apply: the whole document must deserialize before any
    /// collection is written, so a malformed import changes nothing.
    /// Collections absent from the document are left untouched; present
    /// ones replace the persisted collection wholesale, then every store
    /// reloads.
    pub fn import_backup(&mut self, json: &str) -> Result<(), BackupError> {
        let backup: Backup = serde_json::from_str(json)?;
        if let Some(v) = &backup.transactions {
            self.db.set(keys::TRANSACTIONS, v);
        }
        if let Some(v) = &backup.categories {
            self.db.set(keys::CATEGORIES, v);
        }
        if let Some(v) = &backup.goals {
            self.db.set(keys::GOALS, v);
        }
        if let Some(v) = &backup.savings_records {
            self.db.set(keys::SAVINGS_RECORDS, v);
        }
        if let Some(v) = &backup.settings {
            self.db.set(keys::SETTINGS, v);
        }
        if let Some(v) = &backup.wallets {
            self.db.set(keys::WALLETS, v);
        }
        if let Some(v) = &backup.tags {
            self.db.set(keys::TAGS, v);
        }
        if let Some(v) = &backup.recurrings {
            self.db.set(keys::RECURRING, v);
        }
        if let Some(v) = &backup.templates {
            self.db.set(keys::TEMPLATES, v);
        }
        self.load_all();
        Ok(())
    }

    /// Clear everything and reload the seed data.
    pub fn wipe(&mut self) {
        self.db.clear();
        self.load_all();
    }
}
