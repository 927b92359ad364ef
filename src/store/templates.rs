// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{keys, Db};
use crate::models::{Cents, TransactionTemplate, TxKind};
use crate::store::{Listener, Subscribers};
use crate::utils::new_id;

pub struct NewTemplate {
    pub name: String,
    pub kind: TxKind,
    pub amount: Cents,
    pub category_id: String,
    pub wallet_id: Option<String>,
    pub tags: Vec<String>,
    pub note: String,
}

/// Saved transaction presets. Pure CRUD, no scheduling semantics.
#[derive(Default)]
pub struct TemplateStore {
    templates: Vec<TransactionTemplate>,
    subs: Subscribers,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, db: &Db) {
        self.templates = db.get(keys::TEMPLATES, Vec::new());
    }

    pub fn add(&mut self, db: &Db, data: NewTemplate) -> TransactionTemplate {
        let template = TransactionTemplate {
            id: new_id(),
            name: data.name,
            kind: data.kind,
            amount: data.amount,
            category_id: data.category_id,
            wallet_id: data.wallet_id,
            tags: data.tags,
            note: data.note,
            sort_order: Some(self.templates.len() as u32),
        };
        self.templates.push(template.clone());
        self.commit(db);
        template
    }

    pub fn update(&mut self, db: &Db, id: &str, f: impl FnOnce(&mut TransactionTemplate)) {
        let Some(t) = self.templates.iter_mut().find(|t| t.id == id) else {
            return;
        };
        f(t);
        self.commit(db);
    }

    pub fn delete(&mut self, db: &Db, id: &str) {
        let before = self.templates.len();
        self.templates.retain(|t| t.id != id);
        if self.templates.len() != before {
            self.commit(db);
        }
    }

    pub fn get(&self, id: &str) -> Option<&TransactionTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn all(&self) -> &[TransactionTemplate] {
        &self.templates
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.subs.subscribe(listener);
    }

    fn commit(&self, db: &Db) {
        db.set(keys::TEMPLATES, &self.templates);
        self.subs.notify();
    }
}
