// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{keys, Db};
use crate::defaults::DEFAULT_CATEGORIES;
use crate::models::{Category, TxKind};
use crate::store::{Listener, Subscribers};
use crate::utils::new_id;

#[derive(Default)]
pub struct CategoryStore {
    categories: Vec<Category>,
    subs: Subscribers,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// First load seeds the default category set.
    pub fn load(&mut self, db: &Db) {
        let stored: Vec<Category> = db.get(keys::CATEGORIES, Vec::new());
        if stored.is_empty() {
            self.categories = DEFAULT_CATEGORIES.clone();
            db.set(keys::CATEGORIES, &self.categories);
        } else {
            self.categories = stored;
        }
    }

    pub fn add(&mut self, db: &Db, name: &str, kind: TxKind, icon: &str, color: &str) -> Category {
        let category = Category {
            id: new_id(),
            name: name.into(),
            kind,
            icon: icon.into(),
            color: color.into(),
            is_default: false,
            budget_limit: None,
            sort_order: None,
        };
        self.categories.push(category.clone());
        self.commit(db);
        category
    }

    pub fn update(&mut self, db: &Db, id: &str, f: impl FnOnce(&mut Category)) {
        let Some(c) = self.categories.iter_mut().find(|c| c.id == id) else {
            return;
        };
        f(c);
        self.commit(db);
    }

    pub fn delete(&mut self, db: &Db, id: &str) {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() != before {
            self.commit(db);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn by_kind(&self, kind: TxKind) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.kind == kind).collect()
    }

    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.subs.subscribe(listener);
    }

    fn commit(&self, db: &Db) {
        db.set(keys::CATEGORIES, &self.categories);
        self.subs.notify();
    }
}
