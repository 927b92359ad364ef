// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{keys, Db};
use crate::defaults::default_settings;
use crate::models::{Cents, Theme, UserSettings};
use crate::store::{Listener, Subscribers};

pub struct SettingsStore {
    settings: UserSettings,
    subs: Subscribers,
}

impl Default for SettingsStore {
    fn default() -> Self {
        SettingsStore {
            settings: default_settings(),
            subs: Subscribers::default(),
        }
    }
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, db: &Db) {
        self.settings = db.get(keys::SETTINGS, default_settings());
    }

    pub fn get(&self) -> &UserSettings {
        &self.settings
    }

    pub fn update(&mut self, db: &Db, f: impl FnOnce(&mut UserSettings)) {
        f(&mut self.settings);
        self.commit(db);
    }

    pub fn set_monthly_budget(&mut self, db: &Db, amount: Cents) {
        self.settings.budget.monthly_limit = amount;
        self.commit(db);
    }

    pub fn set_category_budget(&mut self, db: &Db, category_id: &str, amount: Cents) {
        self.settings
            .budget
            .category_budgets
            .insert(category_id.into(), amount);
        self.commit(db);
    }

    pub fn toggle_theme(&mut self, db: &Db) {
        self.settings.theme = match self.settings.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.commit(db);
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.subs.subscribe(listener);
    }

    fn commit(&self, db: &Db) {
        db.set(keys::SETTINGS, &self.settings);
        self.subs.notify();
    }
}
