// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{keys, Db};
use crate::defaults::DEFAULT_WALLETS;
use crate::models::{Cents, Wallet};
use crate::store::{Listener, Subscribers};
use crate::utils::new_id;

/// Wallet balances are maintained only through explicit adjust/transfer
/// operations; they are independent of the transaction ledger.
#[derive(Default)]
pub struct WalletStore {
    wallets: Vec<Wallet>,
    subs: Subscribers,
}

impl WalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, db: &Db) {
        let stored: Vec<Wallet> = db.get(keys::WALLETS, Vec::new());
        if stored.is_empty() {
            self.wallets = DEFAULT_WALLETS.clone();
            db.set(keys::WALLETS, &self.wallets);
        } else {
            self.wallets = stored;
        }
    }

    pub fn add(&mut self, db: &Db, name: &str, icon: &str, color: &str) -> Wallet {
        let wallet = Wallet {
            id: new_id(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            balance: 0,
            is_default: false,
            sort_order: Some(self.wallets.len() as u32),
        };
        self.wallets.push(wallet.clone());
        self.commit(db);
        wallet
    }

    pub fn update(&mut self, db: &Db, id: &str, f: impl FnOnce(&mut Wallet)) {
        let Some(w) = self.wallets.iter_mut().find(|w| w.id == id) else {
            return;
        };
        f(w);
        self.commit(db);
    }

    pub fn delete(&mut self, db: &Db, id: &str) {
        let before = self.wallets.len();
        self.wallets.retain(|w| w.id != id);
        if self.wallets.len() != before {
            self.commit(db);
        }
    }

    pub fn adjust_balance(&mut self, db: &Db, id: &str, delta: Cents) {
        let Some(w) = self.wallets.iter_mut().find(|w| w.id == id) else {
            return;
        };
        w.balance += delta;
        self.commit(db);
    }

    /// Move an amount between two wallets in one persisted batch.
    pub fn transfer(&mut self, db: &Db, from: &str, to: &str, amount: Cents) {
        let mut touched = false;
        for w in &mut self.wallets {
            if w.id == from {
                w.balance -= amount;
                touched = true;
            } else if w.id == to {
                w.balance += amount;
                touched = true;
            }
        }
        if touched {
            self.commit(db);
        }
    }

    /// Advisory single-default: marking one wallet default clears the
    /// flag on the rest.
    pub fn set_default(&mut self, db: &Db, id: &str) {
        if !self.wallets.iter().any(|w| w.id == id) {
            return;
        }
        for w in &mut self.wallets {
            w.is_default = w.id == id;
        }
        self.commit(db);
    }

    pub fn get(&self, id: &str) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.id == id)
    }

    pub fn total_balance(&self) -> Cents {
        self.wallets.iter().map(|w| w.balance).sum()
    }

    pub fn all(&self) -> &[Wallet] {
        &self.wallets
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.subs.subscribe(listener);
    }

    fn commit(&self, db: &Db) {
        db.set(keys::WALLETS, &self.wallets);
        self.subs.notify();
    }
}
