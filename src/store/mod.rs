// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod achievements;
pub mod categories;
pub mod goals;
pub mod recurring;
pub mod settings;
pub mod tags;
pub mod templates;
pub mod transactions;
pub mod undo;
pub mod wallets;
pub mod wishes;

pub use achievements::{consecutive_days, AchievementStore, UnlockContext};
pub use categories::CategoryStore;
pub use goals::GoalStore;
pub use recurring::RecurringStore;
pub use settings::SettingsStore;
pub use tags::TagStore;
pub use templates::TemplateStore;
pub use transactions::TransactionStore;
pub use undo::{UndoPayload, UndoQueue};
pub use wallets::WalletStore;
pub use wishes::WishStore;

pub type Listener = Box<dyn Fn()>;

/// Observer list invoked after each successful mutation. Listeners are
/// in-memory only and never persisted.
#[derive(Default)]
pub struct Subscribers {
    listeners: Vec<Listener>,
}

impl Subscribers {
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn notify(&self) {
        for l in &self.listeners {
            l();
        }
    }
}
