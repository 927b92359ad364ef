// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;

use crate::db::{keys, Db};
use crate::models::{Cents, WishItem, WishPriority, WishStatus};
use crate::store::{Listener, Subscribers};
use crate::utils::new_id;

#[derive(Default)]
pub struct WishStore {
    wishes: Vec<WishItem>,
    subs: Subscribers,
}

impl WishStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, db: &Db) {
        self.wishes = db.get(keys::WISHES, Vec::new());
    }

    pub fn add(
        &mut self,
        db: &Db,
        name: &str,
        price: Cents,
        link: Option<String>,
        priority: WishPriority,
        linked_goal_id: Option<String>,
    ) -> WishItem {
        let wish = WishItem {
            id: new_id(),
            name: name.into(),
            price,
            link,
            priority,
            status: WishStatus::Pending,
            linked_goal_id,
            created_at: Utc::now(),
        };
        self.wishes.push(wish.clone());
        self.commit(db);
        wish
    }

    pub fn update(&mut self, db: &Db, id: &str, f: impl FnOnce(&mut WishItem)) {
        let Some(w) = self.wishes.iter_mut().find(|w| w.id == id) else {
            return;
        };
        f(w);
        self.commit(db);
    }

    pub fn delete(&mut self, db: &Db, id: &str) -> Option<WishItem> {
        let pos = self.wishes.iter().position(|w| w.id == id)?;
        let removed = self.wishes.remove(pos);
        self.commit(db);
        Some(removed)
    }

    /// Re-insert a previously deleted wish verbatim (undo path).
    pub fn restore(&mut self, db: &Db, wish: WishItem) {
        self.wishes.push(wish);
        self.commit(db);
    }

    pub fn mark_purchased(&mut self, db: &Db, id: &str) {
        self.transition(db, id, WishStatus::Purchased);
    }

    pub fn mark_abandoned(&mut self, db: &Db, id: &str) {
        self.transition(db, id, WishStatus::Abandoned);
    }

    /// Purchased/abandoned are terminal; only a pending wish may move.
    fn transition(&mut self, db: &Db, id: &str, status: WishStatus) {
        let Some(w) = self
            .wishes
            .iter_mut()
            .find(|w| w.id == id && w.status == WishStatus::Pending)
        else {
            return;
        };
        w.status = status;
        self.commit(db);
    }

    pub fn get(&self, id: &str) -> Option<&WishItem> {
        self.wishes.iter().find(|w| w.id == id)
    }

    pub fn all(&self) -> &[WishItem] {
        &self.wishes
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.subs.subscribe(listener);
    }

    fn commit(&self, db: &Db) {
        db.set(keys::WISHES, &self.wishes);
        self.subs.notify();
    }
}
