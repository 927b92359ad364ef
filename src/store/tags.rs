// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{keys, Db};
use crate::defaults::DEFAULT_TAGS;
use crate::models::Tag;
use crate::store::{Listener, Subscribers};
use crate::utils::new_id;

#[derive(Default)]
pub struct TagStore {
    tags: Vec<Tag>,
    subs: Subscribers,
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, db: &Db) {
        let stored: Vec<Tag> = db.get(keys::TAGS, Vec::new());
        if stored.is_empty() {
            self.tags = DEFAULT_TAGS.clone();
            db.set(keys::TAGS, &self.tags);
        } else {
            self.tags = stored;
        }
    }

    pub fn add(&mut self, db: &Db, name: &str, color: &str) -> Tag {
        let tag = Tag {
            id: new_id(),
            name: name.into(),
            color: color.into(),
        };
        self.tags.push(tag.clone());
        self.commit(db);
        tag
    }

    pub fn update(&mut self, db: &Db, id: &str, f: impl FnOnce(&mut Tag)) {
        let Some(t) = self.tags.iter_mut().find(|t| t.id == id) else {
            return;
        };
        f(t);
        self.commit(db);
    }

    pub fn delete(&mut self, db: &Db, id: &str) {
        let before = self.tags.len();
        self.tags.retain(|t| t.id != id);
        if self.tags.len() != before {
            self.commit(db);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    pub fn by_ids(&self, ids: &[String]) -> Vec<&Tag> {
        self.tags.iter().filter(|t| ids.contains(&t.id)).collect()
    }

    pub fn all(&self) -> &[Tag] {
        &self.tags
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.subs.subscribe(listener);
    }

    fn commit(&self, db: &Db) {
        db.set(keys::TAGS, &self.tags);
        self.subs.notify();
    }
}
