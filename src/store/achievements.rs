// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use std::collections::BTreeSet;

use crate::db::{keys, Db};
use crate::models::{Achievement, Cents, CheckInRecord, UnlockCondition};
use crate::store::{Listener, Subscribers};

/// Snapshot of the counters the unlock predicates read. Assembled by the
/// ledger from the other stores; the evaluator never reaches into them.
#[derive(Debug, Clone, Default)]
pub struct UnlockContext {
    pub total_records: u32,
    pub record_dates: Vec<NaiveDate>,
    pub total_saved: Cents,
    pub completed_goals: u32,
    pub budget_ok: bool,
}

/// Count of consecutive calendar days ending today. A set whose newest
/// date is not today scores zero; the walk stops at the first gap that
/// is not exactly one day.
pub fn consecutive_days(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let sorted: BTreeSet<NaiveDate> = dates.iter().copied().collect();
    let mut iter = sorted.iter().rev();
    match iter.next() {
        Some(&first) if first == today => {}
        _ => return 0,
    }
    let mut streak = 1;
    let mut prev = today;
    for &d in iter {
        if (prev - d).num_days() == 1 {
            streak += 1;
            prev = d;
        } else {
            break;
        }
    }
    streak
}

/// Achievements plus the daily check-in log they partly derive from.
#[derive(Default)]
pub struct AchievementStore {
    achievements: Vec<Achievement>,
    check_ins: Vec<CheckInRecord>,
    subs: Subscribers,
}

impl AchievementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load merges definitions added since the stored collection was
    /// written, so upgrades pick up new achievements without resetting
    /// unlocked ones.
    pub fn load(&mut self, db: &Db) {
        let definitions = crate::defaults::ACHIEVEMENT_DEFINITIONS.clone();
        let mut stored: Vec<Achievement> = db.get(keys::ACHIEVEMENTS, definitions.clone());
        if stored.len() < definitions.len() {
            let existing: BTreeSet<String> = stored.iter().map(|a| a.id.clone()).collect();
            stored.extend(
                definitions
                    .into_iter()
                    .filter(|a| !existing.contains(&a.id)),
            );
            db.set(keys::ACHIEVEMENTS, &stored);
        }
        self.achievements = stored;
        self.check_ins = db.get(keys::CHECKINS, Vec::new());
    }

    /// At most one check-in per calendar day; a second call on the same
    /// day is a silent no-op.
    pub fn check_in(
        &mut self,
        db: &Db,
        today: NaiveDate,
        goal_id: Option<String>,
        amount: Option<Cents>,
    ) {
        if self.check_ins.iter().any(|c| c.date == today) {
            return;
        }
        self.check_ins.insert(
            0,
            CheckInRecord {
                date: today,
                goal_id,
                amount,
            },
        );
        db.set(keys::CHECKINS, &self.check_ins);
        self.subs.notify();
    }

    pub fn is_checked_in(&self, today: NaiveDate) -> bool {
        self.check_ins.iter().any(|c| c.date == today)
    }

    pub fn streak(&self, today: NaiveDate) -> u32 {
        let dates: Vec<NaiveDate> = self.check_ins.iter().map(|c| c.date).collect();
        consecutive_days(&dates, today)
    }

    /// Evaluate every locked achievement against the snapshot. Unlocking
    /// is one-way: already-unlocked achievements are preserved verbatim
    /// and never re-tested. All newly satisfied achievements persist in
    /// this pass; the first of them is returned for surfacing.
    pub fn check_and_unlock(
        &mut self,
        db: &Db,
        ctx: &UnlockContext,
        today: NaiveDate,
    ) -> Option<Achievement> {
        let checkin_streak = self.streak(today);
        let now = Utc::now();
        let mut newly_unlocked: Option<Achievement> = None;

        for a in &mut self.achievements {
            if a.unlocked_at.is_some() {
                continue;
            }
            let satisfied = match a.condition {
                UnlockCondition::TotalRecords(n) => ctx.total_records >= n,
                UnlockCondition::RecordStreak(n) => {
                    consecutive_days(&ctx.record_dates, today) >= n
                }
                UnlockCondition::TotalSaved(cents) => ctx.total_saved >= cents,
                UnlockCondition::GoalsCompleted(n) => ctx.completed_goals >= n,
                UnlockCondition::BudgetKept => ctx.budget_ok,
                UnlockCondition::CheckInStreak(n) => checkin_streak >= n,
            };
            if satisfied {
                a.unlocked_at = Some(now);
                if newly_unlocked.is_none() {
                    newly_unlocked = Some(a.clone());
                }
            }
        }

        if newly_unlocked.is_some() {
            db.set(keys::ACHIEVEMENTS, &self.achievements);
            self.subs.notify();
        }
        newly_unlocked
    }

    pub fn all(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn check_ins(&self) -> &[CheckInRecord] {
        &self.check_ins
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements
            .iter()
            .filter(|a| a.unlocked_at.is_some())
            .count()
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.subs.subscribe(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn empty_set_has_no_streak() {
        assert_eq!(consecutive_days(&[], d(2024, 5, 10)), 0);
    }

    #[test]
    fn streak_requires_today() {
        let dates = vec![d(2024, 5, 8), d(2024, 5, 9)];
        assert_eq!(consecutive_days(&dates, d(2024, 5, 10)), 0);
        assert_eq!(consecutive_days(&dates, d(2024, 5, 9)), 2);
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let dates = vec![d(2024, 5, 10), d(2024, 5, 9), d(2024, 5, 7), d(2024, 5, 6)];
        assert_eq!(consecutive_days(&dates, d(2024, 5, 10)), 2);
    }

    #[test]
    fn duplicate_dates_count_once() {
        let dates = vec![d(2024, 5, 10), d(2024, 5, 10), d(2024, 5, 9)];
        assert_eq!(consecutive_days(&dates, d(2024, 5, 10)), 2);
    }
}
