// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use coinkeep::db::Db;
use coinkeep::ledger::Ledger;
use coinkeep::models::{GoalStatus, RecordKind};

fn setup() -> Ledger {
    let mut ledger = Ledger::with_db(Db::open_in_memory().unwrap());
    ledger.load_all();
    ledger
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn withdraw_clamps_at_zero_and_keeps_both_records() {
    let mut ledger = setup();
    let g = ledger
        .goals
        .add(&ledger.db, "bike", 50000, d(2025, 1, 1), "Target", "#fff");
    ledger.goals.deposit(&ledger.db, &g.id, 500, "", d(2024, 5, 1));
    ledger.goals.withdraw(&ledger.db, &g.id, 700, "", d(2024, 5, 2));

    assert_eq!(ledger.goals.get(&g.id).unwrap().current_amount, 0);
    let records = ledger.goals.records_for(&g.id);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].kind, RecordKind::Withdraw);
    assert_eq!(records[0].amount, 700);
    assert_eq!(records[1].kind, RecordKind::Deposit);
}

#[test]
fn completed_and_abandoned_are_terminal() {
    let mut ledger = setup();
    let g = ledger
        .goals
        .add(&ledger.db, "trip", 10000, d(2025, 1, 1), "Target", "#fff");
    ledger.goals.complete(&ledger.db, &g.id);
    assert_eq!(ledger.goals.get(&g.id).unwrap().status, GoalStatus::Completed);

    // no transition out of a terminal state
    ledger.goals.abandon(&ledger.db, &g.id);
    assert_eq!(ledger.goals.get(&g.id).unwrap().status, GoalStatus::Completed);
    assert_eq!(ledger.goals.completed_count(), 1);
}

#[test]
fn update_cannot_touch_status_or_balance() {
    let mut ledger = setup();
    let g = ledger
        .goals
        .add(&ledger.db, "trip", 10000, d(2025, 1, 1), "Target", "#fff");
    ledger.goals.deposit(&ledger.db, &g.id, 300, "", d(2024, 5, 1));
    ledger.goals.update(&ledger.db, &g.id, |goal| {
        goal.name = "big trip".into();
        goal.status = GoalStatus::Completed;
        goal.current_amount = 999_999;
    });
    let g = ledger.goals.get(&g.id).unwrap();
    assert_eq!(g.name, "big trip");
    assert_eq!(g.status, GoalStatus::Active);
    assert_eq!(g.current_amount, 300);
}

#[test]
fn delete_cascades_records() {
    let mut ledger = setup();
    let a = ledger
        .goals
        .add(&ledger.db, "a", 1000, d(2025, 1, 1), "Target", "#fff");
    let b = ledger
        .goals
        .add(&ledger.db, "b", 1000, d(2025, 1, 1), "Target", "#fff");
    ledger.goals.deposit(&ledger.db, &a.id, 100, "", d(2024, 5, 1));
    ledger.goals.deposit(&ledger.db, &b.id, 200, "", d(2024, 5, 1));

    let (removed, records) = ledger.goals.delete(&ledger.db, &a.id).unwrap();
    assert_eq!(removed.id, a.id);
    assert_eq!(records.len(), 1);
    assert!(ledger.goals.records_for(&a.id).is_empty());
    assert_eq!(ledger.goals.records_for(&b.id).len(), 1);
}

#[test]
fn total_saved_spans_all_goals() {
    let mut ledger = setup();
    let a = ledger
        .goals
        .add(&ledger.db, "a", 1000, d(2025, 1, 1), "Target", "#fff");
    let b = ledger
        .goals
        .add(&ledger.db, "b", 1000, d(2025, 1, 1), "Target", "#fff");
    ledger.goals.deposit(&ledger.db, &a.id, 100, "", d(2024, 5, 1));
    ledger.goals.deposit(&ledger.db, &b.id, 250, "", d(2024, 5, 1));
    ledger.goals.withdraw(&ledger.db, &b.id, 50, "", d(2024, 5, 2));
    assert_eq!(ledger.goals.total_saved(), 300);
}
