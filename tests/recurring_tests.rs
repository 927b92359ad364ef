// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use coinkeep::db::Db;
use coinkeep::ledger::Ledger;
use coinkeep::models::{Frequency, TxKind};
use coinkeep::store::recurring::NewRecurring;

fn setup() -> Ledger {
    let mut ledger = Ledger::with_db(Db::open_in_memory().unwrap());
    ledger.load_all();
    ledger
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn rent(frequency: Frequency, start: NaiveDate) -> NewRecurring {
    NewRecurring {
        kind: TxKind::Expense,
        amount: 80000,
        category_id: "exp-home".into(),
        wallet_id: None,
        tags: Vec::new(),
        note: "rent".into(),
        frequency,
        start_date: start,
        end_date: None,
    }
}

#[test]
fn generate_creates_annotated_transactions_and_advances_anchor() {
    let mut ledger = setup();
    let item = ledger.recurring.add(&ledger.db, rent(Frequency::Monthly, d(2024, 1, 31)));
    let today = d(2024, 2, 29);

    let generated = ledger.generate_due(today);
    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].recurring_id.as_deref(), Some(item.id.as_str()));
    assert_eq!(generated[0].note, "[auto] rent");
    assert_eq!(generated[0].date, today);
    assert_eq!(generated[0].amount, 80000);
    assert_eq!(
        ledger.recurring.get(&item.id).unwrap().last_generated,
        Some(today)
    );
}

#[test]
fn generate_pass_is_idempotent_within_a_day() {
    let mut ledger = setup();
    ledger.recurring.add(&ledger.db, rent(Frequency::Daily, d(2024, 3, 1)));
    let today = d(2024, 3, 10);

    assert_eq!(ledger.generate_due(today).len(), 1);
    // a retry on the same day finds nothing due
    assert_eq!(ledger.generate_due(today).len(), 0);
    assert_eq!(ledger.transactions.len(), 1);

    // the next day it fires again
    assert_eq!(ledger.generate_due(d(2024, 3, 11)).len(), 1);
}

#[test]
fn empty_note_gets_bare_auto_marker() {
    let mut ledger = setup();
    let mut item = rent(Frequency::Daily, d(2024, 3, 1));
    item.note = String::new();
    ledger.recurring.add(&ledger.db, item);
    let generated = ledger.generate_due(d(2024, 3, 1));
    assert_eq!(generated[0].note, "[auto]");
}

#[test]
fn inactive_items_do_not_generate() {
    let mut ledger = setup();
    let item = ledger.recurring.add(&ledger.db, rent(Frequency::Daily, d(2024, 3, 1)));
    ledger.recurring.toggle_active(&ledger.db, &item.id);
    assert!(ledger.generate_due(d(2024, 3, 10)).is_empty());

    ledger.recurring.toggle_active(&ledger.db, &item.id);
    assert_eq!(ledger.generate_due(d(2024, 3, 10)).len(), 1);
}

#[test]
fn ended_items_do_not_generate() {
    let mut ledger = setup();
    let mut item = rent(Frequency::Daily, d(2024, 3, 1));
    item.end_date = Some(d(2024, 3, 5));
    ledger.recurring.add(&ledger.db, item);
    assert!(ledger.generate_due(d(2024, 3, 6)).is_empty());
}
