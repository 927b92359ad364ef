// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use std::cell::Cell;
use std::rc::Rc;

use coinkeep::db::Db;
use coinkeep::ledger::Ledger;
use coinkeep::models::{NewTransaction, TransactionPatch, TxFilter, TxKind};
use coinkeep::{cli, commands::transactions};

fn setup() -> Ledger {
    let mut ledger = Ledger::with_db(Db::open_in_memory().unwrap());
    ledger.load_all();
    ledger
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn tx(kind: TxKind, amount: i64, date: NaiveDate) -> NewTransaction {
    NewTransaction {
        kind,
        amount,
        category_id: "exp-food".into(),
        wallet_id: None,
        tags: Vec::new(),
        note: String::new(),
        date,
        recurring_id: None,
    }
}

#[test]
fn monthly_total_sums_only_matching_month_and_kind() {
    let mut ledger = setup();
    ledger.transactions.add(&ledger.db, tx(TxKind::Expense, 1200, d(2024, 5, 3)));
    ledger.transactions.add(&ledger.db, tx(TxKind::Expense, 800, d(2024, 5, 20)));
    ledger.transactions.add(&ledger.db, tx(TxKind::Income, 5000, d(2024, 5, 10)));
    ledger.transactions.add(&ledger.db, tx(TxKind::Expense, 999, d(2024, 6, 1)));

    assert_eq!(ledger.transactions.monthly_total("2024-05", TxKind::Expense), 2000);
    assert_eq!(ledger.transactions.monthly_total("2024-05", TxKind::Income), 5000);

    // adding a non-matching transaction must not change the result
    ledger.transactions.add(&ledger.db, tx(TxKind::Income, 77, d(2024, 4, 30)));
    assert_eq!(ledger.transactions.monthly_total("2024-05", TxKind::Expense), 2000);
}

#[test]
fn filtered_orders_by_date_then_creation_descending() {
    let mut ledger = setup();
    // insert out of date order on purpose
    ledger.transactions.add(&ledger.db, tx(TxKind::Expense, 1, d(2024, 5, 1)));
    ledger.transactions.add(&ledger.db, tx(TxKind::Expense, 2, d(2024, 5, 2)));
    ledger.transactions.add(&ledger.db, tx(TxKind::Expense, 3, d(2024, 5, 1)));

    let rows = ledger.transactions.filtered(&TxFilter::default());
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].amount, 2);
    // same-day entries: newest created_at first
    assert_eq!(rows[1].amount, 3);
    assert_eq!(rows[2].amount, 1);
}

#[test]
fn filter_predicates_are_anded() {
    let mut ledger = setup();
    let mut a = tx(TxKind::Expense, 1500, d(2024, 5, 1));
    a.tags = vec!["tag-impulse".into()];
    a.note = "Late night Pizza".into();
    ledger.transactions.add(&ledger.db, a);
    let mut b = tx(TxKind::Expense, 400, d(2024, 5, 2));
    b.note = "bus ticket".into();
    ledger.transactions.add(&ledger.db, b);

    let f = TxFilter {
        tags: vec!["tag-impulse".into(), "tag-shared".into()],
        ..Default::default()
    };
    assert_eq!(ledger.transactions.filtered(&f).len(), 1);

    // keyword match is case-insensitive substring on the note
    let f = TxFilter {
        keyword: Some("pizza".into()),
        ..Default::default()
    };
    assert_eq!(ledger.transactions.filtered(&f).len(), 1);

    let f = TxFilter {
        min_amount: Some(500),
        max_amount: Some(2000),
        ..Default::default()
    };
    assert_eq!(ledger.transactions.filtered(&f)[0].amount, 1500);

    let f = TxFilter {
        start_date: Some(d(2024, 5, 2)),
        end_date: Some(d(2024, 5, 2)),
        ..Default::default()
    };
    assert_eq!(ledger.transactions.filtered(&f)[0].amount, 400);
}

#[test]
fn unknown_id_operations_are_silent_noops() {
    let mut ledger = setup();
    ledger.transactions.add(&ledger.db, tx(TxKind::Expense, 100, d(2024, 5, 1)));
    ledger.transactions.update(
        &ledger.db,
        "nope",
        TransactionPatch {
            amount: Some(999),
            ..Default::default()
        },
    );
    assert!(ledger.transactions.delete(&ledger.db, "nope").is_none());
    assert_eq!(ledger.transactions.len(), 1);
    assert_eq!(ledger.transactions.all()[0].amount, 100);
}

#[test]
fn update_merges_partial_fields() {
    let mut ledger = setup();
    let created = ledger.transactions.add(&ledger.db, tx(TxKind::Expense, 100, d(2024, 5, 1)));
    ledger.transactions.update(
        &ledger.db,
        &created.id,
        TransactionPatch {
            amount: Some(250),
            note: Some("groceries".into()),
            ..Default::default()
        },
    );
    let t = ledger.transactions.get(&created.id).unwrap();
    assert_eq!(t.amount, 250);
    assert_eq!(t.note, "groceries");
    assert_eq!(t.date, d(2024, 5, 1));
    assert_eq!(t.created_at, created.created_at);
}

#[test]
fn subscribers_fire_after_each_mutation() {
    let mut ledger = setup();
    let count = Rc::new(Cell::new(0u32));
    let seen = count.clone();
    ledger.transactions.subscribe(Box::new(move || {
        seen.set(seen.get() + 1);
    }));
    let created = ledger.transactions.add(&ledger.db, tx(TxKind::Expense, 100, d(2024, 5, 1)));
    ledger.transactions.delete(&ledger.db, &created.id);
    assert_eq!(count.get(), 2);
}

#[test]
fn persisted_state_survives_reload() {
    let mut ledger = setup();
    ledger.transactions.add(&ledger.db, tx(TxKind::Income, 4200, d(2024, 5, 1)));
    let before = ledger.transactions.all().to_vec();
    ledger.transactions.load(&ledger.db);
    assert_eq!(ledger.transactions.all(), &before[..]);
}

#[test]
fn cli_list_limit_respected() {
    let mut ledger = setup();
    for i in 1..=3 {
        ledger.transactions.add(&ledger.db, tx(TxKind::Expense, 10, d(2025, 1, i)));
    }
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["coinkeep", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&ledger, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].date, d(2025, 1, 3));
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}
