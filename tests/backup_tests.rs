// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use coinkeep::db::Db;
use coinkeep::ledger::Ledger;
use coinkeep::models::{NewTransaction, TxKind};
use coinkeep::{cli, commands::backup};

fn setup() -> Ledger {
    let mut ledger = Ledger::with_db(Db::open_in_memory().unwrap());
    ledger.load_all();
    ledger
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn populate(ledger: &mut Ledger) {
    ledger.transactions.add(
        &ledger.db,
        NewTransaction {
            kind: TxKind::Expense,
            amount: 1250,
            category_id: "exp-food".into(),
            wallet_id: Some("wallet-cash".into()),
            tags: vec!["tag-essential".into()],
            note: "lunch".into(),
            date: d(2024, 5, 1),
            recurring_id: None,
        },
    );
    let g = ledger
        .goals
        .add(&ledger.db, "bike", 50000, d(2025, 1, 1), "Target", "#fff");
    ledger.goals.deposit(&ledger.db, &g.id, 700, "start", d(2024, 5, 1));
    ledger.tags.add(&ledger.db, "custom", "#123456");
    ledger.settings.set_monthly_budget(&ledger.db, 90000);
}

#[test]
fn export_import_round_trip_is_observationally_identical() {
    let mut source = setup();
    populate(&mut source);
    let json = serde_json::to_string(&source.export_backup()).unwrap();

    let mut target = setup();
    target.import_backup(&json).unwrap();

    assert_eq!(target.transactions.all(), source.transactions.all());
    assert_eq!(target.goals.all(), source.goals.all());
    assert_eq!(target.goals.all_records(), source.goals.all_records());
    assert_eq!(target.tags.all(), source.tags.all());
    assert_eq!(target.wallets.all(), source.wallets.all());
    assert_eq!(target.categories.all(), source.categories.all());
    assert_eq!(target.settings.get(), source.settings.get());
    assert_eq!(target.recurring.all(), source.recurring.all());
    assert_eq!(target.templates.all(), source.templates.all());
}

#[test]
fn malformed_document_changes_nothing() {
    let mut ledger = setup();
    populate(&mut ledger);
    let before_txs = ledger.transactions.all().to_vec();
    let before_goals = ledger.goals.all().to_vec();

    assert!(ledger.import_backup("{ not json").is_err());
    assert!(ledger
        .import_backup(r#"{"version":"2.0","exportedAt":"2024-05-01T00:00:00Z","transactions":[{"bogus":true}]}"#)
        .is_err());

    assert_eq!(ledger.transactions.all(), &before_txs[..]);
    assert_eq!(ledger.goals.all(), &before_goals[..]);
}

#[test]
fn absent_collections_are_left_untouched() {
    let mut ledger = setup();
    populate(&mut ledger);
    let before_txs = ledger.transactions.all().to_vec();

    let partial = r##"{
        "version": "2.0",
        "exportedAt": "2024-05-01T00:00:00Z",
        "tags": [{"id": "t-only", "name": "only", "color": "#000"}]
    }"##;
    ledger.import_backup(partial).unwrap();

    assert_eq!(ledger.transactions.all(), &before_txs[..]);
    assert_eq!(ledger.tags.all().len(), 1);
    assert_eq!(ledger.tags.all()[0].id, "t-only");
}

fn backup_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    let Some(("backup", sub)) = matches.subcommand() else {
        panic!("no backup subcommand");
    };
    sub.clone()
}

#[test]
fn cli_export_import_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("backup.json");
    let path_str = path.to_str().unwrap();

    let mut source = setup();
    populate(&mut source);
    let sub = backup_matches(&["coinkeep", "backup", "export", "--out", path_str]);
    backup::handle(&mut source, &sub).unwrap();

    let mut target = setup();
    let sub = backup_matches(&["coinkeep", "backup", "import", "--path", path_str]);
    backup::handle(&mut target, &sub).unwrap();

    assert_eq!(target.transactions.all(), source.transactions.all());
    assert_eq!(target.goals.all_records(), source.goals.all_records());
    assert_eq!(target.settings.get(), source.settings.get());
}

#[test]
fn cli_csv_export_dumps_transactions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tx.csv");

    let mut ledger = setup();
    populate(&mut ledger);
    let sub = backup_matches(&[
        "coinkeep",
        "backup",
        "export",
        "--out",
        path.to_str().unwrap(),
        "--format",
        "csv",
    ]);
    backup::handle(&mut ledger, &sub).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(header, "date,kind,amount,category,wallet,note");
    assert!(contents.contains("12.50"));
    assert!(contents.contains("lunch"));
}

#[test]
fn wipe_clears_and_reseeds() {
    let mut ledger = setup();
    populate(&mut ledger);
    ledger.wipe();
    assert!(ledger.transactions.is_empty());
    assert!(ledger.goals.all().is_empty());
    // reference stores reseed their defaults
    assert!(!ledger.categories.all().is_empty());
    assert!(!ledger.wallets.all().is_empty());
    assert_eq!(ledger.settings.get().budget.monthly_limit, 0);
}
