// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::models::{NewTransaction, Transaction, TxFilter, TxKind};
use crate::utils::{fmt_cents, maybe_print_json, month_of, parse_cents, parse_date, parse_month, pretty_table, today};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let kind = TxKind::parse(sub.get_one::<String>("kind").unwrap())?;
    let amount = parse_cents(sub.get_one::<String>("amount").unwrap())?;
    let category_id = sub.get_one::<String>("category").unwrap().clone();
    let wallet_id = sub.get_one::<String>("wallet").cloned();
    let tags: Vec<String> = sub
        .get_many::<String>("tag")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    let note = sub.get_one::<String>("note").cloned().unwrap_or_default();
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };

    let tx = ledger.transactions.add(
        &ledger.db,
        NewTransaction {
            kind,
            amount,
            category_id,
            wallet_id,
            tags,
            note,
            date,
            recurring_id: None,
        },
    );
    println!("Recorded {} on {} ({})", fmt_cents(tx.amount), tx.date, tx.id);
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let rows = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data: Vec<Vec<String>> = rows
            .iter()
            .map(|t| {
                let category = ledger
                    .categories
                    .get(&t.category_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| t.category_id.clone());
                vec![
                    t.id.clone(),
                    t.date.to_string(),
                    match t.kind {
                        TxKind::Income => "income".into(),
                        TxKind::Expense => "expense".into(),
                    },
                    fmt_cents(t.amount),
                    category,
                    t.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Kind", "Amount", "Category", "Note"], data)
        );
    }
    Ok(())
}

pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let mut filter = TxFilter::default();
    if let Some(kind) = sub.get_one::<String>("kind") {
        filter.kind = Some(TxKind::parse(kind)?);
    }
    filter.category_id = sub.get_one::<String>("category").cloned();
    filter.wallet_id = sub.get_one::<String>("wallet").cloned();
    filter.keyword = sub.get_one::<String>("keyword").cloned();

    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m)?),
        None => None,
    };
    let mut rows: Vec<Transaction> = ledger
        .transactions
        .filtered(&filter)
        .into_iter()
        .filter(|t| month.as_deref().map_or(true, |m| month_of(t.date) == m))
        .cloned()
        .collect();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn rm(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let ids: Vec<String> = sub.get_many::<String>("ids").unwrap().cloned().collect();
    match ledger.delete_transactions_undoable(&ids) {
        Some(undo_id) => {
            if let Some((_, msg)) = ledger.undo.pending().into_iter().find(|(id, _)| *id == undo_id)
            {
                println!("{msg}");
            }
        }
        None => println!("Nothing matched"),
    }
    Ok(())
}
