// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::models::TxKind;
use crate::utils::{fmt_cents, parse_month, pretty_table};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(m.get_one::<String>("month").unwrap())?;
    let income = ledger.transactions.monthly_total(&month, TxKind::Income);
    let expense = ledger.transactions.monthly_total(&month, TxKind::Expense);
    let limit = ledger.settings.get().budget.monthly_limit;

    let mut rows = vec![
        vec!["Income".into(), fmt_cents(income)],
        vec!["Expense".into(), fmt_cents(expense)],
        vec!["Net".into(), fmt_cents(income - expense)],
    ];
    if limit > 0 {
        rows.push(vec!["Budget".into(), fmt_cents(limit)]);
        rows.push(vec!["Remaining".into(), fmt_cents(limit - expense)]);
    }
    println!("{}", pretty_table(&[month.as_str(), "Amount"], rows));
    Ok(())
}
