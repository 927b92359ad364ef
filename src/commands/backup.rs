// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::ledger::Ledger;
use crate::models::TxKind;
use crate::utils::fmt_cents;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("export", sub)) => export(ledger, sub),
        Some(("import", sub)) => import(ledger, sub),
        _ => Ok(()),
    }
}

fn export(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "json" => {
            let backup = ledger.export_backup();
            std::fs::write(out, serde_json::to_string_pretty(&backup)?)
                .with_context(|| format!("Write backup to {}", out))?;
        }
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "kind", "amount", "category", "wallet", "note"])?;
            for t in ledger.transactions.all() {
                let category = ledger
                    .categories
                    .get(&t.category_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| t.category_id.clone());
                wtr.write_record([
                    t.date.to_string(),
                    match t.kind {
                        TxKind::Income => "income".into(),
                        TxKind::Expense => "expense".into(),
                    },
                    fmt_cents(t.amount),
                    category,
                    t.wallet_id.clone().unwrap_or_default(),
                    t.note.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            eprintln!("Unknown format: {} (use json|csv)", fmt);
            return Ok(());
        }
    }
    println!("Exported to {}", out);
    Ok(())
}

fn import(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap();
    let json =
        std::fs::read_to_string(path).with_context(|| format!("Open backup {}", path))?;
    ledger
        .import_backup(&json)
        .with_context(|| format!("Import backup {}", path))?;
    println!(
        "Imported {}: {} transaction(s), {} goal(s)",
        path,
        ledger.transactions.len(),
        ledger.goals.all().len()
    );
    Ok(())
}
