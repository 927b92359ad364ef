// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::models::TxKind;
use crate::store::recurring::NewRecurring;
use crate::utils::{fmt_cents, maybe_print_json, parse_cents, parse_date, pretty_table, today};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("toggle", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            ledger.recurring.toggle_active(&ledger.db, id);
            println!("Toggled '{}'", id);
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            ledger.recurring.delete(&ledger.db, id);
            println!("Removed recurring '{}'", id);
        }
        Some(("generate", _)) => {
            let generated = ledger.generate_due(today());
            println!("Generated {} transaction(s)", generated.len());
        }
        _ => {}
    }
    Ok(())
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let kind = TxKind::parse(sub.get_one::<String>("kind").unwrap())?;
    let amount = parse_cents(sub.get_one::<String>("amount").unwrap())?;
    let category_id = sub.get_one::<String>("category").unwrap().clone();
    let frequency =
        crate::models::Frequency::parse(sub.get_one::<String>("frequency").unwrap())?;
    let start_date = parse_date(sub.get_one::<String>("start").unwrap())?;
    let end_date = match sub.get_one::<String>("end") {
        Some(d) => Some(parse_date(d)?),
        None => None,
    };
    let r = ledger.recurring.add(
        &ledger.db,
        NewRecurring {
            kind,
            amount,
            category_id,
            wallet_id: sub.get_one::<String>("wallet").cloned(),
            tags: Vec::new(),
            note: sub.get_one::<String>("note").cloned().unwrap_or_default(),
            frequency,
            start_date,
            end_date,
        },
    );
    println!("Added {} recurring '{}' ({})", r.frequency.label(), r.note, r.id);
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let list = ledger.recurring.all();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &list)? {
        let data = list
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.frequency.label().into(),
                    fmt_cents(r.amount),
                    r.start_date.to_string(),
                    r.last_generated
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".into()),
                    if r.is_active { "yes".into() } else { "no".into() },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Frequency", "Amount", "Start", "Last", "Active"],
                data
            )
        );
    }
    Ok(())
}
