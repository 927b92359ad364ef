// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::models::{NewTransaction, TxKind};
use crate::store::templates::NewTemplate;
use crate::utils::{fmt_cents, maybe_print_json, parse_cents, parse_date, pretty_table, today};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let t = ledger.templates.add(
                &ledger.db,
                NewTemplate {
                    name: sub.get_one::<String>("name").unwrap().clone(),
                    kind: TxKind::parse(sub.get_one::<String>("kind").unwrap())?,
                    amount: parse_cents(sub.get_one::<String>("amount").unwrap())?,
                    category_id: sub.get_one::<String>("category").unwrap().clone(),
                    wallet_id: sub.get_one::<String>("wallet").cloned(),
                    tags: Vec::new(),
                    note: sub.get_one::<String>("note").cloned().unwrap_or_default(),
                },
            );
            println!("Added template '{}' ({})", t.name, t.id);
        }
        Some(("list", sub)) => {
            let list = ledger.templates.all();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &list)? {
                let data = list
                    .iter()
                    .map(|t| {
                        vec![
                            t.id.clone(),
                            t.name.clone(),
                            fmt_cents(t.amount),
                            t.category_id.clone(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Name", "Amount", "Category"], data));
            }
        }
        Some(("use", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let date = match sub.get_one::<String>("date") {
                Some(d) => parse_date(d)?,
                None => today(),
            };
            let Some(t) = ledger.templates.get(id).cloned() else {
                println!("No template '{}'", id);
                return Ok(());
            };
            let tx = ledger.transactions.add(
                &ledger.db,
                NewTransaction {
                    kind: t.kind,
                    amount: t.amount,
                    category_id: t.category_id,
                    wallet_id: t.wallet_id,
                    tags: t.tags,
                    note: t.note,
                    date,
                    recurring_id: None,
                },
            );
            println!("Recorded {} from template '{}'", fmt_cents(tx.amount), t.name);
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            ledger.templates.delete(&ledger.db, id);
            println!("Removed template '{}'", id);
        }
        _ => {}
    }
    Ok(())
}
