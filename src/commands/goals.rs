// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::models::GoalStatus;
use crate::utils::{fmt_cents, maybe_print_json, parse_cents, parse_date, pretty_table, today};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let target = parse_cents(sub.get_one::<String>("target").unwrap())?;
            let deadline = parse_date(sub.get_one::<String>("deadline").unwrap())?;
            let icon = sub.get_one::<String>("icon").map(String::as_str).unwrap_or("Target");
            let color = sub.get_one::<String>("color").map(String::as_str).unwrap_or("#3b82f6");
            let g = ledger.goals.add(&ledger.db, name, target, deadline, icon, color);
            println!("Added goal '{}' ({})", g.name, g.id);
        }
        Some(("list", sub)) => {
            let list = ledger.goals.all();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &list)? {
                let data = list
                    .iter()
                    .map(|g| {
                        vec![
                            g.id.clone(),
                            g.name.clone(),
                            fmt_cents(g.current_amount),
                            fmt_cents(g.target_amount),
                            g.deadline.to_string(),
                            match g.status {
                                GoalStatus::Active => "active".into(),
                                GoalStatus::Completed => "completed".into(),
                                GoalStatus::Abandoned => "abandoned".into(),
                            },
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(
                        &["Id", "Name", "Saved", "Target", "Deadline", "Status"],
                        data
                    )
                );
            }
        }
        Some(("deposit", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let amount = parse_cents(sub.get_one::<String>("amount").unwrap())?;
            let note = sub.get_one::<String>("note").cloned().unwrap_or_default();
            ledger.goals.deposit(&ledger.db, id, amount, &note, today());
            println!("Deposited {} into '{}'", fmt_cents(amount), id);
        }
        Some(("withdraw", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let amount = parse_cents(sub.get_one::<String>("amount").unwrap())?;
            let note = sub.get_one::<String>("note").cloned().unwrap_or_default();
            ledger.goals.withdraw(&ledger.db, id, amount, &note, today());
            println!("Withdrew {} from '{}'", fmt_cents(amount), id);
        }
        Some(("complete", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            ledger.goals.complete(&ledger.db, id);
            println!("Goal '{}' completed", id);
        }
        Some(("abandon", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            ledger.goals.abandon(&ledger.db, id);
            println!("Goal '{}' abandoned", id);
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            match ledger.delete_goal_undoable(id) {
                Some(_) => println!("Deleted goal '{}' and its records", id),
                None => println!("No goal '{}'", id),
            }
        }
        Some(("records", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let records = ledger.goals.records_for(id);
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &records)? {
                let data = records
                    .iter()
                    .map(|r| {
                        vec![
                            r.date.to_string(),
                            format!("{:?}", r.kind).to_lowercase(),
                            fmt_cents(r.amount),
                            r.note.clone(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Date", "Kind", "Amount", "Note"], data));
            }
        }
        _ => {}
    }
    Ok(())
}
