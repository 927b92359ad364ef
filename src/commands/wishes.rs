// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::models::{WishPriority, WishStatus};
use crate::utils::{fmt_cents, maybe_print_json, parse_cents, pretty_table};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let price = parse_cents(sub.get_one::<String>("price").unwrap())?;
            let priority = match sub.get_one::<String>("priority") {
                Some(p) => WishPriority::parse(p)?,
                None => WishPriority::Medium,
            };
            let w = ledger.wishes.add(
                &ledger.db,
                name,
                price,
                sub.get_one::<String>("link").cloned(),
                priority,
                sub.get_one::<String>("goal").cloned(),
            );
            println!("Added wish '{}' ({})", w.name, w.id);
        }
        Some(("list", sub)) => {
            let list = ledger.wishes.all();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &list)? {
                let data = list
                    .iter()
                    .map(|w| {
                        vec![
                            w.id.clone(),
                            w.name.clone(),
                            fmt_cents(w.price),
                            format!("{:?}", w.priority).to_lowercase(),
                            match w.status {
                                WishStatus::Pending => "pending".into(),
                                WishStatus::Purchased => "purchased".into(),
                                WishStatus::Abandoned => "abandoned".into(),
                            },
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Name", "Price", "Priority", "Status"], data)
                );
            }
        }
        Some(("bought", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            ledger.wishes.mark_purchased(&ledger.db, id);
            println!("Wish '{}' marked purchased", id);
        }
        Some(("drop", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            ledger.wishes.mark_abandoned(&ledger.db, id);
            println!("Wish '{}' abandoned", id);
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            match ledger.delete_wish_undoable(id) {
                Some(_) => println!("Deleted wish '{}'", id),
                None => println!("No wish '{}'", id),
            }
        }
        _ => {}
    }
    Ok(())
}
