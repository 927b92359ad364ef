// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::utils::{fmt_cents, maybe_print_json, parse_cents, pretty_table};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let icon = sub.get_one::<String>("icon").map(String::as_str).unwrap_or("Wallet");
            let color = sub.get_one::<String>("color").map(String::as_str).unwrap_or("#6b7280");
            let w = ledger.wallets.add(&ledger.db, name, icon, color);
            println!("Added wallet '{}' ({})", w.name, w.id);
        }
        Some(("list", sub)) => {
            let list = ledger.wallets.all();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &list)? {
                let data = list
                    .iter()
                    .map(|w| {
                        vec![
                            w.id.clone(),
                            w.name.clone(),
                            fmt_cents(w.balance),
                            if w.is_default { "yes".into() } else { "no".into() },
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Name", "Balance", "Default"], data));
                println!("Total: {}", fmt_cents(ledger.wallets.total_balance()));
            }
        }
        Some(("adjust", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let delta = parse_cents(sub.get_one::<String>("amount").unwrap())?;
            ledger.wallets.adjust_balance(&ledger.db, id, delta);
            println!("Adjusted '{}' by {}", id, fmt_cents(delta));
        }
        Some(("transfer", sub)) => {
            let from = sub.get_one::<String>("from").unwrap();
            let to = sub.get_one::<String>("to").unwrap();
            let amount = parse_cents(sub.get_one::<String>("amount").unwrap())?;
            ledger.wallets.transfer(&ledger.db, from, to, amount);
            println!("Transferred {} from '{}' to '{}'", fmt_cents(amount), from, to);
        }
        Some(("default", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            ledger.wallets.set_default(&ledger.db, id);
            println!("Default wallet is now '{}'", id);
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            ledger.wallets.delete(&ledger.db, id);
            println!("Removed wallet '{}'", id);
        }
        _ => {}
    }
    Ok(())
}
