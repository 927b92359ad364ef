// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let color = sub.get_one::<String>("color").map(String::as_str).unwrap_or("#6b7280");
            let t = ledger.tags.add(&ledger.db, name, color);
            println!("Added tag '{}' ({})", t.name, t.id);
        }
        Some(("list", sub)) => {
            let list = ledger.tags.all();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &list)? {
                let data = list
                    .iter()
                    .map(|t| vec![t.id.clone(), t.name.clone(), t.color.clone()])
                    .collect();
                println!("{}", pretty_table(&["Id", "Name", "Color"], data));
            }
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            ledger.tags.delete(&ledger.db, id);
            println!("Removed tag '{}'", id);
        }
        _ => {}
    }
    Ok(())
}
