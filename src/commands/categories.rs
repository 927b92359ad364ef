// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::models::TxKind;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let kind = TxKind::parse(sub.get_one::<String>("kind").unwrap())?;
            let icon = sub.get_one::<String>("icon").map(String::as_str).unwrap_or("Circle");
            let color = sub.get_one::<String>("color").map(String::as_str).unwrap_or("#6b7280");
            let c = ledger.categories.add(&ledger.db, name, kind, icon, color);
            println!("Added category '{}' ({})", c.name, c.id);
        }
        Some(("list", sub)) => {
            let kind = match sub.get_one::<String>("kind") {
                Some(k) => Some(TxKind::parse(k)?),
                None => None,
            };
            let list: Vec<_> = ledger
                .categories
                .all()
                .iter()
                .filter(|c| kind.map_or(true, |k| c.kind == k))
                .collect();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &list)? {
                let data = list
                    .iter()
                    .map(|c| {
                        vec![
                            c.id.clone(),
                            c.name.clone(),
                            format!("{:?}", c.kind).to_lowercase(),
                            if c.is_default { "yes".into() } else { "no".into() },
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Name", "Kind", "Default"], data));
            }
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            ledger.categories.delete(&ledger.db, id);
            println!("Removed category '{}'", id);
        }
        _ => {}
    }
    Ok(())
}
