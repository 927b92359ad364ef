// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::utils::{fmt_cents, parse_cents};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) | None => {
            let s = ledger.settings.get();
            println!("{}", serde_json::to_string_pretty(s)?);
        }
        Some(("budget", sub)) => {
            let amount = parse_cents(sub.get_one::<String>("amount").unwrap())?;
            match sub.get_one::<String>("category") {
                Some(category_id) => {
                    ledger
                        .settings
                        .set_category_budget(&ledger.db, category_id, amount);
                    println!("Budget for '{}' set to {}", category_id, fmt_cents(amount));
                }
                None => {
                    ledger.settings.set_monthly_budget(&ledger.db, amount);
                    println!("Monthly budget set to {}", fmt_cents(amount));
                }
            }
        }
        Some(("currency", sub)) => {
            let code = sub.get_one::<String>("code").unwrap().to_uppercase();
            ledger.settings.update(&ledger.db, |s| s.currency = code.clone());
            println!("Currency set to {}", code);
        }
        Some(("theme", _)) => {
            ledger.settings.toggle_theme(&ledger.db);
            println!("Theme is now {:?}", ledger.settings.get().theme);
        }
        _ => {}
    }
    Ok(())
}
