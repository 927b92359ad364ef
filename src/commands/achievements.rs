// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::utils::{maybe_print_json, parse_cents, pretty_table, today};

/// `achievements` runs one unlock pass and lists everything; `checkin`
/// records today's check-in first so streak conditions see it.
pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    let today = today();
    if let Some(unlocked) = ledger.check_achievements(today) {
        println!("Unlocked: {} - {}", unlocked.name, unlocked.description);
    }
    let list = ledger.achievements.all();
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &list)? {
        let data = list
            .iter()
            .map(|a| {
                vec![
                    a.name.clone(),
                    a.description.clone(),
                    a.unlocked_at
                        .map(|t| t.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "locked".into()),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Name", "Description", "Unlocked"], data));
        println!(
            "Check-in streak: {} day(s), {} of {} unlocked",
            ledger.achievements.streak(today),
            ledger.achievements.unlocked_count(),
            list.len()
        );
    }
    Ok(())
}

pub fn handle_checkin(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    let today = today();
    if ledger.achievements.is_checked_in(today) {
        println!("Already checked in today");
        return Ok(());
    }
    let goal_id = m.get_one::<String>("goal").cloned();
    let amount = match m.get_one::<String>("amount") {
        Some(a) => Some(parse_cents(a)?),
        None => None,
    };
    if let (Some(goal_id), Some(amount)) = (goal_id.as_deref(), amount) {
        ledger.goals.deposit(&ledger.db, goal_id, amount, "check-in", today);
    }
    ledger.achievements.check_in(&ledger.db, today, goal_id, amount);
    if let Some(unlocked) = ledger.check_achievements(today) {
        println!("Unlocked: {} - {}", unlocked.name, unlocked.description);
    }
    println!(
        "Checked in; streak is {} day(s)",
        ledger.achievements.streak(today)
    );
    Ok(())
}
