// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use coinkeep::{cli, commands, db, ledger::Ledger, utils};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(concat!(env!("CARGO_CRATE_NAME"), "=warn")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut ledger = Ledger::open()?;
    ledger.load_all();

    // Generate anything due before handling the command, so listings and
    // totals already include today's recurring entries.
    let generated = ledger.generate_due(utils::today());
    if !generated.is_empty() {
        eprintln!("Generated {} recurring transaction(s)", generated.len());
    }

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data file at {}", db::db_path()?.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut ledger, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut ledger, sub)?,
        Some(("wallet", sub)) => commands::wallets::handle(&mut ledger, sub)?,
        Some(("tag", sub)) => commands::tags::handle(&mut ledger, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&mut ledger, sub)?,
        Some(("recurring", sub)) => commands::recurring::handle(&mut ledger, sub)?,
        Some(("template", sub)) => commands::templates::handle(&mut ledger, sub)?,
        Some(("wish", sub)) => commands::wishes::handle(&mut ledger, sub)?,
        Some(("checkin", sub)) => commands::achievements::handle_checkin(&mut ledger, sub)?,
        Some(("achievements", sub)) => commands::achievements::handle(&mut ledger, sub)?,
        Some(("stats", sub)) => commands::stats::handle(&ledger, sub)?,
        Some(("backup", sub)) => commands::backup::handle(&mut ledger, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&mut ledger, sub)?,
        Some(("wipe", _)) => {
            ledger.wipe();
            println!("All data cleared");
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
