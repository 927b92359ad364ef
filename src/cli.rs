// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn opt(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}

fn req(name: &'static str, help: &'static str) -> Arg {
    opt(name, help).required(true)
}

pub fn build_cli() -> Command {
    Command::new("coinkeep")
        .about("Personal ledger: transactions, savings goals, recurring entries, streaks")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Initialize the data file"))
        .subcommand(
            Command::new("tx")
                .about("Record and query transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(req("kind", "income|expense"))
                        .arg(req("amount", "Amount, e.g. 12.50"))
                        .arg(req("category", "Category id"))
                        .arg(opt("wallet", "Wallet id"))
                        .arg(
                            opt("tag", "Tag id (repeatable)")
                                .action(ArgAction::Append),
                        )
                        .arg(opt("note", "Free-text note"))
                        .arg(opt("date", "YYYY-MM-DD, defaults to today")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(opt("month", "YYYY-MM"))
                        .arg(opt("kind", "income|expense"))
                        .arg(opt("category", "Category id"))
                        .arg(opt("wallet", "Wallet id"))
                        .arg(opt("keyword", "Substring match on note"))
                        .arg(
                            opt("limit", "Max rows")
                                .value_parser(clap::value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete transactions by id")
                        .arg(
                            Arg::new("ids")
                                .required(true)
                                .num_args(1..)
                                .help("Transaction ids"),
                        ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .arg(req("name", "Category name"))
                        .arg(req("kind", "income|expense"))
                        .arg(opt("icon", "Icon name"))
                        .arg(opt("color", "Hex color")),
                )
                .subcommand(json_flags(
                    Command::new("list").arg(opt("kind", "income|expense")),
                ))
                .subcommand(Command::new("rm").arg(req("id", "Category id"))),
        )
        .subcommand(
            Command::new("wallet")
                .about("Manage wallets")
                .subcommand(
                    Command::new("add")
                        .arg(req("name", "Wallet name"))
                        .arg(opt("icon", "Icon name"))
                        .arg(opt("color", "Hex color")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("adjust")
                        .about("Adjust a wallet balance by a signed amount")
                        .arg(req("id", "Wallet id"))
                        .arg(req("amount", "Signed amount, e.g. -3.20")),
                )
                .subcommand(
                    Command::new("transfer")
                        .arg(req("from", "Source wallet id"))
                        .arg(req("to", "Target wallet id"))
                        .arg(req("amount", "Amount")),
                )
                .subcommand(
                    Command::new("default")
                        .about("Mark a wallet as the default")
                        .arg(req("id", "Wallet id")),
                )
                .subcommand(Command::new("rm").arg(req("id", "Wallet id"))),
        )
        .subcommand(
            Command::new("tag")
                .about("Manage tags")
                .subcommand(
                    Command::new("add")
                        .arg(req("name", "Tag name"))
                        .arg(opt("color", "Hex color")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("rm").arg(req("id", "Tag id"))),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals and their deposit/withdraw ledger")
                .subcommand(
                    Command::new("add")
                        .arg(req("name", "Goal name"))
                        .arg(req("target", "Target amount"))
                        .arg(req("deadline", "YYYY-MM-DD"))
                        .arg(opt("icon", "Icon name"))
                        .arg(opt("color", "Hex color")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("deposit")
                        .arg(req("id", "Goal id"))
                        .arg(req("amount", "Amount"))
                        .arg(opt("note", "Note")),
                )
                .subcommand(
                    Command::new("withdraw")
                        .arg(req("id", "Goal id"))
                        .arg(req("amount", "Amount"))
                        .arg(opt("note", "Note")),
                )
                .subcommand(Command::new("complete").arg(req("id", "Goal id")))
                .subcommand(Command::new("abandon").arg(req("id", "Goal id")))
                .subcommand(Command::new("rm").arg(req("id", "Goal id")))
                .subcommand(json_flags(
                    Command::new("records").arg(req("id", "Goal id")),
                )),
        )
        .subcommand(
            Command::new("recurring")
                .about("Scheduled recurring transactions")
                .subcommand(
                    Command::new("add")
                        .arg(req("kind", "income|expense"))
                        .arg(req("amount", "Amount"))
                        .arg(req("category", "Category id"))
                        .arg(req("frequency", "daily|weekly|monthly|yearly"))
                        .arg(req("start", "Start date YYYY-MM-DD"))
                        .arg(opt("end", "End date YYYY-MM-DD"))
                        .arg(opt("wallet", "Wallet id"))
                        .arg(opt("note", "Note")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("toggle").arg(req("id", "Recurring id")))
                .subcommand(Command::new("rm").arg(req("id", "Recurring id")))
                .subcommand(
                    Command::new("generate")
                        .about("Generate transactions for everything currently due"),
                ),
        )
        .subcommand(
            Command::new("template")
                .about("Saved transaction presets")
                .subcommand(
                    Command::new("add")
                        .arg(req("name", "Template name"))
                        .arg(req("kind", "income|expense"))
                        .arg(req("amount", "Amount"))
                        .arg(req("category", "Category id"))
                        .arg(opt("wallet", "Wallet id"))
                        .arg(opt("note", "Note")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("use")
                        .about("Record a transaction from a template")
                        .arg(req("id", "Template id"))
                        .arg(opt("date", "YYYY-MM-DD, defaults to today")),
                )
                .subcommand(Command::new("rm").arg(req("id", "Template id"))),
        )
        .subcommand(
            Command::new("wish")
                .about("Wishlist items")
                .subcommand(
                    Command::new("add")
                        .arg(req("name", "Wish name"))
                        .arg(req("price", "Price"))
                        .arg(opt("link", "URL"))
                        .arg(opt("priority", "high|medium|low"))
                        .arg(opt("goal", "Linked goal id")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("bought").arg(req("id", "Wish id")))
                .subcommand(Command::new("drop").arg(req("id", "Wish id")))
                .subcommand(Command::new("rm").arg(req("id", "Wish id"))),
        )
        .subcommand(
            Command::new("checkin")
                .about("Daily check-in; at most one per calendar day")
                .arg(opt("goal", "Goal id to check in against"))
                .arg(opt("amount", "Amount saved with this check-in")),
        )
        .subcommand(json_flags(
            Command::new("achievements").about("Evaluate and list achievements"),
        ))
        .subcommand(
            Command::new("stats")
                .about("Monthly income/expense summary")
                .arg(req("month", "YYYY-MM")),
        )
        .subcommand(
            Command::new("backup")
                .about("Export or import the full data set")
                .subcommand(
                    Command::new("export")
                        .arg(req("out", "Output path"))
                        .arg(
                            opt("format", "json|csv (csv dumps transactions only)")
                                .default_value("json"),
                        ),
                )
                .subcommand(Command::new("import").arg(req("path", "Backup JSON path"))),
        )
        .subcommand(
            Command::new("settings")
                .about("User settings")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("budget")
                        .about("Set the monthly budget limit")
                        .arg(req("amount", "Amount"))
                        .arg(opt("category", "Scope the budget to one category id")),
                )
                .subcommand(Command::new("currency").arg(req("code", "Currency code")))
                .subcommand(Command::new("theme").about("Toggle light/dark")),
        )
        .subcommand(Command::new("wipe").about("Clear all data and reseed defaults"))
}
