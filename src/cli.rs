// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

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

fn months_arg() -> Arg {
    Arg::new("months")
        .long("months")
        .value_parser(clap::value_parser!(u32))
        .default_value("1")
        .help("How many monthly occurrences to generate")
}

fn range_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .help("Range start, YYYY-MM-DD (default: first day of this month)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .help("Range end, YYYY-MM-DD (default: last day of next month)"),
    )
}

pub fn build_cli() -> Command {
    Command::new("caixa")
        .version(crate_version!())
        .about("Small-business finance tracker: recurring billing, expenses, and AI insights")
        .subcommand(Command::new("init").about("Initialize storage and print the data file path"))
        .subcommand(client_cmd())
        .subcommand(expense_cmd())
        .subcommand(category_cmd())
        .subcommand(tx_cmd())
        .subcommand(dashboard_cmd())
        .subcommand(range_args(
            Command::new("insights").about("Ask the AI service for up to 3 short insights"),
        ))
}

fn client_cmd() -> Command {
    Command::new("client")
        .about("Recurring clients")
        .subcommand(
            Command::new("add")
                .about("Add a client and generate its monthly billing transactions")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("email").long("email").default_value(""))
                .arg(Arg::new("cnpj").long("cnpj").default_value(""))
                .arg(
                    Arg::new("value")
                        .long("value")
                        .required(true)
                        .help("Monthly recurring value"),
                )
                .arg(
                    Arg::new("start")
                        .long("start")
                        .help("First billing date, YYYY-MM-DD (default: today)"),
                )
                .arg(months_arg())
                .arg(
                    Arg::new("inactive")
                        .long("inactive")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("arts")
                        .long("arts")
                        .value_parser(clap::value_parser!(u32))
                        .default_value("0")
                        .help("Art deliverables per month"),
                )
                .arg(
                    Arg::new("videos")
                        .long("videos")
                        .value_parser(clap::value_parser!(u32))
                        .default_value("0")
                        .help("Video deliverables per month"),
                )
                .arg(
                    Arg::new("paid-traffic")
                        .long("paid-traffic")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("obs").long("obs").default_value("")),
        )
        .subcommand(json_flags(Command::new("list").about("List clients")))
        .subcommand(
            Command::new("rm")
                .about("Remove a client (its generated billing stays in the history)")
                .arg(Arg::new("id").required(true)),
        )
}

fn expense_cmd() -> Command {
    Command::new("expense")
        .about("Agency expenses")
        .subcommand(
            Command::new("add")
                .about("Add an expense and generate its monthly transactions")
                .arg(Arg::new("desc").long("desc").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .help("Expense category (default: first registered category)"),
                )
                .arg(
                    Arg::new("due")
                        .long("due")
                        .help("Due date, YYYY-MM-DD (default: today)"),
                )
                .arg(months_arg())
                .arg(
                    Arg::new("one-off")
                        .long("one-off")
                        .action(ArgAction::SetTrue)
                        .help("Mark as non-recurring"),
                ),
        )
        .subcommand(json_flags(Command::new("list").about("List expenses")))
        .subcommand(
            Command::new("rm")
                .about("Remove an expense (generated transactions stay)")
                .arg(Arg::new("id").required(true)),
        )
}

fn category_cmd() -> Command {
    Command::new("category")
        .about("Expense categories")
        .subcommand(Command::new("add").arg(Arg::new("name").required(true)))
        .subcommand(Command::new("list"))
        .subcommand(
            Command::new("rm")
                .about("Remove a category (refused while any expense uses it)")
                .arg(Arg::new("name").required(true)),
        )
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Transactions")
        .subcommand(
            Command::new("add")
                .about("Record a transaction, optionally repeated monthly")
                .arg(Arg::new("desc").long("desc").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("income")
                        .long("income")
                        .action(ArgAction::SetTrue)
                        .help("Record income instead of expense"),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("YYYY-MM-DD (default: today)"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .default_value("Outros"),
                )
                .arg(Arg::new("paid").long("paid").action(ArgAction::SetTrue))
                .arg(months_arg()),
        )
        .subcommand(range_args(json_flags(
            Command::new("list").about("List transactions, newest first").arg(
                Arg::new("limit")
                    .long("limit")
                    .value_parser(clap::value_parser!(usize)),
            ),
        )))
        .subcommand(Command::new("rm").arg(Arg::new("id").required(true)))
        .subcommand(
            Command::new("toggle")
                .about("Flip the paid flag")
                .arg(Arg::new("id").required(true)),
        )
}

fn dashboard_cmd() -> Command {
    range_args(json_flags(Command::new("dashboard").about(
        "Totals over a date range plus the expense category breakdown",
    )))
}
