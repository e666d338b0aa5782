// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::TransactionType;
use crate::schedule::{project, RecurrenceTemplate};
use crate::stats::filter_by_range;
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.remove_transaction(id);
            println!("Removed transaction '{}'", id);
        }
        Some(("toggle", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.toggle_paid(id);
            println!("Toggled paid flag on '{}'", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("desc").unwrap().trim().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if description.is_empty() || amount <= Decimal::ZERO {
        println!("Nothing created: a transaction needs a description and a positive amount.");
        return Ok(());
    }

    let start = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Utc::now().date_naive(),
    };
    let months = (*sub.get_one::<u32>("months").unwrap()).max(1);

    let template = RecurrenceTemplate {
        description,
        amount,
        r#type: if sub.get_flag("income") {
            TransactionType::Income
        } else {
            TransactionType::Expense
        },
        category: sub.get_one::<String>("category").unwrap().clone(),
        is_paid: sub.get_flag("paid"),
    };
    let generated = project(&template, start, months)?;
    println!(
        "Recorded {} transaction(s) '{}' starting {}",
        generated.len(),
        template.description,
        start
    );
    store.add_transactions(generated);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub description: String,
    pub amount: String,
    pub r#type: String,
    pub category: String,
    pub paid: bool,
    pub id: String,
}

pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let ledger = store.ledger();
    let mut transactions = ledger.transactions.clone();
    if sub.get_one::<String>("from").is_some() || sub.get_one::<String>("to").is_some() {
        let from = match sub.get_one::<String>("from") {
            Some(s) => parse_date(s)?,
            None => chrono::NaiveDate::MIN,
        };
        let to = match sub.get_one::<String>("to") {
            Some(s) => parse_date(s)?,
            None => chrono::NaiveDate::MAX,
        };
        transactions = filter_by_range(&transactions, from, to);
    }
    if let Some(limit) = sub.get_one::<usize>("limit") {
        transactions.truncate(*limit);
    }
    Ok(transactions
        .iter()
        .map(|t| TransactionRow {
            date: t.date.to_string(),
            description: t.description.clone(),
            amount: t.amount.round_dp(2).to_string(),
            r#type: match t.r#type {
                TransactionType::Income => "income".into(),
                TransactionType::Expense => "expense".into(),
            },
            category: t.category.clone(),
            paid: t.is_paid,
            id: t.id.clone(),
        })
        .collect())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.r#type.clone(),
                    r.category.clone(),
                    if r.paid { "Pago".into() } else { "Pendente".into() },
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Description", "Amount", "Type", "Category", "Status", "Id"],
                rows,
            )
        );
    }
    Ok(())
}
