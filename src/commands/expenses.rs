// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Expense, TransactionType};
use crate::schedule::{project, RecurrenceTemplate};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.remove_expense(id);
            println!("Removed expense '{}' (generated transactions kept)", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("desc").unwrap().trim().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if description.is_empty() || amount <= Decimal::ZERO {
        println!("Nothing created: an expense needs a description and a positive amount.");
        return Ok(());
    }

    let category = match sub.get_one::<String>("category") {
        Some(c) => c.clone(),
        None => store
            .ledger()
            .categories
            .first()
            .cloned()
            .unwrap_or_else(|| "Outros".into()),
    };
    let due = match sub.get_one::<String>("due") {
        Some(s) => parse_date(s)?,
        None => Utc::now().date_naive(),
    };
    let months = (*sub.get_one::<u32>("months").unwrap()).max(1);

    let expense = Expense {
        id: Uuid::new_v4().to_string(),
        description,
        amount,
        category,
        due_date: due,
        is_recurring: !sub.get_flag("one-off"),
    };

    let template = RecurrenceTemplate {
        description: expense.description.clone(),
        amount: expense.amount,
        r#type: TransactionType::Expense,
        category: expense.category.clone(),
        is_paid: false,
    };
    let generated = project(&template, due, months)?;

    println!(
        "Added expense '{}' ({}, {}) with {} generated transaction(s)",
        expense.description,
        fmt_money(&expense.amount),
        expense.category,
        generated.len()
    );
    store.add_expense(expense, generated);
    Ok(())
}

#[derive(Serialize)]
struct ExpenseRow {
    description: String,
    amount: String,
    category: String,
    due: String,
    recurring: bool,
    id: String,
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data: Vec<ExpenseRow> = store
        .ledger()
        .expenses
        .iter()
        .map(|e| ExpenseRow {
            description: e.description.clone(),
            amount: fmt_money(&e.amount),
            category: e.category.clone(),
            due: e.due_date.to_string(),
            recurring: e.is_recurring,
            id: e.id.clone(),
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.description.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.due.clone(),
                    if r.recurring { "Fixo".into() } else { "Único".into() },
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Description", "Amount", "Category", "Due", "Kind", "Id"],
                rows,
            )
        );
    }
    Ok(())
}
