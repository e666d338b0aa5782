// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::stats::{category_breakdown, compute_stats, filter_by_range};
use crate::store::Store;
use crate::utils::{default_range, fmt_money, maybe_print_json, parse_date, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let (start, end) = resolve_range(m)?;
    let ledger = store.ledger();
    let filtered = filter_by_range(&ledger.transactions, start, end);
    let stats = compute_stats(&filtered, &ledger.clients);

    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &stats)? {
        return Ok(());
    }

    println!("Period {} → {}", start, end);
    let rows = vec![
        vec!["Receita total".into(), fmt_money(&stats.total_income)],
        vec!["Despesas totais".into(), fmt_money(&stats.total_expense)],
        vec!["Lucro líquido".into(), fmt_money(&stats.net_profit)],
        vec!["Recorrência ativa".into(), fmt_money(&stats.active_recurring)],
        vec!["Recebido".into(), fmt_money(&stats.total_received)],
        vec!["A receber".into(), fmt_money(&stats.total_to_receive)],
    ];
    println!("{}", pretty_table(&["Indicator", "Value"], rows));

    let breakdown = category_breakdown(&ledger.expenses);
    if !breakdown.is_empty() {
        let total: Decimal = breakdown.iter().map(|(_, v)| *v).sum();
        let rows: Vec<Vec<String>> = breakdown
            .iter()
            .map(|(cat, value)| {
                let share = if total.is_zero() {
                    Decimal::ZERO
                } else {
                    (*value / total * Decimal::ONE_HUNDRED).round_dp(1)
                };
                vec![cat.clone(), fmt_money(value), format!("{}%", share)]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Monthly cost", "Share"], rows));
    }
    Ok(())
}

pub fn resolve_range(m: &clap::ArgMatches) -> Result<(NaiveDate, NaiveDate)> {
    let (default_start, default_end) = default_range(Utc::now().date_naive());
    let start = match m.get_one::<String>("from") {
        Some(s) => parse_date(s)?,
        None => default_start,
    };
    let end = match m.get_one::<String>("to") {
        Some(s) => parse_date(s)?,
        None => default_end,
    };
    Ok((start, end))
}
