// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use caixa::models::{Client, ClientStatus, Expense, Transaction, TransactionType};
use caixa::stats::{category_breakdown, compute_stats, filter_by_range};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn tx(id: &str, amount: i64, r#type: TransactionType, date: NaiveDate, paid: bool) -> Transaction {
    Transaction {
        id: id.into(),
        description: id.into(),
        amount: Decimal::new(amount, 0),
        r#type,
        date,
        category: "Outros".into(),
        is_paid: paid,
    }
}

fn client(id: &str, value: i64, status: ClientStatus) -> Client {
    Client {
        id: id.into(),
        name: id.into(),
        cnpj: String::new(),
        email: String::new(),
        recurring_value: Decimal::new(value, 0),
        status,
        next_billing_date: d(2024, 1, 1),
        art_count: 0,
        video_count: 0,
        has_paid_traffic: false,
        observations: String::new(),
    }
}

#[test]
fn filter_range_is_inclusive_on_both_ends() {
    let txs = vec![
        tx("a", 10, TransactionType::Income, d(2024, 1, 1), true),
        tx("b", 10, TransactionType::Income, d(2024, 1, 31), true),
        tx("c", 10, TransactionType::Income, d(2024, 2, 1), true),
    ];
    let inside = filter_by_range(&txs, d(2024, 1, 1), d(2024, 1, 31));
    assert_eq!(inside.len(), 2);
    assert_eq!(inside[0].id, "a");
    assert_eq!(inside[1].id, "b");
}

#[test]
fn stats_totals_by_type_and_paid_flag() {
    let txs = vec![
        tx("i1", 2500, TransactionType::Income, d(2024, 1, 5), true),
        tx("i2", 1200, TransactionType::Income, d(2024, 1, 10), false),
        tx("e1", 150, TransactionType::Expense, d(2024, 1, 1), true),
        tx("e2", 300, TransactionType::Expense, d(2024, 1, 20), false),
    ];
    let stats = compute_stats(&txs, &[]);
    assert_eq!(stats.total_income, Decimal::new(3700, 0));
    assert_eq!(stats.total_expense, Decimal::new(450, 0));
    assert_eq!(stats.net_profit, Decimal::new(3250, 0));
    assert_eq!(stats.total_received, Decimal::new(2500, 0));
    assert_eq!(stats.total_to_receive, Decimal::new(1200, 0));
    // Received and outstanding always partition income
    assert_eq!(stats.total_received + stats.total_to_receive, stats.total_income);
}

#[test]
fn stats_recompute_is_idempotent() {
    let txs = vec![
        tx("i1", 100, TransactionType::Income, d(2024, 1, 5), true),
        tx("e1", 40, TransactionType::Expense, d(2024, 1, 6), false),
    ];
    let clients = vec![client("c1", 500, ClientStatus::Active)];
    assert_eq!(compute_stats(&txs, &clients), compute_stats(&txs, &clients));
}

#[test]
fn active_recurring_ignores_inactive_clients() {
    let clients = vec![
        client("c1", 2500, ClientStatus::Active),
        client("c2", 1200, ClientStatus::Active),
        client("c3", 9999, ClientStatus::Inactive),
    ];
    let stats = compute_stats(&[], &clients);
    assert_eq!(stats.active_recurring, Decimal::new(3700, 0));
}

#[test]
fn breakdown_groups_in_first_seen_order() {
    let exp = |id: &str, cat: &str, amount: i64| Expense {
        id: id.into(),
        description: id.into(),
        amount: Decimal::new(amount, 0),
        category: cat.into(),
        due_date: d(2024, 1, 5),
        is_recurring: true,
    };
    let expenses = vec![
        exp("e1", "Salários", 8500),
        exp("e2", "Software", 150),
        exp("e3", "Salários", 1500),
        exp("e4", "Marketing", 400),
    ];
    let breakdown = category_breakdown(&expenses);
    assert_eq!(
        breakdown,
        vec![
            ("Salários".to_string(), Decimal::new(10000, 0)),
            ("Software".to_string(), Decimal::new(150, 0)),
            ("Marketing".to_string(), Decimal::new(400, 0)),
        ]
    );
}
