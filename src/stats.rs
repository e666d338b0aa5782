// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Client, ClientStatus, DashboardStats, Expense, Transaction, TransactionType};

/// Transactions dated within `[start, end]`, both ends inclusive.
pub fn filter_by_range(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| start <= t.date && t.date <= end)
        .cloned()
        .collect()
}

/// Dashboard numbers over an already-filtered transaction slice. Clients are
/// not date-filtered: active recurring value reflects the current roster.
pub fn compute_stats(transactions: &[Transaction], clients: &[Client]) -> DashboardStats {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    let mut total_received = Decimal::ZERO;
    let mut total_to_receive = Decimal::ZERO;

    for t in transactions {
        match t.r#type {
            TransactionType::Income => {
                total_income += t.amount;
                if t.is_paid {
                    total_received += t.amount;
                } else {
                    total_to_receive += t.amount;
                }
            }
            TransactionType::Expense => total_expense += t.amount,
        }
    }

    let active_recurring = clients
        .iter()
        .filter(|c| c.status == ClientStatus::Active)
        .map(|c| c.recurring_value)
        .sum();

    DashboardStats {
        total_income,
        total_expense,
        net_profit: total_income - total_expense,
        active_recurring,
        total_received,
        total_to_receive,
    }
}

/// Per-category expense totals, in first-seen category order.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<(String, Decimal)> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for exp in expenses {
        match totals.iter_mut().find(|(cat, _)| *cat == exp.category) {
            Some((_, total)) => *total += exp.amount,
            None => totals.push((exp.category.clone(), exp.amount)),
        }
    }
    totals
}
