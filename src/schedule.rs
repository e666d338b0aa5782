// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Transaction, TransactionType};

/// Shift a date by whole calendar months. The day-of-month is preserved when
/// it exists in the target month and clamped to the target month's last day
/// otherwise (Jan 31 + 1 month = Feb 28/29, never Mar 3).
pub fn add_months(date: NaiveDate, n: i32) -> NaiveDate {
    if n >= 0 {
        date + Months::new(n as u32)
    } else {
        date - Months::new(n.unsigned_abs())
    }
}

/// The repeating part of a monthly entry: everything but the date and the
/// per-occurrence numbering.
#[derive(Debug, Clone)]
pub struct RecurrenceTemplate {
    pub description: String,
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub category: String,
    pub is_paid: bool,
}

/// Expand a monthly template into `count` dated transactions, one per
/// calendar month starting at `start`. With `count > 1` each description is
/// suffixed with a 1-indexed `(k/count)` marker; a single occurrence keeps
/// the template description verbatim. Every record gets a fresh UUID.
pub fn project(
    template: &RecurrenceTemplate,
    start: NaiveDate,
    count: u32,
) -> Result<Vec<Transaction>> {
    if count == 0 {
        bail!("recurrence count must be at least 1");
    }
    let mut generated = Vec::with_capacity(count as usize);
    for i in 0..count {
        let description = if count > 1 {
            format!("{} ({}/{})", template.description, i + 1, count)
        } else {
            template.description.clone()
        };
        generated.push(Transaction {
            id: Uuid::new_v4().to_string(),
            description,
            amount: template.amount,
            r#type: template.r#type,
            date: add_months(start, i as i32),
            category: template.category.clone(),
            is_paid: template.is_paid,
        });
    }
    Ok(generated)
}
