// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use caixa::models::TransactionType;
use caixa::schedule::{add_months, project, RecurrenceTemplate};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn template(description: &str) -> RecurrenceTemplate {
    RecurrenceTemplate {
        description: description.into(),
        amount: Decimal::new(2500, 0),
        r#type: TransactionType::Income,
        category: "Serviços".into(),
        is_paid: false,
    }
}

#[test]
fn add_months_clamps_to_month_end() {
    // 2024 is a leap year
    assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 29));
    assert_eq!(add_months(d(2023, 1, 31), 1), d(2023, 2, 28));
    assert_eq!(add_months(d(2024, 1, 31), 2), d(2024, 3, 31));
    assert_eq!(add_months(d(2024, 8, 31), 1), d(2024, 9, 30));
}

#[test]
fn add_months_rolls_over_years() {
    assert_eq!(add_months(d(2024, 11, 15), 3), d(2025, 2, 15));
    assert_eq!(add_months(d(2024, 1, 10), 24), d(2026, 1, 10));
}

#[test]
fn add_months_zero_and_negative() {
    assert_eq!(add_months(d(2024, 5, 31), 0), d(2024, 5, 31));
    assert_eq!(add_months(d(2024, 3, 31), -1), d(2024, 2, 29));
}

#[test]
fn project_yields_exactly_count_records() {
    let txs = project(&template("Recebimento: Acme"), d(2024, 1, 31), 4).unwrap();
    assert_eq!(txs.len(), 4);
    assert_eq!(txs[0].date, d(2024, 1, 31));
    assert_eq!(txs[1].date, d(2024, 2, 29));
    assert_eq!(txs[2].date, d(2024, 3, 31));
    assert_eq!(txs[3].date, d(2024, 4, 30));
}

#[test]
fn project_numbers_multi_month_descriptions() {
    let txs = project(&template("Hospedagem"), d(2024, 1, 5), 3).unwrap();
    assert_eq!(txs[0].description, "Hospedagem (1/3)");
    assert_eq!(txs[1].description, "Hospedagem (2/3)");
    assert_eq!(txs[2].description, "Hospedagem (3/3)");
}

#[test]
fn project_single_occurrence_keeps_description_verbatim() {
    let txs = project(&template("Hospedagem"), d(2024, 1, 5), 1).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].description, "Hospedagem");
}

#[test]
fn project_copies_template_fields_and_generates_fresh_ids() {
    let txs = project(&template("Recebimento: Acme"), d(2024, 1, 5), 3).unwrap();
    for t in &txs {
        assert_eq!(t.amount, Decimal::new(2500, 0));
        assert_eq!(t.r#type, TransactionType::Income);
        assert_eq!(t.category, "Serviços");
        assert!(!t.is_paid);
    }
    assert_ne!(txs[0].id, txs[1].id);
    assert_ne!(txs[1].id, txs[2].id);
}

#[test]
fn project_rejects_zero_count() {
    assert!(project(&template("Hospedagem"), d(2024, 1, 5), 0).is_err());
}
