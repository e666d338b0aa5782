// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub date: NaiveDate,
    pub category: String,
    #[serde(rename = "isPaid")]
    pub is_paid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cnpj: String,
    pub email: String,
    #[serde(rename = "recurringValue")]
    pub recurring_value: Decimal,
    pub status: ClientStatus,
    #[serde(rename = "nextBillingDate")]
    pub next_billing_date: NaiveDate,
    #[serde(rename = "artCount", default)]
    pub art_count: u32,
    #[serde(rename = "videoCount", default)]
    pub video_count: u32,
    #[serde(rename = "hasPaidTraffic", default)]
    pub has_paid_traffic: bool,
    #[serde(default)]
    pub observations: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    #[serde(rename = "dueDate")]
    pub due_date: NaiveDate,
    #[serde(rename = "isRecurring")]
    pub is_recurring: bool,
}

/// Derived dashboard numbers; recomputed on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    #[serde(rename = "totalIncome")]
    pub total_income: Decimal,
    #[serde(rename = "totalExpense")]
    pub total_expense: Decimal,
    #[serde(rename = "netProfit")]
    pub net_profit: Decimal,
    #[serde(rename = "activeRecurring")]
    pub active_recurring: Decimal,
    #[serde(rename = "totalReceived")]
    pub total_received: Decimal,
    #[serde(rename = "totalToReceive")]
    pub total_to_receive: Decimal,
}

/// Whole persisted state. Field names match the saved JSON schema:
/// `{clients, expenses, categories, transactions}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Salários",
    "Impostos",
    "Software",
    "Infraestrutura",
    "Marketing",
    "Outros",
];

impl Ledger {
    /// Seed data used when no saved state exists or the saved blob is
    /// unreadable: 2 clients, 2 transactions, 1 expense, 6 categories.
    pub fn seed() -> Self {
        Self {
            clients: vec![
                Client {
                    id: "1".into(),
                    name: "Tech Solutions Ltd".into(),
                    cnpj: "12.345.678/0001-90".into(),
                    email: "billing@techsol.com".into(),
                    recurring_value: Decimal::new(2500, 0),
                    status: ClientStatus::Active,
                    next_billing_date: ymd(2023, 12, 5),
                    art_count: 0,
                    video_count: 0,
                    has_paid_traffic: false,
                    observations: String::new(),
                },
                Client {
                    id: "2".into(),
                    name: "Design Studio X".into(),
                    cnpj: "98.765.432/0001-11".into(),
                    email: "hello@dsx.io".into(),
                    recurring_value: Decimal::new(1200, 0),
                    status: ClientStatus::Active,
                    next_billing_date: ymd(2023, 12, 10),
                    art_count: 0,
                    video_count: 0,
                    has_paid_traffic: false,
                    observations: String::new(),
                },
            ],
            expenses: vec![Expense {
                id: "e1".into(),
                description: "Salários Equipe".into(),
                amount: Decimal::new(8500, 0),
                category: "Salários".into(),
                due_date: ymd(2024, 1, 5),
                is_recurring: true,
            }],
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            transactions: vec![
                Transaction {
                    id: "t1".into(),
                    description: "Assinatura Software SaaS".into(),
                    amount: Decimal::new(15000, 2),
                    r#type: TransactionType::Expense,
                    date: ymd(2024, 1, 1),
                    category: "Software".into(),
                    is_paid: true,
                },
                Transaction {
                    id: "t2".into(),
                    description: "Recebimento Tech Solutions".into(),
                    amount: Decimal::new(250000, 2),
                    r#type: TransactionType::Income,
                    date: ymd(2024, 1, 5),
                    category: "Serviços".into(),
                    is_paid: true,
                },
            ],
        }
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed literals only; always valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
