// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::models::{Client, ClientStatus, Transaction, TransactionType};
use crate::utils::http_client;

const GEMINI_MODEL: &str = "gemini-3-flash-preview";
const API_KEY_ENV: &str = "GEMINI_API_KEY";
const MAX_INSIGHTS: usize = 3;

pub const FALLBACK_INSIGHTS: [&str; 3] = [
    "Mantenha o controle de suas despesas recorrentes.",
    "Analise o churn rate de seus clientes mensais.",
    "Considere reinvestir o lucro em automação.",
];

/// Aggregate numbers fed into the insight prompt.
#[derive(Debug, Clone)]
pub struct DataSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub client_count: usize,
    pub active_recurring: Decimal,
    pub expense_categories: Vec<String>,
}

impl DataSummary {
    pub fn new(transactions: &[Transaction], clients: &[Client]) -> Self {
        let mut total_income = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;
        let mut expense_categories: Vec<String> = Vec::new();
        for t in transactions {
            match t.r#type {
                TransactionType::Income => total_income += t.amount,
                TransactionType::Expense => {
                    total_expense += t.amount;
                    if !expense_categories.contains(&t.category) {
                        expense_categories.push(t.category.clone());
                    }
                }
            }
        }
        let active_recurring = clients
            .iter()
            .filter(|c| c.status == ClientStatus::Active)
            .map(|c| c.recurring_value)
            .sum();
        Self {
            total_income,
            total_expense,
            client_count: clients.len(),
            active_recurring,
            expense_categories,
        }
    }
}

pub fn build_prompt(summary: &DataSummary) -> String {
    format!(
        "Analise os seguintes dados financeiros e forneça 3 insights curtos e práticos para melhorar o negócio:\n\
         Receita Total: R$ {}\n\
         Despesas Totais: R$ {}\n\
         Valor em Recorrência Ativa: R$ {}\n\
         Categorias de Gastos: {}\n\
         Número de Clientes: {}\n\n\
         Retorne apenas um array JSON de strings, sem formatação markdown adicional.",
        summary.total_income,
        summary.total_expense,
        summary.active_recurring,
        summary.expense_categories.join(", "),
        summary.client_count,
    )
}

/// Extract the insight strings from a generateContent response body. The
/// model is asked for a bare JSON array of strings inside the candidate text.
pub fn parse_insights(body: &str) -> Result<Vec<String>> {
    let value: Value = serde_json::from_str(body).context("Response body is not JSON")?;
    let text = value["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .context("Response carries no candidate text")?;
    let insights: Vec<String> =
        serde_json::from_str(text).context("Candidate text is not a JSON array of strings")?;
    Ok(insights.into_iter().take(MAX_INSIGHTS).collect())
}

pub fn fallback_insights() -> Vec<String> {
    FALLBACK_INSIGHTS.iter().map(|s| s.to_string()).collect()
}

/// Up to three short suggestions for the given books. Any failure along the
/// way (no API key, network, HTTP status, unparsable body) degrades to the
/// fixed fallback; this never errors.
pub fn fetch_insights(transactions: &[Transaction], clients: &[Client]) -> Vec<String> {
    let summary = DataSummary::new(transactions, clients);
    match request_insights(&summary) {
        Ok(insights) => insights,
        Err(err) => {
            log::warn!("insight service unavailable, using fallback: {err:#}");
            fallback_insights()
        }
    }
}

fn request_insights(summary: &DataSummary) -> Result<Vec<String>> {
    let api_key = std::env::var(API_KEY_ENV).with_context(|| format!("{} not set", API_KEY_ENV))?;
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        GEMINI_MODEL, api_key
    );
    let body = json!({
        "contents": [{ "parts": [{ "text": build_prompt(summary) }] }],
        "generationConfig": { "responseMimeType": "application/json" }
    });
    let client = http_client()?;
    let resp = client.post(url).json(&body).send()?.error_for_status()?;
    parse_insights(&resp.text()?)
}
