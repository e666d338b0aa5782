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

use crate::models::{Client, ClientStatus, TransactionType};
use crate::schedule::{project, RecurrenceTemplate};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.remove_client(id);
            println!("Removed client '{}' (billing history kept)", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let value = parse_decimal(sub.get_one::<String>("value").unwrap())?;
    if name.is_empty() || value <= Decimal::ZERO {
        println!("Nothing created: a client needs a name and a positive recurring value.");
        return Ok(());
    }

    let start = match sub.get_one::<String>("start") {
        Some(s) => parse_date(s)?,
        None => Utc::now().date_naive(),
    };
    let months = (*sub.get_one::<u32>("months").unwrap()).max(1);

    let client = Client {
        id: Uuid::new_v4().to_string(),
        name,
        cnpj: sub.get_one::<String>("cnpj").unwrap().clone(),
        email: sub.get_one::<String>("email").unwrap().clone(),
        recurring_value: value,
        status: if sub.get_flag("inactive") {
            ClientStatus::Inactive
        } else {
            ClientStatus::Active
        },
        next_billing_date: start,
        art_count: *sub.get_one::<u32>("arts").unwrap(),
        video_count: *sub.get_one::<u32>("videos").unwrap(),
        has_paid_traffic: sub.get_flag("paid-traffic"),
        observations: sub.get_one::<String>("obs").unwrap().clone(),
    };

    let template = RecurrenceTemplate {
        description: format!("Recebimento: {}", client.name),
        amount: client.recurring_value,
        r#type: TransactionType::Income,
        category: "Serviços".into(),
        is_paid: false,
    };
    let billing = project(&template, start, months)?;

    println!(
        "Added client '{}' with {} billing entr{} of {} starting {}",
        client.name,
        billing.len(),
        if billing.len() == 1 { "y" } else { "ies" },
        fmt_money(&client.recurring_value),
        start
    );
    store.add_client(client, billing);
    Ok(())
}

#[derive(Serialize)]
struct ClientRow {
    name: String,
    cnpj: String,
    email: String,
    monthly: String,
    arts: u32,
    videos: u32,
    paid_traffic: bool,
    status: String,
    id: String,
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data: Vec<ClientRow> = store
        .ledger()
        .clients
        .iter()
        .map(|c| ClientRow {
            name: c.name.clone(),
            cnpj: if c.cnpj.is_empty() {
                "Sem CNPJ".into()
            } else {
                c.cnpj.clone()
            },
            email: c.email.clone(),
            monthly: fmt_money(&c.recurring_value),
            arts: c.art_count,
            videos: c.video_count,
            paid_traffic: c.has_paid_traffic,
            status: match c.status {
                ClientStatus::Active => "Ativo".into(),
                ClientStatus::Inactive => "Inativo".into(),
            },
            id: c.id.clone(),
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.name.clone(),
                    r.cnpj.clone(),
                    r.email.clone(),
                    r.monthly.clone(),
                    format!("{} artes / {} vídeos", r.arts, r.videos),
                    if r.paid_traffic { "Tráfego".into() } else { String::new() },
                    r.status.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Client", "CNPJ", "Email", "Monthly", "Deliverables", "Traffic", "Status", "Id"],
                rows,
            )
        );
    }
    Ok(())
}
