// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{Store, StoreError};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            if store.add_category(name) {
                println!("Added category '{}'", name.trim());
            } else if name.trim().is_empty() {
                println!("Nothing added: category names cannot be blank.");
            } else {
                println!("Category '{}' already exists.", name.trim());
            }
        }
        Some(("list", _)) => {
            let data: Vec<Vec<String>> = store
                .ledger()
                .categories
                .iter()
                .map(|c| vec![c.clone()])
                .collect();
            println!("{}", pretty_table(&["Category"], data));
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            match store.remove_category(name) {
                Ok(()) => println!("Removed category '{}'", name),
                Err(StoreError::CategoryInUse(_)) => println!(
                    "Category '{}' is used by at least one expense and cannot be removed.",
                    name
                ),
            }
        }
        _ => {}
    }
    Ok(())
}
