// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use caixa::{cli, commands, store};

fn main() -> Result<()> {
    env_logger::init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let port = store::JsonFileStore::new_default()?;
    let data_path = port.file_path(store::STORAGE_KEY);
    let mut store = store::Store::open(Box::new(port));

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data file at {}", data_path.display());
        }
        Some(("client", sub)) => commands::clients::handle(&mut store, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&mut store, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, sub)?,
        Some(("insights", sub)) => commands::insights::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
