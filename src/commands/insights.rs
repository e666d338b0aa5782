// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::commands::dashboard::resolve_range;
use crate::insights::fetch_insights;
use crate::stats::filter_by_range;
use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    // Insights look at the same date window as the dashboard; the client
    // roster is never date-filtered.
    let (start, end) = resolve_range(m)?;
    let ledger = store.ledger();
    let filtered = filter_by_range(&ledger.transactions, start, end);
    let insights = fetch_insights(&filtered, &ledger.clients);
    for (i, line) in insights.iter().enumerate() {
        println!("{}. {}", i + 1, line);
    }
    Ok(())
}
