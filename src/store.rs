// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::{Client, Expense, Ledger, Transaction};

/// Namespace key for the whole-state blob, shared with the persisted data of
/// earlier versions of this tracker.
pub const STORAGE_KEY: &str = "bzk_finance_storage_v1";

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Caixa", "caixa"));

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("category '{0}' is referenced by at least one expense")]
    CategoryInUse(String),
}

/// Key-value persistence boundary: whole-state JSON in, whole-state JSON out.
pub trait StorePort {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, blob: &str) -> Result<()>;
}

/// File-backed port keeping one `<key>.json` per key in the platform data dir.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new_default() -> Result<Self> {
        let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
            .context("Could not determine platform-specific data dir")?;
        Self::with_dir(proj.data_dir().to_path_buf())
    }

    pub fn with_dir(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir).context("Failed to create data dir")?;
        Ok(Self { dir })
    }

    pub fn file_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorePort for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.file_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(&path)
            .with_context(|| format!("Read saved state at {}", path.display()))?;
        Ok(Some(blob))
    }

    fn save(&self, key: &str, blob: &str) -> Result<()> {
        let path = self.file_path(key);
        fs::write(&path, blob).with_context(|| format!("Write state to {}", path.display()))
    }
}

/// In-memory ledger plus its injected persistence port. Every mutation saves
/// the whole state synchronously; a failed save is logged and the in-memory
/// state stays authoritative for the session.
pub struct Store {
    ledger: Ledger,
    port: Box<dyn StorePort>,
}

impl Store {
    /// Load saved state through the port, falling back to the seed ledger
    /// when nothing was saved yet or the blob cannot be read.
    pub fn open(port: Box<dyn StorePort>) -> Self {
        let ledger = match port.load(STORAGE_KEY) {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(ledger) => ledger,
                Err(err) => {
                    log::warn!("discarding unreadable saved state: {err}");
                    Ledger::seed()
                }
            },
            Ok(None) => Ledger::seed(),
            Err(err) => {
                log::warn!("failed to load saved state: {err:#}");
                Ledger::seed()
            }
        };
        Self { ledger, port }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Front-insert transactions so the history stays newest-first.
    pub fn add_transactions(&mut self, transactions: Vec<Transaction>) {
        self.ledger.transactions.splice(0..0, transactions);
        self.persist();
    }

    /// Silent no-op when no transaction matches.
    pub fn remove_transaction(&mut self, id: &str) {
        self.ledger.transactions.retain(|t| t.id != id);
        self.persist();
    }

    /// Flip the paid flag in place; silent no-op when no transaction matches.
    pub fn toggle_paid(&mut self, id: &str) {
        if let Some(t) = self.ledger.transactions.iter_mut().find(|t| t.id == id) {
            t.is_paid = !t.is_paid;
        }
        self.persist();
    }

    /// Append the client and front-insert its generated billing transactions.
    /// The transactions are independent from then on: removing the client
    /// later never touches them.
    pub fn add_client(&mut self, client: Client, billing: Vec<Transaction>) {
        self.ledger.transactions.splice(0..0, billing);
        self.ledger.clients.push(client);
        self.persist();
    }

    /// Already-generated billing transactions are left intact on purpose.
    pub fn remove_client(&mut self, id: &str) {
        self.ledger.clients.retain(|c| c.id != id);
        self.persist();
    }

    /// Same decoupling rule as clients: generated transactions outlive the
    /// expense that spawned them.
    pub fn add_expense(&mut self, expense: Expense, generated: Vec<Transaction>) {
        self.ledger.transactions.splice(0..0, generated);
        self.ledger.expenses.push(expense);
        self.persist();
    }

    pub fn remove_expense(&mut self, id: &str) {
        self.ledger.expenses.retain(|e| e.id != id);
        self.persist();
    }

    /// Duplicate or blank labels are ignored; returns whether a category was
    /// actually added.
    pub fn add_category(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.ledger.categories.iter().any(|c| c == label) {
            return false;
        }
        self.ledger.categories.push(label.to_string());
        self.persist();
        true
    }

    /// Refused while any expense references the label; the set is unchanged.
    pub fn remove_category(&mut self, label: &str) -> Result<(), StoreError> {
        if self.ledger.expenses.iter().any(|e| e.category == label) {
            return Err(StoreError::CategoryInUse(label.to_string()));
        }
        self.ledger.categories.retain(|c| c != label);
        self.persist();
        Ok(())
    }

    fn persist(&self) {
        let blob = match serde_json::to_string_pretty(&self.ledger) {
            Ok(blob) => blob,
            Err(err) => {
                log::warn!("failed to serialize ledger: {err}");
                return;
            }
        };
        if let Err(err) = self.port.save(STORAGE_KEY, &blob) {
            log::warn!("failed to persist ledger: {err:#}");
        }
    }
}
