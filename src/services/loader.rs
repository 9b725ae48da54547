//! Order loading from JSON snapshots
//!
//! The dashboard's backend exposes orders as a JSON array; this loader reads
//! such a snapshot from disk so the CLI can stand in for the data-fetch
//! collaborator. The reporting engine itself never does I/O.

use std::fs;
use std::path::Path;

use crate::types::{Order, Result, SalescopeError};

/// Read a JSON array of orders from `path`.
pub fn load_orders(path: &Path) -> Result<Vec<Order>> {
    let contents = fs::read_to_string(path)?;
    parse_orders(&contents)
}

/// Parse a JSON array of orders.
pub fn parse_orders(json: &str) -> Result<Vec<Order>> {
    serde_json::from_str(json).map_err(|e| SalescopeError::Parse(e.to_string()))
}
