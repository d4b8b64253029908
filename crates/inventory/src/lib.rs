// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reads the hosts to verify from an Ansible-style YAML inventory.
//!
//! Only what host selection needs is understood: groups, nested
//! `children`, per-host and per-group `vars`, and the `ansible_connection`
//! variable. Everything else in the file is ignored.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod inventory;
mod types;

#[cfg(test)]
mod tests;

pub use error::InventoryError;
pub use inventory::Inventory;
pub use types::{Connection, InventoryHost};
