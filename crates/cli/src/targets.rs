// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turning inventory entries into host handles.

use std::path::Path;

use color_eyre::{Result, eyre::Context};
use provcheck_host::{DuctRunner, Host, LocalHost, PackageManager, UnreachableHost};
use provcheck_inventory::{Inventory, InventoryHost};

/// Selects the hosts to verify.
///
/// Without an inventory the only target is this machine and `limit` is not
/// consulted.
pub fn resolve(inventory: Option<&Path>, limit: &str) -> Result<Vec<InventoryHost>> {
    let Some(path) = inventory else {
        tracing::debug!("no inventory given, verifying localhost");
        return Ok(vec![InventoryHost::localhost()]);
    };

    let inventory: Inventory = Inventory::load(path)?;
    inventory
        .hosts(limit)
        .wrap_err_with(|| format!("failed to select hosts from {}", path.display()))
}

/// Opens a handle on `target`.
///
/// Only local connections can be queried. Any other connection yields a host
/// whose every query fails, so its checks are reported as failures rather
/// than aborting the run.
pub fn connect(target: &InventoryHost, package_manager: Option<PackageManager>) -> Box<dyn Host> {
    if target.connection.is_local() {
        return Box::new(LocalHost::with_runner(
            &target.name,
            DuctRunner,
            package_manager,
        ));
    }

    tracing::warn!(
        "{} uses the {} connection, which is not supported",
        target.name,
        target.connection
    );
    Box::new(UnreachableHost::new(
        &target.name,
        format!(
            "connection `{}` is not supported; only local hosts can be verified",
            target.connection
        ),
    ))
}
