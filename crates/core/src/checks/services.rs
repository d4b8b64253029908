// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use provcheck_host::{Host, PackageState, ServiceState};

use super::ESSENTIAL_SERVICES;
use crate::error::{CheckError, ensure};

/// Checks that every essential service is running and enabled.
///
/// # Errors
///
/// Fails on the first service that is stopped or disabled.
pub fn services_running(host: &dyn Host) -> Result<(), CheckError> {
    for name in ESSENTIAL_SERVICES {
        let service: ServiceState = host.service(name)?;
        ensure(
            service.is_running,
            format!("Service {name} should be running"),
        )?;
        ensure(
            service.is_enabled,
            format!("Service {name} should be enabled"),
        )?;
    }
    Ok(())
}

/// Checks that UFW is installed and enabled at boot.
///
/// Whether the firewall is currently active is not checked.
///
/// # Errors
///
/// Fails if the package is missing or the service is disabled.
pub fn firewall_configured(host: &dyn Host) -> Result<(), CheckError> {
    let ufw: PackageState = host.package("ufw")?;
    ensure(ufw.is_installed, "UFW should be installed")?;

    let ufw_service: ServiceState = host.service("ufw")?;
    ensure(ufw_service.is_enabled, "UFW service should be enabled")
}
