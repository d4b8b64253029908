// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use provcheck_host::{Host, PackageState};

use super::ESSENTIAL_PACKAGES;
use crate::error::{CheckError, ensure};

/// Checks that every essential package is installed.
///
/// # Errors
///
/// Fails on the first package that is not installed.
pub fn essential_packages_installed(host: &dyn Host) -> Result<(), CheckError> {
    for name in ESSENTIAL_PACKAGES {
        let package: PackageState = host.package(name)?;
        ensure(
            package.is_installed,
            format!("Package {name} should be installed"),
        )?;
    }
    Ok(())
}
