// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use provcheck_host::{CommandOutput, FileState, Host, PackageState};

use super::{CHEZMOI_MODE, CHEZMOI_PATH, DEVELOPMENT_TOOLS};
use crate::error::{CheckError, ensure};

/// Checks that chezmoi is installed as an executable regular file.
///
/// # Errors
///
/// Fails if the binary is missing, is not a regular file, or its mode is
/// anything other than `0755`.
pub fn chezmoi_installed(host: &dyn Host) -> Result<(), CheckError> {
    let chezmoi: FileState = host.file(CHEZMOI_PATH)?;
    ensure(chezmoi.exists(), "chezmoi should be installed")?;
    ensure(chezmoi.is_file(), "chezmoi should be a file")?;
    ensure(
        chezmoi.mode == Some(CHEZMOI_MODE),
        "chezmoi should be executable",
    )
}

/// Checks that Flatpak is installed with the Flathub remote configured.
///
/// # Errors
///
/// Fails if the package is missing or `flatpak remotes` does not list
/// Flathub.
pub fn flatpak_setup(host: &dyn Host) -> Result<(), CheckError> {
    let flatpak: PackageState = host.package("flatpak")?;
    ensure(flatpak.is_installed, "Flatpak should be installed")?;

    let remotes: CommandOutput = host.run("flatpak remotes")?;
    ensure(
        remotes.stdout.contains("flathub"),
        "Flathub remote should be configured",
    )
}

/// Checks that the development tools resolve through `PATH`.
///
/// # Errors
///
/// Fails on the first tool the shell cannot find.
pub fn development_tools_available(host: &dyn Host) -> Result<(), CheckError> {
    for tool in DEVELOPMENT_TOOLS {
        let lookup: CommandOutput = host.run(&format!("command -v {tool}"))?;
        ensure(lookup.succeeded(), format!("{tool} should be available in PATH"))?;
    }
    Ok(())
}
