// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The checks run against every provisioned host.
//!
//! Each check is a plain function from a host handle to a result. The
//! expected values are fixed here and are not configurable at runtime.

mod accounts;
mod packages;
mod services;
mod tools;

pub use accounts::{aur_builder_user_exists, user_directories_exist};
pub use packages::essential_packages_installed;
pub use services::{firewall_configured, services_running};
pub use tools::{chezmoi_installed, development_tools_available, flatpak_setup};

use crate::check::Check;

/// Packages every provisioned host must have.
pub const ESSENTIAL_PACKAGES: [&str; 3] = ["git", "vim", "firefox"];

/// The account used to build AUR packages without root.
pub const AUR_BUILDER_USER: &str = "aur_builder";

/// The group the AUR builder must belong to for passwordless sudo.
pub const AUR_BUILDER_GROUP: &str = "wheel";

/// Services that must be both running and enabled.
pub const ESSENTIAL_SERVICES: [&str; 1] = ["NetworkManager"];

/// Where the dotfile manager binary is installed.
pub const CHEZMOI_PATH: &str = "/usr/local/bin/chezmoi";

/// The exact permission bits of the dotfile manager binary.
pub const CHEZMOI_MODE: u32 = 0o755;

/// Directories expected directly under the current user's home.
pub const USER_DIRECTORIES: [&str; 6] = [
    "Desktop",
    "Documents",
    "Downloads",
    "Pictures",
    "Videos",
    "Music",
];

/// Commands that must resolve through `PATH`.
pub const DEVELOPMENT_TOOLS: [&str; 3] = ["git", "python", "pip"];

static CHECKS: [Check; 8] = [
    Check {
        name: "essential_packages_installed",
        description: "Essential packages are installed",
        run: essential_packages_installed,
    },
    Check {
        name: "aur_builder_user_exists",
        description: "AUR builder user is created",
        run: aur_builder_user_exists,
    },
    Check {
        name: "services_running",
        description: "Essential services are running",
        run: services_running,
    },
    Check {
        name: "chezmoi_installed",
        description: "chezmoi is installed and accessible",
        run: chezmoi_installed,
    },
    Check {
        name: "flatpak_setup",
        description: "Flatpak is properly configured",
        run: flatpak_setup,
    },
    Check {
        name: "user_directories_exist",
        description: "Standard user directories exist",
        run: user_directories_exist,
    },
    Check {
        name: "firewall_configured",
        description: "UFW firewall is properly configured",
        run: firewall_configured,
    },
    Check {
        name: "development_tools_available",
        description: "Development tools are available",
        run: development_tools_available,
    },
];

/// Every registered check, in reporting order.
#[must_use]
pub fn all_checks() -> &'static [Check] {
    &CHECKS
}

/// Looks up a registered check by name.
#[must_use]
pub fn find_check(name: &str) -> Option<&'static Check> {
    CHECKS.iter().find(|check| check.name == name)
}
