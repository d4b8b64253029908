// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HostError;
use crate::runner::{CommandRunner, render_command_line};
use crate::types::PackageState;

/// The package database a host is queried through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageManager {
    /// Arch Linux and derivatives.
    Pacman,
    /// Debian and derivatives.
    Dpkg,
    /// Fedora, RHEL, openSUSE and derivatives.
    Rpm,
}

impl PackageManager {
    /// Probe order used by [`PackageManager::detect`].
    pub const ALL: [Self; 3] = [Self::Pacman, Self::Dpkg, Self::Rpm];

    /// The name used on the command line and in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pacman => "pacman",
            Self::Dpkg => "dpkg",
            Self::Rpm => "rpm",
        }
    }

    /// The executable whose presence identifies this package manager.
    #[must_use]
    pub const fn query_program(&self) -> &'static str {
        match self {
            Self::Pacman => "pacman",
            Self::Dpkg => "dpkg-query",
            Self::Rpm => "rpm",
        }
    }

    /// Finds the first supported package manager available on the host.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::NoPackageManager`] if none is installed, or a
    /// runner error if the probe itself could not be run.
    pub fn detect<R: CommandRunner>(runner: &R) -> Result<Self, HostError> {
        for manager in Self::ALL {
            let probe: String = format!("command -v {}", manager.query_program());
            if runner.run("sh", &["-c", probe.as_str()])?.succeeded() {
                tracing::debug!("detected package manager: {manager}");
                return Ok(manager);
            }
        }
        Err(HostError::NoPackageManager)
    }

    /// Queries the installation state of `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query could not be run or its output could not
    /// be understood.
    pub fn query<R: CommandRunner>(&self, runner: &R, name: &str) -> Result<PackageState, HostError> {
        match self {
            Self::Pacman => {
                // `pacman -Q git` prints "git 2.47.1-1"
                let output = runner.run("pacman", &["-Q", name])?;
                if !output.succeeded() {
                    return Ok(PackageState::absent(name));
                }
                let version: Option<String> = output
                    .stdout
                    .split_whitespace()
                    .nth(1)
                    .map(str::to_string);
                Ok(PackageState::installed(name, version))
            }
            Self::Dpkg => {
                let args: [&str; 4] = ["-f", "${Status} ${Version}", "-W", name];
                let output = runner.run("dpkg-query", &args)?;
                if !output.succeeded() {
                    return Ok(PackageState::absent(name));
                }
                parse_dpkg_status(name, &output.stdout).ok_or_else(|| {
                    HostError::UnexpectedOutput {
                        command: render_command_line("dpkg-query", &args),
                        output: output.stdout.clone(),
                    }
                })
            }
            Self::Rpm => {
                let output = runner.run("rpm", &["-q", "--queryformat", "%{VERSION}", name])?;
                if !output.succeeded() {
                    return Ok(PackageState::absent(name));
                }
                let version: &str = output.stdout.trim();
                Ok(PackageState::installed(
                    name,
                    (!version.is_empty()).then(|| version.to_string()),
                ))
            }
        }
    }
}

/// Parses `dpkg-query -f '${Status} ${Version}'` output.
///
/// The status triplet is `want ok state`; only a state of `installed` counts.
/// Removed packages with leftover configuration report `config-files`.
fn parse_dpkg_status(name: &str, stdout: &str) -> Option<PackageState> {
    let fields: Vec<&str> = stdout.split_whitespace().collect();
    let state: &str = fields.get(2)?;
    if state != "installed" {
        return Some(PackageState::absent(name));
    }
    Some(PackageState::installed(
        name,
        fields.get(3).map(|version| (*version).to_string()),
    ))
}

impl FromStr for PackageManager {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pacman" => Ok(Self::Pacman),
            "dpkg" | "apt" => Ok(Self::Dpkg),
            "rpm" | "dnf" | "yum" => Ok(Self::Rpm),
            _ => Err(HostError::UnknownPackageManager(s.to_string())),
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
