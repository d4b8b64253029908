// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only access to the observable state of a machine under test.
//!
//! Every check in `provcheck` talks to a machine through the [`Host`] trait.
//! The trait exposes five capability queries (packages, services, files,
//! users and shell commands), each returning a plain value describing what
//! the machine reported. Nothing in this crate mutates the host.

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
mod local;
mod package_manager;
mod runner;
mod types;
mod unreachable;

#[cfg(test)]
mod tests;

pub use error::HostError;
pub use local::LocalHost;
pub use package_manager::PackageManager;
pub use runner::{CommandRunner, DuctRunner};
pub use types::{CommandOutput, FileKind, FileState, PackageState, ServiceState, UserState};
pub use unreachable::UnreachableHost;

/// A machine whose state can be queried.
///
/// Implementations answer each query from the machine's own tools. A query
/// that cannot be answered at all (the tool is missing, the host cannot be
/// reached) returns a [`HostError`]; a query that was answered negatively
/// (the package is not installed, the file does not exist) returns `Ok` with
/// a value describing the absence.
pub trait Host {
    /// The name this host is known by in reports.
    fn name(&self) -> &str;

    /// Looks up an installed package by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the package database could not be queried.
    fn package(&self, name: &str) -> Result<PackageState, HostError>;

    /// Looks up a service unit by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the service manager could not be queried.
    fn service(&self, name: &str) -> Result<ServiceState, HostError>;

    /// Inspects a filesystem path. The kind follows symbolic links; the mode
    /// is that of the path itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the path could not be inspected.
    fn file(&self, path: &str) -> Result<FileState, HostError>;

    /// Looks up a user account. `None` selects the user the queries run as.
    ///
    /// # Errors
    ///
    /// Returns an error if the user database could not be queried.
    fn user(&self, name: Option<&str>) -> Result<UserState, HostError>;

    /// Runs a shell command and captures its exit status and output.
    ///
    /// A non-zero exit status is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be started.
    fn run(&self, command: &str) -> Result<CommandOutput, HostError>;
}
