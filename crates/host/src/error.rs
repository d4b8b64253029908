// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised when a host query cannot be answered.
#[derive(Debug, Error)]
pub enum HostError {
    /// The command backing a query could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// The command line that was attempted.
        command: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A command ran but printed something the query does not understand.
    #[error("unexpected output from `{command}`: {output:?}")]
    UnexpectedOutput {
        /// The command line that was run.
        command: String,
        /// The output that could not be parsed.
        output: String,
    },
    /// The host cannot be queried at all.
    #[error("host {host} is unreachable: {reason}")]
    Unreachable {
        /// The host name.
        host: String,
        /// Why the host cannot be reached.
        reason: String,
    },
    /// None of the supported package managers is installed.
    #[error("no supported package manager found (tried pacman, dpkg-query, rpm)")]
    NoPackageManager,
    /// A package manager name was not recognised.
    #[error("unknown package manager: {0}")]
    UnknownPackageManager(String),
}
