// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading an inventory or selecting hosts from it.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The inventory file could not be read.
    #[error("failed to read inventory {}: {source}", path.display())]
    Read {
        /// The file that was attempted.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The inventory is not valid YAML or does not have the expected shape.
    #[error("failed to parse inventory {origin}: {source}")]
    Parse {
        /// Where the text came from.
        origin: String,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
    /// A group lists itself among its own descendants.
    #[error("group {0} is nested inside itself")]
    GroupCycle(String),
    /// The host pattern matched nothing.
    #[error("no hosts match pattern {0:?}")]
    NoMatch(String),
}
