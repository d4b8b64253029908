// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;

/// How a host is reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Connection {
    /// Queries run directly on this machine.
    Local,
    /// Queries would run over SSH.
    Ssh,
    /// Any other transport named in the inventory, such as `docker`.
    Other(String),
}

impl Connection {
    /// Resolves the effective connection of a host.
    ///
    /// An explicit `ansible_connection` wins. Without one, loopback names
    /// are local and everything else is assumed to be SSH.
    #[must_use]
    pub fn resolve(host: &str, explicit: Option<&str>) -> Self {
        match explicit {
            Some("local") => Self::Local,
            Some("ssh" | "paramiko" | "smart") => Self::Ssh,
            Some(other) => Self::Other(other.to_string()),
            None if matches!(host, "localhost" | "127.0.0.1" | "::1") => Self::Local,
            None => Self::Ssh,
        }
    }

    /// Whether the host is this machine.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

impl std::fmt::Display for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Ssh => write!(f, "ssh"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// A single host selected from the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryHost {
    /// The inventory name of the host.
    pub name: String,
    /// How the host is reached.
    pub connection: Connection,
}

impl InventoryHost {
    /// The implicit host used when no inventory is given.
    #[must_use]
    pub fn localhost() -> Self {
        Self {
            name: String::from("localhost"),
            connection: Connection::Local,
        }
    }
}
