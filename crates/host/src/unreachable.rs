// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Host;
use crate::error::HostError;
use crate::types::{CommandOutput, FileState, PackageState, ServiceState, UserState};

/// A host that cannot be queried.
///
/// Stands in for inventory entries that `provcheck` has no way to reach, so
/// that every check against them fails with the same explanation instead of
/// the whole run aborting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreachableHost {
    name: String,
    reason: String,
}

impl UnreachableHost {
    /// Creates an unreachable host with the reason reported by every query.
    #[must_use]
    pub fn new(name: &str, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    fn error(&self) -> HostError {
        HostError::Unreachable {
            host: self.name.clone(),
            reason: self.reason.clone(),
        }
    }
}

impl Host for UnreachableHost {
    fn name(&self) -> &str {
        &self.name
    }

    fn package(&self, _name: &str) -> Result<PackageState, HostError> {
        Err(self.error())
    }

    fn service(&self, _name: &str) -> Result<ServiceState, HostError> {
        Err(self.error())
    }

    fn file(&self, _path: &str) -> Result<FileState, HostError> {
        Err(self.error())
    }

    fn user(&self, _name: Option<&str>) -> Result<UserState, HostError> {
        Err(self.error())
    }

    fn run(&self, _command: &str) -> Result<CommandOutput, HostError> {
        Err(self.error())
    }
}
