// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use provcheck_host::HostError;

/// Why a check did not pass.
///
/// There is one kind only. An unreachable host, a query that
/// could not be answered and a value that does not match all surface the
/// same way, distinguished by their message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// An expected condition does not hold on the host.
    AssertionFailed(String),
}

impl CheckError {
    /// The human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::AssertionFailed(message) => message,
        }
    }
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssertionFailed(message) => write!(f, "Assertion failed: {message}"),
        }
    }
}

impl std::error::Error for CheckError {}

impl From<HostError> for CheckError {
    fn from(err: HostError) -> Self {
        Self::AssertionFailed(err.to_string())
    }
}

/// Fails with `message` unless `condition` holds.
///
/// # Errors
///
/// Returns [`CheckError::AssertionFailed`] when `condition` is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> Result<(), CheckError> {
    if condition {
        Ok(())
    } else {
        Err(CheckError::AssertionFailed(message.into()))
    }
}
