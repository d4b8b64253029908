// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use provcheck_host::Host;

use crate::error::CheckError;

/// Signature shared by every check.
pub type CheckFn = fn(&dyn Host) -> Result<(), CheckError>;

/// A named, independent verification against a host.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    /// Stable identifier used for selection and in reports.
    pub name: &'static str,
    /// One-line summary of what is verified.
    pub description: &'static str,
    /// The verification itself.
    pub run: CheckFn,
}

impl Check {
    /// Evaluates this check against `host`.
    ///
    /// # Errors
    ///
    /// Returns the first assertion that does not hold.
    pub fn evaluate(&self, host: &dyn Host) -> Result<(), CheckError> {
        (self.run)(host)
    }
}
