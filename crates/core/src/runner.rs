// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Instant;

use provcheck_host::Host;
use serde::{Deserialize, Serialize};

use crate::check::Check;

/// How a single check ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckStatus {
    /// Every assertion held.
    Passed,
    /// An assertion did not hold.
    Failed {
        /// The failure message of the first unmet assertion.
        message: String,
    },
}

/// The outcome of one check on one host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// The check's registry name.
    pub check: String,
    /// Whether it passed.
    #[serde(flatten)]
    pub status: CheckStatus,
    /// Wall-clock time spent in the check.
    pub elapsed_ms: u64,
}

impl CheckOutcome {
    /// Whether the check passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.status, CheckStatus::Passed)
    }
}

/// Every outcome recorded for a single host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostReport {
    /// The host name.
    pub host: String,
    /// Outcomes in evaluation order.
    pub outcomes: Vec<CheckOutcome>,
}

impl HostReport {
    /// Number of checks that passed.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed()).count()
    }

    /// Number of checks that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Whether every check passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Reports for every host in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// One report per host, in the order the hosts were tested.
    pub reports: Vec<HostReport>,
}

impl RunSummary {
    /// Total passed checks across all hosts.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.reports.iter().map(HostReport::passed).sum()
    }

    /// Total failed checks across all hosts.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.reports.iter().map(HostReport::failed).sum()
    }

    /// Whether every check on every host passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.reports.iter().all(HostReport::is_success)
    }
}

/// Evaluates `checks` against `host` one after another.
///
/// A failing check never stops the run: every check is evaluated and
/// recorded regardless of what came before it.
pub fn run_checks(host: &dyn Host, checks: &[&Check]) -> HostReport {
    let mut outcomes: Vec<CheckOutcome> = Vec::with_capacity(checks.len());

    for check in checks {
        let span = tracing::info_span!("check", host = host.name(), check = check.name);
        let _guard = span.enter();

        let started: Instant = Instant::now();
        let result = check.evaluate(host);
        let elapsed_ms: u64 = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let status: CheckStatus = match result {
            Ok(()) => {
                tracing::debug!("passed");
                CheckStatus::Passed
            }
            Err(err) => {
                tracing::warn!("{err}");
                CheckStatus::Failed {
                    message: err.message().to_string(),
                }
            }
        };

        outcomes.push(CheckOutcome {
            check: check.name.to_string(),
            status,
            elapsed_ms,
        });
    }

    HostReport {
        host: host.name().to_string(),
        outcomes,
    }
}
