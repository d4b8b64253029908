// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::HostError;
use crate::types::CommandOutput;

/// Executes programs on behalf of a host backend.
///
/// This is the seam between query parsing and process execution, so that
/// [`LocalHost`](crate::LocalHost) can be exercised against scripted output.
pub trait CommandRunner {
    /// Runs `program` with `args`, capturing its output.
    ///
    /// A non-zero exit status is reported through [`CommandOutput::rc`],
    /// never as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the program could not be started.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, HostError>;
}

/// Runs programs on the local machine through `duct`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuctRunner;

impl CommandRunner for DuctRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, HostError> {
        let command: String = render_command_line(program, args);
        let expression: duct::Expression = duct::cmd(program, args.iter().copied())
            .stdout_capture()
            .stderr_capture()
            .unchecked();

        tracing::debug!("running command: {command}");
        let output: std::process::Output = expression.run().map_err(|source| {
            // The command may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {command}");
            HostError::Spawn {
                command: command.clone(),
                source,
            }
        })?;

        let rc: i32 = output.status.code().unwrap_or(-1);
        tracing::trace!(rc, "command finished: {command}");

        Ok(CommandOutput {
            command,
            rc,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Joins a program and its arguments into a single line for logs and errors.
pub(crate) fn render_command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<&str>>()
        .join(" ")
}
