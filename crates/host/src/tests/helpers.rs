// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A command runner that answers from a script instead of spawning processes.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::runner::render_command_line;
use crate::{CommandOutput, CommandRunner, HostError, LocalHost, PackageManager};

/// Replays canned output keyed by the full command line.
///
/// Unscripted commands exit 127 with "command not found", like a shell.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, (i32, String)>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, command_line: &str, rc: i32, stdout: &str) -> Self {
        self.responses
            .insert(command_line.to_string(), (rc, stdout.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, HostError> {
        let command: String = render_command_line(program, args);
        self.calls.borrow_mut().push(command.clone());
        let (rc, stdout) = self
            .responses
            .get(&command)
            .cloned()
            .unwrap_or((127, String::new()));
        let stderr: String = if rc == 127 {
            format!("{program}: command not found")
        } else {
            String::new()
        };
        Ok(CommandOutput {
            command,
            rc,
            stdout,
            stderr,
        })
    }
}

/// A runner whose every command fails to start.
#[derive(Debug, Default)]
pub struct BrokenRunner;

impl CommandRunner for BrokenRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, HostError> {
        Err(HostError::Spawn {
            command: render_command_line(program, args),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        })
    }
}

pub fn create_test_pacman_host(runner: ScriptedRunner) -> LocalHost<ScriptedRunner> {
    LocalHost::with_runner("test-host", runner, Some(PackageManager::Pacman))
}
