// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The installation state of a single package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageState {
    /// The package name that was queried.
    pub name: String,
    /// Whether the package manager reports the package as installed.
    pub is_installed: bool,
    /// The installed version, when the package manager reports one.
    pub version: Option<String>,
}

impl PackageState {
    /// Creates the state of a package that is not installed.
    #[must_use]
    pub fn absent(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_installed: false,
            version: None,
        }
    }

    /// Creates the state of an installed package.
    #[must_use]
    pub fn installed(name: &str, version: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            is_installed: true,
            version,
        }
    }
}

/// The state of a single service unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceState {
    /// The service name that was queried.
    pub name: String,
    /// Whether the service is currently active.
    pub is_running: bool,
    /// Whether the service is started at boot.
    pub is_enabled: bool,
}

/// What a filesystem path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    /// Nothing exists at the path.
    Missing,
    /// A regular file.
    RegularFile,
    /// A directory.
    Directory,
    /// A symbolic link that could not be followed further.
    Symlink,
    /// Anything else: sockets, fifos, device nodes.
    Other,
}

impl FileKind {
    /// Maps the `%F` format of `stat(1)` to a kind.
    #[must_use]
    pub fn from_stat_type(description: &str) -> Self {
        match description {
            "regular file" | "regular empty file" => Self::RegularFile,
            "directory" => Self::Directory,
            "symbolic link" => Self::Symlink,
            _ => Self::Other,
        }
    }
}

/// The state of a filesystem path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileState {
    /// The path that was inspected.
    pub path: String,
    /// What the path resolves to.
    pub kind: FileKind,
    /// Permission bits including set-id and sticky bits, if the path exists.
    /// For a symbolic link these are the link's own bits, not the target's.
    pub mode: Option<u32>,
}

impl FileState {
    /// Creates the state of a path with nothing behind it.
    #[must_use]
    pub fn missing(path: &str) -> Self {
        Self {
            path: path.to_string(),
            kind: FileKind::Missing,
            mode: None,
        }
    }

    /// Whether anything exists at the path.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.kind != FileKind::Missing
    }

    /// Whether the path is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == FileKind::RegularFile
    }

    /// Whether the path is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.kind == FileKind::Directory
    }
}

/// The state of a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    /// The user name that was queried.
    pub name: String,
    /// Whether the account exists.
    pub exists: bool,
    /// The name of the primary group.
    pub group: Option<String>,
    /// Every group the user belongs to, primary group first.
    pub groups: Vec<String>,
    /// The home directory.
    pub home: Option<String>,
}

impl UserState {
    /// Creates the state of an account that does not exist.
    #[must_use]
    pub fn absent(name: &str) -> Self {
        Self {
            name: name.to_string(),
            exists: false,
            group: None,
            groups: Vec::new(),
            home: None,
        }
    }
}

/// The captured result of running a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    /// The command line that was run.
    pub command: String,
    /// The exit status. `-1` when the process was killed by a signal.
    pub rc: i32,
    /// Everything written to standard output.
    pub stdout: String,
    /// Everything written to standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the command exited with status zero.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.rc == 0
    }
}
