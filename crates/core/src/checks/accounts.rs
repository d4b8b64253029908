// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use provcheck_host::{FileState, Host, UserState};

use super::{AUR_BUILDER_GROUP, AUR_BUILDER_USER, USER_DIRECTORIES};
use crate::error::{CheckError, ensure};

/// Checks that the AUR builder account exists with `wheel` as its primary
/// group.
///
/// # Errors
///
/// Fails if the account is missing or has another primary group.
pub fn aur_builder_user_exists(host: &dyn Host) -> Result<(), CheckError> {
    let user: UserState = host.user(Some(AUR_BUILDER_USER))?;
    ensure(user.exists, "AUR builder user should exist")?;
    ensure(
        user.group.as_deref() == Some(AUR_BUILDER_GROUP),
        "AUR builder should be in wheel group",
    )
}

/// Checks that the standard XDG directories exist under the current user's
/// home.
///
/// # Errors
///
/// Fails on the first directory that is missing or is not a directory, or
/// if the current user has no home directory.
pub fn user_directories_exist(host: &dyn Host) -> Result<(), CheckError> {
    let user: UserState = host.user(None)?;
    let Some(home) = user.home else {
        return Err(CheckError::AssertionFailed(format!(
            "User {} should have a home directory",
            user.name
        )));
    };

    for directory in USER_DIRECTORIES {
        let path: String = format!("{}/{directory}", home.trim_end_matches('/'));
        let file: FileState = host.file(&path)?;
        ensure(file.exists(), format!("Directory {directory} should exist"))?;
        ensure(
            file.is_directory(),
            format!("{directory} should be a directory"),
        )?;
    }
    Ok(())
}
