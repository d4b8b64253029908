// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use provcheck_host::FileKind;

use crate::checks::{USER_DIRECTORIES, aur_builder_user_exists, user_directories_exist};
use crate::tests::helpers::{FakeHost, create_provisioned_host, failure_message};

#[test]
fn test_aur_builder_in_wheel_passes() {
    let host: FakeHost = create_provisioned_host();
    assert!(aur_builder_user_exists(&host).is_ok());
}

#[test]
fn test_aur_builder_missing_fails() {
    let mut host: FakeHost = create_provisioned_host();
    host.users.remove("aur_builder");
    assert_eq!(
        failure_message(aur_builder_user_exists(&host)),
        "AUR builder user should exist"
    );
}

#[test]
fn test_aur_builder_wrong_group_fails() {
    let host: FakeHost =
        create_provisioned_host().with_user("aur_builder", "users", "/home/aur_builder");
    assert_eq!(
        failure_message(aur_builder_user_exists(&host)),
        "AUR builder should be in wheel group"
    );
}

#[test]
fn test_aur_builder_wheel_as_supplementary_group_only_fails() {
    let mut host: FakeHost = create_provisioned_host();
    let user = host.users.get_mut("aur_builder").unwrap();
    user.group = Some(String::from("aur_builder"));
    user.groups = vec![String::from("aur_builder"), String::from("wheel")];

    assert_eq!(
        failure_message(aur_builder_user_exists(&host)),
        "AUR builder should be in wheel group"
    );
}

#[test]
fn test_user_directories_present() {
    let host: FakeHost = create_provisioned_host();
    assert!(user_directories_exist(&host).is_ok());
}

#[test]
fn test_each_missing_user_directory_fails() {
    for directory in USER_DIRECTORIES {
        let host: FakeHost =
            create_provisioned_host().without_file(&format!("/home/alice/{directory}"));
        assert_eq!(
            failure_message(user_directories_exist(&host)),
            format!("Directory {directory} should exist")
        );
    }
}

#[test]
fn test_file_in_place_of_directory_fails() {
    let host: FakeHost = create_provisioned_host().with_file(
        "/home/alice/Music",
        FileKind::RegularFile,
        0o644,
    );
    assert_eq!(
        failure_message(user_directories_exist(&host)),
        "Music should be a directory"
    );
}

#[test]
fn test_trailing_slash_in_home_is_tolerated() {
    let host: FakeHost = create_provisioned_host().with_user("alice", "alice", "/home/alice/");
    assert!(user_directories_exist(&host).is_ok());
}

#[test]
fn test_current_user_without_home_fails() {
    let mut host: FakeHost = create_provisioned_host();
    host.users.get_mut("alice").unwrap().home = None;
    assert_eq!(
        failure_message(user_directories_exist(&host)),
        "User alice should have a home directory"
    );
}
