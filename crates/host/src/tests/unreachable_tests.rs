// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Host, HostError, UnreachableHost};

#[test]
fn test_every_query_reports_the_reason() {
    let host: UnreachableHost = UnreachableHost::new("instance", "connection `docker` is not supported");

    assert_eq!(host.name(), "instance");
    let errors: Vec<HostError> = vec![
        host.package("git").unwrap_err(),
        host.service("ufw").unwrap_err(),
        host.file("/etc/hosts").unwrap_err(),
        host.user(None).unwrap_err(),
        host.run("true").unwrap_err(),
    ];
    for err in errors {
        assert_eq!(
            err.to_string(),
            "host instance is unreachable: connection `docker` is not supported"
        );
    }
}
