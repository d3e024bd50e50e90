//! ghx tests: gh operations over a scripted executor and the binary over a
//! fake gh script

mod support;

use chrono::{Duration, TimeZone, Utc};
use opskit::github::{CreateRepoParams, SortOrder, Visibility};
use opskit::utils::filters::{RepoQuery, UpdateWindow};
use support::{Workspace, ghx, scripted_gh};

const LISTING: &str = r#"[
    {"name":"alpha","visibility":"PUBLIC","url":"https://github.com/me/alpha","updatedAt":"2025-06-01T00:00:00Z"},
    {"name":"beta","visibility":"PRIVATE","url":"https://github.com/me/beta","updatedAt":"2024-01-01T00:00:00Z"},
    {"name":"gamma","visibility":"public","url":"https://github.com/me/gamma","updatedAt":null},
    {"name":"delta","visibility":"INTERNAL","url":"https://github.com/me/delta","updatedAt":"2025-06-01T00:00:00Z"}
]"#;

#[test]
fn test_list_then_filter_and_sort() {
    let (executor, client) = scripted_gh();
    executor.push_success(LISTING);

    let repos = client.list_repositories(None).unwrap();
    assert_eq!(repos.len(), 4);
    assert_eq!(
        executor.command_lines(),
        vec!["repo list --limit 1000 --json name,visibility,url,updatedAt,createdAt,pushedAt"]
    );

    let now = Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap();
    let query = RepoQuery {
        visibility: Some("PUBLIC".to_string()),
        window: None,
        sort: Some(SortOrder::Desc),
    };
    let names: Vec<_> = query
        .apply(&repos, now)
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["alpha", "gamma"]);
}

#[test]
fn test_update_windows_partition_dated_entries() {
    let (executor, client) = scripted_gh();
    executor.push_success(LISTING);
    let repos = client.list_repositories(None).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap();

    let within = RepoQuery {
        window: Some(UpdateWindow::Within(3)),
        ..Default::default()
    }
    .apply(&repos, now);
    let before = RepoQuery {
        window: Some(UpdateWindow::Before(3)),
        ..Default::default()
    }
    .apply(&repos, now);

    let dated = repos.iter().filter(|r| r.updated_at.is_some()).count();
    assert_eq!(within.len() + before.len(), dated);
    assert!(
        within
            .iter()
            .all(|r| r.updated_at.unwrap() >= now - Duration::days(90))
    );
    assert_eq!(before[0].name, "beta");
}

#[test]
fn test_create_and_delete_argument_vectors() {
    let (executor, client) = scripted_gh();
    executor.push_success("https://github.com/me/tool");
    executor.push_success("me");
    executor.push_success("");

    let params = CreateRepoParams::new("tool", Visibility::Internal).with_description("CLI tool");
    client.create_repository(&params).unwrap();
    let full_name = client.delete_repository("tool").unwrap();

    assert_eq!(full_name, "me/tool");
    assert_eq!(
        executor.command_lines(),
        vec![
            "repo create tool --internal --description CLI tool",
            "api user --jq .login",
            "repo delete me/tool --yes",
        ]
    );
}

#[test]
fn test_gh_failure_surfaces_stderr() {
    let (executor, client) = scripted_gh();
    executor.push_output(1, "", "GraphQL: Could not resolve to a Repository");

    let err = client.list_secrets("me/missing").unwrap_err();
    assert!(err.to_string().contains("Could not resolve"));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let (executor, client) = scripted_gh();
    executor.push_success("not json");

    let err = client.list_variables("me/app").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<opskit::Error>(),
        Some(opskit::Error::Parse { .. })
    ));
}

#[test]
fn test_unknown_subcommand_prints_usage_and_succeeds() {
    let out = ghx().args(&["frobnicate"]).run();
    assert_eq!(out.status, 0);
    assert!(out.stdout.contains("Usage:"));
}

#[test]
fn test_updated_window_flags_conflict() {
    let out = ghx()
        .args(&["list", "--updated-within", "3", "--updated-before", "6"])
        .run();
    assert_eq!(out.status, 1);
}

#[test]
fn test_missing_gh_binary_fails() {
    let ws = Workspace::new();
    let missing = ws.join("no-such-gh");
    let out = ghx()
        .args(&["list", "--gh-bin", missing.to_str().unwrap()])
        .run();
    assert_eq!(out.status, 1);
    assert!(out.stderr.contains("Failed to execute"));
}

#[cfg(unix)]
mod with_fake_gh {
    use super::support::{Workspace, fake_gh, gh_log, ghx};
    use std::fs;

    #[test]
    fn test_list_json_applies_filters() {
        let ws = Workspace::new();
        let gh = fake_gh(&ws);

        let out = ghx()
            .env("GHX_GH_BIN", gh.to_str().unwrap())
            .args(&["list", "--visibility", "private", "--json"])
            .run();

        assert_eq!(out.status, 0, "stderr: {}", out.stderr);
        let listed: serde_json::Value = serde_json::from_str(&out.stdout).unwrap();
        let listed = listed.as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["name"], "stale");
    }

    #[test]
    fn test_list_table_sorted_ascending() {
        let ws = Workspace::new();
        let gh = fake_gh(&ws);

        let out = ghx()
            .args(&["list", "--sort", "asc", "--gh-bin", gh.to_str().unwrap()])
            .run();

        assert_eq!(out.status, 0, "stderr: {}", out.stderr);
        let stale = out.stdout.find("stale").unwrap();
        let fresh = out.stdout.find("fresh").unwrap();
        assert!(stale < fresh);
        assert!(out.stdout.contains("Total: 2 repositories"));
    }

    #[test]
    fn test_secret_set_reads_value_from_stdin() {
        let ws = Workspace::new();
        let gh = fake_gh(&ws);

        let out = ghx()
            .env("GHX_GH_BIN", gh.to_str().unwrap())
            .args(&["secret", "set", "TOKEN", "--repo", "app"])
            .stdin("hunter2\n")
            .run();

        assert_eq!(out.status, 0, "stderr: {}", out.stderr);
        assert_eq!(
            gh_log(&ws),
            vec!["api user --jq .login", "secret set TOKEN --repo me/app"]
        );
        let sent = fs::read_to_string(ws.join("gh.log.stdin")).unwrap();
        assert_eq!(sent, "hunter2");
    }

    #[test]
    fn test_delete_failure_exits_with_failure() {
        let ws = Workspace::new();
        let gh = fake_gh(&ws);

        let out = ghx()
            .env("GHX_GH_BIN", gh.to_str().unwrap())
            .args(&["delete", "me/locked", "--yes"])
            .run();

        assert_eq!(out.status, 1);
        assert!(out.stderr.contains("Must have admin rights"));
    }

    #[test]
    fn test_delete_declined_does_not_call_gh() {
        let ws = Workspace::new();
        let gh = fake_gh(&ws);

        let out = ghx()
            .env("GHX_GH_BIN", gh.to_str().unwrap())
            .args(&["delete", "me/tool"])
            .stdin("n\n")
            .run();

        assert_eq!(out.status, 0);
        assert!(out.stdout.contains("Cancelled"));
        assert!(gh_log(&ws).is_empty());
    }

    #[test]
    fn test_no_subcommand_opens_menu() {
        let ws = Workspace::new();
        let gh = fake_gh(&ws);

        let out = ghx()
            .env("GHX_GH_BIN", gh.to_str().unwrap())
            .stdin("6\nme/app\n0\n")
            .run();

        assert_eq!(out.status, 0, "stderr: {}", out.stderr);
        assert!(out.stdout.contains("7) Set variable"));
        assert_eq!(
            gh_log(&ws),
            vec!["variable list --repo me/app --json name,value,updatedAt"]
        );
    }
}
