//! Merge and remove against real files: backup, rewrite, dry run.

mod common;

use hosts_merge::grammar::MERGE_MARKER;
use hosts_merge::hosts::{self, Mode};
use hosts_merge::merge::Merger;
use hosts_merge::platform::FixedHostname;
use hosts_merge::remove::Remover;
use std::fs;

#[test]
fn merge_backs_up_and_rewrites() {
    let dir = common::temp_dir();
    let local = dir.path().join("hosts");
    let custom = dir.path().join("custom.txt");
    fs::write(&local, "127.0.0.1\tlocalhost\n").unwrap();
    fs::write(&custom, "box 10.0.0.9\n10.0.0.2 db.lan\n").unwrap();

    let reporter = common::RecordingReporter::default();
    let hostname = FixedHostname("box".to_string());
    hosts::merge_file(&local, &custom, &Merger::default(), &hostname, Mode::Write, &reporter)
        .unwrap();

    assert_eq!(
        fs::read_to_string(&local).unwrap(),
        format!("127.0.0.1\tlocalhost\n{MERGE_MARKER}\n10.0.0.2 db.lan")
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("hosts.bak")).unwrap(),
        "127.0.0.1\tlocalhost\n"
    );
    assert!(reporter.contains("Hostname is box"));
    assert!(reporter.contains("Done"));
}

#[test]
fn merge_twice_leaves_file_stable() {
    let dir = common::temp_dir();
    let local = dir.path().join("hosts");
    let custom = dir.path().join("custom.txt");
    fs::write(&local, "127.0.0.1\tlocalhost\n").unwrap();
    fs::write(&custom, "10.0.0.2 db.lan\n").unwrap();

    let hostname = FixedHostname("box".to_string());
    let reporter = hosts_merge::report::NullReporter;
    hosts::merge_file(&local, &custom, &Merger::default(), &hostname, Mode::Write, &reporter)
        .unwrap();
    let first = fs::read_to_string(&local).unwrap();
    hosts::merge_file(&local, &custom, &Merger::default(), &hostname, Mode::Write, &reporter)
        .unwrap();

    assert_eq!(fs::read_to_string(&local).unwrap(), first);
    assert_eq!(fs::read_to_string(dir.path().join("hosts.bak")).unwrap(), first);
}

#[test]
fn remove_backs_up_and_rewrites() {
    let dir = common::temp_dir();
    let local = dir.path().join("hosts");
    let original = "a\n# start|dev\n10.0.0.1 dev.lan\n# end|dev\nb\n";
    fs::write(&local, original).unwrap();

    let lines = hosts::remove_section(
        &local,
        "dev",
        &Remover::default(),
        Mode::Write,
        &hosts_merge::report::NullReporter,
    )
    .unwrap();

    assert_eq!(lines, common::lines(&["a", "b"]));
    assert_eq!(fs::read_to_string(&local).unwrap(), "a\nb");
    assert_eq!(fs::read_to_string(dir.path().join("hosts.bak")).unwrap(), original);
}

#[test]
fn dry_run_touches_nothing() {
    let dir = common::temp_dir();
    let local = dir.path().join("hosts");
    let original = "a\n# start|dev\nx\n# end|dev\n";
    fs::write(&local, original).unwrap();

    let lines = hosts::remove_section(
        &local,
        "dev",
        &Remover::default(),
        Mode::DryRun,
        &hosts_merge::report::NullReporter,
    )
    .unwrap();

    assert_eq!(lines, common::lines(&["a"]));
    assert_eq!(fs::read_to_string(&local).unwrap(), original);
    assert!(!dir.path().join("hosts.bak").exists());
}

#[test]
fn missing_local_file_fails_before_write() {
    let dir = common::temp_dir();
    let local = dir.path().join("hosts");
    let custom = dir.path().join("custom.txt");
    fs::write(&custom, "10.0.0.2 db.lan\n").unwrap();

    let hostname = FixedHostname("box".to_string());
    let err = hosts::merge_file(
        &local,
        &custom,
        &Merger::default(),
        &hostname,
        Mode::Write,
        &hosts_merge::report::NullReporter,
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("hosts"));
    assert!(!local.exists());
}
