use std::fs;
use tempfile::TempDir;

use xcconfig_graph::scanner::{ScanConfig, Scanner};

fn make_temp_repo(entries: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (rel, body) in entries {
        let p = dir.path().join(rel);
        if let Some(par) = p.parent() {
            fs::create_dir_all(par).unwrap();
        }
        fs::write(p, body).unwrap();
    }
    dir
}

#[test]
fn third_party_file_is_never_scanned() {
    let repo = make_temp_repo(&[
        ("third-party/lib/vendor.xcconfig", "#include \"../../app/base.xcconfig\"\n"),
        ("app/base.xcconfig", "A = 1\n"),
        ("app/app.xcconfig", "#include \"base.xcconfig\"\n"),
    ]);

    let graph = Scanner::new(repo.path(), ScanConfig::default()).scan().expect("scan");
    assert!(!graph.keys().any(|k| k.contains("third-party")));
    let base = graph.children("\"app/base.xcconfig\"").unwrap();
    assert_eq!(base.len(), 1);
}

#[test]
fn submodules_are_ignored_by_default() {
    let repo = make_temp_repo(&[("submodules/kit/kit.xcconfig", "#include \"x.xcconfig\"\n")]);

    let graph = Scanner::new(repo.path(), ScanConfig::default()).scan().expect("scan");
    assert!(graph.is_empty());
}

#[test]
fn malformed_file_under_ignored_path_does_not_fail() {
    let repo = make_temp_repo(&[("third-party/broken.xcconfig", "#include nothing-quoted\n")]);

    let graph = Scanner::new(repo.path(), ScanConfig::default()).scan().expect("scan");
    assert!(graph.is_empty());
}

#[test]
fn custom_ignore_list_replaces_defaults() {
    let repo = make_temp_repo(&[
        ("Pods/p.xcconfig", "#include \"x.xcconfig\"\n"),
        ("third-party/t.xcconfig", "#include \"y.xcconfig\"\n"),
    ]);

    let cfg = ScanConfig { ignore: vec!["Pods".into()], ..ScanConfig::default() };
    let graph = Scanner::new(repo.path(), cfg).scan().expect("scan");
    assert!(graph.contains("\"third-party/y.xcconfig\""));
    assert!(!graph.keys().any(|k| k.starts_with("\"Pods")));
}

#[test]
fn hidden_directories_are_skipped() {
    let repo = make_temp_repo(&[(".build/gen.xcconfig", "#include \"x.xcconfig\"\n")]);

    let graph = Scanner::new(repo.path(), ScanConfig::default()).scan().expect("scan");
    assert!(graph.is_empty());
}

#[test]
fn including_a_third_party_file_adds_no_node() {
    let repo = make_temp_repo(&[
        ("app/app.xcconfig", "#include \"../third-party/vendor.xcconfig\"\n#include \"base.xcconfig\"\n"),
        ("app/base.xcconfig", "A = 1\n"),
        ("third-party/vendor.xcconfig", "B = 2\n"),
    ]);

    let s = Scanner::new(repo.path(), ScanConfig::default());
    let graph = s.scan().expect("scan");
    assert!(!graph.keys().any(|k| k.contains("third-party")));
    assert!(graph.children("\"app/base.xcconfig\"").unwrap().contains("\"app/app.xcconfig\""));

    graph.export_graph_description(&s.output_path()).unwrap();
    let dot = fs::read_to_string(s.output_path()).unwrap();
    assert!(!dot.contains("third-party"));
}
