use std::fs;
use std::path::Path;
use xcconfig_graph::errors::ConfigGraphError;
use xcconfig_graph::utils::config;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    fs::write(path, content).unwrap();
}

#[test]
fn parses_full_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg_path = tmp.path().join("custom.toml");
    let data = r##"
[scan]
ignore = ["Pods", "Carthage"]
extension = "xcconfig"
marker = "#include"

[output]
dot = "docs/config.dot"
json = "docs/config.json"
svg = "docs/config.svg"
"##;
    write(&cfg_path, data);

    let cfg = config::load_config_at(&cfg_path).expect("config parsed");
    let scan = cfg.scan.as_ref().unwrap();
    assert_eq!(scan.ignore.as_deref(), Some(&["Pods".to_string(), "Carthage".to_string()][..]));
    assert_eq!(scan.extension.as_deref(), Some("xcconfig"));
    assert_eq!(scan.marker.as_deref(), Some("#include"));
    let out = cfg.output.as_ref().unwrap();
    assert_eq!(out.dot.as_deref(), Some("docs/config.dot"));
    assert_eq!(out.json.as_deref(), Some("docs/config.json"));
    assert_eq!(out.svg.as_deref(), Some("docs/config.svg"));
}

#[test]
fn load_config_near_looks_for_default_name() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(config::load_config_near(tmp.path()).unwrap().is_none());

    write(&tmp.path().join("xcconfig-graph.toml"), "[scan]\nignore = ['Pods']\n");
    let cfg = config::load_config_near(tmp.path()).unwrap().expect("found default config");
    assert_eq!(cfg.scan.and_then(|s| s.ignore), Some(vec!["Pods".to_string()]));
}

#[test]
fn unknown_keys_are_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg_path = tmp.path().join("bad.toml");
    write(&cfg_path, "[scan]\nignored = ['Pods']\n");

    let err = config::load_config_at(&cfg_path).unwrap_err();
    assert!(matches!(err, ConfigGraphError::Config { .. }));
}
