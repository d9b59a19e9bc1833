// Runs the pipeline with native grouping disabled, so it lives in its own test binary.
use std::fs;
use typename_group::group::native_grouping_available;
use typename_group::handler::{run, Config, OutputFormat};

fn config_for(dir: &tempfile::TempDir, input: &str) -> Config {
    let path = dir.path().join("input.json");
    fs::write(&path, input).unwrap();
    Config {
        input: path,
        output_dir: dir.path().join("out"),
        format: OutputFormat::Json,
        disable_native: true,
        ..Config::default()
    }
}

// One test only: parallel tests in this binary would race on the shared switch.
#[test]
fn disabling_native_lasts_only_for_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();

    let ok = config_for(&dir, r#"[{"__typename": "User"}, {"__typename": "Post"}]"#);
    let summary = run(&ok, &mut out).unwrap();
    assert_eq!(summary.groups, 2);
    assert!(native_grouping_available());

    let failing = config_for(&dir, r#"[{"id": 1}]"#);
    assert!(run(&failing, &mut out).is_err());
    assert!(native_grouping_available());
}
