//! Tests for the Verdict configuration system.

use std::sync::Mutex;

use verdict_core::config::{ConfigOverrides, VerdictConfig};
use verdict_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Points HOME at `home` until dropped, restoring the previous value.
struct HomeGuard {
    home: Option<std::ffi::OsString>,
    userprofile: Option<std::ffi::OsString>,
}

impl HomeGuard {
    fn set(home: &std::path::Path) -> Self {
        let guard = Self {
            home: std::env::var_os("HOME"),
            userprofile: std::env::var_os("USERPROFILE"),
        };
        std::env::set_var("HOME", home);
        std::env::remove_var("USERPROFILE");
        guard
    }
}

impl Drop for HomeGuard {
    fn drop(&mut self) {
        match &self.home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }
        if let Some(v) = &self.userprofile {
            std::env::set_var("USERPROFILE", v);
        }
    }
}

fn write_user_config(home: &std::path::Path, content: &str) {
    let dir = home.join(".verdict");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), content).unwrap();
}

/// Clear all VERDICT_ env vars to prevent cross-test contamination.
fn clear_verdict_env_vars() {
    for key in [
        "VERDICT_SCORING_CONFIDENCE",
        "VERDICT_SCORING_TOP_N",
        "VERDICT_SCORING_PARALLEL",
        "VERDICT_AGGREGATION_BUCKET_WEIGHTS",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_verdict_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("verdict.toml"),
        r#"
[scoring]
confidence = 0.9
top_n = 10

[aggregation]
bucket_weights = [40.0, 30.0, 20.0, 10.0]
"#,
    )
    .unwrap();

    std::env::set_var("VERDICT_SCORING_TOP_N", "5");

    let overrides = ConfigOverrides {
        confidence: Some(0.99),
        ..Default::default()
    };

    let config = VerdictConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Overrides beat the project file
    assert_eq!(config.scoring.confidence, Some(0.99));
    // Env beats the project file
    assert_eq!(config.scoring.top_n, Some(5));
    // Project file beats defaults
    assert_eq!(
        config.aggregation.effective_bucket_weights(),
        [40.0, 30.0, 20.0, 10.0]
    );

    clear_verdict_env_vars();
}

#[test]
fn test_load_without_files_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_verdict_env_vars();

    let home = tempdir();
    let _home = HomeGuard::set(home.path());

    let dir = tempdir();
    let config = VerdictConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.scoring.effective_confidence(), 0.95);
    assert_eq!(config.scoring.effective_top_n(), 20);
    assert!(!config.scoring.effective_parallel());
    assert_eq!(
        config.aggregation.effective_bucket_weights(),
        [28.0, 27.0, 23.0, 22.0]
    );
}

#[test]
fn test_user_config_beats_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_verdict_env_vars();

    let home = tempdir();
    let _home = HomeGuard::set(home.path());
    write_user_config(
        home.path(),
        r#"
[scoring]
confidence = 0.8
top_n = 7
"#,
    );

    let dir = tempdir();
    let config = VerdictConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.scoring.confidence, Some(0.8));
    assert_eq!(config.scoring.effective_top_n(), 7);
    // Keys absent from the user file keep their defaults
    assert_eq!(
        config.aggregation.effective_bucket_weights(),
        [28.0, 27.0, 23.0, 22.0]
    );
}

#[test]
fn test_project_config_beats_user_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_verdict_env_vars();

    let home = tempdir();
    let _home = HomeGuard::set(home.path());
    write_user_config(
        home.path(),
        r#"
[scoring]
confidence = 0.8
top_n = 7
"#,
    );

    let dir = tempdir();
    std::fs::write(dir.path().join("verdict.toml"), "[scoring]\ntop_n = 3\n").unwrap();

    let config = VerdictConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.scoring.effective_top_n(), 3);
    // Not set by the project file, so the user value survives
    assert_eq!(config.scoring.confidence, Some(0.8));
}

#[test]
fn test_invalid_user_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_verdict_env_vars();

    let home = tempdir();
    let _home = HomeGuard::set(home.path());
    write_user_config(home.path(), "[scoring\nconfidence = ");

    let dir = tempdir();
    let err = VerdictConfig::load(dir.path(), None).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("config.toml")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_env_weights_and_bad_env_values() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_verdict_env_vars();

    std::env::set_var("VERDICT_AGGREGATION_BUCKET_WEIGHTS", "25,25,25,25");
    std::env::set_var("VERDICT_SCORING_PARALLEL", "true");
    // Not a number: falls through to the default
    std::env::set_var("VERDICT_SCORING_CONFIDENCE", "high");

    let dir = tempdir();
    let config = VerdictConfig::load(dir.path(), None).unwrap();

    assert_eq!(
        config.aggregation.effective_bucket_weights(),
        [25.0, 25.0, 25.0, 25.0]
    );
    assert!(config.scoring.effective_parallel());
    assert_eq!(config.scoring.confidence, None);

    clear_verdict_env_vars();
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_verdict_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("verdict.toml"), "[scoring\nconfidence = ").unwrap();

    let err = VerdictConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_out_of_range_confidence() {
    for bad in ["0.0", "1.0", "1.5", "-0.2"] {
        let err = VerdictConfig::from_toml(&format!("[scoring]\nconfidence = {bad}\n")).unwrap_err();
        match err {
            ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "scoring.confidence"),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}

#[test]
fn test_validation_rejects_zero_top_n_and_negative_weights() {
    assert!(matches!(
        VerdictConfig::from_toml("[scoring]\ntop_n = 0\n"),
        Err(ConfigError::ValidationFailed { .. })
    ));
    assert!(matches!(
        VerdictConfig::from_toml("[aggregation]\nbucket_weights = [28.0, -1.0, 23.0, 22.0]\n"),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_toml_round_trip() {
    let config = VerdictConfig::from_toml(
        "[scoring]\nconfidence = 0.8\nparallel = true\n\n[aggregation]\nbucket_weights = [28.0, 27.0, 23.0, 22.0]\n",
    )
    .unwrap();
    let text = config.to_toml().unwrap();
    assert_eq!(VerdictConfig::from_toml(&text).unwrap(), config);
}

#[test]
fn test_unknown_keys_ignored() {
    let config = VerdictConfig::from_toml("[scoring]\ncolumn_width = 500\n").unwrap();
    assert_eq!(config, VerdictConfig::default());
}
