use crate::error::{BaitScanError, Result};
use crate::types::config::ScanConfig;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "baitscan.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".baitscan/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/baitscan/config.toml";

/// Scan settings for the project in `root`, layered over the user's global
/// file and under the uncommitted `.baitscan/local.toml`.
///
/// `None` when the project has no `baitscan.toml`; the scan then runs with
/// the builtin site name, weights and reference year.
pub fn load_config(root: &Path) -> Result<Option<ScanConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ScanConfig>> {
    let project_path = root.join(DEFAULT_CONFIG_FILE);
    if !project_path.is_file() {
        debug!(path = %project_path.display(), "no project config");
        return Ok(None);
    }

    let layers = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([project_path, root.join(DEFAULT_LOCAL_FILE)])
        .filter(|path| path.is_file());

    let mut settings = Table::new();
    for path in layers {
        debug!(path = %path.display(), "applying config layer");
        overlay(&mut settings, read_layer(&path)?);
    }

    // Type mismatches surface as `BaitScanError::Toml`; value bounds are
    // checked by `validate`.
    let cfg: ScanConfig = Value::Table(settings).try_into()?;
    cfg.validate()?;
    Ok(Some(cfg))
}

/// One config file as a TOML table. Syntax errors name the file.
fn read_layer(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    content
        .parse::<Table>()
        .map_err(|e| BaitScanError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Writes `layer` over `settings`. Sections such as `[scoring.weights]` merge
/// key by key, so a local file can override a single weight; any other value
/// replaces what an earlier layer set.
fn overlay(settings: &mut Table, layer: Table) {
    for (key, value) in layer {
        match value {
            Value::Table(section) => match settings.get_mut(&key) {
                Some(Value::Table(existing)) => overlay(existing, section),
                _ => {
                    settings.insert(key, Value::Table(section));
                }
            },
            other => {
                settings.insert(key, other);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_project_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[scan]
site = "homes"

[normalize]
reference_year = 2024
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[scan]
site = "suumo"

[scoring.weights]
price_gap = 0.40
report_count = 0.05
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".baitscan")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[normalize]
reference_year = 2026
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.site(), "suumo");
        assert_eq!(cfg.reference_year(), Some(2026));
        let weights = cfg.weights();
        assert_eq!(weights.price_gap, 0.40);
        assert_eq!(weights.report_count, 0.05);
        assert_eq!(weights.few_photos, 0.15);
    }

    #[test]
    fn load_config_rejects_weights_not_summing_to_one() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[scoring.weights]
price_gap = 0.90
"#,
        )
        .expect("project config should write");

        let err = load_config_with_global(root.path(), None).expect_err("invalid weights");
        assert!(err.to_string().contains("sum to 1.0"));
    }

    #[test]
    fn load_config_reports_wrong_value_type() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[normalize]\nreference_year = \"last year\"\n",
        )
        .expect("project config should write");

        let err = load_config_with_global(root.path(), None).expect_err("wrong type");
        assert!(matches!(err, BaitScanError::Toml(_)));
    }

    #[test]
    fn local_layer_overrides_single_weight() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[scoring.weights]\nprice_gap = 0.40\nreport_count = 0.05\n",
        )
        .expect("project config should write");
        fs::create_dir_all(root.path().join(".baitscan")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            "[scoring.weights]\nprice_gap = 0.30\nreport_count = 0.15\n",
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None)
            .expect("load should succeed")
            .expect("merged config should exist");
        assert_eq!(cfg.weights(), crate::scoring::FactorWeights::default());
    }

    #[test]
    fn load_config_reports_malformed_toml_with_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[scan\nsite = 1")
            .expect("project config should write");

        let err = load_config_with_global(root.path(), None).expect_err("bad toml");
        assert!(matches!(err, BaitScanError::ConfigParse(_)));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
