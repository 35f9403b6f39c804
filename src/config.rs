use crate::error::{EngineError, Result};
use crate::types::config::ScoringConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "repo-insight.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".repo-insight/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/repo-insight/config.toml";

/// Layers global, project (or `explicit`) and local TOML over the defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<ScoringConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(explicit, cwd, global.as_deref())
}

pub(crate) fn load_config_with_global(
    explicit: Option<&Path>,
    cwd: &Path,
    global_path: Option<&Path>,
) -> Result<ScoringConfig> {
    let project_path = match explicit {
        Some(path) if !path.exists() => {
            return Err(EngineError::PathNotFound(path.display().to_string()));
        }
        Some(path) => path.to_path_buf(),
        None => cwd.join(DEFAULT_CONFIG_FILE),
    };

    let mut merged = Value::Table(Map::new());
    let mut layers = 0;
    if let Some(path) = global_path {
        layers += merge_file_if_exists(&mut merged, path)?;
    }
    layers += merge_file_if_exists(&mut merged, &project_path)?;
    layers += merge_file_if_exists(&mut merged, &cwd.join(DEFAULT_LOCAL_FILE))?;
    debug!(layers, "config layers merged");

    let cfg: ScoringConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| EngineError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<usize> {
    if !path.exists() {
        return Ok(0);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(1)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| EngineError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn no_layers_yields_defaults() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(None, dir.path(), None).expect("load should not fail");
        assert_eq!(cfg, ScoringConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_config_with_global(Some(&missing), dir.path(), None)
            .expect_err("missing explicit config should fail");
        assert!(matches!(err, EngineError::PathNotFound(_)));
    }

    #[test]
    fn layers_merge_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[security]
base = 40.0

[badges.testing]
gold = 95
silver = 80
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[security]
base = 55.0

[insights]
strength_min = 75
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".repo-insight"))
            .expect("local config dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[badges.testing]
silver = 65
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(None, root.path(), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.security.base, 55.0);
        assert_eq!(cfg.insights.strength_min, 75);
        assert_eq!(cfg.badges.testing.gold, 95);
        assert_eq!(cfg.badges.testing.silver, 65);
        assert_eq!(cfg.weights, ScoringConfig::default().weights);
    }

    #[test]
    fn explicit_file_replaces_the_project_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[security]\nbase = 10.0\n",
        )
        .expect("project config should write");
        let explicit = root.path().join("tuned.toml");
        fs::write(&explicit, "[security]\nbase = 90.0\n").expect("explicit config should write");

        let cfg = load_config_with_global(Some(&explicit), root.path(), None)
            .expect("load should succeed");
        assert_eq!(cfg.security.base, 90.0);
    }

    #[test]
    fn merged_config_is_validated() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[weights]\ncode_quality = 0.9\n",
        )
        .expect("project config should write");

        let err = load_config_with_global(None, root.path(), None)
            .expect_err("weights over 1.0 in total should fail");
        assert!(err.to_string().contains("weights must sum to 1.0"));
    }

    #[test]
    fn unknown_weight_key_is_a_parse_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[weights]\nspeed = 0.1\n",
        )
        .expect("project config should write");

        let err = load_config_with_global(None, root.path(), None)
            .expect_err("unknown weight should fail");
        assert!(matches!(err, EngineError::ConfigParse(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error_naming_the_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[security\nbase = ")
            .expect("project config should write");

        let err = load_config_with_global(None, root.path(), None)
            .expect_err("malformed toml should fail");
        assert!(matches!(err, EngineError::ConfigParse(_)));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn merge_toml_replaces_scalars_and_merges_tables() {
        let mut base: Value = toml::from_str("[a]\nx = 1\ny = 2\n").expect("base should parse");
        let overlay: Value = toml::from_str("[a]\ny = 3\nz = 4\n").expect("overlay should parse");
        merge_toml(&mut base, overlay);
        let table = base["a"].as_table().expect("a should be a table");
        assert_eq!(table["x"].as_integer(), Some(1));
        assert_eq!(table["y"].as_integer(), Some(3));
        assert_eq!(table["z"].as_integer(), Some(4));
    }
}
