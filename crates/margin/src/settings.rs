//! Pipeline configuration.
//!
//! Settings are layered, lowest precedence first: built-in defaults, an
//! optional TOML file, `MARGIN_*` environment variables, then explicit
//! overrides (the command line).

use chrono::NaiveDate;
use margin_output::ExportFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Prefix of environment variables read by [`PipelineConfig::load`].
pub const ENV_PREFIX: &str = "MARGIN";

/// Configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory holding one spreadsheet per company.
    pub input_dir: PathBuf,
    /// Directory receiving charts, summary and exports.
    pub output_dir: PathBuf,
    /// Metric export formats; empty disables export.
    pub export_formats: Vec<ExportFormat>,
    /// Date stamped on the summary. Defaults to today.
    pub analysis_date: Option<NaiveDate>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            export_formats: vec![ExportFormat::Csv, ExportFormat::Json],
            analysis_date: None,
        }
    }
}

/// Values that take precedence over every other source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Input directory override.
    pub input_dir: Option<PathBuf>,
    /// Output directory override.
    pub output_dir: Option<PathBuf>,
}

impl PipelineConfig {
    /// Load configuration from defaults, `file`, the environment and `overrides`.
    ///
    /// `file` must exist when given. Environment variables use the
    /// [`ENV_PREFIX`], e.g. `MARGIN_INPUT_DIR`, and `MARGIN_EXPORT_FORMATS`
    /// takes a comma-separated list.
    pub fn load(
        file: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, config::ConfigError> {
        Self::load_with_env(file, overrides, config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(
        file: Option<&Path>,
        overrides: &ConfigOverrides,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("input_dir", path_value(&defaults.input_dir))?
            .set_default("output_dir", path_value(&defaults.output_dir))?
            .set_default("export_formats", vec!["csv", "json"])?;

        if let Some(file) = file {
            builder = builder.add_source(config::File::from(file).required(true));
        }

        builder = builder
            .add_source(
                env.try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("export_formats"),
            )
            .set_override_option("input_dir", overrides.input_dir.as_deref().map(path_value))?
            .set_override_option(
                "output_dir",
                overrides.output_dir.as_deref().map(path_value),
            )?;

        builder.build()?.try_deserialize()
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn empty_env() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let config =
            PipelineConfig::load_with_env(None, &ConfigOverrides::default(), empty_env()).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_file_then_env_then_overrides() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("margin.toml");
        fs::write(
            &file,
            "input_dir = \"from_file\"\noutput_dir = \"out_file\"\nexport_formats = [\"json\"]\nanalysis_date = \"2024-05-01\"\n",
        )
        .unwrap();

        let config = PipelineConfig::load_with_env(
            Some(&file),
            &ConfigOverrides::default(),
            env(&[("MARGIN_OUTPUT_DIR", "out_env")]),
        )
        .unwrap();
        assert_eq!(config.input_dir, PathBuf::from("from_file"));
        assert_eq!(config.output_dir, PathBuf::from("out_env"));
        assert_eq!(config.export_formats, vec![ExportFormat::Json]);
        assert_eq!(config.analysis_date, NaiveDate::from_ymd_opt(2024, 5, 1));

        let overrides = ConfigOverrides {
            input_dir: Some(PathBuf::from("from_cli")),
            output_dir: None,
        };
        let config = PipelineConfig::load_with_env(
            Some(&file),
            &overrides,
            env(&[("MARGIN_INPUT_DIR", "from_env")]),
        )
        .unwrap();
        assert_eq!(config.input_dir, PathBuf::from("from_cli"));
        assert_eq!(config.output_dir, PathBuf::from("out_file"));
    }

    #[test]
    fn test_env_export_list() {
        let config = PipelineConfig::load_with_env(
            None,
            &ConfigOverrides::default(),
            env(&[("MARGIN_EXPORT_FORMATS", "csv")]),
        )
        .unwrap();
        assert_eq!(config.export_formats, vec![ExportFormat::Csv]);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = PipelineConfig::load_with_env(
            Some(Path::new("/no/such/margin.toml")),
            &ConfigOverrides::default(),
            empty_env(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_export_format_is_error() {
        let result = PipelineConfig::load_with_env(
            None,
            &ConfigOverrides::default(),
            env(&[("MARGIN_EXPORT_FORMATS", "xlsx")]),
        );
        assert!(result.is_err());
    }
}
