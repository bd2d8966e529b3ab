//! Client configuration
//!
//! Options can come from a TOML document, a file holding one, or the process
//! environment. Environment values override whatever was loaded before.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};
use crate::feature::FeatureKind;

pub const PROVIDER_ID_ENV: &str = "DATAPROTOCOL_PROVIDER_ID";
pub const FEATURES_ENV: &str = "DATAPROTOCOL_FEATURES";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// Identity the host files every provider under.
    #[serde(default)]
    pub provider_id: String,
    /// Domains to activate. `None` selects [`FeatureKind::DEFAULT`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<FeatureKind>>,
}

impl ClientOptions {
    pub fn new(provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            features: None,
        }
    }

    pub fn with_features(mut self, features: impl IntoIterator<Item = FeatureKind>) -> Self {
        self.features = Some(features.into_iter().collect());
        self
    }

    pub fn from_toml_str(content: &str) -> ClientResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ClientResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_env() -> ClientResult<Self> {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(self) -> ClientResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(provider_id) = lookup(PROVIDER_ID_ENV) {
            self.provider_id = provider_id;
        }
        if let Some(features) = lookup(FEATURES_ENV) {
            self.features = Some(parse_feature_list(&features)?);
        }
        Ok(self)
    }

    /// Features to activate, in activation order.
    pub fn feature_kinds(&self) -> Vec<FeatureKind> {
        match &self.features {
            Some(kinds) => kinds.clone(),
            None => FeatureKind::DEFAULT.to_vec(),
        }
    }
}

/// Parse a comma-separated list of domain tags. Blank entries are skipped.
pub fn parse_feature_list(value: &str) -> ClientResult<Vec<FeatureKind>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::parse::<FeatureKind>)
        .collect::<Result<Vec<_>, ClientError>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn parses_toml_with_feature_subset() {
        let options = ClientOptions::from_toml_str(
            r#"
            provider_id = "pg"
            features = ["connection", "query", "objectExplorer"]
            "#,
        )
        .unwrap();

        assert_eq!(options.provider_id, "pg");
        assert_eq!(
            options.feature_kinds(),
            vec![
                FeatureKind::Connection,
                FeatureKind::Query,
                FeatureKind::ObjectExplorer
            ]
        );
    }

    #[test]
    fn missing_features_selects_default_set() {
        let options = ClientOptions::from_toml_str(r#"provider_id = "MSSQL""#).unwrap();
        assert_eq!(options.features, None);
        assert_eq!(options.feature_kinds(), FeatureKind::DEFAULT.to_vec());
    }

    #[test]
    fn unknown_feature_tag_is_invalid_config() {
        let err = ClientOptions::from_toml_str(
            r#"
            provider_id = "pg"
            features = ["connection", "telemetry"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "provider_id = \"sqlite\"").unwrap();
        writeln!(file, "features = [\"metadata\"]").unwrap();

        let options = ClientOptions::from_file(file.path()).unwrap();
        assert_eq!(options.provider_id, "sqlite");
        assert_eq!(options.feature_kinds(), vec![FeatureKind::Metadata]);
    }

    #[test]
    fn missing_file_is_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientOptions::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn overrides_replace_loaded_values() {
        let env: HashMap<&str, &str> = [
            (PROVIDER_ID_ENV, "pg"),
            (FEATURES_ENV, " connection , taskServices,,"),
        ]
        .into_iter()
        .collect();

        let options = ClientOptions::new("MSSQL")
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(options.provider_id, "pg");
        assert_eq!(
            options.features,
            Some(vec![FeatureKind::Connection, FeatureKind::TaskServices])
        );
    }

    #[test]
    fn absent_overrides_keep_loaded_values() {
        let options = ClientOptions::new("MSSQL")
            .with_features([FeatureKind::Query])
            .with_overrides(|_| None)
            .unwrap();
        assert_eq!(options, ClientOptions::new("MSSQL").with_features([FeatureKind::Query]));
    }

    #[test]
    fn bad_override_is_rejected() {
        let err = ClientOptions::default()
            .with_overrides(|key| (key == FEATURES_ENV).then(|| "query,nope".to_string()))
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }
}
