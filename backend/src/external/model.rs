//! Model artifact loading
//!
//! The regression model is read once at startup. Its artifact carries the
//! training-time column order, which becomes the schema every request is
//! validated against.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use shared::{FeatureSchema, Forecaster, LinearModel};

pub type AqiForecaster = Forecaster<LinearModel>;

/// Load the artifact at `path` and wrap it in a forecaster
pub fn load_forecaster(path: impl AsRef<Path>) -> Result<AqiForecaster> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read model artifact at {}", path.display()))?;
    let model = LinearModel::from_json(&json)
        .with_context(|| format!("failed to parse model artifact {}", path.display()))?;

    let schema = model.schema();
    let expected = FeatureSchema::default();
    if schema != expected {
        // The assembler always emits FEATURE_NAMES order
        bail!(
            "model artifact columns {:?} do not match the assembled feature layout {:?}",
            schema.names(),
            expected.names()
        );
    }

    tracing::info!(
        "loaded model artifact {}; features[{}]: {:?}",
        path.display(),
        model.feature_count(),
        schema.names()
    );

    Ok(Forecaster::new(model, schema))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::FEATURE_NAMES;
    use std::io::Write;

    fn write_artifact(name: &str, body: &serde_json::Value) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.json", name, uuid::Uuid::new_v4()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(body.to_string().as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_artifact() {
        let path = write_artifact(
            "aqi-model",
            &json!({
                "feature_names": FEATURE_NAMES,
                "coefficients": vec![0.1; 13],
                "intercept": 1.0,
            }),
        );
        let forecaster = load_forecaster(&path).unwrap();
        assert_eq!(forecaster.schema(), &FeatureSchema::default());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_reordered_artifact_rejected() {
        let mut names = FEATURE_NAMES.to_vec();
        names.swap(11, 12);
        let path = write_artifact(
            "aqi-model-reordered",
            &json!({
                "feature_names": names,
                "coefficients": vec![0.1; 13],
                "intercept": 1.0,
            }),
        );
        let err = load_forecaster(&path).unwrap_err();
        assert!(err.to_string().contains("do not match"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_artifact() {
        let err = load_forecaster("/nonexistent/aqi_model.json").unwrap_err();
        assert!(err.to_string().contains("failed to read model artifact"));
    }
}
