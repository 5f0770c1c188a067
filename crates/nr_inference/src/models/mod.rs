use std::sync::Arc;

use nr_core::{ArticleRewriter, Error, Result};

use crate::Config;

pub mod dummy;
pub mod gemini;

pub use dummy::DummyModel;
pub use gemini::GeminiModel;

/// Build the rewriter named by `config.model`.
pub fn create_rewriter(config: &Config) -> Result<Arc<dyn ArticleRewriter>> {
    let model: Arc<dyn ArticleRewriter> = match config.model.to_lowercase().as_str() {
        "gemini" => Arc::new(GeminiModel::new(config)?),
        "dummy" => Arc::new(DummyModel::new()),
        other => {
            return Err(Error::Configuration(format!(
                "Unknown model '{}'. Available models: gemini (default), dummy",
                other
            )))
        }
    };
    tracing::info!("🧠 Rewriter initialized (using {})", model.name());
    Ok(model)
}

/// Returns the key, or a configuration error when it is absent or blank.
pub(crate) fn require_api_key(api_key: Option<&str>) -> Result<&str> {
    match api_key.map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(Error::Configuration("Missing Gemini API Key".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rewriter_by_name() {
        let config = Config::default();
        assert_eq!(create_rewriter(&config).unwrap().name(), "Gemini");

        let config = Config {
            model: "Dummy".to_string(),
            ..Config::default()
        };
        assert_eq!(create_rewriter(&config).unwrap().name(), "Dummy");
    }

    #[test]
    fn test_create_rewriter_rejects_unknown_model() {
        let config = Config {
            model: "gpt".to_string(),
            ..Config::default()
        };
        let err = create_rewriter(&config).err().unwrap();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_require_api_key() {
        assert_eq!(require_api_key(Some("abc")).unwrap(), "abc");
        assert!(matches!(require_api_key(None), Err(Error::Configuration(_))));
        assert!(matches!(require_api_key(Some("")), Err(Error::Configuration(_))));
        assert!(matches!(require_api_key(Some("   ")), Err(Error::Configuration(_))));
    }
}
