use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the pattern components themselves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("No product built: call make_pizza before retrieving a pizza")]
    NotBuilt,

    #[error("Document store is full (capacity: {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("No document named '{name}' has been created")]
    UnknownDocument { name: String },

    #[error("Shape ids exhausted: the counter stopped at {last}")]
    IdsExhausted { last: u64 },
}

impl PatternError {
    pub fn unknown_document(name: impl Into<String>) -> Self {
        Self::UnknownDocument { name: name.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Anything that can stop the demo driver.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to render transcript as JSON: {0}")]
    Render(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_built_display() {
        let display = format!("{}", PatternError::NotBuilt);
        assert!(display.contains("No product built"));
    }

    #[test]
    fn test_capacity_exceeded_display() {
        let display = PatternError::CapacityExceeded { capacity: 10 }.to_string();
        assert!(display.contains("capacity: 10"));
    }

    #[test]
    fn test_ids_exhausted_display() {
        let display = PatternError::IdsExhausted { last: u64::MAX }.to_string();
        assert!(display.contains(&u64::MAX.to_string()));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = ConfigError::invalid("documents", "names must not be empty");
        let display = error.to_string();
        assert!(display.contains("'documents'"));
        assert!(display.contains("must not be empty"));
    }

    #[test]
    fn test_demo_error_wraps_pattern_error() {
        let error: DemoError = PatternError::unknown_document("baz").into();
        assert!(matches!(error, DemoError::Pattern(PatternError::UnknownDocument { .. })));
        assert!(error.to_string().contains("'baz'"));
    }
}
