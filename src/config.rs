use crate::abstract_factory::{ShapeFamily, ShapeRole};
use crate::builder::Recipe;
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Knobs for the demo driver. An empty file reproduces the classic run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub shape_family: ShapeFamily,
    pub id_seed: u64,
    pub documents: Vec<String>,
    pub shape_plan: Vec<ShapeRole>,
    pub document_capacity: Option<usize>,
    pub output: OutputFormat,
    pub color: bool,
    pub recipes: Vec<Recipe>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            shape_family: ShapeFamily::Simple,
            id_seed: 0,
            documents: vec!["foo".to_string(), "bar".to_string()],
            shape_plan: vec![ShapeRole::Curved, ShapeRole::Straight, ShapeRole::Curved],
            document_capacity: None,
            output: OutputFormat::Text,
            color: true,
            recipes: Vec::new(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(position) = self.documents.iter().position(|name| name.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "documents",
                format!("entry {position} is empty"),
            ));
        }

        for recipe in &self.recipes {
            let missing = [
                ("dough", &recipe.dough),
                ("sauce", &recipe.sauce),
                ("topping", &recipe.topping),
            ]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty());

            if let Some((part, _)) = missing {
                return Err(ConfigError::invalid(
                    "recipes",
                    format!("recipe '{}' has no {part}", recipe.name),
                ));
            }
        }

        if self.id_seed.checked_add(self.shape_plan.len() as u64).is_none() {
            return Err(ConfigError::invalid(
                "id_seed",
                format!("{} leaves no room for {} shapes", self.id_seed, self.shape_plan.len()),
            ));
        }

        if let Some(capacity) = self.document_capacity {
            if capacity == 0 {
                return Err(ConfigError::invalid(
                    "document_capacity",
                    "must be at least 1 when set",
                ));
            }
            if capacity < self.documents.len() {
                return Err(ConfigError::invalid(
                    "document_capacity",
                    format!(
                        "{capacity} is too small for the {} configured documents",
                        self.documents.len()
                    ),
                ));
            }
        }

        Ok(())
    }
}
