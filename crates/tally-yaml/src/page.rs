//! Page manifest types.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;
use std::collections::HashSet;
use std::path::Path;

/// A page manifest loaded from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page name
    pub name: String,
    /// Human-readable title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Widgets in mount order
    #[serde(default)]
    pub widgets: Vec<WidgetSpec>,
}

/// One widget entry of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSpec {
    /// Unique id within the page; becomes the container's `id` attribute
    pub id: String,
    /// Registered widget type (`counter`, ...)
    #[serde(rename = "type")]
    pub widget_type: String,
    /// Widget properties, interpreted by the widget
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub props: Value,
}

impl WidgetSpec {
    /// Create a spec without properties.
    #[must_use]
    pub fn new(id: impl Into<String>, widget_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            widget_type: widget_type.into(),
            props: Value::Null,
        }
    }

    /// Set the properties.
    #[must_use]
    pub fn with_props(mut self, props: Value) -> Self {
        self.props = props;
        self
    }
}

impl Page {
    /// Parse a page from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Read, parse and validate a page file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the YAML is invalid, or
    /// validation fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let content = std::fs::read_to_string(path)?;
        let page = Self::from_yaml(&content)?;
        page.validate()?;
        Ok(page)
    }

    /// Serialize the page to a YAML string.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check required fields and id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingField`], [`ParseError::Validation`] for ids
    /// that could not serve as an element id, or [`ParseError::DuplicateId`].
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.name.trim().is_empty() {
            return Err(ParseError::MissingField("name".to_string()));
        }

        let mut seen = HashSet::new();
        for (index, widget) in self.widgets.iter().enumerate() {
            if widget.id.trim().is_empty() {
                return Err(ParseError::MissingField(format!("widgets[{index}].id")));
            }
            if widget.id.chars().any(char::is_whitespace) {
                return Err(ParseError::Validation(format!(
                    "widget id '{}' contains whitespace",
                    widget.id
                )));
            }
            if widget.widget_type.trim().is_empty() {
                return Err(ParseError::MissingField(format!("widgets[{index}].type")));
            }
            if !seen.insert(widget.id.as_str()) {
                return Err(ParseError::DuplicateId(widget.id.clone()));
            }
        }
        Ok(())
    }

    /// Look up a widget entry by id.
    #[must_use]
    pub fn widget(&self, id: &str) -> Option<&WidgetSpec> {
        self.widgets.iter().find(|w| w.id == id)
    }
}
