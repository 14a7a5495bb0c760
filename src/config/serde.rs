use crate::{Attribute, AttributeValue, Element};
use log::debug;
use serde::{Deserialize, Serialize};

/// A serializable element configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializableElement {
    tag: Option<String>,
    text: Option<String>,
    #[serde(default)]
    attributes: Vec<AttributeConfig>,
    #[serde(default)]
    children: Vec<SerializableElement>,
}

impl SerializableElement {
    /// Compiles the configuration into an element.
    ///
    /// Children are generated and injected after text in order.
    pub fn compile(self) -> Element {
        let mut element = Element::default();

        if let Some(tag) = &self.tag {
            element.set_tag(tag);
        }

        if let Some(text) = &self.text {
            element.set_text(text);
        }

        for attribute in self.attributes {
            element.insert_attribute(attribute.into());
        }

        debug!(
            "compiled {} element with {} children",
            element.tag(),
            self.children.len()
        );

        for child in self.children {
            element.inject(&child.compile());
        }

        element
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum AttributeConfig {
    Named {
        name: String,
        value: Option<ValueConfig>,
    },
    Flag {
        flag: ValueConfig,
    },
}

impl From<AttributeConfig> for Attribute {
    fn from(config: AttributeConfig) -> Self {
        match config {
            AttributeConfig::Named { name, value } => Self::named(
                &name,
                value.map(AttributeValue::from).unwrap_or_default(),
            ),
            AttributeConfig::Flag { flag } => Self::flag(flag),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum ValueConfig {
    Single(String),
    Multiple(Vec<String>),
}

impl From<ValueConfig> for AttributeValue {
    fn from(config: ValueConfig) -> Self {
        match config {
            ValueConfig::Single(value) => Self::Single(value),
            ValueConfig::Multiple(values) => Self::Multiple(values),
        }
    }
}
