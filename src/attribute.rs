use crate::escape::escape_attribute_value;
use core::fmt::{self, Display, Formatter};
use itertools::Itertools;
use serde::Serialize;

const TRIMMED_CHARACTERS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// An attribute entry of an element.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// An attribute rendered as `name="values"`.
    Named {
        /// A name.
        name: String,
        /// Value tokens joined by spaces on rendering.
        values: Vec<String>,
    },
    /// A value-less attribute rendered bare, such as `selected`.
    Flag {
        /// Tokens joined by spaces on rendering.
        values: Vec<String>,
    },
}

impl Attribute {
    /// Creates a named attribute.
    pub fn named(name: &str, value: impl Into<AttributeValue>) -> Self {
        Self::Named {
            name: name.into(),
            values: value.into().into_values(),
        }
    }

    /// Creates a flag attribute.
    pub fn flag(value: impl Into<AttributeValue>) -> Self {
        Self::Flag {
            values: value.into().into_values(),
        }
    }

    /// Returns a name if the attribute is named.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named { name, .. } => Some(name),
            Self::Flag { .. } => None,
        }
    }

    /// Returns value tokens.
    pub fn values(&self) -> &[String] {
        match self {
            Self::Named { values, .. } | Self::Flag { values } => values,
        }
    }
}

impl Display for Attribute {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, values } => write!(
                formatter,
                "{name}=\"{}\"",
                escape_attribute_value(
                    values
                        .iter()
                        .join(" ")
                        .trim_matches(TRIMMED_CHARACTERS)
                )
            ),
            Self::Flag { values } => write!(formatter, "{}", values.iter().join(" ")),
        }
    }
}

/// An attribute value given by a caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AttributeValue {
    /// A single token.
    Single(String),
    /// Multiple tokens.
    Multiple(Vec<String>),
}

impl AttributeValue {
    /// Converts the value into a list of tokens.
    pub fn into_values(self) -> Vec<String> {
        match self {
            Self::Single(value) => vec![value],
            Self::Multiple(values) => values,
        }
    }
}

impl Default for AttributeValue {
    fn default() -> Self {
        Self::Multiple(vec![])
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Single(value.into())
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multiple(values.into_iter().map(ToOwned::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for AttributeValue {
    fn from(values: [&str; N]) -> Self {
        Self::Multiple(values.into_iter().map(ToOwned::to_owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_single_value() {
        assert_eq!(AttributeValue::from("center").into_values(), ["center"]);
    }

    #[test]
    fn normalize_multiple_values() {
        assert_eq!(
            AttributeValue::from(["center", "text-success"]).into_values(),
            ["center", "text-success"]
        );
    }

    #[test]
    fn normalize_default_value() {
        assert!(AttributeValue::default().into_values().is_empty());
    }

    #[test]
    fn get_name() {
        assert_eq!(Attribute::named("class", "center").name(), Some("class"));
        assert_eq!(Attribute::flag("selected").name(), None);
    }

    #[test]
    fn render_named() {
        assert_eq!(
            Attribute::named("class", ["center", "text-success"]).to_string(),
            r#"class="center text-success""#
        );
    }

    #[test]
    fn render_named_without_values() {
        assert_eq!(
            Attribute::named("class", AttributeValue::default()).to_string(),
            r#"class="""#
        );
    }

    #[test]
    fn render_named_with_trimmed_value() {
        assert_eq!(
            Attribute::named("title", ["", " hello", "world "]).to_string(),
            r#"title="hello world""#
        );
    }

    #[test]
    fn render_named_with_control_characters_trimmed() {
        assert_eq!(
            Attribute::named("title", "\t\0x\x0B\r\n").to_string(),
            r#"title="x""#
        );
    }

    #[test]
    fn render_named_with_non_breaking_spaces_kept() {
        assert_eq!(
            Attribute::named("title", "\u{a0}x\u{a0}").to_string(),
            "title=\"\u{a0}x\u{a0}\""
        );
    }

    #[test]
    fn render_named_with_escaped_value() {
        assert_eq!(
            Attribute::named("title", r#"a "quoted" <value>"#).to_string(),
            r#"title="a &quot;quoted&quot; &lt;value&gt;""#
        );
    }

    #[test]
    fn render_flag() {
        assert_eq!(Attribute::flag("selected").to_string(), "selected");
    }

    #[test]
    fn render_flag_without_escape() {
        assert_eq!(
            Attribute::flag(["disabled", "data-x=\"1\""]).to_string(),
            r#"disabled data-x="1""#
        );
    }
}
