use crate::attribute::{Attribute, AttributeValue};
use core::fmt::{self, Display, Formatter};
use itertools::Itertools;
use log::trace;
use serde::Serialize;
use std::io::{self, Write};

/// Tags that are never closed.
pub const SELF_CLOSING_TAGS: &[&str] = &["input", "img", "hr", "br", "meta", "link"];

const DEFAULT_TAG: &str = "p";

/// An HTML element.
///
/// An element owns a tag name, attribute entries in insertion order, and inner
/// text. Its markup is derived from the current state on every call of
/// [`Element::generate`].
///
/// Inner text is never escaped while attribute values always are.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Element {
    tag: String,
    attributes: Vec<Attribute>,
    text: String,
}

impl Element {
    /// Creates an element.
    pub fn new(tag: &str, text: &str, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        let mut element = Self {
            tag: Default::default(),
            attributes: vec![],
            text: text.into(),
        };

        element.set_tag(tag);

        for attribute in attributes {
            element.insert_attribute(attribute);
        }

        element
    }

    /// Returns a tag name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Sets a tag name.
    pub fn set_tag(&mut self, tag: &str) -> &mut Self {
        self.tag = tag.to_lowercase();
        self
    }

    /// Returns attributes.
    #[allow(clippy::missing_const_for_fn)]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns values of a named attribute.
    ///
    /// It returns an empty slice if the attribute is absent.
    pub fn attribute(&self, name: &str) -> &[String] {
        self.position(name)
            .map(|index| self.attributes[index].values())
            .unwrap_or_default()
    }

    /// Returns flag attributes.
    pub fn flags(&self) -> impl Iterator<Item = &[String]> {
        self.attributes.iter().filter_map(|attribute| match attribute {
            Attribute::Flag { values } => Some(values.as_slice()),
            Attribute::Named { .. } => None,
        })
    }

    /// Sets values of a named attribute.
    ///
    /// An existing attribute keeps its position while a new one is appended.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<AttributeValue>) -> &mut Self {
        let values = value.into().into_values();

        trace!("setting attribute {name} to {values:?}");

        if let Some(index) = self.position(name) {
            self.attributes[index] = Attribute::Named {
                name: name.into(),
                values,
            };
        } else {
            self.attributes.push(Attribute::Named {
                name: name.into(),
                values,
            });
        }

        self
    }

    /// Sets values of named attributes one by one.
    ///
    /// Attributes not mentioned are kept.
    pub fn set_attributes<K: AsRef<str>, V: Into<AttributeValue>>(
        &mut self,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> &mut Self {
        for (name, value) in attributes {
            self.set_attribute(name.as_ref(), value);
        }

        self
    }

    /// Inserts an attribute entry.
    ///
    /// A named attribute replaces an existing one of the same name. A flag
    /// attribute is appended unless the same flag is present already.
    pub fn insert_attribute(&mut self, attribute: Attribute) -> &mut Self {
        match attribute {
            Attribute::Named { name, values } => self.set_attribute(&name, values),
            Attribute::Flag { values } => {
                if !self.flags().any(|flag| flag == values.as_slice()) {
                    trace!("adding flag {values:?}");
                    self.attributes.push(Attribute::Flag { values });
                }

                self
            }
        }
    }

    /// Adds a value to a named attribute if it is not present yet.
    pub fn add_attribute_value(&mut self, name: &str, value: &str) -> &mut Self {
        let mut values = self.attribute(name).to_vec();

        if !values.iter().any(|other| other == value) {
            values.push(value.into());
        }

        self.set_attribute(name, values)
    }

    /// Removes a named attribute.
    pub fn remove_attribute(&mut self, name: &str) -> &mut Self {
        if let Some(index) = self.position(name) {
            trace!("removing attribute {name}");
            self.attributes.remove(index);
        }

        self
    }

    /// Removes all attributes including flags.
    pub fn remove_attributes(&mut self) -> &mut Self {
        self.attributes.clear();
        self
    }

    /// Removes a value from a named attribute.
    ///
    /// The attribute is kept even if it has no value left.
    pub fn remove_attribute_value(&mut self, name: &str, value: &str) -> &mut Self {
        if self.position(name).is_none() {
            return self;
        }

        let values = self
            .attribute(name)
            .iter()
            .filter(|other| *other != value)
            .cloned()
            .collect::<Vec<_>>();

        self.set_attribute(name, values)
    }

    /// Adds a flag attribute if it is not present yet.
    pub fn add_flag(&mut self, flag: &str) -> &mut Self {
        self.insert_attribute(Attribute::flag(flag))
    }

    /// Removes flag attributes whose tokens are equal to the given ones.
    pub fn remove_flag(&mut self, flag: impl Into<AttributeValue>) -> &mut Self {
        let flag = flag.into().into_values();

        self.attributes.retain(|attribute| match attribute {
            Attribute::Flag { values } => *values != flag,
            Attribute::Named { .. } => true,
        });
        self
    }

    /// Returns inner text.
    #[allow(clippy::missing_const_for_fn)]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sets inner text.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text = text.into();
        self
    }

    /// Appends inner text.
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Appends markup of another element to inner text.
    ///
    /// Later changes to the other element are not reflected.
    pub fn inject(&mut self, other: &Self) -> &mut Self {
        trace!("injecting {} element into {} element", other.tag, self.tag);
        self.add_text(&other.generate())
    }

    /// Generates markup.
    pub fn generate(&self) -> String {
        self.to_string()
    }

    /// Writes markup into standard output.
    pub fn output(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }

    /// Writes markup into a writer.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writer.write_all(self.generate().as_bytes())?;
        writer.flush()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.attributes
            .iter()
            .position(|attribute| attribute.name() == Some(name))
    }

    fn is_self_closing(&self) -> bool {
        SELF_CLOSING_TAGS.contains(&self.tag.as_str())
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new(DEFAULT_TAG, "", [])
    }
}

impl Display for Element {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        if self.tag.is_empty() {
            return Ok(());
        }

        let attributes = self.attributes.iter().join(" ");

        write!(formatter, "<{}", self.tag)?;

        if !attributes.is_empty() {
            write!(formatter, " {attributes}")?;
        }

        write!(formatter, ">{}", self.text)?;

        // Text still follows the opening tag of a self-closing element.
        if !self.is_self_closing() {
            write!(formatter, "</{}>", self.tag)?;
        }

        Ok(())
    }
}
