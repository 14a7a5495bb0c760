#![doc = include_str!("../README.md")]

extern crate alloc;

mod attribute;
mod config;
mod element;
mod error;
mod escape;
mod render;

pub use self::{
    attribute::{Attribute, AttributeValue},
    config::{ConfigError, parse_element_config, read_element_config},
    element::{Element, SELF_CLOSING_TAGS},
    error::Error,
    escape::escape_attribute_value,
    render::{RenderFormat, RenderOptions, render_element},
};
