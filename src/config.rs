mod error;
mod serde;
mod toml;

pub use self::{
    error::ConfigError,
    toml::{parse_element_config, read_element_config},
};
