#![doc = include_str!("../README.md")]

use clap::Parser;
use colored::Colorize;
use core::error::Error;
use log::LevelFilter;
use std::{path::PathBuf, process::exit};
use tagsmith::{Element, RenderFormat, RenderOptions};
use tokio::io::stdout;

/// Builds an HTML element and writes its markup.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// A tag name.
    tag: Option<String>,
    /// Sets inner text.
    #[arg(short, long)]
    text: Option<String>,
    /// Adds an attribute value in a `name=value` form.
    #[arg(short, long = "attribute", value_parser = parse_attribute)]
    attributes: Vec<(String, String)>,
    /// Adds a flag attribute.
    #[arg(short, long = "flag")]
    flags: Vec<String>,
    /// Reads a base element from a TOML file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Sets an output format.
    #[arg(long, default_value = "html")]
    format: RenderFormat,
    /// Writes a trailing newline.
    #[arg(long)]
    newline: bool,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{}", error.to_string().red());
        exit(1)
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let Arguments {
        tag,
        text,
        attributes,
        flags,
        config,
        format,
        newline,
        verbose,
    } = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let mut element = if let Some(path) = &config {
        tagsmith::read_element_config(path).await?
    } else {
        Element::default()
    };

    if let Some(tag) = &tag {
        element.set_tag(tag);
    }

    if let Some(text) = &text {
        element.set_text(text);
    }

    for (name, value) in &attributes {
        element.add_attribute_value(name, value);
    }

    for flag in &flags {
        element.add_flag(flag);
    }

    tagsmith::render_element(
        &element,
        &RenderOptions::default()
            .set_format(format)
            .set_newline(newline),
        &mut stdout(),
    )
    .await?;

    Ok(())
}

fn parse_attribute(argument: &str) -> Result<(String, String), String> {
    let (name, value) = argument
        .split_once('=')
        .ok_or_else(|| format!("attribute must be in a name=value form: {argument}"))?;

    Ok((name.into(), value.into()))
}
