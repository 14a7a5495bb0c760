use super::{ConfigError, serde::SerializableElement};
use crate::{Element, error::Error};
use log::debug;
use std::path::Path;
use tokio::fs::read_to_string;

/// Parses an element configuration in TOML.
pub fn parse_element_config(source: &str) -> Result<Element, ConfigError> {
    Ok(toml::from_str::<SerializableElement>(source)?.compile())
}

/// Reads an element configuration file in TOML.
pub async fn read_element_config(path: &Path) -> Result<Element, Error> {
    debug!("reading element configuration at {}", path.display());

    let source = read_to_string(path).await.map_err(ConfigError::from)?;

    Ok(parse_element_config(&source)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;
    use tokio::fs::write;

    #[test]
    fn parse_empty() {
        assert_eq!(parse_element_config("").unwrap(), Element::default());
    }

    #[test]
    fn parse_element() {
        let element = parse_element_config(indoc! {r#"
            tag = "p"
            text = "test"
            attributes = [
                { name = "class", value = ["center", "text-success"] },
                { name = "data-type", value = "paragraph" },
                { flag = "hidden" },
            ]
        "#})
        .unwrap();

        assert_eq!(
            element.generate(),
            r#"<p class="center text-success" data-type="paragraph" hidden>test</p>"#
        );
    }

    #[test]
    fn parse_children() {
        let element = parse_element_config(indoc! {r#"
            tag = "select"
            attributes = [{ name = "name", value = "something" }]

            [[children]]
            tag = "option"
            text = "option 1"
            attributes = [{ name = "value", value = "1" }]

            [[children]]
            tag = "option"
            text = "option 2"
            attributes = [{ name = "value", value = "2" }, { flag = "selected" }]
        "#})
        .unwrap();

        assert_eq!(
            element.generate(),
            concat!(
                r#"<select name="something">"#,
                r#"<option value="1">option 1</option>"#,
                r#"<option value="2" selected>option 2</option>"#,
                "</select>"
            )
        );
    }

    #[test]
    fn parse_empty_tag() {
        assert_eq!(
            parse_element_config(r#"tag = """#).unwrap().generate(),
            ""
        );
    }

    #[test]
    fn fail_to_parse_unknown_field() {
        assert!(matches!(
            parse_element_config(r#"name = "p""#),
            Err(ConfigError::TomlDeserialize(_))
        ));
    }

    #[test]
    fn fail_to_parse_invalid_attribute() {
        assert!(matches!(
            parse_element_config(r#"attributes = [{ value = "1" }]"#),
            Err(ConfigError::TomlDeserialize(_))
        ));
    }

    #[tokio::test]
    async fn read_element() {
        let directory = tempdir().unwrap();
        let file = directory.path().join("element.toml");

        write(
            &file,
            indoc! {r#"
                tag = "br"
                text = "sometext"
            "#},
        )
        .await
        .unwrap();

        assert_eq!(
            read_element_config(&file).await.unwrap().generate(),
            "<br>sometext"
        );
    }

    #[tokio::test]
    async fn fail_to_read_missing_file() {
        let directory = tempdir().unwrap();

        assert!(matches!(
            read_element_config(&directory.path().join("missing.toml")).await,
            Err(Error::Config(ConfigError::Io(_)))
        ));
    }

    #[tokio::test]
    async fn fail_to_read_invalid_file() {
        let directory = tempdir().unwrap();
        let file = directory.path().join("element.toml");

        write(&file, "tag = ").await.unwrap();

        assert!(matches!(
            read_element_config(&file).await,
            Err(Error::Config(ConfigError::TomlDeserialize(_)))
        ));
    }
}
