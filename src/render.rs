mod options;

pub use self::options::{RenderFormat, RenderOptions};
use crate::{element::Element, error::Error};
use log::trace;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Renders an element.
pub async fn render_element(
    element: &Element,
    options: &RenderOptions,
    writer: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    trace!("rendering {} element as {:?}", element.tag(), options.format());

    let string = match options.format() {
        RenderFormat::Html => element.generate(),
        RenderFormat::Json => serde_json::to_string(element)?,
    };

    writer.write_all(string.as_bytes()).await?;

    if options.newline() {
        writer.write_all(b"\n").await?;
    }

    writer.flush().await?;

    Ok(())
}
