use std::path::PathBuf;

use crate::config;
use crate::display;
use crate::error::Result;
use crate::renderer::Renderer;

/// Preview a notebook in the terminal
pub fn run(input: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load_or_default(config_path.as_deref())?;

    let value = super::read_notebook_json(&input)?;
    let renderer = Renderer::new(&config);
    let document = renderer.render(&value)?;

    let markdown = display::document_to_markdown(&document, &config);
    if markdown.is_empty() {
        println!("Notebook has no displayable cells.");
        return Ok(());
    }

    display::print_markdown(&markdown);

    Ok(())
}
