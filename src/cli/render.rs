use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{self, Config};
use crate::error::{NbviewError, Result};
use crate::models::Notebook;
use crate::page::PageWriter;
use crate::renderer::Renderer;

/// Render notebooks to HTML pages
pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    to_stdout: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = config::load_or_default(config_path.as_deref())?;

    if input.is_dir() {
        if to_stdout {
            return Err(NbviewError::Input(
                "--stdout is only supported for a single notebook".to_string(),
            ));
        }
        render_directory(&input, output.as_deref(), &config)
    } else {
        render_file(&input, output, to_stdout, &config)
    }
}

/// Render a single notebook file
fn render_file(
    input: &Path,
    output: Option<PathBuf>,
    to_stdout: bool,
    config: &Config,
) -> Result<()> {
    let page = render_notebook(input, config)?;

    if to_stdout {
        print!("{}", page);
        return Ok(());
    }

    let output_path = output.unwrap_or_else(|| input.with_extension("html"));
    write_page(&page, &output_path)?;
    println!("Notebook written to: {}", output_path.display());

    Ok(())
}

/// Render every notebook under a directory, continuing past bad files
fn render_directory(input: &Path, output: Option<&Path>, config: &Config) -> Result<()> {
    let mut rendered = 0usize;
    let mut failed = 0usize;

    for entry in WalkDir::new(input)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(|entry| entry.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() || !super::is_notebook_path(path) {
            continue;
        }

        let output_path = batch_output_path(input, path, output);
        let result =
            render_notebook(path, config).and_then(|page| write_page(&page, &output_path));

        match result {
            Ok(()) => {
                rendered += 1;
                println!("Rendered: {}", output_path.display());
            }
            Err(e) => {
                failed += 1;
                eprintln!("Warning: skipping {}: {}", path.display(), e);
            }
        }
    }

    if rendered == 0 && failed == 0 {
        println!("No notebooks found in: {}", input.display());
    } else {
        println!("Rendered {} of {} notebooks", rendered, rendered + failed);
    }

    Ok(())
}

/// Render one notebook file to a full HTML page
fn render_notebook(path: &Path, config: &Config) -> Result<String> {
    let value = super::read_notebook_json(path)?;
    let notebook = Notebook::from_value(&value)?;

    let renderer = Renderer::new(config);
    let document = renderer.render_notebook(&notebook);

    let writer = PageWriter::new(config);
    Ok(writer.write_page(&document, &page_title(config, &notebook, path)))
}

/// Page title precedence: config, then notebook metadata, then file stem
fn page_title(config: &Config, notebook: &Notebook, path: &Path) -> String {
    if let Some(title) = &config.page.title {
        return title.clone();
    }
    if let Some(title) = &notebook.title {
        return title.clone();
    }
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("notebook")
        .to_string()
}

/// Skip hidden files and directories, but never the walk root itself
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

/// Output path for one notebook in a batch run
fn batch_output_path(root: &Path, path: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(dir) => {
            let relative = path.strip_prefix(root).unwrap_or(path);
            dir.join(relative).with_extension("html")
        }
        None => path.with_extension("html"),
    }
}

fn write_page(page: &str, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output_path, page)?;
    Ok(())
}
