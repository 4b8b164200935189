//! Generate Command
//!
//! Collect READMEs under a root directory and emit the aggregate
//! architecture document.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::cli::Output;
use crate::collector::TreeCollector;
use crate::config::ConfigLoader;
use crate::render::DocumentRenderer;
use crate::types::Result;

/// Per-invocation options; `None` fields fall back to config, then defaults
pub struct GenerateOptions {
    /// Root directory to aggregate
    pub path: PathBuf,
    /// README filename override
    pub readme: Option<String>,
    /// Include the root directory's own README
    pub include_root: bool,
    /// Document title override
    pub title: Option<String>,
    /// Destination path override; stdout if neither flag nor config set one
    pub out: Option<PathBuf>,
}

pub fn run(opts: GenerateOptions) -> Result<()> {
    let config = ConfigLoader::load()?;

    let readme = opts.readme.unwrap_or(config.document.readme);
    let title = opts.title.unwrap_or(config.document.title);
    let include_root = opts.include_root || config.document.include_root;
    let destination = opts.out.or(config.document.output);

    let (sections, warnings) = TreeCollector::new(&opts.path, &title)
        .readme_name(&readme)
        .include_root(include_root)
        .follow_links(config.traversal.follow_links)
        .collect()?;

    let output = Output::new();
    for warning in &warnings {
        output.warning(&warning.to_string());
    }

    // Render fully before touching the destination: a failed run must not
    // leave partial output behind.
    let text = DocumentRenderer::new().render(&sections);

    match destination {
        Some(path) => {
            fs::write(&path, &text)?;
            info!(
                sections = sections.len(),
                destination = %path.display(),
                "document written"
            );
            output.success(&format!(
                "Wrote {} sections to {}",
                sections.len(),
                path.display()
            ));
        }
        None => {
            info!(sections = sections.len(), "document written to stdout");
            print!("{}", text);
        }
    }

    Ok(())
}
