//! Static site generation: copies static assets and renders every markdown
//! page in a content tree through an HTML template.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::{ConfigError, MarkdownConfig, SiteConfig};
use crate::error::Error;
use crate::page::render_page;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to generate page from {}: {source}", path.display())]
    Page {
        path: PathBuf,
        #[source]
        source: Error,
    },
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn require_exists(path: &Path) -> Result<(), SiteError> {
    if path.exists() {
        Ok(())
    } else {
        Err(SiteError::NotFound(path.to_path_buf()))
    }
}

/// Build the whole site described by `site`. Returns the number of pages
/// generated.
pub fn build(site: &SiteConfig, markdown: &MarkdownConfig) -> Result<usize, SiteError> {
    require_exists(&site.content_dir)?;
    require_exists(&site.template)?;

    if site.clean && site.output_dir.exists() {
        debug!("Removing {}", site.output_dir.display());
        fs::remove_dir_all(&site.output_dir).map_err(io_error(&site.output_dir))?;
    }

    if site.static_dir.exists() {
        copy_static(&site.static_dir, &site.output_dir)?;
    } else {
        debug!("No static directory at {}", site.static_dir.display());
        fs::create_dir_all(&site.output_dir).map_err(io_error(&site.output_dir))?;
    }

    generate_pages_recursive(&site.content_dir, &site.template, &site.output_dir, markdown)
}

/// Recursively copy `src` into `dest`, creating directories as needed.
/// Returns the number of files copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    require_exists(src)?;

    let mut copied = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_error(&target))?;
        } else {
            info!("Copying {} to {}", entry.path().display(), target.display());
            fs::copy(entry.path(), &target).map_err(io_error(&target))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Render one markdown file through a template and write the result.
///
/// The page is rendered fully in memory first; nothing is written on error.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    config: &MarkdownConfig,
) -> Result<(), SiteError> {
    info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );
    require_exists(from)?;
    require_exists(template_path)?;

    let markdown = fs::read_to_string(from).map_err(io_error(from))?;
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;

    let page = render_page(&markdown, &template, config).map_err(|source| SiteError::Page {
        path: from.to_path_buf(),
        source,
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest, page).map_err(io_error(dest))
}

/// Generate an `.html` page for every `.md` file under `content_dir`,
/// mirroring the directory layout under `dest_dir`. Returns the number of
/// pages generated.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    config: &MarkdownConfig,
) -> Result<usize, SiteError> {
    require_exists(content_dir)?;
    require_exists(template_path)?;

    let mut generated = 0;
    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(content_dir) else {
            continue;
        };
        let target = dest_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_error(&target))?;
        } else if entry.path().extension().is_some_and(|ext| ext == "md") {
            generate_page(
                entry.path(),
                template_path,
                &target.with_extension("html"),
                config,
            )?;
            generated += 1;
        } else {
            warn!("Skipping non-markdown file {}", entry.path().display());
        }
    }

    Ok(generated)
}
