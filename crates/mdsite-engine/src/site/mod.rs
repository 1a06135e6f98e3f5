//! # Site Assembly
//!
//! Turns a directory of markdown sources into a directory of HTML pages by
//! pushing each converted document through a page template. Only this
//! module and [`crate::io`] touch the filesystem.

use std::path::{Path, PathBuf};

use relative_path::RelativePathBuf;
use thiserror::Error;

use crate::{
    convert::{Conversion, Converter, Rejection},
    io::{self, IoError},
    parsing::{blocks::kinds::Heading, blocks::segment},
};

/// File looked up inside a template directory.
pub const TEMPLATE_FILE: &str = "template.html";
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";
pub const OUTPUT_EXTENSION: &str = "html";

const DEFAULT_TEMPLATE: &str = "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<title>{{ Title }}</title>
</head>
<body>
{{ Content }}
</body>
</html>
";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Template {0} has no Content placeholder")]
    MissingContentPlaceholder(PathBuf),
    #[error("Source path {0} cannot be mapped into the output directory")]
    UnmappablePath(PathBuf),
}

/// A page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Load `template.html` from `template_dir`.
    pub fn load(template_dir: &Path) -> Result<Self, SiteError> {
        let path = template_dir.join(TEMPLATE_FILE);
        let source = io::read_file(&path)?;
        if !source.contains(CONTENT_PLACEHOLDER) {
            return Err(SiteError::MissingContentPlaceholder(path));
        }
        Ok(Self { source })
    }

    /// Use the given template dir, or the built-in page when there is none.
    pub fn load_or_default(template_dir: Option<&Path>) -> Result<Self, SiteError> {
        match template_dir {
            Some(dir) => Self::load(dir),
            None => Ok(Self::default()),
        }
    }

    /// Fills both placeholders. Only the template itself is searched, so a
    /// title or body that contains placeholder text is inserted as is.
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .split(CONTENT_PLACEHOLDER)
            .map(|part| part.replace(TITLE_PLACEHOLDER, title))
            .collect::<Vec<_>>()
            .join(content)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

/// Text of the first level-1 heading block, if any.
pub fn extract_title(document: &str) -> Option<String> {
    segment(document)
        .iter()
        .find(|block| Heading::level(block) == Some(1))
        .map(|block| Heading::content(block).trim().to_string())
}

/// What a site build produced.
#[derive(Debug, Default)]
pub struct SiteReport {
    /// Output pages, in source order.
    pub written: Vec<PathBuf>,
    /// Sources refused in strict mode, with the reason.
    pub rejected: Vec<(PathBuf, Rejection)>,
}

/// Converts every markdown file under `source_dir` into a page under
/// `dest_dir`, keeping the relative layout and swapping `.md` for `.html`.
///
/// In strict mode rejected documents are skipped and reported instead of
/// failing the build.
pub fn build_site(
    source_dir: &Path,
    dest_dir: &Path,
    template: &Template,
    converter: &Converter,
    strict: bool,
) -> Result<SiteReport, SiteError> {
    let mut report = SiteReport::default();

    for source in io::scan_markdown_files(source_dir)? {
        let document = io::read_file(&source)?;

        let html = if strict {
            match converter.convert_strict(&document) {
                Conversion::Parsed(html) => html,
                Conversion::Rejected(reason) => {
                    log::warn!("Skipping {}: {reason}", source.display());
                    report.rejected.push((source, reason));
                    continue;
                }
            }
        } else {
            converter.convert(&document)
        };

        let title = extract_title(&document).unwrap_or_else(|| file_stem(&source));
        let dest = output_path(source_dir, dest_dir, &source)?;
        io::write_file(&dest, &template.render(&title, &html))?;
        log::info!("Wrote {} -> {}", source.display(), dest.display());
        report.written.push(dest);
    }

    Ok(report)
}

fn output_path(source_dir: &Path, dest_dir: &Path, source: &Path) -> Result<PathBuf, SiteError> {
    let unmappable = || SiteError::UnmappablePath(source.to_path_buf());
    let relative = source.strip_prefix(source_dir).map_err(|_| unmappable())?;
    let relative = RelativePathBuf::from_path(relative).map_err(|_| unmappable())?;
    Ok(relative.with_extension(OUTPUT_EXTENSION).to_path(dest_dir))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}
