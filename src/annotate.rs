//! Directory walk and front matter rewriting
//!
//! Visits every regular file under the root in sorted order and prepends a
//! title header to each qualifying file that does not already carry it.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::consts::{FENCE, TITLE_KEY};
use crate::error::AppError;
use crate::matcher::{self, Title};

/// Header block for a derived title: fence, title field, fence, blank line.
fn header_for(title: &Title) -> String {
    format!("{FENCE}\n{TITLE_KEY}: {title}\n{FENCE}\n\n")
}

/// Prepend `header` to the file unless its content already starts with it.
///
/// The already-annotated check is an exact prefix match against the freshly
/// generated header, so a file renamed after annotation accretes a second
/// header in front of the stale one.
fn annotate_file(path: &Path, header: &str) -> Result<(), AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if content.starts_with(header) {
        return Ok(());
    }

    let mut updated = String::with_capacity(header.len() + content.len());
    updated.push_str(header);
    updated.push_str(&content);
    fs::write(path, updated).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Walk the tree under `root` and annotate every qualifying file, printing
/// one progress line per match. Entries are visited in sorted filename order
/// so output is deterministic; symlinked directories are not followed.
pub(crate) fn run(root: &Path) -> Result<(), AppError> {
    if !root.is_dir() {
        return Err(AppError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        // Qualifying prefixes are pure ASCII, so lossy decoding is safe here
        let name = entry.file_name().to_string_lossy();
        if !matcher::qualifies(&name) {
            continue;
        }

        println!("Adding metadata to: {}", entry.path().display());
        let header = header_for(&matcher::derive_title(&name));
        annotate_file(entry.path(), &header)?;
    }

    Ok(())
}
