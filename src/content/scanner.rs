// SPDX-License-Identifier: MPL-2.0
//! Loads `.mdx` posts from a content directory.

use super::{parse_content_path, ContentEntry, ContentIndex, FrontMatter};
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

const FRONT_MATTER_FENCE: &str = "---";

/// Splits a document into its YAML front matter and body.
///
/// Documents without a leading `---` fence have empty front matter and the
/// whole text as body. An opening fence without a closing one is an error.
pub fn split_front_matter(source: &str) -> Result<(FrontMatter, String)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return Ok((FrontMatter::default(), String::new()));
    };
    if first.trim_end() != FRONT_MATTER_FENCE {
        return Ok((FrontMatter::default(), source.to_string()));
    }

    let mut yaml = String::new();
    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim_end() == FRONT_MATTER_FENCE {
            closed = true;
            break;
        }
        yaml.push_str(line);
    }
    if !closed {
        return Err(Error::Content("unterminated front matter".to_string()));
    }

    let body: String = lines.collect();
    let front_matter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(&yaml)?
    };
    Ok((front_matter, body.trim_start_matches(['\r', '\n']).to_string()))
}

/// Reads every content file under `root` into a [`ContentIndex`].
///
/// Files that cannot be read or parsed are skipped with a warning. A missing
/// root is an error.
pub fn scan_content_dir(root: &Path) -> Result<ContentIndex> {
    let mut files = Vec::new();
    collect_files(root, &mut files)?;

    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        if parse_content_path(&path).is_none() {
            continue;
        }
        match load_entry(&path) {
            Ok(entry) => entries.push(entry),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping unreadable post");
            }
        }
    }

    let index = ContentIndex::build(entries);
    tracing::info!(root = %root.display(), posts = index.len(), "content indexed");
    Ok(index)
}

fn load_entry(path: &Path) -> Result<ContentEntry> {
    let source = fs::read_to_string(path)?;
    let (front_matter, body) = split_front_matter(&source)?;
    Ok(ContentEntry {
        path: path.to_path_buf(),
        front_matter,
        body,
    })
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            collect_files(&path, files)?;
        } else if file_type.is_file() {
            files.push(path);
        }
    }
    Ok(())
}
