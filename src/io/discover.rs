use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, ToolError};
use crate::model::InputFile;

/// Lists the regular files in `directory` whose name ends with `.{extension}`.
///
/// Matching is a case-sensitive suffix test and the result follows the order
/// in which the directory is enumerated. An empty result is an error.
pub fn find_input_files(directory: &Path, extension: &str) -> Result<Vec<InputFile>> {
    if !directory.is_dir() {
        return Err(ToolError::MissingDirectory(directory.to_path_buf()));
    }

    let entries = fs::read_dir(directory).map_err(|source| ToolError::ReadDirectory {
        path: directory.to_path_buf(),
        source,
    })?;

    let suffix = format!(".{extension}");
    let mut files = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|source| ToolError::ReadDirectory {
            path: directory.to_path_buf(),
            source,
        })?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.ends_with(&suffix) {
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            trace!(path = %path.display(), "skipping non-file entry");
            continue;
        }

        files.push(InputFile {
            base_name: base_name(&file_name).to_string(),
            path,
        });
    }

    if files.is_empty() {
        return Err(ToolError::NoMatchingFiles {
            extension: extension.to_string(),
        });
    }

    debug!(file_count = files.len(), %suffix, "discovered input files");
    Ok(files)
}

/// Strips the last extension from a file name. Names that start with a dot and
/// contain no other dot are returned unchanged.
fn base_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(index) => {
            let stem = &file_name[..index];
            if stem.chars().all(|c| c == '.') {
                file_name
            } else {
                stem
            }
        }
    }
}
