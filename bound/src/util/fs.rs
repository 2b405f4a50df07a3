use std::{
    fs::File,
    io::BufWriter,
    path::{is_separator, Path, PathBuf},
};

use serde::Serialize;

use crate::BoundError;

/// checks that a user-provided directory path exists, is a directory and has
/// no trailing separator.
///
/// # Arguments
///
/// * `path` - directory path as typed by the user
/// * `description` - name of the argument for error messages
///
/// # Returns
///
/// * the directory as a path
pub fn validate_directory(path: &str, description: &str) -> Result<PathBuf, BoundError> {
    if path.is_empty() {
        return Err(BoundError::InvalidUserInput(format!(
            "no {description} path provided"
        )));
    }
    if path.ends_with(is_separator) {
        return Err(BoundError::InvalidUserInput(format!(
            "provided {description} path '{path}' must not end with a path separator"
        )));
    }
    let dirpath = PathBuf::from(path);
    if !dirpath.is_dir() {
        return Err(BoundError::InvalidUserInput(format!(
            "provided {description} path '{path}' is not a directory"
        )));
    }
    Ok(dirpath)
}

/// true when both paths resolve to the same directory on disk
pub fn same_directory(a: &Path, b: &Path) -> Result<bool, BoundError> {
    let canonical = |p: &Path| {
        p.canonicalize().map_err(|e| BoundError::ReadError {
            path: p.to_path_buf(),
            message: format!("unable to resolve path: {e}"),
        })
    };
    Ok(canonical(a)? == canonical(b)?)
}

/// copies the bytes of `src` to `dst` with the native filesystem primitive,
/// replacing any file already at `dst`.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64, BoundError> {
    std::fs::copy(src, dst).map_err(|e| BoundError::WriteError {
        path: dst.to_path_buf(),
        message: format!("unable to copy from '{}': {e}", src.display()),
    })
}

/// writes a value as pretty-printed JSON
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), BoundError> {
    let file = File::create(path).map_err(|e| BoundError::WriteError {
        path: path.to_path_buf(),
        message: format!("unable to create file: {e}"),
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), value).map_err(|e| {
        BoundError::WriteError {
            path: path.to_path_buf(),
            message: format!("unable to serialize JSON: {e}"),
        }
    })
}
