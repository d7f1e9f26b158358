//! Input and output path handling for the command line.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Usage and file-open errors
#[derive(Error, Debug)]
pub enum PathError {
    #[error("First argument must have .{expected} extension: {path}")]
    BadExtension { path: PathBuf, expected: String },

    #[error("Can not open: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Check that `input` carries the expected extension (without the dot)
pub fn check_extension(input: &Path, expected: &str) -> Result<(), PathError> {
    match input.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext == expected => Ok(()),
        _ => Err(PathError::BadExtension {
            path: input.to_path_buf(),
            expected: expected.to_string(),
        }),
    }
}

/// Output path to use: the explicit one, or `input` with its extension replaced
pub fn resolve_output_path(input: &Path, output: Option<&Path>, extension: &str) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension(extension),
    }
}

/// Open the input for buffered reading
pub fn open_input(path: &Path) -> Result<std::io::BufReader<std::fs::File>, PathError> {
    std::fs::File::open(path)
        .map(std::io::BufReader::new)
        .map_err(|source| PathError::Open {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_extension() {
        assert!(check_extension(Path::new("refs.bib"), "bib").is_ok());
        assert!(check_extension(Path::new("dir/refs.bib"), "bib").is_ok());
        assert!(check_extension(Path::new("refs.txt"), "bib").is_err());
        assert!(check_extension(Path::new("refs"), "bib").is_err());
        assert!(check_extension(Path::new("refs.bib.bak"), "bib").is_err());
    }

    #[test]
    fn test_resolve_output_path_default() {
        assert_eq!(
            resolve_output_path(Path::new("pubs/refs.bib"), None, "html"),
            PathBuf::from("pubs/refs.html")
        );
    }

    #[test]
    fn test_resolve_output_path_explicit() {
        assert_eq!(
            resolve_output_path(Path::new("refs.bib"), Some(Path::new("out/list.htm")), "html"),
            PathBuf::from("out/list.htm")
        );
    }

    #[test]
    fn test_open_missing_input() {
        let err = open_input(Path::new("/nonexistent/refs.bib")).unwrap_err();
        assert!(err.to_string().starts_with("Can not open:"));
    }
}
