use crate::shared::error::DepGraphError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a local input file (index or config): 100 MB
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum size of a decompressed package index: 512 MB
///
/// A full `main` component index of a large distribution is well below this.
pub const MAX_INDEX_SIZE: u64 = 512 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(DepGraphError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} operations on symbolic links are not allowed",
                operation
            ),
            hint: "Point the configuration at the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that a path is a regular file within the size limit
///
/// Combines the existence, symlink, file type and size checks that every
/// local input goes through before it is read.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "package index", "config file")
///
/// # Returns
/// The file size in bytes
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        return Err(DepGraphError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("The {} is a symbolic link", file_description),
            hint: "Point the configuration at the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;
    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(DepGraphError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes",
                file_size, max_size
            ),
            hint: "Use a smaller index or split the repository".to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Packages");
        fs::write(&file_path, "Package: A\n").unwrap();

        assert!(validate_not_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/Packages");
        assert!(validate_not_symlink(&path, "read").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("Packages");
        let link = temp_dir.path().join("Packages.link");
        fs::write(&target, "Package: A\n").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_not_symlink(&link, "read").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepGraphError>(),
            Some(DepGraphError::SecurityError { .. })
        ));
    }

    #[test]
    fn test_validate_regular_file_returns_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Packages");
        fs::write(&file_path, "Package: A\n").unwrap();

        let size = validate_regular_file(&file_path, "package index").unwrap();
        assert_eq!(size, 11);
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "package index");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/test/Packages");
        assert!(validate_file_size(1000, &path, MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/Packages");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
