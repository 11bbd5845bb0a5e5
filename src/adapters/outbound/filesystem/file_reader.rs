use crate::ports::outbound::{BomFile, BomSource, TemplateSource};
use crate::shared::error::MdbomError;
use crate::shared::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Extension a directory entry must carry to be read as a BOM document
const BOM_EXTENSION: &str = "json";

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both BomSource and TemplateSource ports,
/// providing file system access for reading BOM documents and templates.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read metadata: {}", e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("{}", e))
    }

    fn read_bom_file(&self, path: &Path) -> Result<BomFile> {
        let content = self
            .safe_read_file(path)
            .map_err(|e| MdbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        Ok(BomFile::new(path.to_path_buf(), content))
    }

    /// Lists the `.json` entries of `dir`, sorted by file name
    ///
    /// Symlinked entries are listed too, so that reading them fails instead of
    /// silently dropping their packages.
    fn list_bom_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let to_read_error = |e: io::Error| MdbomError::FileReadError {
            path: dir.to_path_buf(),
            details: e.to_string(),
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(to_read_error)? {
            let entry = entry.map_err(to_read_error)?;
            // DirEntry::file_type does not follow symlinks
            let file_type = entry.file_type().map_err(to_read_error)?;
            if !file_type.is_file() && !file_type.is_symlink() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(BOM_EXTENSION) {
                paths.push(path);
            }
        }

        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }
}

impl BomSource for FileSystemReader {
    fn read_boms(&self, path: &Path) -> Result<Vec<BomFile>> {
        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(MdbomError::NotFound {
                    path: path.to_path_buf(),
                }
                .into());
            }
            Err(e) => {
                return Err(MdbomError::FileReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into());
            }
        };

        if metadata.is_dir() {
            self.list_bom_files(path)?
                .iter()
                .map(|file| self.read_bom_file(file))
                .collect()
        } else {
            Ok(vec![self.read_bom_file(path)?])
        }
    }
}

impl TemplateSource for FileSystemReader {
    fn read_template(&self, path: &Path) -> Result<String> {
        if path.as_os_str().is_empty() {
            return Err(MdbomError::invalid_input("No valid template provided.").into());
        }

        self.safe_read_file(path).map_err(|e| {
            MdbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_boms_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let bom_path = temp_dir.path().join("bom.json");
        fs::write(&bom_path, r#"{"components": []}"#).unwrap();

        let reader = FileSystemReader::new();
        let documents = reader.read_boms(&bom_path).unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].path, bom_path);
        assert_eq!(documents[0].content, r#"{"components": []}"#);
    }

    #[test]
    fn test_read_boms_single_file_any_extension() {
        let temp_dir = TempDir::new().unwrap();
        let bom_path = temp_dir.path().join("bom.cdx");
        fs::write(&bom_path, "{}").unwrap();

        let reader = FileSystemReader::new();
        assert_eq!(reader.read_boms(&bom_path).unwrap().len(), 1);
    }

    #[test]
    fn test_read_boms_directory_sorted_by_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("c.json"), "c").unwrap();
        fs::write(temp_dir.path().join("a.json"), "a").unwrap();
        fs::write(temp_dir.path().join("b.json"), "b").unwrap();

        let reader = FileSystemReader::new();
        let documents = reader.read_boms(temp_dir.path()).unwrap();

        let contents: Vec<&str> = documents.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_read_boms_directory_skips_other_entries() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("bom.json"), "bom").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "notes").unwrap();
        fs::create_dir(temp_dir.path().join("nested.json")).unwrap();

        let reader = FileSystemReader::new();
        let documents = reader.read_boms(temp_dir.path()).unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].content, "bom");
    }

    #[test]
    fn test_read_boms_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        assert!(reader.read_boms(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_boms_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");

        let reader = FileSystemReader::new();
        let err = reader.read_boms(&missing).unwrap_err();

        match err.downcast_ref::<MdbomError>() {
            Some(MdbomError::NotFound { path }) => assert_eq!(path, &missing),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_read_boms_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let reader = FileSystemReader::new();
        let err = reader.read_boms(&link).unwrap_err();

        assert!(format!("{}", err).contains("symbolic link"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_boms_directory_rejects_symlinked_entry() {
        let temp_dir = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let target = outside.path().join("target.json");
        fs::write(&target, "{}").unwrap();
        fs::write(temp_dir.path().join("a.json"), "a").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("b.json")).unwrap();

        let reader = FileSystemReader::new();
        let err = reader.read_boms(temp_dir.path()).unwrap_err();

        match err.downcast_ref::<MdbomError>() {
            Some(MdbomError::FileReadError { path, details }) => {
                assert_eq!(path, &temp_dir.path().join("b.json"));
                assert!(details.contains("symbolic link"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_read_template_success() {
        let temp_dir = TempDir::new().unwrap();
        let template_path = temp_dir.path().join("template.md.hbs");
        fs::write(&template_path, "# {{metadata.tool_name}}").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_template(&template_path).unwrap();

        assert_eq!(content, "# {{metadata.tool_name}}");
    }

    #[test]
    fn test_read_template_missing_is_read_error() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let err = reader
            .read_template(&temp_dir.path().join("missing.md.hbs"))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<MdbomError>(),
            Some(MdbomError::FileReadError { .. })
        ));
    }

    #[test]
    fn test_read_template_empty_path() {
        let reader = FileSystemReader::new();
        let err = reader.read_template(Path::new("")).unwrap_err();

        assert!(err.to_string().contains("No valid template provided."));
    }

    #[test]
    fn test_read_template_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let err = reader.read_template(temp_dir.path()).unwrap_err();

        assert!(format!("{}", err).contains("not a regular file"));
    }
}
