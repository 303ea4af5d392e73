use crate::errors::IOError;
use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::{create_dir_all, write, ReadDir};

/// Lists a directory with the metadata of each entry's target, so symlinked
/// files count as files. A dangling symlink keeps its own metadata.
pub async fn get_files_in_dir(mut r_dir: ReadDir) -> io::Result<Vec<(String, Metadata, PathBuf)>> {
    let mut entries = Vec::new();
    while let Some(entry) = r_dir.next_entry().await? {
        let metadata = match tokio::fs::metadata(entry.path()).await {
            Ok(metadata) => metadata,
            Err(_) => entry.metadata().await?,
        };
        if let Ok(name) = entry.file_name().into_string() {
            entries.push((name, metadata, entry.path()));
        }
    }
    Ok(entries)
}

/// Writes `contents` to `path`, creating missing parent directories first.
pub async fn create_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), IOError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).await.map_err(|source| IOError::Create {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    write(path, contents).await.map_err(|source| IOError::Write {
        path: path.to_path_buf(),
        source,
    })
}
