use super::FileStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// ローカルファイルシステム用のバックエンド
#[derive(Debug, Clone, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn list_entries(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(directory)
            .await
            .with_context(|| format!("Failed to read directory: {}", directory.display()))?;

        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("Failed to read entry in: {}", directory.display()))?
        {
            paths.push(entry.path());
        }

        Ok(paths)
    }

    async fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        // std::fs::renameはUnixで移動先を上書きするため事前に確認する
        match tokio::fs::symlink_metadata(to).await {
            Ok(_) => {
                return Err(std::io::Error::new(
                    ErrorKind::AlreadyExists,
                    format!("rename target already exists: {}", to.display()),
                ))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }

        tokio::fs::rename(from, to).await
    }

    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_entries_returns_all_entries() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join("b.html"), "b").unwrap();
        fs::write(temp_dir.path().join("README"), "c").unwrap();

        let store = LocalFileStore::new();
        let mut entries = store.list_entries(temp_dir.path()).await.unwrap();
        entries.sort();

        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|p| p.starts_with(temp_dir.path())));
        assert!(entries.iter().any(|p| p.ends_with("README")));
    }

    #[tokio::test]
    async fn test_list_entries_nonexistent_directory() {
        let store = LocalFileStore::new();
        let result = store
            .list_entries(Path::new("/nonexistent/directory"))
            .await;

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read directory"));
    }

    #[tokio::test]
    async fn test_rename_moves_file() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("report.txt");
        let to = temp_dir.path().join("report-1.txt");
        fs::write(&from, "content").unwrap();

        LocalFileStore::new().rename(&from, &to).await.unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read_to_string(&to).unwrap(), "content");
    }

    #[tokio::test]
    async fn test_rename_refuses_to_clobber() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("report.txt");
        let to = temp_dir.path().join("report-1.txt");
        fs::write(&from, "new").unwrap();
        fs::write(&to, "existing").unwrap();

        let error = LocalFileStore::new().rename(&from, &to).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::AlreadyExists);
        assert!(from.exists());
        assert_eq!(fs::read_to_string(&to).unwrap(), "existing");
    }

    #[tokio::test]
    async fn test_write_truncates_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("page.html");
        fs::write(&path, "a much longer original body").unwrap();

        let store = LocalFileStore::new();
        store.write(&path, b"short").await.unwrap();

        assert_eq!(store.read(&path).await.unwrap(), b"short");
    }
}
