use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::path::{Path, PathBuf};

pub mod local;

/// ファイル操作バックエンドのトレイト
///
/// 列挙はanyhowで文脈付きのエラーを返し、個別のファイル操作は
/// 呼び出し側が操作種別を付与できるように`std::io::Result`を返す。
#[automock]
#[async_trait]
pub trait FileStore: Send + Sync {
    /// ディレクトリ直下のエントリを列挙する（順序は保証しない）
    async fn list_entries(&self, directory: &Path) -> Result<Vec<PathBuf>>;

    /// ファイルをリネームする。移動先が既に存在する場合は失敗する
    async fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()>;

    /// ファイル全体を読み込む
    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;

    /// ファイルを切り詰めて書き込む
    async fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()>;
}

#[async_trait]
impl FileStore for Box<dyn FileStore> {
    async fn list_entries(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        self.as_ref().list_entries(directory).await
    }

    async fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        self.as_ref().rename(from, to).await
    }

    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        self.as_ref().read(path).await
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
        self.as_ref().write(path, contents).await
    }
}
