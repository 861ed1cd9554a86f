// 統合テスト用のヘルパー
// テストディレクトリの作成と処理後の状態確認

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 指定したファイルを含むテストディレクトリを作成
pub fn setup_directory(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(temp_dir.path().join(name), content).unwrap();
    }
    temp_dir
}

/// ディレクトリ内のファイル名と内容を名前順で取得
pub fn read_directory(dir: &Path) -> BTreeMap<String, String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            let content = fs::read_to_string(&path).unwrap_or_default();
            (name, content)
        })
        .collect()
}

/// `stem-N.ext`形式の名前から`stem`とNを取り出す
pub fn parse_sequenced_name(name: &str) -> Option<(String, usize)> {
    let (stem, _) = name.split_once('.')?;
    let (original, number) = stem.rsplit_once('-')?;
    Some((original.to_string(), number.parse().ok()?))
}

/// ディレクトリ内の連番を昇順で取得
pub fn sequence_numbers(dir: &Path) -> Vec<usize> {
    let mut numbers: Vec<usize> = read_directory(dir)
        .keys()
        .filter_map(|name| parse_sequenced_name(name).map(|(_, n)| n))
        .collect();
    numbers.sort();
    numbers
}

/// 生成済みのバイナリへのパス
pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_dir_processor"))
}
