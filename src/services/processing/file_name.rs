// ファイル名の分解と連番付きファイル名の生成

use crate::core::{ProcessingError, ProcessingResult};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// 拡張子の区切り文字
pub const EXTENSION_SEPARATOR: char = '.';

/// 最初の区切り文字で分割したファイル名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameParts {
    pub stem: String,
    pub extension: String,
}

impl FileNameParts {
    /// `<stem>-<sequence_number>.<extension>` を生成
    pub fn with_sequence_number(&self, sequence_number: usize) -> String {
        format!(
            "{}-{}{}{}",
            self.stem, sequence_number, EXTENSION_SEPARATOR, self.extension
        )
    }
}

/// ファイル名を最初の区切り文字で (stem, extension) に分割
///
/// `archive.tar.gz` は `archive` と `tar.gz` になる。
/// 区切り文字を含まない名前は `InvalidFileNameError`。
pub fn split_file_name(file_name: &str) -> ProcessingResult<FileNameParts> {
    file_name
        .split_once(EXTENSION_SEPARATOR)
        .map(|(stem, extension)| FileNameParts {
            stem: stem.to_string(),
            extension: extension.to_string(),
        })
        .ok_or_else(|| ProcessingError::invalid_file_name(file_name))
}

/// 連番付きのファイル名を生成
///
/// UTF-8でない名前もバイト列のまま最初の区切り文字で分割する。
pub fn sequenced_file_name(file_name: &OsStr, sequence_number: usize) -> ProcessingResult<OsString> {
    match file_name.to_str() {
        Some(name) => Ok(split_file_name(name)?
            .with_sequence_number(sequence_number)
            .into()),
        None => sequenced_raw_file_name(file_name, sequence_number)
            .ok_or_else(|| ProcessingError::invalid_file_name(file_name.to_string_lossy())),
    }
}

#[cfg(unix)]
fn sequenced_raw_file_name(file_name: &OsStr, sequence_number: usize) -> Option<OsString> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = file_name.as_bytes();
    let separator = bytes
        .iter()
        .position(|&b| b == EXTENSION_SEPARATOR as u8)?;

    let suffix = format!("-{sequence_number}");
    let mut renamed = Vec::with_capacity(bytes.len() + suffix.len());
    renamed.extend_from_slice(&bytes[..separator]);
    renamed.extend_from_slice(suffix.as_bytes());
    renamed.extend_from_slice(&bytes[separator..]);
    Some(OsString::from_vec(renamed))
}

// UTF-8でない名前はunix以外では分割できない
#[cfg(not(unix))]
fn sequenced_raw_file_name(_file_name: &OsStr, _sequence_number: usize) -> Option<OsString> {
    None
}

/// 同じディレクトリ内の連番付きパスを計算
pub fn sequenced_path(path: &Path, sequence_number: usize) -> ProcessingResult<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ProcessingError::invalid_file_name(path.to_string_lossy()))?;

    Ok(path.with_file_name(sequenced_file_name(file_name, sequence_number)?))
}
