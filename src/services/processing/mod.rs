// ファイル処理機能
// ファイル名の分解、リネーム、マークアップ除去

pub mod file_name;
pub mod markup;
pub mod worker;

// 公開API
pub use file_name::{split_file_name, FileNameParts};
pub use markup::{strip_markup, MarkupStripResult};
pub use worker::process_single_file;
