// マークアップタグの除去

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// `<` から次の `>` までのタグ
static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup tag pattern is valid"));

/// タグ除去の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupStripResult<'a> {
    pub text: Cow<'a, str>,
    pub tags_removed: usize,
}

/// 全てのタグを除去する。対応の取れない `<` や `>` はそのまま残る
pub fn strip_markup(content: &str) -> MarkupStripResult<'_> {
    let tags_removed = MARKUP_TAG.find_iter(content).count();
    let text = if tags_removed == 0 {
        Cow::Borrowed(content)
    } else {
        MARKUP_TAG.replace_all(content, "")
    };

    MarkupStripResult { text, tags_removed }
}
