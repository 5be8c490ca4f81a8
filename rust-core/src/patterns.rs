//! Shared vocabulary and phrase patterns.
//!
//! Patterns are compiled once on first use. Literal keyword lists are matched
//! case-sensitively with `contains`, the regexes carry their own flags.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid built-in pattern")
}

pub static URL: Lazy<Regex> = Lazy::new(|| compile(r"https?://\S+"));

/// "この画像" style references to an attached image or figure.
pub static IMAGE_REFERENCE: Lazy<Regex> =
    Lazy::new(|| compile(r"この(画像|写真|図|グラフ|スクリーンショット|スクショ)"));

/// Narrower image reference used for the multimodal reason clause.
pub static IMAGE_REFERENCE_STRICT: Lazy<Regex> = Lazy::new(|| compile(r"この(画像|写真|図)"));

pub static RECENCY: Lazy<Regex> = Lazy::new(|| compile(r"最新|今年|2025|2026|現在の|いま"));

pub static NEWS_RECENCY: Lazy<Regex> = Lazy::new(|| compile(r"最新|ニュース|今"));

pub static SNS_REFERENCE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)(ツイッター|twitter|X(で|の|が))"));

pub static GOOGLE_ECOSYSTEM: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(Google|Gmail|YouTube|スプレッドシート|ドライブ)"));

pub static ANALYSIS: Lazy<Regex> = Lazy::new(|| compile(r"分析|推論|考察|評価|批判的"));

pub static VIDEO: Lazy<Regex> = Lazy::new(|| compile(r"YouTube|動画"));

pub static COMPARISON: Lazy<Regex> = Lazy::new(|| compile(r"比較|違い|どちら"));

pub static SPREADSHEET: Lazy<Regex> = Lazy::new(|| compile(r"Excel|表計算|マクロ|VBA"));

pub static DOCUMENT: Lazy<Regex> = Lazy::new(|| compile(r"Word|文書|報告書|企画書"));

pub static SLIDES: Lazy<Regex> = Lazy::new(|| compile(r"PowerPoint|スライド|プレゼン"));

pub static TREND: Lazy<Regex> = Lazy::new(|| compile(r"トレンド|話題|バズ"));

/// Development vocabulary that separates the coding assistant from the
/// multimodal one during the disambiguation pass.
pub const DEV_CONTEXT_KEYWORDS: &[&str] = &[
    "コード", "コーディング", "プログラム", "プログラミング",
    "バグ", "実装", "リファクタ", "デバッグ", "関数", "クラス",
    "HTML", "CSS", "JavaScript", "Python", "Java", "TypeScript",
    "React", "Vue", "Node", "SQL", "Git", "Docker", "API",
    "アルゴリズム", "コンパイル", "ビルド", "デプロイ",
];

/// Narrower development vocabulary used when shaping prompts and modes.
pub const CODE_PROMPT_KEYWORDS: &[&str] = &[
    "コード", "プログラム", "実装", "関数", "クラス",
    "HTML", "CSS", "JavaScript", "Python", "Java",
    "バグ", "エラー", "デバッグ",
];

pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

pub fn has_dev_context(text: &str) -> bool {
    contains_any(text, DEV_CONTEXT_KEYWORDS)
}

pub fn has_code_context(text: &str) -> bool {
    contains_any(text, CODE_PROMPT_KEYWORDS)
}

/// Text length in UTF-16 code units, the unit every length threshold uses.
///
/// BMP characters count once, astral ones (emoji and the like) count twice.
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}
