//! Tool-specific prompt shapes. Every literal line below is part of the output.

use crate::patterns::{self, text_len};
use crate::tools::ToolId;

/// Restructure already-trimmed input into `tool`'s preferred prompt shape.
pub fn structure(tool: ToolId, input: &str) -> String {
    let parts = match tool {
        ToolId::Claude => claude(input),
        ToolId::Gemini => gemini(input),
        ToolId::Perplexity => perplexity(input),
        ToolId::Copilot => copilot(input),
        ToolId::Grok => grok(input),
        ToolId::ChatGpt => chatgpt(input),
    };
    parts.join("\n")
}

fn claude(input: &str) -> Vec<&str> {
    let mut parts = vec!["## タスク", input, "", "## 要件", "- 正確で実用的な回答をお願いします"];
    if patterns::has_code_context(input) {
        parts.push("- コードを含む場合は、言語を指定したコードブロックで記述してください");
        parts.push("- エラーハンドリングも考慮してください");
    }
    if text_len(input) > 300 {
        parts.push("- 段階的に整理して回答してください");
    }
    parts
}

fn gemini(input: &str) -> Vec<&str> {
    let mut parts = vec![input];
    if patterns::IMAGE_REFERENCE.is_match(input) {
        parts.extend(["", "※画像を添付しています。画像の内容を踏まえて回答してください。"]);
    }
    if patterns::VIDEO.is_match(input) {
        parts.extend(["", "※該当の動画/URLの内容を分析してください。"]);
    }
    if text_len(input) > 300 {
        parts.extend(["", "詳細に分析し、構造化して回答してください。"]);
    }
    parts
}

fn perplexity(input: &str) -> Vec<&str> {
    let mut parts = vec![input, "", "信頼できるソースを引用して回答してください。"];
    if patterns::COMPARISON.is_match(input) {
        parts.push("比較表があると助かります。");
    }
    parts
}

fn copilot(input: &str) -> Vec<&str> {
    let mut parts = vec![input];
    if patterns::SPREADSHEET.is_match(input) {
        parts.extend(["", "具体的な数式や手順をステップバイステップで教えてください。"]);
    }
    if patterns::DOCUMENT.is_match(input) {
        parts.extend(["", "文書のフォーマットや構成案も含めてください。"]);
    }
    if patterns::SLIDES.is_match(input) {
        parts.extend(["", "スライド構成案を箇条書きで提案してください。"]);
    }
    parts
}

fn grok(input: &str) -> Vec<&str> {
    let mut parts = vec![input];
    if patterns::TREND.is_match(input) {
        parts.extend(["", "最新のX/Twitterでのトレンドも踏まえて教えて。"]);
    }
    parts
}

fn chatgpt(input: &str) -> Vec<&str> {
    let mut parts = vec![input];
    if text_len(input) > 200 {
        parts.extend(["", "わかりやすく簡潔に説明してください。"]);
    }
    parts
}
