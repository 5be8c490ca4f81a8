use crate::patterns;
use crate::rules::{first_match, Rule};
use crate::tools::ToolId;

fn base_reason(tool: ToolId) -> &'static str {
    match tool {
        ToolId::Claude => "コーディング・技術的な分析に最適",
        ToolId::Gemini => "マルチモーダル処理・Google連携に最適",
        ToolId::Perplexity => "リアルタイム検索・出典付き回答に最適",
        ToolId::Copilot => "Microsoft連携・ビジネス文書に最適",
        ToolId::Grok => "SNSトレンド・カジュアルな対話に最適",
        ToolId::ChatGpt => "汎用的な質問・一般会話に最適",
    }
}

const CLAUDE_CLAUSES: &[Rule<&str>] = &[Rule {
    when: |t| patterns::text_len(t) > 500,
    then: "（長文の分析も得意）",
}];

const GEMINI_CLAUSES: &[Rule<&str>] = &[Rule {
    when: |t| patterns::IMAGE_REFERENCE_STRICT.is_match(t),
    then: "（画像解析が可能）",
}];

const PERPLEXITY_CLAUSES: &[Rule<&str>] = &[Rule {
    when: |t| patterns::NEWS_RECENCY.is_match(t),
    then: "（最新情報をソース付きで提供）",
}];

/// Situational clauses in precedence order. At most one is appended.
fn extension_rules(tool: ToolId) -> &'static [Rule<&'static str>] {
    match tool {
        ToolId::Claude => CLAUDE_CLAUSES,
        ToolId::Gemini => GEMINI_CLAUSES,
        ToolId::Perplexity => PERPLEXITY_CLAUSES,
        ToolId::Copilot | ToolId::Grok | ToolId::ChatGpt => &[],
    }
}

/// Short justification for recommending `tool` for `text`.
pub fn reason_for(tool: ToolId, text: &str) -> String {
    let base = base_reason(tool);
    match first_match(extension_rules(tool), text) {
        Some(clause) => format!("{}{}", base, clause),
        None => base.to_string(),
    }
}
