pub mod modes;
pub mod templates;

pub use modes::{ChatType, Mode, ModeRecommendation, SearchFocus};

use serde::Serialize;

use crate::tools::ToolId;

/// Display lines accompanying an optimized prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecommendedHints {
    pub hints: Vec<String>,
}

impl ModeRecommendation {
    /// Mode line first, then chat type, then focus.
    pub fn to_hints(&self) -> RecommendedHints {
        let mut hints = vec![format!("モード: {}", self.mode.label())];
        if let Some(chat_type) = self.chat_type {
            hints.push(format!("チャット: {}", chat_type.label()));
        }
        if let Some(focus) = self.focus {
            hints.push(format!("フォーカス: {}", focus.label()));
        }
        RecommendedHints { hints }
    }
}

/// Rewrite `raw_input` into the prompt shape preferred by `tool_id`.
///
/// Unknown ids return the trimmed input unchanged.
pub fn generate(tool_id: &str, raw_input: &str) -> String {
    match ToolId::parse(tool_id) {
        Some(tool) => generate_for(tool, raw_input),
        None => raw_input.trim().to_string(),
    }
}

pub fn generate_for(tool: ToolId, raw_input: &str) -> String {
    crate::log_tool!(trace, tool, "generating prompt");
    templates::structure(tool, raw_input.trim())
}

/// Mode and secondary-dimension hints for `tool_id`; empty for unknown ids.
pub fn get_recommended_hints(tool_id: &str, raw_input: &str) -> RecommendedHints {
    match ToolId::parse(tool_id) {
        Some(tool) => recommended_hints_for(tool, raw_input),
        None => RecommendedHints::default(),
    }
}

pub fn recommended_hints_for(tool: ToolId, raw_input: &str) -> RecommendedHints {
    let recommendation = modes::recommend(tool, raw_input);
    crate::log_tool!(trace, tool, mode = ?recommendation.mode, "recommended mode");
    recommendation.to_hints()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tool_returns_trimmed_input() {
        assert_eq!(generate("bard", "  そのまま  "), "そのまま");
        assert!(get_recommended_hints("bard", "なんでも").hints.is_empty());
    }

    #[test]
    fn test_generate_trims_before_structuring() {
        assert_eq!(
            generate("claude", "\n  設計  \n"),
            "## タスク\n設計\n\n## 要件\n- 正確で実用的な回答をお願いします"
        );
    }

    #[test]
    fn test_hint_line_order() {
        let hints = get_recommended_hints("perplexity", "論文を詳しく").hints;
        assert_eq!(
            hints,
            vec![
                "モード: Pro検索".to_string(),
                "フォーカス: Academic（学術論文）".to_string(),
            ]
        );

        let hints = get_recommended_hints("gemini", "今日の天気").hints;
        assert_eq!(hints.len(), 2);
        assert!(hints[0].starts_with("モード: "));
        assert!(hints[1].starts_with("チャット: "));

        assert_eq!(get_recommended_hints("grok", "ネタ").hints, vec!["モード: 標準".to_string()]);
    }
}
