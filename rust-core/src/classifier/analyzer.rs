use crate::patterns;
use crate::tools::{ToolDefinition, ToolId, PRIORITY};
use std::ops::{Index, IndexMut};

const POINTS_PER_MATCH: u32 = 5;
const MAX_COUNTED_MATCHES: usize = 3;

/// Either overlap tool must reach this before the disambiguation pass runs.
const DISAMBIGUATION_THRESHOLD: u32 = 10;
const MULTIMODAL_CONTEXT_BONUS: u32 = 15;
const DEV_CONTEXT_BONUS: u32 = 15;
const ANALYSIS_BONUS: u32 = 10;

/// Per-call raw scores, one slot per tool in priority order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard([u32; PRIORITY.len()]);

impl ScoreBoard {
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl Index<ToolId> for ScoreBoard {
    type Output = u32;

    fn index(&self, tool: ToolId) -> &u32 {
        &self.0[tool.priority()]
    }
}

impl IndexMut<ToolId> for ScoreBoard {
    fn index_mut(&mut self, tool: ToolId) -> &mut u32 {
        &mut self.0[tool.priority()]
    }
}

/// Score every tool against already-trimmed text, including the overlap pass.
pub fn score_all(text: &str) -> ScoreBoard {
    let lower = text.to_lowercase();
    let mut scores = ScoreBoard::default();
    for tool in PRIORITY {
        scores[tool] = score_tool(text, &lower, tool.definition());
    }
    adjust_overlap(text, &mut scores);
    scores
}

/// Keyword and condition points for a single tool.
pub fn score_tool(text: &str, lower: &str, tool: &ToolDefinition) -> u32 {
    let from_keywords: u32 = tool
        .keywords
        .iter()
        .map(|kw| keyword_points(lower, kw))
        .sum();

    // Every condition is evaluated; none short-circuits another.
    let from_conditions: u32 = tool
        .conditions
        .iter()
        .filter(|cond| cond.matches(text))
        .map(|cond| cond.score)
        .sum();

    from_keywords + from_conditions
}

fn keyword_points(lower_text: &str, keyword: &str) -> u32 {
    let lower_keyword = keyword.to_lowercase();
    let hits = lower_text.matches(lower_keyword.as_str()).count();
    hits.min(MAX_COUNTED_MATCHES) as u32 * POINTS_PER_MATCH
}

/// Resolve overlap between the coding assistant and the multimodal assistant.
pub fn adjust_overlap(text: &str, scores: &mut ScoreBoard) {
    if scores[ToolId::Claude] < DISAMBIGUATION_THRESHOLD
        && scores[ToolId::Gemini] < DISAMBIGUATION_THRESHOLD
    {
        return;
    }

    let dev_context = patterns::has_dev_context(text);

    if patterns::IMAGE_REFERENCE.is_match(text) || patterns::GOOGLE_ECOSYSTEM.is_match(text) {
        scores[ToolId::Gemini] += MULTIMODAL_CONTEXT_BONUS;
    }

    if dev_context {
        scores[ToolId::Claude] += DEV_CONTEXT_BONUS;
    }

    if !dev_context && patterns::ANALYSIS.is_match(text) {
        scores[ToolId::Gemini] += ANALYSIS_BONUS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(text: &str, tool: ToolId) -> u32 {
        score_tool(text, &text.to_lowercase(), tool.definition())
    }

    #[test]
    fn test_keyword_hits_are_capped() {
        assert_eq!(raw("SNS", ToolId::Grok), 5);
        assert_eq!(raw("ネタ ネタ ネタ", ToolId::Grok), 15);
        assert_eq!(raw("ネタ ネタ ネタ ネタ ネタ", ToolId::Grok), 15);
    }

    #[test]
    fn test_keywords_ignore_case() {
        assert_eq!(raw("python", ToolId::Claude), 5);
        assert_eq!(raw("PYTHON", ToolId::Claude), 5);
    }

    #[test]
    fn test_conditions_add_fixed_points() {
        // URL condition only: no Gemini keyword in the text
        assert_eq!(raw("https://example.com", ToolId::Gemini), 10);
        // 画像 keyword + image reference
        assert_eq!(raw("この画像", ToolId::Gemini), 25);
        // Length condition at exactly 500 characters
        assert_eq!(raw(&"あ".repeat(500), ToolId::Claude), 15);
        assert_eq!(raw(&"あ".repeat(499), ToolId::Claude), 0);
        // Astral characters count as two units each
        assert_eq!(raw(&"😀".repeat(250), ToolId::Claude), 15);
        assert_eq!(raw(&"😀".repeat(249), ToolId::Claude), 0);
    }

    #[test]
    fn test_overlap_skipped_below_threshold() {
        let mut scores = ScoreBoard::default();
        scores[ToolId::Claude] = 5;
        scores[ToolId::Gemini] = 5;
        adjust_overlap("この画像のPythonコードを分析", &mut scores);
        assert_eq!(scores[ToolId::Claude], 5);
        assert_eq!(scores[ToolId::Gemini], 5);
    }

    #[test]
    fn test_overlap_checks_are_independent() {
        let mut scores = ScoreBoard::default();
        scores[ToolId::Gemini] = 10;
        adjust_overlap("このスクショのPythonエラー", &mut scores);
        assert_eq!(scores[ToolId::Gemini], 25);
        assert_eq!(scores[ToolId::Claude], 15);
    }

    #[test]
    fn test_google_ecosystem_bonus() {
        let mut scores = ScoreBoard::default();
        scores[ToolId::Gemini] = 10;
        adjust_overlap("gmailの整理", &mut scores);
        assert_eq!(scores[ToolId::Gemini], 25);
        assert_eq!(scores[ToolId::Claude], 0);

        let mut scores = ScoreBoard::default();
        scores[ToolId::Claude] = 10;
        adjust_overlap("スプレッドシートの共有設定", &mut scores);
        assert_eq!(scores[ToolId::Gemini], 15);

        let mut scores = ScoreBoard::default();
        scores[ToolId::Gemini] = 5;
        adjust_overlap("gmailの整理", &mut scores);
        assert_eq!(scores[ToolId::Gemini], 5);
    }

    #[test]
    fn test_analysis_bonus_requires_no_dev_context() {
        let mut scores = ScoreBoard::default();
        scores[ToolId::Claude] = 10;
        adjust_overlap("売上の推移を分析して", &mut scores);
        assert_eq!(scores[ToolId::Gemini], 10);

        let mut scores = ScoreBoard::default();
        scores[ToolId::Claude] = 10;
        adjust_overlap("SQLの実行計画を分析して", &mut scores);
        assert_eq!(scores[ToolId::Gemini], 0);
        assert_eq!(scores[ToolId::Claude], 25);
    }

    #[test]
    fn test_score_all_totals() {
        let scores = score_all("Pythonで実装,バグ,デバッグ");
        assert_eq!(scores[ToolId::Claude], 35);
        assert_eq!(scores.total(), 35);
    }
}
