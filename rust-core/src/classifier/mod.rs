pub mod analyzer;
pub mod reason;
pub mod selector;

pub use analyzer::ScoreBoard;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::tools::{ToolDefinition, ToolId};

/// Outcome for one tool within a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutcome {
    pub tool: ToolId,
    pub score: u32,
    /// Share of the total score, 0-100.
    pub confidence: u8,
    pub reason: String,
}

impl ToolOutcome {
    pub fn definition(&self) -> &'static ToolDefinition {
        self.tool.definition()
    }
}

/// Every tool's outcome, best first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    all: Vec<ToolOutcome>,
}

impl ClassificationResult {
    pub fn recommended(&self) -> &ToolOutcome {
        &self.all[0]
    }

    /// Runners-up after the recommendation (always two).
    pub fn alternatives(&self) -> &[ToolOutcome] {
        &self.all[1..3]
    }

    pub fn all(&self) -> &[ToolOutcome] {
        &self.all
    }

    /// Outcome for a specific tool, e.g. when the user overrides the pick.
    pub fn get(&self, tool: ToolId) -> Option<&ToolOutcome> {
        self.all.iter().find(|outcome| outcome.tool == tool)
    }
}

impl Serialize for ClassificationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct View<'a> {
            recommended: &'a ToolOutcome,
            alternatives: &'a [ToolOutcome],
            all: &'a [ToolOutcome],
        }

        View {
            recommended: self.recommended(),
            alternatives: self.alternatives(),
            all: self.all(),
        }
        .serialize(serializer)
    }
}

/// Rank every tool for `input`. Returns `None` for empty or blank input.
pub fn classify(input: &str) -> Option<ClassificationResult> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }

    let mut scores = analyzer::score_all(text);
    let mut ranked = selector::rank(&scores);

    if selector::apply_fallback(&mut scores, &mut ranked) {
        debug!(tool = %selector::FALLBACK_TOOL, "no tool matched, falling back");
    }

    let total = scores.total();
    let all = ranked
        .iter()
        .map(|&tool| ToolOutcome {
            tool,
            score: scores[tool],
            confidence: selector::confidence(scores[tool], total),
            reason: reason::reason_for(tool, text),
        })
        .collect::<Vec<_>>();

    debug!(
        recommended = %all[0].tool,
        score = all[0].score,
        total,
        "classified request"
    );

    Some(ClassificationResult { all })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_not_classified() {
        assert!(classify("").is_none());
        assert!(classify("   \n\t ").is_none());
    }

    #[test]
    fn test_result_views_are_consistent() {
        let result = classify("Excelのマクロで報告書を作りたい").unwrap();
        assert_eq!(result.all().len(), 6);
        assert_eq!(result.recommended(), &result.all()[0]);
        assert_eq!(result.alternatives(), &result.all()[1..3]);
        assert_eq!(result.recommended().tool, ToolId::Copilot);
    }

    #[test]
    fn test_get_by_tool() {
        let result = classify("最新のニュースを調べて").unwrap();
        let grok = result.get(ToolId::Grok).unwrap();
        assert_eq!(grok.tool, ToolId::Grok);
        assert_eq!(grok.reason, "SNSトレンド・カジュアルな対話に最適");
    }

    #[test]
    fn test_input_is_trimmed_before_scoring() {
        let padded = format!("  {}  ", "あ".repeat(498));
        let result = classify(&padded).unwrap();
        // 498 chars after trimming: the length condition does not fire
        assert_eq!(result.get(ToolId::Claude).unwrap().score, 0);
    }

    #[test]
    fn test_serializes_recommended_and_alternatives() {
        let result = classify("この画像を分析して").unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["recommended"]["tool"], "gemini");
        assert_eq!(json["alternatives"].as_array().unwrap().len(), 2);
        assert_eq!(json["all"].as_array().unwrap().len(), 6);
    }
}
