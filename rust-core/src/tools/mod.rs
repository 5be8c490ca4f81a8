pub mod catalog;

pub use catalog::{all_tools, get_tool_info, TOOLS};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SelectorError;
use crate::patterns;

/// Candidate assistants, declared in tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    Claude,
    Gemini,
    Perplexity,
    Copilot,
    Grok,
    ChatGpt,
}

/// Fixed tie-break order. Earlier wins when scores are equal.
pub const PRIORITY: [ToolId; 6] = [
    ToolId::Claude,
    ToolId::Gemini,
    ToolId::Perplexity,
    ToolId::Copilot,
    ToolId::Grok,
    ToolId::ChatGpt,
];

impl ToolId {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolId::Claude => "claude",
            ToolId::Gemini => "gemini",
            ToolId::Perplexity => "perplexity",
            ToolId::Copilot => "copilot",
            ToolId::Grok => "grok",
            ToolId::ChatGpt => "chatgpt",
        }
    }

    /// Position in [`PRIORITY`]; lower wins ties.
    pub fn priority(self) -> usize {
        self as usize
    }

    pub fn definition(self) -> &'static ToolDefinition {
        &TOOLS[self.priority()]
    }

    /// Lenient lookup used at the string-keyed engine boundary.
    pub fn parse(id: &str) -> Option<ToolId> {
        PRIORITY.iter().copied().find(|tool| tool.as_str() == id)
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolId::parse(s).ok_or_else(|| SelectorError::UnknownTool(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Paid,
    Free,
}

impl Plan {
    /// Badge text shown next to the tool name.
    pub fn label(self) -> &'static str {
        match self {
            Plan::Paid => "課金",
            Plan::Free => "無料",
        }
    }
}

/// Predicates evaluated against the trimmed input in addition to keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConditionKind {
    MinLength { min: usize },
    Url,
    ImageMention,
    QuestionLatest,
    SnsContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Condition {
    #[serde(flatten)]
    pub kind: ConditionKind,
    pub score: u32,
}

impl Condition {
    pub const fn new(kind: ConditionKind, score: u32) -> Self {
        Self { kind, score }
    }

    pub fn matches(&self, text: &str) -> bool {
        match self.kind {
            ConditionKind::MinLength { min } => patterns::text_len(text) >= min,
            ConditionKind::Url => patterns::URL.is_match(text),
            ConditionKind::ImageMention => patterns::IMAGE_REFERENCE.is_match(text),
            ConditionKind::QuestionLatest => patterns::RECENCY.is_match(text),
            ConditionKind::SnsContext => patterns::SNS_REFERENCE.is_match(text),
        }
    }
}

/// Immutable description of one candidate assistant.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ToolDefinition {
    pub id: ToolId,
    pub name: &'static str,
    pub plan: Plan,
    pub color: &'static str,
    pub web_url: &'static str,
    pub keywords: &'static [&'static str],
    pub conditions: &'static [Condition],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_matches_declaration_order() {
        for (idx, tool) in PRIORITY.iter().enumerate() {
            assert_eq!(tool.priority(), idx);
            assert_eq!(tool.definition().id, *tool);
        }
    }

    #[test]
    fn test_parse_round_trips_ids() {
        for tool in PRIORITY {
            assert_eq!(tool.as_str().parse::<ToolId>().unwrap(), tool);
        }
        assert!(matches!(
            "bard".parse::<ToolId>(),
            Err(SelectorError::UnknownTool(id)) if id == "bard"
        ));
        assert_eq!(ToolId::parse("Claude"), None);
    }

    #[test]
    fn test_conditions() {
        let url = Condition::new(ConditionKind::Url, 10);
        assert!(url.matches("ここを見て https://example.com/a"));
        assert!(!url.matches("https:// だけ"));

        let long = Condition::new(ConditionKind::MinLength { min: 3 }, 15);
        assert!(long.matches("あいう"));
        assert!(!long.matches("あい"));

        let sns = Condition::new(ConditionKind::SnsContext, 10);
        assert!(sns.matches("Twitterで話題"));
        assert!(sns.matches("xでバズった"));
        assert!(!sns.matches("Xcode"));
    }

    #[test]
    fn test_serializes_lowercase_ids() {
        let json = serde_json::to_string(&ToolId::ChatGpt).unwrap();
        assert_eq!(json, "\"chatgpt\"");
        let json = serde_json::to_value(Condition::new(ConditionKind::MinLength { min: 500 }, 15)).unwrap();
        assert_eq!(json["type"], "min_length");
        assert_eq!(json["min"], 500);
        assert_eq!(json["score"], 15);
    }
}
