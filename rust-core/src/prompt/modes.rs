//! Operating-mode heuristics per tool.
//!
//! Each tool walks an ordered list of rules over the raw input and takes the
//! first match. The multimodal tool also picks a chat persistence type and the
//! search tool a focus category; both are decided independently of the mode.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::patterns::{self, text_len, compile};
use crate::rules::{first_match, Rule};
use crate::tools::ToolId;

static STEPWISE_LOGIC: Lazy<Regex> = Lazy::new(|| compile(r"ステップバイステップ|段階的|論理的|証明|推論"));
static MULTI_TURN: Lazy<Regex> = Lazy::new(|| compile(r"続き|前回|履歴|添付|やり取り|会話"));
static MEDIA: Lazy<Regex> =
    Lazy::new(|| compile(r"画像|写真|動画|YouTube|図|グラフ|スクリーンショット|スクショ|PDF"));
static REASONING_OR_COMPARISON: Lazy<Regex> =
    Lazy::new(|| compile(r"分析|考察|ステップ|段階的|比較|違い|どちら"));
static THOROUGH: Lazy<Regex> = Lazy::new(|| compile(r"詳しく|徹底的|網羅|詳細|深く|比較検討"));
static ACADEMIC: Lazy<Regex> = Lazy::new(|| compile(r"論文|学術|研究|参考文献"));
static FORUM: Lazy<Regex> = Lazy::new(|| compile(r"(?i)reddit|口コミ|評判|掲示板|レビュー"));
static COMPUTATION: Lazy<Regex> = Lazy::new(|| compile(r"計算|数式|方程式|確率|統計"));
static WRITING: Lazy<Regex> = Lazy::new(|| compile(r"文章|作文|執筆|添削|書いて"));
static DESIGN_OR_COMPLEX: Lazy<Regex> = Lazy::new(|| compile(r"分析|複雑|設計|戦略|計画"));
static RESEARCH: Lazy<Regex> = Lazy::new(|| compile(r"調べて|検索|ニュース|リサーチ|最新"));
static REASONING: Lazy<Regex> = Lazy::new(|| compile(r"なぜ|理由|考えて|推論|論理"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    // coding assistant
    ExtendedThinking,
    HighCapability,
    Lightweight,
    // multimodal assistant
    DeepThinking,
    Fast,
    Standard,
    // general conversational assistant
    Thinking,
    Instant,
    // search assistant
    ProSearch,
    QuickSearch,
    // productivity assistant
    ThinkDeeper,
    QuickResponse,
    // social assistant
    DeepSearch,
    Think,
    GrokStandard,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::ExtendedThinking => "Extended Thinking（拡張思考）",
            Mode::HighCapability => "Opus（高性能モデル）",
            Mode::Lightweight => "Haiku（軽量・高速）",
            Mode::DeepThinking => "思考モード（Deep Think）",
            Mode::Fast => "高速モード（Flash）",
            Mode::Standard => "標準モード（Pro）",
            Mode::Thinking => "Thinking（じっくり思考）",
            Mode::Instant => "Instant（即答）",
            Mode::ProSearch => "Pro検索",
            Mode::QuickSearch => "クイック検索",
            Mode::ThinkDeeper => "Think Deeper（じっくり考える）",
            Mode::QuickResponse => "クイック応答",
            Mode::DeepSearch => "DeepSearch（深掘り検索）",
            Mode::Think => "Think（思考モード）",
            Mode::GrokStandard => "標準",
        }
    }
}

/// Conversation persistence for tools that offer a temporary chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
    Persistent,
    Temporary,
}

impl ChatType {
    pub fn label(self) -> &'static str {
        match self {
            ChatType::Persistent => "通常チャット（履歴を残す）",
            ChatType::Temporary => "一時チャット（履歴を残さない）",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFocus {
    Academic,
    Video,
    Community,
    Computation,
    Writing,
}

impl SearchFocus {
    pub fn label(self) -> &'static str {
        match self {
            SearchFocus::Academic => "Academic（学術論文）",
            SearchFocus::Video => "Video（動画）",
            SearchFocus::Community => "Social（掲示板・口コミ）",
            SearchFocus::Computation => "Math（計算）",
            SearchFocus::Writing => "Writing（文章作成）",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeRecommendation {
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_type: Option<ChatType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<SearchFocus>,
}

impl ModeRecommendation {
    fn mode_only(mode: Mode) -> Self {
        Self {
            mode,
            chat_type: None,
            focus: None,
        }
    }
}

const CLAUDE_MODES: &[Rule<Mode>] = &[
    Rule { when: |t| STEPWISE_LOGIC.is_match(t), then: Mode::ExtendedThinking },
    Rule {
        when: |t| patterns::has_code_context(t) || text_len(t) > 500,
        then: Mode::HighCapability,
    },
    Rule { when: |t| text_len(t) < 100, then: Mode::Lightweight },
];

const GEMINI_MODES: &[Rule<Mode>] = &[
    Rule {
        when: |t| patterns::ANALYSIS.is_match(t) || text_len(t) > 500,
        then: Mode::DeepThinking,
    },
    Rule { when: |t| text_len(t) < 100 && !MEDIA.is_match(t), then: Mode::Fast },
];

const CHATGPT_MODES: &[Rule<Mode>] = &[Rule {
    when: |t| REASONING_OR_COMPARISON.is_match(t) || text_len(t) > 300,
    then: Mode::Thinking,
}];

const PERPLEXITY_MODES: &[Rule<Mode>] = &[Rule { when: |t| THOROUGH.is_match(t), then: Mode::ProSearch }];

const COPILOT_MODES: &[Rule<Mode>] = &[Rule {
    when: |t| DESIGN_OR_COMPLEX.is_match(t) || text_len(t) > 300,
    then: Mode::ThinkDeeper,
}];

const GROK_MODES: &[Rule<Mode>] = &[
    Rule { when: |t| RESEARCH.is_match(t), then: Mode::DeepSearch },
    Rule { when: |t| REASONING.is_match(t), then: Mode::Think },
];

const SEARCH_FOCUS_RULES: &[Rule<SearchFocus>] = &[
    Rule { when: |t| ACADEMIC.is_match(t), then: SearchFocus::Academic },
    Rule { when: |t| patterns::VIDEO.is_match(t), then: SearchFocus::Video },
    Rule { when: |t| FORUM.is_match(t), then: SearchFocus::Community },
    Rule { when: |t| COMPUTATION.is_match(t), then: SearchFocus::Computation },
    Rule { when: |t| WRITING.is_match(t), then: SearchFocus::Writing },
];

/// Ordered mode rules for `tool` and the mode used when none matches.
fn mode_rules(tool: ToolId) -> (&'static [Rule<Mode>], Mode) {
    match tool {
        ToolId::Claude => (CLAUDE_MODES, Mode::HighCapability),
        ToolId::Gemini => (GEMINI_MODES, Mode::Standard),
        ToolId::ChatGpt => (CHATGPT_MODES, Mode::Instant),
        ToolId::Perplexity => (PERPLEXITY_MODES, Mode::QuickSearch),
        ToolId::Copilot => (COPILOT_MODES, Mode::QuickResponse),
        ToolId::Grok => (GROK_MODES, Mode::GrokStandard),
    }
}

fn chat_type(text: &str) -> ChatType {
    if MULTI_TURN.is_match(text) {
        ChatType::Persistent
    } else {
        ChatType::Temporary
    }
}

fn search_focus(text: &str) -> Option<SearchFocus> {
    first_match(SEARCH_FOCUS_RULES, text)
}

/// Pick the operating mode (and secondary dimension, if any) for `tool`.
pub fn recommend(tool: ToolId, text: &str) -> ModeRecommendation {
    let (rules, default) = mode_rules(tool);
    let mode = first_match(rules, text).unwrap_or(default);

    match tool {
        ToolId::Gemini => ModeRecommendation {
            mode,
            chat_type: Some(chat_type(text)),
            focus: None,
        },
        ToolId::Perplexity => ModeRecommendation {
            mode,
            chat_type: None,
            focus: search_focus(text),
        },
        _ => ModeRecommendation::mode_only(mode),
    }
}
