use super::analyzer::ScoreBoard;
use crate::tools::{ToolId, PRIORITY};

/// Below this top score nothing matched meaningfully.
const FALLBACK_TRIGGER: u32 = 5;
const FALLBACK_SCORE: u32 = 20;
pub const FALLBACK_TOOL: ToolId = ToolId::ChatGpt;

/// Descending score, ties broken by priority order.
pub fn rank(scores: &ScoreBoard) -> [ToolId; PRIORITY.len()] {
    let mut ranked = PRIORITY;
    ranked.sort_by(|a, b| {
        scores[*b]
            .cmp(&scores[*a])
            .then_with(|| a.priority().cmp(&b.priority()))
    });
    ranked
}

/// Lift the general conversational tool when no tool scored meaningfully.
/// Returns whether the fallback fired.
pub fn apply_fallback(scores: &mut ScoreBoard, ranked: &mut [ToolId; PRIORITY.len()]) -> bool {
    if scores[ranked[0]] >= FALLBACK_TRIGGER {
        return false;
    }
    scores[FALLBACK_TOOL] = scores[FALLBACK_TOOL].max(FALLBACK_SCORE);
    *ranked = rank(scores);
    true
}

/// Integer percentage of the total, rounded half up; 0 when nothing scored.
pub fn confidence(score: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_breaks_ties_by_priority() {
        let mut scores = ScoreBoard::default();
        scores[ToolId::ChatGpt] = 10;
        scores[ToolId::Perplexity] = 10;
        scores[ToolId::Grok] = 15;
        let ranked = rank(&scores);
        assert_eq!(
            ranked,
            [
                ToolId::Grok,
                ToolId::Perplexity,
                ToolId::ChatGpt,
                ToolId::Claude,
                ToolId::Gemini,
                ToolId::Copilot,
            ]
        );
    }

    #[test]
    fn test_fallback_lifts_conversational_tool() {
        let mut scores = ScoreBoard::default();
        let mut ranked = rank(&scores);
        assert_eq!(ranked[0], ToolId::Claude);
        assert!(apply_fallback(&mut scores, &mut ranked));
        assert_eq!(ranked[0], ToolId::ChatGpt);
        assert_eq!(scores[ToolId::ChatGpt], 20);
    }

    #[test]
    fn test_fallback_not_applied_at_trigger() {
        let mut scores = ScoreBoard::default();
        scores[ToolId::Grok] = 5;
        let mut ranked = rank(&scores);
        assert!(!apply_fallback(&mut scores, &mut ranked));
        assert_eq!(ranked[0], ToolId::Grok);
        assert_eq!(scores[ToolId::ChatGpt], 0);
    }

    #[test]
    fn test_confidence_rounds_half_up() {
        assert_eq!(confidence(0, 0), 0);
        assert_eq!(confidence(20, 20), 100);
        assert_eq!(confidence(1, 3), 33);
        assert_eq!(confidence(2, 3), 67);
        assert_eq!(confidence(1, 8), 13);
    }
}
