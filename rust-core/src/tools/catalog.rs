use super::{Condition, ConditionKind, Plan, ToolDefinition, ToolId, PRIORITY};

/// Tool table, indexed by [`ToolId::priority`].
pub static TOOLS: [ToolDefinition; 6] = [
    ToolDefinition {
        id: ToolId::Claude,
        name: "Claude Pro",
        plan: Plan::Paid,
        color: "#D97706",
        web_url: "https://claude.ai/new",
        keywords: &[
            "コード", "コーディング", "プログラム", "プログラミング",
            "バグ", "実装", "リファクタ", "リファクタリング",
            "デバッグ", "設計", "アーキテクチャ", "API",
            "関数", "クラス", "モジュール", "ライブラリ",
            "フレームワーク", "テスト", "ユニットテスト",
            "HTML", "CSS", "JavaScript", "Python", "Java", "TypeScript",
            "React", "Vue", "Node", "SQL", "データベース", "DB",
            "Git", "GitHub", "Docker", "AWS", "Azure",
            "アルゴリズム", "計算量", "O(n)", "ソート",
            "エラー", "スタックトレース", "ログ",
            "型", "変数", "配列", "オブジェクト",
            "コンパイル", "ビルド", "デプロイ",
        ],
        conditions: &[Condition::new(ConditionKind::MinLength { min: 500 }, 15)],
    },
    ToolDefinition {
        id: ToolId::Gemini,
        name: "Gemini Pro",
        plan: Plan::Paid,
        color: "#4285F4",
        web_url: "https://gemini.google.com/app",
        keywords: &[
            "画像", "写真", "動画", "YouTube",
            "Gmail", "スプレッドシート", "Google", "ドライブ",
            "Googleドキュメント", "Googleスライド",
            "マップ", "Google Maps", "カレンダー",
            "Android", "Pixel", "Chrome拡張",
            "OCR", "図", "グラフ", "チャート", "スクリーンショット",
            "PDF", "ファイル分析",
        ],
        conditions: &[
            Condition::new(ConditionKind::Url, 10),
            Condition::new(ConditionKind::ImageMention, 20),
        ],
    },
    ToolDefinition {
        id: ToolId::Perplexity,
        name: "Perplexity",
        plan: Plan::Free,
        color: "#20B8CD",
        web_url: "https://www.perplexity.ai",
        keywords: &[
            "最新", "ニュース", "調べて", "検索",
            "ソース", "出典", "論文", "統計",
            "比較検討", "ファクトチェック", "事実確認",
            "いつ", "何年", "現在", "今",
            "データ", "数値", "根拠", "情報源",
            "リサーチ", "調査", "市場", "業界",
            "引用", "参考文献", "エビデンス",
        ],
        conditions: &[Condition::new(ConditionKind::QuestionLatest, 15)],
    },
    ToolDefinition {
        id: ToolId::Copilot,
        name: "Copilot",
        plan: Plan::Free,
        color: "#7F5AF0",
        web_url: "https://copilot.microsoft.com",
        keywords: &[
            "Excel", "Word", "PowerPoint", "Outlook",
            "Teams", "Windows", "Office", "Microsoft",
            "メール作成", "ビジネス文書", "議事録",
            "スライド", "プレゼン", "プレゼンテーション",
            "表計算", "マクロ", "VBA",
            "OneDrive", "SharePoint", "Bing",
            "報告書", "企画書", "提案書", "見積書",
        ],
        conditions: &[],
    },
    ToolDefinition {
        id: ToolId::Grok,
        name: "Grok",
        plan: Plan::Free,
        color: "#000000",
        web_url: "https://grok.com",
        keywords: &[
            "X", "Twitter", "トレンド", "バズ", "SNS",
            "ミーム", "炎上", "話題", "ネタ",
            "ツイート", "ポスト", "リポスト",
            "フォロワー", "インプレッション",
            "イーロン", "Elon", "Musk",
        ],
        conditions: &[Condition::new(ConditionKind::SnsContext, 10)],
    },
    ToolDefinition {
        id: ToolId::ChatGpt,
        name: "ChatGPT",
        plan: Plan::Free,
        color: "#10A37F",
        web_url: "https://chatgpt.com",
        keywords: &[
            "教えて", "とは", "意味", "おすすめ", "雑談",
            "相談", "アイデア", "ブレスト",
            "物語", "小説", "詩", "歌詞", "作文",
            "翻訳", "英語", "日本語",
            "料理", "レシピ", "旅行", "健康",
            "簡単に", "わかりやすく",
        ],
        conditions: &[],
    },
];

/// Look up a tool by its string id. Unknown ids yield `None`.
pub fn get_tool_info(tool_id: &str) -> Option<&'static ToolDefinition> {
    ToolId::parse(tool_id).map(ToolId::definition)
}

/// Every tool definition, in priority order.
pub fn all_tools() -> impl Iterator<Item = &'static ToolDefinition> {
    PRIORITY.iter().map(|tool| tool.definition())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tool_info() {
        let info = get_tool_info("gemini").unwrap();
        assert_eq!(info.name, "Gemini Pro");
        assert_eq!(info.plan, Plan::Paid);
        assert_eq!(info.plan.label(), "課金");
        assert!(get_tool_info("unknown").is_none());
        assert!(get_tool_info("").is_none());
    }

    #[test]
    fn test_all_tools_in_priority_order() {
        let ids: Vec<ToolId> = all_tools().map(|t| t.id).collect();
        assert_eq!(ids, PRIORITY.to_vec());
    }

    #[test]
    fn test_only_two_paid_tools() {
        let paid: Vec<&str> = all_tools()
            .filter(|t| t.plan == Plan::Paid)
            .map(|t| t.name)
            .collect();
        assert_eq!(paid, vec!["Claude Pro", "Gemini Pro"]);
    }
}
