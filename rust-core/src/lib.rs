pub mod classifier;
pub mod prompt;
pub mod tools;
pub mod patterns;
pub mod rules;
pub mod config;
pub mod error;
pub mod validation;
pub mod observability;

pub use classifier::{classify, ClassificationResult, ToolOutcome};
pub use prompt::{generate, get_recommended_hints, RecommendedHints};
pub use tools::{get_tool_info, ToolDefinition, ToolId};
pub use config::SelectorConfig;
pub use error::{SelectorError, Result};
