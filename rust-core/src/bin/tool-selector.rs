use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::io::{self, Read};
use std::path::PathBuf;
use tool_selector_core::config::{OutputFormat, SelectorConfig};
use tool_selector_core::observability::setup_logging;
use tool_selector_core::tools::all_tools;
use tool_selector_core::validation::validate_input;
use tool_selector_core::{classify, prompt, ClassificationResult, ToolId};

#[derive(Parser, Debug)]
#[command(
    name = "tool-selector",
    about = "Recommend an AI assistant for a request and tailor the prompt to it",
    arg_required_else_help = true
)]
struct Cli {
    /// TOML config file.
    #[arg(long = "config", short = 'c', value_name = "FILE", global = true)]
    config_file: Option<PathBuf>,

    /// Output format (overrides the config file).
    #[arg(long, short = 'o', value_enum, global = true)]
    output: Option<OutputArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a request, then print the prompt and hints for the chosen tool.
    Recommend {
        /// Request text; read from stdin when omitted.
        text: Vec<String>,
        /// Use this tool instead of the top-ranked one.
        #[arg(long)]
        tool: Option<ToolId>,
    },
    /// Print the optimized prompt for a tool.
    Prompt {
        #[arg(long)]
        tool: ToolId,
        text: Vec<String>,
    },
    /// Print mode hints for a tool.
    Hints {
        #[arg(long)]
        tool: ToolId,
        text: Vec<String>,
    },
    /// List candidate tools in priority order.
    Tools,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputArg {
    Text,
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SelectorConfig::load_or_default(cli.config_file.as_deref())
        .context("failed to load config")?;
    setup_logging(&config.logging);

    let format = cli.output.map(OutputFormat::from).unwrap_or(config.output.format);

    match cli.command {
        Command::Recommend { text, tool } => {
            let input = read_input(text, &config)?;
            let result = classify(&input).context("テキストを入力してください")?;
            print_recommendation(&result, tool, &input, format)?;
        }
        Command::Prompt { tool, text } => {
            let input = read_input(text, &config)?;
            let optimized = prompt::generate_for(tool, &input);
            match format {
                OutputFormat::Text => println!("{}", optimized),
                OutputFormat::Json => println!("{}", json!({ "tool": tool, "prompt": optimized })),
            }
        }
        Command::Hints { tool, text } => {
            let input = read_input(text, &config)?;
            let hints = prompt::recommended_hints_for(tool, &input);
            match format {
                OutputFormat::Text => hints.hints.iter().for_each(|line| println!("{}", line)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&hints)?),
            }
        }
        Command::Tools => match format {
            OutputFormat::Text => {
                for tool in all_tools() {
                    println!("{:<11} {:<11} {} {}", tool.id, tool.name, tool.plan.label(), tool.web_url);
                }
            }
            OutputFormat::Json => {
                let tools: Vec<_> = all_tools().collect();
                println!("{}", serde_json::to_string_pretty(&tools)?);
            }
        },
    }

    Ok(())
}

/// Join positional words, or read stdin when none were given, then validate.
fn read_input(words: Vec<String>, config: &SelectorConfig) -> Result<String> {
    let input = if words.is_empty() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        words.join(" ")
    };

    validate_input(&input, config.input.max_chars).context("invalid input")?;
    Ok(input)
}

fn print_recommendation(
    result: &ClassificationResult,
    override_tool: Option<ToolId>,
    input: &str,
    format: OutputFormat,
) -> Result<()> {
    let selected = match override_tool {
        Some(tool) => result
            .get(tool)
            .with_context(|| format!("no outcome for {}", tool))?,
        None => result.recommended(),
    };
    let definition = selected.definition();
    let optimized = prompt::generate_for(selected.tool, input);
    let hints = prompt::recommended_hints_for(selected.tool, input);

    match format {
        OutputFormat::Json => {
            let body = json!({
                "classification": result,
                "selected": selected,
                "prompt": optimized,
                "hints": hints.hints,
                "web_url": definition.web_url,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => {
            println!(
                "推奨: {} [{}] {}%",
                definition.name,
                definition.plan.label(),
                selected.confidence
            );
            println!("理由: {}", selected.reason);
            let alternatives: Vec<String> = result
                .all()
                .iter()
                .filter(|outcome| outcome.tool != selected.tool)
                .take(2)
                .map(|outcome| format!("{} {}%", outcome.definition().name, outcome.confidence))
                .collect();
            println!("代替: {}", alternatives.join(" / "));
            println!();
            println!("{}", optimized);
            println!();
            for line in &hints.hints {
                println!("{}", line);
            }
            println!("開く: {}", definition.web_url);
        }
    }

    Ok(())
}
