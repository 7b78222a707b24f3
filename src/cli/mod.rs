//! CLI entry point for codesmith.

pub mod interactive;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Codesmith CLI
#[derive(Parser, Debug)]
#[command(name = "codesmith", version, about = "codesmith — AI code generation CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate code from a one-line description
    Generate(GenerateArgs),
    /// Start an interactive generation session
    Interactive(InteractiveArgs),
    /// List supported languages and their file extensions
    Languages,
    /// List built-in prompt templates
    Templates,
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// What the code should do (positional)
    pub description: Option<String>,

    /// Use a built-in template as the description (see `templates`)
    #[arg(long, conflicts_with = "description")]
    pub template: Option<String>,

    /// Target language (e.g. python, rust, "C++")
    #[arg(short, long)]
    pub language: Option<String>,

    /// What to generate: function, class, script, algorithm, ...
    #[arg(long)]
    pub code_type: Option<String>,

    /// Framework context (e.g. react, django, "Spring Boot")
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Library the code must use (repeatable)
    #[arg(long = "library")]
    pub libraries: Vec<String>,

    /// Style guide to follow (e.g. "PEP 8", airbnb, none)
    #[arg(long)]
    pub style: Option<String>,

    /// Model to use (e.g. gemini-2.0-flash-exp)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Temperature (0.0 - 1.0)
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Max output tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Directory to write the generated file into
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export as a Markdown document instead of a bare source file
    #[arg(long, requires = "output")]
    pub markdown: bool,

    /// Also print a plain-language explanation
    #[arg(long)]
    pub explain: bool,

    /// Also print a code review
    #[arg(long)]
    pub review: bool,
}

/// Arguments for the `interactive` subcommand.
#[derive(Parser, Debug)]
pub struct InteractiveArgs {
    /// Starting language (changeable in the session)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Model to use (e.g. gemini-2.0-flash-exp)
    #[arg(short, long)]
    pub model: Option<String>,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
