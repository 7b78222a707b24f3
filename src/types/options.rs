//! Generation options: the typed form of what the user asks for.
//!
//! Every field the assembled prompt can mention lives here as an
//! enumerated type or explicit flag; there is no open-ended settings map.

use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::models::GeminiModel;

/// Target programming language for generated code.
///
/// Display strings are the user-facing names ("C++", not "Cpp");
/// parsing is case-insensitive and unrecognized names parse into
/// `Other`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[default]
    Python,
    JavaScript,
    TypeScript,
    Java,
    #[strum(serialize = "C++")]
    Cpp,
    #[strum(serialize = "C#")]
    CSharp,
    Go,
    Ruby,
    #[strum(serialize = "PHP")]
    Php,
    Swift,
    Kotlin,
    Rust,
    #[strum(serialize = "SQL")]
    Sql,
    #[strum(serialize = "HTML")]
    Html,
    #[strum(serialize = "CSS")]
    Css,
    /// Any language outside the built-in set.
    #[strum(default)]
    Other(String),
}

impl Language {
    /// The built-in language set, in display order.
    pub fn supported() -> &'static [Language] {
        &[
            Language::Python,
            Language::JavaScript,
            Language::TypeScript,
            Language::Java,
            Language::Cpp,
            Language::CSharp,
            Language::Go,
            Language::Ruby,
            Language::Php,
            Language::Swift,
            Language::Kotlin,
            Language::Rust,
            Language::Sql,
            Language::Html,
            Language::Css,
        ]
    }
}

/// What shape of code to generate.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum CodeType {
    #[default]
    Function,
    Class,
    #[strum(serialize = "Full Program")]
    FullProgram,
    Script,
    Algorithm,
    #[strum(serialize = "API Endpoint")]
    ApiEndpoint,
    #[strum(serialize = "Database Query")]
    DatabaseQuery,
    Component,
}

/// Optional framework context for the prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Framework {
    /// No framework; contributes nothing to the prompt.
    #[default]
    None,
    React,
    #[strum(serialize = "Vue.js")]
    Vue,
    Angular,
    Django,
    Flask,
    #[strum(serialize = "FastAPI")]
    FastApi,
    #[strum(serialize = "Express.js")]
    Express,
    #[strum(serialize = "Spring Boot")]
    SpringBoot,
    #[strum(serialize = "Next.js")]
    NextJs,
    Laravel,
    #[strum(serialize = "Ruby on Rails")]
    Rails,
    #[strum(serialize = "ASP.NET")]
    AspNet,
    /// Any framework outside the built-in set.
    #[strum(default)]
    Other(String),
}

/// Style guide the generated code should follow.
///
/// `AutoDetect` and `None` contribute nothing to the prompt.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum CodeStyle {
    #[strum(serialize = "Auto-detect")]
    AutoDetect,
    #[default]
    #[strum(serialize = "PEP 8")]
    Pep8,
    Airbnb,
    Google,
    #[strum(serialize = "Standard JS")]
    StandardJs,
    #[strum(serialize = "PSR")]
    Psr,
    None,
}

/// Indentation preference.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum IndentStyle {
    #[default]
    #[strum(serialize = "Spaces (4)")]
    Spaces4,
    #[strum(serialize = "Spaces (2)")]
    Spaces2,
    Tabs,
}

/// Model parameters forwarded to the upstream provider.
///
/// `model` comes last so a `Custom` id, which serializes as a nested
/// table, renders after the scalar fields in TOML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelSettings {
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f64>,
    pub model: GeminiModel,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            temperature: Some(0.7),
            max_tokens: Some(2048),
            top_p: None,
            model: GeminiModel::default(),
        }
    }
}

/// Everything the prompt assembler needs to know besides the description
/// itself. Defaults match a plain "generate a Python function" request.
#[derive(Debug, Clone, Builder, Serialize, Deserialize, PartialEq)]
pub struct GenerationOptions {
    #[builder(default)]
    pub language: Language,
    #[builder(default)]
    pub code_type: CodeType,
    #[builder(default)]
    pub framework: Framework,
    /// Libraries the generated code must use.
    #[builder(default)]
    pub libraries: Vec<String>,
    /// Add detailed inline comments.
    #[builder(default = true)]
    pub comments: bool,
    /// Add comprehensive docstrings.
    #[builder(default)]
    pub docstrings: bool,
    /// Include usage examples.
    #[builder(default)]
    pub examples: bool,
    /// Generate unit tests alongside the code.
    #[builder(default)]
    pub tests: bool,
    /// Add proper error handling.
    #[builder(default = true)]
    pub error_handling: bool,
    /// Add type hints/annotations.
    #[builder(default)]
    pub type_hints: bool,
    /// Ask for performance optimizations.
    #[builder(default = true)]
    pub optimize: bool,
    /// Add logging statements.
    #[builder(default)]
    pub logging: bool,
    #[builder(default)]
    pub code_style: CodeStyle,
    #[builder(default)]
    pub indent: IndentStyle,
    #[builder(default)]
    pub model: ModelSettings,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            code_type: CodeType::default(),
            framework: Framework::default(),
            libraries: Vec::new(),
            comments: true,
            docstrings: false,
            examples: false,
            tests: false,
            error_handling: true,
            type_hints: false,
            optimize: true,
            logging: false,
            code_style: CodeStyle::default(),
            indent: IndentStyle::default(),
            model: ModelSettings::default(),
        }
    }
}
