//! Tests for the public option types, prompt rendering, and export
//! formatting, pinned to their exact user-facing strings.

use pretty_assertions::assert_eq;

use codesmith::export::{file_extension, render_markdown};
use codesmith::prompt::build_prompt;
use codesmith::types::{
    CodeStyle, CodeType, Framework, GenerationOptions, HistoryRecord, Language,
};

#[test]
fn language_display_matches_the_ui_labels() {
    assert_eq!(Language::Cpp.to_string(), "C++");
    assert_eq!(Language::CSharp.to_string(), "C#");
    assert_eq!(Language::Php.to_string(), "PHP");
    assert_eq!(Language::Sql.to_string(), "SQL");
    assert_eq!(CodeType::ApiEndpoint.to_string(), "API Endpoint");
    assert_eq!(Framework::NextJs.to_string(), "Next.js");
    assert_eq!(CodeStyle::Pep8.to_string(), "PEP 8");
}

#[test]
fn language_parsing_accepts_labels_and_keeps_unknowns() {
    assert_eq!("C++".parse::<Language>(), Ok(Language::Cpp));
    assert_eq!("typescript".parse::<Language>(), Ok(Language::TypeScript));
    assert_eq!(
        "Zig".parse::<Language>(),
        Ok(Language::Other("Zig".to_string()))
    );
    assert_eq!("vue.js".parse::<Framework>(), Ok(Framework::Vue));
}

#[test]
fn every_supported_language_has_an_extension() {
    let table: Vec<(String, &str)> = Language::supported()
        .iter()
        .map(|language| (language.to_string(), file_extension(language)))
        .collect();

    let expected = vec![
        ("Python".to_string(), "py"),
        ("JavaScript".to_string(), "js"),
        ("TypeScript".to_string(), "ts"),
        ("Java".to_string(), "java"),
        ("C++".to_string(), "cpp"),
        ("C#".to_string(), "cs"),
        ("Go".to_string(), "go"),
        ("Ruby".to_string(), "rb"),
        ("PHP".to_string(), "php"),
        ("Swift".to_string(), "swift"),
        ("Kotlin".to_string(), "kt"),
        ("Rust".to_string(), "rs"),
        ("SQL".to_string(), "sql"),
        ("HTML".to_string(), "html"),
        ("CSS".to_string(), "css"),
    ];
    assert_eq!(table, expected);
}

#[test]
fn fully_loaded_prompt_renders_every_section() {
    let options = GenerationOptions::builder()
        .language(Language::JavaScript)
        .code_type(CodeType::Component)
        .framework(Framework::React)
        .libraries(vec!["axios".to_string()])
        .comments(true)
        .docstrings(true)
        .examples(true)
        .tests(true)
        .error_handling(true)
        .type_hints(true)
        .optimize(true)
        .logging(true)
        .code_style(CodeStyle::Airbnb)
        .build();

    let expected = "Generate JavaScript code for the following requirement:\n\
                    \n\
                    Build a login form\n\
                    \n\
                    Code Type: Component\n\
                    Framework: React\n\
                    Required Libraries: axios\n\
                    \n\
                    Include:\n\
                    - detailed inline comments\n\
                    - comprehensive docstrings\n\
                    - usage examples\n\
                    - unit tests\n\
                    - proper error handling\n\
                    - type hints/annotations\n\
                    - performance optimizations\n\
                    - logging statements\n\
                    \n\
                    Follow Airbnb style guidelines.\n\
                    \n\
                    Provide clean, production-ready, well-documented code.";

    assert_eq!(build_prompt("Build a login form", &options), expected);
}

#[test]
fn markdown_export_renders_the_exact_document() {
    let record = HistoryRecord::new(
        "add two numbers",
        "def add(a, b):\n    return a + b\n",
        Language::Python,
        CodeType::Function,
    );

    let expected = format!(
        "# Generated Code\n\
         \n\
         - **Language:** Python\n\
         - **Type:** Function\n\
         - **Generated:** {} UTC\n\
         \n\
         ## Prompt\n\
         \n\
         add two numbers\n\
         \n\
         ## Code\n\
         \n\
         ```python\n\
         def add(a, b):\n    return a + b\n\
         ```\n",
        record.timestamp.format("%Y-%m-%d %H:%M:%S")
    );

    assert_eq!(render_markdown(&record), expected);
}
