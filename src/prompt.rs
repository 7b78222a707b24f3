//! Prompt assembly for code generation and the follow-up actions.
//!
//! A generation prompt is built from the user's description plus the
//! configured [`GenerationOptions`]; the model never sees the options
//! struct itself, only the rendered text. The exact section order is
//! stable so downstream prompts remain cache-friendly:
//!
//! 1. requirement line naming the language
//! 2. the user's description
//! 3. code type, then optional framework and required-libraries lines
//! 4. an `Include:` bullet list of enabled quality options
//! 5. optional style-guide sentence
//! 6. a fixed production-quality closing instruction

use crate::types::{CodeStyle, Framework, GenerationOptions};

/// Render the full generation prompt for `description`.
pub fn build_prompt(description: &str, options: &GenerationOptions) -> String {
    let mut prompt = format!(
        "Generate {} code for the following requirement:\n\n{}\n\nCode Type: {}",
        options.language, description, options.code_type
    );

    if options.framework != Framework::None {
        prompt.push_str(&format!("\nFramework: {}", options.framework));
    }

    if !options.libraries.is_empty() {
        prompt.push_str(&format!(
            "\nRequired Libraries: {}",
            options.libraries.join(", ")
        ));
    }

    let inclusions = inclusion_phrases(options);
    if !inclusions.is_empty() {
        prompt.push_str("\n\nInclude:\n- ");
        prompt.push_str(&inclusions.join("\n- "));
    }

    if !matches!(options.code_style, CodeStyle::None | CodeStyle::AutoDetect) {
        prompt.push_str(&format!(
            "\n\nFollow {} style guidelines.",
            options.code_style
        ));
    }

    prompt.push_str("\n\nProvide clean, production-ready, well-documented code.");
    prompt
}

/// Bullet phrases for the enabled quality options, in fixed order.
fn inclusion_phrases(options: &GenerationOptions) -> Vec<&'static str> {
    let flags = [
        (options.comments, "detailed inline comments"),
        (options.docstrings, "comprehensive docstrings"),
        (options.examples, "usage examples"),
        (options.tests, "unit tests"),
        (options.error_handling, "proper error handling"),
        (options.type_hints, "type hints/annotations"),
        (options.optimize, "performance optimizations"),
        (options.logging, "logging statements"),
    ];
    flags
        .into_iter()
        .filter_map(|(enabled, phrase)| enabled.then_some(phrase))
        .collect()
}

/// Follow-up prompt asking for a plain-language explanation of `code`.
pub fn explain_prompt(code: &str) -> String {
    format!("Explain this code simply:\n\n{code}")
}

/// Follow-up prompt asking for a code review of `code`.
pub fn review_prompt(code: &str) -> String {
    format!("Review this code for quality, bugs, and improvements:\n\n{code}")
}

/// Follow-up prompt asking for an improved version of `code`.
pub fn improve_prompt(code: &str) -> String {
    format!("Improve this code:\n\n{code}")
}

/// Pre-written descriptions for common tasks, addressable by name.
const TEMPLATES: &[(&str, &str)] = &[
    (
        "User Authentication",
        "Create a user authentication system with password hashing, login, and session management",
    ),
    (
        "Data Analysis",
        "Create a script to read CSV data, perform statistical analysis, and create visualizations",
    ),
    (
        "REST API",
        "Build a REST API endpoint with GET, POST, PUT, DELETE methods and error handling",
    ),
    (
        "File Handler",
        "Create a file I/O handler class that can read, write, and process different file formats",
    ),
    (
        "Algorithm",
        "Implement an efficient sorting algorithm with time complexity analysis",
    ),
    (
        "Database CRUD",
        "Create a database handler class with Create, Read, Update, Delete operations",
    ),
];

/// Look up a template description by its display name.
pub fn template(name: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(template_name, _)| *template_name == name)
        .map(|(_, description)| *description)
}

/// Names of all built-in templates, in display order.
pub fn template_names() -> Vec<&'static str> {
    TEMPLATES.iter().map(|(name, _)| *name).collect()
}
