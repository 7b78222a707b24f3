//! Exporting generated code to files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::{HistoryRecord, Language};

/// File extension for a programming language. Unknown languages get a
/// plain-text extension.
pub fn file_extension(language: &Language) -> &'static str {
    match language {
        Language::Python => "py",
        Language::JavaScript => "js",
        Language::TypeScript => "ts",
        Language::Java => "java",
        Language::Cpp => "cpp",
        Language::CSharp => "cs",
        Language::Go => "go",
        Language::Ruby => "rb",
        Language::Php => "php",
        Language::Swift => "swift",
        Language::Kotlin => "kt",
        Language::Rust => "rs",
        Language::Sql => "sql",
        Language::Html => "html",
        Language::Css => "css",
        Language::Other(_) => "txt",
    }
}

/// Default download name for code in `language`, e.g. `code.py`.
pub fn suggested_filename(language: &Language) -> String {
    format!("code.{}", file_extension(language))
}

/// Render a record as a standalone Markdown document.
pub fn render_markdown(record: &HistoryRecord) -> String {
    format!(
        "# Generated Code\n\n\
         - **Language:** {}\n\
         - **Type:** {}\n\
         - **Generated:** {} UTC\n\n\
         ## Prompt\n\n\
         {}\n\n\
         ## Code\n\n\
         ```{}\n\
         {}\n\
         ```\n",
        record.language,
        record.code_type,
        record.timestamp.format("%Y-%m-%d %H:%M:%S"),
        record.prompt,
        record.language.to_string().to_lowercase(),
        record.code.trim_end()
    )
}

/// Write the record's code to `dir` under the suggested filename,
/// creating the directory if needed. Returns the path written.
pub fn write_record(record: &HistoryRecord, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(suggested_filename(&record.language));
    fs::write(&path, &record.code)?;
    Ok(path)
}

/// Write the record as a Markdown document to `dir`, creating the
/// directory if needed. Returns the path written.
pub fn write_markdown(record: &HistoryRecord, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join("code.md");
    fs::write(&path, render_markdown(record))?;
    Ok(path)
}
