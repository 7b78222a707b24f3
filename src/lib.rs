//! codesmith — AI code generation toolkit
//!
//! Turns a typed description of what code to generate (language, code
//! type, framework, quality options) into a prompt, runs it against
//! Google Gemini, and keeps the results in a bounded per-session
//! history with favorites and export helpers.
//!
//! # Quick Start
//!
//! ```no_run
//! use codesmith::prelude::*;
//!
//! # async fn example() -> codesmith::error::Result<()> {
//! let config = CodesmithConfig::from_env();
//! let options = GenerationOptions::builder()
//!     .language(Language::Rust)
//!     .tests(true)
//!     .build();
//! let provider = codesmith::provider::create_provider(options.model.model.clone(), &config)?;
//! let mut generator = CodeGenerator::with_options(provider, options);
//!
//! let record = generator.generate("parse a CSV file into structs").await?;
//! println!("{}", record.code);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod models;
pub mod prelude;
pub mod prompt;
pub mod provider;
pub mod session;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
