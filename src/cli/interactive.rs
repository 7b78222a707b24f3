//! Interactive generation session.
//!
//! Plain input lines are treated as code descriptions and generated
//! immediately; lines starting with `:` are session commands operating
//! on history, favorites, and the current code.

use std::io::{BufRead, Write};

use crate::config::{CodesmithConfig, PreferencesStore};
use crate::export;
use crate::generator::CodeGenerator;
use crate::prompt;
use crate::provider::create_provider;
use crate::types::{GenerationOptions, HistoryRecord, Language};

use super::InteractiveArgs;

/// Handle `codesmith interactive`.
pub async fn run_interactive(args: InteractiveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = CodesmithConfig::from_env();
    if !config.has_credentials() {
        eprintln!("❌ No API key found. Set GOOGLE_API_KEY (or GEMINI_API_KEY).");
        std::process::exit(1);
    }

    let store = PreferencesStore::new_default();
    let mut options = match store.load() {
        Ok(Some(saved)) => {
            println!("📂 Loaded saved preferences");
            saved
        }
        Ok(None) => GenerationOptions::default(),
        Err(e) => {
            eprintln!("⚠️  {e}");
            GenerationOptions::default()
        }
    };
    if let Some(ref language) = args.language {
        options.language = language.parse()?;
    }
    if let Some(ref model) = args.model {
        options.model.model = model.parse()?;
    }

    let provider = create_provider(options.model.model.clone(), &config)?;
    let mut generator = CodeGenerator::with_options(provider, options);

    println!("🤖 codesmith interactive session");
    println!(
        "   Language: {} | Model: {}",
        generator.options().language,
        generator.options().model.model
    );
    println!("   Describe what to generate, or type :help for commands.\n");

    // The code the follow-up commands act on, like an editor buffer.
    let mut current: Option<HistoryRecord> = None;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            if !run_command(command, &mut generator, &mut current, &store).await? {
                break;
            }
            continue;
        }

        generate(&mut generator, &mut current, line).await;
    }

    println!("👋 Session ended. {} generation(s).", generator.session().history().len());
    Ok(())
}

/// Run one `:command`. Returns `false` when the session should end.
async fn run_command(
    command: &str,
    generator: &mut CodeGenerator,
    current: &mut Option<HistoryRecord>,
    store: &PreferencesStore,
) -> Result<bool, Box<dyn std::error::Error>> {
    let (name, rest) = match command.split_once(' ') {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "help" | "h" => print_help(),
        "quit" | "q" | "exit" => return Ok(false),
        "history" => {
            let k = rest.parse().unwrap_or(5);
            show_history(generator, k);
        }
        "load" => match rest.parse::<usize>() {
            Ok(n) => load_record(generator, current, n),
            Err(_) => eprintln!("Usage: :load <number> (see :history)"),
        },
        "save" => {
            let record = match rest.parse::<usize>() {
                Ok(n) => nth_record(generator, n),
                Err(_) => generator.session().history().latest().cloned(),
            };
            match record {
                Some(record) => {
                    if generator.save_favorite(&record) {
                        println!("⭐ Added to favorites!");
                    } else {
                        println!("⭐ Already in favorites.");
                    }
                }
                None => eprintln!("Nothing to save yet."),
            }
        }
        "favorites" => show_favorites(generator),
        "export" => match (current.as_ref(), rest) {
            (None, _) => eprintln!("Nothing to export yet."),
            (_, "") => eprintln!("Usage: :export <directory>"),
            (Some(record), dir) => match export::write_record(record, std::path::Path::new(dir)) {
                Ok(path) => println!("⬇️  Saved to {}", path.display()),
                Err(e) => eprintln!("❌ {e}"),
            },
        },
        "clear" => {
            generator.clear_history();
            println!("🗑️  History cleared (favorites kept).");
        }
        "stats" => show_stats(generator),
        "templates" => {
            println!("📋 Templates:");
            for name in prompt::template_names() {
                println!("  - {name}");
            }
            println!("Use one with :use <name>");
        }
        "use" => {
            let found = prompt::template_names()
                .into_iter()
                .find(|name| name.eq_ignore_ascii_case(rest));
            match found.and_then(prompt::template) {
                Some(description) => generate(generator, current, description).await,
                None => eprintln!("Unknown template '{rest}'. See :templates."),
            }
        }
        "lang" => {
            if rest.is_empty() {
                println!("Current language: {}", generator.options().language);
            } else {
                let language: Language = rest.parse()?;
                let mut options = generator.options().clone();
                options.language = language;
                generator.set_options(options);
                println!("🔤 Language set to {}", generator.options().language);
            }
        }
        "explain" => follow_up(generator, current, FollowUp::Explain).await,
        "review" => follow_up(generator, current, FollowUp::Review).await,
        "improve" => follow_up(generator, current, FollowUp::Improve).await,
        "prefs" => match store.save(generator.options()) {
            Ok(()) => println!("💾 Preferences saved."),
            Err(e) => eprintln!("❌ {e}"),
        },
        _ => eprintln!("Unknown command :{name}. Type :help."),
    }
    Ok(true)
}

async fn generate(
    generator: &mut CodeGenerator,
    current: &mut Option<HistoryRecord>,
    description: &str,
) {
    println!("✨ Generating...");
    match generator.generate(description).await {
        Ok(record) => {
            println!("✅ Code generated successfully!\n");
            print_code(&record.code);
            *current = Some(record);
        }
        Err(e) => {
            eprintln!("❌ {e}");
            if e.is_upstream() {
                eprintln!("💡 Check your connection and API key, or try a simpler prompt.");
            }
        }
    }
}

enum FollowUp {
    Explain,
    Review,
    Improve,
}

async fn follow_up(
    generator: &CodeGenerator,
    current: &Option<HistoryRecord>,
    kind: FollowUp,
) {
    let Some(record) = current else {
        eprintln!("Nothing generated yet.");
        return;
    };
    let result = match kind {
        FollowUp::Explain => generator.explain(&record.code).await,
        FollowUp::Review => generator.review(&record.code).await,
        FollowUp::Improve => generator.improve(&record.code).await,
    };
    match (result, kind) {
        (Ok(text), FollowUp::Explain) => println!("📖 Explanation:\n\n{text}"),
        (Ok(text), FollowUp::Review) => println!("🔍 Review:\n\n{text}"),
        (Ok(text), FollowUp::Improve) => {
            println!("⚡ Improved:\n");
            print_code(&text);
        }
        (Err(e), _) => eprintln!("❌ {e}"),
    }
}

fn show_history(generator: &CodeGenerator, k: usize) {
    let history = generator.session().history();
    if history.is_empty() {
        println!("🔍 No history yet. Generate some code to see it here!");
        return;
    }
    println!("📚 Total: {} generation(s)", history.len());
    let total = history.len();
    for (offset, record) in history.recent(k).iter().enumerate() {
        println!(
            "  #{}: {} [{} / {}] {}",
            total - offset,
            record.preview(35),
            record.language,
            record.code_type,
            record.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
    }
}

fn nth_record(generator: &CodeGenerator, n: usize) -> Option<HistoryRecord> {
    generator
        .session()
        .history()
        .iter()
        .nth(n.checked_sub(1)?)
        .cloned()
}

fn load_record(generator: &CodeGenerator, current: &mut Option<HistoryRecord>, n: usize) {
    match nth_record(generator, n) {
        Some(record) => {
            println!("📂 Loaded generation #{n}:\n");
            print_code(&record.code);
            *current = Some(record);
        }
        None => eprintln!("No generation #{n}. See :history."),
    }
}

fn show_favorites(generator: &CodeGenerator) {
    let favorites = generator.session().favorites();
    if favorites.is_empty() {
        println!("⭐ No favorites yet. Pin one with :save.");
        return;
    }
    println!("⭐ {} favorite(s):", favorites.len());
    for (idx, record) in favorites.records().iter().enumerate() {
        println!(
            "  {}. {} [{}]",
            idx + 1,
            record.preview(35),
            record.language
        );
    }
}

fn show_stats(generator: &CodeGenerator) {
    let session = generator.session();
    println!("📊 Session statistics");
    println!("  Generations: {}", session.history().len());
    match session.last_language() {
        Some(language) => println!("  Last language: {language}"),
        None => println!("  Last language: N/A"),
    }
    if let Some(language) = session.most_used_language() {
        println!("  🏆 Most used: {language}");
    }
    println!("  Favorites: {}", session.favorites().len());
}

fn print_code(code: &str) {
    println!("{}", "─".repeat(60));
    println!("{}", code.trim_end());
    println!("{}", "─".repeat(60));
}

fn print_help() {
    println!("Commands:");
    println!("  :history [k]     show the last k generations (default 5)");
    println!("  :load <n>        load generation #n as the current code");
    println!("  :save [n]        pin generation #n (default latest) to favorites");
    println!("  :favorites       list pinned generations");
    println!("  :export <dir>    write the current code to a file in <dir>");
    println!("  :clear           clear history (favorites are kept)");
    println!("  :stats           session statistics");
    println!("  :templates       list built-in prompt templates");
    println!("  :use <name>      generate from a template");
    println!("  :lang [name]     show or set the target language");
    println!("  :explain         explain the current code");
    println!("  :review          review the current code");
    println!("  :improve         generate an improved version of the current code");
    println!("  :prefs           save current options as defaults");
    println!("  :quit            end the session");
}
