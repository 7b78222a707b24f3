//! codesmith CLI binary entry point.

use clap::Parser;

use codesmith::cli::{Cli, Commands, GenerateArgs};
use codesmith::config::{CodesmithConfig, PreferencesStore};
use codesmith::export;
use codesmith::generator::CodeGenerator;
use codesmith::prompt;
use codesmith::provider::create_provider;
use codesmith::types::{GenerationOptions, Language};

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => handle_generate(args).await,
        Commands::Interactive(args) => codesmith::cli::interactive::run_interactive(args).await,
        Commands::Languages => handle_languages(),
        Commands::Templates => handle_templates(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn handle_generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let description = match (args.description.as_deref(), args.template.as_deref()) {
        (Some(description), _) => description.to_string(),
        (None, Some(name)) => match lookup_template(name) {
            Some(description) => description.to_string(),
            None => {
                eprintln!("Unknown template '{name}'. Run `codesmith templates` to list them.");
                std::process::exit(1);
            }
        },
        (None, None) => {
            eprintln!("Usage: codesmith generate \"what the code should do\"");
            std::process::exit(1);
        }
    };

    let mut options = match PreferencesStore::new_default().load() {
        Ok(Some(saved)) => saved,
        Ok(None) => GenerationOptions::default(),
        Err(e) => {
            eprintln!("⚠️  {e}");
            GenerationOptions::default()
        }
    };

    if let Some(ref language) = args.language {
        options.language = language.parse()?;
    }
    if let Some(ref code_type) = args.code_type {
        options.code_type = code_type.parse().map_err(|_| {
            format!(
                "Unknown code type '{code_type}'. One of: function, class, \
                 full program, script, algorithm, api endpoint, database query, component"
            )
        })?;
    }
    if let Some(ref framework) = args.framework {
        options.framework = framework.parse()?;
    }
    if !args.libraries.is_empty() {
        options.libraries = args.libraries.clone();
    }
    if let Some(ref style) = args.style {
        options.code_style = style.parse().map_err(|_| {
            format!(
                "Unknown style '{style}'. One of: auto-detect, PEP 8, airbnb, \
                 google, standard JS, PSR, none"
            )
        })?;
    }
    if let Some(ref model) = args.model {
        options.model.model = model.parse()?;
    }
    if let Some(temperature) = args.temperature {
        options.model.temperature = Some(temperature);
    }
    if let Some(max_tokens) = args.max_tokens {
        options.model.max_tokens = Some(max_tokens);
    }

    let config = CodesmithConfig::from_env();
    let provider = create_provider(options.model.model.clone(), &config)?;
    let mut generator = CodeGenerator::with_options(provider, options);

    let record = generator.generate(&description).await?;

    match args.output {
        Some(ref dir) => {
            let path = if args.markdown {
                export::write_markdown(&record, dir)?
            } else {
                export::write_record(&record, dir)?
            };
            println!("⬇️  Saved to {}", path.display());
        }
        None => println!("{}", record.code.trim_end()),
    }

    if args.explain {
        let explanation = generator.explain(&record.code).await?;
        println!("\n📖 Explanation:\n{explanation}");
    }
    if args.review {
        let review = generator.review(&record.code).await?;
        println!("\n🔍 Review:\n{review}");
    }

    Ok(())
}

fn handle_languages() -> Result<(), Box<dyn std::error::Error>> {
    println!("Supported languages:");
    for language in Language::supported() {
        println!(
            "  {:<12} .{}",
            language.to_string(),
            export::file_extension(language)
        );
    }
    println!("\nOther languages are passed through verbatim and exported as .txt");
    Ok(())
}

fn handle_templates() -> Result<(), Box<dyn std::error::Error>> {
    println!("Built-in templates:");
    for name in prompt::template_names() {
        println!("  {name}");
        println!("    {}", prompt::template(name).unwrap_or_default());
    }
    println!("\nUse one with `codesmith generate --template <name>`");
    Ok(())
}

fn lookup_template(name: &str) -> Option<&'static str> {
    prompt::template_names()
        .into_iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(name))
        .and_then(prompt::template)
}
