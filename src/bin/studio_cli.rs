//! ZanluNet Studio command line
//!
//! A terminal front-end over the studio generators.
//!
//! # Usage
//!
//! ```bash
//! # List generators and their form fields
//! studio_cli generators --verbose
//!
//! # Compose a contract and save it under the downloads dir
//! studio_cli compose contract \
//!     --set contractType=venda-site --set "clientName=Ana Silva" \
//!     --set taxId=123.456.789-00 --set value=5000 --download
//!
//! # Toggle multi-select options
//! studio_cli compose prompt --set projectType=saas \
//!     --set "visualStyle=Minimalista Clean" --set "niche=Educação/Cursos" \
//!     --toggle "features=Área de membros" --toggle "features=Blog e conteúdo"
//!
//! # Fabricate a prospect list
//! studio_cli prospect --city Curitiba --category Academia --count 10
//!
//! # Academy catalog as JSON
//! studio_cli academy --format json
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use zanlu_studio::prospecting::{DigitSource, ProspectGenerator, RngDigits};
use zanlu_studio::shell::{
    GeneratorPage, LocalArtifacts, ProspectingPage, TracingNotifier, ACADEMY_COURSES,
    DASHBOARD_TILES, SUPPORT_MATERIALS,
};
use zanlu_studio::templates::{
    format_missing_fields_prompt, ComposeError, FieldKind, GeneratorId, TemplateRegistry,
};
use zanlu_studio::{ConfigLoader, StudioConfig, StudioError};

#[derive(Parser)]
#[command(name = "studio_cli")]
#[command(version = "0.1.0")]
#[command(about = "ZanluNet Studio generators from the terminal")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: json, text, or pretty (default)
    #[arg(long, short = 'o', global = true, default_value = "pretty", value_enum)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
    Pretty,
}

#[derive(Subcommand)]
enum Commands {
    /// List generators and their fields
    Generators {
        /// Show every field with its options
        #[arg(long)]
        verbose: bool,
    },

    /// Compose a document from field values
    Compose {
        /// Generator: prompt, saas, contract, message
        generator: String,

        /// Field value as name=value (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Toggle a multi-select option as name=option (repeatable)
        #[arg(long = "toggle", value_name = "NAME=OPTION")]
        toggle: Vec<String>,

        /// Also save the result as a text file
        #[arg(long)]
        download: bool,
    },

    /// Fabricate a list of illustrative prospects
    Prospect {
        #[arg(long)]
        city: String,

        #[arg(long)]
        category: String,

        /// Number of records (defaults to the configured batch size)
        #[arg(long)]
        count: Option<usize>,

        /// Seed for reproducible phone and street numbers
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the dashboard tiles
    Tiles,

    /// List academy courses and support materials
    Academy,
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = load_config().and_then(|(loader, config)| match cli.command {
        Commands::Generators { verbose } => cmd_generators(verbose, cli.format),
        Commands::Compose {
            generator,
            set,
            toggle,
            download,
        } => cmd_compose(&config, &generator, &set, &toggle, download, cli.format),
        Commands::Prospect {
            city,
            category,
            count,
            seed,
        } => cmd_prospect(&loader, &config, &city, &category, count, seed, cli.format),
        Commands::Tiles => cmd_tiles(cli.format),
        Commands::Academy => cmd_academy(cli.format),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.format == OutputFormat::Json {
                let output = serde_json::json!({ "error": format!("{:#}", e) });
                println!("{}", output);
            } else {
                eprintln!("{}: {:#}", "error".red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<(ConfigLoader, StudioConfig)> {
    let loader = ConfigLoader::from_env();
    let dir = loader.config_dir();
    let config = loader
        .load_studio()
        .with_context(|| format!("loading config from {}", dir.display()))?;
    Ok((loader, config))
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

fn cmd_generators(verbose: bool, format: OutputFormat) -> Result<()> {
    let registry = TemplateRegistry::new();

    match format {
        OutputFormat::Json => {
            let generators: Vec<_> = registry
                .list()
                .into_iter()
                .map(|table| {
                    serde_json::json!({
                        "id": table.definition.id,
                        "name": table.definition.name,
                        "description": table.definition.description,
                        "fields": table.definition.fields,
                        "templates": table.paths().iter().map(ToString::to_string).collect::<Vec<_>>(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&generators)?);
        }
        OutputFormat::Text | OutputFormat::Pretty => {
            for table in registry.list() {
                let def = &table.definition;
                println!(
                    "{} {}",
                    def.id.name().green().bold(),
                    format!("({})", def.name).dimmed()
                );
                println!("    {}", def.description);
                if !verbose {
                    continue;
                }
                for field in &def.fields {
                    let marker = if field.required {
                        "*".red()
                    } else {
                        " ".normal()
                    };
                    let kind = match &field.kind {
                        FieldKind::Text => "text".to_string(),
                        FieldKind::MultilineText => "multiline".to_string(),
                        FieldKind::SingleSelect { options } => format!("one of {}", options.len()),
                        FieldKind::MultiSelect { options } => format!("any of {}", options.len()),
                    };
                    println!(
                        "    {}{} [{}] {}",
                        marker,
                        field.name.cyan(),
                        kind,
                        field.label
                    );
                    for option in field.kind.options() {
                        println!("        {} {}", option.value, option.label.dimmed());
                    }
                }
                println!();
            }
        }
    }
    Ok(())
}

fn cmd_compose(
    config: &StudioConfig,
    generator: &str,
    set: &[String],
    toggle: &[String],
    download: bool,
    format: OutputFormat,
) -> Result<()> {
    let id = GeneratorId::from_str(generator)
        .ok_or_else(|| anyhow!("unknown generator '{}'", generator))?;
    let registry = Arc::new(TemplateRegistry::new());
    let mut page = GeneratorPage::new(
        registry.clone(),
        id,
        TracingNotifier,
        LocalArtifacts::new(&config.downloads_dir),
    )
    .with_agency(&config.agency_name);

    for pair in set {
        let (name, value) = split_pair(pair)?;
        page.set(name, value);
    }
    for pair in toggle {
        let (name, option) = split_pair(pair)?;
        page.toggle(name, option);
    }

    let text = match page.generate() {
        Ok(text) => text.to_string(),
        Err(StudioError::Compose(ComposeError::Validation(err))) => {
            let fields = registry
                .definition(id)
                .map(|d| d.fields.as_slice())
                .unwrap_or_default();
            if format != OutputFormat::Json {
                eprint!("{}", format_missing_fields_prompt(fields, &err));
            }
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    let saved = if download {
        let filename = page.download()?;
        Some(config.downloads_dir.join(filename))
    } else {
        None
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "generator": id,
                "text": text,
                "file": saved,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => println!("{}", text),
        OutputFormat::Pretty => {
            println!("{}", format!("── {} ──", id).cyan().bold());
            println!("{}", text);
            if let Some(path) = saved {
                println!("{} {}", "Saved".green().bold(), path.display());
            }
        }
    }
    Ok(())
}

fn cmd_prospect(
    loader: &ConfigLoader,
    config: &StudioConfig,
    city: &str,
    category: &str,
    count: Option<usize>,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let tables = loader.load_prospect_tables(config)?;
    let count = count.unwrap_or(config.prospecting.batch_size);

    match seed {
        Some(seed) => run_prospect(
            ProspectGenerator::with_digits(tables, RngDigits::seeded(seed)),
            city,
            category,
            count,
            format,
        ),
        None => run_prospect(
            ProspectGenerator::new(tables),
            city,
            category,
            count,
            format,
        ),
    }
}

fn run_prospect<D: DigitSource>(
    generator: ProspectGenerator<D>,
    city: &str,
    category: &str,
    count: usize,
    format: OutputFormat,
) -> Result<()> {
    let sink = LocalArtifacts::new(".");
    let mut page = ProspectingPage::new(generator, count, TracingNotifier, sink);
    page.set_city(city);
    page.set_category(category);
    let prospects = page.search()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(prospects)?),
        OutputFormat::Text => {
            for p in prospects {
                println!("{}\t{}\t{}", p.name, p.phone_number, p.address);
            }
        }
        OutputFormat::Pretty => {
            println!(
                "{} {} potenciais clientes em {}",
                "OK".green().bold(),
                prospects.len(),
                city.bold()
            );
            for p in prospects {
                println!("  {}", p.name.bold());
                println!("    {}  {}", p.phone_number.cyan(), p.address.dimmed());
            }
        }
    }
    Ok(())
}

fn cmd_tiles(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(DASHBOARD_TILES)?),
        OutputFormat::Text | OutputFormat::Pretty => {
            for tile in DASHBOARD_TILES {
                println!(
                    "{:<24} {:<22} {}",
                    tile.title.bold(),
                    tile.route.path().cyan(),
                    tile.description
                );
            }
        }
    }
    Ok(())
}

fn cmd_academy(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "courses": ACADEMY_COURSES,
                "materials": SUPPORT_MATERIALS,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            for c in ACADEMY_COURSES {
                println!("{}\t{}\t{}", c.title, c.duration, c.video_url);
            }
        }
        OutputFormat::Pretty => {
            println!("{}", "Cursos Disponíveis".bold());
            for course in ACADEMY_COURSES {
                println!("  {}", course.title.green().bold());
                println!("    {}", course.description);
                println!(
                    "    {} · {} módulos · {}",
                    course.duration,
                    course.modules,
                    course.video_url.dimmed()
                );
            }
            println!();
            println!("{}", "Material de Apoio".bold());
            for material in SUPPORT_MATERIALS {
                println!("  {} {}", material.name, material.size.dimmed());
            }
        }
    }
    Ok(())
}

fn split_pair(pair: &str) -> Result<(&str, &str)> {
    pair.split_once('=')
        .map(|(name, value)| (name.trim(), value))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{}'", pair))
}
