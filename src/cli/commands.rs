use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::{PlasterConfig, Setting, Settings};
use crate::generator::{
    generate_sources, package_for, DependencyResolver, FileInformation, FileStatus, GenTypeModel,
    GenerateOptions, GenerationScope, Generator, SourceTreeSearch, TemplateType,
};

/// Command-line interface for plaster
///
/// Generates Spring/JPA model, repository, service and controller classes.
#[derive(Parser)]
#[command(name = "plaster")]
#[command(about = "Spring/JPA source generator", long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); overrides PLASTER_LOG_LEVEL
    #[arg(long, global = true, env = "PLASTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for plaster
#[derive(Subcommand)]
pub enum Commands {
    /// Generate classes for an entity
    Generate {
        /// Entity name, e.g. `pet` or `pet_owner`
        name: String,

        /// Non-id fields as name:Type, e.g. `owners:List<Owner>`
        fields: Vec<String>,

        /// Id field as name:Type
        #[arg(long, default_value = "id:Long")]
        id: String,

        /// Emit Lombok annotations instead of getters and setters
        #[arg(long, default_value_t = false)]
        lombok: bool,

        /// Limit generation to specific kinds (comma-separated or repeated)
        #[arg(long, value_enum, num_args = 1.., value_delimiter = ',')]
        only: Option<Vec<OnlyPart>>,

        /// Project directory holding plaster.toml and the source root
        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,

        /// Path to the settings file (default: <project-dir>/plaster.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Perform a dry run: show what would be written without writing files
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Resolve a type declaration and print its imports
    Resolve {
        /// Type declaration, e.g. `Map<String, List<Owner>>`
        type_name: String,

        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the effective settings
    Settings {
        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Kinds that can be selected with `--only`
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OnlyPart {
    /// Entity class
    Model,
    /// Spring Data repository interface
    Repository,
    /// Service wrapping the repository
    Service,
    /// REST controller
    Controller,
}

impl From<OnlyPart> for TemplateType {
    fn from(part: OnlyPart) -> Self {
        match part {
            OnlyPart::Model => TemplateType::Model,
            OnlyPart::Repository => TemplateType::Repository,
            OnlyPart::Service => TemplateType::Service,
            OnlyPart::Controller => TemplateType::Controller,
        }
    }
}

/// Parse arguments, initialize logging and execute the command.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Err(e) = crate::logging::init_logging(cli.log_level.as_deref()) {
        // a subscriber may already be installed when embedded
        tracing::debug!(error = %e, "logging not initialized");
    }
    run(&cli)
}

/// Execute a parsed command.
///
/// # Errors
///
/// Returns an error if:
/// - The settings file cannot be read or parsed
/// - A field specification is malformed or a type cannot be resolved
/// - A template fails to render
/// - A generated file cannot be written
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate {
            name,
            fields,
            id,
            lombok,
            only,
            project_dir,
            config,
            force,
            dry_run,
        } => {
            let mut settings = PlasterConfig::discover(config.as_deref(), project_dir)?;
            // relative template overrides live in the project
            if let Some(dir) = settings.template_dir.take() {
                settings.template_dir = Some(project_dir.join(dir));
            }
            let resolver = DependencyResolver::new(source_search(&settings, project_dir));
            let info = FileInformation::resolve(name, id, fields, &resolver)
                .with_context(|| format!("Failed to describe {name}"))?;
            let generator = Generator::new(settings)?;

            let options = GenerateOptions {
                project_dir: project_dir.clone(),
                scope: map_only_to_scope(only.as_deref()),
                force: *force,
                dry_run: *dry_run,
            };
            let gen_type_model = GenTypeModel::new(name, *lombok);
            let files = generate_sources(&generator, &info, &gen_type_model, &options)?;
            let written = files.iter().filter(|f| f.status == FileStatus::Written).count();
            tracing::info!(entity = %name, files = files.len(), written, "generation finished");
            Ok(())
        }
        Commands::Resolve {
            type_name,
            project_dir,
            config,
        } => {
            let settings = PlasterConfig::discover(config.as_deref(), project_dir)?;
            let resolver = DependencyResolver::new(source_search(&settings, project_dir));
            let declaration = resolver.resolve_declaration(type_name)?;
            for ty in &declaration.types {
                match &ty.dependency {
                    Some(dependency) => println!("{} → import {dependency};", ty.name),
                    None => println!("{} → (no import)", ty.name),
                }
            }
            Ok(())
        }
        Commands::Settings {
            project_dir,
            config,
        } => {
            let settings = PlasterConfig::discover(config.as_deref(), project_dir)?;
            for setting in Setting::ALL {
                println!("{} = {:?}", setting.key(), settings.get_or_empty(setting));
            }
            for kind in TemplateType::ALL {
                println!("{kind} package = {}", package_for(&settings, kind));
            }
            if !settings.known_classes.is_empty() {
                println!("[known_classes]");
                for (name, qualified) in &settings.known_classes {
                    println!("{name} = {qualified:?}");
                }
            }
            Ok(())
        }
    }
}

/// Class search over the project's source root and configured known classes.
fn source_search(settings: &PlasterConfig, project_dir: &Path) -> SourceTreeSearch {
    let root = project_dir.join(settings.get_or_empty(Setting::SourceRoot));
    SourceTreeSearch::new([root]).with_known_classes(settings.known_classes.clone())
}

/// Convert CLI `--only` parts to a `GenerationScope`
///
/// If `only` is `None`, every kind is enabled.
fn map_only_to_scope(only: Option<&[OnlyPart]>) -> GenerationScope {
    match only {
        None => GenerationScope::all(),
        Some(parts) => parts
            .iter()
            .fold(GenerationScope::none(), |scope, part| scope.with((*part).into())),
    }
}
