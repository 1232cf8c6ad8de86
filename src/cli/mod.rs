//! # CLI Module
//!
//! Command-line interface for the `plaster` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate the classes for one entity:
//!
//! ```bash
//! plaster generate pet name:String owner:Owner tags:List<String> --lombok
//! ```
//!
//! Options:
//! - `--id <name:Type>` - Id field (default: `id:Long`)
//! - `--lombok` - Lombok annotations instead of accessors
//! - `--only <KINDS>` - Subset of model, repository, service, controller
//! - `--project-dir <DIR>` - Project holding `plaster.toml` (default: `.`)
//! - `--config <FILE>` - Explicit settings file
//! - `--force` - Overwrite existing files
//! - `--dry-run` - Report without writing
//!
//! ### `resolve`
//!
//! Print the import each part of a type declaration needs:
//!
//! ```bash
//! plaster resolve "Map<String, List<Owner>>"
//! ```
//!
//! ### `settings`
//!
//! Print the effective settings after file and environment overrides.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use plaster::cli::{run, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run(&cli)?;
//! ```

mod commands;


pub use commands::{run, run_cli, Cli, Commands, OnlyPart};
