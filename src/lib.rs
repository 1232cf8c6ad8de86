//! # plaster
//!
//! **plaster** generates the boilerplate of a Spring/JPA application: an
//! entity class, its repository interface, a service and a REST controller,
//! from a class name and a list of `name:Type` fields.
//!
//! ## Architecture
//!
//! - **[`config`]** - settings (`plaster.toml` plus `PLASTER_*` overrides) and
//!   the [`config::Settings`] accessor the builders read packages from
//! - **[`generator`]** - dependency resolution, per-kind template models,
//!   template rendering and writing the generated sources
//! - **[`error`]** - the single [`error::PlasterError`] for generation failures
//! - **[`logging`]** - tracing subscriber setup
//! - **[`cli`]** - the `plaster` command line
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(plaster)
//!     participant Resolver as generator::DependencyResolver
//!     participant Builders as generator::TemplateBuilder
//!     participant Renderer as generator::TemplateRenderer
//!     participant FS as File System
//!
//!     User->>CLI: plaster generate pet id:Long owner:Owner
//!     CLI->>Resolver: FileInformation::resolve(...)
//!     Resolver->>Resolver: built-in table / source tree search
//!     Resolver-->>CLI: FileInformation
//!     CLI->>Builders: build(kind) for each kind in scope
//!     Builders-->>CLI: TemplateModel
//!     CLI->>Renderer: render(model, template/<kind>/<kind>.jinja)
//!     Renderer-->>CLI: Java source
//!     CLI->>FS: write <source_root>/<package>/<Class>.java
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! plaster generate pet id:Long name:String owner:Owner --lombok
//! plaster resolve "Map<String, List<Owner>>"
//! plaster settings
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;

pub use config::{PlasterConfig, Setting, Settings};
pub use error::{ErrorCause, PlasterError};
pub use generator::{
    generate_sources, DependencyResolver, FileInformation, GenTypeModel, Generator, TemplateType,
};
