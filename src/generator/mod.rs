//! # Generator Module
//!
//! Renders Java model, repository, service and controller classes for a
//! Spring/JPA application from a description of a class's fields.
//!
//! ## Architecture
//!
//! ```text
//! name:Type specs → Dependency Resolver → FileInformation
//!                 → Template Model Builder (per kind) → Template Renderer → Java source
//! ```
//!
//! 1. **Dependency Resolver** ([`DependencyResolver`]) - maps each declared type,
//!    including generic parameters at any depth, to its imports. Built-in names
//!    come from a static table; custom names go through a [`ClassSearch`] and
//!    must match exactly one class.
//! 2. **Template Model Builders** ([`TemplateBuilder`]) - assemble the key/value
//!    [`TemplateModel`] for one artifact kind: its own class descriptor and
//!    package, the id field, the other fields, deduplicated imports and the
//!    kind-specific extras.
//! 3. **Template Renderer** ([`TemplateRenderer`]) - renders the model with the
//!    minijinja template registered for the kind. Undefined placeholders fail
//!    the render.
//! 4. **Project output** ([`generate_sources`]) - writes the rendered classes
//!    below the configured source root.
//!
//! ## Model keys
//!
//! | Key | Kinds | Content |
//! |-----|-------|---------|
//! | `modelField` | all | entity class descriptor |
//! | `repoField` | repository, service | repository descriptor |
//! | `serviceField` | service, controller | service descriptor |
//! | `controllerField` | controller | controller descriptor |
//! | `idField` | all | id field descriptor |
//! | `idType` | repository, service, controller | boxed id type |
//! | `fields` | model | non-id field descriptors |
//! | `dependencies` | all | imports, first occurrence wins |
//! | `header` | model, lombok on | present when annotations are emitted |
//! | `methods` | model, lombok off | getter/setter pairs |
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use plaster::config::PlasterConfig;
//! use plaster::generator::{
//!     DependencyResolver, FileInformation, GenTypeModel, Generator, StaticSearch, TemplateType,
//! };
//!
//! let search = StaticSearch::from_pairs([("Owner", "com.example.app.Owner")]);
//! let resolver = DependencyResolver::new(search);
//! let info = FileInformation::resolve("pet", "id:Long", ["owner:Owner"], &resolver)?;
//! let generator = Generator::new(PlasterConfig::default())?;
//! let source = generator.render(TemplateType::Model, &info, &GenTypeModel::new("pet", true))?;
//! ```

mod builders;
mod dependency;
mod fields;
mod model;
mod naming;
mod project;
mod search;
mod templates;
mod types;

pub use builders::*;
pub use dependency::*;
pub use fields::*;
pub use model::*;
pub use naming::*;
pub use project::*;
pub use search::*;
pub use templates::*;
pub use types::*;

use crate::config::{PlasterConfig, Settings};
use crate::error::Result;

/// Builds template models and renders them with one set of settings.
pub struct Generator {
    settings: Box<dyn Settings>,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Generator using the built-in templates, or the override directory
    /// named by the `template_dir` setting.
    pub fn new(config: PlasterConfig) -> Result<Self> {
        let renderer = match &config.template_dir {
            Some(dir) => TemplateRenderer::with_template_dir(dir)?,
            None => TemplateRenderer::new()?,
        };
        Ok(Self::with_renderer(Box::new(config), renderer))
    }

    pub fn with_renderer(settings: Box<dyn Settings>, renderer: TemplateRenderer) -> Self {
        Self { settings, renderer }
    }

    pub fn settings(&self) -> &dyn Settings {
        self.settings.as_ref()
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }

    /// Descriptor of the class `kind` generates.
    pub fn type_field(&self, gen_type_model: &GenTypeModel, kind: TemplateType) -> FlattenedField {
        type_field(self.settings(), gen_type_model, kind)
    }

    /// Assemble the template model for `kind`.
    pub fn build_model(
        &self,
        kind: TemplateType,
        file_information: &FileInformation,
        gen_type_model: &GenTypeModel,
    ) -> TemplateModel {
        builder_for(kind, self.settings()).build(
            TemplateModel::new(),
            file_information,
            gen_type_model,
        )
    }

    /// Assemble and render the source of `kind`.
    pub fn render(
        &self,
        kind: TemplateType,
        file_information: &FileInformation,
        gen_type_model: &GenTypeModel,
    ) -> Result<String> {
        let model = self.build_model(kind, file_information, gen_type_model);
        self.renderer.render_kind(&model, kind)
    }
}
