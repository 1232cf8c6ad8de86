use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use super::model::TemplateModel;
use super::types::TemplateType;
use crate::error::{ErrorCause, Result};

const MODEL_TEMPLATE: &str = include_str!("../../templates/model/model.jinja");
const REPOSITORY_TEMPLATE: &str = include_str!("../../templates/repository/repository.jinja");
const SERVICE_TEMPLATE: &str = include_str!("../../templates/service/service.jinja");
const CONTROLLER_TEMPLATE: &str = include_str!("../../templates/controller/controller.jinja");

/// Built-in template source for a kind.
fn embedded_source(kind: TemplateType) -> &'static str {
    match kind {
        TemplateType::Model => MODEL_TEMPLATE,
        TemplateType::Repository => REPOSITORY_TEMPLATE,
        TemplateType::Service => SERVICE_TEMPLATE,
        TemplateType::Controller => CONTROLLER_TEMPLATE,
    }
}

/// Renders template models into source text.
///
/// Templates are registered under their logical paths
/// (`template/model/model.jinja`, …). Undefined placeholders are errors.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Renderer using the built-in templates.
    pub fn new() -> Result<Self> {
        let mut env = Self::environment();
        for kind in TemplateType::ALL {
            let path = kind.template_path();
            env.add_template(path, embedded_source(kind))
                .map_err(|source| ErrorCause::Render {
                    path: path.to_string(),
                    source,
                })?;
        }
        Ok(Self { env })
    }

    /// Renderer whose templates may be overridden from `dir`.
    ///
    /// A logical path `template/model/model.jinja` is looked up as
    /// `dir/model/model.jinja`; kinds without an override file keep the
    /// built-in template.
    ///
    /// Fails when `dir` itself is not a directory.
    pub fn with_template_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(ErrorCause::TemplateMissing {
                path: dir.display().to_string(),
                reason: "not a directory".to_string(),
            }
            .into());
        }
        let mut renderer = Self::new()?;
        for kind in TemplateType::ALL {
            let path = kind.template_path();
            let Some(file) = override_file(dir, path) else {
                continue;
            };
            if !file.is_file() {
                continue;
            }
            let source = fs::read_to_string(&file).map_err(|e| ErrorCause::TemplateMissing {
                path: file.display().to_string(),
                reason: e.to_string(),
            })?;
            debug!(template = path, file = %file.display(), "using template override");
            renderer
                .env
                .add_template_owned(path.to_string(), source)
                .map_err(|source| ErrorCause::Render {
                    path: path.to_string(),
                    source,
                })?;
        }
        Ok(renderer)
    }

    fn environment() -> Environment<'static> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env
    }

    /// Whether a template is registered under `template_path`.
    pub fn has_template(&self, template_path: &str) -> bool {
        self.env.get_template(template_path).is_ok()
    }

    /// Render `model` with the template registered under `template_path`.
    pub fn render(&self, model: &TemplateModel, template_path: &str) -> Result<String> {
        let template = self.env.get_template(template_path).map_err(|source| {
            if source.kind() == ErrorKind::TemplateNotFound {
                ErrorCause::TemplateMissing {
                    path: template_path.to_string(),
                    reason: "no such template".to_string(),
                }
            } else {
                ErrorCause::Render {
                    path: template_path.to_string(),
                    source,
                }
            }
        })?;
        let rendered = template.render(model).map_err(|source| ErrorCause::Render {
            path: template_path.to_string(),
            source,
        })?;
        Ok(rendered)
    }

    /// Render `model` with the template of `kind`.
    pub fn render_kind(&self, model: &TemplateModel, kind: TemplateType) -> Result<String> {
        self.render(model, kind.template_path())
    }
}

/// Override location for a logical path, rejecting anything that would
/// escape `dir`.
fn override_file(dir: &Path, template_path: &str) -> Option<PathBuf> {
    let relative = template_path.strip_prefix("template/").unwrap_or(template_path);
    let mut file = dir.to_path_buf();
    for comp in Path::new(relative).components() {
        match comp {
            Component::Normal(s) => file.push(s),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(file)
}
