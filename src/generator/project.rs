use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::naming::package_to_path;
use super::types::{FileInformation, GenTypeModel, TemplateType};
use super::Generator;
use crate::config::Setting;

/// Artifact kinds to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationScope {
    pub model: bool,
    pub repository: bool,
    pub service: bool,
    pub controller: bool,
}

impl GenerationScope {
    pub fn all() -> Self {
        Self {
            model: true,
            repository: true,
            service: true,
            controller: true,
        }
    }

    pub fn none() -> Self {
        Self {
            model: false,
            repository: false,
            service: false,
            controller: false,
        }
    }

    pub fn with(mut self, kind: TemplateType) -> Self {
        match kind {
            TemplateType::Model => self.model = true,
            TemplateType::Repository => self.repository = true,
            TemplateType::Service => self.service = true,
            TemplateType::Controller => self.controller = true,
        }
        self
    }

    pub fn includes(&self, kind: TemplateType) -> bool {
        match kind {
            TemplateType::Model => self.model,
            TemplateType::Repository => self.repository,
            TemplateType::Service => self.service,
            TemplateType::Controller => self.controller,
        }
    }

    /// Selected kinds in model → controller order.
    pub fn kinds(&self) -> impl Iterator<Item = TemplateType> + '_ {
        TemplateType::ALL.into_iter().filter(|kind| self.includes(*kind))
    }
}

impl Default for GenerationScope {
    fn default() -> Self {
        Self::all()
    }
}

/// Where and how generated sources are written.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Project directory; the configured source root is resolved against it
    pub project_dir: PathBuf,
    pub scope: GenerationScope,
    /// Overwrite existing files
    pub force: bool,
    /// Report what would be written without touching the filesystem
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            scope: GenerationScope::all(),
            force: false,
            dry_run: false,
        }
    }
}

/// What happened to one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Written,
    SkippedExisting,
    DryRun,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub kind: TemplateType,
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Source file path for a generated class.
pub fn source_path(
    project_dir: &Path,
    source_root: &str,
    package: &str,
    class_name: &str,
) -> PathBuf {
    project_dir
        .join(source_root)
        .join(package_to_path(package))
        .join(format!("{class_name}.java"))
}

/// Render every kind in scope, then write them below the source root.
///
/// Nothing is written unless every selected kind rendered successfully.
pub fn generate_sources(
    generator: &Generator,
    file_information: &FileInformation,
    gen_type_model: &GenTypeModel,
    options: &GenerateOptions,
) -> anyhow::Result<Vec<GeneratedFile>> {
    let source_root = generator.settings().get_or_empty(Setting::SourceRoot);

    let mut rendered = Vec::new();
    for kind in options.scope.kinds() {
        let source = generator
            .render(kind, file_information, gen_type_model)
            .with_context(|| format!("Failed to render {kind} for {}", gen_type_model.class_name))?;
        let field = generator.type_field(gen_type_model, kind);
        let path = source_path(
            &options.project_dir,
            &source_root,
            &field.package_path,
            &field.class_name,
        );
        rendered.push((kind, path, source));
    }

    let mut files = Vec::new();
    for (kind, path, source) in rendered {
        let status = write_source(&path, &source, options.force, options.dry_run)?;
        files.push(GeneratedFile { kind, path, status });
    }
    Ok(files)
}

fn write_source(
    path: &Path,
    source: &str,
    force: bool,
    dry_run: bool,
) -> anyhow::Result<FileStatus> {
    if path.exists() && !force {
        warn!(path = %path.display(), "file exists, skipping (use --force to overwrite)");
        println!("⚠️  Skipping existing file: {path:?}");
        return Ok(FileStatus::SkippedExisting);
    }
    if dry_run {
        println!("📝 Would write {path:?} ({} bytes)", source.len());
        return Ok(FileStatus::DryRun);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, source).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "generated");
    println!("✅ Generated: {path:?}");
    Ok(FileStatus::Written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_kinds() {
        let scope = GenerationScope::none()
            .with(TemplateType::Controller)
            .with(TemplateType::Model);
        assert_eq!(
            scope.kinds().collect::<Vec<_>>(),
            vec![TemplateType::Model, TemplateType::Controller]
        );
        assert_eq!(GenerationScope::default().kinds().count(), 4);
    }

    #[test]
    fn test_source_path() {
        let path = source_path(
            Path::new("/work/app"),
            "src/main/java",
            "com.example.app.model",
            "Owner",
        );
        assert_eq!(
            path,
            PathBuf::from("/work/app/src/main/java/com/example/app/model/Owner.java")
        );
    }

    #[test]
    fn test_write_source_respects_force_and_dry_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/Owner.java");

        assert_eq!(write_source(&path, "one", false, true).unwrap(), FileStatus::DryRun);
        assert!(!path.exists());

        assert_eq!(write_source(&path, "one", false, false).unwrap(), FileStatus::Written);
        assert_eq!(
            write_source(&path, "two", false, false).unwrap(),
            FileStatus::SkippedExisting
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "one");

        assert_eq!(write_source(&path, "two", true, false).unwrap(), FileStatus::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "two");
    }
}
