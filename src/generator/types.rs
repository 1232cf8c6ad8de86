use serde::{Deserialize, Serialize};
use std::fmt;

use super::naming::{to_camel_case, to_lower_camel_case};

/// A fully-qualified import path, e.g. `java.util.List`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dependency {
    pub path: String,
}

impl Dependency {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// A single resolved type name.
///
/// Types without a dependency live in the implicitly imported language
/// package and need no import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub name: String,
    pub dependency: Option<Dependency>,
}

impl Type {
    pub fn new(name: impl Into<String>, dependency: Option<Dependency>) -> Self {
        Self {
            name: name.into(),
            dependency,
        }
    }
}

/// A declared field type as written (`Map<String, Owner>`) plus every type it
/// mentions, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub types: Vec<Type>,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, types: Vec<Type>) -> Self {
        Self {
            name: name.into(),
            types,
        }
    }

    /// Imports required by this declaration, in declaration order.
    pub fn dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.types.iter().filter_map(|t| t.dependency.as_ref())
    }
}

/// A member variable of the generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub type_declaration: TypeDeclaration,
    pub var_name: String,
}

impl Field {
    pub fn new(type_declaration: TypeDeclaration, var_name: impl Into<String>) -> Self {
        Self {
            type_declaration,
            var_name: var_name.into(),
        }
    }

    /// Rendering descriptor; fields carry no package of their own.
    pub fn flatten(&self) -> FlattenedField {
        FlattenedField::new("", self.type_declaration.name.clone(), self.var_name.clone())
    }
}

/// Everything known about the class being generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInformation {
    base_class_name: String,
    id: Field,
    fields: Vec<Field>,
}

impl FileInformation {
    pub fn new(base_class_name: impl Into<String>, id: Field, fields: Vec<Field>) -> Self {
        Self {
            base_class_name: base_class_name.into(),
            id,
            fields,
        }
    }

    pub fn base_class_name(&self) -> &str {
        &self.base_class_name
    }

    pub fn id(&self) -> &Field {
        &self.id
    }

    /// Non-id fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// Options for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenTypeModel {
    /// Target class name, snake or camel case
    pub class_name: String,
    /// Emit lombok annotations instead of explicit accessors
    pub use_lombok: bool,
}

impl GenTypeModel {
    pub fn new(class_name: impl Into<String>, use_lombok: bool) -> Self {
        Self {
            class_name: class_name.into(),
            use_lombok,
        }
    }
}

/// Rendering-ready `(package, class, variable)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedField {
    pub package_path: String,
    pub class_name: String,
    pub var_name: String,
}

impl FlattenedField {
    pub fn new(
        package_path: impl Into<String>,
        class_name: impl Into<String>,
        var_name: impl Into<String>,
    ) -> Self {
        Self {
            package_path: package_path.into(),
            class_name: class_name.into(),
            var_name: var_name.into(),
        }
    }
}

/// Getter/setter pair emitted when lombok is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    pub type_name: String,
    pub var_name: String,
    pub getter: String,
    pub setter: String,
}

impl Accessor {
    pub fn for_field(field: &Field) -> Self {
        let property = to_camel_case(&field.var_name);
        Self {
            type_name: field.type_declaration.name.clone(),
            var_name: field.var_name.clone(),
            getter: format!("get{property}"),
            setter: format!("set{property}"),
        }
    }
}

/// Artifact kinds the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateType {
    Model,
    Repository,
    Service,
    Controller,
}

impl TemplateType {
    pub const ALL: [TemplateType; 4] = [
        TemplateType::Model,
        TemplateType::Repository,
        TemplateType::Service,
        TemplateType::Controller,
    ];

    /// Suffix appended to the class name.
    pub fn class_suffix(self) -> &'static str {
        match self {
            TemplateType::Model => "",
            TemplateType::Repository => "Repository",
            TemplateType::Service => "Service",
            TemplateType::Controller => "Controller",
        }
    }

    /// Model key holding this kind's own [`FlattenedField`].
    pub fn model_key(self) -> &'static str {
        match self {
            TemplateType::Model => "modelField",
            TemplateType::Repository => "repoField",
            TemplateType::Service => "serviceField",
            TemplateType::Controller => "controllerField",
        }
    }

    /// Logical path of the template rendering this kind.
    pub fn template_path(self) -> &'static str {
        match self {
            TemplateType::Model => "template/model/model.jinja",
            TemplateType::Repository => "template/repository/repository.jinja",
            TemplateType::Service => "template/service/service.jinja",
            TemplateType::Controller => "template/controller/controller.jinja",
        }
    }

    /// Class name for a base name, e.g. `example_class` → `ExampleClassRepository`.
    pub fn class_name(self, base_name: &str) -> String {
        format!("{}{}", to_camel_case(base_name), self.class_suffix())
    }

    /// Variable name for a base name, e.g. `example_class` → `exampleClassRepository`.
    pub fn var_name(self, base_name: &str) -> String {
        to_lower_camel_case(&self.class_name(base_name))
    }

    pub fn name(self) -> &'static str {
        match self {
            TemplateType::Model => "model",
            TemplateType::Repository => "repository",
            TemplateType::Service => "service",
            TemplateType::Controller => "controller",
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
