//! Template model builders, one per artifact kind.
//!
//! The shared steps ([`TemplateBuilder::add_type_field`],
//! [`TemplateBuilder::add_id`], [`TemplateBuilder::add_dependencies`]) are
//! provided once by the trait; each kind only decides what goes into its model
//! in [`TemplateBuilder::add_custom_information`].

use std::collections::HashSet;
use tracing::debug;

use super::dependency::boxed_type_name;
use super::model::TemplateModel;
use super::naming::compose_package;
use super::types::{
    Accessor, Dependency, Field, FileInformation, FlattenedField, GenTypeModel, TemplateType,
};
use crate::config::{Setting, Settings};

pub const ID_FIELD: &str = "idField";
pub const ID_TYPE: &str = "idType";
pub const FIELDS: &str = "fields";
pub const DEPENDENCIES: &str = "dependencies";
pub const HEADER: &str = "header";
pub const METHODS: &str = "methods";

/// Relative-package setting for an artifact kind.
pub fn package_setting(kind: TemplateType) -> Setting {
    match kind {
        TemplateType::Model => Setting::RelModelPackage,
        TemplateType::Repository => Setting::RelRepositoryPackage,
        TemplateType::Service => Setting::RelServicePackage,
        TemplateType::Controller => Setting::RelControllerPackage,
    }
}

/// Dotted package of `kind` under the configured application path.
pub fn package_for(settings: &dyn Settings, kind: TemplateType) -> String {
    compose_package(
        &settings.get_or_empty(Setting::AppPath),
        &settings.get_or_empty(package_setting(kind)),
        &settings.get_or_empty(Setting::SubDirPath),
    )
}

/// Descriptor of the class `kind` generates for `gen_type_model`.
pub fn type_field(
    settings: &dyn Settings,
    gen_type_model: &GenTypeModel,
    kind: TemplateType,
) -> FlattenedField {
    FlattenedField::new(
        package_for(settings, kind),
        kind.class_name(&gen_type_model.class_name),
        kind.var_name(&gen_type_model.class_name),
    )
}

/// Builds the model for one artifact kind.
pub trait TemplateBuilder {
    fn template_type(&self) -> TemplateType;

    fn settings(&self) -> &dyn Settings;

    /// Kind-specific model contents.
    fn add_custom_information(
        &self,
        model: &mut TemplateModel,
        file_information: &FileInformation,
        gen_type_model: &GenTypeModel,
    );

    /// Populate `model` for `file_information`.
    fn build(
        &self,
        mut model: TemplateModel,
        file_information: &FileInformation,
        gen_type_model: &GenTypeModel,
    ) -> TemplateModel {
        self.add_custom_information(&mut model, file_information, gen_type_model);
        debug!(
            kind = %self.template_type(),
            class = %gen_type_model.class_name,
            keys = ?model.keys().collect::<Vec<_>>(),
            "assembled template model"
        );
        model
    }

    /// Store the descriptor of the class `kind` generates under its model key.
    fn add_type_field(
        &self,
        model: &mut TemplateModel,
        gen_type_model: &GenTypeModel,
        kind: TemplateType,
    ) {
        let field = type_field(self.settings(), gen_type_model, kind);
        model.insert(kind.model_key(), &field);
    }

    fn add_id(&self, model: &mut TemplateModel, file_information: &FileInformation) {
        model.insert(ID_FIELD, &file_information.id().flatten());
    }

    /// Boxed id type for generic arguments (`long` → `Long`).
    fn add_id_type(&self, model: &mut TemplateModel, file_information: &FileInformation) {
        let id_type = boxed_type_name(&file_information.id().type_declaration.name);
        model.insert(ID_TYPE, id_type);
    }

    /// Imports of `fields`, first occurrence wins.
    fn add_dependencies<'a>(
        &self,
        model: &mut TemplateModel,
        fields: &mut dyn Iterator<Item = &'a Field>,
    ) {
        let mut seen = HashSet::new();
        let dependencies: Vec<&Dependency> = fields
            .flat_map(|field| field.type_declaration.dependencies())
            .filter(|dep| seen.insert(dep.path.as_str()))
            .collect();
        model.insert(DEPENDENCIES, &dependencies);
    }
}

/// Builder for a given kind.
pub fn builder_for<'a>(
    kind: TemplateType,
    settings: &'a dyn Settings,
) -> Box<dyn TemplateBuilder + 'a> {
    match kind {
        TemplateType::Model => Box::new(ModelBuilder::new(settings)),
        TemplateType::Repository => Box::new(RepositoryBuilder::new(settings)),
        TemplateType::Service => Box::new(ServiceBuilder::new(settings)),
        TemplateType::Controller => Box::new(ControllerBuilder::new(settings)),
    }
}

/// JPA entity with either lombok annotations or explicit accessors.
pub struct ModelBuilder<'a> {
    settings: &'a dyn Settings,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(settings: &'a dyn Settings) -> Self {
        Self { settings }
    }
}

impl TemplateBuilder for ModelBuilder<'_> {
    fn template_type(&self) -> TemplateType {
        TemplateType::Model
    }

    fn settings(&self) -> &dyn Settings {
        self.settings
    }

    fn add_custom_information(
        &self,
        model: &mut TemplateModel,
        file_information: &FileInformation,
        gen_type_model: &GenTypeModel,
    ) {
        self.add_type_field(model, gen_type_model, TemplateType::Model);

        let fields: Vec<FlattenedField> =
            file_information.fields().iter().map(Field::flatten).collect();
        model.insert(FIELDS, &fields);

        let mut all_fields = file_information
            .fields()
            .iter()
            .chain(std::iter::once(file_information.id()));
        self.add_dependencies(model, &mut all_fields);
        self.add_id(model, file_information);

        if gen_type_model.use_lombok {
            model.insert(HEADER, &true);
        } else {
            let methods: Vec<Accessor> = std::iter::once(file_information.id())
                .chain(file_information.fields())
                .map(Accessor::for_field)
                .collect();
            model.insert(METHODS, &methods);
        }
    }
}

/// Spring Data repository for the model.
pub struct RepositoryBuilder<'a> {
    settings: &'a dyn Settings,
}

impl<'a> RepositoryBuilder<'a> {
    pub fn new(settings: &'a dyn Settings) -> Self {
        Self { settings }
    }
}

impl TemplateBuilder for RepositoryBuilder<'_> {
    fn template_type(&self) -> TemplateType {
        TemplateType::Repository
    }

    fn settings(&self) -> &dyn Settings {
        self.settings
    }

    fn add_custom_information(
        &self,
        model: &mut TemplateModel,
        file_information: &FileInformation,
        gen_type_model: &GenTypeModel,
    ) {
        self.add_type_field(model, gen_type_model, TemplateType::Repository);
        self.add_type_field(model, gen_type_model, TemplateType::Model);
        self.add_dependencies(model, &mut std::iter::once(file_information.id()));
        self.add_id(model, file_information);
        self.add_id_type(model, file_information);
    }
}

/// Service delegating to the repository.
pub struct ServiceBuilder<'a> {
    settings: &'a dyn Settings,
}

impl<'a> ServiceBuilder<'a> {
    pub fn new(settings: &'a dyn Settings) -> Self {
        Self { settings }
    }
}

impl TemplateBuilder for ServiceBuilder<'_> {
    fn template_type(&self) -> TemplateType {
        TemplateType::Service
    }

    fn settings(&self) -> &dyn Settings {
        self.settings
    }

    fn add_custom_information(
        &self,
        model: &mut TemplateModel,
        file_information: &FileInformation,
        gen_type_model: &GenTypeModel,
    ) {
        self.add_type_field(model, gen_type_model, TemplateType::Service);
        self.add_type_field(model, gen_type_model, TemplateType::Repository);
        self.add_type_field(model, gen_type_model, TemplateType::Model);
        self.add_dependencies(model, &mut std::iter::once(file_information.id()));
        self.add_id(model, file_information);
        self.add_id_type(model, file_information);
    }
}

/// REST controller delegating to the service.
pub struct ControllerBuilder<'a> {
    settings: &'a dyn Settings,
}

impl<'a> ControllerBuilder<'a> {
    pub fn new(settings: &'a dyn Settings) -> Self {
        Self { settings }
    }
}

impl TemplateBuilder for ControllerBuilder<'_> {
    fn template_type(&self) -> TemplateType {
        TemplateType::Controller
    }

    fn settings(&self) -> &dyn Settings {
        self.settings
    }

    fn add_custom_information(
        &self,
        model: &mut TemplateModel,
        file_information: &FileInformation,
        gen_type_model: &GenTypeModel,
    ) {
        self.add_type_field(model, gen_type_model, TemplateType::Controller);
        self.add_type_field(model, gen_type_model, TemplateType::Service);
        self.add_type_field(model, gen_type_model, TemplateType::Model);
        self.add_dependencies(model, &mut std::iter::once(file_information.id()));
        self.add_id(model, file_information);
        self.add_id_type(model, file_information);
    }
}
