//! `name:Type` field specifications.

use once_cell::sync::Lazy;
use regex::Regex;

use super::dependency::{ClassSearch, DependencyResolver};
use super::naming::to_camel_case;
use super::types::{Field, FileInformation};
use crate::error::{ErrorCause, PlasterError, Result};

static JAVA_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier regex should be valid")
});

/// A field as written on the command line, before type resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub var_name: String,
    pub type_name: String,
}

impl FieldSpec {
    /// Parse `name:Type`; the type may be generic (`owners:List<Owner>`).
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = |reason: &str| -> PlasterError {
            ErrorCause::InvalidField {
                spec: spec.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        let (name, type_name) = spec
            .split_once(':')
            .ok_or_else(|| invalid("expected name:Type"))?;
        let name = name.trim();
        let type_name = type_name.trim();

        if !JAVA_IDENTIFIER.is_match(name) {
            return Err(invalid("name is not a valid identifier"));
        }
        if type_name.is_empty() {
            return Err(invalid("type is empty"));
        }

        Ok(Self {
            var_name: name.to_string(),
            type_name: type_name.to_string(),
        })
    }

    /// Resolve the declared type into a [`Field`].
    pub fn resolve<S: ClassSearch>(&self, resolver: &DependencyResolver<S>) -> Result<Field> {
        let declaration = resolver.resolve_declaration(&self.type_name)?;
        Ok(Field::new(declaration, self.var_name.clone()))
    }
}

/// Check that `name` camel-cases into a Java class name.
pub fn validate_class_name(name: &str) -> Result<()> {
    let class_name = to_camel_case(name);
    let reason = if class_name.is_empty() {
        "name is empty"
    } else if !JAVA_IDENTIFIER.is_match(&class_name) {
        "name is not a valid identifier"
    } else {
        return Ok(());
    };
    Err(ErrorCause::InvalidClassName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
    .into())
}

impl FileInformation {
    /// Parse and resolve every field of a class.
    ///
    /// Fails on a malformed class name, or on the first malformed
    /// specification or unresolvable type, so a
    /// class is either fully described or not at all.
    pub fn resolve<S, I, T>(
        base_class_name: &str,
        id_spec: &str,
        field_specs: I,
        resolver: &DependencyResolver<S>,
    ) -> Result<Self>
    where
        S: ClassSearch,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        validate_class_name(base_class_name)?;
        let id = FieldSpec::parse(id_spec)?.resolve(resolver)?;
        let fields = field_specs
            .into_iter()
            .map(|spec| FieldSpec::parse(spec.as_ref())?.resolve(resolver))
            .collect::<Result<Vec<_>>>()?;
        Ok(FileInformation::new(base_class_name, id, fields))
    }
}
