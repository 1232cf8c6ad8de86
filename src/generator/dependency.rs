//! Type-name to import resolution.
//!
//! Built-in names come from a static table and never reach the search
//! collaborator. Anything else is a custom type and must match exactly one
//! class found by a [`ClassSearch`].

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use super::types::{Dependency, Type, TypeDeclaration};
use crate::error::{ErrorCause, Result};

/// Built-in type names and their import, `None` for names that need none.
const BUILT_IN_TYPES: &[(&str, Option<&str>)] = &[
    // primitives
    ("boolean", None),
    ("byte", None),
    ("char", None),
    ("short", None),
    ("int", None),
    ("long", None),
    ("float", None),
    ("double", None),
    // java.lang
    ("Boolean", None),
    ("Byte", None),
    ("Character", None),
    ("Short", None),
    ("Integer", None),
    ("Long", None),
    ("Float", None),
    ("Double", None),
    ("Number", None),
    ("String", None),
    ("Object", None),
    // java.math
    ("BigDecimal", Some("java.math.BigDecimal")),
    ("BigInteger", Some("java.math.BigInteger")),
    // java.util
    ("Collection", Some("java.util.Collection")),
    ("List", Some("java.util.List")),
    ("ArrayList", Some("java.util.ArrayList")),
    ("LinkedList", Some("java.util.LinkedList")),
    ("Set", Some("java.util.Set")),
    ("HashSet", Some("java.util.HashSet")),
    ("TreeSet", Some("java.util.TreeSet")),
    ("Map", Some("java.util.Map")),
    ("HashMap", Some("java.util.HashMap")),
    ("TreeMap", Some("java.util.TreeMap")),
    ("Optional", Some("java.util.Optional")),
    ("Date", Some("java.util.Date")),
    ("UUID", Some("java.util.UUID")),
    // java.time
    ("Instant", Some("java.time.Instant")),
    ("LocalDate", Some("java.time.LocalDate")),
    ("LocalDateTime", Some("java.time.LocalDateTime")),
    ("LocalTime", Some("java.time.LocalTime")),
    ("ZonedDateTime", Some("java.time.ZonedDateTime")),
    ("OffsetDateTime", Some("java.time.OffsetDateTime")),
    ("Duration", Some("java.time.Duration")),
];

static BUILT_IN_INDEX: Lazy<HashMap<&'static str, Option<&'static str>>> =
    Lazy::new(|| BUILT_IN_TYPES.iter().copied().collect());

/// Look up a built-in name.
///
/// Returns `None` for custom types, `Some(None)` for built-ins without an
/// import and `Some(Some(path))` otherwise.
pub fn built_in(name: &str) -> Option<Option<&'static str>> {
    BUILT_IN_INDEX.get(name).copied()
}

/// Every built-in name with its import, in table order.
pub fn built_in_types() -> &'static [(&'static str, Option<&'static str>)] {
    BUILT_IN_TYPES
}

/// Boxed form of a primitive, usable as a generic argument.
pub fn boxed_type_name(name: &str) -> &str {
    match name {
        "boolean" => "Boolean",
        "byte" => "Byte",
        "char" => "Character",
        "short" => "Short",
        "int" => "Integer",
        "long" => "Long",
        "float" => "Float",
        "double" => "Double",
        other => other,
    }
}

/// Finds fully-qualified candidates for a simple class name.
pub trait ClassSearch {
    fn find_classes_with_name(&self, simple_name: &str) -> Result<Vec<String>>;
}

impl<S: ClassSearch + ?Sized> ClassSearch for &S {
    fn find_classes_with_name(&self, simple_name: &str) -> Result<Vec<String>> {
        (**self).find_classes_with_name(simple_name)
    }
}

impl<S: ClassSearch + ?Sized> ClassSearch for Box<S> {
    fn find_classes_with_name(&self, simple_name: &str) -> Result<Vec<String>> {
        (**self).find_classes_with_name(simple_name)
    }
}

/// A parsed type expression: `Outer<Inner1, Inner2>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr {
    pub name: String,
    pub params: Vec<TypeExpr>,
}

impl TypeExpr {
    /// Parse a declaration such as `Map<List<Integer>, Owner>` or `Owner[]`.
    pub fn parse(declaration: &str) -> Result<Self> {
        let mut parser = TypeParser {
            source: declaration,
            chars: declaration.char_indices().peekable(),
        };
        let expr = parser.parse_expr()?;
        parser.skip_whitespace();
        if let Some(&(_, c)) = parser.chars.peek() {
            return Err(parser.error(format!("unexpected '{c}'")));
        }
        Ok(expr)
    }

    /// Pre-order walk: self first, then each parameter recursively.
    fn collect_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.name);
        for param in &self.params {
            param.collect_names(out);
        }
    }
}

struct TypeParser<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl TypeParser<'_> {
    fn error(&self, reason: impl Into<String>) -> crate::error::PlasterError {
        ErrorCause::InvalidType {
            declaration: self.source.to_string(),
            reason: reason.into(),
        }
        .into()
    }

    /// Consume `keyword` when it is the next whole word.
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let Some(&(start, _)) = self.chars.peek() else {
            return false;
        };
        let rest = &self.source[start..];
        let whole_word = rest.strip_prefix(keyword).is_some_and(|after| {
            after
                .chars()
                .next()
                .is_some_and(|c| c.is_whitespace())
        });
        if !whole_word {
            return false;
        }
        for _ in 0..keyword.chars().count() {
            self.chars.next();
        }
        true
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn parse_expr(&mut self) -> Result<TypeExpr> {
        self.skip_whitespace();
        let mut name = String::new();
        while let Some((_, c)) = self
            .chars
            .next_if(|(_, c)| c.is_alphanumeric() || matches!(c, '_' | '$' | '.' | '?'))
        {
            name.push(c);
        }
        if name.is_empty() {
            return Err(self.error("expected a type name"));
        }
        self.skip_whitespace();

        // bounded wildcard: the bound is the only type that needs resolving
        if name == "?" && (self.eat_keyword("extends") || self.eat_keyword("super")) {
            let bound = self.parse_expr()?;
            return Ok(TypeExpr {
                name,
                params: vec![bound],
            });
        }

        let mut params = Vec::new();
        if self.chars.next_if(|(_, c)| *c == '<').is_some() {
            loop {
                params.push(self.parse_expr()?);
                self.skip_whitespace();
                match self.chars.next() {
                    Some((_, ',')) => continue,
                    Some((_, '>')) => break,
                    Some((_, c)) => return Err(self.error(format!("unexpected '{c}'"))),
                    None => return Err(self.error("unclosed '<'")),
                }
            }
            self.skip_whitespace();
        }

        while self.chars.next_if(|(_, c)| *c == '[').is_some() {
            if self.chars.next_if(|(_, c)| *c == ']').is_none() {
                return Err(self.error("unclosed '['"));
            }
            self.skip_whitespace();
        }

        Ok(TypeExpr { name, params })
    }
}

/// Resolves type names to imports.
pub struct DependencyResolver<S> {
    search: S,
}

impl<S: ClassSearch> DependencyResolver<S> {
    pub fn new(search: S) -> Self {
        Self { search }
    }

    pub fn search(&self) -> &S {
        &self.search
    }

    /// Import required by `type_name`, or `None` when it needs none.
    ///
    /// Empty input resolves to `None`. For generic declarations every
    /// parameter is resolved as well (so an unresolvable parameter fails the
    /// call) and the outer type's import is returned.
    pub fn fetch_dependency(&self, type_name: &str) -> Result<Option<Dependency>> {
        let type_name = type_name.trim();
        if type_name.is_empty() {
            return Ok(None);
        }
        let declaration = self.resolve_declaration(type_name)?;
        Ok(declaration
            .types
            .into_iter()
            .next()
            .and_then(|t| t.dependency))
    }

    /// All imports required by `type_name`, outermost first.
    pub fn fetch_dependencies(&self, type_name: &str) -> Result<Vec<Dependency>> {
        let type_name = type_name.trim();
        if type_name.is_empty() {
            return Ok(Vec::new());
        }
        let declaration = self.resolve_declaration(type_name)?;
        Ok(declaration.types.into_iter().filter_map(|t| t.dependency).collect())
    }

    /// Parse `declaration` and resolve every type it mentions.
    ///
    /// Nesting depth is unbounded.
    pub fn resolve_declaration(&self, declaration: &str) -> Result<TypeDeclaration> {
        let expr = TypeExpr::parse(declaration)?;
        let mut names = Vec::new();
        expr.collect_names(&mut names);

        let types = names
            .into_iter()
            .map(|name| -> Result<Type> { Ok(Type::new(name, self.resolve_simple(name)?)) })
            .collect::<Result<Vec<_>>>()?;

        Ok(TypeDeclaration::new(declaration.trim(), types))
    }

    /// Resolve a single non-generic name.
    fn resolve_simple(&self, name: &str) -> Result<Option<Dependency>> {
        // wildcards and already-qualified names need no lookup
        if name == "?" {
            return Ok(None);
        }
        if let Some((outer, _)) = name.split_once('.') {
            // `java.time.Instant` is already an import; `Map.Entry` needs its outer class
            if outer.starts_with(|c: char| c.is_ascii_lowercase()) {
                return Ok(Some(Dependency::new(name)));
            }
            return self.resolve_simple(outer);
        }
        if let Some(path) = built_in(name) {
            return Ok(path.map(Dependency::new));
        }

        let mut candidates = self.search.find_classes_with_name(name)?;
        debug!(name, candidates = candidates.len(), "searched custom type");
        match candidates.len() {
            0 => Err(ErrorCause::DependencyNotFound {
                name: name.to_string(),
            }
            .into()),
            1 => Ok(candidates.pop().map(Dependency::new)),
            _ => Err(ErrorCause::DependencyAmbiguous {
                name: name.to_string(),
                candidates,
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::search::StaticSearch;
    use std::cell::Cell;

    /// Counts calls and answers every lookup with the same candidates.
    struct FixedSearch {
        candidates: Vec<String>,
        calls: Cell<usize>,
    }

    impl FixedSearch {
        fn new(candidates: &[&str]) -> Self {
            Self {
                candidates: candidates.iter().map(|c| c.to_string()).collect(),
                calls: Cell::new(0),
            }
        }
    }

    impl ClassSearch for FixedSearch {
        fn find_classes_with_name(&self, _simple_name: &str) -> Result<Vec<String>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.candidates.clone())
        }
    }

    #[test]
    fn test_empty_is_none() {
        let resolver = DependencyResolver::new(FixedSearch::new(&[]));
        assert_eq!(resolver.fetch_dependency("").unwrap(), None);
        assert_eq!(resolver.fetch_dependency("   ").unwrap(), None);
        assert_eq!(resolver.search().calls.get(), 0);
    }

    #[test]
    fn test_built_in_without_import() {
        let resolver = DependencyResolver::new(FixedSearch::new(&[]));
        assert_eq!(resolver.fetch_dependency("int").unwrap(), None);
        assert_eq!(resolver.fetch_dependency("String").unwrap(), None);
        assert_eq!(resolver.search().calls.get(), 0);
    }

    #[test]
    fn test_built_in_table_never_searches() {
        let resolver = DependencyResolver::new(FixedSearch::new(&["x.Y", "z.Y"]));
        for (name, path) in built_in_types() {
            let found = resolver.fetch_dependency(name).unwrap();
            assert_eq!(found.as_ref().map(|d| d.path.as_str()), *path, "{name}");
        }
        assert_eq!(resolver.search().calls.get(), 0);
        assert_eq!(
            resolver.fetch_dependency("List").unwrap(),
            Some(Dependency::new("java.util.List"))
        );
    }

    #[test]
    fn test_custom_single_candidate() {
        let resolver = DependencyResolver::new(FixedSearch::new(&["com.example.app.Example"]));
        assert_eq!(
            resolver.fetch_dependency("Example").unwrap(),
            Some(Dependency::new("com.example.app.Example"))
        );
        assert_eq!(resolver.search().calls.get(), 1);
    }

    #[test]
    fn test_custom_not_found_inside_generic() {
        let resolver = DependencyResolver::new(FixedSearch::new(&[]));
        let err = resolver
            .fetch_dependency("Map<List<Integer>, Something>")
            .unwrap_err();
        assert!(matches!(
            err.cause(),
            ErrorCause::DependencyNotFound { name } if name == "Something"
        ));
    }

    #[test]
    fn test_custom_ambiguous_inside_generic() {
        let resolver = DependencyResolver::new(FixedSearch::new(&["a.Something", "b.Something"]));
        let err = resolver
            .fetch_dependency("Map<List<Integer>, Something>")
            .unwrap_err();
        assert!(matches!(
            err.cause(),
            ErrorCause::DependencyAmbiguous { name, .. } if name == "Something"
        ));
    }

    #[test]
    fn test_nested_generic_resolves_every_level() {
        let search = StaticSearch::from_pairs([
            ("Owner", "com.example.app.Owner"),
            ("Pet", "com.example.app.Pet"),
        ]);
        let resolver = DependencyResolver::new(search);
        let deps = resolver
            .fetch_dependencies("Map<List<Owner>, Set<Pet>>")
            .unwrap();
        let paths: Vec<_> = deps.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "java.util.Map",
                "java.util.List",
                "com.example.app.Owner",
                "java.util.Set",
                "com.example.app.Pet",
            ]
        );
        assert_eq!(
            resolver.fetch_dependency("Map<List<Owner>, Set<Pet>>").unwrap(),
            Some(Dependency::new("java.util.Map"))
        );
    }

    #[test]
    fn test_resolve_declaration_keeps_display_name() {
        let resolver = DependencyResolver::new(StaticSearch::from_pairs([(
            "Example",
            "com.example.app.Example",
        )]));
        let decl = resolver.resolve_declaration(" List<Example> ").unwrap();
        assert_eq!(decl.name, "List<Example>");
        assert_eq!(
            decl.types,
            vec![
                Type::new("List", Some(Dependency::new("java.util.List"))),
                Type::new("Example", Some(Dependency::new("com.example.app.Example"))),
            ]
        );
    }

    #[test]
    fn test_array_and_qualified_names() {
        let resolver = DependencyResolver::new(FixedSearch::new(&[]));
        assert_eq!(resolver.fetch_dependency("byte[]").unwrap(), None);
        assert_eq!(
            resolver.fetch_dependency("org.acme.Money").unwrap(),
            Some(Dependency::new("org.acme.Money"))
        );
        assert_eq!(
            resolver.fetch_dependency("List<?>").unwrap(),
            Some(Dependency::new("java.util.List"))
        );
    }

    #[test]
    fn test_nested_class_imports_outer_class() {
        let resolver = DependencyResolver::new(StaticSearch::from_pairs([(
            "Owner",
            "com.example.app.Owner",
        )]));
        assert_eq!(
            resolver.fetch_dependency("Map.Entry").unwrap(),
            Some(Dependency::new("java.util.Map"))
        );
        assert_eq!(
            resolver.fetch_dependency("Owner.Address").unwrap(),
            Some(Dependency::new("com.example.app.Owner"))
        );
        assert_eq!(
            resolver
                .fetch_dependencies("List<Map.Entry<String, Owner>>")
                .unwrap(),
            vec![
                Dependency::new("java.util.List"),
                Dependency::new("java.util.Map"),
                Dependency::new("com.example.app.Owner"),
            ]
        );
        assert_eq!(
            resolver.fetch_dependency("java.time.Instant").unwrap(),
            Some(Dependency::new("java.time.Instant"))
        );
    }

    #[test]
    fn test_bounded_wildcards_resolve_bound() {
        let resolver = DependencyResolver::new(StaticSearch::from_pairs([(
            "Owner",
            "com.example.app.Owner",
        )]));
        assert_eq!(
            resolver.fetch_dependencies("List<? extends Number>").unwrap(),
            vec![Dependency::new("java.util.List")]
        );
        assert_eq!(
            resolver
                .fetch_dependencies("Map<String, ? super Owner>")
                .unwrap(),
            vec![
                Dependency::new("java.util.Map"),
                Dependency::new("com.example.app.Owner"),
            ]
        );
        let decl = resolver.resolve_declaration("List<? extends Owner>").unwrap();
        let names: Vec<&str> = decl.types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["List", "?", "Owner"]);
        assert!(TypeExpr::parse("List<? extends>").is_err());
    }

    #[test]
    fn test_malformed_declarations() {
        for bad in ["List<", "Map<String,>", "List<String>>", "<String>", "int[", "A B"] {
            let err = TypeExpr::parse(bad).unwrap_err();
            assert!(
                matches!(err.cause(), ErrorCause::InvalidType { .. }),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_boxed_type_name() {
        assert_eq!(boxed_type_name("long"), "Long");
        assert_eq!(boxed_type_name("int"), "Integer");
        assert_eq!(boxed_type_name("UUID"), "UUID");
    }
}
