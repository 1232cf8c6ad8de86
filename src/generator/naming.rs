//! Identifier and package-path helpers.

/// Convert a snake_case or camelCase identifier to PascalCase.
///
/// Underscores separate words; the first letter of each word is upper-cased
/// and the rest is kept as written, so `ExampleClass` is left untouched.
pub fn to_camel_case(s: &str) -> String {
    s.split('_')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert an identifier to camelCase (`ExampleClass` → `exampleClass`).
pub fn to_lower_camel_case(s: &str) -> String {
    let pascal = to_camel_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Join package path segments into a dotted package name.
///
/// Segments may use `/` or `.` as separators; empty segments are dropped, so
/// leading and doubled separators disappear.
pub fn compose_package(base_path: &str, relative_package: &str, sub_dir_path: &str) -> String {
    [base_path, relative_package, sub_dir_path]
        .iter()
        .flat_map(|segment| segment.split(['/', '\\', '.']))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Relative directory of a dotted package, e.g. `com.example` → `com/example`.
pub fn package_to_path(package: &str) -> std::path::PathBuf {
    package
        .split('.')
        .filter(|part| !part.is_empty())
        .collect()
}
