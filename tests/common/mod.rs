#![allow(dead_code)]

pub mod project {
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    pub const SETTINGS: &str = r#"
app_path = "/com/example/app"
sub_dir_path = "/somewhere"

[packages]
model = "/model"
repository = "/repository"
service = "/service"
controller = "/controller"
"#;

    /// Temporary project with a `plaster.toml` and an empty source root.
    pub struct TempProject {
        dir: TempDir,
    }

    impl TempProject {
        pub fn new() -> Self {
            Self::with_settings(SETTINGS)
        }

        pub fn with_settings(settings: &str) -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::write(dir.path().join("plaster.toml"), settings).unwrap();
            fs::create_dir_all(dir.path().join("src/main/java")).unwrap();
            Self { dir }
        }

        pub fn path(&self) -> &Path {
            self.dir.path()
        }

        pub fn source_root(&self) -> PathBuf {
            self.path().join("src/main/java")
        }

        /// Add an empty `<Name>.java` for a fully qualified class name.
        pub fn add_class(&self, qualified: &str) -> PathBuf {
            let rel = format!("{}.java", qualified.replace('.', "/"));
            let path = self.source_root().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            let simple = qualified.rsplit('.').next().unwrap();
            fs::write(&path, format!("public class {simple} {{}}\n")).unwrap();
            path
        }

        pub fn generated(&self, package_dir: &str, class_name: &str) -> PathBuf {
            self.source_root()
                .join(package_dir)
                .join(format!("{class_name}.java"))
        }
    }
}

pub mod fixtures {
    use plaster::generator::{built_in, Dependency, Field, FileInformation, Type, TypeDeclaration};

    fn builtin(name: &str) -> Type {
        Type::new(name, built_in(name).unwrap().map(Dependency::new))
    }

    fn field(type_name: &str, types: Vec<Type>, var_name: &str) -> Field {
        Field::new(TypeDeclaration::new(type_name, types), var_name)
    }

    /// `example_class` with a `List` id and `Map`, `List` and `Example` fields.
    pub fn example_file_information() -> FileInformation {
        FileInformation::new(
            "example_class",
            field("List", vec![builtin("List")], "id"),
            vec![
                field("Map", vec![builtin("Map")], "var1"),
                field("List", vec![builtin("List")], "var2"),
                field(
                    "Example",
                    vec![Type::new("Example", Some(Dependency::new("com.example.app.Example")))],
                    "var3",
                ),
            ],
        )
    }
}
