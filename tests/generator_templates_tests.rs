mod common;

use common::fixtures::example_file_information;
use plaster::config::Setting;
use plaster::generator::{GenTypeModel, Generator, TemplateRenderer, TemplateType};
use std::collections::HashMap;
use std::fs;

fn generator() -> Generator {
    let settings: HashMap<Setting, String> = [
        (Setting::AppPath, "/com/example/app"),
        (Setting::RelModelPackage, "/model"),
        (Setting::RelRepositoryPackage, "/repository"),
        (Setting::RelServicePackage, "/service"),
        (Setting::RelControllerPackage, "/controller"),
        (Setting::SubDirPath, "/somewhere"),
    ]
    .into_iter()
    .map(|(k, v)| (k, v.to_string()))
    .collect();
    Generator::with_renderer(Box::new(settings), TemplateRenderer::new().unwrap())
}

#[test]
fn test_render_model_lombok_enabled() {
    let expected = "\
package com.example.app.model.somewhere;

import javax.persistence.*;

import java.util.Map;
import java.util.List;
import com.example.app.Example;

import lombok.AllArgsConstructor;
import lombok.Builder;
import lombok.Data;
import lombok.NoArgsConstructor;

@AllArgsConstructor
@Builder
@Data
@NoArgsConstructor
@Entity
public class ExampleClass {

    @Id
    @GeneratedValue(strategy = GenerationType.AUTO)
    private List id;

    private Map var1;

    private List var2;

    private Example var3;

}
";
    let actual = generator()
        .render(
            TemplateType::Model,
            &example_file_information(),
            &GenTypeModel::new("ExampleClass", true),
        )
        .unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_render_model_lombok_disabled() {
    let expected = "\
package com.example.app.model.somewhere;

import javax.persistence.*;

import java.util.Map;
import java.util.List;
import com.example.app.Example;

@Entity
public class ExampleClass {

    @Id
    @GeneratedValue(strategy = GenerationType.AUTO)
    private List id;

    private Map var1;

    private List var2;

    private Example var3;

    public List getId() {
        return this.id;
    }

    public void setId(List id) {
        this.id = id;
    }

    public Map getVar1() {
        return this.var1;
    }

    public void setVar1(Map var1) {
        this.var1 = var1;
    }

    public List getVar2() {
        return this.var2;
    }

    public void setVar2(List var2) {
        this.var2 = var2;
    }

    public Example getVar3() {
        return this.var3;
    }

    public void setVar3(Example var3) {
        this.var3 = var3;
    }

}
";
    let actual = generator()
        .render(
            TemplateType::Model,
            &example_file_information(),
            &GenTypeModel::new("ExampleClass", false),
        )
        .unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_render_repository() {
    let expected = "\
package com.example.app.repository.somewhere;

import org.springframework.data.domain.Page;
import org.springframework.data.domain.Pageable;
import org.springframework.data.jpa.domain.Specification;
import org.springframework.data.repository.CrudRepository;

import java.util.List;

import com.example.app.model.somewhere.ExampleClass;

public interface ExampleClassRepository extends CrudRepository<ExampleClass, List> {

    Page<ExampleClass> findAll(Specification<ExampleClass> spec, Pageable pageInfo);

    ExampleClass findOne(Specification<ExampleClass> spec);

}";
    let actual = generator()
        .render(
            TemplateType::Repository,
            &example_file_information(),
            &GenTypeModel::new("ExampleClass", false),
        )
        .unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_render_service() {
    let actual = generator()
        .render(
            TemplateType::Service,
            &example_file_information(),
            &GenTypeModel::new("example_class", false),
        )
        .unwrap();
    assert!(actual.starts_with("package com.example.app.service.somewhere;\n"));
    assert!(actual.contains("import com.example.app.model.somewhere.ExampleClass;\n"));
    assert!(
        actual.contains("import com.example.app.repository.somewhere.ExampleClassRepository;\n")
    );
    assert!(actual.contains("public class ExampleClassService {"));
    assert!(actual.contains("private final ExampleClassRepository exampleClassRepository;"));
    assert!(actual.contains("public ExampleClass findOne(List id) {"));
    assert!(actual.ends_with("}\n"));
}

#[test]
fn test_render_controller() {
    let actual = generator()
        .render(
            TemplateType::Controller,
            &example_file_information(),
            &GenTypeModel::new("example_class", false),
        )
        .unwrap();
    assert!(actual.starts_with("package com.example.app.controller.somewhere;\n"));
    assert!(actual.contains("import com.example.app.service.somewhere.ExampleClassService;\n"));
    assert!(actual.contains("@RequestMapping(\"/exampleClass\")"));
    assert!(actual.contains("public class ExampleClassController {"));
    assert!(actual.contains("@GetMapping(\"/{id}\")"));
    assert!(actual.contains("public void delete(@PathVariable List id) {"));
}

#[test]
fn test_render_is_deterministic() {
    let generator = generator();
    let info = example_file_information();
    let options = GenTypeModel::new("example_class", true);
    for kind in TemplateType::ALL {
        assert_eq!(
            generator.render(kind, &info, &options).unwrap(),
            generator.render(kind, &info, &options).unwrap()
        );
    }
}

#[test]
fn test_template_override_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("model")).unwrap();
    fs::write(
        dir.path().join("model/model.jinja"),
        "// {{ modelField.className }} in {{ modelField.packagePath }}\n",
    )
    .unwrap();

    let renderer = TemplateRenderer::with_template_dir(dir.path()).unwrap();
    let generator = Generator::with_renderer(
        Box::new(HashMap::from([(Setting::AppPath, "com.example".to_string())])),
        renderer,
    );
    let info = example_file_information();
    let options = GenTypeModel::new("pet", false);

    assert_eq!(
        generator.render(TemplateType::Model, &info, &options).unwrap(),
        "// Pet in com.example\n"
    );
    // Kinds without an override keep the built-in template.
    assert!(generator
        .render(TemplateType::Repository, &info, &options)
        .unwrap()
        .contains("public interface PetRepository"));
}

#[test]
fn test_undefined_placeholder_fails_render() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("service")).unwrap();
    fs::write(dir.path().join("service/service.jinja"), "{{ notThere.className }}\n").unwrap();

    let generator = Generator::with_renderer(
        Box::new(HashMap::<Setting, String>::new()),
        TemplateRenderer::with_template_dir(dir.path()).unwrap(),
    );
    let err = generator
        .render(
            TemplateType::Service,
            &example_file_information(),
            &GenTypeModel::new("pet", false),
        )
        .unwrap_err();
    assert!(matches!(err.cause(), plaster::ErrorCause::Render { .. }));
}
