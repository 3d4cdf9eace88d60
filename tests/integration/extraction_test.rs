//! End-to-end extraction tests through the library API

use extract_methods::{extract_methods, ExtractionConfig, OutputFormat};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Decode the records of a legacy-format output, one object per line
fn legacy_records(output: &str) -> Vec<serde_json::Value> {
    assert!(output.starts_with("[\n"), "bad opening: {:?}", output);
    assert!(output.ends_with("]"), "bad closing: {:?}", output);
    output[2..output.len() - 1]
        .lines()
        .map(|line| {
            let object = line.strip_suffix(',').expect("record line ends with a comma");
            serde_json::from_str(object).unwrap()
        })
        .collect()
}

fn write_source(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_abstract_and_concrete_scenario() {
    let root = tempdir().unwrap();
    write_source(
        root.path(),
        "Shape.java",
        "public abstract class Shape {\n    public abstract void foo();\n    public int bar() { return 1; }\n}\n",
    );
    let out = tempdir().unwrap();
    let output = out.path().join("output.json");

    let stats = extract_methods(ExtractionConfig::new(root.path(), &output)).unwrap();
    assert_eq!(stats.files_parsed, 1);
    assert_eq!(stats.files_failed, 0);
    assert_eq!(stats.records_written, 2);

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(
        contents,
        concat!(
            "[\n",
            "{\"name\":\"foo\",\"method\":\"public abstract void foo();\",\"hasBody\":false},\n",
            "{\"name\":\"bar\",\"method\":\"public int bar() { return 1; }\",\"hasBody\":true},\n",
            "]"
        )
    );
}

#[test]
fn test_unparseable_file_contributes_nothing() {
    let root = tempdir().unwrap();
    write_source(root.path(), "Broken.java", "public class { broken");
    let out = tempdir().unwrap();
    let output = out.path().join("output.json");

    let stats = extract_methods(ExtractionConfig::new(root.path(), &output)).unwrap();
    assert_eq!(stats.files_parsed, 0);
    assert_eq!(stats.files_failed, 1);
    assert_eq!(fs::read_to_string(&output).unwrap(), "[\n]");
}

#[test]
fn test_counts_cover_every_matching_file() {
    let root = tempdir().unwrap();
    write_source(root.path(), "a/A.java", "class A { void a() {} }");
    write_source(root.path(), "a/b/B.java", "interface B { void b(); void c(); }");
    write_source(root.path(), "a/b/Bad.java", "class Bad { void x( }");
    write_source(root.path(), "c/Readme.md", "class NotJava { void no() {} }");
    write_source(root.path(), "c/C.java.orig", "class Orig { void no() {} }");
    let out = tempdir().unwrap();
    let output = out.path().join("output.json");

    let stats = extract_methods(ExtractionConfig::new(root.path(), &output)).unwrap();
    assert_eq!(stats.total_files(), 3);
    assert_eq!(stats.files_parsed, 2);
    assert_eq!(stats.files_failed, 1);

    let records = legacy_records(&fs::read_to_string(&output).unwrap());
    assert_eq!(records.len(), 3);
    let mut names: Vec<&str> = records.iter().map(|r| r["name"].as_str().unwrap()).collect();
    names.sort();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_nested_declarations_in_pre_order() {
    let root = tempdir().unwrap();
    write_source(
        root.path(),
        "Outer.java",
        r#"
public class Outer {
    public void outer() {
        Comparable<String> c = new Comparable<String>() {
            @Override
            public int compareTo(String o) { return 0; }
        };
    }
    interface Callback {
        void call();
    }
    static class Inner {
        private static void helper() {}
    }
}
"#,
    );
    let out = tempdir().unwrap();
    let output = out.path().join("output.json");

    extract_methods(ExtractionConfig::new(root.path(), &output)).unwrap();
    let records = legacy_records(&fs::read_to_string(&output).unwrap());

    let summary: Vec<(&str, bool)> = records
        .iter()
        .map(|r| (r["name"].as_str().unwrap(), r["hasBody"].as_bool().unwrap()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("outer", true),
            ("compareTo", true),
            ("call", false),
            ("helper", true)
        ]
    );
}

#[test]
fn test_quotes_are_escaped_once_each() {
    let root = tempdir().unwrap();
    let method = r#"String greet() { return "hi \"there\""; }"#;
    write_source(root.path(), "Q.java", &format!("class Q {{ {} }}", method));
    let out = tempdir().unwrap();
    let output = out.path().join("output.json");

    extract_methods(ExtractionConfig::new(root.path(), &output)).unwrap();
    let records = legacy_records(&fs::read_to_string(&output).unwrap());
    let emitted = records[0]["method"].as_str().unwrap();

    let quotes = method.matches('"').count();
    assert_eq!(emitted.matches("\\\"").count(), quotes);
    assert_eq!(emitted, method.replace('"', "\\\""));
}

#[test]
fn test_text_without_quotes_round_trips() {
    let root = tempdir().unwrap();
    let method = "protected <T extends Number> T first(java.util.List<T> items) {\n        return items.get(0);\n    }";
    write_source(root.path(), "G.java", &format!("class G {{\n    {}\n}}\n", method));
    let out = tempdir().unwrap();
    let output = out.path().join("output.json");

    extract_methods(ExtractionConfig::new(root.path(), &output)).unwrap();
    let records = legacy_records(&fs::read_to_string(&output).unwrap());
    assert_eq!(records[0]["method"], method);
}

#[test]
fn test_runs_are_byte_identical() {
    let root = tempdir().unwrap();
    for (i, dir) in ["x", "y", "z"].iter().enumerate() {
        write_source(
            root.path(),
            &format!("{}/F{}.java", dir, i),
            &format!("class F{} {{ int v{}() {{ return {}; }} }}", i, i, i),
        );
    }
    let out = tempdir().unwrap();
    let first = out.path().join("first.json");
    let second = out.path().join("second.json");

    extract_methods(ExtractionConfig::new(root.path(), &first).with_sorted(true)).unwrap();
    extract_methods(ExtractionConfig::new(root.path(), &second).with_sorted(true)).unwrap();

    let first = fs::read(first).unwrap();
    assert_eq!(first, fs::read(second).unwrap());
    let records = legacy_records(std::str::from_utf8(&first).unwrap());
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["name"], "v0");
    assert_eq!(records[2]["name"], "v2");
}

#[test]
fn test_strict_output_is_valid_json() {
    let root = tempdir().unwrap();
    let method = r#"String s() { return "\"quoted\""; }"#;
    write_source(root.path(), "S.java", &format!("class S {{ {} void t(); }}", method));
    let out = tempdir().unwrap();
    let output = out.path().join("nested/dir/output.json");

    extract_methods(
        ExtractionConfig::new(root.path(), &output).with_format(OutputFormat::Strict),
    )
    .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["method"], method);
    assert_eq!(records[1]["hasBody"], false);
}

#[test]
fn test_missing_root_is_fatal() {
    let root = tempdir().unwrap();
    let out = tempdir().unwrap();
    let result = extract_methods(ExtractionConfig::new(
        root.path().join("missing"),
        out.path().join("output.json"),
    ));
    assert!(matches!(
        result,
        Err(extract_methods::ExtractionError::Traversal(_))
    ));
}
