//! Integration tests for treescribe


use assert_cmd::Command;
use harness::{TestTree, run_treescribe};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_writes_structure_txt() {
    let tree = TestTree::named("root");
    tree.add_file("a.txt");
    tree.add_file("b.log");
    tree.add_file("node_modules/x.txt");

    let (_stdout, stderr, success) = run_treescribe(tree.path(), &[]);
    assert!(success, "treescribe should succeed: {}", stderr);
    assert_eq!(tree.read("structure.txt"), "root\n└── a.txt\n");
}

#[test]
fn test_second_run_picks_numbered_name() {
    let tree = TestTree::new();
    tree.add_file("src/main.rs");

    let (_, _, first_ok) = run_treescribe(tree.path(), &[]);
    let (_, _, second_ok) = run_treescribe(tree.path(), &[]);
    assert!(first_ok && second_ok);

    // The earlier output file is excluded by the default name pattern
    assert_eq!(tree.read("structure.txt"), tree.read("structure(1).txt"));
    assert!(!tree.read("structure(1).txt").contains("structure"));
}

#[test]
fn test_overwrite_keeps_fixed_name() {
    let tree = TestTree::new();
    tree.add_file("one.txt");

    assert!(run_treescribe(tree.path(), &["--overwrite"]).2);
    tree.add_file("two.txt");
    assert!(run_treescribe(tree.path(), &["--overwrite"]).2);

    assert!(!tree.path().join("structure(1).txt").exists());
    assert_eq!(tree.read("structure.txt"), "root\n├── one.txt\n└── two.txt\n");
}

#[test]
fn test_custom_output_name_is_not_listed() {
    let tree = TestTree::new();
    tree.add_file("main.rs");

    let (_, stderr, success) = run_treescribe(tree.path(), &["-o", "layout.md"]);
    assert!(success, "{}", stderr);
    assert_eq!(tree.read("layout.md"), "root\n└── main.rs\n");
}

#[test]
fn test_custom_output_name_second_run_identical() {
    let tree = TestTree::new();
    tree.add_file("main.rs");

    let (_, stderr, success) = run_treescribe(tree.path(), &["-o", "layout.md"]);
    assert!(success, "{}", stderr);
    let (_, stderr, success) = run_treescribe(tree.path(), &["-o", "layout.md"]);
    assert!(success, "{}", stderr);

    assert_eq!(tree.read("layout.md"), tree.read("layout(1).md"));
    assert_eq!(tree.read("layout(1).md"), "root\n└── main.rs\n");
}

#[test]
fn test_merge_flag() {
    let tree = TestTree::new();
    tree.add_file("src/main/java/com/example/App.java");
    tree.add_file("pom.xml");

    let (_, _, success) = run_treescribe(tree.path(), &["-m", "com", "-m", "example"]);
    assert!(success);
    assert_eq!(
        tree.read("structure.txt"),
        "root\n\
         ├── pom.xml\n\
         └── src\n    \
             └── main\n        \
                 └── java\n            \
                     com.example\n                \
                         └── App.java\n"
    );
}

#[test]
fn test_stdout_mode_writes_no_file() {
    let tree = TestTree::new();
    tree.add_file("lib.rs");

    let (stdout, _, success) = run_treescribe(tree.path(), &["--stdout", "--color", "never"]);
    assert!(success);
    assert_eq!(stdout, "root\n└── lib.rs\n");
    assert!(!tree.path().join("structure.txt").exists());
}

#[test]
fn test_path_argument() {
    let workdir = TestTree::named("work");
    let target = TestTree::named("target-dir");
    target.add_file("inner.txt");

    let target_path = target.path().to_string_lossy().to_string();
    let (_, stderr, success) = run_treescribe(workdir.path(), &[&target_path]);
    assert!(success, "{}", stderr);
    assert_eq!(workdir.read("structure.txt"), "target-dir\n└── inner.txt\n");
}

#[test]
fn test_config_file() {
    let tree = TestTree::new();
    tree.add_file("keep.rs");
    tree.add_file("drop.tmp");
    tree.add_file("vendor/lib.rs");
    let config_dir = TestTree::named("cfg");
    let config_path = config_dir.path().join("treescribe.json");
    fs::write(
        &config_path,
        r#"{
            "tree": { "ignored_names": ["vendor"], "ignored_extensions": [".tmp"] },
            "output": { "base_name": "tree", "extension": ".out" }
        }"#,
    )
    .unwrap();

    let config_arg = config_path.to_string_lossy().to_string();
    let (_, stderr, success) = run_treescribe(tree.path(), &["--config", &config_arg]);
    assert!(success, "{}", stderr);
    assert_eq!(tree.read("tree.out"), "root\n└── keep.rs\n");
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("treescribe")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--ignore"))
        .stdout(predicate::str::contains("--merge"))
        .stdout(predicate::str::contains("--overwrite"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("treescribe")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("treescribe"));
}

#[test]
fn test_verbose_logs_to_stderr_without_escapes() {
    let tree = TestTree::new();
    tree.add_file("a.txt");

    Command::cargo_bin("treescribe")
        .unwrap()
        .current_dir(tree.path())
        .env_remove("RUST_LOG")
        .args(["-v", "--stdout", "--color", "never"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_rust_log_overrides_verbose_flag() {
    let tree = TestTree::new();
    tree.add_file("a.txt");

    Command::cargo_bin("treescribe")
        .unwrap()
        .current_dir(tree.path())
        .env("RUST_LOG", "off")
        .args(["-v", "--stdout", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stderr(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("INFO").not());
}
