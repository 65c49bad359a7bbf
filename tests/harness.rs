//! End-to-end tests of the evaluation driver.

use std::io::Write;

use gluescript::errors::Error;
use gluescript::Driver;

/// Creates a temporary glue script with the given body.
fn write_temp_script(body: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new()
        .suffix(".glue")
        .tempfile()
        .expect("create temp file");
    write!(f, "{body}").expect("write body");
    f
}

fn path_of(f: &tempfile::NamedTempFile) -> String {
    f.path().to_str().expect("path").to_string()
}

fn run(paths: &[String]) -> (Result<(), Error>, String) {
    let mut driver = Driver::new().expect("resolve engine");
    let mut out = Vec::new();
    let result = driver.run(paths, &mut out);
    (result, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn single_script_prints_its_result() {
    let a = write_temp_script("1 + 1");
    let (result, output) = run(&[path_of(&a)]);
    assert!(result.is_ok());
    assert_eq!(output, "2\n");
}

#[test]
fn results_come_in_argument_order() {
    let a = write_temp_script("1 + 1");
    let b = write_temp_script("2 + 2");
    let (result, output) = run(&[path_of(&a), path_of(&b)]);
    assert!(result.is_ok());
    assert_eq!(output, "2\n4\n");

    // Reversing the arguments reverses the output.
    let (result, output) = run(&[path_of(&b), path_of(&a)]);
    assert!(result.is_ok());
    assert_eq!(output, "4\n2\n");
}

#[test]
fn zero_scripts_still_bootstrap() {
    let (result, output) = run(&[]);
    assert!(result.is_ok());
    assert_eq!(output, "");

    // The activation marker proves the bootstrap ran before any script.
    let marker = write_temp_script("glue_activated");
    let (result, output) = run(&[path_of(&marker)]);
    assert!(result.is_ok());
    assert_eq!(output, "true\n");
}

#[test]
fn first_failure_stops_the_run() {
    let a = write_temp_script("1 + 1");
    let bad = write_temp_script("syntax(((");
    let c = write_temp_script("3 + 3");
    let (result, output) = run(&[path_of(&a), path_of(&bad), path_of(&c)]);
    // Output for the scripts before the failure stands; nothing for the
    // failing script or anything after it.
    assert_eq!(output, "2\n");
    match result.unwrap_err() {
        Error::Compile { path, .. } => assert_eq!(path, path_of(&bad)),
        err => panic!("expected a compile error, got {err}"),
    }
}

#[test]
fn evaluation_failure_is_fatal_too() {
    let a = write_temp_script("\"ok\"");
    let bad = write_temp_script("1 / 0");
    let c = write_temp_script("3 + 3");
    let (result, output) = run(&[path_of(&a), path_of(&bad), path_of(&c)]);
    assert_eq!(output, "ok\n");
    assert!(matches!(result.unwrap_err(), Error::Evaluation { .. }));
}

#[test]
fn missing_script_names_the_path() {
    let (result, output) = run(&["no/such/script.glue".to_string()]);
    assert_eq!(output, "");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("no/such/script.glue"));
    assert!(matches!(err, Error::FileAccess { .. }));
}

#[test]
fn globals_persist_between_scripts() {
    let a = write_temp_script("x = 20\nx + 1");
    let b = write_temp_script("x * 2");
    let (result, output) = run(&[path_of(&a), path_of(&b)]);
    assert!(result.is_ok());
    assert_eq!(output, "21\n40\n");
}

#[test]
fn host_functions_are_available_to_scripts() {
    let a = write_temp_script("str(len(\"glue\")) + \"!\"");
    let (result, output) = run(&[path_of(&a)]);
    assert!(result.is_ok());
    assert_eq!(output, "4!\n");
}

#[test]
fn separate_runs_are_idempotent() {
    let a = write_temp_script("x = 3\nx * x");
    let b = write_temp_script("\"x is \" + str(x)");
    let paths = [path_of(&a), path_of(&b)];
    let (first_result, first_output) = run(&paths);
    let (second_result, second_output) = run(&paths);
    assert!(first_result.is_ok());
    assert!(second_result.is_ok());
    assert_eq!(first_output, "9\nx is 3\n");
    assert_eq!(first_output, second_output);
}
