use std::{
    fs,
    io::{stdout, Write},
};

use gluescript::Driver;

#[test]
fn test_scripts() {
    const DIR: &str = "./tests/scripts";
    let _ = writeln!(stdout(), "running all test scripts in {DIR:?}");
    for dir in fs::read_dir(DIR).expect("could not list dir") {
        let path = dir.expect("could not read dir entry").path();
        if path.extension().is_some_and(|ext| ext == "glue") {
            let _ = writeln!(stdout(), "running {:?}", path.file_name().unwrap());
            let mut driver = Driver::new().expect("could not resolve engine");
            let mut out = Vec::new();
            let paths = [path.to_str().expect("path").to_string()];
            if let Err(err) = driver.run(&paths, &mut out) {
                panic!("error encountered running: {err}");
            }
            // Every sample script yields exactly one output line.
            assert_eq!(out.iter().filter(|b| **b == b'\n').count(), 1);
        } else {
            let _ = writeln!(stdout(), "skipping file {path:?}");
        }
    }
}
