use std::fs;

use html2djform::generate;

pub fn read_fixture(name: &str) -> String {
    let test_dir = "tests/data/";
    fs::read_to_string(format!("{}{}", test_dir, name))
        .unwrap_or_else(|_| panic!("Unable to find fixture {name}"))
}

pub fn assert_generated_matches_expected(html_fn: &str, py_fn: &str, form_name: &str) {
    let generated = generate(&read_fixture(html_fn), form_name).unwrap();
    assert_eq!(generated, read_fixture(py_fn));
}
