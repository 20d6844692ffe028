/// Generates one test function per .txt file in tests/fixtures/.
/// Each fixture pairs an input `<name>.txt` with its expected `<name>.html`.
fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let dest = std::path::Path::new(&out_dir).join("fixture_tests.rs");
    let mut code = String::from(
        r#"mod formatting_fixtures {
    use super::fixture_test;
"#,
    );
    let mut entries: Vec<_> = std::fs::read_dir("tests/fixtures")
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    entries.sort_by_key(|e| e.path());
    for entry in entries {
        let path = entry.path();
        if path.extension().is_some_and(|e| e == "txt") {
            let name = path.file_stem().unwrap().to_str().unwrap();
            code.push_str(&format!(
                r#"
    #[test]
    fn {name}() {{
        fixture_test("{name}");
    }}
"#
            ));
        }
    }
    code.push_str("}\n");
    std::fs::write(&dest, code).unwrap();
    // Rerun if fixtures change
    println!("cargo::rerun-if-changed=tests/fixtures");
}
