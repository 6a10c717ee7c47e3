use std::fs;

const DEFAULT_CONFIG: &str = "src/default_config.toml";
const ORDERED_LIST_MODES: [&str; 2] = ["strict", "lenient"];

fn main() {
    println!("cargo:rerun-if-changed={DEFAULT_CONFIG}");

    let content = fs::read_to_string(DEFAULT_CONFIG)
        .unwrap_or_else(|e| panic!("Cannot read {DEFAULT_CONFIG}: {e}"));
    let table: toml::Table = content
        .parse()
        .unwrap_or_else(|e| panic!("{DEFAULT_CONFIG} is not valid TOML: {e}"));

    for section in ["site", "markdown"] {
        if !table.get(section).is_some_and(toml::Value::is_table) {
            panic!("{DEFAULT_CONFIG} must have a [{section}] table");
        }
    }

    let mode = table["markdown"].get("ordered_list").and_then(toml::Value::as_str);
    if !mode.is_some_and(|mode| ORDERED_LIST_MODES.contains(&mode)) {
        panic!(
            "{DEFAULT_CONFIG}: markdown.ordered_list must be one of {ORDERED_LIST_MODES:?}, got {mode:?}"
        );
    }
}
