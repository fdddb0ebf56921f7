//! `dur units` specs

use crate::prelude::*;

#[test]
fn lists_builtins_largest_first() {
    cli().args(&["units"]).passes().stdout_eq(
        "\
y   31536000000
M   2592000000
w   604800000
d   86400000
h   3600000
m   60000
s   1000
ms  1
",
    );
}

#[test]
fn json_lists_symbols_and_millis() {
    let run = cli().args(&["units", "-o", "json"]).passes();
    let value = run.stdout_json();
    assert_eq!(value.as_array().unwrap().len(), 8);
    assert_eq!(value[0]["symbol"], "y");
    assert_eq!(value[7]["millis"], 1);
}

#[test]
fn includes_custom_units() {
    let units = UnitsFile::new("[units]\nhrs = 3600000\n");
    cli()
        .args(&["units", "--units", units.path_str()])
        .passes()
        .stdout_has("hrs  3600000");
}
