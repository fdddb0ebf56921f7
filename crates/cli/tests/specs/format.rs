//! `dur format` specs

use crate::prelude::*;

#[test]
fn formats_largest_unit_first() {
    cli()
        .args(&["format", "420000", "1468800000", "1468800001"])
        .passes()
        .stdout_eq("7m\n2w3d\n2w3d1ms\n");
}

#[test]
fn formats_negative_and_zero() {
    cli()
        .args(&["format", "-5400000", "0"])
        .passes()
        .stdout_eq("-1h30m\n\n");
}

#[test]
fn json_pairs_millis_and_shorthand() {
    let run = cli().args(&["format", "-o", "json", "90000"]).passes();
    let value = run.stdout_json();
    assert_eq!(value[0]["millis"], 90_000);
    assert_eq!(value[0]["shorthand"], "1m30s");
}

#[test]
fn custom_units_take_part_in_decomposition() {
    let units = UnitsFile::new("[units]\nfortnight = 1209600000\n");
    cli()
        .args(&["format", "--units", units.path_str(), "1296000000"])
        .passes()
        .stdout_eq("1fortnight1d\n");
}
