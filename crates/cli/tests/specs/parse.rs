//! `dur parse` specs

use crate::prelude::*;

#[test]
fn parses_simple_and_compound_shorthands() {
    cli()
        .args(&["parse", "42ms", "42h30m15s", "1h1h"])
        .passes()
        .stdout_eq("42\n153015000\n7200000\n");
}

#[test]
fn parses_every_builtin_unit() {
    cli()
        .args(&["parse", "1ms", "1s", "1m", "1h", "1d", "1w", "1M", "1y"])
        .passes()
        .stdout_eq("1\n1000\n60000\n3600000\n86400000\n604800000\n2592000000\n31536000000\n");
}

#[test]
fn json_output_includes_parts() {
    let run = cli().args(&["parse", "-o", "json", "42m5s"]).passes();
    let value = run.stdout_json();
    assert_eq!(value[0]["input"], "42m5s");
    assert_eq!(value[0]["millis"], 2_525_000);
    assert_eq!(value[0]["parts"][0]["amount"], 42);
    assert_eq!(value[0]["parts"][0]["unit"], "m");
}

#[test]
fn custom_units_from_flag() {
    let units = UnitsFile::new("[units]\nhrs = 3600000\n");
    cli()
        .args(&["parse", "--units", units.path_str(), "2hrs", "1h2hrs"])
        .passes()
        .stdout_eq("7200000\n10800000\n");
}

#[test]
fn custom_units_from_environment() {
    let units = UnitsFile::new("[units]\nfortnight = 1209600000\n");
    cli()
        .args(&["parse", "1fortnight"])
        .env("DUR_UNITS_FILE", units.path())
        .passes()
        .stdout_eq("1209600000\n");
}

#[test]
fn custom_units_from_config_home() {
    let units = UnitsFile::new("[units]\nhrs = 3600000\n");
    cli()
        .args(&["parse", "3hrs"])
        .env("XDG_CONFIG_HOME", units.as_config_home())
        .passes()
        .stdout_eq("10800000\n");
}

#[test]
fn unit_file_reset_drops_builtins() {
    let units = UnitsFile::new("reset = true\n[units]\ntick = 50\n");
    cli()
        .args(&["parse", "--units", units.path_str(), "1s"])
        .fails()
        .stderr_has("Unrecognised shorthand: 1s");
}
