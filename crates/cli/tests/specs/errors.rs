//! Error reporting specs
//!
//! Invalid input exits 1 with `Error: <message>` on stderr.

use crate::prelude::*;

#[test]
fn unrecognised_shorthand_echoes_input() {
    cli()
        .args(&["parse", "2S1S"])
        .fails()
        .code(1)
        .stderr_eq("Error: Unrecognised shorthand: 2S1S\n");
}

#[test]
fn bare_unit_is_rejected() {
    cli()
        .args(&["parse", "ms"])
        .fails()
        .stderr_eq("Error: Unrecognised shorthand: ms\n");
}

#[test]
fn first_invalid_shorthand_prints_nothing_to_stdout() {
    cli()
        .args(&["parse", "1s", "2w1xs"])
        .fails()
        .stdout_eq("")
        .stderr_has("Unrecognised shorthand: 2w1xs");
}

#[test]
fn overflow_is_reported() {
    cli()
        .args(&["parse", "99999999999999999999ms"])
        .fails()
        .stderr_has("exceeds the millisecond range");
}

#[test]
fn missing_explicit_unit_file_fails() {
    cli()
        .args(&["parse", "--units", "/nonexistent/units.toml", "1s"])
        .fails()
        .code(1)
        .stderr_has("failed to read unit file /nonexistent/units.toml");
}

#[test]
fn invalid_unit_definition_fails() {
    let units = UnitsFile::new("[units]\ntick = 0\n");
    cli()
        .args(&["units", "--units", units.path_str()])
        .fails()
        .stderr_has("invalid multiplier for unit 'tick'");
}

#[test]
fn malformed_unit_file_fails() {
    let units = UnitsFile::new("[units\n");
    cli()
        .args(&["units", "--units", units.path_str()])
        .fails()
        .stderr_has("invalid unit file");
}
