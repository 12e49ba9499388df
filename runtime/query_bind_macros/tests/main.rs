// `trybuild` tests are incredibly slow to compile on Windows, so we skip them
// to avoid slowing down the CI pipeline. They still run on Linux and macOS,
// and the outcome is not really platform-dependent.
#[cfg(not(target_os = "windows"))]
#[test]
fn derive() {
    let t = trybuild::TestCases::new();

    // Tests for `#[derive(Bind)]`
    t.pass("tests/derive_bind/success/*.rs");

    // Tests for `#[derive(QueryValue)]`
    t.pass("tests/derive_query_value/success/*.rs");
}
