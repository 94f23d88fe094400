#![expect(missing_docs)]

use core::fmt::Write;

use jsonnum::{LexerOptions, grind_partitioned, grind_with};

fn render_grind(inputs: &[&str], options: LexerOptions) -> String {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut out = String::new();
    for input in inputs {
        let outcome = grind_with(input, options).expect("grind failure");
        writeln!(out, "{input:?}->{outcome},{}", outcome.consumed).unwrap();
    }
    out
}

const INPUTS: [&str; 12] = [
    "100.0", "0", "-0.5", "+12", "1.", "1e5", "1E-07", "01", "1e", "-", "", "7,8",
];

#[test]
fn snapshot_grind_default() {
    insta::assert_snapshot!(render_grind(&INPUTS, LexerOptions::default()), @r#"
    "100.0"->100.0e0,5
    "0"->0e0,1
    "-0.5"->-0.5e0,4
    "+12"->12e0,3
    "1."->1.e0,2
    "1e5"->1e5,3
    "1E-07"->1e-07,5
    "01"->invalid number literal: unexpected '1' at offset 1,1
    "1e"->invalid number literal: unexpected end of input at offset 2,2
    "-"->invalid number literal: unexpected end of input at offset 1,1
    ""->invalid number literal: unexpected end of input at offset 0,0
    "7,8"->7e0,1
    "#);
}

#[test]
fn snapshot_grind_strict() {
    insta::assert_snapshot!(render_grind(&["+12", ".5", "-x", "-1.5e+3"], LexerOptions::strict()), @r#"
    "+12"->invalid number literal: unexpected '+' at offset 0,0
    ".5"->invalid number literal: unexpected '.' at offset 0,0
    "-x"->invalid number literal: unexpected 'x' at offset 1,1
    "-1.5e+3"->-1.5e3,7
    "#);
}

#[test]
fn partitioned_matches_every_split() {
    for input in INPUTS {
        let whole = grind_with(input, LexerOptions::default()).expect("grind failure");
        for parts in 1..=input.len().max(1) {
            let chunked =
                grind_partitioned(input, parts, LexerOptions::default()).expect("grind failure");
            assert_eq!(chunked, whole, "{input:?} in {parts} parts");
        }
    }
}
