use calc_shell::run_str;

fn assert_output(src: &str, expected: &str) {
    let transcript = run_str(src).unwrap();
    assert_eq!(transcript.err, "", "unexpected errors for {src:?}");
    assert_eq!(transcript.out, expected, "wrong output for {src:?}");
}

fn assert_errors(src: &str, expected: &[&str]) {
    let transcript = run_str(src).unwrap();
    let errors: Vec<&str> = transcript.err.lines().collect();
    assert_eq!(errors, expected, "wrong errors for {src:?}");
}

#[test]
fn arithmetic_precedence() {
    assert_output("2 + 3 * 4;", "14.000000\n");
    assert_output("(2 + 3) * 4;", "20.000000\n");
    assert_output("20 - 4 / 2 * 3;", "14.000000\n");
    assert_output("1.5 * 2 - 0.25;", "2.750000\n");
}

#[test]
fn assignment_round_trip() {
    assert_output("x = 5; x;", "5.000000\n");
    assert_output("rate = 0.25; base = 80; print base * rate;", "20.000000\n");
    assert_output("a = 1; a = a + 1; a = a * 10; a;", "20.000000\n");
}

#[test]
fn undefined_identifiers() {
    assert_errors("y;", &["Error: Identifier not found"]);
    assert_errors("print z;", &["Error: Identifier not found"]);
    assert_errors("x = 1 + q;", &["Error: Identifier not found"]);

    let transcript = run_str("y; y = 2; y;").unwrap();
    assert_eq!(transcript.out, "2.000000\n");
    assert_eq!(transcript.err, "Error: Identifier not found\n");
}

#[test]
fn empty_statements() {
    assert_output(";", "");
    assert_output(";;; 1;", "1.000000\n");
    assert_output("", "");
}

#[test]
fn print_command() {
    assert_output("print 7 + 1;", "8.000000\n");
    assert_output("x = 2.5; print x; print x;", "2.500000\n2.500000\n");
    assert_errors("print;", &["Error: Invalid Syntax"]);
    assert_errors("print -1;", &["Error: Invalid Syntax"]);
}

#[test]
fn division() {
    assert_output("10 / 4;", "2.500000\n");
    assert_output("5 / 0;", "inf\n");
    assert_output("-5 / 0;", "-inf\n");
    assert_output("0 / 0;", "NaN\n");
}

#[test]
fn comments() {
    assert_output("x = 3; # comment\n print x;", "3.000000\n");
    assert_output("# only a comment", "");
    assert_output("1 + # spans\n 2;", "3.000000\n");
}

#[test]
fn unary_minus() {
    assert_output("-4 + 1;", "-3.000000\n");
    assert_output("x = -2; x * 3;", "-6.000000\n");
}

#[test]
fn session_recovers_after_errors() {
    let transcript = run_str("x = ; 1 +) ; $; x = 9; print x;").unwrap();
    assert_eq!(transcript.out, "9.000000\n");
    assert_eq!(
        transcript.err.lines().collect::<Vec<_>>(),
        ["Error: Invalid Syntax", "Error: Invalid Syntax", "Error: Invalid Syntax"]
    );
}

#[test]
fn statements_may_span_lines() {
    assert_output("total = 1 +\n2 +\n3;\nprint total;\n", "6.000000\n");
}
