use clap::Parser;
use expect_test::{expect, Expect};
use lifo_term::{run, run_script, Opts};

#[track_caller]
fn check(args: &[&str], input: &str, expect: Expect) {
    let opts = Opts::try_parse_from(std::iter::once("lifo").chain(args.iter().copied())).unwrap();
    let config = opts.config();
    let mut out = Vec::new();
    run(opts.cmd, &config, input.as_bytes(), &mut out).unwrap();
    expect.assert_eq(&String::from_utf8(out).unwrap());
}

#[test]
fn balanced() {
    check(&["balanced", "({[]})"], "", expect!["true\n"]);
    check(&["balanced", "({[)]})"], "", expect!["false\n"]);
    check(&["balanced", "<"], "", expect!["true\n"]);
    check(&["--angle-brackets", "balanced", "<"], "", expect!["false\n"]);
}

#[test]
fn find_match() {
    check(&["match", "(a[b])", "0"], "", expect!["5\n"]);
    check(&["match", "(a[b])", "1"], "", expect!["no match\n"]);
}

#[test]
fn postfix() {
    check(&["postfix", "3 4 + 5 *"], "", expect!["35\n"]);
    check(&["postfix", "7 2 /"], "", expect!["3.5\n"]);
}

#[test]
fn postfix_errors() {
    let opts = Opts::try_parse_from(["lifo", "postfix", "1 0 /"]).unwrap();
    let err = run(opts.cmd, &Default::default(), &b""[..], Vec::new()).unwrap_err();
    assert_eq!(format!("{err:#}"), "failed to evaluate `1 0 /`: division by zero");
    assert_eq!(
        err.downcast_ref::<lifo::EvalError>(),
        Some(&lifo::EvalError::DivisionByZero)
    );
}

#[test]
fn redundant_and_reverse() {
    check(&["redundant", "((a+b))"], "", expect!["true\n"]);
    check(&["redundant", "(a+b)"], "", expect!["false\n"]);
    check(&["reverse", "stack"], "", expect!["kcats\n"]);

    let opts = Opts::try_parse_from(["lifo", "redundant", "a)"]).unwrap();
    let err = run(opts.cmd, &Default::default(), &b""[..], Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "pop from empty stack");
}

#[test]
fn script() {
    let input = "\
write hello
write world
undo
redo
undo

write !
redo
visit a
visit b
back
forward
forward
jump
print
";
    let mut out = Vec::new();
    run_script(input.as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines = out.lines().collect::<Vec<_>>();
    assert_eq!(
        lines[..12],
        [
            "hello",
            "helloworld",
            "hello",
            "helloworld",
            "hello",
            "hello!",
            "nothing to redo",
            "a",
            "b",
            "a",
            "b",
            "can't go forward",
        ]
    );
    assert!(lines[12].starts_with("error: "), "{}", lines[12]);
    assert_eq!(lines[13], "hello!");
    assert_eq!(lines.len(), 14);
}
