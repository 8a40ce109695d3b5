use lifo::*;

#[test]
fn balanced_brackets() {
    assert!(is_balanced("({[]})"));
    assert!(!is_balanced("({[)]})"));
}

#[test]
fn postfix() {
    assert_eq!(eval_postfix("3 4 + 5 *"), Ok(35.0));
    assert_eq!(eval_postfix("1 0 /"), Err(EvalError::DivisionByZero));
    assert!(matches!(
        eval_postfix("+"),
        Err(EvalError::InvalidExpression(InvalidExpression::Underflow { .. }))
    ));
}

#[test]
fn undoable_text() {
    let mut editor = UndoableText::new();
    editor.write("hello");
    editor.write("world");
    assert_eq!(editor.undo(), Step::Applied("hello"));
    assert_eq!(editor.redo(), Step::Applied("helloworld"));

    editor.undo();
    editor.write("x");
    assert_eq!(editor.redo(), Step::NothingToRedo);
}

#[test]
fn exercises() {
    assert_eq!(reverse("Hello, This is a reversed string"), "gnirts desrever a si sihT ,olleH");
    assert_eq!(has_redundant_parentheses("(())"), Ok(true));
}

#[test]
fn config() {
    let config = Config {
        brackets: Brackets::default().with_angle_brackets(),
        operators: Operators::default().with("max", |a: f64, b: f64| Ok(a.max(b))),
    };
    assert!(!config.brackets.is_balanced("<"));
    assert_eq!(config.evaluator().eval("1 2 max 3 +"), Ok(5.0));
}

#[test]
fn script() {
    let mut session = Session::new();
    let output = ["write a", "write b", "undo", "visit x", "print"]
        .into_iter()
        .map(|line| session.execute(line.parse().unwrap()))
        .collect::<Vec<_>>();
    assert_eq!(output, ["a", "ab", "a", "x", "a"]);
}
