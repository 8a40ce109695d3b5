use lifo_core::{EmptyStackError, Stack, StackOp};

#[test]
fn fresh_stack_is_empty() {
    let mut stack = Stack::<String>::default();
    assert!(stack.is_empty());
    assert_eq!(stack.size(), 0);
    assert_eq!(stack.pop(), Err(EmptyStackError { op: StackOp::Pop }));
    assert_eq!(stack.peek(), Err(EmptyStackError { op: StackOp::Peek }));
}

#[test]
fn owned_values() {
    let mut stack = Stack::with_capacity(2);
    stack.push(String::from("a"));
    stack.push(String::from("b"));
    assert_eq!(stack.peek().map(String::as_str), Ok("b"));
    assert_eq!(stack.pop().as_deref(), Ok("b"));
    assert_eq!(stack.pop().as_deref(), Ok("a"));
    assert!(stack.is_empty());
}

#[test]
fn extend_pushes_in_order() {
    let mut stack = Stack::new();
    stack.push(0);
    stack.extend([1, 2, 3]);
    assert_eq!(stack.len(), 4);
    assert_eq!(stack.drain_lifo().collect::<Vec<_>>(), [3, 2, 1, 0]);
}

#[test]
fn error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Stack::<()>::new().pop().unwrap_err());
    assert_eq!(err.to_string(), "pop from empty stack");
}
