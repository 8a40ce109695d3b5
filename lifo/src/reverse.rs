use lifo_core::Stack;

/// Reverses `s` by pushing each char onto a stack and popping them all off again.
pub fn reverse(s: &str) -> String {
    let mut stack = s.chars().collect::<Stack<_>>();
    stack.drain_lifo().collect()
}
