mod stack;

pub use self::stack::{DrainLifo, EmptyStackError, Stack, StackOp};
