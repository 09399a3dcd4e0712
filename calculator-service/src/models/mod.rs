pub mod operation;

pub use operation::{Operands, Operation};
