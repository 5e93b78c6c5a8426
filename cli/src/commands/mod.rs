pub mod bytes;
pub mod eval;
