pub mod dot;
pub mod errors;

pub use dot::*;
pub use errors::*;
