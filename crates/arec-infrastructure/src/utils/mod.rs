//! Infrastructure utilities

mod timing;

pub use timing::TimedOperation;
