//! Common definitions (errors and result alias), relied upon by all taskbench-* crates.

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
