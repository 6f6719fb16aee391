mod patient;
mod query;

pub use patient::*;
pub use query::*;
