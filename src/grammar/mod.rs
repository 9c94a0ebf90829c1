pub mod entries;
pub mod resolver;

pub use resolver::{Grammar, Polarity};
