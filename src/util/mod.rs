pub mod relative;

pub use relative::*;
