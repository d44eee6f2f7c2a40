mod builder;
mod catalog;
mod confederation;
pub mod team;

pub use builder::*;
pub use catalog::*;
pub use confederation::*;
pub use team::*;
