pub const POT_COUNT: usize = 4;
pub const GROUP_COUNT: usize = 12;
pub const GROUP_CAPACITY: usize = 4;

pub mod draw;
pub mod group;
pub mod team;

pub mod utils;

#[cfg(test)]
mod fixtures;

pub use draw::*;
pub use group::*;
pub use team::*;
