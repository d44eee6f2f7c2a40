pub mod constraints;
mod error;
mod result;
mod settings;
pub mod shuffle;
mod simulator;
pub mod solver;
mod statistics;
mod validation;

pub use constraints::{Rejection, admissible, rejection};
pub use error::*;
pub use result::*;
pub use settings::*;
pub use shuffle::shuffled;
pub use simulator::*;
pub use solver::{PotSolver, solve_pot};
pub use statistics::*;
pub use validation::*;
