//! Systems - logic that perturbs store records each tick

mod cranes;
mod empties;
mod random_walk;
mod vessel;
mod zones;

pub use cranes::*;
pub use empties::*;
pub use random_walk::*;
pub use vessel::*;
pub use zones::*;
