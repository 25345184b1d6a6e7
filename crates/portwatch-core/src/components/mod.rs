//! Components - plain records held by the metric store.
//!
//! Every simulated field is a [`Bounded`] so its range travels with it.

mod common;
mod empties;
mod vessel;
mod yard;

pub use common::*;
pub use empties::*;
pub use vessel::*;
pub use yard::*;

pub use portwatch_logic::bounded::{Bounded, FieldRange};
