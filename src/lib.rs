//! Composes state reducers into a single reducer.
//!
//! A pipe calls each given reducer in order with the previously resolved state
//! and the action, consulting a comparison policy after every step to decide
//! whether to adopt the reducer's output or keep the prior state. Reducers
//! return `Some(next)` to replace the state or `None` to leave it as is; the
//! combined reducer has the same shape, so it plugs into a [`Container`] or
//! into another pipe.

mod compare;
pub use self::compare::*;

mod container;
pub use self::container::*;

mod pipe;
pub use self::pipe::*;

mod reducer;
pub use self::reducer::*;
