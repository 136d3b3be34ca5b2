//! Result types handed back to the caller.

mod tour;

pub use tour::Tour;
