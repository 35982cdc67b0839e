//! Game implementations.

pub mod guess;
