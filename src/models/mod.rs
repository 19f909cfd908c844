//! Data models for the customer console.
//!
//! These models match the wire format of the customer service exactly.

mod customer;

pub use customer::*;
