//! Common utility functions shared across the domain.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Document tolerant** - helpers here never reject partially edited input

pub mod lenient;

pub use lenient::{
    lenient_bool, lenient_f64, lenient_i32, lenient_opt_bool, lenient_opt_f64, lenient_opt_i32,
};
