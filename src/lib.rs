//! LIFELENS - Terminal AI Life Analysis Library
//!
//! A terminal client that turns birth details into a generated life
//! report, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
