//! Sparse Conway's Game of Life
//!
//! [`life`] is the engine. The remaining modules are the command line and
//! terminal front-end that feeds it starting cells and renders it.

pub mod colors;
pub mod config;
pub mod error;
pub mod life;
pub mod patterns;
pub mod settings;
pub mod terminal;
pub mod view;

pub use error::{Error, Result};
