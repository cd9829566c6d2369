//! Core parsing and formatting logic.

pub mod duration;
