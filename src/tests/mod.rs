#![warn(clippy::all, clippy::pedantic)]

pub mod config_tests;
pub mod physics_tests;
