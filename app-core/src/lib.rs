#![warn(clippy::all, rust_2018_idioms)]

pub mod chart;
pub mod dispatch;
pub mod string_error;
