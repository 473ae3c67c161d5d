//! ledit - a line-oriented text editor

pub mod command;
pub mod constants;
pub mod document;
pub mod error;
pub mod interpreter;
pub mod line_store;
pub mod logging;
pub mod session;
pub mod settings;
