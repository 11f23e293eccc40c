pub mod check;
pub mod completion;
pub mod config;
pub mod spec;
