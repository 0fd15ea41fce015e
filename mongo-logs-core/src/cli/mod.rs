mod args;
pub mod disable;
pub mod logs;


pub use args::Cli;
