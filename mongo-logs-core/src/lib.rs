pub mod cli;
pub mod conf;
pub mod conn;
pub mod logging;
pub mod profile;
pub mod source;
