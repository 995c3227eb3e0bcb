//! Handler implementations: logging and the directory dispatcher.

mod directory_handler;
mod logging_handler;

pub use directory_handler::DirectoryHandler;
pub use logging_handler::LoggingHandler;
