pub mod config;
pub mod logging;

pub mod document;
pub mod error;
pub mod extract;
pub mod filename;
pub mod job;
pub mod listing;

pub use error::RellistError;
