pub mod entities;
pub mod generation;
pub mod prompt;
pub mod ask_service;
pub mod errors_service;

pub use entities::*;
pub use ask_service::*;
pub use errors_service::*;
