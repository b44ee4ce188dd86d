pub mod errors;
pub mod traits;

pub use errors::GenerationError;
pub use traits::GenerationClientTrait;
