pub mod models;
pub mod errors;
pub mod seed;

pub use models::*;
pub use errors::*;
pub use seed::*;
