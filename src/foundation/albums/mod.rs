mod models;
mod operations;

pub use models::*;
pub use operations::KnownSet;
