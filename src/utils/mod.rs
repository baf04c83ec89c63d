mod de;
pub mod loaders;
pub mod panic;
pub mod scoring;
mod signal;

pub use de::*;
pub use signal::*;
