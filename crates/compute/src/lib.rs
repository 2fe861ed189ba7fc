pub mod filter;
pub mod hex;
pub mod summary;

pub use filter::*;
pub use hex::*;
pub use summary::*;
