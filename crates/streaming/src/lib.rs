pub mod decoder;
pub mod envelope;
pub mod ingest;
pub mod transport;

pub use decoder::*;
pub use envelope::*;
pub use ingest::*;
pub use transport::*;
