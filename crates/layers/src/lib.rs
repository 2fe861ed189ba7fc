pub mod prism;
pub mod renderer;
pub mod session;

pub use prism::*;
pub use renderer::*;
pub use session::*;
