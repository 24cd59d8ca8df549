pub mod animator;
pub mod error;
pub mod options;
pub mod viewer;

pub use error::ViewerError;
