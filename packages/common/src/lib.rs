pub mod document;
pub mod error;
pub mod handle;
pub mod options;
pub mod parser;
pub mod result;

pub use document::*;
pub use error::*;
pub use handle::*;
pub use options::*;
pub use parser::*;
pub use result::*;
