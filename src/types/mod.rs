pub mod error;
pub mod section;

pub use error::{DocError, Result};
pub use section::{Section, SectionMap};
