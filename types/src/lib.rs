mod error;
pub mod list;
pub mod records;

pub use error::{Error, Result};
pub use list::{DEFAULT_PAGE_SIZE, PageView, Searchable};
