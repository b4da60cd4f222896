pub mod url_builder;
pub mod vocabulary;

pub use url_builder::{build_url, SearchUrl};
