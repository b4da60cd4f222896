//! Interpret Hungarian real-estate search queries and render ingatlan.com
//! listing URLs.

pub mod config;
pub mod display;
pub mod history;
pub mod interpreter;
pub mod models;
pub mod search;

pub use interpreter::QueryInterpreter;
pub use models::{Filter, FilterSource, Interpretation};
pub use search::{build_url, SearchUrl};
