#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod data_loader;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    Account, Category, DataBundle, Location, MenuItem, SearchLimits, SearchRequest,
    SearchResponse, SearchResultItem, SearchResults,
};
