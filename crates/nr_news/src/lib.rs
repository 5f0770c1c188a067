pub mod catalog;
pub mod source;

pub use catalog::{CatalogEntry, CRYPTO_NEWS};
pub use source::CatalogSource;

pub mod prelude {
    pub use super::source::CatalogSource;
    pub use nr_core::{Article, NewsSource, Result, Error};
}
