use crate::types::Article;

/// Somewhere to pull the next news item from.
///
/// Fetching never fails and never blocks; implementations pick from data they
/// already hold.
pub trait NewsSource: Send + Sync {
    /// Returns the name of the news source
    fn name(&self) -> &str;

    /// Returns one article, freshly stamped
    fn fetch(&self) -> Article;
}
