use async_trait::async_trait;
use crate::types::{Article, RewrittenArticle};
use crate::Result;

#[async_trait]
pub trait ArticleRewriter: Send + Sync {
    /// Human readable model name, used in activity logs
    fn name(&self) -> &str;

    /// Rewrite an article with the generative model.
    ///
    /// Fails with [`crate::Error::Configuration`] when `api_key` is absent and
    /// with [`crate::Error::Upstream`] when the model call fails.
    async fn rewrite(&self, article: &Article, api_key: Option<&str>) -> Result<RewrittenArticle>;
}
