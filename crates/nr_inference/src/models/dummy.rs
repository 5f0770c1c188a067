use std::fmt;
use nr_core::{Result, Article, ArticleRewriter, RewrittenArticle};

const BODY_WORDS: usize = 60;

/// Offline rewriter: trims the article instead of calling a model.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ArticleRewriter for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn rewrite(&self, article: &Article, _api_key: Option<&str>) -> Result<RewrittenArticle> {
        // Take the first words of the body and join them
        let words: Vec<&str> = article.content.split_whitespace().collect();
        let mut body = words.iter().take(BODY_WORDS).copied().collect::<Vec<_>>().join(" ");
        if words.len() > BODY_WORDS {
            body.push_str("...");
        }

        Ok(RewrittenArticle {
            title: article.title.clone(),
            body,
            formatted_source: format!(
                "Source: <a href=\"{}\">{}</a>",
                article.source_url, article.source_name
            ),
        })
    }
}
