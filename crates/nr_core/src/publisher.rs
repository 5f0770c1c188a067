use async_trait::async_trait;
use crate::types::{Credentials, RewrittenArticle};
use crate::Result;

#[async_trait]
pub trait Publisher: Send + Sync {
    /// Name of the messaging service, used in activity logs
    fn name(&self) -> &str;

    /// Send one message for `article` to the channel in `credentials`
    async fn publish(&self, credentials: &Credentials, article: &RewrittenArticle) -> Result<()>;
}
