use nr_core::RewrittenArticle;

/// Escape the characters Telegram's HTML parse mode treats as markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Build the message text: bold title, body, then the source line.
///
/// The source line is sent as-is because it carries its own anchor tag.
pub fn format_message(article: &RewrittenArticle) -> String {
    format!(
        "<b>{}</b>\n\n{}\n\n{}",
        escape_html(&article.title),
        escape_html(&article.body),
        article.formatted_source
    )
}
