//! Helpers for Telegram MarkdownV2 formatting
//! 
//! MarkdownV2 rejects messages that contain unescaped reserved characters,
//! so every piece of user-controlled or static plain text goes through
//! [`escape_markdown`] before it is sent.

/// Escapes markdown special characters for MarkdownV2 parsing mode
/// 
/// # Example
/// ```
/// use leaderboard_bot::utils::markdown::escape_markdown;
/// 
/// let text = "@top_player (1st)!";
/// let escaped = escape_markdown(text);
/// assert_eq!(escaped, "@top\\_player \\(1st\\)\\!");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '='
                | '|' | '{' | '}' | '.' | '!'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escapes `text` and wraps it in MarkdownV2 bold delimiters.
pub fn bold(text: &str) -> String {
    format!("*{}*", escape_markdown(text))
}
