/*
 * Responsibility
 * - HTML の組み立て (format! ベースの文字列テンプレート)
 * - 埋め込む値は必ず escape() を通す (store の値は信用しない)
 * - handler からは page 単位の関数だけを呼ぶ
 */
pub mod admin;
pub mod article;
pub mod format;
pub mod layout;
pub mod listing;

use url::form_urlencoded;

pub const SITE_NAME: &str = "Simple Blog";

pub const DEFAULT_CARD_IMAGE: &str = "https://images.unsplash.com/photo-1499750310107-5fef28a66643?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80";
pub const DEFAULT_FEATURED_IMAGE: &str = "https://images.unsplash.com/photo-1581276879432-15e50529f34b?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80";

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encodes a value for a query string or a single path segment.
pub fn encode_component(raw: &str) -> String {
    // byte_serialize writes spaces as `+`; a literal `+` has already become `%2B`.
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub fn article_href(id: &str) -> String {
    format!("/article?id={}", encode_component(id))
}
