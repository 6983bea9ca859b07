use crate::repos::Post;
use crate::web::views::{
    SITE_NAME, escape,
    format::long_date,
    layout::{Nav, page as layout_page},
    listing::meta_spans,
};

pub const MISSING_ID_MESSAGE: &str =
    "No article specified. Please go back to the home page and select an article.";
pub const NOT_FOUND_MESSAGE: &str =
    "Article not found. It may have been deleted or the ID is incorrect.";
pub const UNAVAILABLE_MESSAGE: &str = "Failed to load article. Please try again later.";

/// One `<p>` per line of content.
pub fn paragraphs(content: &str) -> String {
    content
        .split('\n')
        .map(|line| format!("<p>{}</p>", escape(line.trim_end_matches('\r'))))
        .collect()
}

pub fn article(post: &Post) -> String {
    let title = escape(&post.title);
    let image = post
        .image()
        .map(|src| {
            format!(
                "<div class=\"article-image\">
      <img src=\"{}\" alt=\"{title}\">
    </div>",
                escape(src)
            )
        })
        .unwrap_or_default();

    format!(
        "<div class=\"article-header\">
      <h1>{title}</h1>
      <div class=\"article-meta\">
        {meta}
      </div>
    </div>
    {image}
    <div class=\"article-body\">
      {body}
    </div>",
        meta = meta_spans(&post.author, &long_date(&post.date), post.category()),
        body = paragraphs(&post.content),
    )
}

pub fn page(post: &Post) -> String {
    let main = format!(
        "<article id=\"article-content\">
    {}
  </article>
  <p><a class=\"btn btn-secondary\" href=\"/\">&larr; Back to all posts</a></p>",
        article(post)
    );

    layout_page(
        &format!("{} - {SITE_NAME}", post.title),
        Nav::None,
        &main,
        None,
    )
}
