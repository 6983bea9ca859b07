use crate::repos::Post;
use crate::services::listing::{Listing, ListingState};
use crate::web::views::{
    DEFAULT_CARD_IMAGE, DEFAULT_FEATURED_IMAGE, SITE_NAME, article_href, escape,
    format::long_date,
    layout::{Nav, page as layout_page},
};

pub const EMPTY_MESSAGE: &str = "No posts found. Create your first post in the admin panel!";
pub const FAILED_MESSAGE: &str = "Failed to load posts. Please check if the post store is running.";
pub const NO_FEATURED_MESSAGE: &str = "No featured post available.";
pub const MORE_FAILED_MESSAGE: &str = "Failed to load more posts. Please try again.";

/// Response header carrying the next page number for the "load more" fragment.
pub const NEXT_PAGE_HEADER: &str = "x-next-page";

fn category_span(category: Option<&str>) -> String {
    category
        .map(|c| format!("<span><i class=\"fas fa-tag\"></i> {}</span>", escape(c)))
        .unwrap_or_default()
}

pub(crate) fn meta_spans(author: &str, date: &str, category: Option<&str>) -> String {
    format!(
        "<span><i class=\"fas fa-user\"></i> {}</span>
          <span><i class=\"fas fa-calendar\"></i> {}</span>
          {}",
        escape(author),
        escape(date),
        category_span(category)
    )
}

pub fn post_card(post: &Post) -> String {
    let id = escape(post.id.as_str());
    let href = escape(&article_href(post.id.as_str()));
    let title = escape(&post.title);

    format!(
        "<div class=\"post-card\" data-id=\"{id}\">
      <a class=\"post-image card-link\" href=\"{href}\">
        <img src=\"{image}\" alt=\"{title}\">
      </a>
      <div class=\"post-content\">
        <h3><a class=\"card-link\" href=\"{href}\">{title}</a></h3>
        <div class=\"post-meta\">
          {meta}
        </div>
        <p class=\"post-excerpt\">{excerpt}</p>
        <a href=\"{href}\" class=\"btn\">Read More</a>
      </div>
    </div>",
        image = escape(post.image().unwrap_or(DEFAULT_CARD_IMAGE)),
        meta = meta_spans(&post.author, &long_date(&post.date), post.category()),
        excerpt = escape(&post.excerpt),
    )
}

pub fn featured_article(post: &Post) -> String {
    let id = escape(post.id.as_str());
    let href = escape(&article_href(post.id.as_str()));
    let title = escape(&post.title);

    format!(
        "<div class=\"featured-article\" data-id=\"{id}\">
      <a class=\"featured-image card-link\" href=\"{href}\">
        <img src=\"{image}\" alt=\"{title}\">
      </a>
      <div class=\"featured-text\">
        <h3><a class=\"card-link\" href=\"{href}\">{title}</a></h3>
        <div class=\"featured-meta\">
          {meta}
        </div>
        <p class=\"featured-excerpt\">{excerpt}</p>
        <a href=\"{href}\" class=\"btn\">Read Full Article</a>
      </div>
    </div>",
        image = escape(post.image().unwrap_or(DEFAULT_FEATURED_IMAGE)),
        meta = meta_spans(&post.author, &long_date(&post.date), post.category()),
        excerpt = escape(&post.excerpt),
    )
}

/// Cards (or the empty / failed message) for the posts container.
pub fn cards(listing: &Listing) -> String {
    match listing.state() {
        ListingState::Empty => format!("<p>{EMPTY_MESSAGE}</p>"),
        ListingState::Failed => format!("<p class=\"error\">{FAILED_MESSAGE}</p>"),
        ListingState::Ready => listing
            .posts()
            .iter()
            .map(post_card)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn load_more(listing: &Listing) -> String {
    match listing.next_page() {
        Some(next) => format!(
            "<div class=\"load-more-wrap\">
      <a id=\"load-more\" class=\"btn\" href=\"/?page={next}\" data-next-page=\"{next}\">Load More</a>
    </div>"
        ),
        None => String::new(),
    }
}

const LOAD_MORE_SCRIPT: &str = r#"
(function () {
  var button = document.getElementById('load-more');
  var container = document.getElementById('posts-container');
  if (!button || !container) return;
  button.addEventListener('click', async function (e) {
    e.preventDefault();
    var page = button.getAttribute('data-next-page');
    try {
      var response = await fetch('/posts/more?page=' + page);
      var html = await response.text();
      container.insertAdjacentHTML('beforeend', html);
      var next = response.headers.get('x-next-page');
      if (response.ok && next) {
        button.setAttribute('data-next-page', next);
        button.setAttribute('href', '/?page=' + next);
        history.replaceState(null, '', '/?page=' + page);
      } else {
        button.parentNode.removeChild(button);
      }
    } catch (err) {
      console.error('Error loading more posts:', err);
      button.parentNode.removeChild(button);
    }
  });
})();
"#;

pub fn page(featured: Option<&Post>, listing: &Listing) -> String {
    let featured = featured
        .map(featured_article)
        .unwrap_or_else(|| format!("<p>{NO_FEATURED_MESSAGE}</p>"));

    let main = format!(
        "<section>
    <h2>Featured Article</h2>
    <div id=\"featured-article\">
    {featured}
    </div>
  </section>
  <section>
    <h2>Latest Posts</h2>
    <div id=\"posts-container\" class=\"posts-grid\">
    {cards}
    </div>
    {load_more}
  </section>",
        cards = cards(listing),
        load_more = load_more(listing),
    );

    layout_page(SITE_NAME, Nav::Home, &main, Some(LOAD_MORE_SCRIPT))
}

/// Appended in place of cards when a later page cannot be fetched.
pub fn more_failed() -> String {
    format!("<p class=\"error\">{MORE_FAILED_MESSAGE}</p>")
}
