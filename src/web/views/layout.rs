use crate::web::views::{SITE_NAME, escape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Admin,
    None,
}

const STYLE: &str = r#"
    * { box-sizing: border-box; }
    body { font-family: system-ui, sans-serif; margin: 0; background: #f7f7f7; color: #333; line-height: 1.6; }
    header { background: #2c3e50; color: #fff; padding: 1rem 2rem; display: flex; justify-content: space-between; align-items: center; }
    header a { color: #fff; text-decoration: none; margin-left: 1rem; }
    header a.active { border-bottom: 2px solid #fff; }
    main { max-width: 1100px; margin: 2rem auto; padding: 0 1rem; }
    section { margin-bottom: 2.5rem; }
    .btn { display: inline-block; padding: 0.5rem 1rem; border: none; border-radius: 4px; background: #3498db; color: #fff; text-decoration: none; cursor: pointer; font: inherit; }
    .btn-secondary { background: #7f8c8d; }
    .btn-danger { background: #e74c3c; }
    .error { color: #c0392b; }
    .posts-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem; }
    .post-card, .featured-article, .admin-post-item { background: #fff; border-radius: 8px; box-shadow: 0 2px 6px rgba(0,0,0,0.08); overflow: hidden; }
    .post-image img, .featured-image img, .article-image img { width: 100%; display: block; object-fit: cover; }
    .post-image img { height: 200px; }
    a.card-link { color: inherit; text-decoration: none; }
    a.post-image, a.featured-image { display: block; }
    .post-content, .featured-text { padding: 1.25rem; }
    .featured-article { display: grid; grid-template-columns: 1fr 1fr; }
    .post-meta, .featured-meta, .article-meta, .admin-post-meta { color: #777; font-size: 0.9rem; display: flex; gap: 1rem; flex-wrap: wrap; }
    .load-more-wrap { text-align: center; margin-top: 1.5rem; }
    .article-body p { margin: 0 0 1rem; }
    .admin-post-item { display: flex; justify-content: space-between; align-items: center; padding: 1rem; margin-bottom: 0.75rem; }
    .admin-post-actions { display: flex; gap: 0.5rem; }
    form label { display: block; margin: 0.75rem 0 0.25rem; font-weight: 600; }
    form input, form textarea { width: 100%; padding: 0.5rem; border: 1px solid #ccc; border-radius: 4px; font: inherit; }
    form textarea { min-height: 120px; }
    .form-actions { margin-top: 1rem; display: flex; gap: 0.5rem; }
    .notice { padding: 0.75rem 1rem; border-radius: 4px; margin-bottom: 1rem; }
    .notice-success { background: #e8f8f0; color: #1e8449; }
    .notice-error { background: #fdecea; color: #c0392b; }
    .notice-info { background: #eaf2fb; color: #21618c; }
    .preview-section { margin-top: 30px; border-top: 1px solid #eee; padding-top: 20px; }
    .preview-content { margin-top: 15px; padding: 15px; background-color: #f9f9f9; border-radius: 4px; }
    footer { text-align: center; color: #999; padding: 2rem 0; }
"#;

fn nav_link(href: &str, label: &str, active: bool) -> String {
    let class = if active { " class=\"active\"" } else { "" };
    format!("<a href=\"{href}\"{class}>{label}</a>")
}

/// Full HTML document. `title` is plain text, `main` and `script` are trusted markup.
pub fn page(title: &str, nav: Nav, main: &str, script: Option<&str>) -> String {
    let script = script
        .map(|body| format!("<script>{body}</script>"))
        .unwrap_or_default();

    format!(
        "<!doctype html>
<html lang=\"en\">
<head>
  <meta charset=\"utf-8\" />
  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />
  <title>{title}</title>
  <style>{STYLE}</style>
</head>
<body>
  <header>
    <a href=\"/\"><strong>{site}</strong></a>
    <nav>{home}{admin}</nav>
  </header>
  <main>
{main}
  </main>
  <footer>&copy; {site}</footer>
  {script}
</body>
</html>
",
        title = escape(title),
        site = SITE_NAME,
        home = nav_link("/", "Home", nav == Nav::Home),
        admin = nav_link("/admin", "Admin", nav == Nav::Admin),
    )
}

/// Stand-alone page holding one static error message.
pub fn error_page(message: &str) -> String {
    let main = format!(
        "<section id=\"article-content\">
  <p class=\"error\">{}</p>
  <p><a class=\"btn\" href=\"/\">Back to home</a></p>
</section>",
        escape(message)
    );
    page(SITE_NAME, Nav::None, &main, None)
}
