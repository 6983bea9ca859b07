use crate::repos::Post;
use crate::services::editor::{PostDraft, PreviewPost};
use crate::web::views::{
    DEFAULT_CARD_IMAGE, SITE_NAME, encode_component, escape,
    format::long_date_time,
    layout::{Nav, page as layout_page},
    listing::meta_spans,
};

pub const EMPTY_MESSAGE: &str = "No posts yet. Create your first post!";
pub const FAILED_MESSAGE: &str = "Failed to load posts. Please check if the post store is running.";
pub const CONFIRM_DELETE_MESSAGE: &str =
    "Are you sure you want to delete this post? This action cannot be undone.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
    Info,
}

impl BannerKind {
    fn class(&self) -> &'static str {
        match self {
            Self::Success => "notice notice-success",
            Self::Error => "notice notice-error",
            Self::Info => "notice notice-info",
        }
    }
}

/// Flash notice or validation message shown above the admin form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Info,
            message: message.into(),
        }
    }

    fn render(&self) -> String {
        format!(
            "<div class=\"{}\" role=\"status\">{}</div>",
            self.kind.class(),
            escape(&self.message)
        )
    }
}

#[derive(Debug, Clone)]
pub enum PostsPanel {
    Loaded(Vec<Post>),
    Failed,
}

pub struct AdminView<'a> {
    pub posts: &'a PostsPanel,
    pub draft: &'a PostDraft,
    pub banner: Option<Banner>,
    pub preview: Option<(PreviewPost, String)>,
}

fn delete_href(id: &str) -> String {
    format!("/admin/posts/{}/delete", encode_component(id))
}

fn edit_href(id: &str) -> String {
    format!("/admin?edit={}#create-post", encode_component(id))
}

pub fn admin_post_item(post: &Post) -> String {
    let id = escape(post.id.as_str());

    format!(
        "<div class=\"admin-post-item\" data-id=\"{id}\">
      <div class=\"admin-post-info\">
        <h4>{title}</h4>
        <div class=\"admin-post-meta\">
          {meta}
        </div>
      </div>
      <div class=\"admin-post-actions\">
        <a class=\"btn action-btn edit\" data-id=\"{id}\" href=\"{edit}\">
          <i class=\"fas fa-edit\"></i> Edit
        </a>
        <a class=\"btn btn-danger action-btn delete\" data-id=\"{id}\" href=\"{delete}\">
          <i class=\"fas fa-trash\"></i> Delete
        </a>
      </div>
    </div>",
        title = escape(&post.title),
        meta = meta_spans(&post.author, &long_date_time(&post.date), post.category()),
        edit = escape(&edit_href(post.id.as_str())),
        delete = escape(&delete_href(post.id.as_str())),
    )
}

fn posts_panel(posts: &PostsPanel) -> String {
    match posts {
        PostsPanel::Failed => format!("<p class=\"error\">{FAILED_MESSAGE}</p>"),
        PostsPanel::Loaded(posts) if posts.is_empty() => format!("<p>{EMPTY_MESSAGE}</p>"),
        PostsPanel::Loaded(posts) => posts
            .iter()
            .map(admin_post_item)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn text_input(id: &str, label: &str, kind: &str, value: &str, required: bool) -> String {
    let marker = if required { " *" } else { "" };
    let required = if required { " required" } else { "" };
    format!(
        "<label for=\"{id}\">{label}{marker}</label>
      <input type=\"{kind}\" id=\"{id}\" name=\"{id}\" value=\"{}\"{required}>",
        escape(value)
    )
}

fn text_area(id: &str, label: &str, value: &str, rows: u8) -> String {
    format!(
        "<label for=\"{id}\">{label} *</label>
      <textarea id=\"{id}\" name=\"{id}\" rows=\"{rows}\" required>{}</textarea>",
        escape(value)
    )
}

pub fn submit_label(draft: &PostDraft) -> &'static str {
    if draft.mode().is_editing() {
        "Update Post"
    } else {
        "Publish Post"
    }
}

pub fn form(draft: &PostDraft) -> String {
    let heading = if draft.mode().is_editing() {
        "Edit Post"
    } else {
        "Create New Post"
    };

    format!(
        "<h2>{heading}</h2>
    <form id=\"post-form\" method=\"post\" action=\"/admin/posts\">
      <input type=\"hidden\" id=\"post-id\" name=\"post_id\" value=\"{post_id}\">
      {title}
      {author}
      {category}
      {image}
      {excerpt}
      {content}
      <div class=\"form-actions\">
        <button type=\"submit\" id=\"submit-btn\" class=\"btn\">{submit}</button>
        <button type=\"submit\" id=\"preview-btn\" class=\"btn btn-secondary\" formaction=\"/admin/preview\" formnovalidate>Preview</button>
        <a id=\"reset-btn\" class=\"btn btn-secondary\" href=\"/admin\">Reset</a>
      </div>
    </form>",
        post_id = escape(draft.post_id.trim()),
        title = text_input("title", "Title", "text", &draft.title, true),
        author = text_input("author", "Author", "text", &draft.author, true),
        category = text_input("category", "Category", "text", &draft.category, false),
        image = text_input("image", "Image URL", "url", &draft.image, false),
        excerpt = text_area("excerpt", "Excerpt", &draft.excerpt, 3),
        content = text_area("content", "Content", &draft.content, 10),
        submit = submit_label(draft),
    )
}

/// Card-shaped preview of unsaved form values. `date_text` is already formatted.
pub fn preview_section(preview: &PreviewPost, date_text: &str) -> String {
    let title = escape(&preview.title);

    format!(
        "<div class=\"preview-section\">
      <h3><i class=\"fas fa-eye\"></i> Post Preview</h3>
      <div class=\"post-card\">
        <div class=\"post-image\">
          <img src=\"{image}\" alt=\"{title}\">
        </div>
        <div class=\"post-content\">
          <h3>{title}</h3>
          <div class=\"post-meta\">
            {meta}
          </div>
          <p class=\"post-excerpt\">{excerpt}</p>
          <div class=\"preview-content\">
            <p><strong>Content Preview:</strong></p>
            <p>{content}</p>
          </div>
        </div>
      </div>
    </div>",
        image = escape(preview.image.as_deref().unwrap_or(DEFAULT_CARD_IMAGE)),
        meta = meta_spans(&preview.author, date_text, Some(preview.category.as_str())),
        excerpt = escape(&preview.excerpt),
        content = escape(&preview.content),
    )
}

const FORM_SCRIPT: &str = r#"
(function () {
  var form = document.getElementById('post-form');
  var submit = document.getElementById('submit-btn');
  if (!form || !submit) return;
  form.addEventListener('submit', function (e) {
    if (e.submitter && e.submitter.id !== 'submit-btn') return;
    submit.textContent = 'Saving...';
    submit.disabled = true;
  });
})();
"#;

pub fn page(view: AdminView<'_>) -> String {
    let banner = view.banner.map(|b| b.render()).unwrap_or_default();
    let preview = view
        .preview
        .map(|(preview, date_text)| preview_section(&preview, &date_text))
        .unwrap_or_default();

    let main = format!(
        "{banner}
  <section id=\"create-post\">
    {form}
    {preview}
  </section>
  <section>
    <h2>Manage Posts</h2>
    <div id=\"admin-posts-container\">
    {posts}
    </div>
  </section>",
        form = form(view.draft),
        posts = posts_panel(view.posts),
    );

    layout_page(
        &format!("Admin - {SITE_NAME}"),
        Nav::Admin,
        &main,
        Some(FORM_SCRIPT),
    )
}

pub fn confirm_delete_page(id: &str) -> String {
    let main = format!(
        "<section>
    <h2>Delete Post</h2>
    <p>{CONFIRM_DELETE_MESSAGE}</p>
    <form method=\"post\" action=\"{action}\">
      <div class=\"form-actions\">
        <button type=\"submit\" class=\"btn btn-danger\">Delete</button>
        <a class=\"btn btn-secondary\" href=\"/admin\">Cancel</a>
      </div>
    </form>
  </section>",
        action = escape(&delete_href(id)),
    );

    layout_page(
        &format!("Delete Post - {SITE_NAME}"),
        Nav::Admin,
        &main,
        None,
    )
}
