//! Markup for the widget shell and every transcript entry.
//!
//! TRADE-OFFS
//! ==========
//! User text, mentor fields and filenames are always escaped. Assistant text
//! is Markdown rendered with raw HTML dropped and unsafe link targets
//! neutralised; a fully trusted backend may opt back into raw HTML through
//! [`WidgetConfig::trust_reply_html`].

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

use crate::config::WidgetConfig;
use crate::net::types::{MentorCard, Message, Role, is_safe_href};

pub const CONTAINER_ID: &str = "clarity-widget-container";
pub const STYLE_ID: &str = "clarity-widget-style";
pub const WINDOW_ID: &str = "clarity-window";
pub const CLOSE_ID: &str = "clarity-close";
pub const MESSAGES_ID: &str = "clarity-messages";
pub const FILE_BADGE_ID: &str = "clarity-file-badge";
pub const FILE_NAME_ID: &str = "clarity-file-name";
pub const REMOVE_FILE_ID: &str = "clarity-remove-file";
pub const FILE_INPUT_ID: &str = "clarity-file-upload";
pub const INPUT_ID: &str = "clarity-input";
pub const SEND_ID: &str = "clarity-send";
pub const LAUNCHER_ID: &str = "clarity-launcher";

pub const MENTOR_CARD_CLASS: &str = "mentor-card";
pub const DOC_SAVED_CLASS: &str = "doc-saved";
pub const REVIEW_BAR_CLASS: &str = "review-buttons";
pub const APPROVE_LABEL: &str = "✅ Looks good";
pub const SUGGEST_EDITS_LABEL: &str = "✏️ Suggest edits";

const LAUNCHER_ICON: &str = r#"<svg width="28" height="28" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2"><path d="M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z"/></svg>"#;

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Backslash-escape inline Markdown punctuation so `text` renders literally
/// in the middle of a line.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '~' | '&') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Render Markdown to HTML.
///
/// Raw HTML is dropped unless `allow_raw_html`. Link targets outside
/// http/https/mailto become `#`. Single newlines become line breaks so
/// plain-text replies keep their layout.
pub fn render_markdown(markdown: &str, allow_raw_html: bool) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) if !allow_raw_html => None,
        Event::SoftBreak => Some(Event::HardBreak),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if !is_safe_href(&dest_url) => {
            Some(Event::Start(Tag::Link { link_type, dest_url: CowStr::Borrowed("#"), title, id }))
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// CSS classes for a chat bubble.
pub fn message_class(role: Role) -> String {
    match role {
        Role::User => format!("msg msg-{}", role.as_str()),
        Role::Assistant => format!("msg msg-{} msg-rich", role.as_str()),
    }
}

/// Inner HTML of a chat bubble.
pub fn message_html(message: &Message, trust_reply_html: bool) -> String {
    match message.role {
        Role::User => escape_html(&message.content),
        Role::Assistant => render_markdown(&message.content, trust_reply_html),
    }
}

/// Inner HTML of a mentor card: hover tooltip, name, bio, outcome badge.
///
/// The tooltip is left out when there is no rationale to show.
pub fn mentor_card_html(card: &MentorCard) -> String {
    let field = |value: &Option<String>| escape_html(value.as_deref().unwrap_or_default());
    let tooltip = card.rationale().map_or_else(String::new, |reason| {
        format!(r#"<div class="mentor-tooltip">💡 <strong>Why this mentor?</strong><br>{}</div>"#, escape_html(&reason))
    });
    format!(
        concat!(
            "{tooltip}",
            r#"<div class="mentor-name">{name}</div>"#,
            r#"<div class="mentor-bio">{bio}</div>"#,
            r#"<div class="mentor-outcome">🏆 {outcomes}</div>"#,
        ),
        tooltip = tooltip,
        name = field(&card.name),
        bio = field(&card.bio),
        outcomes = field(&card.outcomes),
    )
}

/// Inner HTML of the document-saved badge.
pub fn document_saved_html(file_name: &str) -> String {
    format!("✅ Document saved: <strong>{}</strong>", escape_html(file_name))
}

/// Inner HTML of the widget container: panel first, launcher last.
pub fn shell_html(config: &WidgetConfig) -> String {
    format!(
        r#"<div id="{WINDOW_ID}">
    <div class="clarity-header">
        <span>{title}</span>
        <span id="{CLOSE_ID}" style="cursor:pointer;">✕</span>
    </div>
    <div class="clarity-body" id="{MESSAGES_ID}">
        <div class="msg msg-assistant">{greeting}</div>
    </div>
    <div class="clarity-input-area">
        <div id="{FILE_BADGE_ID}" class="file-badge">
            <span>📄 <span id="{FILE_NAME_ID}"></span></span>
            <span class="remove" id="{REMOVE_FILE_ID}">×</span>
        </div>
        <div class="clarity-input-row">
            <label for="{FILE_INPUT_ID}" class="upload-btn">📎</label>
            <input type="file" id="{FILE_INPUT_ID}" style="display:none;" accept="{accept}" />
            <input type="text" id="{INPUT_ID}" class="clarity-input" placeholder="{placeholder}" />
            <button id="{SEND_ID}" class="clarity-send">🚀</button>
        </div>
    </div>
</div>
<div id="{LAUNCHER_ID}">{LAUNCHER_ICON}</div>"#,
        title = escape_html(&config.title),
        greeting = escape_html(&config.greeting),
        accept = escape_html(&config.accept),
        placeholder = escape_html(&config.placeholder),
    )
}
