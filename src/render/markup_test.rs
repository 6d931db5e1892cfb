use super::*;

// =============================================================
// Escaping
// =============================================================

#[test]
fn escape_html_covers_markup_characters() {
    assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
}

#[test]
fn user_messages_are_escaped_verbatim() {
    let message = Message::new(Role::User, "<b>hi</b> **there**");
    assert_eq!(message_html(&message, false), "&lt;b&gt;hi&lt;/b&gt; **there**");
    assert_eq!(message_html(&message, true), "&lt;b&gt;hi&lt;/b&gt; **there**");
}

// =============================================================
// Markdown
// =============================================================

#[test]
fn assistant_markdown_renders_emphasis() {
    let message = Message::new(Role::Assistant, "✅ **deck.pdf** analyzed!");
    assert_eq!(message_html(&message, false), "<p>✅ <strong>deck.pdf</strong> analyzed!</p>\n");
}

#[test]
fn raw_html_is_dropped_by_default() {
    let html = render_markdown("hi <img src=x onerror=alert(1)> there", false);
    assert!(!html.contains("<img"));
    assert!(html.contains("hi"));
    assert!(html.contains("there"));
}

#[test]
fn raw_html_survives_when_trusted() {
    let html = render_markdown("hi <b>bold</b>", true);
    assert!(html.contains("<b>bold</b>"));
}

#[test]
fn script_links_are_neutralised() {
    let html = render_markdown("[click](javascript:alert(1))", false);
    assert!(html.contains(r##"href="#""##));
    assert!(!html.contains("javascript"));

    let html = render_markdown("[site](https://example.com)", false);
    assert!(html.contains(r#"href="https://example.com""#));
}

#[test]
fn single_newlines_become_breaks() {
    let html = render_markdown("line one\nline two", false);
    assert!(html.contains("line one<br />"));
}

#[test]
fn escaped_markdown_renders_literally() {
    let name = "a_b*c*[x](javascript:y)<b>&amp;.pdf";
    let html = render_markdown(&format!("**{}**", escape_markdown(name)), false);
    assert_eq!(html, "<p><strong>a_b*c*[x](javascript:y)&lt;b&gt;&amp;amp;.pdf</strong></p>\n");
}

#[test]
fn message_class_marks_rich_assistant_bubbles() {
    assert_eq!(message_class(Role::User), "msg msg-user");
    assert_eq!(message_class(Role::Assistant), "msg msg-assistant msg-rich");
}

// =============================================================
// Cards / badges
// =============================================================

#[test]
fn mentor_card_shows_fields_and_derived_reason() {
    let card = MentorCard {
        name: Some("A".into()),
        bio: Some("X. Y".into()),
        outcomes: Some("5 hires".into()),
        ..MentorCard::default()
    };
    let html = mentor_card_html(&card);
    assert!(html.contains(r#"<div class="mentor-name">A</div>"#));
    assert!(html.contains(r#"<div class="mentor-bio">X. Y</div>"#));
    assert!(html.contains("🏆 5 hires"));
    assert!(html.contains("<br>Expert in X</div>"));
}

#[test]
fn mentor_card_with_missing_fields_renders_empty() {
    let html = mentor_card_html(&MentorCard::default());
    assert!(html.contains(r#"<div class="mentor-name"></div>"#));
    assert!(html.contains(r#"<div class="mentor-bio"></div>"#));
}

#[test]
fn mentor_card_without_rationale_has_no_tooltip() {
    let card = MentorCard { name: Some("A".into()), ..MentorCard::default() };
    let html = mentor_card_html(&card);
    assert!(!html.contains("mentor-tooltip"));
    assert!(!html.contains("Expert in"));
    assert!(html.starts_with(r#"<div class="mentor-name">A</div>"#));
}

#[test]
fn mentor_card_escapes_backend_text() {
    let card = MentorCard { name: Some("<script>x</script>".into()), ..MentorCard::default() };
    assert!(!mentor_card_html(&card).contains("<script>"));
}

#[test]
fn document_saved_badge_shows_file_name() {
    assert_eq!(document_saved_html("report.pdf"), "✅ Document saved: <strong>report.pdf</strong>");
    assert!(document_saved_html("<x>.pdf").contains("&lt;x&gt;.pdf"));
}

// =============================================================
// Shell
// =============================================================

#[test]
fn shell_contains_every_wired_element() {
    let html = shell_html(&WidgetConfig::default());
    for id in [
        WINDOW_ID,
        CLOSE_ID,
        MESSAGES_ID,
        FILE_BADGE_ID,
        FILE_NAME_ID,
        REMOVE_FILE_ID,
        FILE_INPUT_ID,
        INPUT_ID,
        SEND_ID,
        LAUNCHER_ID,
    ] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing #{id}");
    }
}

#[test]
fn shell_uses_configured_copy() {
    let config = WidgetConfig {
        title: "Mentor Desk".into(),
        placeholder: "Ask away".into(),
        ..WidgetConfig::default()
    };
    let html = shell_html(&config);
    assert!(html.contains("<span>Mentor Desk</span>"));
    assert!(html.contains(r#"placeholder="Ask away""#));
    assert!(html.contains(r#"accept=".pdf,.docx,.doc,.txt,.md,.csv,.xlsx,.xls,.ppt,.pptx""#));
}
