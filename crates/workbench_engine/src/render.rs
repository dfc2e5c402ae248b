use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Schemes a report link or image may point at. Anything else (javascript:,
/// data:, file:, ...) gets its destination dropped.
const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Converts a markdown report body into displayable markup.
///
/// Raw HTML in the source is re-emitted as escaped text and unsafe link
/// destinations are stripped, so the output carries no executable content:
/// the only tags present are the ones the markdown grammar itself produces.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = Parser::new_ext(source, options).map(sanitize_event);
    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, events);
    out
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        // Text events are entity-escaped by the html writer.
        Event::Html(raw) => Event::Text(raw),
        Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_destination(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed(""),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_destination(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed(""),
            title,
            id,
        }),
        other => other,
    }
}

fn is_safe_destination(dest: &str) -> bool {
    match dest.split_once(':') {
        Some((scheme, _)) => SAFE_SCHEMES
            .iter()
            .any(|safe| scheme.eq_ignore_ascii_case(safe)),
        // No scheme: a relative reference.
        None => true,
    }
}
