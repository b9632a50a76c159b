// src/infrastructure/markdown.rs
use pulldown_cmark::{html, Event, Options, Parser};

/// Render markdown to an HTML fragment.
///
/// Raw HTML in the source is emitted as escaped text, so a note can never
/// inject markup or scripts into the page it is shown in.
pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
