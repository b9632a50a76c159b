// src/ports/html.rs
use crate::domain::Note;
use crate::infrastructure::markdown::markdown_to_html;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    fn render_tags(&self, note: &Note) -> String {
        if note.tags.is_empty() {
            return String::new();
        }
        let badges: Vec<String> = note
            .tags
            .iter()
            .map(|tag| {
                format!(
                    r#"<span class="tag" data-tag-id="{}">{}</span>"#,
                    encode_double_quoted_attribute(&tag.id),
                    encode_text(&tag.label)
                )
            })
            .collect();
        format!(r#"<div class="tags">{}</div>"#, badges.join(""))
    }

    #[instrument(level = "debug", skip(self, note), fields(note_id = %note.id))]
    pub fn render(&self, note: &Note) -> String {
        let title = encode_text(&note.title);
        let body = markdown_to_html(&note.markdown);
        let tags = self.render_tags(note);

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .card {{
            background: white;
            border-radius: 8px;
            padding: 2rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        pre {{
            white-space: pre-wrap;
            word-wrap: break-word;
            background-color: #f8f9fa;
            padding: 1rem;
            border-radius: 4px;
            overflow-x: auto;
        }}
        code {{
            background-color: #f0f0f0;
            padding: 2px 4px;
            border-radius: 3px;
            font-family: monospace;
        }}
        .tags {{
            margin-bottom: 1.5rem;
        }}
        .tag {{
            display: inline-block;
            background: #0d6efd;
            color: white;
            padding: 2px 8px;
            border-radius: 4px;
            margin-right: 4px;
            font-size: 0.8em;
        }}
        .note-info {{
            margin-top: 2rem;
            padding-top: 1rem;
            border-top: 1px solid #eee;
            font-size: 0.9em;
            color: #666;
        }}
    </style>
</head>
<body>
    <div class="card">
        <h1>{title}</h1>
        {tags}
        <div class="note-body">{body}</div>
        <div class="note-info">Note ID: {note_id}</div>
    </div>
</body>
</html>"#,
            title = title,
            tags = tags,
            body = body,
            note_id = encode_text(&note.id),
        )
    }
}
