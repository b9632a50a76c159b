// src/ports/console.rs
use crate::constants::PREVIEW_MAX_CHARS;
use crate::domain::{Note, Tag};
use crate::util::text::preview_line;

/// Plain text output for the terminal.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }

    fn tag_labels(tags: &[Tag]) -> String {
        tags.iter()
            .map(|t| t.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One row per note: id, title, tags and a preview of the body
    pub fn render_list(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return "No notes found".to_string();
        }

        notes
            .iter()
            .map(|note| {
                let mut line = format!("{}\t{}", note.id, note.title);
                if !note.tags.is_empty() {
                    line.push_str(&format!("\t[{}]", Self::tag_labels(&note.tags)));
                }
                let preview = preview_line(&note.markdown, PREVIEW_MAX_CHARS);
                if !preview.is_empty() {
                    line.push_str(&format!("\t{preview}"));
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_note(&self, note: &Note) -> String {
        let mut out = format!("# {}\n", note.title);
        if !note.tags.is_empty() {
            out.push_str(&format!("Tags: {}\n", Self::tag_labels(&note.tags)));
        }
        out.push_str(&format!("Id: {}\n\n", note.id));
        out.push_str(&note.markdown);
        out
    }

    pub fn render_tags(&self, tags: &[Tag]) -> String {
        if tags.is_empty() {
            return "No tags found".to_string();
        }
        tags.iter()
            .map(|t| format!("{}\t{}", t.id, t.label))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> Note {
        Note {
            id: "1".to_string(),
            title: "Todo".to_string(),
            markdown: "# Heading\n\nbody".to_string(),
            tags: vec![
                Tag {
                    id: "a".to_string(),
                    label: "work".to_string(),
                },
                Tag {
                    id: "b".to_string(),
                    label: "home".to_string(),
                },
            ],
        }
    }

    #[test]
    fn given_notes_when_rendering_list_then_shows_tags_and_preview() {
        let out = ConsolePresenter::new().render_list(&[note()]);

        assert_eq!(out, "1\tTodo\t[work, home]\tHeading");
    }

    #[test]
    fn given_no_notes_when_rendering_list_then_says_so() {
        assert_eq!(ConsolePresenter::new().render_list(&[]), "No notes found");
    }

    #[test]
    fn given_note_when_rendering_detail_then_includes_markdown_verbatim() {
        let out = ConsolePresenter::new().render_note(&note());

        assert!(out.starts_with("# Todo\nTags: work, home\nId: 1\n\n"));
        assert!(out.ends_with("# Heading\n\nbody"));
    }

    #[test]
    fn given_tags_when_rendering_then_lists_id_and_label() {
        let tags = note().tags;

        assert_eq!(ConsolePresenter::new().render_tags(&tags), "a\twork\nb\thome");
    }
}
