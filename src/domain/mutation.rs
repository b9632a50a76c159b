// src/domain/mutation.rs
//
// Collection updates for notes and tags. Every function returns a new
// collection and leaves its input untouched. None of them fail: an id that
// matches nothing yields an unchanged copy.
use crate::domain::{NoteData, RawNote, Tag};
use uuid::Uuid;

fn tag_ids(tags: &[Tag]) -> Vec<String> {
    tags.iter().map(|t| t.id.clone()).collect()
}

/// Append a new note built from `data`, returning the collection and the new note.
pub fn create_note(notes: &[RawNote], data: NoteData) -> (Vec<RawNote>, RawNote) {
    let note = RawNote {
        id: Uuid::new_v4().to_string(),
        tag_ids: tag_ids(&data.tags),
        title: data.title,
        markdown: data.markdown,
    };
    let mut next = notes.to_vec();
    next.push(note.clone());
    (next, note)
}

pub fn update_note(notes: &[RawNote], id: &str, data: &NoteData) -> Vec<RawNote> {
    notes
        .iter()
        .map(|note| {
            if note.id == id {
                RawNote {
                    id: note.id.clone(),
                    title: data.title.clone(),
                    markdown: data.markdown.clone(),
                    tag_ids: tag_ids(&data.tags),
                }
            } else {
                note.clone()
            }
        })
        .collect()
}

/// Replace title and markdown only. Tag references are kept as stored.
pub fn update_note_content(
    notes: &[RawNote],
    id: &str,
    title: &str,
    markdown: &str,
) -> Vec<RawNote> {
    notes
        .iter()
        .map(|note| {
            if note.id == id {
                RawNote {
                    title: title.to_string(),
                    markdown: markdown.to_string(),
                    ..note.clone()
                }
            } else {
                note.clone()
            }
        })
        .collect()
}

pub fn delete_note(notes: &[RawNote], id: &str) -> Vec<RawNote> {
    notes.iter().filter(|note| note.id != id).cloned().collect()
}

pub fn add_tag(tags: &[Tag], tag: Tag) -> Vec<Tag> {
    let mut next = tags.to_vec();
    next.push(tag);
    next
}

pub fn rename_tag(tags: &[Tag], id: &str, label: &str) -> Vec<Tag> {
    tags.iter()
        .map(|tag| {
            if tag.id == id {
                Tag {
                    id: tag.id.clone(),
                    label: label.to_string(),
                }
            } else {
                tag.clone()
            }
        })
        .collect()
}

/// Remove a tag. Notes referencing it keep the dangling id.
pub fn delete_tag(tags: &[Tag], id: &str) -> Vec<Tag> {
    tags.iter().filter(|tag| tag.id != id).cloned().collect()
}
