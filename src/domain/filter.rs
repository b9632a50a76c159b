// src/domain/filter.rs
use crate::domain::Note;

/// List view filter.
///
/// Title matching is a case-insensitive substring test. A note passes the tag
/// filter only when it carries every selected tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub title: Option<String>,
    pub tag_ids: Vec<String>,
}

impl NoteFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_tag(mut self, tag_id: impl Into<String>) -> Self {
        self.tag_ids.push(tag_id.into());
        self
    }

    pub fn matches(&self, note: &Note) -> bool {
        let title_ok = match self.title.as_deref() {
            None | Some("") => true,
            Some(query) => note.title.to_lowercase().contains(&query.to_lowercase()),
        };
        title_ok && self.tag_ids.iter().all(|id| note.has_tag(id))
    }

    pub fn apply(&self, notes: &[Note]) -> Vec<Note> {
        notes.iter().filter(|n| self.matches(n)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tag;
    use rstest::rstest;

    fn note(id: &str, title: &str, tags: &[&str]) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            markdown: String::new(),
            tags: tags
                .iter()
                .map(|t| Tag {
                    id: t.to_string(),
                    label: t.to_string(),
                })
                .collect(),
        }
    }

    fn sample() -> Vec<Note> {
        vec![
            note("1", "Shopping list", &["home"]),
            note("2", "Sprint planning", &["work", "urgent"]),
            note("3", "Reading LIST", &["home", "urgent"]),
        ]
    }

    #[rstest]
    #[case(None, vec!["1", "2", "3"])]
    #[case(Some(""), vec!["1", "2", "3"])]
    #[case(Some("list"), vec!["1", "3"])]
    #[case(Some("PLAN"), vec!["2"])]
    #[case(Some("missing"), vec![])]
    fn given_title_query_when_filtering_then_matches_case_insensitively(
        #[case] query: Option<&str>,
        #[case] expected: Vec<&str>,
    ) {
        let filter = NoteFilter {
            title: query.map(str::to_string),
            tag_ids: vec![],
        };

        let ids: Vec<String> = filter.apply(&sample()).into_iter().map(|n| n.id).collect();

        assert_eq!(ids, expected);
    }

    #[rstest]
    #[case(vec!["home"], vec!["1", "3"])]
    #[case(vec!["home", "urgent"], vec!["3"])]
    #[case(vec!["unknown"], vec![])]
    fn given_selected_tags_when_filtering_then_requires_all_of_them(
        #[case] tag_ids: Vec<&str>,
        #[case] expected: Vec<&str>,
    ) {
        let filter = NoteFilter {
            title: None,
            tag_ids: tag_ids.into_iter().map(str::to_string).collect(),
        };

        let ids: Vec<String> = filter.apply(&sample()).into_iter().map(|n| n.id).collect();

        assert_eq!(ids, expected);
    }

    #[test]
    fn given_title_and_tag_when_filtering_then_both_must_match() {
        let filter = NoteFilter::new().with_title("list").with_tag("urgent");

        let result = filter.apply(&sample());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "3");
    }
}
