// src/util/text.rs
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MARKDOWN_IMAGE_RE: Regex =
        Regex::new(r"!\[([^\]]*)\]\([^)]*\)").expect("Failed to compile image regex");
    static ref MARKDOWN_LINK_RE: Regex =
        Regex::new(r"\[([^\]]+)\]\([^)]*\)").expect("Failed to compile link regex");
    static ref MARKDOWN_SYMBOL_RE: Regex =
        Regex::new(r"[*_`#>~]+").expect("Failed to compile markdown symbol regex");
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").expect("Failed to compile whitespace regex");
}

/// Extract a one-line plain text preview from markdown.
///
/// This function:
/// 1. Takes the first non-empty line
/// 2. Replaces links and images with their text
/// 3. Strips emphasis, heading, quote and code markers
/// 4. Truncates to `max_chars`, appending `…` when cut
///
/// # Examples
///
/// ```
/// use marknote::util::text::preview_line;
///
/// let md = "\n# Groceries\n\n- milk";
/// assert_eq!(preview_line(md, 40), "Groceries");
/// ```
pub fn preview_line(markdown: &str, max_chars: usize) -> String {
    let first = markdown
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    let without_images = MARKDOWN_IMAGE_RE.replace_all(first, "$1");
    let without_links = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_links, "");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let text = normalized.trim();

    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    } else {
        text.to_string()
    }
}
