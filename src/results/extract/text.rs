//! Plain-text scans: notice, GPA and standing.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Node};

use crate::results::Standing;

/// Opening words of the "result is subject to the examinations committee's
/// approval" disclaimer.
pub const NOTICE_MARKER: &str = "النتيجة خاضعة";

/// `<GPA label> ( <decimal> )`, label in Arabic. The token is kept verbatim.
static GPA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"المعدل\s*\(\s*(\d[\d.]*)\s*\)").expect("constant GPA pattern")
});

/// Elements that flow inside a line of text; everything else breaks it.
const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "big", "code", "em", "font", "i", "label", "small", "span", "strong",
    "sub", "sup", "u",
];

/// Concatenation of every text node in the document.
pub(crate) fn plain_text(doc: &Html) -> String {
    doc.root_element().text().collect()
}

/// The disclaimer sentence, trimmed, with inner whitespace collapsed.
///
/// Taken from the run of inline text holding the marker, so inline markup inside
/// the sentence does not split it and neighbouring blocks never leak into it.
pub(crate) fn notice(doc: &Html) -> Option<String> {
    let mut runs = vec![String::new()];
    push_runs(doc.root_element(), &mut runs);

    runs.iter()
        .find(|run| run.contains(NOTICE_MARKER))
        .map(|run| run.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn push_runs(el: ElementRef<'_>, runs: &mut Vec<String>) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => {
                if let Some(run) = runs.last_mut() {
                    run.push_str(text);
                }
            }
            Node::Element(inner) if matches!(inner.name(), "script" | "style") => {
                runs.push(String::new());
            }
            Node::Element(inner) => {
                let Some(inner_ref) = ElementRef::wrap(child) else {
                    continue;
                };
                if INLINE_ELEMENTS.contains(&inner.name()) {
                    push_runs(inner_ref, runs);
                } else {
                    runs.push(String::new());
                    push_runs(inner_ref, runs);
                    runs.push(String::new());
                }
            }
            _ => {}
        }
    }
}

pub(crate) fn gpa(text: &str) -> Option<String> {
    GPA_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// "Pass" wins when both markers occur.
pub(crate) fn standing(text: &str) -> Option<Standing> {
    [Standing::Pass, Standing::Fail]
        .into_iter()
        .find(|s| text.contains(s.marker()))
}
