//! Instruction parser.
//!
//! A single forward pass over the source lines turns comment-embedded POD
//! markup into an ordered list of [`Instruction`] records. The pass
//! carries two flags: whether we are inside a markup block (`in_pod`) and
//! whether the next content line opens a new paragraph.

use crate::syntax::CommentSyntax;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One parsed markup unit: a tag, an optional title, and the content
/// paragraphs accumulated until the next instruction line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Tag name: `head1`..`head9`, `over`, `item`, `back`, or a free tag.
    /// A `cut` never materialises as an instruction.
    pub element: String,
    /// Remainder of the instruction line, trimmed. May be empty.
    pub title: String,
    /// Ordered paragraphs. Continuation lines are concatenated with no
    /// separator; a paragraph starting with whitespace is preformatted.
    pub content: Vec<String>,
}

impl Instruction {
    /// Heading depth if the element is `head<digit>`.
    pub fn heading_level(&self) -> Option<u8> {
        let digit = self.element.strip_prefix("head")?;
        let mut chars = digit.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10).map(|n| n as u8),
            _ => None,
        }
    }

    /// Whether the element is any heading tag (case-insensitive prefix
    /// match, as the dependency and classname scans require).
    ///
    /// Tags come from a Unicode-aware word match, so the prefix check
    /// must stay on char boundaries.
    pub fn is_heading(&self) -> bool {
        self.element
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("head"))
    }
}

/// Parse POD out of a file, using the given adapter for comment syntax.
///
/// Returns an empty list when the path is not a regular readable file;
/// documentation extraction over many files must never abort on one bad
/// input.
pub fn parse_file(path: &Path, adapter: &dyn CommentSyntax) -> Vec<Instruction> {
    if !path.is_file() {
        return Vec::new();
    }
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Vec::new(),
    };
    let lines = BufReader::new(file).lines().map_while(Result::ok);
    parse_lines(lines, adapter)
}

/// The state machine proper, independent of any I/O source.
pub fn parse_lines<I>(lines: I, adapter: &dyn CommentSyntax) -> Vec<Instruction>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut instructions: Vec<Instruction> = Vec::new();
    let mut in_pod = false;
    let mut new_paragraph = false;

    for raw in lines {
        let line = adapter.strip_comment(raw.as_ref());

        if let Some((tag, title)) = adapter.classify(line) {
            if tag == "cut" {
                in_pod = false;
                continue;
            }
            in_pod = true;
            new_paragraph = true;
            instructions.push(Instruction {
                element: tag,
                title,
                content: Vec::new(),
            });
        } else if in_pod && line.trim().is_empty() {
            new_paragraph = true;
        } else if in_pod && new_paragraph {
            if let Some(current) = instructions.last_mut() {
                current.content.push(line.to_string());
                new_paragraph = false;
            }
        } else if in_pod {
            if let Some(paragraph) = instructions
                .last_mut()
                .and_then(|inst| inst.content.last_mut())
            {
                paragraph.push_str(line);
            }
        }
        // Lines outside any markup block are discarded.
    }

    instructions
}
