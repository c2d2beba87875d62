//! HTML renderer.
//!
//! Drives a second state machine over the flat instruction stream,
//! reconstructing nested list/heading HTML plus a CONTENTS block. The
//! stream carries no explicit nesting, so the renderer keeps a stack of
//! currently-open list scopes, local to one render call.

use crate::parsing::Instruction;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Rendering configuration.
#[derive(Debug, Default, Clone)]
pub struct RenderOptions {
    /// Omit the generated CONTENTS block at the top of the output.
    pub no_contents: bool,
}

/// An open HTML list scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListTag {
    Ul,
    Dl,
    Li,
    Dd,
}

impl ListTag {
    fn as_str(self) -> &'static str {
        match self {
            ListTag::Ul => "ul",
            ListTag::Dl => "dl",
            ListTag::Li => "li",
            ListTag::Dd => "dd",
        }
    }

    /// An item scope opened by `=item` (`li` or `dd`).
    fn is_item(self) -> bool {
        matches!(self, ListTag::Li | ListTag::Dd)
    }

    /// A list scope opened by `=over` (`ul` or `dl`).
    fn is_list(self) -> bool {
        matches!(self, ListTag::Ul | ListTag::Dl)
    }
}

/// Render an instruction stream to an HTML fragment.
///
/// The fragment is the CONTENTS block followed by the body, or the body
/// alone when [`RenderOptions::no_contents`] is set.
pub fn render(instructions: &[Instruction], options: &RenderOptions) -> String {
    let (contents, body) = render_parts(instructions);
    if options.no_contents {
        body
    } else {
        contents + &body
    }
}

/// Render the contents block and body separately.
pub fn render_parts(instructions: &[Instruction]) -> (String, String) {
    let mut body = String::new();
    let mut contents = String::from("<h1>CONTENTS</h1>");
    let mut contents_depth = 0u8;
    let mut nesting: Vec<ListTag> = Vec::new();

    for (index, inst) in instructions.iter().enumerate() {
        if let Some(level) = inst.heading_level() {
            let text = encode_text(&inst.title);
            let anchor = encode_double_quoted_attribute(&inst.title);
            body.push_str(&format!("<h{level} id=\"POD_{anchor}\">{text}</h{level}>"));

            // Walk the contents nesting one level at a time until it
            // matches the heading depth.
            while contents_depth != level {
                if contents_depth < level {
                    contents.push_str("<ul>\n");
                    contents_depth += 1;
                } else {
                    contents.push_str("</ul>\n");
                    contents_depth -= 1;
                }
            }
            contents.push_str(&format!("<li><a href=\"#POD_{anchor}\">{text}</a></li>"));
        } else if inst.element == "over" {
            // One step of lookahead decides the list flavor: a
            // description list needs the first item to carry both a
            // title and content.
            let flavor = match instructions.get(index + 1) {
                Some(next)
                    if next.element == "item"
                        && !next.title.is_empty()
                        && !next.content.is_empty() =>
                {
                    ListTag::Dl
                }
                _ => ListTag::Ul,
            };
            nesting.push(flavor);
            body.push_str(&format!("<{}>", flavor.as_str()));
        } else if inst.element == "back" {
            close_innermost(&mut nesting, &mut body, ListTag::is_item);
            close_innermost(&mut nesting, &mut body, ListTag::is_list);
        } else if inst.element == "item" {
            close_innermost(&mut nesting, &mut body, ListTag::is_item);
            match nesting.last() {
                Some(ListTag::Dl) => {
                    body.push_str(&format!("<dt>{}</dt><dd>", encode_text(&inst.title)));
                    nesting.push(ListTag::Dd);
                }
                Some(ListTag::Ul) => {
                    body.push_str(&format!("<li>{}", encode_text(&inst.title)));
                    nesting.push(ListTag::Li);
                }
                // An item with no enclosing list degrades to its
                // content alone.
                _ => {}
            }
        } else if !inst.element.is_empty() {
            // Free tag: raw element text plus escaped title, no
            // structural effect.
            body.push_str(&inst.element);
            body.push_str(&encode_text(&inst.title));
        }

        if !inst.content.is_empty() {
            paragraphs_to_html(&inst.content, &mut body);
        }
    }

    while contents_depth > 0 {
        contents.push_str("</ul>");
        contents_depth -= 1;
    }

    (contents, body)
}

/// Close and pop the innermost scope when it matches the predicate.
/// No-op on an empty stack, so malformed markup degrades to missing
/// closing tags rather than failing.
fn close_innermost(nesting: &mut Vec<ListTag>, body: &mut String, matches: fn(ListTag) -> bool) {
    if let Some(tag) = nesting.last().copied()
        && matches(tag)
    {
        nesting.pop();
        body.push_str("</");
        body.push_str(tag.as_str());
        body.push('>');
    }
}

/// Render content paragraphs: leading whitespace means preformatted.
fn paragraphs_to_html(paragraphs: &[String], out: &mut String) {
    for para in paragraphs {
        if para.starts_with(char::is_whitespace) {
            out.push_str("<code>");
            out.push_str(&encode_text(para));
            out.push_str("</code>");
        } else {
            out.push_str("<p>");
            out.push_str(&encode_text(para).replace('\n', "<br>"));
            out.push_str("</p>");
        }
    }
}
