//! Line-oriented HTML pretty-printer.
//!
//! Splits flat markup on `<` and indents by tag balance. It only looks at
//! the leading `</` and at `/>`, so irregular markup (unclosed void elements,
//! `<` inside comments or scripts) can be over- or under-indented.

const INDENT: &str = "  ";

pub fn format_html(markup: &str) -> String {
    let mut formatted = String::new();
    let mut depth = 0;

    for segment in markup.split('<').filter(|s| !s.is_empty()) {
        let (line, next_depth) = format_segment(segment, depth);
        formatted.push_str(&line);
        formatted.push('\n');
        depth = next_depth;
    }

    formatted
}

/// Format one `<`-delimited segment at `depth`, returning the line and the
/// depth for the next segment. Depth saturates at zero.
pub fn format_segment(segment: &str, depth: usize) -> (String, usize) {
    let tag = format!("<{}", segment);

    let is_closing = tag.starts_with("</");
    let depth = if is_closing {
        depth.saturating_sub(1)
    } else {
        depth
    };

    let line = format!("{}{}", INDENT.repeat(depth), tag.trim());

    let next_depth = if !is_closing && !tag.contains("/>") {
        depth + 1
    } else {
        depth
    };

    (line, next_depth)
}
