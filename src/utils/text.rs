/// Unicode blocks rendered two columns wide (CJK, Hangul, fullwidth forms).
const WIDE_RANGES: &[(char, char)] = &[
    ('\u{1100}', '\u{115F}'),
    ('\u{2E80}', '\u{303F}'),
    ('\u{3040}', '\u{33FF}'),
    ('\u{3400}', '\u{4DBF}'),
    ('\u{4E00}', '\u{9FFF}'),
    ('\u{A000}', '\u{A4CF}'),
    ('\u{AC00}', '\u{D7AF}'),
    ('\u{F900}', '\u{FAFF}'),
    ('\u{FE10}', '\u{FE19}'),
    ('\u{FE30}', '\u{FE6F}'),
    ('\u{FF00}', '\u{FFEF}'),
    ('\u{1F300}', '\u{1FAFF}'),
    ('\u{20000}', '\u{2EBEF}'),
];

fn char_width(c: char) -> usize {
    if WIDE_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c)) {
        2
    } else {
        1
    }
}

/// Terminal columns taken by `s`.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Splits `text` into lines no wider than `max_width` columns, preferring
/// to break at spaces.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut remaining = text;

    while display_width(remaining) > max_width {
        let mut width = 0;
        let mut hard_end = 0;
        let mut last_space = None;
        for (pos, ch) in remaining.char_indices() {
            width += char_width(ch);
            if width > max_width {
                break;
            }
            if ch == ' ' && pos > 0 {
                last_space = Some(pos);
            }
            hard_end = pos + ch.len_utf8();
        }

        match last_space {
            Some(space) => {
                lines.push(remaining[..space].to_string());
                remaining = remaining[space + 1..].trim_start();
            }
            None => {
                // A single wide char can exceed a tiny width; always make progress.
                let end = if hard_end == 0 {
                    remaining.chars().next().map_or(remaining.len(), char::len_utf8)
                } else {
                    hard_end
                };
                lines.push(remaining[..end].to_string());
                remaining = &remaining[end..];
            }
        }
    }

    if !remaining.is_empty() {
        lines.push(remaining.to_string());
    }
    lines
}

/// Keeps the first `limit` characters of `text`, appending `...` only when
/// something was cut.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
