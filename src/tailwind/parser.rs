//! Class string tokenizer and markup scanner.

/// Whitespace-delimited class tokens, in order.
///
/// Duplicates are kept: a repeated class is applied again, so it still wins
/// over anything written between its two occurrences.
pub fn tokenize(input: &str) -> impl Iterator<Item = &str> {
    input.split_whitespace()
}

/// Values of every `class="..."` / `class='...'` attribute in `markup`.
///
/// Attributes merely ending in `class` (`data-class`, `subclass`) are
/// skipped. An unterminated value runs to the end of the input.
pub fn class_attributes(markup: &str) -> Vec<&str> {
    let bytes = markup.as_bytes();
    let len = bytes.len();
    let mut values = Vec::new();
    let mut i = 0;

    while i < len {
        if !markup.is_char_boundary(i) || !markup[i..].starts_with("class") {
            i += 1;
            continue;
        }
        let at_word_start = i == 0 || !is_name_byte(bytes[i - 1]);
        let mut j = i + "class".len();
        if !at_word_start {
            i = j;
            continue;
        }

        while j < len && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if j >= len || bytes[j] != b'=' {
            i = j;
            continue;
        }
        j += 1;
        while j < len && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if j >= len || (bytes[j] != b'"' && bytes[j] != b'\'') {
            i = j;
            continue;
        }

        let quote = bytes[j];
        let start = j + 1;
        let end = bytes[start..]
            .iter()
            .position(|b| *b == quote)
            .map_or(len, |offset| start + offset);
        values.push(&markup[start..end]);
        i = end + 1;
    }

    values
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_keep_order_and_duplicates() {
        let tokens: Vec<_> = tokenize("  p-2 \n p-4\tp-2 ").collect();
        assert_eq!(tokens, vec!["p-2", "p-4", "p-2"]);
        assert_eq!(tokenize("   ").count(), 0);
    }

    #[test]
    fn double_and_single_quoted() {
        let html = r#"<div class="flex p-4"><span class='text-sm'></span></div>"#;
        assert_eq!(class_attributes(html), vec!["flex p-4", "text-sm"]);
    }

    #[test]
    fn spaces_around_equals() {
        let html = r#"<div class = "grid gap-2"></div>"#;
        assert_eq!(class_attributes(html), vec!["grid gap-2"]);
    }

    #[test]
    fn ignores_lookalike_attributes() {
        let html = r#"<div data-class="nope" subclass="no" class="yes"></div>"#;
        assert_eq!(class_attributes(html), vec!["yes"]);
    }

    #[test]
    fn no_attributes() {
        assert!(class_attributes("<div id='foo'>class</div>").is_empty());
    }

    #[test]
    fn unterminated_value_runs_to_end() {
        assert_eq!(class_attributes(r#"<div class="p-4 m-2"#), vec!["p-4 m-2"]);
    }

    #[test]
    fn multibyte_text_is_skipped_safely() {
        let html = r#"<p class="italic">Olá — mundo</p><b class="font-bold">ç</b>"#;
        assert_eq!(class_attributes(html), vec!["italic", "font-bold"]);
    }
}
