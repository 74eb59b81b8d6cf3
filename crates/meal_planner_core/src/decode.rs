//! crates/meal_planner_core/src/decode.rs
//!
//! Decoders for the quasi-literal text fields of the external recipe dataset.
//!
//! The dataset stores lists as `c("a", "b", ...)` and durations as `PT..`
//! strings. The fixed-width trims and literal separators below mirror that
//! format exactly; items that themselves contain a separator are mis-split,
//! which is a property of the data, not something to work around here.

use crate::error::{CoreError, CoreResult};

/// First character of a vector-literal field.
const LIST_MARKER: char = 'c';
/// Leading `c("` of a vector-literal.
const LIST_PREFIX_LEN: usize = 3;
/// Trailing `)` of a vector-literal.
const LIST_SUFFIX_LEN: usize = 1;
const LIST_SEPARATOR: &str = ", ";

const STEPS_PREFIX_LEN: usize = 3;
const STEPS_SUFFIX_LEN: usize = 4;
const STEP_SEPARATOR: &str = "\", \"";

const DURATION_PREFIX: &str = "PT";

/// Number of display chunks produced by [`partition_four`].
pub const CHUNK_COUNT: usize = 4;

/// Decodes an images-style field into its items.
///
/// * `None` decodes to an empty list.
/// * A scalar (anything not starting with `c`) decodes to exactly one item,
///   with one surrounding quote stripped from each end.
/// * A vector-literal decodes to zero or more items in stored order,
///   duplicates kept.
pub fn decode_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    if !raw.starts_with(LIST_MARKER) {
        return vec![strip_outer_quotes(raw).to_string()];
    }

    // Too short to carry the `c(` ... `)` wrapping: nothing inside.
    let Some(body) = trim_chars(raw, LIST_PREFIX_LEN, LIST_SUFFIX_LEN) else {
        return Vec::new();
    };

    split_dataset(body, LIST_SEPARATOR)
        .into_iter()
        .map(clean_item)
        .collect()
}

/// Writes `items` in vector-literal form. `decode_list` reverses it for items
/// that contain no separator, quote or backslash.
pub fn encode_list<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect();
    format!("{}({})", LIST_MARKER, quoted.join(LIST_SEPARATOR))
}

/// Strips the `PT` prefix of a stored duration, e.g. `PT1H30M` -> `1H30M`.
///
/// A missing duration is an empty string. Anything else without the prefix
/// is rejected.
pub fn clean_duration(raw: Option<&str>) -> CoreResult<String> {
    let Some(raw) = raw else {
        return Ok(String::new());
    };

    raw.strip_prefix(DURATION_PREFIX)
        .map(str::to_string)
        .ok_or_else(|| {
            CoreError::InvalidFormat(format!(
                "duration {raw:?} does not start with {DURATION_PREFIX:?}"
            ))
        })
}

/// Decodes the instructions field into ordered cooking steps.
pub fn decode_instructions(raw: &str) -> Vec<String> {
    let body = if raw.chars().count() > 2 {
        trim_chars(raw, STEPS_PREFIX_LEN, STEPS_SUFFIX_LEN).unwrap_or("")
    } else {
        raw
    };

    // The line breaks are escape text in the dataset, not control characters.
    let cleaned = body
        .replace("\\\"", "")
        .replace("\\r\\n", "")
        .replace("\\n", "")
        .replace("\\r", "");

    if cleaned.is_empty() {
        return Vec::new();
    }

    split_dataset(&cleaned, STEP_SEPARATOR)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Splits steps into four contiguous display chunks.
///
/// Chunk sizes differ by at most one, earlier chunks take the remainder, and
/// chunks past the last step are empty strings.
pub fn partition_four(steps: &[String]) -> [String; CHUNK_COUNT] {
    let total = steps.len();
    let base = total / CHUNK_COUNT;
    let remainder = total % CHUNK_COUNT;

    std::array::from_fn(|i| {
        let start = i * base + i.min(remainder);
        let size = base + usize::from(i < remainder);
        if start >= total {
            String::new()
        } else {
            steps[start..start + size].join(" ")
        }
    })
}

/// Removes at most one `"` from each end.
fn strip_outer_quotes(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

fn clean_item(item: &str) -> String {
    strip_outer_quotes(item).replace(['\\', '\n'], "")
}

/// Drops `front` characters from the start and `back` from the end.
/// Returns `None` when the string is shorter than both together.
fn trim_chars(s: &str, front: usize, back: usize) -> Option<&str> {
    let count = s.chars().count();
    if front + back > count {
        return None;
    }
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    Some(&s[byte_at(front)..byte_at(count - back)])
}

/// Splits the way the dataset's producer does: an empty input is one empty
/// item, and trailing empty items are dropped.
fn split_dataset<'a>(s: &'a str, separator: &str) -> Vec<&'a str> {
    let mut parts: Vec<&str> = s.split(separator).collect();
    if !s.is_empty() {
        while parts.last() == Some(&"") {
            parts.pop();
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn absent_list_is_empty() {
        assert!(decode_list(None).is_empty());
    }

    #[test]
    fn scalar_loses_one_layer_of_quotes() {
        assert_eq!(decode_list(Some("\"abc\"")), strings(&["abc"]));
        assert_eq!(
            decode_list(Some("\"https://img.example/a.jpg\"")),
            strings(&["https://img.example/a.jpg"])
        );
        assert_eq!(decode_list(Some("\"\"quoted\"\"")), strings(&["\"quoted\""]));
        assert_eq!(decode_list(Some("plain")), strings(&["plain"]));
    }

    #[test]
    fn empty_scalar_is_still_one_item() {
        assert_eq!(decode_list(Some("")), strings(&[""]));
    }

    #[test]
    fn vector_literal_decodes_in_order() {
        assert_eq!(
            decode_list(Some(r#"c("a", "b", "c")"#)),
            strings(&["a", "b", "c"])
        );
    }

    #[test]
    fn vector_literal_keeps_duplicates() {
        assert_eq!(
            decode_list(Some(r#"c("x.jpg", "x.jpg")"#)),
            strings(&["x.jpg", "x.jpg"])
        );
    }

    #[test]
    fn vector_literal_drops_backslashes_and_newlines() {
        let raw = "c(\"https://a\\/b.jpg\", \"line\none\", \"say \\\"hi\\\"\")";
        assert_eq!(
            decode_list(Some(raw)),
            strings(&["https://a/b.jpg", "lineone", "say \"hi\""])
        );
    }

    #[test]
    fn too_short_vector_literal_is_empty() {
        assert!(decode_list(Some("c()")).is_empty());
        assert!(decode_list(Some("c")).is_empty());
    }

    #[test]
    fn item_containing_separator_is_mis_split() {
        // Known limitation of the stored format.
        assert_eq!(
            decode_list(Some(r#"c("salt, pepper", "oil")"#)),
            strings(&["salt", "pepper", "oil"])
        );
    }

    #[test]
    fn encode_then_decode_returns_the_items() {
        let items = strings(&["https://img/1.jpg", "https://img/2.jpg", "https://img/1.jpg"]);
        assert_eq!(decode_list(Some(&encode_list(&items))), items);

        let none: Vec<String> = Vec::new();
        assert_eq!(encode_list(&none), "c()");
        assert!(decode_list(Some(&encode_list(&none))).is_empty());
    }

    #[test]
    fn duration_prefix_is_stripped() {
        assert_eq!(clean_duration(None).unwrap(), "");
        assert_eq!(clean_duration(Some("PT30M")).unwrap(), "30M");
        assert_eq!(clean_duration(Some("PT1H5M")).unwrap(), "1H5M");
        assert_eq!(clean_duration(Some("PT")).unwrap(), "");
    }

    #[test]
    fn duration_without_prefix_is_invalid() {
        let err = clean_duration(Some("30M")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidFormat(_)));
        assert!(matches!(
            clean_duration(Some("")),
            Err(CoreError::InvalidFormat(_))
        ));
    }

    #[test]
    fn instructions_split_into_steps() {
        let raw = r#"c("Preheat the oven.", "Mix the batter.", "Bake it well.  ")"#;
        assert_eq!(
            decode_instructions(raw),
            strings(&["Preheat the oven.", "Mix the batter.", "Bake it well."])
        );
    }

    #[test]
    fn instruction_suffix_trim_is_four_characters() {
        let raw = r#"c("Stir.", "Serve.")"#;
        assert_eq!(decode_instructions(raw), strings(&["Stir.", "Serv"]));
    }

    #[test]
    fn instruction_escapes_are_removed() {
        let raw = r#"c("Say \"done\".\r\n", "Cool\n down.\r", "End....")"#;
        assert_eq!(
            decode_instructions(raw),
            strings(&["Say done.", "Cool down.", "End.."])
        );
    }

    #[test]
    fn short_instructions_are_kept_verbatim() {
        assert_eq!(decode_instructions("ab"), strings(&["ab"]));
        assert!(decode_instructions("").is_empty());
        assert!(decode_instructions("c(\"\")").is_empty());
    }

    #[test]
    fn partition_of_nothing_is_four_empty_chunks() {
        let chunks = partition_four(&[]);
        assert_eq!(chunks, [String::new(), String::new(), String::new(), String::new()]);
    }

    #[test]
    fn partition_of_ten_steps_is_three_three_two_two() {
        let steps: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
        let chunks = partition_four(&steps);
        assert_eq!(chunks[0], "1 2 3");
        assert_eq!(chunks[1], "4 5 6");
        assert_eq!(chunks[2], "7 8");
        assert_eq!(chunks[3], "9 10");
    }

    #[test]
    fn partition_pads_missing_chunks() {
        let chunks = partition_four(&strings(&["only", "two"]));
        assert_eq!(chunks, ["only".to_string(), "two".to_string(), String::new(), String::new()]);
    }

    #[test]
    fn partition_sizes_differ_by_at_most_one() {
        for n in 0..25 {
            let steps: Vec<String> = (0..n).map(|i| format!("s{i}")).collect();
            let sizes: Vec<usize> = partition_four(&steps)
                .iter()
                .map(|chunk| chunk.split_whitespace().count())
                .collect();
            assert_eq!(sizes.iter().sum::<usize>(), n);
            let max = *sizes.iter().max().unwrap();
            let min = *sizes.iter().min().unwrap();
            assert!(max - min <= 1, "n = {n}, sizes = {sizes:?}");
        }
    }
}
