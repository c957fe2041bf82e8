use super::taxonomy::Taxonomy;
use super::types::SkillCounts;

/// Counts every taxonomy term in `text`, which should already be normalized.
///
/// Each term is searched independently, so overlapping terms such as
/// "java" and "javascript" are tallied on their own.
pub fn find_skills(text: &str, taxonomy: &Taxonomy) -> SkillCounts {
    let mut counts = SkillCounts::empty(taxonomy);
    if text.is_empty() {
        return counts;
    }

    for (category, term) in taxonomy.terms() {
        let n = count_occurrences(text, term);
        if n > 0 {
            counts.record(category, term, n);
        }
    }

    counts
}

/// Number of non-overlapping, word-bounded occurrences of `term` in `text`.
///
/// A candidate counts only when the characters directly before and after it
/// are not alphanumeric. An accepted match moves the cursor past its end; a
/// rejected one moves it by a single character.
pub fn count_occurrences(text: &str, term: &str) -> usize {
    if term.is_empty() || term.len() > text.len() {
        return 0;
    }

    let mut count = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(term) {
        let start = cursor + offset;
        let end = start + term.len();

        if is_boundary_before(text, start) && is_boundary_after(text, end) {
            count += 1;
            cursor = end;
        } else {
            // Step over the first char of the rejected candidate.
            cursor = start + text[start..].chars().next().map_or(1, char::len_utf8);
        }

        if cursor >= text.len() {
            break;
        }
    }

    count
}

fn is_boundary_before(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric())
}

fn is_boundary_after(text: &str, end: usize) -> bool {
    text[end..].chars().next().is_none_or(|c| !c.is_alphanumeric())
}
