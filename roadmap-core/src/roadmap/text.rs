//! Title cleanup and slug generation

use std::sync::LazyLock;

use regex::Regex;

/// Longest title accepted by the issue tracker before we cut it
pub const MAX_TITLE_LEN: usize = 80;

/// Longest slug used in issue filenames
pub const MAX_SLUG_LEN: usize = 50;

const ELLIPSIS: &str = "...";

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"));

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug pattern"));

const TRANSLITERATIONS: [(char, &str); 4] = [('ä', "ae"), ('ö', "oe"), ('ü', "ue"), ('ß', "ss")];

/// Remove `**bold**` wrapping, keeping the inner text
pub fn strip_bold(text: &str) -> String {
    BOLD.replace_all(text, "$1").into_owned()
}

/// Strip emphasis and cap the title at [`MAX_TITLE_LEN`] characters
///
/// Longer titles keep their first 77 characters followed by `...`.
pub fn clean_title(text: &str) -> String {
    let title = strip_bold(text);
    if title.chars().count() <= MAX_TITLE_LEN {
        return title;
    }

    let keep = MAX_TITLE_LEN - ELLIPSIS.len();
    let mut truncated: String = title.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Build a filename-safe slug: `[a-z0-9-]`, no edge hyphens, at most 50 chars
///
/// Distinct titles may share a slug; callers accept the overwrite.
pub fn slugify(text: &str) -> String {
    let mut lowered = text.to_lowercase();
    for (from, to) in TRANSLITERATIONS {
        lowered = lowered.replace(from, to);
    }

    let slug = NON_ALNUM.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');

    // Only ASCII is left at this point, so byte slicing is char slicing.
    let end = slug.len().min(MAX_SLUG_LEN);
    slug[..end].trim_end_matches('-').to_string()
}
