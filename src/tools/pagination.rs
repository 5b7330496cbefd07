//! Pagination normalization shared by the catalog tools

/// Clamp a requested page to the first page
pub fn normalize_page(page: i64) -> i64 {
    if page < 1 { 1 } else { page }
}

/// Replace a limit outside `[1, max]` with `fallback`
pub fn normalize_limit(limit: i64, max: i64, fallback: i64) -> i64 {
    if limit < 1 || limit > max {
        fallback
    } else {
        limit
    }
}

/// Number of items left after the current page, if any
///
/// Everything up to and including `current_page` is assumed to have been
/// served in pages of `limit` items.
pub fn remaining(total: i64, current_page: i64, limit: i64, returned: usize) -> Option<i64> {
    let returned = returned as i64;
    if total <= returned {
        return None;
    }

    let seen = current_page
        .saturating_sub(1)
        .saturating_mul(limit)
        .saturating_add(returned);
    let left = total.saturating_sub(seen);
    (left > 0).then_some(left)
}

/// Trailing hint pointing at the next page
pub fn next_page_hint(noun: &str, remaining: i64, current_page: i64) -> String {
    format!(
        "... and {} more {}. Use page={} to see more.",
        remaining,
        noun,
        current_page + 1
    )
}
