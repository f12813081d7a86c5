//! Recipient resolution from free-text and pre-split address specifications.
//!
//! Project report recipients are configured as a single free-text field where
//! addresses may be separated by any mixture of commas, semicolons, colons or
//! whitespace. Resolution is best-effort by design: blank tokens are dropped
//! silently so that one malformed configuration entry never blocks report
//! delivery.
//!
//! Addresses are intentionally **not** deduplicated — a repeated address
//! receives the mail once per occurrence, and relative order is preserved.

/// Delimiter class for free-text address lists.
///
/// Any single one of these characters separates tokens; runs of delimiters
/// just produce blank tokens that the filter discards.
fn is_delimiter(c: char) -> bool {
    c == ',' || c == ';' || c == ':' || c.is_whitespace()
}

/// The one blank-token predicate shared by both resolution paths.
fn meaningful(token: &str) -> Option<&str> {
    let trimmed = token.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Resolve a free-text address list into an ordered list of addresses.
///
/// Splits on the delimiter class, trims every token and drops the blank ones.
/// Never fails; unparseable input just yields fewer addresses.
///
/// # Example
///
/// ```
/// let addrs = worklog::recipients::resolve("a@x.com, ;  b@y.com:c@z.com");
/// assert_eq!(addrs, vec!["a@x.com", "b@y.com", "c@z.com"]);
/// ```
pub fn resolve(raw: &str) -> Vec<String> {
    raw.split(is_delimiter)
        .filter_map(meaningful)
        .map(str::to_owned)
        .collect()
}

/// Resolve an already-split address collection.
///
/// Applies the same trim-and-drop-blank rule as [`resolve`], but each input
/// item is taken as one candidate address without further splitting.
pub fn resolve_all<I, S>(addresses: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    addresses
        .into_iter()
        .filter_map(|a| meaningful(a.as_ref()).map(str::to_owned))
        .collect()
}
