pub use folio_utils_derive::trace_instrument;

/// Returns the version of the folio backend.
pub fn folio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Truncates `s` to at most `max_chars` characters, appending `suffix` if
/// anything was cut off.
///
/// #### Example
/// ```rust
/// # use folio_utils::truncate_chars;
/// assert_eq!(truncate_chars("Hello World", 5, "..."), "Hello...");
/// assert_eq!(truncate_chars("Hello", 5, "..."), "Hello");
/// ```
pub fn truncate_chars(s: &str, max_chars: usize, suffix: &str) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}{suffix}", &s[..idx]),
        None => s.into(),
    }
}

#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables)]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}
