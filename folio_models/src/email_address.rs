use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;

/// `local@domain.tld`, where no part may contain whitespace or a second `@`.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

#[nutype(
    sanitize(trim, lowercase),
    validate(regex = EMAIL_REGEX),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        TryFrom,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize
    )
)]
pub struct EmailAddress(String);
