use std::sync::LazyLock;

use regex::Regex;

/// WHATWG HTML5 `input[type=email]` pattern.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// A website URL requires an explicit http or https scheme.
static WEBSITE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^https?://[^\s"]+$"#).unwrap());

pub fn is_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

pub fn is_website(input: &str) -> bool {
    WEBSITE_REGEX.is_match(input)
}
