use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns used for log redaction. All are vetted literals.
struct PiiPatterns {
    email: Regex,
    jwt: Regex,
    opaque_token: Regex,
}

#[allow(clippy::unwrap_used)]
static PATTERNS: LazyLock<PiiPatterns> = LazyLock::new(|| PiiPatterns {
    email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap(),
    // header.payload.signature, each base64url
    jwt: Regex::new(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]*").unwrap(),
    opaque_token: Regex::new(r"\b[A-Za-z0-9+/_-]{24,}={0,2}").unwrap(),
});

/// Mask emails (keep the first character of the local part and the domain)
/// and bearer tokens before they reach a log line.
///
/// Order: JWTs first so the dotted form is replaced whole, then emails,
/// then any remaining long opaque runs.
pub fn redact(input: &str) -> String {
    let patterns = &*PATTERNS;

    let without_jwt = patterns.jwt.replace_all(input, "[REDACTED_TOKEN]");

    let without_email = patterns
        .email
        .replace_all(&without_jwt, |caps: &regex::Captures| {
            let full = &caps[0];
            match full.split_once('@') {
                Some((local, domain)) => match local.chars().next() {
                    Some(first) => format!("{first}***@{domain}"),
                    None => format!("@{domain}"),
                },
                None => full.to_string(),
            }
        });

    patterns
        .opaque_token
        .replace_all(&without_email, "[REDACTED_TOKEN]")
        .to_string()
}

/// Display wrapper that redacts on format, for use in tracing fields:
/// `warn!(email = %Redacted(&email), ...)`.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
