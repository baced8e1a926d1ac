//! Display formatting for feed posts.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

/// Long-form date for a post timestamp (`2024-03-05T10:00:00Z` → `March 5, 2024`).
///
/// Returns `None` when the timestamp is absent or not RFC 3339.
pub fn post_date(created_at: Option<&str>) -> Option<String> {
    let parsed = OffsetDateTime::parse(created_at?.trim(), &Rfc3339).ok()?;
    parsed
        .format(format_description!(
            "[month repr:long] [day padding:none], [year]"
        ))
        .ok()
}

/// Text shown in the feed container when the request fails.
pub fn feed_error(message: &str) -> String {
    format!("Error: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_as_long_date() {
        assert_eq!(
            post_date(Some("2024-03-05T10:15:00.000Z")).as_deref(),
            Some("March 5, 2024")
        );
    }

    #[test]
    fn rejects_missing_or_garbled_dates() {
        assert_eq!(post_date(None), None);
        assert_eq!(post_date(Some("yesterday")), None);
    }

    #[test]
    fn error_text_is_prefixed() {
        assert_eq!(feed_error("timeout"), "Error: timeout");
    }
}
