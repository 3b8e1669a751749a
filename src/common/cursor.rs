use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque continuation token returned by a paginated listing call.
///
/// The value is passed back to the service unchanged to retrieve the next page.
/// It is never parsed or built locally; the only thing a caller may do with it
/// is keep it (for example serialized alongside other state) and feed it back
/// through [`PagingArgs::next_token`](crate::common::paging::PagingArgs::next_token).
///
/// ```rust
/// use workspaces_pager::common::cursor::Cursor;
///
/// let cursor = Cursor::from("token".to_string());
/// assert_eq!(cursor.as_str(), "token");
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// The raw token as handed out by the service.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the service handed out an empty token, which ends a listing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<Cursor> for String {
    fn from(cursor: Cursor) -> Self {
        cursor.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::empty(String::new(), true)]
    #[case::present("a".to_string(), false)]
    fn test_is_empty(#[case] token: String, #[case] expected: bool) {
        let actual = Cursor::from(token).is_empty();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_serde_transparent() {
        let cursor = Cursor::from("a+b/c==");
        let serialized = serde_json::to_string(&cursor).unwrap();
        assert_eq!(serialized, "\"a+b/c==\"");
        let deserialized: Cursor = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, cursor);
    }
}
