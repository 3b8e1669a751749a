//! Request plumbing shared by the describe operations.

/// Convert a page size into the SDK's integer representation.
pub(crate) fn to_sdk_page_size(page_size: Option<u32>) -> Option<i32> {
    page_size.map(|page_size| i32::try_from(page_size).unwrap_or(i32::MAX))
}

/// Send a page request and map the output into a page.
macro_rules! send_page {
    ($builder:expr, $request:expr, $items:ident) => {
        $builder
            .set_next_token($request.cursor.map(String::from))
            .send()
            .await
            .map(|output| $crate::fetch::page::Page {
                items: output.$items.unwrap_or_default(),
                next_cursor: output.next_token.map($crate::common::cursor::Cursor::from),
            })
    };
}

pub(crate) use send_page;

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::absent(None, None)]
    #[case::small(Some(25), Some(25))]
    #[case::overflow(Some(u32::MAX), Some(i32::MAX))]
    fn test_to_sdk_page_size(#[case] page_size: Option<u32>, #[case] expected: Option<i32>) {
        let actual = to_sdk_page_size(page_size);
        assert_eq!(actual, expected);
    }
}
