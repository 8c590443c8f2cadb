//! Page validation for the question listing.

use thiserror::Error;

/// Fixed page size of the question list.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Page validation failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    #[error("requested page is out of range")]
    OutOfRange,
}

/// Validate a 1-indexed page number against the total row count and
/// compute the row offset of that page.
///
/// The last valid page is `ceil(total_rows / page_size)`; with zero rows
/// there is no valid page at all.
pub fn validate_page(requested_page: i64, total_rows: i64, page_size: i64) -> Result<i64, PageError> {
    let last_page = (total_rows + page_size - 1) / page_size;

    if requested_page < 1 || requested_page > last_page {
        return Err(PageError::OutOfRange);
    }

    Ok((requested_page - 1) * page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_of_valid_page() {
        assert_eq!(validate_page(1, 25, 10), Ok(0));
        assert_eq!(validate_page(2, 25, 10), Ok(10));
        assert_eq!(validate_page(3, 25, 10), Ok(20));
    }

    #[test]
    fn page_past_the_end_is_out_of_range() {
        assert_eq!(validate_page(4, 25, 10), Err(PageError::OutOfRange));
        assert_eq!(validate_page(2, 10, 10), Err(PageError::OutOfRange));
    }

    #[test]
    fn page_below_one_is_out_of_range() {
        assert_eq!(validate_page(0, 25, 10), Err(PageError::OutOfRange));
        assert_eq!(validate_page(-3, 25, 10), Err(PageError::OutOfRange));
    }

    #[test]
    fn no_rows_means_no_valid_page() {
        assert_eq!(validate_page(1, 0, 10), Err(PageError::OutOfRange));
        assert_eq!(validate_page(7, 0, 10), Err(PageError::OutOfRange));
    }

    #[test]
    fn exact_multiple_has_no_partial_page() {
        assert_eq!(validate_page(2, 20, 10), Ok(10));
        assert_eq!(validate_page(3, 20, 10), Err(PageError::OutOfRange));
    }

    #[test]
    fn every_in_range_page_yields_matching_offset() {
        let page_size = 10;
        for total in 0..60 {
            let last_page = (total + page_size - 1) / page_size;
            for page in 1..=last_page {
                assert_eq!(validate_page(page, total, page_size), Ok((page - 1) * page_size));
            }
            assert_eq!(
                validate_page(last_page + 1, total, page_size),
                Err(PageError::OutOfRange)
            );
        }
    }
}
