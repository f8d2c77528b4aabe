//! Page-accumulation loops for the two pagination conventions the job APIs
//! use: a reported total page count (HeadHunter) and a boolean continuation
//! flag (SuperJob). The loops are generic over a page-fetching closure so the
//! termination logic stays independent of any HTTP plumbing.

/// One page of a listing that reports the total page count alongside items.
pub struct CountedPage<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
}

/// One page of a listing that reports whether another page follows.
pub struct ContinuedPage<T> {
    pub items: Vec<T>,
    pub more: bool,
}

/// Accumulate every page of a counted listing.
///
/// Pages are requested with zero-based indices, starting at 0 unconditionally.
/// The total is re-read from every response, so a page count that changes
/// mid-crawl is honored.
pub fn fetch_counted<T, E>(
    mut fetch_page: impl FnMut(u32) -> Result<CountedPage<T>, E>,
) -> Result<Vec<T>, E> {
    let mut items = Vec::new();
    let mut page = 0;
    let mut total_pages = 1;

    while page < total_pages {
        let response = fetch_page(page)?;
        items.extend(response.items);
        total_pages = response.total_pages;
        page += 1;
    }

    Ok(items)
}

/// Accumulate pages of a continued listing until the flag goes false.
pub fn fetch_continued<T, E>(
    mut fetch_page: impl FnMut(u32) -> Result<ContinuedPage<T>, E>,
) -> Result<Vec<T>, E> {
    let mut items = Vec::new();
    let mut page = 0;
    let mut more = true;

    while more {
        let response = fetch_page(page)?;
        items.extend(response.items);
        more = response.more;
        page += 1;
    }

    Ok(items)
}
