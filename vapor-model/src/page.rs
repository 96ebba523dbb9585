//! Fixed-size pagination over in-memory listings.

use thiserror::Error;

/// Number of items in a full page.
pub const PAGE_SIZE: usize = 10;

/// Returned when a caller asks for page zero; pages are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page numbers start at 1, got {0}")]
pub struct PageError(pub u32);

/// One page of results plus the counts needed to render a pager.
#[derive(Debug, Clone, PartialEq)]
pub struct PageInfo<T> {
    pub current_page: u32,
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> PageInfo<T> {
    /// Convert the page items while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageInfo<U> {
        PageInfo {
            current_page: self.current_page,
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Cut `items` into pages of [`PAGE_SIZE`] and return page `page` (1-based).
///
/// A page past the end comes back empty; the totals always describe the
/// whole input, so a pager can still be rendered.
///
/// ```
/// use vapor_model::page::paginate;
///
/// let letters: Vec<char> = ('a'..='z').collect();
/// let page = paginate(&letters, 3).unwrap();
/// assert_eq!(page.items, vec!['u', 'v', 'w', 'x', 'y', 'z']);
/// assert_eq!(page.total_items, 26);
/// assert_eq!(page.total_pages, 3);
/// ```
pub fn paginate<T: Clone>(items: &[T], page: u32) -> Result<PageInfo<T>, PageError> {
    if page == 0 {
        return Err(PageError(page));
    }
    let chunk = items
        .chunks(PAGE_SIZE)
        .nth(page as usize - 1)
        .unwrap_or_default();
    Ok(PageInfo {
        current_page: page,
        items: chunk.to_vec(),
        total_items: items.len(),
        total_pages: items.len().div_ceil(PAGE_SIZE),
    })
}
