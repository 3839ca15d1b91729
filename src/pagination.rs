use serde::Serialize;

/// Default number of items per page when the caller does not specify one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// One page of a listing together with the metadata clients need to page
/// through the rest. Page numbers are zero-based.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: usize,
    pub total_pages: usize,
    pub number: usize,
    pub size: usize,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page: usize, size: usize, total_elements: usize) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };
        let number_of_elements = content.len();

        Self {
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number: page,
            size,
            number_of_elements,
            first: page == 0,
            last: page.saturating_add(1) >= total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}
