//! Client-side pagination helpers for order tables

use serde::Serialize;

/// Window size before the page list collapses to an ellipsized form
const MAX_PAGES_TO_SHOW: u32 = 5;

/// One entry in a rendered page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Number of pages needed for `item_count` items, `per_page` per page.
/// Zero items (or a zero page size) yield zero pages.
pub fn total_pages(item_count: usize, per_page: usize) -> u32 {
    if per_page == 0 {
        return 0;
    }
    item_count.div_ceil(per_page) as u32
}

/// The 1-based `page` of `items`; out-of-range pages yield an empty slice.
pub fn page_slice<T>(items: &[T], page: u32, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page as usize - 1) * per_page;
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Page numbers to display for `current` of `total`, with ellipses.
///
/// Up to five pages are shown in full. Beyond that, the strip keeps the
/// current page's neighborhood plus the first and last page: near the left
/// edge `1 2 3 4 … N`, near the right edge `1 … N-3 N-2 N-1 N`, and in the
/// middle `1 … c-1 c c+1 … N`.
pub fn page_numbers(current: u32, total: u32) -> Vec<PageItem> {
    let mut pages = Vec::new();

    if total <= MAX_PAGES_TO_SHOW {
        for page in 1..=total {
            pages.push(PageItem::Page(page));
        }
        return pages;
    }

    if current <= 3 {
        for page in 1..=4 {
            pages.push(PageItem::Page(page));
        }
        pages.push(PageItem::Ellipsis);
        pages.push(PageItem::Page(total));
    } else if current >= total - 2 {
        pages.push(PageItem::Page(1));
        pages.push(PageItem::Ellipsis);
        for page in (total - 3)..=total {
            pages.push(PageItem::Page(page));
        }
    } else {
        pages.push(PageItem::Page(1));
        pages.push(PageItem::Ellipsis);
        for page in (current - 1)..=(current + 1) {
            pages.push(PageItem::Page(page));
        }
        pages.push(PageItem::Ellipsis);
        pages.push(PageItem::Page(total));
    }

    pages
}
