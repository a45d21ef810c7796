use serde::Serialize;
use std::num::NonZeroUsize;
use std::ops::Range;

/// Upper bound on consecutive numbered buttons around the current page
pub const MAX_PAGE_BUTTONS: usize = 5;

pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Number of records per page. Zero is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(Self)
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_PAGE_SIZE).expect("default page size is non-zero"))
    }
}

pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get())
}

/// `[start, end)` indices of a 1-indexed page. Pages outside
/// `[1, total_pages]` give an empty range; nothing is clamped.
pub fn page_range(count: usize, page_size: PageSize, page: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let size = page_size.get();
    let start = (page - 1).saturating_mul(size);
    if start >= count {
        return 0..0;
    }
    start..(start + size).min(count)
}

pub fn slice_page<T>(items: &[T], page_size: PageSize, page: usize) -> &[T] {
    &items[page_range(items.len(), page_size, page)]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageItem {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// Previous/next control. `target` is where activating it would go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageControl {
    pub target: usize,
    pub disabled: bool,
}

/// Button layout for one page of a paginated list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLayout {
    pub current: usize,
    pub total_pages: usize,
    pub window_start: usize,
    pub window_end: usize,
    pub previous: PageControl,
    pub next: PageControl,
    /// Numbered buttons and ellipses in display order, between previous and next
    pub items: Vec<PageItem>,
}

impl PageLayout {
    /// Page numbers of every numbered button, including first/last jumps
    pub fn page_numbers(&self) -> Vec<usize> {
        self.items
            .iter()
            .filter_map(|item| match item {
                PageItem::Page { number, .. } => Some(*number),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    pub fn has_first_jump(&self) -> bool {
        self.window_start > 1
    }

    pub fn has_last_jump(&self) -> bool {
        self.window_end < self.total_pages
    }
}

/// Derive the windowed button layout, or `None` when there is at most one page.
pub fn build_page_layout(current: usize, total_pages: usize) -> Option<PageLayout> {
    if total_pages <= 1 {
        return None;
    }

    let half = MAX_PAGE_BUTTONS / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = (start + MAX_PAGE_BUTTONS - 1).min(total_pages);
    if end < start || end - start + 1 < MAX_PAGE_BUTTONS {
        start = end.saturating_sub(MAX_PAGE_BUTTONS - 1).max(1);
    }

    let mut items = Vec::with_capacity(MAX_PAGE_BUTTONS + 4);

    if start > 1 {
        items.push(PageItem::Page {
            number: 1,
            active: current == 1,
        });
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    for number in start..=end {
        items.push(PageItem::Page {
            number,
            active: number == current,
        });
    }

    if end < total_pages {
        if end + 1 < total_pages {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page {
            number: total_pages,
            active: current == total_pages,
        });
    }

    let previous = if current <= 1 {
        PageControl {
            target: 1,
            disabled: true,
        }
    } else {
        PageControl {
            target: current - 1,
            disabled: false,
        }
    };
    let next = if current >= total_pages {
        PageControl {
            target: total_pages,
            disabled: true,
        }
    } else {
        PageControl {
            target: current + 1,
            disabled: false,
        }
    };

    Some(PageLayout {
        current,
        total_pages,
        window_start: start,
        window_end: end,
        previous,
        next,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn test_page_size_rejects_zero() {
        assert!(PageSize::new(0).is_none());
        assert_eq!(PageSize::default().get(), 15);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, size(15)), 0);
        assert_eq!(total_pages(15, size(15)), 1);
        assert_eq!(total_pages(16, size(15)), 2);
        assert_eq!(total_pages(45, size(15)), 3);
    }

    #[test]
    fn test_page_range_last_page_is_partial() {
        assert_eq!(page_range(40, size(15), 3), 30..40);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        assert!(page_range(45, size(15), 0).is_empty());
        assert!(page_range(45, size(15), 4).is_empty());
        assert!(page_range(0, size(15), 1).is_empty());
    }

    #[test]
    fn test_single_page_has_no_controls() {
        assert!(build_page_layout(1, 0).is_none());
        assert!(build_page_layout(1, 1).is_none());
    }

    #[test]
    fn test_three_pages_on_first_page() {
        let layout = build_page_layout(1, 3).unwrap();
        assert_eq!(layout.page_numbers(), vec![1, 2, 3]);
        assert!(layout.previous.disabled);
        assert!(!layout.next.disabled);
        assert_eq!(layout.next.target, 2);
        assert!(!layout.items.contains(&PageItem::Ellipsis));
    }

    #[test]
    fn test_middle_of_many_pages_has_both_jumps() {
        let layout = build_page_layout(10, 20).unwrap();
        assert_eq!(
            layout.items,
            vec![
                PageItem::Page { number: 1, active: false },
                PageItem::Ellipsis,
                PageItem::Page { number: 8, active: false },
                PageItem::Page { number: 9, active: false },
                PageItem::Page { number: 10, active: true },
                PageItem::Page { number: 11, active: false },
                PageItem::Page { number: 12, active: false },
                PageItem::Ellipsis,
                PageItem::Page { number: 20, active: false },
            ]
        );
    }

    #[test]
    fn test_adjacent_jump_has_no_ellipsis() {
        // window 2..=6 on 7 pages: first jump to 1 and last jump to 7 without gaps
        let layout = build_page_layout(4, 7).unwrap();
        assert_eq!(layout.page_numbers(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(!layout.items.contains(&PageItem::Ellipsis));
    }

    #[test]
    fn test_window_shifts_left_near_the_end() {
        let layout = build_page_layout(20, 20).unwrap();
        assert_eq!((layout.window_start, layout.window_end), (16, 20));
        assert!(layout.next.disabled);
        assert_eq!(layout.previous.target, 19);
    }

    #[test]
    fn test_layout_json_shape() {
        let layout = build_page_layout(2, 2).unwrap();
        insta::assert_json_snapshot!(layout, @r###"
        {
          "current": 2,
          "total_pages": 2,
          "window_start": 1,
          "window_end": 2,
          "previous": {
            "target": 1,
            "disabled": false
          },
          "next": {
            "target": 2,
            "disabled": true
          },
          "items": [
            {
              "kind": "page",
              "number": 1,
              "active": false
            },
            {
              "kind": "page",
              "number": 2,
              "active": true
            }
          ]
        }
        "###);
    }

    proptest! {
        #[test]
        fn prop_total_pages_is_ceiling(count in 0usize..10_000, page_size in 1usize..200) {
            let expected = (count + page_size - 1) / page_size;
            prop_assert_eq!(total_pages(count, size(page_size)), expected);
            prop_assert_eq!(
                build_page_layout(1, expected).is_none(),
                expected <= 1
            );
        }

        #[test]
        fn prop_rows_per_page(count in 1usize..2_000, page_size in 1usize..100, seed in 0usize..1_000) {
            let pages = total_pages(count, size(page_size));
            let page = seed % pages + 1;
            let rows = page_range(count, size(page_size), page).len();
            prop_assert_eq!(rows, page_size.min(count - (page - 1) * page_size));
            prop_assert!(rows > 0);
        }

        #[test]
        fn prop_window_contains_current(total in 2usize..500, seed in 0usize..1_000) {
            let current = seed % total + 1;
            let layout = build_page_layout(current, total).unwrap();
            let window = layout.window_start..=layout.window_end;

            prop_assert!(window.contains(&current));
            prop_assert!(layout.window_end - layout.window_start + 1 <= MAX_PAGE_BUTTONS);

            let numbers = layout.page_numbers();
            prop_assert_eq!(numbers.first() == Some(&1), true);
            prop_assert_eq!(numbers.last() == Some(&total), true);
            prop_assert_eq!(layout.has_first_jump(), layout.window_start != 1);
            prop_assert_eq!(layout.has_last_jump(), layout.window_end != total);

            let leading_ellipsis = layout.items.get(1) == Some(&PageItem::Ellipsis);
            prop_assert_eq!(leading_ellipsis, layout.window_start > 2);
            let trailing_ellipsis =
                layout.items.len() >= 2 && layout.items[layout.items.len() - 2] == PageItem::Ellipsis;
            prop_assert_eq!(trailing_ellipsis, layout.window_end + 1 < total);
        }
    }
}
