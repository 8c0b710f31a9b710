//! "Show more" pagination over a derived product list.

use crate::product::Product;

/// Items added to the visible window by each "show more" step, and the
/// default size of the first window.
pub const PAGE_INCREMENT: usize = 6;

/// How many leading items of the filtered view are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemsCursor {
    items_to_show: usize,
}

impl Default for ItemsCursor {
    fn default() -> Self {
        Self::new(PAGE_INCREMENT)
    }
}

impl ItemsCursor {
    #[must_use]
    pub fn new(items_to_show: usize) -> Self {
        Self { items_to_show }
    }

    #[must_use]
    pub fn items_to_show(&self) -> usize {
        self.items_to_show
    }

    pub fn set_items_to_show(&mut self, items_to_show: usize) {
        self.items_to_show = items_to_show;
    }

    /// `true` while the window hides part of a list of `len` items.
    #[must_use]
    pub fn has_more(&self, len: usize) -> bool {
        self.items_to_show < len
    }

    /// Widens the window by [`PAGE_INCREMENT`], clamped at `len`.
    ///
    /// Returns `false` (and leaves the cursor alone) when nothing is hidden.
    pub fn show_more(&mut self, len: usize) -> bool {
        if !self.has_more(len) {
            return false;
        }
        self.items_to_show = self.items_to_show.saturating_add(PAGE_INCREMENT).min(len);
        true
    }
}

/// The leading `cursor.items_to_show()` items of `list`.
#[must_use]
pub fn paginate(list: &[Product], cursor: ItemsCursor) -> &[Product] {
    &list[..cursor.items_to_show.min(list.len())]
}
