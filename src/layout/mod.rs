//! Page layouts: how a scanned page is split into logical pages.

pub use self::page_layout::{LayoutType, PageLayout, PageLayoutError};

mod page_layout;
