//! The table: a data source plus the viewport and selection over it.
//!
//! [`TableView`] is pure state. A renderer reads [`TableView::column_layout`],
//! [`TableView::visible_rows`] and [`TableView::is_selected`] each frame;
//! input goes through [`TableView::process_key`] and
//! [`TableView::process_mouse`], and anything the host should react to is
//! queued as a [`TableEvent`].

mod checkbox;
mod events;
mod state;

pub use events::{EventResult, TableEvent};
pub use state::TableView;
