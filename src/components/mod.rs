//! List and form views over the repository and the view coordinator.
//!
//! Both views are wired by passing the shared repository and coordinator to
//! their constructors. They subscribe on construction and unsubscribe on drop.

pub mod form;
pub mod list;

pub use form::ProductFormView;
pub use list::ProductListView;
