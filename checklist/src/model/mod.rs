//! In-memory list model.
//!
//! Items carry no presentation state. What is drawn for them is owned by
//! [`crate::reconcile::Reconciler`].

mod item;
mod list;

pub use item::{Item, ItemId, ParseItemIdError};
pub use list::TodoList;
