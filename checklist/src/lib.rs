//! Checklist widget core: an ordered list of checkable items and the
//! reconciler that keeps a rendering surface in step with it.

mod checklist;
pub mod controls;
pub mod model;
pub mod reconcile;
pub mod surface;

pub use checklist::Checklist;
pub use controls::{Notification, ValueSource};
pub use model::{Item, ItemId, ParseItemIdError, TodoList};
pub use reconcile::{LabelClass, ReconcileStats, Reconciler, Surface};
pub use surface::{DomHandle, DomSurface, MemoryGroup, MemorySurface, SurfaceOp};
