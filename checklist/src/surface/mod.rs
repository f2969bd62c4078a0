mod dom;
mod memory;

pub use dom::{DomHandle, DomSurface};
pub use memory::{MemoryGroup, MemorySurface, SurfaceOp};
