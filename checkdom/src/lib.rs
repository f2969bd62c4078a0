pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod text_input;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, find_element_mut, Content, Element, Kind};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::hit_test;
pub use layout::{layout, LayoutResult, Rect};
pub use terminal::Terminal;
pub use text_input::{InputResult, TextInput};
pub use types::TextStyle;
