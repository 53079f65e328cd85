pub mod buffer;
pub mod event;
pub mod input;
pub mod label;
pub mod layout;
pub mod render;
pub mod scrollbar;
pub mod terminal;
pub mod text;
pub mod types;
pub mod view;

pub use buffer::{Buffer, Cell};
pub use event::ViewEvent;
pub use input::InputMap;
pub use label::Label;
pub use layout::Rect;
pub use render::{render, render_to_buffer};
pub use scrollbar::Scrollbar;
pub use terminal::Terminal;
pub use types::{Color, Rgb, Style};
pub use view::ScrollView;
