pub mod event;
pub mod geometry;
pub mod logging;

pub use event::{Key, KeyCommand, Modifiers, Motion, MouseButton, MouseEvent, MouseEventKind};
pub use geometry::Rect;
pub use logging::{init_file_logger, LogInitError};
