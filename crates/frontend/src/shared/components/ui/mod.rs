pub mod input;
pub mod input_kind;
pub mod input_state;

pub use input::Input;
pub use input_kind::{DateMode, InputKind};
pub use input_state::{to_display_string, InputState};
