pub mod html;
pub mod number;
pub mod text;

pub use html::escape;
pub use number::format_number;
pub use text::{display_width, pad, truncate};
