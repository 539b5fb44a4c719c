//! Demo Components
//!
//! One leaf per transition primitive.

mod fade;
mod moving_box;
mod moving_box_css;
mod popup_message;
mod switch_examples;
mod todo_list_view;
mod warp;

pub use fade::Fade;
pub use moving_box::MovingBox;
pub use moving_box_css::MovingBoxCss;
pub use popup_message::PopupMessage;
pub use switch_examples::{SwitchExample, SwitchModeExample};
pub use todo_list_view::TodoListView;
pub use warp::Warp;
