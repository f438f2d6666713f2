// crates/edw_shared/src/lib.rs
//! Plain data types shared between the window layer and its users.

pub mod geometry;
pub mod input_types;

pub use geometry::{Position, Size};
pub use input_types::{Action, JoystickId};
