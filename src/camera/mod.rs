//! Live frame types.
//!
//! Device acquisition lives outside this crate; callers hand frames in as
//! [`Frame`] values (for example decoded from a raw `rgb24` stream, see
//! [`crate::stream`]).

mod frame_utils;
mod types;

pub use frame_utils::mirror_horizontal;
pub use types::{Frame, FrameFormat};
