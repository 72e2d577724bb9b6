//! Globe rasterization.
//!
//! Each frame is produced in three steps:
//!
//! 1. [`build_rotation_table`] derives 99 rotation entries from the seed table and
//!    the rotation angle.
//! 2. [`build_tilt_table`] derives 196 tagged words from the tilt.
//! 3. [`draw_globe`] walks the outline rings and writes mirrored pixel pairs into
//!    a 320×200 [`Framebuffer`], coloring each pixel through the color map.
//!
//! [`render_globe`] and [`GlobeRenderer`] run all three. Any table value outside
//! its legal range aborts the frame with an [`InvariantViolation`] instead of
//! reading or writing out of bounds.

mod framebuffer;
mod invariant;
mod rasterizer;
mod renderer;
mod rotation;
mod tilt;

pub use framebuffer::{FRAME_HEIGHT, FRAME_LEN, FRAME_WIDTH, Framebuffer, frame_offset};
pub use invariant::{InvariantViolation, Quantity};
pub use rasterizer::{CENTER_COLUMN, Hemisphere, draw_globe, pixel_color};
pub use renderer::{GlobeRenderer, render_globe};
pub use rotation::{ROTATION_SPAN, RotationTable, build_rotation_table};
pub use tilt::{MAX_TILT, TILT_TABLE_LEN, TiltTable, build_tilt_table, clamp_tilt};
