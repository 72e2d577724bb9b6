//! Fixed-width two's-complement arithmetic and 16.16 fixed-point values for the globe renderer.
//!
//! The lookup tables driving the globe were produced by 16-bit code that relied on
//! register wraparound and byte sign-extension. Everything in this crate reproduces
//! those semantics exactly; nothing here saturates or panics on overflow.

mod fixed_point;
mod wrap;

pub use fixed_point::Fixed16_16;
pub use wrap::{
    add16, as_i8, as_i16, as_u16, hi_word, lo_word, neg16, sub16, zero_extend_byte,
};
