//! Padded grid buffers for the time stepper.
//!
//! A [`Grid`] owns a halo-padded buffer and knows which sub-box is the
//! logical interior; a [`GridPair`] owns the two ping-pong buffers and
//! hands out their read/write roles by time parity.

mod grid;
mod pair;

pub use grid::*;
pub use pair::*;
