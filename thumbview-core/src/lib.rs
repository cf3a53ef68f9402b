//! Reachability-guided disassembler for the 16-bit Thumb instruction
//! set (ARMv4T/ARMv5T), as found in Game Boy Advance ROM images.
//!
//! Given a raw binary [`Image`] and a function entry address, [`walk`]
//! follows intra-procedural control flow until every reachable
//! instruction is classified, and [`render_listing`] emits the
//! assembly with synthetic labels at branch targets.

pub mod bits;
pub mod decoder;
pub mod format;
pub mod image;
pub mod opcode;
pub mod printer;
pub mod test_data;
pub mod walker;

pub use decoder::{decode, is_return};
pub use image::Image;
pub use opcode::{EncodingClass, Opcode};
pub use printer::render_listing;
pub use walker::{walk, FlowGraph, Node};

// Include tests
#[cfg(test)]
#[path = "disassembler_tests.rs"]
mod tests;
