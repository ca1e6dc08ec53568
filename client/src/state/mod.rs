//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by panel (`whiteboard`, `visualizer`) so components depend
//! on small focused models. Engine state itself lives in the `canvas` crate;
//! these structs only hold what the surrounding chrome renders.

pub mod visualizer;
pub mod whiteboard;
