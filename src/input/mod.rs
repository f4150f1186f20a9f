//! Input - picking observers feeding the match session
//!
//! Cells and pieces carry `.observe(...)` callbacks for `Pointer<Click>`; they
//! only translate the hit entity into a square message.

pub mod pointer;
