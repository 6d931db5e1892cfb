//! HTML and CSS generation.
//!
//! Pure string builders shared by the DOM surface; nothing here touches the
//! browser, so the output is unit-tested natively.

pub mod markup;
pub mod style;
