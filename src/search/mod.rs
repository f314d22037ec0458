//! Template search - matching, pairing and narrowing
//!
//! Pipeline: template/category change -> [`matcher`] per category ->
//! [`reducer`] across super-groups -> [`SearchSession`] holds the result ->
//! [`narrower`] and the overlay shape each displayed list.

pub mod matcher;
pub mod narrower;
pub mod preview;
pub mod reducer;
mod session;
mod template;

pub use matcher::{fits, match_category, match_group, Alignment};
pub use narrower::{narrow, DisplayList, Overlay};
pub use preview::render_tiles;
pub use reducer::reduce;
pub use session::{SearchSession, SessionState};
pub use template::{Slot, Template, MAX_LENGTH, MIN_LENGTH};
