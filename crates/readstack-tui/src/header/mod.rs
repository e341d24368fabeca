//! Collapsing header animation for the readstack TUI
//!
//! Everything the header shows is a pure function of one scroll offset plus a
//! one-shot entrance progress; there is no per-property animation state.
//!
//! - `interp` - range-to-range linear mapping with clamp/extend behavior
//! - `easing` - easing curves for the time-based pieces
//! - `layout` - per-resize layout constants
//! - `style` - the (offset, entrance, layout) -> HeaderStyle derivation
//! - `mount` - the one-shot entrance transition state machine

pub mod easing;
pub mod interp;
pub mod layout;
pub mod mount;
pub mod style;

pub use easing::EasingTypeExt;
pub use interp::{interpolate, Extrapolate};
pub use layout::HeaderLayout;
pub use mount::EntranceTransition;
pub use style::{derive_style, HeaderDepth, HeaderStyle, SearchBarStyle};
