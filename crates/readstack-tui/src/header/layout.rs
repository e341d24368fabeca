//! Layout constants for the header derivation
//!
//! Resolved once per resize; the derivation itself never measures anything.

pub use readstack_core::DepthMode;

/// Base expanded header extent in layout units, before responsive scaling
const BASE_HEADER_EXTENT: f64 = 300.0;

/// Cap on the responsively scaled header extent
const MAX_HEADER_EXTENT: f64 = 400.0;

/// Reference viewport width the base extent is designed against
const REFERENCE_WIDTH: f64 = 375.0;

/// Immutable layout constants the style derivation reads.
///
/// All lengths are in the same abstract layout unit as the scroll offset; the
/// widget layer owns the conversion to terminal rows and columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderLayout {
    /// Expanded header extent (the collapse travel plus the top bar)
    pub header_extent: f64,
    /// Fixed top-bar extent the collapsed header leaves visible
    pub bar_extent: f64,
    /// Viewport width
    pub viewport_width: f64,
    /// Spacing unit for margins
    pub spacing: f64,
    /// Which depth convention the style emits
    pub depth: DepthMode,
    /// Dark color scheme in effect
    pub dark: bool,
}

impl HeaderLayout {
    /// Resolve the layout for a viewport width.
    ///
    /// The header extent scales with the viewport like the rest of the layout
    /// but is capped so wide viewports do not get an absurdly tall header, and
    /// floored at the bar extent so the collapse travel stays non-negative on
    /// very narrow viewports.
    pub fn resolve(viewport_width: f64, bar_extent: f64, spacing: f64, depth: DepthMode, dark: bool) -> Self {
        let header_extent = (BASE_HEADER_EXTENT * viewport_width / REFERENCE_WIDTH)
            .min(MAX_HEADER_EXTENT)
            .max(bar_extent);
        Self {
            header_extent,
            bar_extent,
            viewport_width,
            spacing,
            depth,
            dark,
        }
    }

    /// Scroll travel over which the header fully collapses
    #[inline]
    pub fn collapse_travel(&self) -> f64 {
        self.header_extent - self.bar_extent
    }
}
