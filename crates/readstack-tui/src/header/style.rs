//! The scroll-to-style derivation
//!
//! One offset drives many independently banded mappings instead of a shared
//! timeline; each property finishes its transition over its own scroll range,
//! which is what produces the sticky collapse with lagging fades.

use readstack_core::DepthMode;

use super::interp::{interpolate, Extrapolate};
use super::layout::HeaderLayout;

/// Width of the band over which the search bar snaps into its docked shape
const SEARCH_BAND: f64 = 30.0;

/// Depth cue once the header has collapsed; exactly one convention is emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderDepth {
    /// Shadow opacity in [0, 0.75]
    ShadowOpacity(f64),
    /// Elevation in [0, 10]
    Elevation(f64),
}

/// Search bar geometry over the docking band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchBarStyle {
    /// -25 (tucked under the header) to 6 (docked)
    pub margin_bottom: f64,
    /// 50 (prominent) to 38 (docked)
    pub height: f64,
    /// viewport - 2*spacing to viewport - spacing
    pub width: f64,
    /// 1 to 0; the outline disappears when docked
    pub border_width: f64,
}

/// Everything the header widget needs to draw one frame.
///
/// Derived, never stored; each field is a deterministic function of the
/// scroll offset, the entrance progress, and the layout constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    /// Whole-screen opacity, driven by the entrance transition
    pub screen_opacity: f64,
    /// Header extent; grows up to double on pull-down, holds at base otherwise
    pub header_height: f64,
    /// Vertical translation; the header rises until only the bar remains
    pub header_shift: f64,
    /// Logo fade over the collapse travel
    pub logo_opacity: f64,
    /// Logo drift during overscroll
    pub logo_shift: f64,
    /// Welcome text fade; intentionally unclamped, may leave [0, 1]
    pub welcome_opacity: f64,
    /// Search bar geometry
    pub search: SearchBarStyle,
    /// Depth cue for the active platform convention
    pub depth: HeaderDepth,
}

/// Derive the header style for one offset sample.
///
/// Total over all real inputs; out-of-range offsets only ever pin clamped
/// properties to their band ends.
pub fn derive_style(offset: f64, entrance: f64, layout: &HeaderLayout) -> HeaderStyle {
    let h = layout.header_extent;
    let travel = layout.collapse_travel();
    let w = layout.viewport_width;
    let m = layout.spacing;

    // Collapse band [0, travel] and overscroll band [-h, 0]
    let collapse = (0.0, travel);
    let overscroll = (-h, 0.0);
    // Docking band right after the collapse completes
    let band = (travel, travel + SEARCH_BAND);

    let depth = match layout.depth {
        DepthMode::Shadow => HeaderDepth::ShadowOpacity(interpolate(
            offset,
            band,
            (0.0, 0.75),
            Extrapolate::Clamp,
        )),
        DepthMode::Elevation => {
            HeaderDepth::Elevation(interpolate(offset, band, (0.0, 10.0), Extrapolate::Clamp))
        }
    };

    HeaderStyle {
        screen_opacity: entrance,
        header_height: interpolate(offset, overscroll, (h * 2.0, h), Extrapolate::Clamp),
        header_shift: interpolate(offset, collapse, (0.0, -travel), Extrapolate::Clamp),
        logo_opacity: interpolate(offset, collapse, (1.0, 0.0), Extrapolate::Clamp),
        logo_shift: interpolate(offset, overscroll, (-h / 2.0, 0.0), Extrapolate::Clamp),
        // Deliberately Extend: the one opacity allowed to leave [0, 1]
        welcome_opacity: interpolate(offset, collapse, (1.0, 0.0), Extrapolate::Extend),
        search: SearchBarStyle {
            margin_bottom: interpolate(offset, band, (-25.0, 6.0), Extrapolate::Clamp),
            height: interpolate(offset, band, (50.0, 38.0), Extrapolate::Clamp),
            width: interpolate(offset, band, (w - m * 2.0, w - m), Extrapolate::Clamp),
            border_width: interpolate(offset, band, (1.0, 0.0), Extrapolate::Clamp),
        },
        depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn layout() -> HeaderLayout {
        HeaderLayout {
            header_extent: 300.0,
            bar_extent: 80.0,
            viewport_width: 375.0,
            spacing: 20.0,
            depth: DepthMode::Shadow,
            dark: true,
        }
    }

    #[test]
    fn test_overscroll_doubles_header() {
        let l = layout();
        for s in [-300.0, -450.0, -1000.0] {
            let style = derive_style(s, 1.0, &l);
            assert!((style.header_height - 600.0).abs() < EPS, "at offset {}", s);
        }
    }

    #[test]
    fn test_header_holds_base_height_past_zero() {
        let l = layout();
        for s in [0.0, 10.0, 220.0, 5000.0] {
            let style = derive_style(s, 1.0, &l);
            assert!((style.header_height - 300.0).abs() < EPS, "at offset {}", s);
        }
    }

    #[test]
    fn test_rest_position() {
        let l = layout();
        let style = derive_style(0.0, 1.0, &l);

        assert!((style.logo_opacity - 1.0).abs() < EPS);
        assert!((style.header_shift - 0.0).abs() < EPS);
        assert!((style.logo_shift - 0.0).abs() < EPS);
        assert!((style.search.width - (375.0 - 40.0)).abs() < EPS);
        assert!((style.search.margin_bottom - (-25.0)).abs() < EPS);
        assert!((style.search.height - 50.0).abs() < EPS);
        assert!((style.search.border_width - 1.0).abs() < EPS);
    }

    #[test]
    fn test_header_shift_stops_at_bar() {
        let l = layout();
        // travel = 220; past it the shift pins so exactly bar_extent stays visible
        let style = derive_style(220.0, 1.0, &l);
        assert!((style.header_shift - (-220.0)).abs() < EPS);
        let past = derive_style(1000.0, 1.0, &l);
        assert!((past.header_shift - (-220.0)).abs() < EPS);
        assert!((past.header_height + past.header_shift - l.bar_extent).abs() < EPS);
    }

    #[test]
    fn test_search_bar_docked_past_band() {
        let l = layout();
        for s in [250.0, 300.0, 10_000.0] {
            let style = derive_style(s, 1.0, &l);
            assert!((style.search.width - (375.0 - 20.0)).abs() < EPS, "at {}", s);
            assert!((style.search.margin_bottom - 6.0).abs() < EPS, "at {}", s);
            assert!((style.search.height - 38.0).abs() < EPS, "at {}", s);
            assert!((style.search.border_width - 0.0).abs() < EPS, "at {}", s);
        }
    }

    #[test]
    fn test_search_band_lockstep_midpoint() {
        let l = layout();
        // Halfway through [220, 250] every banded property is halfway too
        let style = derive_style(235.0, 1.0, &l);
        assert!((style.search.margin_bottom - (-9.5)).abs() < EPS);
        assert!((style.search.height - 44.0).abs() < EPS);
        assert!((style.search.width - (375.0 - 30.0)).abs() < EPS);
        assert!((style.search.border_width - 0.5).abs() < EPS);
    }

    #[test]
    fn test_monotonic_over_bands() {
        let l = layout();
        let mut prev: Option<HeaderStyle> = None;
        // Sweep across overscroll, collapse, and docking bands
        let mut s = -350.0;
        while s <= 300.0 {
            let style = derive_style(s, 1.0, &l);
            if let Some(p) = prev {
                assert!(style.header_shift <= p.header_shift + EPS);
                assert!(style.logo_opacity <= p.logo_opacity + EPS);
                assert!(style.header_height <= p.header_height + EPS);
                assert!(style.search.height <= p.search.height + EPS);
                assert!(style.search.margin_bottom >= p.search.margin_bottom - EPS);
                // No jumps: consecutive samples stay close
                assert!((style.header_shift - p.header_shift).abs() < 1.0);
                assert!((style.logo_opacity - p.logo_opacity).abs() < 0.01);
            }
            prev = Some(style);
            s += 0.5;
        }
    }

    #[test]
    fn test_welcome_opacity_unclamped() {
        let l = layout();
        let below = derive_style(-50.0, 1.0, &l);
        assert!(below.welcome_opacity > 1.0);
        let above = derive_style(400.0, 1.0, &l);
        assert!(above.welcome_opacity < 0.0);
        // while its clamped sibling pins
        assert!((below.logo_opacity - 1.0).abs() < EPS);
        assert!((above.logo_opacity - 0.0).abs() < EPS);
    }

    #[test]
    fn test_screen_opacity_tracks_entrance() {
        let l = layout();
        assert!((derive_style(0.0, 0.0, &l).screen_opacity - 0.0).abs() < EPS);
        assert!((derive_style(0.0, 0.35, &l).screen_opacity - 0.35).abs() < EPS);
        assert!((derive_style(0.0, 1.0, &l).screen_opacity - 1.0).abs() < EPS);
    }

    #[test]
    fn test_shadow_convention() {
        let l = layout();
        let rest = derive_style(0.0, 1.0, &l);
        assert_eq!(rest.depth, HeaderDepth::ShadowOpacity(0.0));
        let collapsed = derive_style(250.0, 1.0, &l);
        match collapsed.depth {
            HeaderDepth::ShadowOpacity(v) => assert!((v - 0.75).abs() < EPS),
            HeaderDepth::Elevation(_) => panic!("wrong depth convention"),
        }
    }

    #[test]
    fn test_elevation_convention() {
        let l = HeaderLayout {
            depth: DepthMode::Elevation,
            ..layout()
        };
        let collapsed = derive_style(250.0, 1.0, &l);
        match collapsed.depth {
            HeaderDepth::Elevation(v) => assert!((v - 10.0).abs() < EPS),
            HeaderDepth::ShadowOpacity(_) => panic!("wrong depth convention"),
        }
        // Depth and shadow ramp over the same band
        let mid = derive_style(235.0, 1.0, &l);
        match mid.depth {
            HeaderDepth::Elevation(v) => assert!((v - 5.0).abs() < EPS),
            HeaderDepth::ShadowOpacity(_) => panic!("wrong depth convention"),
        }
    }

    #[test]
    fn test_degenerate_layout_no_fault() {
        // header_extent == bar_extent collapses the travel to a point
        let l = HeaderLayout {
            header_extent: 80.0,
            bar_extent: 80.0,
            ..layout()
        };
        let style = derive_style(0.0, 1.0, &l);
        assert!(style.header_shift.is_finite());
        assert!(style.logo_opacity.is_finite());
        assert!(style.welcome_opacity.is_finite());
        // At and past the collapsed band the banded properties pin to their ends
        assert!((style.logo_opacity - 0.0).abs() < EPS);
        assert!((style.header_shift - 0.0).abs() < EPS);
        let past = derive_style(100.0, 1.0, &l);
        assert!((past.search.height - 38.0).abs() < EPS);
        assert!((past.search.border_width - 0.0).abs() < EPS);
    }

    #[test]
    fn test_logo_drift_during_overscroll() {
        let l = layout();
        let style = derive_style(-300.0, 1.0, &l);
        assert!((style.logo_shift - (-150.0)).abs() < EPS);
        let deeper = derive_style(-600.0, 1.0, &l);
        assert!((deeper.logo_shift - (-150.0)).abs() < EPS);
    }
}
