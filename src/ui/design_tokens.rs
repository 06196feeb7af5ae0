// SPDX-License-Identifier: MPL-2.0
//! Design tokens centralized following the W3C Design Tokens standard.
//!
//! - **Palette**: Base colors, including per-mood accents
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii
//! - **Shadow**: Shadow definitions
//!
//! Tokens are designed to be consistent; maintain the ratios when
//! modifying (e.g., MD = XS * 2).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (violet scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.84, 0.78, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.65, 0.55, 0.95);
    pub const PRIMARY_500: Color = Color::from_rgb(0.55, 0.45, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.45, 0.35, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);

    // Mood accents (calendar cells, journal list)
    pub const MOOD_JOY: Color = Color::from_rgb(0.98, 0.8, 0.25);
    pub const MOOD_SADNESS: Color = Color::from_rgb(0.35, 0.55, 0.85);
    pub const MOOD_ANGER: Color = Color::from_rgb(0.88, 0.3, 0.25);
    pub const MOOD_FEAR: Color = Color::from_rgb(0.55, 0.4, 0.7);
    pub const MOOD_SURPRISE: Color = Color::from_rgb(0.3, 0.75, 0.7);
    pub const MOOD_NEUTRAL: Color = Color::from_rgb(0.6, 0.6, 0.6);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Resting height of the peeked bottom sheet.
    pub const SHEET_PEEK_HEIGHT: f32 = 40.0;

    /// Hit-test band at the top of the sheet that qualifies a drag and
    /// receives handle taps.
    pub const SHEET_HANDLE_HIT_HEIGHT: f32 = 60.0;

    /// Width of the pill-shaped handle indicator.
    pub const SHEET_HANDLE_WIDTH: f32 = 48.0;

    /// Height of the pill-shaped handle indicator.
    pub const SHEET_HANDLE_HEIGHT: f32 = 5.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const TAB_BAR_HEIGHT: f32 = 56.0;

    // Calendar
    pub const CALENDAR_CELL: f32 = 44.0;

    // Cards
    pub const ACHIEVEMENT_CARD_WIDTH: f32 = 150.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Main page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Month header, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers, card titles
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Top corners of the bottom sheet.
    pub const SHEET: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Upward shadow cast by the bottom sheet over the page.
    pub const SHEET: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: -4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::SHEET_HANDLE_HIT_HEIGHT > sizing::SHEET_PEEK_HEIGHT);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn handle_band_covers_peek_strip() {
        // A peeked sheet must be fully inside the drag hit band, so a
        // drag can always start from the peek strip.
        assert!(sizing::SHEET_HANDLE_HIT_HEIGHT >= sizing::SHEET_PEEK_HEIGHT);
    }
}
