// SPDX-License-Identifier: MPL-2.0
//! Shared sizes and colors for the bell, the dropdown, notification rows
//! and toasts.
//!
//! Theme-dependent colors (text, background, primary) come from the active
//! [`iced::Theme`] palette; only colors that must stay fixed across themes
//! live here, such as the badge fill and the toast severity accents.
//!
//! ```
//! use iced_bell::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let hover = Color {
//!     a: opacity::OVERLAY_SUBTLE,
//!     ..palette::GRAY_400
//! };
//! assert!(hover.a < 1.0);
//! assert!(spacing::MD > spacing::XS);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    /// Hover fill for flat buttons on toasts.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Severity accents; ERROR_500 doubles as the unread badge fill.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

/// Alpha values applied on top of theme or palette colors.
pub mod opacity {
    /// Unread row highlight and hovered buttons.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Pressed buttons.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Muted secondary text.
    pub const OVERLAY_STRONG: f32 = 0.7;
}

/// 4px steps.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Bell, notification-kind and toast glyphs.
    pub const GLYPH: f32 = 24.0;
    pub const UNREAD_DOT: f32 = 8.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// Notification page heading.
    pub const TITLE_LG: f32 = 30.0;
    /// App name in the header, sign-in heading.
    pub const TITLE_MD: f32 = 20.0;
    /// Dropdown heading.
    pub const TITLE_SM: f32 = 18.0;
    /// Delivered toast title.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Secondary actions and messages.
    pub const BODY_SM: f32 = 13.0;
    /// Badge count and relative time.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Dropdown outline and separators.
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast severity outline.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Badge pill and unread dot.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const TINT: Color = Color {
        a: 0.35,
        ..Color::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Toast cards.
    pub const MD: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// The dropdown panel floats above the page.
    pub const LG: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::LG > spacing::MD);

    // The dot must fit inside a caption line next to the title.
    assert!(sizing::UNREAD_DOT < typography::CAPTION);
    assert!(sizing::TOAST_WIDTH > sizing::GLYPH * 4.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_STRONG < 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadows_deepen_from_toast_to_dropdown() {
        assert!(shadow::LG.blur_radius > shadow::MD.blur_radius);
        assert!(shadow::LG.offset.y > shadow::MD.offset.y);
        assert_eq!(shadow::NONE.color.a, 0.0);
    }

    #[test]
    fn badge_text_contrasts_with_fill() {
        let fill = palette::ERROR_500;
        let text = palette::WHITE;
        let luminance = |c: Color| 0.2126 * c.r + 0.7152 * c.g + 0.0722 * c.b;
        assert!(luminance(text) - luminance(fill) > 0.5);
    }
}
