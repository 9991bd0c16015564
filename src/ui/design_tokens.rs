// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the toast banner and the demo screen.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid, plus the banner label inset)
- **Sizing**: Component sizes
- **Typography**: Font size scale

## Examples

```
use simple_toast::ui::design_tokens::{palette, spacing};

let banner = palette::RED_500;
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Toast defaults
    pub const RED_500: Color = Color::from_rgb(1.0, 0.0, 0.0);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units

    /// Horizontal inset of the toast label from the banner edges.
    pub const TOAST_LABEL_INSET: f32 = 25.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Widest the demo form grows.
    pub const FORM_MAX_WIDTH: f32 = 420.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - Screen heading
    pub const TITLE_MD: f32 = 20.0;

    /// Toast label (rendered in medium weight).
    pub const TOAST_LABEL: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Secondary, supporting text
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::LG > spacing::MD);

    // Typography validation
    assert!(typography::TITLE_MD > typography::TOAST_LABEL);
    assert!(typography::TOAST_LABEL > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
