// Builtin themes
// Color token tables installed into every registry at creation

use super::{Rgb, Theme};

/// Default dark theme.
pub fn dark() -> Theme {
    Theme {
        main_background: Rgb::from_hex(0x14_1420),
        section_background: Rgb::from_hex(0x1B_1B2A),
        control_background: Rgb::from_hex(0x24_2438),
        accent: Rgb::from_hex(0x4F_9CF0),
        text_primary: Rgb::from_hex(0xEA_EAF2),
        text_secondary: Rgb::from_hex(0x9A_9AB0),
        text_disabled: Rgb::from_hex(0x55_5568),
        border: Rgb::from_hex(0x38_3850),
        window_opacity: 1.0,
        acrylic_opacity: 0.72,
        control_opacity: 0.9,
    }
}

/// Light theme.
pub fn light() -> Theme {
    Theme {
        main_background: Rgb::from_hex(0xF2_F2F7),
        section_background: Rgb::from_hex(0xE6_E6EE),
        control_background: Rgb::from_hex(0xD8_D8E4),
        accent: Rgb::from_hex(0x2A_6BD4),
        text_primary: Rgb::from_hex(0x1C_1C28),
        text_secondary: Rgb::from_hex(0x52_5264),
        text_disabled: Rgb::from_hex(0x9E_9EB0),
        border: Rgb::from_hex(0xB8_B8C8),
        window_opacity: 1.0,
        acrylic_opacity: 0.85,
        control_opacity: 1.0,
    }
}

/// Near-black high-contrast theme.
pub fn midnight() -> Theme {
    Theme {
        main_background: Rgb::from_hex(0x0A_0A10),
        section_background: Rgb::from_hex(0x10_1018),
        control_background: Rgb::from_hex(0x18_1824),
        accent: Rgb::from_hex(0x8A_6CF0),
        text_primary: Rgb::from_hex(0xF0_F0F8),
        text_secondary: Rgb::from_hex(0x88_88A0),
        text_disabled: Rgb::from_hex(0x44_4458),
        border: Rgb::from_hex(0x2A_2A3C),
        window_opacity: 1.0,
        acrylic_opacity: 0.6,
        control_opacity: 0.85,
    }
}
