//! Color tags attached to messages and entities
//!
//! Plain RGB tuples; the renderer decides how to draw them.

/// RGB color
pub type Rgb = (u8, u8, u8);

pub const WHITE: Rgb = (255, 255, 255);
pub const RED: Rgb = (255, 0, 0);
pub const ORANGE: Rgb = (255, 127, 0);
pub const YELLOW: Rgb = (255, 255, 0);
pub const GREEN: Rgb = (0, 255, 0);
pub const BLUE: Rgb = (0, 0, 255);
pub const VIOLET: Rgb = (127, 0, 255);
pub const SKY: Rgb = (0, 191, 255);

pub const LIGHT_GREEN: Rgb = (114, 255, 114);
pub const LIGHT_CYAN: Rgb = (114, 255, 255);
pub const LIGHT_CRIMSON: Rgb = (255, 114, 159);
pub const LIGHT_PURPLE: Rgb = (223, 114, 255);

pub const DESATURATED_GREEN: Rgb = (63, 127, 63);
pub const DARKER_GREEN: Rgb = (0, 127, 0);
pub const DARKER_RED: Rgb = (127, 0, 0);
pub const DARKER_ORANGE: Rgb = (127, 63, 0);
