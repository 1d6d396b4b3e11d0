use std::fmt::Display;

/// An 8-bit RGB triple. Two colors are equal iff all three components match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RGBColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RGBColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        RGBColor { red, green, blue }
    }

    pub fn components(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

#[cfg(test)]
impl RGBColor {
    pub const BLACK: RGBColor = RGBColor::new(0, 0, 0);
    pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);
    pub const RED: RGBColor = RGBColor::new(255, 0, 0);
    pub const GREEN: RGBColor = RGBColor::new(0, 255, 0);
}

impl From<[u8; 3]> for RGBColor {
    fn from(value: [u8; 3]) -> Self {
        RGBColor::new(value[0], value[1], value[2])
    }
}

impl Display for RGBColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}
