//! Transit line types.

use std::fmt;

/// Stable identifier of a line within its [`Network`](super::Network).
///
/// Identifiers are handed out in insertion order and are only meaningful
/// for the network that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub(crate) u32);

impl LineId {
    /// Returns the arena index of this line.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A display colour stored as packed ARGB.
///
/// The router never looks at colours; they are carried for whoever
/// draws the network.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Color;
///
/// let red = Color::from_argb(0xFFFF0000);
/// assert_eq!(red.to_string(), "#FFFF0000");
/// assert_eq!(Color::from_signed(-65536), red);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Opaque black, the colour of a line nobody has painted yet.
    pub const BLACK: Color = Color(0xFF00_0000);

    /// Create a colour from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Color(argb)
    }

    /// Create a colour from a signed ARGB value as stored in network files.
    pub const fn from_signed(argb: i32) -> Self {
        Color(argb as u32)
    }

    /// Returns the packed `0xAARRGGBB` value.
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Returns the signed ARGB value as stored in network files.
    pub const fn to_signed(self) -> i32 {
        self.0 as i32
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// A named transit line, e.g. "Line 1".
///
/// The name is the line's identity within a network and cannot change
/// once the line has been added. Only the colour is mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: String,
    color: Color,
}

impl Line {
    pub(crate) fn new(name: String, color: Color) -> Self {
        Self { name, color }
    }

    /// Returns the line name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display colour.
    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
