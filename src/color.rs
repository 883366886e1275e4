//! An enum built without `enum`: a struct whose only instances are associated
//! constants. The private field keeps callers from minting new colors.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    tag: u32,
}

impl Color {
    pub const RED: Color = Color { tag: 0x7ef2_0235 };
    pub const BLUE: Color = Color { tag: 0x4f3f_5b24 };
    pub const GREEN: Color = Color { tag: 0x27d6_c5e0 };

    /// Object-style name, e.g. `Color@7ef20235`.
    pub fn enum_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color@{:08x}", self.tag)
    }
}

pub fn render_colors() -> Vec<String> {
    let statics = [Color::RED, Color::GREEN, Color::BLUE];
    let array = [Color::GREEN, Color::BLUE, Color::RED];
    let list = vec![Color::BLUE, Color::RED, Color::GREEN];

    let mut lines = Vec::with_capacity(statics.len() + array.len() + list.len());
    lines.extend(statics.iter().map(|c| format!("\nDisplayed static enum object: {c}")));
    lines.extend(array.iter().map(|c| format!("\nDisplayed Object via Array: {c}")));
    lines.extend(list.iter().map(|c| format!("\nDisplayed Object via List: {c}")));
    lines
}
