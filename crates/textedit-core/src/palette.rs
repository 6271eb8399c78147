//! Color palettes.
//!
//! Colors are packed `0xAABBGGRR` values, one per [`PaletteIndex`].

use crate::buffer::Glyph;
use std::ops::Index;
use textedit_lang::PaletteIndex;

/// One packed color per palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [u32; PaletteIndex::COUNT],
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

impl Palette {
    /// Build a palette from raw colors in [`PaletteIndex::ALL`] order.
    pub const fn from_colors(colors: [u32; PaletteIndex::COUNT]) -> Self {
        Self { colors }
    }

    /// Light text on a near-black background.
    pub const fn dark() -> Self {
        Self::from_colors([
            0xff7f7f7f, // Default
            0xffd69c56, // Keyword
            0xff00ff00, // Number
            0xff7070e0, // String
            0xff70a0e0, // Char literal
            0xffffffff, // Punctuation
            0xff408080, // Preprocessor
            0xffaaaaaa, // Identifier
            0xff9bc64d, // Known identifier
            0xffc040a0, // Preproc identifier
            0xff206020, // Comment (single line)
            0xff406020, // Comment (multi line)
            0xff101010, // Background
            0xffe0e0e0, // Cursor
            0x80a06020, // Selection
            0x800020ff, // ErrorMarker
            0x40f08000, // Breakpoint
            0xff707000, // Line number
            0x40000000, // Current line fill
            0x40808080, // Current line fill (inactive)
            0x40a0a0a0, // Current line edge
        ])
    }

    /// Dark text on white.
    pub const fn light() -> Self {
        Self::from_colors([
            0xff7f7f7f, 0xffff0c06, 0xff008000, 0xff2020a0, 0xff304070, 0xff000000, 0xff406060,
            0xff404040, 0xff606010, 0xffc040a0, 0xff205020, 0xff405020, 0xffffffff, 0xff000000,
            0x80600000, 0xa00010ff, 0x80f08000, 0xff505000, 0x40000000, 0x40808080, 0x40000000,
        ])
    }

    /// Turbo-style cyan/yellow on blue.
    pub const fn retro_blue() -> Self {
        Self::from_colors([
            0xff00ffff, 0xffffff00, 0xff00ff00, 0xff808000, 0xff808000, 0xffffffff, 0xff008000,
            0xff00ffff, 0xffffffff, 0xffff00ff, 0xff808080, 0xff404040, 0xff800000, 0xff0080ff,
            0x80ffff00, 0xa00000ff, 0x80ff8000, 0xff808000, 0x40000000, 0x40808080, 0x40000000,
        ])
    }

    /// Color of one slot.
    pub fn color(&self, index: PaletteIndex) -> u32 {
        self.colors[index.index()]
    }

    /// Replace the color of one slot.
    pub fn set_color(&mut self, index: PaletteIndex, color: u32) {
        self.colors[index.index()] = color;
    }

    /// Copy of this palette with every alpha channel scaled by `alpha` (0.0..=1.0).
    pub fn with_alpha(&self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let mut colors = self.colors;
        for color in &mut colors {
            let a = ((*color >> 24) as f32 * alpha).round() as u32;
            *color = (*color & 0x00ff_ffff) | (a.min(0xff) << 24);
        }
        Self { colors }
    }

    /// Display color of a glyph.
    ///
    /// Comment flags override the category; glyphs inside a preprocessor directive are blended
    /// half-and-half with the preprocessor color.
    pub fn glyph_color(&self, glyph: &Glyph) -> u32 {
        if glyph.in_comment {
            return self.color(PaletteIndex::Comment);
        }
        if glyph.in_multi_line_comment {
            return self.color(PaletteIndex::MultiLineComment);
        }
        let color = self.color(glyph.category);
        if glyph.in_preprocessor {
            return average(color, self.color(PaletteIndex::Preprocessor));
        }
        color
    }
}

impl Index<PaletteIndex> for Palette {
    type Output = u32;

    fn index(&self, index: PaletteIndex) -> &u32 {
        &self.colors[index.index()]
    }
}

fn average(a: u32, b: u32) -> u32 {
    (0..4u32).fold(0u32, |acc, channel| {
        let shift = channel * 8;
        let mixed = (((a >> shift) & 0xff) + ((b >> shift) & 0xff)) / 2;
        acc | (mixed << shift)
    })
}
