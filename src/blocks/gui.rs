//! Blocks describing the skin of GUI widgets.

use super::SpriteBlock;
use crate::ser::{FileBlock, FileWriter};

fn sprite_refs(
    sprites: &[SpriteBlock],
    writer: &mut FileWriter,
) -> Vec<u32> {
    sprites.iter().map(|sprite| sprite.write(writer)).collect()
}

/// A `GBOR` widget border block.
#[derive(Debug)]
pub struct GborBlock {
    pub widget_type: u16,
    pub border_top: u8,
    pub border_left: u8,
    pub border_right: u8,
    pub border_bottom: u8,
    pub min_width: u8,
    pub min_height: u8,
    pub h_stepsize: u8,
    pub v_stepsize: u8,
    /// Nine sprites, row by row from top-left to bottom-right.
    pub sprites: Vec<SpriteBlock>,
}

impl GborBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let refs = sprite_refs(&self.sprites, writer);
        let mut block = FileBlock::new("GBOR", 1, 10 + 4 * refs.len());
        block.save_u16(self.widget_type);
        block.save_u8(self.border_top);
        block.save_u8(self.border_left);
        block.save_u8(self.border_right);
        block.save_u8(self.border_bottom);
        block.save_u8(self.min_width);
        block.save_u8(self.min_height);
        block.save_u8(self.h_stepsize);
        block.save_u8(self.v_stepsize);
        for reference in refs {
            block.save_u32(reference);
        }
        block.check_end();
        writer.add_block(block)
    }
}

/// A `GCHK` checkbox block.
#[derive(Debug)]
pub struct GchkBlock {
    pub widget_type: u16,
    /// Empty, filled, pressed variants, and the shaded pair.
    pub sprites: Vec<SpriteBlock>,
}

impl GchkBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let refs = sprite_refs(&self.sprites, writer);
        let mut block = FileBlock::new("GCHK", 1, 2 + 4 * refs.len());
        block.save_u16(self.widget_type);
        for reference in refs {
            block.save_u32(reference);
        }
        block.check_end();
        writer.add_block(block)
    }
}

/// A `GSLI` slider bar block.
#[derive(Debug)]
pub struct GsliBlock {
    pub min_length: u8,
    pub step_size: u8,
    pub width: u8,
    pub widget_type: u16,
    /// Left, middle, right, and the slider button.
    pub sprites: Vec<SpriteBlock>,
}

impl GsliBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let refs = sprite_refs(&self.sprites, writer);
        let mut block = FileBlock::new("GSLI", 1, 5 + 4 * refs.len());
        block.save_u8(self.min_length);
        block.save_u8(self.step_size);
        block.save_u8(self.width);
        block.save_u16(self.widget_type);
        for reference in refs {
            block.save_u32(reference);
        }
        block.check_end();
        writer.add_block(block)
    }
}

/// A `GSCL` scrollbar block.
#[derive(Debug)]
pub struct GsclBlock {
    pub min_length: u8,
    pub step_back: u8,
    pub min_bar_length: u8,
    pub bar_step: u8,
    pub widget_type: u16,
    pub sprites: Vec<SpriteBlock>,
}

impl GsclBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let refs = sprite_refs(&self.sprites, writer);
        let mut block = FileBlock::new("GSCL", 1, 6 + 4 * refs.len());
        block.save_u8(self.min_length);
        block.save_u8(self.step_back);
        block.save_u8(self.min_bar_length);
        block.save_u8(self.bar_step);
        block.save_u16(self.widget_type);
        for reference in refs {
            block.save_u32(reference);
        }
        block.check_end();
        writer.add_block(block)
    }
}

/// A `BDIR` build direction arrows block.
#[derive(Debug)]
pub struct BdirBlock {
    pub tile_width: u16,
    /// One arrow sprite per edge, `ne se sw nw`.
    pub sprites: Vec<SpriteBlock>,
}

impl BdirBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let refs = sprite_refs(&self.sprites, writer);
        let mut block = FileBlock::new("BDIR", 1, 2 + 4 * refs.len());
        block.save_u16(self.tile_width);
        for reference in refs {
            block.save_u32(reference);
        }
        block.check_end();
        writer.add_block(block)
    }
}

/// A `GSLP` slope and bend selection block.
#[derive(Debug)]
pub struct GslpBlock {
    /// Seven slope sprites followed by seven bend sprites.
    pub sprites: Vec<SpriteBlock>,
}

impl GslpBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let refs = sprite_refs(&self.sprites, writer);
        let mut block = FileBlock::new("GSLP", 4, 4 * refs.len());
        for reference in refs {
            block.save_u32(reference);
        }
        block.check_end();
        writer.add_block(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::testing::{check_header, sprite};

    fn distinct_sprites(count: usize) -> Vec<SpriteBlock> {
        (1..=count).map(|value| sprite(value as u8)).collect()
    }

    fn check_refs(refs: &[u8], count: usize) {
        assert_eq!(refs.len(), 4 * count);
        for (index, reference) in refs.chunks(4).enumerate() {
            assert_eq!(reference, (index as u32 + 1).to_le_bytes());
        }
    }

    #[test]
    fn gbor_payload_packs_the_border_geometry() {
        let block = GborBlock {
            widget_type: 48,
            border_top: 1,
            border_left: 2,
            border_right: 3,
            border_bottom: 4,
            min_width: 5,
            min_height: 6,
            h_stepsize: 7,
            v_stepsize: 8,
            sprites: distinct_sprites(9),
        };
        let mut writer = FileWriter::new();
        assert_eq!(block.write(&mut writer), 10);
        let bytes = writer.blocks()[9].as_bytes();
        check_header(bytes, "GBOR", 1, 46);
        assert_eq!(&bytes[12..22], &[48, 0, 1, 2, 3, 4, 5, 6, 7, 8]);
        check_refs(&bytes[22..], 9);
    }

    #[test]
    fn gchk_payload_holds_the_six_states() {
        let block = GchkBlock {
            widget_type: 96,
            sprites: distinct_sprites(6),
        };
        let mut writer = FileWriter::new();
        assert_eq!(block.write(&mut writer), 7);
        let bytes = writer.blocks()[6].as_bytes();
        check_header(bytes, "GCHK", 1, 26);
        assert_eq!(&bytes[12..14], &[96, 0]);
        check_refs(&bytes[14..], 6);
    }

    #[test]
    fn gsli_payload_puts_the_widget_type_after_the_geometry() {
        let block = GsliBlock {
            min_length: 10,
            step_size: 2,
            width: 4,
            widget_type: 128,
            sprites: distinct_sprites(4),
        };
        let mut writer = FileWriter::new();
        assert_eq!(block.write(&mut writer), 5);
        let bytes = writer.blocks()[4].as_bytes();
        check_header(bytes, "GSLI", 1, 21);
        assert_eq!(&bytes[12..17], &[10, 2, 4, 128, 0]);
        check_refs(&bytes[17..], 4);
    }

    #[test]
    fn gscl_payload_holds_the_thirteen_scrollbar_sprites() {
        let block = GsclBlock {
            min_length: 10,
            step_back: 2,
            min_bar_length: 5,
            bar_step: 3,
            widget_type: 160,
            sprites: distinct_sprites(13),
        };
        let mut writer = FileWriter::new();
        assert_eq!(block.write(&mut writer), 14);
        let bytes = writer.blocks()[13].as_bytes();
        check_header(bytes, "GSCL", 1, 58);
        assert_eq!(&bytes[12..18], &[10, 2, 5, 3, 160, 0]);
        check_refs(&bytes[18..], 13);
    }

    #[test]
    fn gslp_payload_is_fourteen_references() {
        let block = GslpBlock {
            sprites: distinct_sprites(14),
        };
        let mut writer = FileWriter::new();
        assert_eq!(block.write(&mut writer), 15);
        let bytes = writer.blocks()[14].as_bytes();
        check_header(bytes, "GSLP", 4, 56);
        check_refs(&bytes[12..], 14);
    }
}
