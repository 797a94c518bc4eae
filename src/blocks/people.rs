use super::{SpriteBlock, COLOUR_RANGE_COUNT};
use crate::ser::{FileBlock, FileWriter};

/// A remapping of one colour range to a set of allowed replacement ranges.
#[derive(Debug, Clone, Copy)]
pub struct Recolouring {
    pub orig: u32,
    pub replace: u32,
}

impl Default for Recolouring {
    fn default() -> Self {
        Self {
            orig: COLOUR_RANGE_COUNT,
            replace: 0,
        }
    }
}

impl Recolouring {
    pub fn is_unset(&self) -> bool {
        self.orig == COLOUR_RANGE_COUNT
    }

    pub fn encode(&self) -> u32 {
        (self.orig << 24) | (self.replace & 0x00FF_FFFF)
    }
}

/// Graphics description of one person type.
#[derive(Debug, Default)]
pub struct PersonGraphics {
    pub person_type: u8,
    pub recolours: [Recolouring; 3],
}

impl PersonGraphics {
    /// Store a recolour in the first free slot; `false` when all three
    /// slots are taken.
    pub fn add_recolour(&mut self, recolour: Recolouring) -> bool {
        for slot in &mut self.recolours {
            if slot.is_unset() {
                *slot = recolour;
                return true;
            }
        }
        false
    }
}

/// A `PRSG` person graphics block.
#[derive(Debug, Default)]
pub struct PrsgBlock {
    pub person_graphics: Vec<PersonGraphics>,
}

impl PrsgBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let count = self.person_graphics.len();
        let mut block = FileBlock::new("PRSG", 1, 1 + 13 * count);
        block.save_u8(count as u8);
        for graphics in &self.person_graphics {
            block.save_u8(graphics.person_type);
            for recolour in &graphics.recolours {
                block.save_u32(recolour.encode());
            }
        }
        block.check_end();
        writer.add_block(block)
    }
}

/// One animation frame.
#[derive(Debug)]
pub struct FrameData {
    pub duration: u16,
    pub change_x: i16,
    pub change_y: i16,
}

/// An `ANIM` animation timing block.
#[derive(Debug)]
pub struct AnimBlock {
    pub person_type: u8,
    pub anim_type: u16,
    pub frames: Vec<FrameData>,
}

impl AnimBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let mut block =
            FileBlock::new("ANIM", 2, 5 + 6 * self.frames.len());
        block.save_u8(self.person_type);
        block.save_u16(self.anim_type);
        block.save_u16(self.frames.len() as u16);
        for frame in &self.frames {
            block.save_u16(frame.duration);
            block.save_i16(frame.change_x);
            block.save_i16(frame.change_y);
        }
        block.check_end();
        writer.add_block(block)
    }
}

/// An `ANSP` animation sprites block.
#[derive(Debug)]
pub struct AnspBlock {
    pub tile_width: u16,
    pub person_type: u8,
    pub anim_type: u16,
    pub frames: Vec<SpriteBlock>,
}

impl AnspBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let refs: Vec<u32> = self
            .frames
            .iter()
            .map(|sprite| sprite.write(writer))
            .collect();
        let mut block = FileBlock::new("ANSP", 1, 7 + 4 * refs.len());
        block.save_u16(self.tile_width);
        block.save_u8(self.person_type);
        block.save_u16(self.anim_type);
        block.save_u16(refs.len() as u16);
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

    #[test]
    fn unset_recolourings_encode_the_sentinel() {
        let recolour = Recolouring::default();
        assert!(recolour.is_unset());
        assert_eq!(recolour.encode(), COLOUR_RANGE_COUNT << 24);
    }

    #[test]
    fn recolourings_pack_orig_and_replacement_mask() {
        let recolour = Recolouring {
            orig: 3,
            replace: 0x0102_0304,
        };
        assert_eq!(recolour.encode(), 0x0302_0304);
    }

    #[test]
    fn person_graphics_hold_at_most_three_recolourings() {
        let mut graphics = PersonGraphics::default();
        let recolour = Recolouring {
            orig: 1,
            replace: 2,
        };
        assert!(graphics.add_recolour(recolour));
        assert!(graphics.add_recolour(recolour));
        assert!(graphics.add_recolour(recolour));
        assert!(!graphics.add_recolour(recolour));
    }

    #[test]
    fn prsg_payload_holds_one_record_per_person() {
        let mut graphics = PersonGraphics {
            person_type: 8,
            ..Default::default()
        };
        graphics.add_recolour(Recolouring {
            orig: 1,
            replace: 6,
        });
        let block = PrsgBlock {
            person_graphics: vec![graphics],
        };
        let mut writer = FileWriter::new();
        assert_eq!(block.write(&mut writer), 1);
        let bytes = writer.blocks()[0].as_bytes();
        check_header(bytes, "PRSG", 1, 14);
        // Count, person type, one recolouring, two unset slots.
        assert_eq!(
            &bytes[12..],
            &[1, 8, 6, 0, 0, 1, 0, 0, 0, 18, 0, 0, 0, 18],
        );
    }

    #[test]
    fn anim_payload_packs_the_frames() {
        let block = AnimBlock {
            person_type: 8,
            anim_type: 2,
            frames: vec![
                FrameData {
                    duration: 300,
                    change_x: -16,
                    change_y: 2,
                },
                FrameData {
                    duration: 40,
                    change_x: 1,
                    change_y: -1,
                },
            ],
        };
        let mut writer = FileWriter::new();
        assert_eq!(block.write(&mut writer), 1);
        let bytes = writer.blocks()[0].as_bytes();
        check_header(bytes, "ANIM", 2, 17);
        assert_eq!(&bytes[12..17], &[8, 2, 0, 2, 0]);
        assert_eq!(&bytes[17..23], &[44, 1, 0xF0, 0xFF, 2, 0]);
        assert_eq!(&bytes[23..29], &[40, 0, 1, 0, 0xFF, 0xFF]);
    }

    #[test]
    fn ansp_payload_references_empty_frames_as_zero() {
        let block = AnspBlock {
            tile_width: 64,
            person_type: 8,
            anim_type: 2,
            frames: vec![sprite(1), SpriteBlock::default(), sprite(1)],
        };
        let mut writer = FileWriter::new();
        // One shared sprite block, then the ANSP block itself.
        assert_eq!(block.write(&mut writer), 2);
        let bytes = writer.blocks()[1].as_bytes();
        check_header(bytes, "ANSP", 1, 19);
        assert_eq!(&bytes[12..19], &[64, 0, 8, 2, 0, 3, 0]);
        assert_eq!(&bytes[19..23], &1u32.to_le_bytes());
        assert_eq!(&bytes[23..27], &0u32.to_le_bytes());
        assert_eq!(&bytes[27..31], &1u32.to_le_bytes());
    }
}
