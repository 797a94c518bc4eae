use super::SpriteBlock;
use crate::ser::{FileBlock, FileWriter};

fn sprite_refs(
    sprites: &[SpriteBlock],
    writer: &mut FileWriter,
) -> Vec<u32> {
    sprites.iter().map(|sprite| sprite.write(writer)).collect()
}

/// A `TSEL` tile selection block.
#[derive(Debug)]
pub struct TselBlock {
    pub tile_width: u16,
    pub z_height: u16,
    pub sprites: Vec<SpriteBlock>,
}

impl TselBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let refs = sprite_refs(&self.sprites, writer);
        let mut block = FileBlock::new("TSEL", 1, 4 + 4 * refs.len());
        block.save_u16(self.tile_width);
        block.save_u16(self.z_height);
        for reference in refs {
            block.save_u32(reference);
        }
        block.check_end();
        writer.add_block(block)
    }
}

/// A `TCOR` tile corner block, one sprite set per view direction.
#[derive(Debug)]
pub struct TcorBlock {
    pub tile_width: u16,
    pub z_height: u16,
    pub north: Vec<SpriteBlock>,
    pub east: Vec<SpriteBlock>,
    pub south: Vec<SpriteBlock>,
    pub west: Vec<SpriteBlock>,
}

impl TcorBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let directions = [&self.north, &self.east, &self.south, &self.west];
        let refs: Vec<Vec<u32>> = directions
            .iter()
            .map(|sprites| sprite_refs(sprites, writer))
            .collect();
        let count: usize = refs.iter().map(Vec::len).sum();
        let mut block = FileBlock::new("TCOR", 1, 4 + 4 * count);
        block.save_u16(self.tile_width);
        block.save_u16(self.z_height);
        for direction in refs {
            for reference in direction {
                block.save_u32(reference);
            }
        }
        block.check_end();
        writer.add_block(block)
    }
}

/// A `SURF` ground surface block.
#[derive(Debug)]
pub struct SurfBlock {
    pub surf_type: u16,
    pub tile_width: u16,
    pub z_height: u16,
    pub sprites: Vec<SpriteBlock>,
}

impl SurfBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let refs = sprite_refs(&self.sprites, writer);
        let mut block = FileBlock::new("SURF", 3, 6 + 4 * refs.len());
        block.save_u16(self.surf_type);
        block.save_u16(self.tile_width);
        block.save_u16(self.z_height);
        for reference in refs {
            block.save_u32(reference);
        }
        block.check_end();
        writer.add_block(block)
    }
}

/// A `FUND` foundation block.
#[derive(Debug)]
pub struct FundBlock {
    pub found_type: u16,
    pub tile_width: u16,
    pub z_height: u16,
    pub sprites: Vec<SpriteBlock>,
}

impl FundBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let refs = sprite_refs(&self.sprites, writer);
        let mut block = FileBlock::new("FUND", 1, 6 + 4 * refs.len());
        block.save_u16(self.found_type);
        block.save_u16(self.tile_width);
        block.save_u16(self.z_height);
        for reference in refs {
            block.save_u32(reference);
        }
        block.check_end();
        writer.add_block(block)
    }
}

/// A `PATH` path sprites block.
#[derive(Debug)]
pub struct PathBlock {
    pub path_type: u16,
    pub tile_width: u16,
    pub z_height: u16,
    pub sprites: Vec<SpriteBlock>,
}

impl PathBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let refs = sprite_refs(&self.sprites, writer);
        let mut block = FileBlock::new("PATH", 1, 6 + 4 * refs.len());
        block.save_u16(self.path_type);
        block.save_u16(self.tile_width);
        block.save_u16(self.z_height);
        for reference in refs {
            block.save_u32(reference);
        }
        block.check_end();
        writer.add_block(block)
    }
}

/// A `PLAT` platform block.
#[derive(Debug)]
pub struct PlatBlock {
    pub tile_width: u16,
    pub z_height: u16,
    pub platform_type: u16,
    pub sprites: Vec<SpriteBlock>,
}

impl PlatBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let refs = sprite_refs(&self.sprites, writer);
        let mut block = FileBlock::new("PLAT", 2, 6 + 4 * refs.len());
        block.save_u16(self.tile_width);
        block.save_u16(self.z_height);
        block.save_u16(self.platform_type);
        for reference in refs {
            block.save_u32(reference);
        }
        block.check_end();
        writer.add_block(block)
    }
}

/// A `SUPP` support block.
#[derive(Debug)]
pub struct SuppBlock {
    pub support_type: u16,
    pub tile_width: u16,
    pub z_height: u16,
    pub sprites: Vec<SpriteBlock>,
}

impl SuppBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let refs = sprite_refs(&self.sprites, writer);
        let mut block = FileBlock::new("SUPP", 1, 6 + 4 * refs.len());
        block.save_u16(self.support_type);
        block.save_u16(self.tile_width);
        block.save_u16(self.z_height);
        for reference in refs {
            block.save_u32(reference);
        }
        block.check_end();
        writer.add_block(block)
    }
}
