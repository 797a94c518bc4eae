use super::{Recolouring, SpriteBlock};
use crate::{
    ser::{FileBlock, FileWriter},
    strings::Strings,
};

/// String names every shop must define.
pub const SHOP_STRING_NAMES: &[&str] = &[
    "NAME_INSTANCE1",
    "NAME_INSTANCE2",
    "NAME_TYPE",
    "DESCRIPTION_TYPE",
    "DESCRIPTION_RECOLOUR1",
    "DESCRIPTION_RECOLOUR2",
    "DESCRIPTION_RECOLOUR3",
    "NAME_ITEM1",
    "NAME_ITEM2",
];

/// A `SHOP` ride block.
#[derive(Debug)]
pub struct ShopBlock {
    pub tile_width: u16,
    pub height: u8,
    pub flags: u8,
    pub ne_view: SpriteBlock,
    pub se_view: SpriteBlock,
    pub sw_view: SpriteBlock,
    pub nw_view: SpriteBlock,
    pub recolours: [Recolouring; 3],
    pub item_cost: [u32; 2],
    pub ownership_cost: u32,
    pub opened_cost: u32,
    pub item_type: [u8; 2],
    pub texts: Strings,
}

impl ShopBlock {
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let views = [
            self.ne_view.write(writer),
            self.se_view.write(writer),
            self.sw_view.write(writer),
            self.nw_view.write(writer),
        ];
        let text = self.texts.write(writer);

        let mut block = FileBlock::new("SHOP", 4, 54);
        block.save_u16(self.tile_width);
        block.save_u8(self.height);
        block.save_u8(self.flags);
        for view in views {
            block.save_u32(view);
        }
        for recolour in &self.recolours {
            block.save_u32(recolour.encode());
        }
        block.save_u32(self.item_cost[0]);
        block.save_u32(self.item_cost[1]);
        block.save_u32(self.ownership_cost);
        block.save_u32(self.opened_cost);
        block.save_u8(self.item_type[0]);
        block.save_u8(self.item_type[1]);
        block.save_u32(text);
        block.check_end();
        writer.add_block(block)
    }
}
