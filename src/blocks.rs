//! The typed block tree built by the resolver and emitted into RCD files.

mod gui;
mod people;
mod shop;
mod terrain;

pub use gui::{
    BdirBlock, GborBlock, GchkBlock, GsclBlock, GsliBlock, GslpBlock,
};
pub use people::{
    AnimBlock, AnspBlock, FrameData, PersonGraphics, PrsgBlock, Recolouring,
};
pub use shop::{ShopBlock, SHOP_STRING_NAMES};
pub use terrain::{
    FundBlock, PathBlock, PlatBlock, SuppBlock, SurfBlock, TcorBlock,
    TselBlock,
};

use crate::{
    diagnostic::{Error, Result},
    image::{BitMaskData, Image, SpriteImage},
    ser::{FileBlock, FileWriter},
    strings::Strings,
};
use codemap::Span;
use ecow::EcoString;

pub const SURFACE_COUNT: usize = 19;
pub const FOUNDATION_COUNT: usize = 6;
pub const PATH_COUNT: usize = 51;
pub const PLATFORM_COUNT: usize = 14;
pub const SUPPORT_COUNT: usize = 24;

/// Number of colour ranges; also the 'no recolouring' sentinel.
pub const COLOUR_RANGE_COUNT: u32 = 18;

/// Resolved value of a node group.
#[derive(Debug)]
pub enum BlockNode {
    File(FileNode),
    Game(GameBlock),
    Sprite(SpriteBlock),
    Sheet(SheetBlock),
    Recolour(Recolouring),
    PersonGraphics(PersonGraphics),
    FrameData(FrameData),
    Strings(Strings),
    Text(crate::strings::TextNode),
}

impl BlockNode {
    /// Split off the sub-node for a name-table cell. Only sheets support
    /// this; everything else fails.
    pub fn get_sub_node(
        &mut self,
        row: usize,
        col: usize,
        name: &EcoString,
        span: Span,
    ) -> Result<BlockNode> {
        match self {
            Self::Sheet(sheet) => {
                sheet.get_sub_node(row, col, span).map(BlockNode::Sprite)
            }
            _ => Err(Box::new(Error::SubNodeUnsupported {
                span,
                name: name.clone(),
                row,
                col,
            })),
        }
    }
}

/// A game block, one per RCD block tag.
#[derive(Debug)]
pub enum GameBlock {
    TileSelection(TselBlock),
    TileCorners(TcorBlock),
    Surface(SurfBlock),
    Foundation(FundBlock),
    Path(PathBlock),
    Platform(PlatBlock),
    Support(SuppBlock),
    PersonGraphics(PrsgBlock),
    Animation(AnimBlock),
    AnimationSprites(AnspBlock),
    Shop(ShopBlock),
    Border(GborBlock),
    CheckBox(GchkBlock),
    Slider(GsliBlock),
    Scrollbar(GsclBlock),
    BuildArrows(BdirBlock),
    SlopeSelect(GslpBlock),
}

impl GameBlock {
    /// Emit the block (and its children) and return its block number.
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        match self {
            Self::TileSelection(block) => block.write(writer),
            Self::TileCorners(block) => block.write(writer),
            Self::Surface(block) => block.write(writer),
            Self::Foundation(block) => block.write(writer),
            Self::Path(block) => block.write(writer),
            Self::Platform(block) => block.write(writer),
            Self::Support(block) => block.write(writer),
            Self::PersonGraphics(block) => block.write(writer),
            Self::Animation(block) => block.write(writer),
            Self::AnimationSprites(block) => block.write(writer),
            Self::Shop(block) => block.write(writer),
            Self::Border(block) => block.write(writer),
            Self::CheckBox(block) => block.write(writer),
            Self::Slider(block) => block.write(writer),
            Self::Scrollbar(block) => block.write(writer),
            Self::BuildArrows(block) => block.write(writer),
            Self::SlopeSelect(block) => block.write(writer),
        }
    }
}

/// A single sprite, stored as an `8PXL` block.
#[derive(Debug, Default)]
pub struct SpriteBlock {
    pub sprite_image: SpriteImage,
}

impl SpriteBlock {
    /// Emit the sprite and return its block number, or `0` for the empty
    /// sprite.
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let image = &self.sprite_image;
        if image.is_empty() {
            return 0;
        }
        let mut block = FileBlock::new("8PXL", 2, 8 + image.data.len());
        block.save_u16(image.width);
        block.save_u16(image.height);
        block.save_u16(image.xoffset as u16);
        block.save_u16(image.yoffset as u16);
        block.save_bytes(&image.data);
        block.check_end();
        writer.add_block(block)
    }
}

/// A sprite sheet; sub-sprites are cut from it by a name table.
#[derive(Debug)]
pub struct SheetBlock {
    pub span: Span,
    pub file: EcoString,
    pub x_base: i32,
    pub y_base: i32,
    pub x_step: i32,
    pub y_step: i32,
    pub x_offset: i32,
    pub y_offset: i32,
    pub width: i32,
    pub height: i32,
    pub crop: bool,
    pub mask: Option<BitMaskData>,
    image: Option<Image>,
}

impl SheetBlock {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        span: Span,
        file: EcoString,
        x_base: i32,
        y_base: i32,
        x_step: i32,
        y_step: i32,
        x_offset: i32,
        y_offset: i32,
        width: i32,
        height: i32,
        crop: bool,
        mask: Option<BitMaskData>,
    ) -> Self {
        Self {
            span,
            file,
            x_base,
            y_base,
            x_step,
            y_step,
            x_offset,
            y_offset,
            width,
            height,
            crop,
            mask,
            image: None,
        }
    }

    /// The sheet image, loaded on first use.
    fn sheet(&mut self) -> Result<&Image> {
        let image = match self.image.take() {
            Some(image) => image,
            None => Image::load(&self.file, self.mask.as_ref()).map_err(
                |message| {
                    Box::new(Error::CouldNotReadImage {
                        span: self.span,
                        path: self.file.to_string(),
                        message,
                    })
                },
            )?,
        };
        Ok(self.image.insert(image))
    }

    /// Cut out the sprite of the name-table cell at `(row, col)`.
    pub fn get_sub_node(
        &mut self,
        row: usize,
        col: usize,
        span: Span,
    ) -> Result<SpriteBlock> {
        let xpos = self.x_base + self.x_step * col as i32;
        let ypos = self.y_base + self.y_step * row as i32;
        let (x_offset, y_offset) = (self.x_offset, self.y_offset);
        let (width, height, crop) = (self.width, self.height, self.crop);
        let image = self.sheet()?;
        let sprite_image = SpriteImage::copy_sprite(
            image, x_offset, y_offset, xpos, ypos, width, height, crop,
        )
        .map_err(|message| {
            Box::new(Error::SpriteCopy {
                span,
                tag: "sheet".into(),
                message,
            })
        })?;
        Ok(SpriteBlock { sprite_image })
    }
}

/// One RCD output file and the blocks it contains.
#[derive(Debug)]
pub struct FileNode {
    pub file_name: String,
    pub blocks: Vec<GameBlock>,
}

impl FileNode {
    pub fn write(&self) -> Result<()> {
        let mut writer = FileWriter::new();
        for block in &self.blocks {
            block.write(&mut writer);
        }
        writer.write_file(&self.file_name)
    }
}

/// All RCD files defined by one source file.
#[derive(Debug, Default)]
pub struct FileNodeList {
    pub files: Vec<FileNode>,
}

impl FileNodeList {
    pub fn write(&self) -> Result<()> {
        for file in &self.files {
            file.write()?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::SpriteBlock;
    use crate::image::SpriteImage;

    /// A 1x1 sprite whose only pixel holds `value`.
    pub(crate) fn sprite(value: u8) -> SpriteBlock {
        SpriteBlock {
            sprite_image: SpriteImage {
                width: 1,
                height: 1,
                xoffset: 0,
                yoffset: 0,
                data: vec![4, 0, 0, 0, 128, 1, value],
            },
        }
    }

    pub(crate) fn check_header(
        bytes: &[u8],
        tag: &str,
        version: u32,
        length: usize,
    ) {
        assert_eq!(&bytes[..4], tag.as_bytes());
        assert_eq!(&bytes[4..8], &version.to_le_bytes());
        assert_eq!(&bytes[8..12], &(length as u32).to_le_bytes());
        assert_eq!(bytes.len(), 12 + length);
    }
}
