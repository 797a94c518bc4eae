//! Checking and simplifying the parsed tree into typed blocks.

mod gui;
mod people;
mod shop;
mod symbols;
mod terrain;
mod values;

pub use values::{ValueInformation, Values};

use crate::{
    ast::{Expression, Group, NamedValue, NodeGroup},
    blocks::{
        BlockNode, FileNode, FileNodeList, GameBlock, SheetBlock, SpriteBlock,
    },
    diagnostic::{Error, Result, Warning},
    image::{self, BitMaskData, Image, SpriteImage},
};
use codemap::CodeMap;
use ecow::EcoString;

/// Resolves the AST into the typed block tree, emitting warnings along the
/// way.
pub struct Resolver<'a> {
    code_map: &'a CodeMap,
}

impl<'a> Resolver<'a> {
    pub fn new(code_map: &'a CodeMap) -> Self {
        Self { code_map }
    }

    /// Check and convert the root of the source into per-file block trees.
    pub fn check_tree(&self, root: Vec<NamedValue>) -> Result<FileNodeList> {
        let mut files = Vec::new();
        for value in root {
            if let Some(name) = &value.name {
                Warning::NameIgnored { span: name.span() }
                    .emit(self.code_map);
            }
            match value.group {
                Group::Node(node) => {
                    let span = node.span;
                    match self.convert_node_group(node)? {
                        BlockNode::File(file) => files.push(file),
                        _ => {
                            return Err(Box::new(Error::NotAFileNode {
                                span,
                            }))
                        }
                    }
                }
                Group::Expression(expr) => {
                    return Err(Box::new(Error::NotANodeGroup {
                        span: expr.span(),
                    }))
                }
            }
        }
        Ok(FileNodeList { files })
    }

    fn convert_node_group(&self, group: NodeGroup) -> Result<BlockNode> {
        use GameBlock::*;
        let tag = group.tag.clone();
        Ok(match tag.as_str() {
            "file" => BlockNode::File(self.convert_file_node(group)?),
            "sheet" => BlockNode::Sheet(self.convert_sheet_node(group)?),
            "sprite" => BlockNode::Sprite(self.convert_sprite_node(group)?),
            "recolour" => BlockNode::Recolour(
                people::convert_recolour_node(self, group)?,
            ),
            "person_graphics" => BlockNode::PersonGraphics(
                people::convert_person_graphics_node(self, group)?,
            ),
            "frame_data" => BlockNode::FrameData(
                people::convert_frame_data_node(self, group)?,
            ),
            "strings" => {
                BlockNode::Strings(shop::convert_strings_node(self, group)?)
            }
            "string" => {
                BlockNode::Text(shop::convert_string_node(self, group)?)
            }
            "TSEL" => BlockNode::Game(TileSelection(
                terrain::convert_tsel_node(self, group)?,
            )),
            "TCOR" => BlockNode::Game(TileCorners(
                terrain::convert_tcor_node(self, group)?,
            )),
            "SURF" => BlockNode::Game(Surface(terrain::convert_surf_node(
                self, group,
            )?)),
            "FUND" => BlockNode::Game(Foundation(
                terrain::convert_fund_node(self, group)?,
            )),
            "PATH" => BlockNode::Game(Path(terrain::convert_path_node(
                self, group,
            )?)),
            "PLAT" => BlockNode::Game(Platform(terrain::convert_plat_node(
                self, group,
            )?)),
            "SUPP" => BlockNode::Game(Support(terrain::convert_supp_node(
                self, group,
            )?)),
            "PRSG" => BlockNode::Game(PersonGraphics(
                people::convert_prsg_node(self, group)?,
            )),
            "ANIM" => BlockNode::Game(Animation(people::convert_anim_node(
                self, group,
            )?)),
            "ANSP" => BlockNode::Game(AnimationSprites(
                people::convert_ansp_node(self, group)?,
            )),
            "SHOP" => BlockNode::Game(Shop(shop::convert_shop_node(
                self, group,
            )?)),
            "GBOR" => BlockNode::Game(Border(gui::convert_gbor_node(
                self, group,
            )?)),
            "GCHK" => BlockNode::Game(CheckBox(gui::convert_gchk_node(
                self, group,
            )?)),
            "GSLI" => BlockNode::Game(Slider(gui::convert_gsli_node(
                self, group,
            )?)),
            "GSCL" => BlockNode::Game(Scrollbar(gui::convert_gscl_node(
                self, group,
            )?)),
            "BDIR" => BlockNode::Game(BuildArrows(gui::convert_bdir_node(
                self, group,
            )?)),
            "GSLP" => BlockNode::Game(SlopeSelect(gui::convert_gslp_node(
                self, group,
            )?)),
            _ => {
                return Err(Box::new(Error::UnknownNode {
                    span: group.span,
                    tag: group.tag,
                }))
            }
        })
    }

    /// Convert a `file` node: one string argument and a body of game
    /// blocks.
    fn convert_file_node(&self, group: NodeGroup) -> Result<FileNode> {
        if group.exprs.len() != 1 {
            return Err(Box::new(Error::NodeArgCount {
                span: group.span,
                tag: group.tag,
                expected: 1,
                got: group.exprs.len(),
            }));
        }
        let file_name = string_argument(&group, 0)?;

        let mut blocks = Vec::new();
        for value in group.values {
            if let Some(name) = &value.name {
                Warning::NameIgnored { span: name.span() }
                    .emit(self.code_map);
            }
            match value.group {
                Group::Node(child) => {
                    let span = child.span;
                    match self.convert_node_group(child)? {
                        BlockNode::Game(block) => blocks.push(block),
                        _ => {
                            return Err(Box::new(Error::NotAGameBlock {
                                span,
                            }))
                        }
                    }
                }
                Group::Expression(expr) => {
                    return Err(Box::new(Error::NotANodeGroup {
                        span: expr.span(),
                    }))
                }
            }
        }
        Ok(FileNode {
            file_name: file_name.to_string(),
            blocks,
        })
    }

    fn convert_sprite_node(&self, group: NodeGroup) -> Result<SpriteBlock> {
        expand_no_expression(&group)?;
        let span = group.span;
        let mut vals = Values::new(group.tag.clone(), span);
        vals.prepare(self, group.values, true, false, &[])?;

        let file = vals.find_value("file")?.get_string("sprite")?;
        let x_base = vals.find_value("x_base")?.get_number("sprite")? as i32;
        let y_base = vals.find_value("y_base")?.get_number("sprite")? as i32;
        let width = vals.find_value("width")?.get_number("sprite")? as i32;
        let height = vals.find_value("height")?.get_number("sprite")? as i32;
        let x_offset = optional_number(&mut vals, "x_offset", "sprite", 0)?;
        let y_offset = optional_number(&mut vals, "y_offset", "sprite", 0)?;
        let crop = optional_number(&mut vals, "crop", "sprite", 1)? != 0;
        let mask = mask_fields(&mut vals, "sprite")?;
        vals.verify_usage(self);

        let image =
            Image::load(&file, mask.as_ref()).map_err(|message| {
                Box::new(Error::CouldNotReadImage {
                    span,
                    path: file.to_string(),
                    message,
                })
            })?;
        let sprite_image = SpriteImage::copy_sprite(
            &image,
            x_offset as i32,
            y_offset as i32,
            x_base,
            y_base,
            width,
            height,
            crop,
        )
        .map_err(|message| {
            Box::new(Error::SpriteCopy {
                span,
                tag: "sprite".into(),
                message,
            })
        })?;
        Ok(SpriteBlock { sprite_image })
    }

    fn convert_sheet_node(&self, group: NodeGroup) -> Result<SheetBlock> {
        expand_no_expression(&group)?;
        let span = group.span;
        let mut vals = Values::new(group.tag.clone(), span);
        vals.prepare(self, group.values, true, false, &[])?;

        let file = vals.find_value("file")?.get_string("sheet")?;
        let x_base = vals.find_value("x_base")?.get_number("sheet")? as i32;
        let y_base = vals.find_value("y_base")?.get_number("sheet")? as i32;
        let x_step = vals.find_value("x_step")?.get_number("sheet")? as i32;
        let y_step = vals.find_value("y_step")?.get_number("sheet")? as i32;
        let x_offset =
            vals.find_value("x_offset")?.get_number("sheet")? as i32;
        let y_offset =
            vals.find_value("y_offset")?.get_number("sheet")? as i32;
        let width = vals.find_value("width")?.get_number("sheet")? as i32;
        let height = vals.find_value("height")?.get_number("sheet")? as i32;
        let crop = optional_number(&mut vals, "crop", "sheet", 1)? != 0;
        let mask = mask_fields(&mut vals, "sheet")?;
        vals.verify_usage(self);

        Ok(SheetBlock::new(
            span, file, x_base, y_base, x_step, y_step, x_offset, y_offset,
            width, height, crop, mask,
        ))
    }
}

/// Check that a node has no positional arguments.
pub(crate) fn expand_no_expression(group: &NodeGroup) -> Result<()> {
    if group.exprs.is_empty() {
        return Ok(());
    }
    Err(Box::new(Error::NodeArgCount {
        span: group.span,
        tag: group.tag.clone(),
        expected: 0,
        got: group.exprs.len(),
    }))
}

/// Extract a string from positional argument `index`.
fn string_argument(group: &NodeGroup, index: usize) -> Result<EcoString> {
    let expr = &group.exprs[index];
    if let Expression::Str(text, _) = expr {
        return Ok(text.clone());
    }
    match expr.evaluate(&[])? {
        Expression::Str(text, _) => Ok(text),
        _ => Err(Box::new(Error::NodeArgNotString {
            span: expr.span(),
            tag: group.tag.clone(),
            index,
        })),
    }
}

/// Get the value of an optional numeric field.
pub(crate) fn optional_number(
    vals: &mut Values,
    field: &str,
    node: &str,
    default: i64,
) -> Result<i64> {
    match vals.has_value(field) {
        Some(value) => value.get_number(node),
        None => Ok(default),
    }
}

/// Collect the optional mask overlay fields of a sprite or sheet node.
fn mask_fields(
    vals: &mut Values,
    node: &str,
) -> Result<Option<BitMaskData>> {
    let Some(value) = vals.has_value("mask") else {
        return Ok(None);
    };
    let span = value.span;
    let name = value.get_string(node)?;
    if !image::mask_exists(&name) {
        return Err(Box::new(Error::UnknownBitMask {
            span,
            name: name.to_string(),
        }));
    }
    let x_pos = optional_number(vals, "mask_xpos", node, 0)? as i32;
    let y_pos = optional_number(vals, "mask_ypos", node, 0)? as i32;
    Ok(Some(BitMaskData {
        name: name.to_string(),
        x_pos,
        y_pos,
    }))
}
