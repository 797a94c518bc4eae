//! Builders for the GUI widget skin blocks.

use super::{expand_no_expression, symbols, Resolver, Values};
use crate::{
    ast::NodeGroup,
    blocks::{
        BdirBlock, GborBlock, GchkBlock, GsclBlock, GsliBlock, GslpBlock,
        SpriteBlock,
    },
    diagnostic::Result,
};

fn sprite_list(
    vals: &mut Values,
    names: &[&str],
    node: &str,
) -> Result<Vec<SpriteBlock>> {
    let mut sprites = Vec::with_capacity(names.len());
    for name in names {
        sprites.push(vals.find_value(name)?.get_sprite(node)?);
    }
    Ok(sprites)
}

pub(super) fn convert_gbor_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<GborBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(resolver, group.values, true, false, symbols::WIDGET_TYPES)?;

    let block = GborBlock {
        widget_type: vals.find_value("widget_type")?.get_number("GBOR")?
            as u16,
        border_top: vals.find_value("border_top")?.get_number("GBOR")? as u8,
        border_left: vals.find_value("border_left")?.get_number("GBOR")?
            as u8,
        border_right: vals.find_value("border_right")?.get_number("GBOR")?
            as u8,
        border_bottom: vals.find_value("border_bottom")?.get_number("GBOR")?
            as u8,
        min_width: vals.find_value("min_width")?.get_number("GBOR")? as u8,
        min_height: vals.find_value("min_height")?.get_number("GBOR")? as u8,
        h_stepsize: vals.find_value("h_stepsize")?.get_number("GBOR")? as u8,
        v_stepsize: vals.find_value("v_stepsize")?.get_number("GBOR")? as u8,
        sprites: sprite_list(&mut vals, &symbols::GBOR_SPRITES, "GBOR")?,
    };

    vals.verify_usage(resolver);
    Ok(block)
}

pub(super) fn convert_gchk_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<GchkBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(resolver, group.values, true, false, symbols::WIDGET_TYPES)?;

    let block = GchkBlock {
        widget_type: vals.find_value("widget_type")?.get_number("GCHK")?
            as u16,
        sprites: sprite_list(&mut vals, &symbols::GCHK_SPRITES, "GCHK")?,
    };

    vals.verify_usage(resolver);
    Ok(block)
}

pub(super) fn convert_gsli_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<GsliBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(resolver, group.values, true, false, symbols::WIDGET_TYPES)?;

    let block = GsliBlock {
        min_length: vals.find_value("min_length")?.get_number("GSLI")? as u8,
        step_size: vals.find_value("step_size")?.get_number("GSLI")? as u8,
        width: vals.find_value("width")?.get_number("GSLI")? as u8,
        widget_type: vals.find_value("widget_type")?.get_number("GSLI")?
            as u16,
        sprites: sprite_list(&mut vals, &symbols::GSLI_SPRITES, "GSLI")?,
    };

    vals.verify_usage(resolver);
    Ok(block)
}

pub(super) fn convert_gscl_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<GsclBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(resolver, group.values, true, false, symbols::WIDGET_TYPES)?;

    let block = GsclBlock {
        min_length: vals.find_value("min_length")?.get_number("GSCL")? as u8,
        step_back: vals.find_value("step_back")?.get_number("GSCL")? as u8,
        min_bar_length: vals
            .find_value("min_bar_length")?
            .get_number("GSCL")? as u8,
        bar_step: vals.find_value("bar_step")?.get_number("GSCL")? as u8,
        widget_type: vals.find_value("widget_type")?.get_number("GSCL")?
            as u16,
        sprites: sprite_list(&mut vals, &symbols::GSCL_SPRITES, "GSCL")?,
    };

    vals.verify_usage(resolver);
    Ok(block)
}

pub(super) fn convert_bdir_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<BdirBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(resolver, group.values, true, false, &[])?;

    let block = BdirBlock {
        tile_width: vals.find_value("tile_width")?.get_number("BDIR")?
            as u16,
        sprites: sprite_list(&mut vals, &symbols::BDIR_SPRITES, "BDIR")?,
    };

    vals.verify_usage(resolver);
    Ok(block)
}

pub(super) fn convert_gslp_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<GslpBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(resolver, group.values, true, false, &[])?;

    let block = GslpBlock {
        sprites: sprite_list(&mut vals, &symbols::GSLP_SPRITES, "GSLP")?,
    };

    vals.verify_usage(resolver);
    Ok(block)
}
