//! Builders for person graphics, animations, and recolouring nodes.

use super::{expand_no_expression, symbols, Resolver, Values};
use crate::{
    ast::NodeGroup,
    blocks::{
        AnimBlock, AnspBlock, BlockNode, FrameData, PersonGraphics,
        PrsgBlock, Recolouring,
    },
    diagnostic::{Error, Result},
};

pub(super) fn convert_recolour_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<Recolouring> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(
        resolver,
        group.values,
        true,
        false,
        symbols::RECOLOUR_SYMBOLS,
    )?;

    let orig = vals.find_value("original")?.get_number("recolour")? as u32;
    let replace = vals.find_value("replace")?.get_number("recolour")? as u32;

    vals.verify_usage(resolver);
    Ok(Recolouring { orig, replace })
}

pub(super) fn convert_person_graphics_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<PersonGraphics> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(
        resolver,
        group.values,
        true,
        true,
        symbols::PERSON_GRAPHICS_SYMBOLS,
    )?;

    let mut graphics = PersonGraphics {
        person_type: vals
            .find_value("person_type")?
            .get_number("person_graphics")? as u8,
        ..Default::default()
    };

    for value in &mut vals.unnamed {
        if value.used {
            continue;
        }
        match value.take_node() {
            Some(BlockNode::Recolour(recolour)) => {
                if !graphics.add_recolour(recolour) {
                    return Err(Box::new(Error::TooManyChildNodes {
                        span: value.span,
                        tag: "person_graphics".into(),
                        limit: 3,
                    }));
                }
                value.used = true;
            }
            _ => {
                return Err(Box::new(Error::WrongChildNode {
                    span: value.span,
                    tag: "person_graphics".into(),
                    expected: "recolour",
                }))
            }
        }
    }

    vals.verify_usage(resolver);
    Ok(graphics)
}

pub(super) fn convert_frame_data_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<FrameData> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(resolver, group.values, true, false, &[])?;

    let frame = FrameData {
        duration: vals.find_value("duration")?.get_number("frame_data")?
            as u16,
        change_x: vals.find_value("change_x")?.get_number("frame_data")?
            as i16,
        change_y: vals.find_value("change_y")?.get_number("frame_data")?
            as i16,
    };

    vals.verify_usage(resolver);
    Ok(frame)
}

pub(super) fn convert_prsg_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<PrsgBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(resolver, group.values, false, true, &[])?;

    let mut block = PrsgBlock::default();
    for value in &mut vals.unnamed {
        if value.used {
            continue;
        }
        match value.take_node() {
            Some(BlockNode::PersonGraphics(graphics)) => {
                if block.person_graphics.len() >= 255 {
                    return Err(Box::new(Error::TooManyChildNodes {
                        span: value.span,
                        tag: "PRSG".into(),
                        limit: 255,
                    }));
                }
                block.person_graphics.push(graphics);
                value.used = true;
            }
            _ => {
                return Err(Box::new(Error::WrongChildNode {
                    span: value.span,
                    tag: "PRSG".into(),
                    expected: "person_graphics",
                }))
            }
        }
    }

    vals.verify_usage(resolver);
    Ok(block)
}

pub(super) fn convert_anim_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<AnimBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(
        resolver,
        group.values,
        true,
        true,
        symbols::ANIMATION_SYMBOLS,
    )?;

    let person_type =
        vals.find_value("person_type")?.get_number("ANIM")? as u8;
    let anim_type = vals.find_value("anim_type")?.get_number("ANIM")? as u16;

    let mut frames = Vec::new();
    for value in &mut vals.unnamed {
        if value.used {
            continue;
        }
        match value.take_node() {
            Some(BlockNode::FrameData(frame)) => {
                if frames.len() >= 0xFFFF {
                    return Err(Box::new(Error::TooManyChildNodes {
                        span: value.span,
                        tag: "ANIM".into(),
                        limit: 0xFFFF,
                    }));
                }
                frames.push(frame);
                value.used = true;
            }
            _ => {
                return Err(Box::new(Error::WrongChildNode {
                    span: value.span,
                    tag: "ANIM".into(),
                    expected: "frame_data",
                }))
            }
        }
    }

    vals.verify_usage(resolver);
    Ok(AnimBlock {
        person_type,
        anim_type,
        frames,
    })
}

pub(super) fn convert_ansp_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<AnspBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(
        resolver,
        group.values,
        true,
        true,
        symbols::ANIMATION_SYMBOLS,
    )?;

    let tile_width = vals.find_value("tile_width")?.get_number("ANSP")? as u16;
    let person_type =
        vals.find_value("person_type")?.get_number("ANSP")? as u8;
    let anim_type = vals.find_value("anim_type")?.get_number("ANSP")? as u16;

    let mut frames = Vec::new();
    for value in &mut vals.unnamed {
        if value.used {
            continue;
        }
        match value.take_node() {
            Some(BlockNode::Sprite(sprite)) => {
                if frames.len() >= 0xFFFF {
                    return Err(Box::new(Error::TooManyChildNodes {
                        span: value.span,
                        tag: "ANSP".into(),
                        limit: 0xFFFF,
                    }));
                }
                frames.push(sprite);
                value.used = true;
            }
            _ => {
                return Err(Box::new(Error::WrongChildNode {
                    span: value.span,
                    tag: "ANSP".into(),
                    expected: "sprite",
                }))
            }
        }
    }

    vals.verify_usage(resolver);
    Ok(AnspBlock {
        tile_width,
        person_type,
        anim_type,
        frames,
    })
}
