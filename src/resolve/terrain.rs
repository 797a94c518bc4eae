//! Builders for the ground and path related game blocks.

use super::{expand_no_expression, symbols, Resolver, Values};
use crate::{
    ast::NodeGroup,
    blocks::{
        FundBlock, PathBlock, PlatBlock, SpriteBlock, SuppBlock, SurfBlock,
        TcorBlock, TselBlock,
    },
    diagnostic::Result,
};

/// Extract the nineteen surface sprites with direction prefix `prefix`.
fn surface_sprites(
    vals: &mut Values,
    prefix: char,
    node: &str,
) -> Result<Vec<SpriteBlock>> {
    let mut sprites = Vec::with_capacity(symbols::SURFACE_SPRITES.len());
    for name in symbols::SURFACE_SPRITES {
        let field = format!("{prefix}{name}");
        sprites.push(vals.find_value(&field)?.get_sprite(node)?);
    }
    Ok(sprites)
}

pub(super) fn convert_tsel_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<TselBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(resolver, group.values, true, false, &[])?;

    let tile_width = vals.find_value("tile_width")?.get_number("TSEL")? as u16;
    let z_height = vals.find_value("z_height")?.get_number("TSEL")? as u16;
    let sprites = surface_sprites(&mut vals, 'n', "TSEL")?;

    vals.verify_usage(resolver);
    Ok(TselBlock {
        tile_width,
        z_height,
        sprites,
    })
}

pub(super) fn convert_tcor_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<TcorBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(resolver, group.values, true, false, &[])?;

    let tile_width = vals.find_value("tile_width")?.get_number("TCOR")? as u16;
    let z_height = vals.find_value("z_height")?.get_number("TCOR")? as u16;
    let north = surface_sprites(&mut vals, 'n', "TCOR")?;
    let east = surface_sprites(&mut vals, 'e', "TCOR")?;
    let south = surface_sprites(&mut vals, 's', "TCOR")?;
    let west = surface_sprites(&mut vals, 'w', "TCOR")?;

    vals.verify_usage(resolver);
    Ok(TcorBlock {
        tile_width,
        z_height,
        north,
        east,
        south,
        west,
    })
}

pub(super) fn convert_surf_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<SurfBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(
        resolver,
        group.values,
        true,
        false,
        symbols::SURFACE_TYPES,
    )?;

    let surf_type = vals.find_value("surf_type")?.get_number("SURF")? as u16;
    let tile_width = vals.find_value("tile_width")?.get_number("SURF")? as u16;
    let z_height = vals.find_value("z_height")?.get_number("SURF")? as u16;
    let sprites = surface_sprites(&mut vals, 'n', "SURF")?;

    vals.verify_usage(resolver);
    Ok(SurfBlock {
        surf_type,
        tile_width,
        z_height,
        sprites,
    })
}

pub(super) fn convert_fund_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<FundBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(
        resolver,
        group.values,
        true,
        false,
        symbols::FOUNDATION_TYPES,
    )?;

    let found_type = vals.find_value("found_type")?.get_number("FUND")? as u16;
    let tile_width = vals.find_value("tile_width")?.get_number("FUND")? as u16;
    let z_height = vals.find_value("z_height")?.get_number("FUND")? as u16;
    let mut sprites = Vec::with_capacity(symbols::FOUNDATION_SPRITES.len());
    for name in symbols::FOUNDATION_SPRITES {
        sprites.push(vals.find_value(name)?.get_sprite("FUND")?);
    }

    vals.verify_usage(resolver);
    Ok(FundBlock {
        found_type,
        tile_width,
        z_height,
        sprites,
    })
}

pub(super) fn convert_path_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<PathBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(resolver, group.values, true, false, symbols::PATH_TYPES)?;

    let path_type = vals.find_value("path_type")?.get_number("PATH")? as u16;
    let tile_width = vals.find_value("tile_width")?.get_number("PATH")? as u16;
    let z_height = vals.find_value("z_height")?.get_number("PATH")? as u16;
    let mut sprites = Vec::with_capacity(symbols::PATH_SPRITES.len());
    for name in symbols::PATH_SPRITES {
        sprites.push(vals.find_value(name)?.get_sprite("PATH")?);
    }

    vals.verify_usage(resolver);
    Ok(PathBlock {
        path_type,
        tile_width,
        z_height,
        sprites,
    })
}

pub(super) fn convert_plat_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<PlatBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(
        resolver,
        group.values,
        true,
        false,
        symbols::PLATFORM_TYPES,
    )?;

    let tile_width = vals.find_value("tile_width")?.get_number("PLAT")? as u16;
    let z_height = vals.find_value("z_height")?.get_number("PLAT")? as u16;
    let platform_type =
        vals.find_value("platform_type")?.get_number("PLAT")? as u16;
    let mut sprites = Vec::with_capacity(symbols::PLATFORM_SPRITES.len());
    for name in symbols::PLATFORM_SPRITES {
        sprites.push(vals.find_value(name)?.get_sprite("PLAT")?);
    }

    vals.verify_usage(resolver);
    Ok(PlatBlock {
        tile_width,
        z_height,
        platform_type,
        sprites,
    })
}

pub(super) fn convert_supp_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<SuppBlock> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(
        resolver,
        group.values,
        true,
        false,
        symbols::SUPPORT_TYPES,
    )?;

    let support_type =
        vals.find_value("support_type")?.get_number("SUPP")? as u16;
    let tile_width = vals.find_value("tile_width")?.get_number("SUPP")? as u16;
    let z_height = vals.find_value("z_height")?.get_number("SUPP")? as u16;
    let mut sprites = Vec::with_capacity(symbols::SUPPORT_SPRITES.len());
    for name in symbols::SUPPORT_SPRITES {
        sprites.push(vals.find_value(name)?.get_sprite("SUPP")?);
    }

    vals.verify_usage(resolver);
    Ok(SuppBlock {
        support_type,
        tile_width,
        z_height,
        sprites,
    })
}
