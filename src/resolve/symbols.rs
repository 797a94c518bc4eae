//! Symbol tables and sprite slot names of the node schemas.

use crate::{
    ast::Symbol,
    blocks::{
        FOUNDATION_COUNT, PATH_COUNT, PLATFORM_COUNT, SUPPORT_COUNT,
        SURFACE_COUNT,
    },
};

/// Surface sprite slots in a single view direction; builders prefix each
/// with the direction letter.
pub static SURFACE_SPRITES: [&str; SURFACE_COUNT] = [
    "#", "#n", "#e", "#ne", "#s", "#ns", "#es", "#nes", "#w", "#nw", "#ew",
    "#new", "#sw", "#nsw", "#esw", "#N", "#E", "#S", "#W",
];

pub static FOUNDATION_SPRITES: [&str; FOUNDATION_COUNT] =
    ["se_e0", "se_0s", "se_es", "sw_s0", "sw_0w", "sw_sw"];

pub static PATH_SPRITES: [&str; PATH_COUNT] = [
    "empty",
    "ne",
    "se",
    "ne_se",
    "ne_se_e",
    "sw",
    "ne_sw",
    "se_sw",
    "se_sw_s",
    "ne_se_sw",
    "ne_se_sw_e",
    "ne_se_sw_s",
    "ne_se_sw_e_s",
    "nw",
    "ne_nw",
    "ne_nw_n",
    "nw_se",
    "ne_nw_se",
    "ne_nw_se_n",
    "ne_nw_se_e",
    "ne_nw_se_n_e",
    "nw_sw",
    "nw_sw_w",
    "ne_nw_sw",
    "ne_nw_sw_n",
    "ne_nw_sw_w",
    "ne_nw_sw_n_w",
    "nw_se_sw",
    "nw_se_sw_s",
    "nw_se_sw_w",
    "nw_se_sw_s_w",
    "ne_nw_se_sw",
    "ne_nw_se_sw_n",
    "ne_nw_se_sw_e",
    "ne_nw_se_sw_n_e",
    "ne_nw_se_sw_s",
    "ne_nw_se_sw_n_s",
    "ne_nw_se_sw_e_s",
    "ne_nw_se_sw_n_e_s",
    "ne_nw_se_sw_w",
    "ne_nw_se_sw_n_w",
    "ne_nw_se_sw_e_w",
    "ne_nw_se_sw_n_e_w",
    "ne_nw_se_sw_s_w",
    "ne_nw_se_sw_n_s_w",
    "ne_nw_se_sw_e_s_w",
    "ne_nw_se_sw_n_e_s_w",
    "ramp_ne",
    "ramp_nw",
    "ramp_se",
    "ramp_sw",
];

pub static PLATFORM_SPRITES: [&str; PLATFORM_COUNT] = [
    "ns",
    "ew",
    "ramp_ne",
    "ramp_se",
    "ramp_sw",
    "ramp_nw",
    "right_ramp_ne",
    "right_ramp_se",
    "right_ramp_sw",
    "right_ramp_nw",
    "left_ramp_ne",
    "left_ramp_se",
    "left_ramp_sw",
    "left_ramp_nw",
];

pub static SUPPORT_SPRITES: [&str; SUPPORT_COUNT] = [
    "s_ns", "s_ew", "d_ns", "d_ew", "p_ns", "p_ew", "n#n", "n#e", "n#ne",
    "n#s", "n#ns", "n#es", "n#nes", "n#w", "n#nw", "n#ew", "n#new", "n#sw",
    "n#nsw", "n#esw", "n#N", "n#E", "n#S", "n#W",
];

pub static GBOR_SPRITES: [&str; 9] = [
    "top_left",
    "top_middle",
    "top_right",
    "left",
    "middle",
    "right",
    "bottom_left",
    "bottom_middle",
    "bottom_right",
];

pub static GCHK_SPRITES: [&str; 6] = [
    "empty",
    "filled",
    "empty_pressed",
    "filled_pressed",
    "shaded_empty",
    "shaded_filled",
];

pub static GSLI_SPRITES: [&str; 4] = ["left", "middle", "right", "slider"];

pub static GSCL_SPRITES: [&str; 13] = [
    "left_button",
    "right_button",
    "left_pressed",
    "right_pressed",
    "left_bottom",
    "middle_bottom",
    "right_bottom",
    "left_top",
    "middle_top",
    "right_top",
    "left_top_pressed",
    "middle_top_pressed",
    "right_top_pressed",
];

pub static BDIR_SPRITES: [&str; 4] = ["ne", "se", "sw", "nw"];

pub static GSLP_SPRITES: [&str; 14] = [
    "vert_down",
    "steep_down",
    "gentle_down",
    "level",
    "gentle_up",
    "steep_up",
    "vert_up",
    "wide_left",
    "normal_left",
    "tight_left",
    "no_bend",
    "tight_right",
    "normal_right",
    "wide_right",
];

/// Available types of surface.
pub static SURFACE_TYPES: &[Symbol] = &[
    Symbol { name: "reserved", value: 0 },
    Symbol { name: "the_green", value: 17 },
    Symbol { name: "short_grass", value: 18 },
    Symbol { name: "medium_grass", value: 19 },
    Symbol { name: "long_grass", value: 20 },
    Symbol { name: "sand", value: 32 },
    Symbol { name: "cursor", value: 48 },
];

pub static FOUNDATION_TYPES: &[Symbol] = &[
    Symbol { name: "reserved", value: 0 },
    Symbol { name: "ground", value: 16 },
    Symbol { name: "wood", value: 32 },
    Symbol { name: "brick", value: 48 },
];

pub static PATH_TYPES: &[Symbol] =
    &[Symbol { name: "concrete", value: 16 }];

pub static PLATFORM_TYPES: &[Symbol] =
    &[Symbol { name: "wood", value: 16 }];

pub static SUPPORT_TYPES: &[Symbol] =
    &[Symbol { name: "wood", value: 16 }];

/// Person types and animation types for ANIM and ANSP blocks.
pub static ANIMATION_SYMBOLS: &[Symbol] = &[
    Symbol { name: "pillar", value: 8 },
    Symbol { name: "earth", value: 16 },
    Symbol { name: "walk_ne", value: 1 },
    Symbol { name: "walk_se", value: 2 },
    Symbol { name: "walk_sw", value: 3 },
    Symbol { name: "walk_nw", value: 4 },
];

/// Colour ranges for the recolour node.
pub static RECOLOUR_SYMBOLS: &[Symbol] = &[
    Symbol { name: "grey", value: 0 },
    Symbol { name: "green_brown", value: 1 },
    Symbol { name: "brown", value: 2 },
    Symbol { name: "yellow", value: 3 },
    Symbol { name: "dark_red", value: 4 },
    Symbol { name: "dark_green", value: 5 },
    Symbol { name: "light_green", value: 6 },
    Symbol { name: "green", value: 7 },
    Symbol { name: "light_red", value: 8 },
    Symbol { name: "dark_blue", value: 9 },
    Symbol { name: "blue", value: 10 },
    Symbol { name: "light_blue", value: 11 },
    Symbol { name: "purple", value: 12 },
    Symbol { name: "red", value: 13 },
    Symbol { name: "orange", value: 14 },
    Symbol { name: "sea_green", value: 15 },
    Symbol { name: "pink", value: 16 },
    Symbol { name: "beige", value: 17 },
];

/// Names of person types and colour ranges.
pub static PERSON_GRAPHICS_SYMBOLS: &[Symbol] = &[
    Symbol { name: "pillar", value: 8 },
    Symbol { name: "earth", value: 16 },
    Symbol { name: "grey", value: 0 },
    Symbol { name: "green_brown", value: 1 },
    Symbol { name: "brown", value: 2 },
    Symbol { name: "yellow", value: 3 },
    Symbol { name: "dark_red", value: 4 },
    Symbol { name: "dark_green", value: 5 },
    Symbol { name: "light_green", value: 6 },
    Symbol { name: "green", value: 7 },
    Symbol { name: "light_red", value: 8 },
    Symbol { name: "dark_blue", value: 9 },
    Symbol { name: "blue", value: 10 },
    Symbol { name: "light_blue", value: 11 },
    Symbol { name: "purple", value: 12 },
    Symbol { name: "red", value: 13 },
    Symbol { name: "orange", value: 14 },
    Symbol { name: "sea_green", value: 15 },
    Symbol { name: "pink", value: 16 },
    Symbol { name: "beige", value: 17 },
];

/// Entrance flags (bit numbers for use with `bitset`) and item types.
pub static SHOP_SYMBOLS: &[Symbol] = &[
    Symbol { name: "ne_entrance", value: 0 },
    Symbol { name: "se_entrance", value: 1 },
    Symbol { name: "sw_entrance", value: 2 },
    Symbol { name: "nw_entrance", value: 3 },
    Symbol { name: "nothing", value: 0 },
    Symbol { name: "drink", value: 8 },
    Symbol { name: "ice_cream", value: 9 },
    Symbol { name: "normal_food", value: 16 },
    Symbol { name: "salty_food", value: 24 },
    Symbol { name: "umbrella", value: 32 },
    Symbol { name: "park_map", value: 40 },
];

pub static WIDGET_TYPES: &[Symbol] = &[
    Symbol { name: "titlebar", value: 32 },
    Symbol { name: "button", value: 48 },
    Symbol { name: "pressed_button", value: 49 },
    Symbol { name: "frame", value: 64 },
    Symbol { name: "panel", value: 68 },
    Symbol { name: "inset_frame", value: 80 },
    Symbol { name: "checkbox", value: 96 },
    Symbol { name: "radio_button", value: 112 },
    Symbol { name: "hor_slider", value: 128 },
    Symbol { name: "vert_slider", value: 144 },
    Symbol { name: "hor_scrollbar", value: 160 },
    Symbol { name: "vert_scrollbar", value: 176 },
];
