use codemap::CodeMap;
use rcdgen::diagnostic::Error;
use std::{
    fs,
    io::BufWriter,
    path::{Path, PathBuf},
};

/// Per-test scratch directory under the system temp dir.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rcdgen_test_{name}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write an 8-bit indexed PNG where the palette maps index i to (i, 0, 0).
fn write_png(path: &Path, width: u32, height: u32, pixels: &[u8]) {
    assert_eq!(pixels.len(), (width * height) as usize);
    let file = fs::File::create(path).unwrap();
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    let mut palette = Vec::with_capacity(256 * 3);
    for index in 0..=255u8 {
        palette.extend([index, 0, 0]);
    }
    encoder.set_palette(palette);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(pixels).unwrap();
}

fn compile(source: &str) -> rcdgen::diagnostic::Result<()> {
    let mut code_map = CodeMap::new();
    let file = code_map.add_file("test".to_owned(), source.to_owned());
    rcdgen::compile(&code_map, &file)
}

/// Split an RCD file into its header-checked list of (tag, version,
/// payload) blocks.
fn read_blocks(path: &Path) -> Vec<(String, u32, Vec<u8>)> {
    let bytes = fs::read(path).unwrap();
    assert_eq!(&bytes[..4], b"RCDF");
    assert_eq!(&bytes[4..8], &1u32.to_le_bytes());
    let mut blocks = Vec::new();
    let mut pos = 8;
    while pos < bytes.len() {
        let tag =
            String::from_utf8(bytes[pos..pos + 4].to_vec()).unwrap();
        let version = u32::from_le_bytes(
            bytes[pos + 4..pos + 8].try_into().unwrap(),
        );
        let length = u32::from_le_bytes(
            bytes[pos + 8..pos + 12].try_into().unwrap(),
        ) as usize;
        blocks.push((tag, version, bytes[pos + 12..pos + 12 + length].to_vec()));
        pos += 12 + length;
    }
    blocks
}

const SURFACE_CELLS: &str = "n#, n#n, n#e, n#ne, n#s, n#ns, n#es, n#nes, \
    n#w, n#nw, n#ew, n#new, n#sw, n#nsw, n#esw, n#N, n#E, n#S, n#W";

/// A sheet covering the 19 surface cells of `png` in one row.
fn surface_sheet(png: &Path) -> String {
    format!(
        "{{ {SURFACE_CELLS} }}: sheet {{
            file: \"{}\"; x_base: 0; y_base: 0; x_step: 2; y_step: 2;
            x_offset: 0; y_offset: 0; width: 2; height: 2; crop: 0;
        }}",
        png.display(),
    )
}

fn surface_png(dir: &Path) -> PathBuf {
    let png = dir.join("surface.png");
    write_png(&png, 40, 2, &[1; 80]);
    png
}

#[test]
fn empty_file_wrapper_is_exactly_the_header() {
    let dir = scratch("empty");
    let out = dir.join("out.rcd");
    compile(&format!("file(\"{}\") {{ }}", out.display())).unwrap();
    let bytes = fs::read(&out).unwrap();
    assert_eq!(bytes, [0x52, 0x43, 0x44, 0x46, 0x01, 0x00, 0x00, 0x00]);
}

#[test]
fn identical_game_blocks_are_deduplicated() {
    let dir = scratch("dedup");
    let png = surface_png(&dir);
    let tsel = |out: &Path, repeats: usize| {
        let block = format!(
            "TSEL {{ tile_width: 64; z_height: 16; {} }}",
            surface_sheet(&png),
        );
        format!(
            "file(\"{}\") {{ {} }}",
            out.display(),
            block.repeat(repeats),
        )
    };
    let once = dir.join("once.rcd");
    let twice = dir.join("twice.rcd");
    compile(&tsel(&once, 1)).unwrap();
    compile(&tsel(&twice, 2)).unwrap();

    // The second TSEL collapses onto the first, so both files are
    // byte-identical and carry the block exactly once.
    assert_eq!(fs::read(&once).unwrap(), fs::read(&twice).unwrap());
    let blocks = read_blocks(&twice);
    let tsels: Vec<_> =
        blocks.iter().filter(|(tag, ..)| tag == "TSEL").collect();
    assert_eq!(tsels.len(), 1);

    // All 19 sprites have identical pixels, so they shrink to one 8PXL
    // block, which must be block number 1.
    let sprites: Vec<_> =
        blocks.iter().filter(|(tag, ..)| tag == "8PXL").collect();
    assert_eq!(sprites.len(), 1);
    let (_, version, payload) = &tsels[0];
    assert_eq!(*version, 1);
    assert_eq!(&payload[..4], &[64, 0, 16, 0]);
    for reference in payload[4..].chunks(4) {
        assert_eq!(reference, 1u32.to_le_bytes());
    }
}

#[test]
fn surface_types_resolve_through_symbols() {
    let dir = scratch("surf");
    let png = surface_png(&dir);
    let out = dir.join("surf.rcd");
    let source = format!(
        "file(\"{}\") {{
            SURF {{
                surf_type: the_green;
                tile_width: 64;
                z_height: 16;
                {}
            }}
        }}",
        out.display(),
        surface_sheet(&png),
    );
    compile(&source).unwrap();
    let blocks = read_blocks(&out);
    let (_, version, payload) = blocks
        .iter()
        .find(|(tag, ..)| tag == "SURF")
        .expect("no SURF block in the output");
    assert_eq!(*version, 3);
    assert_eq!(&payload[..6], &[0x11, 0x00, 0x40, 0x00, 0x10, 0x00]);
}

#[test]
fn unary_negation_chains_cancel_out() {
    let dir = scratch("negate");
    let png = surface_png(&dir);
    let out = dir.join("neg.rcd");
    let source = format!(
        "file(\"{}\") {{
            TSEL {{ tile_width: -(-64); z_height: 16; {} }}
        }}",
        out.display(),
        surface_sheet(&png),
    );
    compile(&source).unwrap();
    let blocks = read_blocks(&out);
    let (_, _, payload) =
        blocks.iter().find(|(tag, ..)| tag == "TSEL").unwrap();
    assert_eq!(&payload[..2], &[64, 0]);
}

#[test]
fn sheet_cells_are_cut_at_stepped_positions() {
    let dir = scratch("sheet_cells");
    let png = dir.join("arrows.png");
    // Four 2x2 quadrants holding palette indices 1..4.
    let pixels = [
        1, 1, 2, 2, //
        1, 1, 2, 2, //
        3, 3, 4, 4, //
        3, 3, 4, 4, //
    ];
    write_png(&png, 4, 4, &pixels);
    let out = dir.join("bdir.rcd");
    let source = format!(
        "file(\"{}\") {{
            BDIR {{
                tile_width: 64;
                {{ ne, se | sw, nw }}: sheet {{
                    file: \"{}\"; x_base: 0; y_base: 0;
                    x_step: 2; y_step: 2; x_offset: 0; y_offset: 0;
                    width: 2; height: 2; crop: 0;
                }}
            }}
        }}",
        out.display(),
        png.display(),
    );
    compile(&source).unwrap();
    let blocks = read_blocks(&out);

    // Cell (row, col) must be cut from (x_step * col, y_step * row), so
    // sprite block N holds quadrant value N.
    let sprites: Vec<_> =
        blocks.iter().filter(|(tag, ..)| tag == "8PXL").collect();
    assert_eq!(sprites.len(), 4);
    for (index, (_, version, payload)) in sprites.iter().enumerate() {
        assert_eq!(*version, 2);
        assert_eq!(&payload[..4], &[2, 0, 2, 0]);
        let value = index as u8 + 1;
        // Two rows of: end-of-row marker, two pixels.
        assert_eq!(&payload[16..], &[128, 2, value, value, 128, 2, value, value]);
    }

    let (_, _, payload) =
        blocks.iter().find(|(tag, ..)| tag == "BDIR").unwrap();
    assert_eq!(&payload[..2], &[64, 0]);
    for (index, reference) in payload[2..].chunks(4).enumerate() {
        assert_eq!(reference, (index as u32 + 1).to_le_bytes());
    }
}

#[test]
fn empty_sprites_are_referenced_as_zero() {
    let dir = scratch("empty_sprite");
    let png = dir.join("blank.png");
    write_png(&png, 4, 4, &[0; 16]);
    let out = dir.join("blank.rcd");
    let source = format!(
        "file(\"{}\") {{
            BDIR {{
                tile_width: 64;
                {{ ne, se | sw, nw }}: sheet {{
                    file: \"{}\"; x_base: 0; y_base: 0;
                    x_step: 2; y_step: 2; x_offset: 0; y_offset: 0;
                    width: 2; height: 2;
                }}
            }}
        }}",
        out.display(),
        png.display(),
    );
    compile(&source).unwrap();
    let blocks = read_blocks(&out);
    assert_eq!(blocks.len(), 1);
    let (tag, _, payload) = &blocks[0];
    assert_eq!(tag, "BDIR");
    assert_eq!(payload[2..], [0; 16]);
}

fn shop_view_png(dir: &Path) -> PathBuf {
    let png = dir.join("shop.png");
    write_png(&png, 4, 4, &[5; 16]);
    png
}

fn shop_source(out: &Path, png: &Path, strings_body: &str) -> String {
    format!(
        "file(\"{}\") {{
            SHOP {{
                tile_width: 64; height: 4; flags: bitset(0, 2);
                {{ ne, se | sw, nw }}: sheet {{
                    file: \"{}\"; x_base: 0; y_base: 0;
                    x_step: 2; y_step: 2; x_offset: 0; y_offset: 0;
                    width: 2; height: 2;
                }}
                recolour {{ original: grey; replace: bitset(3, 4); }}
                cost_item1: 150; cost_item2: 200;
                cost_ownership: 0; cost_opened: 0;
                type_item1: drink; type_item2: nothing;
                texts: strings {{ {strings_body} }}
            }}
        }}",
        out.display(),
        png.display(),
    )
}

fn shop_strings(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| {
            format!("string {{ name: \"{name}\"; text: \"{name} text\"; }}")
        })
        .collect()
}

const ALL_SHOP_STRINGS: [&str; 9] = [
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

#[test]
fn shops_emit_their_text_block() {
    let dir = scratch("shop");
    let png = shop_view_png(&dir);
    let out = dir.join("shop.rcd");
    let source = shop_source(&out, &png, &shop_strings(&ALL_SHOP_STRINGS));
    compile(&source).unwrap();
    let blocks = read_blocks(&out);
    let (_, version, payload) = blocks
        .iter()
        .find(|(tag, ..)| tag == "SHOP")
        .expect("no SHOP block in the output");
    assert_eq!(*version, 4);
    assert_eq!(payload.len(), 54);
    assert_eq!(&payload[..4], &[64, 0, 4, 0b101]);
    // One recolouring set, two slots left unset (orig = 18).
    assert_eq!(&payload[20..24], &[0b11000, 0, 0, 0]);
    assert_eq!(payload[27], 18);
    assert_eq!(payload[31], 18);
    assert_eq!(&payload[32..36], &150u32.to_le_bytes());
    assert_eq!(&payload[48..50], &[8, 0]);
    // The text reference points at the TEXT block.
    let text_number = blocks
        .iter()
        .position(|(tag, ..)| tag == "TEXT")
        .expect("no TEXT block in the output") as u32
        + 1;
    assert_eq!(&payload[50..54], &text_number.to_le_bytes());
}

#[test]
fn conflicting_string_definitions_are_fatal() {
    let dir = scratch("conflict");
    let png = shop_view_png(&dir);
    let out = dir.join("conflict.rcd");
    let strings = "string { name: \"buy\"; lang: \"en_GB\"; text: \"X\"; }
        string { name: \"buy\"; lang: \"en_GB\"; text: \"Y\"; }";
    let err = compile(&shop_source(&out, &png, strings)).unwrap_err();
    match *err {
        Error::StringConflict { name, lang, .. } => {
            assert_eq!(name, "buy");
            assert_eq!(lang, "en_GB");
        }
        other => panic!("expected a string conflict, got {other:?}"),
    }
    assert!(!out.exists());
}

#[test]
fn missing_required_shop_strings_are_fatal() {
    let dir = scratch("missing_string");
    let png = shop_view_png(&dir);
    let out = dir.join("missing.rcd");
    let strings = shop_strings(&ALL_SHOP_STRINGS[..8]);
    let err = compile(&shop_source(&out, &png, &strings)).unwrap_err();
    assert!(matches!(
        *err,
        Error::MissingShopString { name: "NAME_ITEM2", .. }
    ));
    assert!(!out.exists());
}

#[test]
fn unknown_languages_are_fatal() {
    let dir = scratch("language");
    let png = shop_view_png(&dir);
    let out = dir.join("lang.rcd");
    let strings = "string { name: \"buy\"; lang: \"tlh\"; text: \"X\"; }";
    let err = compile(&shop_source(&out, &png, strings)).unwrap_err();
    match *err {
        Error::UnknownLanguage { code, .. } => assert_eq!(code, "tlh"),
        other => panic!("expected an unknown language, got {other:?}"),
    }
}

#[test]
fn unused_values_only_warn() {
    let dir = scratch("unused");
    let png = surface_png(&dir);
    let out = dir.join("unused.rcd");
    let source = format!(
        "file(\"{}\") {{
            TSEL {{ tile_width: 64; z_height: 16; leftover: 1; {} }}
        }}",
        out.display(),
        surface_sheet(&png),
    );
    compile(&source).unwrap();
    assert!(out.exists());
}

#[test]
fn out_of_bounds_sprites_are_fatal() {
    let dir = scratch("bounds");
    let png = dir.join("tiny.png");
    write_png(&png, 4, 4, &[1; 16]);
    let out = dir.join("bounds.rcd");
    let source = format!(
        "file(\"{}\") {{
            BDIR {{
                tile_width: 64;
                {{ ne, se | sw, nw }}: sheet {{
                    file: \"{}\"; x_base: 40; y_base: 0;
                    x_step: 2; y_step: 2; x_offset: 0; y_offset: 0;
                    width: 2; height: 2;
                }}
            }}
        }}",
        out.display(),
        png.display(),
    );
    let err = compile(&source).unwrap_err();
    assert!(matches!(*err, Error::SpriteCopy { .. }));
    assert!(!out.exists());
}
