//! Image loading, cutting, and encoding of sprites.

/// Colour index of 'transparent' in an 8bpp image.
pub const TRANSPARENT_INDEX: u8 = 0;

/// Mask overlay requested by a `sprite` or `sheet` node.
#[derive(Debug)]
pub struct BitMaskData {
    pub name: String,
    pub x_pos: i32,
    pub y_pos: i32,
}

/// A built-in bitmask, XBM bit order (least significant bit first).
struct MaskInformation {
    width: i32,
    height: i32,
    bits: &'static [u8],
    name: &'static str,
}

/// 64x64 voxel outline: diamond top and bottom halves joined by vertical
/// sides.
static MASK64_BITS: [u8; 64 * 64 / 8] = voxel64_bits();

const fn voxel64_bits() -> [u8; 512] {
    let mut bits = [0u8; 512];
    let mut y = 0;
    while y < 64 {
        let margin = if y < 16 {
            31 - 2 * y
        } else if y < 48 {
            0
        } else {
            2 * y - 95
        };
        let mut x = margin;
        while x <= 63 - margin {
            bits[(y * 8 + x / 8) as usize] |= 1 << (x % 8);
            x += 1;
        }
        y += 1;
    }
    bits
}

static MASKS: &[MaskInformation] = &[MaskInformation {
    width: 64,
    height: 64,
    bits: &MASK64_BITS,
    name: "voxel64",
}];

fn mask_information(name: &str) -> Option<&'static MaskInformation> {
    MASKS.iter().find(|mask| mask.name == name)
}

/// Whether `name` refers to a known bitmask.
pub fn mask_exists(name: &str) -> bool {
    mask_information(name).is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Indexed,
    Rgba,
}

struct MaskOverlay {
    info: &'static MaskInformation,
    x_pos: i32,
    y_pos: i32,
}

/// A decoded PNG image with an optional bitmask overlay.
pub struct Image {
    width: i32,
    height: i32,
    format: PixelFormat,
    stride: usize,
    pixels: Vec<u8>,
    mask: Option<MaskOverlay>,
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl Image {
    /// Load a PNG file. Only 8-bit channels are accepted, and only paletted
    /// or RGBA images.
    pub fn load(
        path: &str,
        mask: Option<&BitMaskData>,
    ) -> Result<Self, String> {
        let mask = match mask {
            Some(data) => Some(MaskOverlay {
                info: mask_information(&data.name).ok_or_else(|| {
                    format!("cannot find a bitmask named \"{}\"", data.name)
                })?,
                x_pos: data.x_pos,
                y_pos: data.y_pos,
            }),
            None => None,
        };

        let file = std::fs::File::open(path)
            .map_err(|_| "input file does not exist".to_owned())?;
        let mut reader = png::Decoder::new(file)
            .read_info()
            .map_err(|err| err.to_string())?;
        let info = reader.info();
        if info.bit_depth != png::BitDepth::Eight {
            return Err("depth of the image channels is not 8 bit".to_owned());
        }
        let format = match info.color_type {
            png::ColorType::Indexed => PixelFormat::Indexed,
            png::ColorType::Rgba => PixelFormat::Rgba,
            _ => {
                return Err("incorrect type of image (expected either an \
                    8bpp paletted image or RGBA)"
                    .to_owned())
            }
        };
        let width = info.width as i32;
        let height = info.height as i32;

        let mut pixels = vec![0; reader.output_buffer_size()];
        let frame = reader
            .next_frame(&mut pixels)
            .map_err(|err| err.to_string())?;
        let stride = frame.line_size;
        pixels.truncate(frame.buffer_size());

        Ok(Self {
            width,
            height,
            format,
            stride,
            pixels,
            mask,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    fn is_masked_out(&self, x: i32, y: i32) -> bool {
        let Some(mask) = &self.mask else { return false };
        let mx = x - mask.x_pos;
        let my = y - mask.y_pos;
        if mx < 0 || mx >= mask.info.width || my < 0 || my >= mask.info.height
        {
            // Everything outside the mask window is transparent.
            return true;
        }
        let row_bytes = (mask.info.width + 7) / 8;
        let byte = mask.info.bits[(my * row_bytes + mx / 8) as usize];
        byte >> (mx % 8) & 1 == 0
    }

    /// Get a pixel value. For paletted images this is the palette index;
    /// for RGBA images the alpha byte stands in so the transparency test
    /// works on both formats.
    pub fn get_pixel(&self, x: i32, y: i32) -> u8 {
        debug_assert!(x >= 0 && x < self.width && y >= 0 && y < self.height);
        if self.is_masked_out(x, y) {
            return TRANSPARENT_INDEX;
        }
        match self.format {
            PixelFormat::Indexed => {
                self.pixels[y as usize * self.stride + x as usize]
            }
            PixelFormat::Rgba => {
                self.pixels[y as usize * self.stride + x as usize * 4 + 3]
            }
        }
    }

    pub fn is_transparent(&self, x: i32, y: i32) -> bool {
        self.get_pixel(x, y) == TRANSPARENT_INDEX
    }

    /// Whether all `length` pixels starting at `(xpos, ypos)` and stepping
    /// by `(dx, dy)` are transparent.
    fn is_empty(
        &self,
        mut xpos: i32,
        mut ypos: i32,
        dx: i32,
        dy: i32,
        mut length: i32,
    ) -> bool {
        while length > 0 {
            if !self.is_transparent(xpos, ypos) {
                return false;
            }
            xpos += dx;
            ypos += dy;
            length -= 1;
        }
        true
    }

    fn encode_row(&self, xpos: i32, y: i32, width: i32) -> Vec<u8> {
        let mut row = Vec::new();
        let mut last_header = None;
        let mut last_stored: i32 = 0;
        let mut x = 0;
        while x < width {
            if self.is_transparent(xpos + x, y) {
                x += 1;
                continue;
            }
            let mut start = x;
            while x < width && !self.is_transparent(xpos + x, y) {
                x += 1;
            }
            // Gaps longer than 127 pixels take empty runs.
            while last_stored + 127 < start {
                row.push(127);
                row.push(0);
                last_stored += 127;
            }
            // Runs longer than 255 pixels are split.
            while x - start > 255 {
                row.push((start - last_stored) as u8);
                row.push(255);
                for _ in 0..255 {
                    row.push(self.get_pixel(xpos + start, y));
                    start += 1;
                }
                last_stored = start;
            }
            last_header = Some(row.len());
            row.push((start - last_stored) as u8);
            row.push((x - start) as u8);
            while start < x {
                row.push(self.get_pixel(xpos + start, y));
                start += 1;
            }
            last_stored = x;
        }
        if let Some(header) = last_header {
            // Mark the last sequence of pixels in the row.
            row[header] |= 128;
        }
        row
    }

    /// Encode a region as 8bpp run-length data with a per-row jump table.
    /// A fully transparent region encodes to no data at all.
    pub fn encode(
        &self,
        xpos: i32,
        ypos: i32,
        width: i32,
        height: i32,
    ) -> Vec<u8> {
        let rows: Vec<Vec<u8>> = (0..height)
            .map(|y| self.encode_row(xpos, ypos + y, width))
            .collect();
        if rows.iter().all(Vec::is_empty) {
            return Vec::new();
        }

        let row_bytes: usize = rows.iter().map(Vec::len).sum();
        let mut data = Vec::with_capacity(4 * height as usize + row_bytes);
        let mut offset = 4 * height as u32;
        for row in &rows {
            let value = if row.is_empty() { 0 } else { offset };
            data.extend_from_slice(&value.to_le_bytes());
            offset += row.len() as u32;
        }
        for row in &rows {
            data.extend_from_slice(row);
        }
        data
    }

    #[cfg(test)]
    fn from_indexed(width: i32, height: i32, pixels: Vec<u8>) -> Self {
        assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            format: PixelFormat::Indexed,
            stride: width as usize,
            pixels,
            mask: None,
        }
    }

    #[cfg(test)]
    fn with_mask(mut self, name: &str, x_pos: i32, y_pos: i32) -> Self {
        self.mask = Some(MaskOverlay {
            info: mask_information(name).unwrap(),
            x_pos,
            y_pos,
        });
        self
    }
}

/// An encoded sprite cut out of an image.
#[derive(Debug, Default)]
pub struct SpriteImage {
    pub width: u16,
    pub height: u16,
    pub xoffset: i16,
    pub yoffset: i16,
    pub data: Vec<u8>,
}

impl SpriteImage {
    /// Copy a part of `img` as a sprite. `(xoffset, yoffset)` is the offset
    /// of the origin to the top-left pixel; `(xpos, ypos, xsize, ysize)` is
    /// the source rectangle. With `crop`, fully transparent border rows and
    /// columns are removed while the logical origin stays fixed.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_sprite(
        img: &Image,
        mut xoffset: i32,
        mut yoffset: i32,
        mut xpos: i32,
        mut ypos: i32,
        mut xsize: i32,
        mut ysize: i32,
        crop: bool,
    ) -> Result<Self, String> {
        if img.format() != PixelFormat::Indexed {
            return Err(
                "sprite source must be an 8bpp paletted image".to_owned()
            );
        }
        if xpos < 0 || ypos < 0 {
            return Err("negative starting position".to_owned());
        }
        if xpos >= img.width() || ypos >= img.height() {
            return Err("starting position beyond image".to_owned());
        }
        if xsize < 0 || ysize < 0 {
            return Err("negative image size".to_owned());
        }
        if xpos + xsize > img.width() {
            return Err("sprite too wide".to_owned());
        }
        if ypos + ysize > img.height() {
            return Err("sprite too high".to_owned());
        }

        if crop {
            // Crop left columns.
            while xsize > 0 && img.is_empty(xpos, ypos, 0, 1, ysize) {
                xpos += 1;
                xsize -= 1;
                xoffset += 1;
            }
            // Crop top rows.
            while ysize > 0 && img.is_empty(xpos, ypos, 1, 0, xsize) {
                ypos += 1;
                ysize -= 1;
                yoffset += 1;
            }
            // Crop right columns.
            while xsize > 0 && img.is_empty(xpos + xsize - 1, ypos, 0, 1, ysize)
            {
                xsize -= 1;
            }
            // Crop bottom rows.
            while ysize > 0 && img.is_empty(xpos, ypos + ysize - 1, 1, 0, xsize)
            {
                ysize -= 1;
            }
        }

        if xsize == 0 || ysize == 0 {
            return Ok(Self::default());
        }

        Ok(Self {
            width: xsize as u16,
            height: ysize as u16,
            xoffset: xoffset as i16,
            yoffset: yoffset as i16,
            data: img.encode(xpos, ypos, xsize, ysize),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
