
pub const PALETTE_COLORS: usize = 64;
pub const PALETTE_FILE_SIZE: usize = PALETTE_COLORS * 3;
pub const OPAQUE_ALPHA: u8 = 0xFF;

const PALETTE_INDEX_MASK: u8 = 0x3F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }

    /// Packs the triplet as ARGB32 with an opaque alpha channel.
    pub fn to_argb(&self) -> u32 {
        (OPAQUE_ALPHA as u32) << 24
            | (self.red as u32) << 16
            | (self.green as u32) << 8
            | self.blue as u32
    }
}

/// The 64 colors of a `.pal` file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteTable {
    colors: [Rgb; PALETTE_COLORS],
}

impl PaletteTable {
    pub fn from_bytes(bytes: &[u8; PALETTE_FILE_SIZE]) -> Self {
        let mut colors = [Rgb::default(); PALETTE_COLORS];

        for (color, triplet) in colors.iter_mut().zip(bytes.chunks_exact(3)) {
            *color = Rgb::new(triplet[0], triplet[1], triplet[2]);
        }

        PaletteTable { colors }
    }

    /// ARGB32 value for a palette index; only the low 6 bits are significant.
    pub fn argb(&self, index: u8) -> u32 {
        self.colors[(index & PALETTE_INDEX_MASK) as usize].to_argb()
    }
}
