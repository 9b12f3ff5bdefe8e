use std::fmt::Write;
use crate::palette::{PaletteTable, PALETTE_COLORS};

pub const COLORS_PER_LINE: usize = 16;

const ARRAY_OPEN: &str = "[\n\t";
const ARRAY_CLOSE: &str = "]\n";

fn separator(index: usize) -> &'static str {
    if index == PALETTE_COLORS - 1 {
        "\n"
    } else if index % COLORS_PER_LINE == COLORS_PER_LINE - 1 {
        ",\n\t"
    } else {
        ", "
    }
}

/// Renders the palette as a bracketed array literal of `0xFFRRGGBB` constants.
pub fn format_argb_array(palette: &PaletteTable) -> String {
    // "0xAARRGGBB" plus at most three separator chars per entry
    let mut output = String::with_capacity(ARRAY_OPEN.len() + PALETTE_COLORS * 13 + ARRAY_CLOSE.len());
    output.push_str(ARRAY_OPEN);

    for index in 0..PALETTE_COLORS {
        // writing into a String never fails
        let _ = write!(output, "0x{:08X}", palette.argb(index as u8));
        output.push_str(separator(index));
    }

    output.push_str(ARRAY_CLOSE);
    output
}
