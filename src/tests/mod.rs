use log::LevelFilter;
use simplelog::{Config, TestLogger};
use std::sync::Once;
use crate::palette::{PaletteTable, PALETTE_FILE_SIZE};


static START: Once = Once::new();

fn init_logger_for_test() {
    START.call_once(|| TestLogger::init(LevelFilter::Trace, Config::default()).unwrap());
}

pub fn init() {
    init_logger_for_test();
}

fn palette_filled_with(value: u8) -> PaletteTable {
    PaletteTable::from_bytes(&[value; PALETTE_FILE_SIZE])
}

fn palette_with_first_color(red: u8, green: u8, blue: u8) -> PaletteTable {
    let mut bytes = [0u8; PALETTE_FILE_SIZE];
    bytes[0] = red;
    bytes[1] = green;
    bytes[2] = blue;
    PaletteTable::from_bytes(&bytes)
}

fn sequential_palette_bytes() -> [u8; PALETTE_FILE_SIZE] {
    let mut bytes = [0u8; PALETTE_FILE_SIZE];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = i as u8;
    }
    bytes
}
