use std::fmt::{Debug, Display, Formatter};
use std::fs::File;
use std::io::{Error, ErrorKind, Read};
use std::path::Path;
use log::debug;
#[cfg(test)]
use mockall::automock;
use crate::palette::{PaletteTable, PALETTE_FILE_SIZE};

#[cfg_attr(test, automock)]
pub trait PaletteLoader: Debug {
    fn load(&mut self, path: &Path) -> Result<PaletteTable, LoaderError>;
}

#[derive(Debug)]
pub enum LoaderError {
    IoError(Error),
    ShortRead { expected: usize },
}

impl From<Error> for LoaderError {
    fn from(error: Error) -> Self {
        match error.kind() {
            ErrorKind::UnexpectedEof => LoaderError::ShortRead { expected: PALETTE_FILE_SIZE },
            _ => LoaderError::IoError(error),
        }
    }
}

impl Display for LoaderError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            LoaderError::IoError(e) => { write!(f, "i/o error {}", e) },
            LoaderError::ShortRead { expected } => { write!(f, "short read, palette needs {} bytes", expected) }
        }
    }
}

/// Raw `.pal` loader: 64 RGB triplets, no header.
#[derive(Debug)]
pub struct PalFileLoader;

impl PaletteLoader for PalFileLoader {
    fn load(&mut self, path: &Path) -> Result<PaletteTable, LoaderError> {
        debug!("loader: opening palette file {}", path.display());

        let file = File::open(path)?;
        self.read_from(file)
    }
}

impl PalFileLoader {
    pub fn new() -> Self {
        PalFileLoader
    }

    /// Reads the first palette-sized block of `reader`, anything after it is ignored.
    pub fn read_from<R: Read>(&self, mut reader: R) -> Result<PaletteTable, LoaderError> {
        let mut buffer = [0u8; PALETTE_FILE_SIZE];
        reader.read_exact(&mut buffer)?;

        debug!("loader: read {} bytes of palette data", buffer.len());

        Ok(PaletteTable::from_bytes(&buffer))
    }
}
