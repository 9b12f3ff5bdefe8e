use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::Path;
use log::{debug, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use clap::Parser;
use crate::argb_formatter::format_argb_array;
use crate::palette_loader::{LoaderError, PalFileLoader, PaletteLoader};

mod palette;
mod palette_loader;
mod argb_formatter;
#[cfg(test)]
mod tests;

const DEFAULT_PALETTE_FILE: &str = "Composite_wiki.pal";

#[derive(Parser, Debug)]
#[command(author, version, about = "prints a .pal palette as an ARGB32 array literal", long_about = None)]
struct Args {
    #[arg(
        short = 'd',
        long = "debug",
        help = "debug mode",
        default_value_t = 0
    )]
    debug: u8,
}

#[derive(Debug)]
pub enum PaletteFormatterError {
    LoaderError(String),
    IOError(String),
}

impl From<LoaderError> for PaletteFormatterError {
    fn from(error: LoaderError) -> Self {
        PaletteFormatterError::LoaderError(error.to_string())
    }
}

impl From<std::io::Error> for PaletteFormatterError {
    fn from(error: std::io::Error) -> Self {
        PaletteFormatterError::IOError(error.to_string())
    }
}

impl Display for PaletteFormatterError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            PaletteFormatterError::LoaderError(s) => { write!(f, "palette loader error: {}", s) }
            PaletteFormatterError::IOError(s) => { write!(f, "i/o error: {}", s) }
        }
    }
}

fn logger_init(debug: u8) {

    let log_level = match debug {
        1 => LevelFilter::Debug,
        2 => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    // stdout is reserved for the array literal
    if TermLogger::init(log_level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("logger already initialized");
    }
}

/// Loads the palette at `path` and writes its array literal to `out`.
/// Nothing is written unless the whole palette could be read.
pub fn run<W: Write>(loader: &mut dyn PaletteLoader, path: &Path, out: &mut W) -> Result<(), PaletteFormatterError> {
    let palette = loader.load(path)?;
    let literal = format_argb_array(&palette);

    debug!("formatted {} bytes of output", literal.len());

    out.write_all(literal.as_bytes())?;
    out.flush()?;

    Ok(())
}

fn main() -> Result<(), PaletteFormatterError> {
    let args: Args = Args::parse();

    logger_init(args.debug);

    info!("formatting palette {}", DEFAULT_PALETTE_FILE);

    let mut loader = PalFileLoader::new();
    let stdout = std::io::stdout();

    run(&mut loader, Path::new(DEFAULT_PALETTE_FILE), &mut stdout.lock())
}
