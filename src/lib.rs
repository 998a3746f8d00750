pub mod converter;
pub mod io;

pub use converter::{convert, ConversionReport, ConversionResult, MowenConverter};
pub use io::MowenError;
