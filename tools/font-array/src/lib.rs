//! Tool for converting a binary font asset into a source array literal that embeds the font's raw
//! bytes, along with a constant holding its length.

use core::{error, fmt};
use std::{
    ffi::OsStr,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

pub mod cli;

/// The number of tokens emitted on a single line of the array body.
pub const TOKENS_PER_LINE: usize = 16;

/// Reads the file located at `input_path` and writes its source array representation to
/// `output_path`, overwriting any existing file.
///
/// Returns the number of bytes that were transcoded.
///
/// # Errors
///
/// - [`TranscodeError::Read`]: Returned if `input_path` could not be read.
/// - [`TranscodeError::EmptyInput`]: Returned if `input_path` contains no bytes. The output file
///   is not created in this case.
/// - [`TranscodeError::Write`]: Returned if `output_path` could not be created or written.
pub fn transcode<P0: AsRef<Path>, P1: AsRef<Path>>(
    input_path: P0,
    output_path: P1,
) -> Result<usize, TranscodeError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let font = fs::read(input_path).map_err(|source| TranscodeError::Read {
        path: input_path.to_path_buf(),
        source,
    })?;
    if font.is_empty() {
        return Err(TranscodeError::EmptyInput {
            path: input_path.to_path_buf(),
        });
    }

    let write_error = |source| TranscodeError::Write {
        path: output_path.to_path_buf(),
        source,
    };

    let file = File::create(output_path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    write_array(&font, &mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    Ok(font.len())
}

/// Writes the length constant and array literal describing `font` to `writer`.
///
/// `font` must not be empty; an empty slice results in an [`io::ErrorKind::InvalidInput`] error
/// before anything is written.
///
/// # Errors
///
/// Returns any error produced by `writer`.
pub fn write_array<W: Write>(font: &[u8], mut writer: W) -> io::Result<()> {
    let Some((first, rest)) = font.split_first() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "cannot write an array for an empty font",
        ));
    };

    write!(writer, "const int DEFAULT_FONT_LENGTH = {};\n\n", font.len())?;
    writer.write_all(b"const Uint8 DEFAULT_FONT[] = {\n\t")?;
    write!(writer, "{}", Token(*first))?;

    let mut count = 0;
    for &byte in rest {
        count += 1;
        if count == TOKENS_PER_LINE {
            writer.write_all(b",\n\t")?;
            count = 0;
        } else {
            writer.write_all(b", ")?;
        }

        write!(writer, "{}", Token(byte))?;
    }

    writer.write_all(b"\n};\n")
}

/// A single byte of the array body, displayed as `0x` followed by exactly two lowercase hex
/// digits.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Token(pub u8);

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

/// Derives the default output path for `input_path`.
///
/// The portion of the file name before its first `.` is kept and `.txt` is appended, so both
/// `glyphs.bin` and `glyphs.v2.bin` map to `glyphs.txt`. The file name is never re-encoded, and
/// the result shares `input_path`'s parent directory.
///
/// # Errors
///
/// Returns [`TranscodeError::MissingFileName`] if `input_path` has no file name component.
pub fn derive_output_path<P: AsRef<Path>>(input_path: P) -> Result<PathBuf, TranscodeError> {
    let input_path = input_path.as_ref();
    let Some(file_name) = input_path.file_name() else {
        return Err(TranscodeError::MissingFileName {
            path: input_path.to_path_buf(),
        });
    };

    let bytes = file_name.as_encoded_bytes();
    let stem = match bytes.iter().position(|&byte| byte == b'.') {
        Some(index) => &bytes[..index],
        None => bytes,
    };
    // SAFETY: `stem` is either all of `file_name` or `file_name` split immediately before an
    // ASCII `.`, which is a valid boundary for encoded [`OsStr`] bytes.
    let stem = unsafe { OsStr::from_encoded_bytes_unchecked(stem) };

    let mut output_name = stem.to_os_string();
    output_name.push(".txt");
    Ok(input_path.with_file_name(output_name))
}

/// Various errors that can occur while transcoding a font.
#[derive(Debug)]
pub enum TranscodeError {
    /// An error occurred while reading the input file.
    Read {
        /// The path of the input file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// An error occurred while creating or writing the output file.
    Write {
        /// The path of the output file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The input file contained no bytes.
    EmptyInput {
        /// The path of the input file.
        path: PathBuf,
    },
    /// No output path could be derived because the input path has no file name.
    MissingFileName {
        /// The offending input path.
        path: PathBuf,
    },
}

impl fmt::Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "error reading \"{}\": {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "error writing \"{}\": {source}", path.display())
            }
            Self::EmptyInput { path } => write!(
                f,
                "\"{}\" is empty: input must contain at least one byte",
                path.display()
            ),
            Self::MissingFileName { path } => write!(
                f,
                "\"{}\" has no file name to derive an output path from",
                path.display()
            ),
        }
    }
}

impl error::Error for TranscodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::EmptyInput { .. } | Self::MissingFileName { .. } => None,
        }
    }
}
