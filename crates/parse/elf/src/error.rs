//! Error type shared by every parser in this crate.

use core::fmt;
use std::io;

/// Errors that can occur when reading or parsing an ELF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfError {
    /// The file could not be opened or read.
    Io(io::ErrorKind),
    /// The file does not start with the ELF magic bytes.
    NotAnElf,
    /// `EI_CLASS` is neither `ELFCLASS32` nor `ELFCLASS64`.
    UnsupportedClass(u8),
    /// `EI_DATA` is neither `ELFDATA2LSB` nor `ELFDATA2MSB`.
    UnsupportedEncoding(u8),
    /// The file is shorter than the file header for its class.
    TruncatedHeader,
    /// A table's declared offset, size or count exceeds the file bounds.
    TruncatedTable(&'static str),
    /// `e_phnum` is `PN_XNUM` (or `e_shnum` is zero) but section 0 cannot be read.
    MissingExtendedCount,
    /// The string table linked from a section is missing or out of bounds.
    StringTableLookupFailed {
        /// Index of the section whose `sh_link` could not be followed.
        section: usize,
    },
    /// A symbol's `st_shndx` does not name an existing section.
    SymbolSectionResolutionFailed {
        /// The offending section index.
        index: u16,
    },
}

impl fmt::Display for ElfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(kind) => write!(f, "I/O error: {kind}"),
            Self::NotAnElf => write!(f, "not an ELF object"),
            Self::UnsupportedClass(class) => write!(f, "unsupported ELF class {class:#x}"),
            Self::UnsupportedEncoding(data) => {
                write!(f, "unsupported data encoding {data:#x}")
            }
            Self::TruncatedHeader => write!(f, "file header truncated"),
            Self::TruncatedTable(table) => write!(f, "{table} table exceeds file bounds"),
            Self::MissingExtendedCount => {
                write!(f, "extended header count requires a readable section 0")
            }
            Self::StringTableLookupFailed { section } => {
                write!(f, "string table linked from section {section} is unavailable")
            }
            Self::SymbolSectionResolutionFailed { index } => {
                write!(f, "symbol refers to nonexistent section {index}")
            }
        }
    }
}

impl std::error::Error for ElfError {}

impl From<io::Error> for ElfError {
    fn from(e: io::Error) -> Self {
        Self::Io(e.kind())
    }
}
