//! ELF object file parser for the `elfy` inspector.
//!
//! Reads 32- and 64-bit objects in either byte order and decodes the file
//! header, program headers, section headers, dynamic entries and symbol
//! tables into widened, class-independent values. Every read is bounds
//! checked; malformed offsets surface as [`ElfError`]s rather than panics.
//! The [`classify`] module maps raw numeric fields to their symbolic names.
//!
//! # Usage
//!
//! ```no_run
//! use elfy_elf::{ElfFile, SymbolKind};
//!
//! let elf = ElfFile::open("/bin/true").expect("valid ELF");
//! for sym in elf.symbols(SymbolKind::Dynsym).expect("readable symbols") {
//!     println!("{:?} {:#x}", sym.name, sym.st_value);
//! }
//! ```

#![forbid(unsafe_code)]

pub mod classify;
pub mod dynamic;
pub mod error;
pub mod file;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod header;
pub mod reader;
pub mod section;
pub mod segment;
pub mod symtab;

pub use dynamic::{DynamicEntry, DynamicValue, read_dynamic_entries};
pub use error::ElfError;
pub use file::ElfFile;
pub use header::{
    FileHeader, PN_XNUM, SHN_XINDEX, program_header_count, read_file_header,
    section_header_count, section_name_index,
};
pub use reader::{DataEncoding, ElfHandle, ElfReader, ObjectClass, open};
pub use section::{SectionHeader, StringTable, read_section_headers, section_data};
pub use segment::{ProgramHeader, read_program_headers};
pub use symtab::{Symbol, SymbolKind, read_symbols};
