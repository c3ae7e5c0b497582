//! [`ElfFile`]: the parsed file header together with the bytes it describes.

use std::path::Path;

use crate::dynamic::{DynamicEntry, read_dynamic_entries};
use crate::error::ElfError;
use crate::header::{FileHeader, program_header_count, read_file_header};
use crate::reader::{DataEncoding, ElfHandle, ElfReader, ObjectClass, open};
use crate::section::{SectionHeader, read_section_headers};
use crate::segment::{ProgramHeader, read_program_headers};
use crate::symtab::{Symbol, SymbolKind, read_symbols};

/// An ELF file held in memory with its header decoded.
///
/// Tables are parsed on demand; each call re-reads them from the buffered
/// bytes.
#[derive(Debug, Clone)]
pub struct ElfFile {
    handle: ElfHandle,
    header: FileHeader,
}

impl ElfFile {
    /// Read and decode the file at `path`.
    ///
    /// # Errors
    ///
    /// Any error of [`open`] or [`read_file_header`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ElfError> {
        Self::from_handle(open(path)?)
    }

    /// Decode an image already in memory.
    ///
    /// # Errors
    ///
    /// Any error of [`ElfHandle::from_bytes`] or [`read_file_header`].
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, ElfError> {
        Self::from_handle(ElfHandle::from_bytes(data)?)
    }

    fn from_handle(handle: ElfHandle) -> Result<Self, ElfError> {
        let header = read_file_header(&handle.reader())?;
        Ok(Self { handle, header })
    }

    /// Reader over the file bytes.
    #[must_use]
    pub fn reader(&self) -> ElfReader<'_> {
        self.handle.reader()
    }

    /// The decoded file header.
    #[must_use]
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Object class.
    #[must_use]
    pub fn class(&self) -> ObjectClass {
        self.handle.class()
    }

    /// Data encoding.
    #[must_use]
    pub fn encoding(&self) -> DataEncoding {
        self.handle.encoding()
    }

    /// Number of program headers, following `PN_XNUM`.
    ///
    /// # Errors
    ///
    /// See [`program_header_count`].
    pub fn program_header_count(&self) -> Result<u64, ElfError> {
        program_header_count(&self.reader(), &self.header)
    }

    /// All program headers.
    ///
    /// # Errors
    ///
    /// See [`read_program_headers`].
    pub fn program_headers(&self) -> Result<Vec<ProgramHeader>, ElfError> {
        read_program_headers(&self.reader(), &self.header)
    }

    /// All section headers with their names resolved.
    ///
    /// # Errors
    ///
    /// See [`read_section_headers`].
    pub fn section_headers(&self) -> Result<Vec<SectionHeader>, ElfError> {
        read_section_headers(&self.reader(), &self.header)
    }

    /// Entries of every dynamic section.
    ///
    /// # Errors
    ///
    /// Section header errors, then those of [`read_dynamic_entries`].
    pub fn dynamic_entries(&self) -> Result<Vec<DynamicEntry>, ElfError> {
        let sections = self.section_headers()?;
        read_dynamic_entries(&self.reader(), &sections)
    }

    /// Symbols of every table of the given kind.
    ///
    /// # Errors
    ///
    /// Section header errors, then those of [`read_symbols`].
    pub fn symbols(&self, kind: SymbolKind) -> Result<Vec<Symbol>, ElfError> {
        let sections = self.section_headers()?;
        read_symbols(&self.reader(), &sections, kind)
    }
}
