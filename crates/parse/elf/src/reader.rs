//! Byte source and class resolution.
//!
//! [`ElfReader`] wraps the raw file bytes together with the object class and
//! data encoding read from `e_ident`. Every multi-byte accessor applies the
//! resolved byte order and returns `None` instead of reading past the end of
//! the data, so malformed offsets never turn into a slice panic.

use std::path::Path;

use crate::error::ElfError;

/// ELF magic bytes: `\x7fELF`.
pub const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];

/// Size of the `e_ident` array.
pub const EI_NIDENT: usize = 16;
/// `e_ident` index of the file class byte.
pub const EI_CLASS: usize = 4;
/// `e_ident` index of the data encoding byte.
pub const EI_DATA: usize = 5;
/// `e_ident` index of the file version byte.
pub const EI_VERSION: usize = 6;
/// `e_ident` index of the OS ABI byte.
pub const EI_OSABI: usize = 7;
/// `e_ident` index of the ABI version byte.
pub const EI_ABIVERSION: usize = 8;
/// `e_ident` index of the first padding byte.
pub const EI_PAD: usize = 9;

/// File class: 32-bit objects.
pub const ELFCLASS32: u8 = 1;
/// File class: 64-bit objects.
pub const ELFCLASS64: u8 = 2;
/// Data encoding: two's complement, little-endian.
pub const ELFDATA2LSB: u8 = 1;
/// Data encoding: two's complement, big-endian.
pub const ELFDATA2MSB: u8 = 2;

/// Width class of an ELF object, fixed by `e_ident[EI_CLASS]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectClass {
    /// `ELFCLASS32`: 4-byte addresses and offsets.
    ThirtyTwoBit,
    /// `ELFCLASS64`: 8-byte addresses and offsets.
    SixtyFourBit,
}

impl ObjectClass {
    /// Size of the file header (`Elf32_Ehdr` / `Elf64_Ehdr`).
    #[must_use]
    pub const fn header_size(self) -> u64 {
        match self {
            Self::ThirtyTwoBit => 52,
            Self::SixtyFourBit => 64,
        }
    }

    /// Size of one program header entry.
    #[must_use]
    pub const fn program_header_size(self) -> u64 {
        match self {
            Self::ThirtyTwoBit => 32,
            Self::SixtyFourBit => 56,
        }
    }

    /// Size of one section header entry.
    #[must_use]
    pub const fn section_header_size(self) -> u64 {
        match self {
            Self::ThirtyTwoBit => 40,
            Self::SixtyFourBit => 64,
        }
    }

    /// Size of one `Elf_Dyn` entry.
    #[must_use]
    pub const fn dynamic_entry_size(self) -> u64 {
        match self {
            Self::ThirtyTwoBit => 8,
            Self::SixtyFourBit => 16,
        }
    }

    /// Size of one `Elf_Sym` entry.
    #[must_use]
    pub const fn symbol_size(self) -> u64 {
        match self {
            Self::ThirtyTwoBit => 16,
            Self::SixtyFourBit => 24,
        }
    }
}

/// Byte order of every multi-byte field, fixed by `e_ident[EI_DATA]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataEncoding {
    /// `ELFDATA2LSB`.
    LittleEndian,
    /// `ELFDATA2MSB`.
    BigEndian,
}

/// Class- and endian-aware view over the bytes of an ELF file.
#[derive(Debug, Clone, Copy)]
pub struct ElfReader<'a> {
    data: &'a [u8],
    class: ObjectClass,
    encoding: DataEncoding,
}

impl<'a> ElfReader<'a> {
    /// Validate the identification bytes and resolve class and encoding.
    ///
    /// # Errors
    ///
    /// [`ElfError::NotAnElf`] if the magic does not match (nothing past the
    /// first four bytes is inspected in that case), [`ElfError::TruncatedHeader`]
    /// if `e_ident` is incomplete, and [`ElfError::UnsupportedClass`] /
    /// [`ElfError::UnsupportedEncoding`] for unrecognized identification bytes.
    pub fn new(data: &'a [u8]) -> Result<Self, ElfError> {
        if data.get(..ELF_MAGIC.len()) != Some(&ELF_MAGIC[..]) {
            return Err(ElfError::NotAnElf);
        }
        if data.len() < EI_NIDENT {
            return Err(ElfError::TruncatedHeader);
        }

        let class = match data[EI_CLASS] {
            ELFCLASS32 => ObjectClass::ThirtyTwoBit,
            ELFCLASS64 => ObjectClass::SixtyFourBit,
            other => return Err(ElfError::UnsupportedClass(other)),
        };
        let encoding = match data[EI_DATA] {
            ELFDATA2LSB => DataEncoding::LittleEndian,
            ELFDATA2MSB => DataEncoding::BigEndian,
            other => return Err(ElfError::UnsupportedEncoding(other)),
        };

        Ok(Self {
            data,
            class,
            encoding,
        })
    }

    /// Object class resolved from `EI_CLASS`.
    #[must_use]
    pub fn class(&self) -> ObjectClass {
        self.class
    }

    /// Data encoding resolved from `EI_DATA`.
    #[must_use]
    pub fn encoding(&self) -> DataEncoding {
        self.encoding
    }

    /// The underlying bytes.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Number of bytes in this view.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    /// Returns `true` if the view holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn chunk<const N: usize>(&self, offset: u64) -> Option<[u8; N]> {
        let start = usize::try_from(offset).ok()?;
        self.data.get(start..)?.first_chunk::<N>().copied()
    }

    /// Read one byte.
    #[must_use]
    pub fn u8_at(&self, offset: u64) -> Option<u8> {
        self.chunk::<1>(offset).map(|[b]| b)
    }

    /// Read a `u16` in the file's byte order.
    #[must_use]
    pub fn u16_at(&self, offset: u64) -> Option<u16> {
        let b = self.chunk(offset)?;
        Some(match self.encoding {
            DataEncoding::LittleEndian => u16::from_le_bytes(b),
            DataEncoding::BigEndian => u16::from_be_bytes(b),
        })
    }

    /// Read a `u32` in the file's byte order.
    #[must_use]
    pub fn u32_at(&self, offset: u64) -> Option<u32> {
        let b = self.chunk(offset)?;
        Some(match self.encoding {
            DataEncoding::LittleEndian => u32::from_le_bytes(b),
            DataEncoding::BigEndian => u32::from_be_bytes(b),
        })
    }

    /// Read a `u64` in the file's byte order.
    #[must_use]
    pub fn u64_at(&self, offset: u64) -> Option<u64> {
        let b = self.chunk(offset)?;
        Some(match self.encoding {
            DataEncoding::LittleEndian => u64::from_le_bytes(b),
            DataEncoding::BigEndian => u64::from_be_bytes(b),
        })
    }

    /// Read a class-sized word (`Elf32_Addr`/`Elf32_Off` or their 64-bit
    /// counterparts), widened to `u64`.
    #[must_use]
    pub fn word_at(&self, offset: u64) -> Option<u64> {
        match self.class {
            ObjectClass::ThirtyTwoBit => self.u32_at(offset).map(u64::from),
            ObjectClass::SixtyFourBit => self.u64_at(offset),
        }
    }

    /// Bounds-checked sub-slice of `len` bytes starting at `offset`.
    #[must_use]
    pub fn bytes_at(&self, offset: u64, len: u64) -> Option<&'a [u8]> {
        let start = usize::try_from(offset).ok()?;
        let end = start.checked_add(usize::try_from(len).ok()?)?;
        self.data.get(start..end)
    }

    /// Sub-reader over `len` bytes at `offset`, sharing class and encoding.
    #[must_use]
    pub fn slice(&self, offset: u64, len: u64) -> Option<Self> {
        Some(Self {
            data: self.bytes_at(offset, len)?,
            ..*self
        })
    }

    /// Sub-reader over a table of `count` entries of `entsize` bytes.
    ///
    /// Returns `None` if the size computation overflows or the table does not
    /// fit inside the data.
    #[must_use]
    pub fn table(&self, offset: u64, count: u64, entsize: u64) -> Option<Self> {
        self.slice(offset, count.checked_mul(entsize)?)
    }
}

/// Sequential field reader over an [`ElfReader`].
///
/// Each accessor reads at the current position and advances past the field.
/// Structures whose field order is the same for both classes (file header,
/// section header, dynamic entry) decode with one code path using
/// [`Cursor::word`] for the class-sized fields.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    reader: ElfReader<'a>,
    pos: u64,
}

impl<'a> Cursor<'a> {
    /// Start reading at `pos`.
    #[must_use]
    pub fn new(reader: ElfReader<'a>, pos: u64) -> Self {
        Self { reader, pos }
    }

    /// Current offset into the underlying reader.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.pos
    }

    fn advance<T>(&mut self, size: u64, value: Option<T>) -> Option<T> {
        let value = value?;
        self.pos += size;
        Some(value)
    }

    /// Read one byte.
    pub fn u8(&mut self) -> Option<u8> {
        let v = self.reader.u8_at(self.pos);
        self.advance(1, v)
    }

    /// Read a `u16`.
    pub fn u16(&mut self) -> Option<u16> {
        let v = self.reader.u16_at(self.pos);
        self.advance(2, v)
    }

    /// Read a `u32`.
    pub fn u32(&mut self) -> Option<u32> {
        let v = self.reader.u32_at(self.pos);
        self.advance(4, v)
    }

    /// Read a `u64`.
    pub fn u64(&mut self) -> Option<u64> {
        let v = self.reader.u64_at(self.pos);
        self.advance(8, v)
    }

    /// Read a class-sized word, widened to `u64`.
    pub fn word(&mut self) -> Option<u64> {
        match self.reader.class() {
            ObjectClass::ThirtyTwoBit => self.u32().map(u64::from),
            ObjectClass::SixtyFourBit => self.u64(),
        }
    }
}

/// An ELF file fully buffered in memory, with its identification validated.
#[derive(Debug, Clone)]
pub struct ElfHandle {
    data: Vec<u8>,
    class: ObjectClass,
    encoding: DataEncoding,
}

impl ElfHandle {
    /// Take ownership of `data` after validating its identification bytes.
    ///
    /// # Errors
    ///
    /// Same as [`ElfReader::new`].
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, ElfError> {
        let reader = ElfReader::new(&data)?;
        let (class, encoding) = (reader.class(), reader.encoding());
        Ok(Self {
            data,
            class,
            encoding,
        })
    }

    /// Object class resolved when the handle was opened.
    #[must_use]
    pub fn class(&self) -> ObjectClass {
        self.class
    }

    /// Data encoding resolved when the handle was opened.
    #[must_use]
    pub fn encoding(&self) -> DataEncoding {
        self.encoding
    }

    /// Borrow the buffered bytes as a reader.
    #[must_use]
    pub fn reader(&self) -> ElfReader<'_> {
        ElfReader {
            data: &self.data,
            class: self.class,
            encoding: self.encoding,
        }
    }
}

/// Read the file at `path` into memory and validate its identification bytes.
///
/// # Errors
///
/// [`ElfError::Io`] if the file cannot be read, otherwise the errors of
/// [`ElfReader::new`].
pub fn open(path: impl AsRef<Path>) -> Result<ElfHandle, ElfError> {
    let data = std::fs::read(path)?;
    ElfHandle::from_bytes(data)
}
