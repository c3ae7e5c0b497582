//! File header decoding.
//!
//! Decodes `Elf32_Ehdr` / `Elf64_Ehdr` into one widened [`FileHeader`] and
//! resolves the extended counts that spill into section 0 when a file has
//! more headers than the 16-bit fields can hold.

use crate::error::ElfError;
use crate::reader::{Cursor, EI_NIDENT, ElfReader};
use crate::section::section_entry;

/// `e_phnum` escape value: the real count is in section 0's `sh_info`.
pub const PN_XNUM: u16 = 0xffff;

/// `e_shstrndx` escape value: the real index is in section 0's `sh_link`.
pub const SHN_XINDEX: u16 = 0xffff;

/// Parsed file header, widened to 64-bit fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Identification bytes (magic, class, encoding, version, OS ABI, ...).
    pub e_ident: [u8; EI_NIDENT],
    /// Object file type.
    pub e_type: u16,
    /// Target machine architecture.
    pub e_machine: u16,
    /// Object file version.
    pub e_version: u32,
    /// Virtual address of the entry point.
    pub e_entry: u64,
    /// Offset of the program header table in the file.
    pub e_phoff: u64,
    /// Offset of the section header table in the file.
    pub e_shoff: u64,
    /// Processor-specific flags.
    pub e_flags: u32,
    /// Size of this header.
    pub e_ehsize: u16,
    /// Size of each program header entry.
    pub e_phentsize: u16,
    /// Number of program header entries (or [`PN_XNUM`]).
    pub e_phnum: u16,
    /// Size of each section header entry.
    pub e_shentsize: u16,
    /// Number of section header entries (0 if the count is extended).
    pub e_shnum: u16,
    /// Section name string table index (or [`SHN_XINDEX`]).
    pub e_shstrndx: u16,
}

/// Decode the file header.
///
/// # Errors
///
/// [`ElfError::TruncatedHeader`] if the data is shorter than the header size
/// for the reader's class.
pub fn read_file_header(reader: &ElfReader<'_>) -> Result<FileHeader, ElfError> {
    let hdr = reader
        .slice(0, reader.class().header_size())
        .ok_or(ElfError::TruncatedHeader)?;
    decode(hdr).ok_or(ElfError::TruncatedHeader)
}

fn decode(hdr: ElfReader<'_>) -> Option<FileHeader> {
    let mut e_ident = [0u8; EI_NIDENT];
    e_ident.copy_from_slice(hdr.bytes_at(0, EI_NIDENT as u64)?);

    // Field order is identical for both classes; only the word width differs.
    let mut c = Cursor::new(hdr, EI_NIDENT as u64);
    Some(FileHeader {
        e_ident,
        e_type: c.u16()?,
        e_machine: c.u16()?,
        e_version: c.u32()?,
        e_entry: c.word()?,
        e_phoff: c.word()?,
        e_shoff: c.word()?,
        e_flags: c.u32()?,
        e_ehsize: c.u16()?,
        e_phentsize: c.u16()?,
        e_phnum: c.u16()?,
        e_shentsize: c.u16()?,
        e_shnum: c.u16()?,
        e_shstrndx: c.u16()?,
    })
}

/// Number of program headers, following the `PN_XNUM` escape.
///
/// # Errors
///
/// [`ElfError::MissingExtendedCount`] if `e_phnum` is `PN_XNUM` and section 0
/// cannot be read.
pub fn program_header_count(reader: &ElfReader<'_>, header: &FileHeader) -> Result<u64, ElfError> {
    if header.e_phnum != PN_XNUM {
        return Ok(u64::from(header.e_phnum));
    }
    let zero = section_zero(reader, header).ok_or(ElfError::MissingExtendedCount)?;
    Ok(u64::from(zero.sh_info))
}

/// Number of section headers.
///
/// A zero `e_shnum` with a non-zero `e_shoff` means the count did not fit and
/// is stored in section 0's `sh_size`.
///
/// # Errors
///
/// [`ElfError::MissingExtendedCount`] if the count is extended and section 0
/// cannot be read.
pub fn section_header_count(reader: &ElfReader<'_>, header: &FileHeader) -> Result<u64, ElfError> {
    if header.e_shnum != 0 || header.e_shoff == 0 {
        return Ok(u64::from(header.e_shnum));
    }
    let zero = section_zero(reader, header).ok_or(ElfError::MissingExtendedCount)?;
    Ok(zero.sh_size)
}

/// Index of the section name string table, following the `SHN_XINDEX` escape.
///
/// # Errors
///
/// [`ElfError::MissingExtendedCount`] if the index is extended and section 0
/// cannot be read.
pub fn section_name_index(reader: &ElfReader<'_>, header: &FileHeader) -> Result<u64, ElfError> {
    if header.e_shstrndx != SHN_XINDEX {
        return Ok(u64::from(header.e_shstrndx));
    }
    let zero = section_zero(reader, header).ok_or(ElfError::MissingExtendedCount)?;
    Ok(u64::from(zero.sh_link))
}

fn section_zero(reader: &ElfReader<'_>, header: &FileHeader) -> Option<crate::SectionHeader> {
    if header.e_shoff == 0 {
        return None;
    }
    section_entry(reader, header.e_shoff, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ALL_LAYOUTS, ElfBuilder, Phdr, Section};
    use crate::reader::{DataEncoding, ObjectClass};

    #[test]
    fn round_trip_all_layouts() {
        for (class, encoding) in ALL_LAYOUTS {
            let buf = ElfBuilder::new(class, encoding)
                .e_type(3)
                .machine(183)
                .entry(0x1234_5678)
                .flags(0x0500_0002)
                .os_abi(3)
                .segment(Phdr::default())
                .section(Section::new(".text", 1, vec![0; 8]))
                .build();

            let reader = ElfReader::new(&buf).expect("valid ident");
            let hdr = read_file_header(&reader).expect("valid header");

            let hsize = class.header_size();
            let phsize = class.program_header_size();
            assert_eq!(hdr.e_ident[..4], crate::reader::ELF_MAGIC, "{class:?} {encoding:?}");
            assert_eq!(hdr.e_ident[7], 3);
            assert_eq!(hdr.e_type, 3);
            assert_eq!(hdr.e_machine, 183);
            assert_eq!(hdr.e_version, 1);
            assert_eq!(hdr.e_entry, 0x1234_5678);
            assert_eq!(hdr.e_phoff, hsize);
            // header + one phdr + 8 bytes of .text + ".text\0.shstrtab\0"
            assert_eq!(hdr.e_shoff, hsize + phsize + 8 + 17);
            assert_eq!(hdr.e_flags, 0x0500_0002);
            assert_eq!(u64::from(hdr.e_ehsize), hsize);
            assert_eq!(u64::from(hdr.e_phentsize), phsize);
            assert_eq!(hdr.e_phnum, 1);
            assert_eq!(u64::from(hdr.e_shentsize), class.section_header_size());
            assert_eq!(hdr.e_shnum, 3);
            assert_eq!(hdr.e_shstrndx, 2);
        }
    }

    #[test]
    fn reject_truncated_header() {
        for (class, encoding) in ALL_LAYOUTS {
            let buf = ElfBuilder::new(class, encoding).build();
            let short = &buf[..buf.len() - 1];
            let reader = ElfReader::new(short).unwrap();
            assert_eq!(read_file_header(&reader), Err(ElfError::TruncatedHeader));
        }
    }

    #[test]
    fn plain_counts_pass_through() {
        let buf = ElfBuilder::new(ObjectClass::SixtyFourBit, DataEncoding::LittleEndian)
            .segment(Phdr::default())
            .segment(Phdr::default())
            .section(Section::new(".data", 1, vec![1, 2, 3]))
            .build();
        let reader = ElfReader::new(&buf).unwrap();
        let hdr = read_file_header(&reader).unwrap();
        assert_eq!(program_header_count(&reader, &hdr), Ok(2));
        assert_eq!(section_header_count(&reader, &hdr), Ok(3));
        assert_eq!(section_name_index(&reader, &hdr), Ok(2));
    }

    #[test]
    fn pn_xnum_reads_count_from_section_zero() {
        for (class, encoding) in ALL_LAYOUTS {
            let buf = ElfBuilder::new(class, encoding)
                .segment(Phdr::default())
                .section(Section::new(".data", 1, vec![0; 4]))
                .null_section(0, 0, 1)
                .phnum(PN_XNUM)
                .build();
            let reader = ElfReader::new(&buf).unwrap();
            let hdr = read_file_header(&reader).unwrap();
            assert_eq!(hdr.e_phnum, PN_XNUM);
            assert_eq!(program_header_count(&reader, &hdr), Ok(1));
        }
    }

    #[test]
    fn pn_xnum_reports_large_count() {
        let buf = ElfBuilder::new(ObjectClass::SixtyFourBit, DataEncoding::BigEndian)
            .section(Section::new(".data", 1, vec![0; 4]))
            .null_section(0, 0, 70_000)
            .phnum(PN_XNUM)
            .build();
        let reader = ElfReader::new(&buf).unwrap();
        let hdr = read_file_header(&reader).unwrap();
        assert_eq!(program_header_count(&reader, &hdr), Ok(70_000));
    }

    #[test]
    fn pn_xnum_without_sections_fails() {
        let buf = ElfBuilder::new(ObjectClass::ThirtyTwoBit, DataEncoding::LittleEndian)
            .phnum(PN_XNUM)
            .build();
        let reader = ElfReader::new(&buf).unwrap();
        let hdr = read_file_header(&reader).unwrap();
        assert_eq!(
            program_header_count(&reader, &hdr),
            Err(ElfError::MissingExtendedCount)
        );
    }

    #[test]
    fn extended_section_count_and_name_index() {
        let buf = ElfBuilder::new(ObjectClass::SixtyFourBit, DataEncoding::LittleEndian)
            .section(Section::new(".data", 1, vec![0; 4]))
            .null_section(3, 2, 0)
            .shnum(0)
            .shstrndx(SHN_XINDEX)
            .build();
        let reader = ElfReader::new(&buf).unwrap();
        let hdr = read_file_header(&reader).unwrap();
        assert_eq!(section_header_count(&reader, &hdr), Ok(3));
        assert_eq!(section_name_index(&reader, &hdr), Ok(2));
    }
}
