//! Program header table parsing.

use crate::error::ElfError;
use crate::header::{FileHeader, program_header_count};
use crate::reader::{Cursor, ElfReader, ObjectClass};

/// Parsed program header, widened to 64-bit fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramHeader {
    /// Segment type (`PT_*`).
    pub p_type: u32,
    /// Permission flags (`PF_R = 4`, `PF_W = 2`, `PF_X = 1`).
    pub p_flags: u32,
    /// File offset of the segment contents.
    pub p_offset: u64,
    /// Virtual address in memory.
    pub p_vaddr: u64,
    /// Physical address, where relevant.
    pub p_paddr: u64,
    /// Size of the segment in the file.
    pub p_filesz: u64,
    /// Size of the segment in memory (may exceed `p_filesz`).
    pub p_memsz: u64,
    /// Alignment in memory and in the file.
    pub p_align: u64,
}

/// Parse the program header table.
///
/// Entries are read with the class's fixed entry size; `e_phentsize` is not
/// consulted.
///
/// # Errors
///
/// [`ElfError::TruncatedTable`] if the table does not fit in the file, and
/// [`ElfError::MissingExtendedCount`] for an unresolvable `PN_XNUM`.
pub fn read_program_headers(
    reader: &ElfReader<'_>,
    header: &FileHeader,
) -> Result<Vec<ProgramHeader>, ElfError> {
    let count = program_header_count(reader, header)?;
    if count == 0 {
        return Ok(Vec::new());
    }

    let size = reader.class().program_header_size();
    let table = reader
        .table(header.e_phoff, count, size)
        .ok_or(ElfError::TruncatedTable("program header"))?;

    let mut segments = Vec::new();
    let mut offset = 0;
    while offset < table.len() {
        let phdr = table
            .slice(offset, size)
            .and_then(decode)
            .ok_or(ElfError::TruncatedTable("program header"))?;
        segments.push(phdr);
        offset += size;
    }
    Ok(segments)
}

fn decode(entry: ElfReader<'_>) -> Option<ProgramHeader> {
    let mut c = Cursor::new(entry, 0);
    // p_flags moved next to p_type in the 64-bit layout to keep words aligned.
    match entry.class() {
        ObjectClass::ThirtyTwoBit => {
            let p_type = c.u32()?;
            let p_offset = c.word()?;
            let p_vaddr = c.word()?;
            let p_paddr = c.word()?;
            let p_filesz = c.word()?;
            let p_memsz = c.word()?;
            let p_flags = c.u32()?;
            let p_align = c.word()?;
            Some(ProgramHeader {
                p_type,
                p_flags,
                p_offset,
                p_vaddr,
                p_paddr,
                p_filesz,
                p_memsz,
                p_align,
            })
        }
        ObjectClass::SixtyFourBit => Some(ProgramHeader {
            p_type: c.u32()?,
            p_flags: c.u32()?,
            p_offset: c.word()?,
            p_vaddr: c.word()?,
            p_paddr: c.word()?,
            p_filesz: c.word()?,
            p_memsz: c.word()?,
            p_align: c.word()?,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::segment::{PF_R, PF_W, PT_DYNAMIC, PT_LOAD};
    use crate::fixtures::{ALL_LAYOUTS, ElfBuilder, Phdr, Section};
    use crate::header::{PN_XNUM, read_file_header};
    use crate::reader::DataEncoding;

    fn parse(buf: &[u8]) -> Result<Vec<ProgramHeader>, ElfError> {
        let reader = ElfReader::new(buf).expect("valid ident");
        let hdr = read_file_header(&reader).expect("valid header");
        read_program_headers(&reader, &hdr)
    }

    #[test]
    fn decode_every_layout() {
        for (class, encoding) in ALL_LAYOUTS {
            let buf = ElfBuilder::new(class, encoding)
                .segment(Phdr {
                    p_type: PT_LOAD,
                    p_flags: PF_R | PF_W,
                    p_offset: 0x1000,
                    p_vaddr: 0x0060_1000,
                    p_paddr: 0x0060_2000,
                    p_filesz: 0x234,
                    p_memsz: 0x800,
                    p_align: 0x1000,
                })
                .segment(Phdr {
                    p_type: PT_DYNAMIC,
                    p_flags: PF_R,
                    ..Phdr::default()
                })
                .build();
            let segments = parse(&buf).expect("valid table");

            assert_eq!(segments.len(), 2, "{class:?} {encoding:?}");
            let load = segments[0];
            assert_eq!(load.p_type, PT_LOAD);
            assert_eq!(load.p_flags, PF_R | PF_W);
            assert_eq!(load.p_offset, 0x1000);
            assert_eq!(load.p_vaddr, 0x0060_1000);
            assert_eq!(load.p_paddr, 0x0060_2000);
            assert_eq!(load.p_filesz, 0x234);
            assert_eq!(load.p_memsz, 0x800);
            assert_eq!(load.p_align, 0x1000);
            assert_eq!(segments[1].p_type, PT_DYNAMIC);
            assert_eq!(segments[1].p_flags, PF_R);
        }
    }

    #[test]
    fn no_segments() {
        let buf = ElfBuilder::new(ObjectClass::ThirtyTwoBit, DataEncoding::LittleEndian).build();
        assert_eq!(parse(&buf), Ok(Vec::new()));
    }

    #[test]
    fn reject_count_past_end_of_file() {
        let buf = ElfBuilder::new(ObjectClass::SixtyFourBit, DataEncoding::LittleEndian)
            .segment(Phdr::default())
            .phnum(40)
            .build();
        assert_eq!(parse(&buf), Err(ElfError::TruncatedTable("program header")));
    }

    #[test]
    fn pn_xnum_count_is_used() {
        let buf = ElfBuilder::new(ObjectClass::SixtyFourBit, DataEncoding::BigEndian)
            .segment(Phdr {
                p_type: PT_LOAD,
                ..Phdr::default()
            })
            .section(Section::new(".data", 1, vec![0; 4]))
            .null_section(0, 0, 1)
            .phnum(PN_XNUM)
            .build();
        let segments = parse(&buf).expect("extended count resolves");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].p_type, PT_LOAD);
    }

    #[test]
    fn pn_xnum_huge_count_is_truncated_table() {
        let buf = ElfBuilder::new(ObjectClass::SixtyFourBit, DataEncoding::LittleEndian)
            .segment(Phdr::default())
            .section(Section::new(".data", 1, vec![0; 4]))
            .null_section(0, 0, u32::MAX)
            .phnum(PN_XNUM)
            .build();
        assert_eq!(parse(&buf), Err(ElfError::TruncatedTable("program header")));
    }
}
