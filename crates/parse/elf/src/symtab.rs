//! Symbol table parsing.
//!
//! `.symtab` is read strictly: a missing linked string table or a symbol that
//! names a nonexistent section is an error. `.dynsym` is read leniently and
//! leaves such names unresolved.

use crate::classify::section::{SHT_DYNSYM, SHT_SYMTAB};
use crate::classify::symbol::{SectionIndex, section_index};
use crate::error::ElfError;
use crate::reader::{Cursor, ElfReader, ObjectClass};
use crate::section::{SectionHeader, StringTable, string_table};

/// Which symbol tables to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// `SHT_SYMTAB` sections, read strictly.
    Symtab,
    /// `SHT_DYNSYM` sections, read leniently.
    Dynsym,
}

impl SymbolKind {
    /// Section type holding this kind of table.
    #[must_use]
    pub fn section_type(self) -> u32 {
        match self {
            Self::Symtab => SHT_SYMTAB,
            Self::Dynsym => SHT_DYNSYM,
        }
    }

    fn is_strict(self) -> bool {
        matches!(self, Self::Symtab)
    }
}

/// One `Elf_Sym` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Index of the symbol table section.
    pub section: usize,
    /// Position within that section.
    pub index: usize,
    /// Offset of the name in the linked string table.
    pub st_name: u32,
    /// Resolved name, `None` if the lookup failed.
    pub name: Option<String>,
    /// Packed type and binding.
    pub st_info: u8,
    /// Packed visibility.
    pub st_other: u8,
    /// Defining section index or a reserved pseudo index.
    pub st_shndx: u16,
    /// Name of the defining section for ordinary indices, when resolvable.
    pub section_name: Option<String>,
    /// Symbol value (usually an address).
    pub st_value: u64,
    /// Size of the object, 0 if unknown.
    pub st_size: u64,
}

impl Symbol {
    /// Symbol type (`STT_*`), the low nibble of `st_info`.
    #[must_use]
    pub fn symbol_type(&self) -> u8 {
        self.st_info & 0xf
    }

    /// Symbol binding (`STB_*`), the high nibble of `st_info`.
    #[must_use]
    pub fn binding(&self) -> u8 {
        self.st_info >> 4
    }

    /// Symbol visibility (`STV_*`), the low two bits of `st_other`.
    #[must_use]
    pub fn visibility(&self) -> u8 {
        self.st_other & 0x3
    }
}

/// Parse every symbol table section of the given kind, in section order.
///
/// # Errors
///
/// [`ElfError::TruncatedTable`] if a table lies outside the file. For
/// [`SymbolKind::Symtab`] also [`ElfError::StringTableLookupFailed`] and
/// [`ElfError::SymbolSectionResolutionFailed`].
pub fn read_symbols(
    reader: &ElfReader<'_>,
    sections: &[SectionHeader],
    kind: SymbolKind,
) -> Result<Vec<Symbol>, ElfError> {
    let mut symbols = Vec::new();
    for section in sections.iter().filter(|s| s.sh_type == kind.section_type()) {
        read_table(reader, sections, section, kind, &mut symbols)?;
    }
    Ok(symbols)
}

fn read_table(
    reader: &ElfReader<'_>,
    sections: &[SectionHeader],
    section: &SectionHeader,
    kind: SymbolKind,
    out: &mut Vec<Symbol>,
) -> Result<(), ElfError> {
    let size = reader.class().symbol_size();
    let count = section.sh_size / size;
    let data = reader
        .table(section.sh_offset, count, size)
        .ok_or(ElfError::TruncatedTable("symbol table"))?;

    let strings = string_table(reader, sections, u64::from(section.sh_link));
    if strings.is_none() && kind.is_strict() {
        return Err(ElfError::StringTableLookupFailed {
            section: section.index,
        });
    }

    let mut offset = 0;
    let mut index = 0;
    while offset < data.len() {
        let raw = data
            .slice(offset, size)
            .and_then(decode)
            .ok_or(ElfError::TruncatedTable("symbol table"))?;
        out.push(resolve(raw, section.index, index, strings, sections, kind)?);
        offset += size;
        index += 1;
    }
    Ok(())
}

struct RawSymbol {
    st_name: u32,
    st_info: u8,
    st_other: u8,
    st_shndx: u16,
    st_value: u64,
    st_size: u64,
}

fn decode(entry: ElfReader<'_>) -> Option<RawSymbol> {
    let mut c = Cursor::new(entry, 0);
    match entry.class() {
        ObjectClass::ThirtyTwoBit => {
            let st_name = c.u32()?;
            let st_value = c.word()?;
            let st_size = c.word()?;
            Some(RawSymbol {
                st_name,
                st_info: c.u8()?,
                st_other: c.u8()?,
                st_shndx: c.u16()?,
                st_value,
                st_size,
            })
        }
        ObjectClass::SixtyFourBit => Some(RawSymbol {
            st_name: c.u32()?,
            st_info: c.u8()?,
            st_other: c.u8()?,
            st_shndx: c.u16()?,
            st_value: c.u64()?,
            st_size: c.u64()?,
        }),
    }
}

fn resolve(
    raw: RawSymbol,
    section: usize,
    index: usize,
    strings: Option<StringTable<'_>>,
    sections: &[SectionHeader],
    kind: SymbolKind,
) -> Result<Symbol, ElfError> {
    let section_name = match section_index(raw.st_shndx) {
        SectionIndex::Special(_) => None,
        SectionIndex::Ordinary(i) => match sections.get(usize::from(i)) {
            Some(s) => s.name.clone(),
            None if kind.is_strict() => {
                return Err(ElfError::SymbolSectionResolutionFailed { index: i });
            }
            None => None,
        },
    };

    Ok(Symbol {
        section,
        index,
        st_name: raw.st_name,
        name: strings
            .and_then(|t| t.get(u64::from(raw.st_name)))
            .map(str::to_owned),
        st_info: raw.st_info,
        st_other: raw.st_other,
        st_shndx: raw.st_shndx,
        section_name,
        st_value: raw.st_value,
        st_size: raw.st_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::section::SHT_STRTAB;
    use crate::classify::symbol::{STB_GLOBAL, STB_LOCAL, STT_FUNC, STT_NOTYPE};
    use crate::fixtures::{ALL_LAYOUTS, ElfBuilder, Section, StrtabBuilder, sample, sample_executable};
    use crate::header::read_file_header;
    use crate::reader::DataEncoding;
    use crate::section::read_section_headers;

    fn parse(buf: &[u8], kind: SymbolKind) -> Result<Vec<Symbol>, ElfError> {
        let reader = ElfReader::new(buf).expect("valid ident");
        let hdr = read_file_header(&reader).expect("valid header");
        let sections = read_section_headers(&reader, &hdr).expect("valid sections");
        read_symbols(&reader, &sections, kind)
    }

    /// A `.strtab` at index 1 and a `.symtab` at index 2 holding `syms`.
    fn with_symbols(
        class: ObjectClass,
        encoding: DataEncoding,
        kind: SymbolKind,
        link: u32,
        syms: &[(u8, u16)],
    ) -> Vec<u8> {
        let b = ElfBuilder::new(class, encoding);
        let mut strings = StrtabBuilder::new();
        let mut data = Vec::new();
        for (i, &(info, shndx)) in syms.iter().enumerate() {
            let name = strings.add(&format!("sym{i}"));
            data.extend(b.symbol(name, info, 0, shndx, 0x1000 + i as u64, 8));
        }
        b.section(Section::new(".strtab", SHT_STRTAB, strings.finish()))
            .section(Section::new(".symtab", kind.section_type(), data).link(link))
            .build()
    }

    #[test]
    fn sample_symbols_every_layout() {
        for (class, encoding) in ALL_LAYOUTS {
            let buf = sample_executable(class, encoding);
            let symtab = parse(&buf, SymbolKind::Symtab).expect("valid symtab");
            assert_eq!(symtab.len(), 2, "{class:?} {encoding:?}");

            let null = &symtab[0];
            assert_eq!(null.index, 0);
            assert_eq!(null.name.as_deref(), Some(""));
            assert_eq!(null.symbol_type(), STT_NOTYPE);
            assert_eq!(null.binding(), STB_LOCAL);

            let main = &symtab[1];
            assert_eq!(main.section, usize::from(sample::SYMTAB));
            assert_eq!(main.name.as_deref(), Some("main"));
            assert_eq!(main.st_info, 0x12);
            assert_eq!(main.symbol_type(), STT_FUNC);
            assert_eq!(main.binding(), STB_GLOBAL);
            assert_eq!(main.visibility(), 0);
            assert_eq!(main.st_shndx, sample::TEXT);
            assert_eq!(main.section_name.as_deref(), Some(".text"));
            assert_eq!(main.st_value, 0x0040_1000);
            assert_eq!(main.st_size, 0x2a);

            let dynsym = parse(&buf, SymbolKind::Dynsym).expect("valid dynsym");
            assert_eq!(dynsym.len(), 2);
            assert_eq!(dynsym[1].name.as_deref(), Some("puts"));
            assert_eq!(dynsym[1].st_shndx, 0);
            assert_eq!(dynsym[1].section_name, None);
        }
    }

    #[test]
    fn bad_name_offset_is_unresolved() {
        let b = ElfBuilder::new(ObjectClass::SixtyFourBit, DataEncoding::LittleEndian);
        let data = b.symbol(0x4000, 0, 0, 0, 0, 0);
        let buf = b
            .section(Section::new(".strtab", SHT_STRTAB, vec![0]))
            .section(Section::new(".symtab", SHT_SYMTAB, data).link(1))
            .build();
        let symbols = parse(&buf, SymbolKind::Symtab).unwrap();
        assert_eq!(symbols[0].st_name, 0x4000);
        assert_eq!(symbols[0].name, None);
    }

    #[test]
    fn strict_missing_string_table() {
        let buf = with_symbols(
            ObjectClass::SixtyFourBit,
            DataEncoding::LittleEndian,
            SymbolKind::Symtab,
            50,
            &[(0, 0)],
        );
        assert_eq!(
            parse(&buf, SymbolKind::Symtab),
            Err(ElfError::StringTableLookupFailed { section: 2 })
        );
    }

    #[test]
    fn lenient_missing_string_table() {
        let buf = with_symbols(
            ObjectClass::ThirtyTwoBit,
            DataEncoding::BigEndian,
            SymbolKind::Dynsym,
            50,
            &[(0, 0), (0x12, 0)],
        );
        let symbols = parse(&buf, SymbolKind::Dynsym).unwrap();
        assert_eq!(symbols.len(), 2);
        assert!(symbols.iter().all(|s| s.name.is_none()));
    }

    #[test]
    fn strict_section_resolution() {
        let buf = with_symbols(
            ObjectClass::SixtyFourBit,
            DataEncoding::BigEndian,
            SymbolKind::Symtab,
            1,
            &[(0x12, 1), (0x12, 200)],
        );
        assert_eq!(
            parse(&buf, SymbolKind::Symtab),
            Err(ElfError::SymbolSectionResolutionFailed { index: 200 })
        );
    }

    #[test]
    fn lenient_section_resolution() {
        let buf = with_symbols(
            ObjectClass::SixtyFourBit,
            DataEncoding::LittleEndian,
            SymbolKind::Dynsym,
            1,
            &[(0x12, 1), (0x12, 200), (0x11, 0xfff1)],
        );
        let symbols = parse(&buf, SymbolKind::Dynsym).unwrap();
        assert_eq!(symbols[0].section_name.as_deref(), Some(".strtab"));
        assert_eq!(symbols[0].name.as_deref(), Some("sym0"));
        assert_eq!(symbols[1].st_shndx, 200);
        assert_eq!(symbols[1].section_name, None);
        assert_eq!(symbols[2].section_name, None);
    }

    #[test]
    fn info_byte_split() {
        let buf = with_symbols(
            ObjectClass::ThirtyTwoBit,
            DataEncoding::LittleEndian,
            SymbolKind::Symtab,
            1,
            &[(0x00, 0), (0x12, 0), (0x2d, 0)],
        );
        let symbols = parse(&buf, SymbolKind::Symtab).unwrap();
        assert_eq!((symbols[0].symbol_type(), symbols[0].binding()), (0, 0));
        assert_eq!((symbols[1].symbol_type(), symbols[1].binding()), (2, 1));
        assert_eq!((symbols[2].symbol_type(), symbols[2].binding()), (0xd, 2));
    }

    #[test]
    fn reject_table_out_of_bounds() {
        let b = ElfBuilder::new(ObjectClass::SixtyFourBit, DataEncoding::LittleEndian);
        let data = b.symbol(0, 0, 0, 0, 0, 0);
        let buf = b
            .section(Section::new(".strtab", SHT_STRTAB, vec![0]))
            .section(Section::new(".symtab", SHT_SYMTAB, data).link(1).size(24 * 1000))
            .build();
        assert_eq!(
            parse(&buf, SymbolKind::Symtab),
            Err(ElfError::TruncatedTable("symbol table"))
        );
    }

    #[test]
    fn trailing_partial_entry_is_ignored() {
        let b = ElfBuilder::new(ObjectClass::SixtyFourBit, DataEncoding::LittleEndian);
        let mut data = b.symbol(0, 0, 0, 0, 0, 0);
        data.extend([0u8; 5]);
        let buf = b
            .section(Section::new(".strtab", SHT_STRTAB, vec![0]))
            .section(Section::new(".symtab", SHT_SYMTAB, data).link(1))
            .build();
        assert_eq!(parse(&buf, SymbolKind::Symtab).map(|s| s.len()), Ok(1));
    }
}
