//! Section header table and string table parsing.
//!
//! Section names are resolved eagerly through the section name string table.
//! A name that cannot be resolved is left as `None`; the section header
//! report prints the raw `sh_name` offset in that case.

use crate::classify::section::SHT_NOBITS;
use crate::error::ElfError;
use crate::header::{FileHeader, section_header_count, section_name_index};
use crate::reader::{Cursor, ElfReader};

/// Parsed section header, widened to 64-bit fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    /// Position in the section header table.
    pub index: usize,
    /// Offset of the name in the section name string table.
    pub sh_name: u32,
    /// Resolved name, `None` if the lookup failed.
    pub name: Option<String>,
    /// Section type.
    pub sh_type: u32,
    /// Section flags (`SHF_*` bits).
    pub sh_flags: u64,
    /// Virtual address at execution.
    pub sh_addr: u64,
    /// File offset of the section contents.
    pub sh_offset: u64,
    /// Size of the section contents in bytes.
    pub sh_size: u64,
    /// Index of a related section; meaning depends on the type.
    pub sh_link: u32,
    /// Extra information; meaning depends on the type.
    pub sh_info: u32,
    /// Required alignment.
    pub sh_addralign: u64,
    /// Entry size for sections holding fixed-size tables, else 0.
    pub sh_entsize: u64,
}

impl SectionHeader {
    /// Resolved name, or `""` if the lookup failed.
    #[must_use]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// A view over a NUL-terminated string table section.
#[derive(Debug, Clone, Copy)]
pub struct StringTable<'a> {
    data: &'a [u8],
}

impl<'a> StringTable<'a> {
    /// Creates a new string table from the raw section data.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Looks up a NUL-terminated string at the given byte offset.
    ///
    /// Returns `None` if the offset is out of bounds, the string is not
    /// terminated inside the table, or it is not valid UTF-8.
    #[must_use]
    pub fn get(&self, offset: u64) -> Option<&'a str> {
        let start = usize::try_from(offset).ok()?;
        let remaining = self.data.get(start..)?;
        let nul_pos = remaining.iter().position(|&b| b == 0)?;
        core::str::from_utf8(&remaining[..nul_pos]).ok()
    }
}

/// Decode the section header at `index` without resolving its name.
pub(crate) fn section_entry(reader: &ElfReader<'_>, shoff: u64, index: u64) -> Option<SectionHeader> {
    let size = reader.class().section_header_size();
    let offset = index.checked_mul(size)?.checked_add(shoff)?;
    let entry = reader.slice(offset, size)?;
    decode(entry, usize::try_from(index).ok()?)
}

fn decode(entry: ElfReader<'_>, index: usize) -> Option<SectionHeader> {
    let mut c = Cursor::new(entry, 0);
    Some(SectionHeader {
        index,
        sh_name: c.u32()?,
        name: None,
        sh_type: c.u32()?,
        sh_flags: c.word()?,
        sh_addr: c.word()?,
        sh_offset: c.word()?,
        sh_size: c.word()?,
        sh_link: c.u32()?,
        sh_info: c.u32()?,
        sh_addralign: c.word()?,
        sh_entsize: c.word()?,
    })
}

/// Parse the section header table and resolve every section name.
///
/// # Errors
///
/// [`ElfError::TruncatedTable`] if the table does not fit in the file, and the
/// extended-count errors of [`section_header_count`].
pub fn read_section_headers(
    reader: &ElfReader<'_>,
    header: &FileHeader,
) -> Result<Vec<SectionHeader>, ElfError> {
    let count = section_header_count(reader, header)?;
    if count == 0 {
        return Ok(Vec::new());
    }

    let size = reader.class().section_header_size();
    let table = reader
        .table(header.e_shoff, count, size)
        .ok_or(ElfError::TruncatedTable("section header"))?;

    let mut sections = Vec::new();
    let mut offset = 0;
    while offset < table.len() {
        let entry = table
            .slice(offset, size)
            .and_then(|e| decode(e, sections.len()))
            .ok_or(ElfError::TruncatedTable("section header"))?;
        sections.push(entry);
        offset += size;
    }

    let shstrndx = section_name_index(reader, header)?;
    let names = string_table(reader, &sections, shstrndx);
    for s in &mut sections {
        s.name = names.and_then(|t| t.get(u64::from(s.sh_name))).map(str::to_owned);
    }

    Ok(sections)
}

/// Bounds-checked contents of a section. `SHT_NOBITS` sections are empty.
#[must_use]
pub fn section_data<'a>(reader: &ElfReader<'a>, section: &SectionHeader) -> Option<&'a [u8]> {
    if section.sh_type == SHT_NOBITS {
        return Some(&[]);
    }
    reader.bytes_at(section.sh_offset, section.sh_size)
}

/// The string table stored in the section at `index`, if that section exists
/// and its contents lie inside the file. The section type is not checked.
#[must_use]
pub fn string_table<'a>(
    reader: &ElfReader<'a>,
    sections: &[SectionHeader],
    index: u64,
) -> Option<StringTable<'a>> {
    let section = sections.get(usize::try_from(index).ok()?)?;
    section_data(reader, section).map(StringTable::new)
}
