//! Dynamic section parsing.
//!
//! Each `SHT_DYNAMIC` section is read up to and including its first `DT_NULL`
//! entry. Values are interpreted per tag: string table offsets are resolved
//! through the section's `sh_link` string table, flag words keep a reference
//! to the table they decompose against.

use crate::classify::Constant;
use crate::classify::dynamic::{DT_NULL, ValueKind, value_kind};
use crate::classify::section::SHT_DYNAMIC;
use crate::error::ElfError;
use crate::reader::{Cursor, ElfReader};
use crate::section::{SectionHeader, string_table};

/// Interpreted `d_un` of a dynamic entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynamicValue {
    /// Address or opaque word.
    Address(u64),
    /// Byte size or element count.
    Count(u64),
    /// Flag word and the table naming its bits.
    Flags {
        /// Raw flag word.
        bits: u64,
        /// Names for the individual bits.
        table: &'static [Constant],
    },
    /// String table offset and the string it resolves to.
    Name {
        /// Offset into the linked string table.
        offset: u64,
        /// Resolved string, `None` if the lookup failed.
        name: Option<String>,
    },
}

impl DynamicValue {
    /// The raw `d_val` word.
    #[must_use]
    pub fn raw(&self) -> u64 {
        match *self {
            Self::Address(v) | Self::Count(v) => v,
            Self::Flags { bits, .. } => bits,
            Self::Name { offset, .. } => offset,
        }
    }
}

/// One `Elf_Dyn` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicEntry {
    /// Index of the `SHT_DYNAMIC` section holding this entry.
    pub section: usize,
    /// Position within that section.
    pub index: usize,
    /// Raw `d_tag`.
    pub tag: u64,
    /// Interpreted value.
    pub value: DynamicValue,
}

/// Parse every `SHT_DYNAMIC` section, in section order.
///
/// # Errors
///
/// [`ElfError::TruncatedTable`] if a section's size is not a multiple of the
/// entry size or its contents lie outside the file.
pub fn read_dynamic_entries(
    reader: &ElfReader<'_>,
    sections: &[SectionHeader],
) -> Result<Vec<DynamicEntry>, ElfError> {
    let mut entries = Vec::new();
    for section in sections.iter().filter(|s| s.sh_type == SHT_DYNAMIC) {
        read_section(reader, sections, section, &mut entries)?;
    }
    Ok(entries)
}

fn read_section(
    reader: &ElfReader<'_>,
    sections: &[SectionHeader],
    section: &SectionHeader,
    out: &mut Vec<DynamicEntry>,
) -> Result<(), ElfError> {
    let size = reader.class().dynamic_entry_size();
    if section.sh_size % size != 0 {
        return Err(ElfError::TruncatedTable("dynamic section"));
    }
    let data = reader
        .slice(section.sh_offset, section.sh_size)
        .ok_or(ElfError::TruncatedTable("dynamic section"))?;
    let strings = string_table(reader, sections, u64::from(section.sh_link));

    let mut c = Cursor::new(data, 0);
    let mut index = 0;
    while c.position() < data.len() {
        let (Some(tag), Some(val)) = (c.word(), c.word()) else {
            return Err(ElfError::TruncatedTable("dynamic section"));
        };

        let value = match value_kind(tag) {
            ValueKind::Address => DynamicValue::Address(val),
            ValueKind::Count => DynamicValue::Count(val),
            ValueKind::Flags(table) => DynamicValue::Flags { bits: val, table },
            ValueKind::Name => DynamicValue::Name {
                offset: val,
                name: strings.and_then(|t| t.get(val)).map(str::to_owned),
            },
        };
        out.push(DynamicEntry {
            section: section.index,
            index,
            tag,
            value,
        });
        index += 1;

        if tag == DT_NULL {
            break;
        }
    }
    Ok(())
}
