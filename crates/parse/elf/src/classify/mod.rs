//! Symbolic names for the numeric constants found in ELF structures.
//!
//! Every domain (machine, section type, dynamic tag, ...) is a static table of
//! [`Constant`]s sorted by value and searched with a binary search. Values
//! missing from a table are classified by a per-domain range function into
//! the reserved OS, processor, or application ranges.

pub mod dynamic;
pub mod ident;
pub mod machine;
pub mod section;
pub mod segment;
pub mod symbol;

/// A named value and its one-line description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant {
    /// Numeric value as stored in the file.
    pub value: u64,
    /// Symbolic name, e.g. `"PT_LOAD"`.
    pub name: &'static str,
    /// Human-readable description. Empty when the name stands alone.
    pub description: &'static str,
}

impl Constant {
    /// Description, or `None` if this constant has none.
    #[must_use]
    pub fn description(&self) -> Option<&'static str> {
        (!self.description.is_empty()).then_some(self.description)
    }
}

/// Shorthand for table entries.
pub(crate) const fn c(value: u64, name: &'static str, description: &'static str) -> Constant {
    Constant {
        value,
        name,
        description,
    }
}

/// Find `value` in a table sorted by value.
#[must_use]
pub fn lookup(table: &'static [Constant], value: u64) -> Option<&'static Constant> {
    table
        .binary_search_by_key(&value, |k| k.value)
        .ok()
        .map(|i| &table[i])
}

/// A reserved value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    /// Reserved for operating system semantics.
    Os,
    /// Reserved for processor-specific semantics.
    Processor,
    /// Reserved for application programs.
    Application,
    /// Reserved section indices (`SHN_LORESERVE` and above).
    ReservedIndices,
}

impl RangeKind {
    /// Label printed after the raw value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Os => "OS-specific",
            Self::Processor => "processor-specific",
            Self::Application => "application-specific",
            Self::ReservedIndices => "reserved indices",
        }
    }
}

/// Result of classifying a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// The value has a name.
    Named(&'static Constant),
    /// The value falls in a reserved range.
    Range(RangeKind),
    /// Neither named nor reserved.
    Unknown,
}

impl Class {
    /// Look `value` up in `table`, falling back to `ranges`.
    #[must_use]
    pub fn of(
        table: &'static [Constant],
        value: u64,
        ranges: impl FnOnce(u64) -> Option<RangeKind>,
    ) -> Self {
        match lookup(table, value) {
            Some(k) => Self::Named(k),
            None => ranges(value).map_or(Self::Unknown, Self::Range),
        }
    }

    /// The constant, if the value is named.
    #[must_use]
    pub fn constant(self) -> Option<&'static Constant> {
        match self {
            Self::Named(k) => Some(k),
            Self::Range(_) | Self::Unknown => None,
        }
    }

    /// Label for an unnamed value: the range label or `"unknown"`.
    #[must_use]
    pub fn fallback_label(self) -> Option<&'static str> {
        match self {
            Self::Named(_) => None,
            Self::Range(kind) => Some(kind.label()),
            Self::Unknown => Some("unknown"),
        }
    }
}

/// One bit of a decomposed flag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagBit {
    /// A bit with a name in the table.
    Named(&'static Constant),
    /// A set bit the table does not name.
    Unknown(u64),
}

/// Split `bits` into its set bits, lowest first, naming each from `table`.
///
/// A zero word yields nothing; callers print `0` in that case.
pub fn decompose(bits: u64, table: &'static [Constant]) -> impl Iterator<Item = FlagBit> {
    let mut rest = bits;
    core::iter::from_fn(move || {
        if rest == 0 {
            return None;
        }
        let bit = rest & rest.wrapping_neg();
        rest &= !bit;
        Some(lookup(table, bit).map_or(FlagBit::Unknown(bit), FlagBit::Named))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: &[Constant] = &[c(1, "F_ONE", ""), c(4, "F_FOUR", ""), c(0x100, "F_HIGH", "")];

    fn names(bits: u64) -> Vec<String> {
        decompose(bits, TABLE)
            .map(|b| match b {
                FlagBit::Named(k) => k.name.to_string(),
                FlagBit::Unknown(v) => format!("{v:#x}"),
            })
            .collect()
    }

    #[test]
    fn decompose_ascending_with_unknown_bits_in_place() {
        assert_eq!(names(0x107), ["F_ONE", "0x2", "F_FOUR", "F_HIGH"]);
        assert_eq!(names(0x8000_0000_0000_0001), ["F_ONE", "0x8000000000000000"]);
    }

    #[test]
    fn decompose_zero_is_empty() {
        assert_eq!(decompose(0, TABLE).count(), 0);
    }

    #[test]
    fn decompose_is_deterministic() {
        assert_eq!(names(0x105), names(0x105));
    }

    #[test]
    fn class_lookup_and_fallback() {
        let ranges = |v: u64| (v >= 0x1000).then_some(RangeKind::Processor);
        assert_eq!(Class::of(TABLE, 4, ranges).constant().map(|k| k.name), Some("F_FOUR"));
        assert_eq!(Class::of(TABLE, 0x2000, ranges), Class::Range(RangeKind::Processor));
        assert_eq!(Class::of(TABLE, 3, ranges), Class::Unknown);
        assert_eq!(Class::Unknown.fallback_label(), Some("unknown"));
        assert_eq!(
            Class::Range(RangeKind::Os).fallback_label(),
            Some("OS-specific")
        );
    }

    #[test]
    fn empty_description_is_none() {
        assert_eq!(TABLE[0].description(), None);
        assert_eq!(c(0, "X", "x").description(), Some("x"));
    }

    #[test]
    fn tables_are_strictly_sorted() {
        let tables: &[(&str, &[Constant])] = &[
            ("class", ident::CLASSES),
            ("data", ident::ENCODINGS),
            ("version", ident::VERSIONS),
            ("osabi", ident::OS_ABIS),
            ("e_type", ident::FILE_TYPES),
            ("e_machine", machine::MACHINES),
            ("p_type", segment::SEGMENT_TYPES),
            ("p_flags", segment::SEGMENT_FLAGS),
            ("sh_type", section::SECTION_TYPES),
            ("sh_flags", section::SECTION_FLAGS),
            ("d_tag", dynamic::DYNAMIC_TAGS),
            ("DF", dynamic::DF_FLAGS),
            ("DF_1", dynamic::DF_1_FLAGS),
            ("DTF_1", dynamic::DTF_1_FLAGS),
            ("STT", symbol::SYMBOL_TYPES),
            ("STB", symbol::SYMBOL_BINDINGS),
            ("STV", symbol::VISIBILITIES),
            ("SHN", symbol::SPECIAL_SECTIONS),
        ];
        for (domain, table) in tables {
            for pair in table.windows(2) {
                assert!(
                    pair[0].value < pair[1].value,
                    "{domain}: {} not before {}",
                    pair[0].name,
                    pair[1].name
                );
            }
        }
    }

    #[test]
    fn flag_tables_hold_single_bits() {
        for table in [
            section::SECTION_FLAGS,
            dynamic::DF_FLAGS,
            dynamic::DF_1_FLAGS,
            dynamic::DTF_1_FLAGS,
        ] {
            for k in table {
                assert!(k.value.is_power_of_two(), "{} is not a single bit", k.name);
            }
        }
    }
}
