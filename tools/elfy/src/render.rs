//! Field-oriented text layout shared by every report.
//!
//! A report is a sequence of titles and `label    value (info)` lines. The
//! label column is padded to the longest label the report declares up front,
//! so every record of a section lines up regardless of which fields it
//! happens to print.

use std::fmt::{self, Display};

use crossterm::style::{Stylize, style};
use elfy_elf::classify::{Class, Constant, FlagBit, decompose};

/// Separator between a label and its value.
const TAB: &str = "    ";

/// Display options that apply to a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Wrap labels, values and titles in ANSI color sequences.
    pub color: bool,
}

/// Accumulates one report section as text.
pub struct Printer {
    color: bool,
    width: usize,
    out: String,
}

impl Printer {
    /// Create a printer whose label column fits every entry of `labels`.
    pub fn new(config: ReportConfig, labels: &[&str]) -> Self {
        Self {
            color: config.color,
            width: labels.iter().map(|l| l.len()).max().unwrap_or(0),
            out: String::new(),
        }
    }

    /// A section or record title.
    pub fn title(&mut self, title: impl Display) {
        if self.color {
            self.out.push_str(&format!("{}\n", style(title).yellow()));
        } else {
            self.out.push_str(&format!("{title}\n"));
        }
    }

    /// An empty line.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// A plain `label value` line.
    pub fn field(&mut self, label: &str, value: impl Display) {
        self.field_info(label, value, None);
    }

    /// A `label value (info)` line; the parenthetical is omitted when `info`
    /// is `None`.
    pub fn field_info(&mut self, label: &str, value: impl Display, info: Option<&str>) {
        let pad = self.width.saturating_sub(label.len());
        if self.color {
            self.out.push_str(&format!(
                "{}{TAB}{:pad$}{}",
                style(label).red(),
                "",
                style(value).green()
            ));
        } else {
            self.out.push_str(&format!("{label}{TAB}{:pad$}{value}", ""));
        }
        if let Some(info) = info {
            self.out.push_str(&format!(" ({info})"));
        }
        self.out.push('\n');
    }

    /// A field holding a classified value: the constant's name and
    /// description when named, otherwise the raw value in hex and the range
    /// label.
    pub fn classified(&mut self, label: &str, raw: u64, class: Class) {
        match class {
            Class::Named(k) => self.constant(label, k),
            other => self.field_info(label, hex(raw), other.fallback_label()),
        }
    }

    /// A field holding a named constant.
    pub fn constant(&mut self, label: &str, k: &Constant) {
        self.field_info(label, k.name, k.description());
    }

    /// A field holding a numeric value and an optional resolved name.
    ///
    /// Empty names are treated as absent.
    pub fn named(&mut self, label: &str, value: impl Display, name: Option<&str>) {
        self.field_info(label, value, name.filter(|n| !n.is_empty()));
    }

    /// The accumulated text.
    pub fn finish(self) -> String {
        self.out
    }
}

/// Alternate-form hex that prints zero as `0`.
pub fn hex(value: impl Into<u64>) -> String {
    match value.into() {
        0 => "0".to_string(),
        v => format!("{v:#x}"),
    }
}

/// A flag word as its set bits joined by ` | `, lowest first.
///
/// Bits the table does not name print as hex in place; zero prints as `0`.
pub fn flag_list(bits: u64, table: &'static [Constant]) -> String {
    if bits == 0 {
        return "0".to_string();
    }
    let mut out = String::new();
    for (i, bit) in decompose(bits, table).enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        match bit {
            FlagBit::Named(k) => out.push_str(k.name),
            FlagBit::Unknown(v) => out.push_str(&hex(v)),
        }
    }
    out
}

/// A classified value used inside another field's parenthetical: the
/// constant name, or the raw hex followed by the range label.
pub fn short_name(raw: u64, class: Class) -> String {
    match class {
        Class::Named(k) => k.name.to_string(),
        other => format!("{} {}", hex(raw), other.fallback_label().unwrap_or_default()),
    }
}

/// The 16 identification bytes as space-separated hex pairs.
pub struct IdentBytes<'a>(pub &'a [u8]);

impl Display for IdentBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elfy_elf::classify::RangeKind;
    use elfy_elf::classify::section::SECTION_FLAGS;
    use elfy_elf::classify::segment::segment_type;

    fn plain(labels: &[&str]) -> Printer {
        Printer::new(ReportConfig::default(), labels)
    }

    #[test]
    fn pads_to_longest_label() {
        let mut p = plain(&["d_tag", "d_val", "x"]);
        p.field("x", "1");
        p.field("d_val", "2");
        assert_eq!(p.finish(), "x        1\nd_val    2\n");
    }

    #[test]
    fn info_is_parenthesized() {
        let mut p = plain(&["p_type"]);
        p.classified("p_type", 1, segment_type(1));
        assert_eq!(p.finish(), "p_type    PT_LOAD (loadable program segment)\n");
    }

    #[test]
    fn unnamed_values_print_hex_and_range() {
        let mut p = plain(&["p_type"]);
        p.classified("p_type", 0x6000_0001, segment_type(0x6000_0001));
        p.classified("p_type", 0x10, segment_type(0x10));
        assert_eq!(
            p.finish(),
            "p_type    0x60000001 (OS-specific)\np_type    0x10 (unknown)\n"
        );
    }

    #[test]
    fn empty_names_are_dropped() {
        let mut p = plain(&["sh_name"]);
        p.named("sh_name", 0, Some(""));
        p.named("sh_name", 27, None);
        p.named("sh_name", 1, Some(".text"));
        assert_eq!(
            p.finish(),
            "sh_name    0\nsh_name    27\nsh_name    1 (.text)\n"
        );
    }

    #[test]
    fn titles_and_blanks() {
        let mut p = plain(&[]);
        p.title("Program Headers");
        p.blank();
        p.title(format_args!("Elf_Phdr {}", 0));
        assert_eq!(p.finish(), "Program Headers\n\nElf_Phdr 0\n");
    }

    #[test]
    fn color_wraps_label_value_and_title() {
        let mut p = Printer::new(ReportConfig { color: true }, &["e_type"]);
        p.title("Elf_Ehdr");
        p.field_info("e_type", "ET_EXEC", Some("executable file"));
        let out = p.finish();
        assert!(out.contains("\x1b["));
        assert!(out.contains("Elf_Ehdr"));
        assert!(out.contains("ET_EXEC"));
        assert!(out.ends_with(" (executable file)\n"));
    }

    #[test]
    fn hex_zero_has_no_prefix() {
        assert_eq!(hex(0u64), "0");
        assert_eq!(hex(0x1000u32), "0x1000");
        assert_eq!(hex(0x7fu8), "0x7f");
    }

    #[test]
    fn flag_lists() {
        assert_eq!(flag_list(0, SECTION_FLAGS), "0");
        assert_eq!(flag_list(0x6, SECTION_FLAGS), "SHF_ALLOC | SHF_EXECINSTR");
        assert_eq!(
            flag_list(0x1003, SECTION_FLAGS),
            "SHF_WRITE | SHF_ALLOC | 0x1000"
        );
    }

    #[test]
    fn short_names() {
        assert_eq!(short_name(2, segment_type(2)), "PT_DYNAMIC");
        assert_eq!(
            short_name(0xa, Class::Range(RangeKind::Os)),
            "0xa OS-specific"
        );
        assert_eq!(short_name(7, Class::Unknown), "0x7 unknown");
    }

    #[test]
    fn ident_bytes() {
        let ident = [0x7f, b'E', b'L', b'F', 2, 1, 1, 0];
        assert_eq!(IdentBytes(&ident).to_string(), "7f 45 4c 46 02 01 01 00");
    }
}
