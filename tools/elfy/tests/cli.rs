//! End-to-end tests that run the elfy binary against generated ELF files.

use std::path::Path;
use std::process::{Command, Output};

use elfy_elf::fixtures::sample_executable;
use elfy_elf::{DataEncoding, ObjectClass};
use tempfile::TempDir;

fn elfy(args: &[&str], file: Option<&Path>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_elfy"));
    cmd.args(args);
    if let Some(file) = file {
        cmd.arg(file);
    }
    cmd.output().expect("failed to execute elfy")
}

/// Write the sample executable for `class`/`encoding` into a fresh directory.
fn sample_file(class: ObjectClass, encoding: DataEncoding) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sample");
    std::fs::write(&path, sample_executable(class, encoding)).expect("write sample");
    (dir, path)
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn all_reports_for_a_dynamic_executable() {
    let (_dir, path) = sample_file(ObjectClass::SixtyFourBit, DataEncoding::LittleEndian);
    let out = elfy(&["-a"], Some(&path));
    assert!(out.status.success(), "stderr:\n{}", stderr(&out));

    let text = stdout(&out);
    assert!(text.contains("PT_LOAD"));
    assert!(text.contains("d_tag    DT_NEEDED (name of needed library)\nd_val    0x1 (libc.so)\n"));
    assert!(text.contains("STT_FUNC"));
    assert!(text.contains("STB_GLOBAL"));
    assert!(text.contains("st_name     1 (main)\n"));

    let titles = [
        "File Header",
        "Program Headers",
        "Section Headers",
        "Dynamic Section",
        "Symbol Table",
        "Dynamic Symbol Table",
    ];
    let mut last = 0;
    for title in titles {
        let at = text
            .find(&format!("{title}\n\n"))
            .unwrap_or_else(|| panic!("missing {title}"));
        assert!(at >= last, "{title} out of order");
        last = at;
    }
    assert!(text.contains("e_shstrndx       7\n\nElf_Ehdr.e_ident\n"));
    assert!(text.contains("EI_PAD           0\n\nProgram Headers\n"));
    assert!(stderr(&out).is_empty());
}

#[test]
fn every_layout_is_readable() {
    for (class, encoding) in [
        (ObjectClass::ThirtyTwoBit, DataEncoding::LittleEndian),
        (ObjectClass::ThirtyTwoBit, DataEncoding::BigEndian),
        (ObjectClass::SixtyFourBit, DataEncoding::BigEndian),
    ] {
        let (_dir, path) = sample_file(class, encoding);
        let out = elfy(&["-d", "--symtab"], Some(&path));
        assert!(out.status.success(), "{class:?} {encoding:?}: {}", stderr(&out));
        let text = stdout(&out);
        assert!(text.starts_with("Dynamic Section\n\n"));
        assert!(text.contains("(libc.so)"));
        assert!(text.contains("st_info     0x12 (STT_FUNC, STB_GLOBAL)\n"));
    }
}

#[test]
fn flag_order_does_not_change_report_order() {
    let (_dir, path) = sample_file(ObjectClass::SixtyFourBit, DataEncoding::LittleEndian);
    let out = elfy(&["--dyn-syms", "-p"], Some(&path));
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("Program Headers\n\n"));
    assert!(text.contains("p_align     0x1000\n\nDynamic Symbol Table\n\n"));
}

#[test]
fn color_mode_emits_escapes() {
    let (_dir, path) = sample_file(ObjectClass::SixtyFourBit, DataEncoding::LittleEndian);
    let plain = stdout(&elfy(&["-h"], Some(&path)));
    let colored = stdout(&elfy(&["-h", "-c"], Some(&path)));
    assert!(!plain.contains('\x1b'));
    assert!(colored.contains('\x1b'));
    assert!(colored.contains("ET_EXEC"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let (_dir, path) = sample_file(ObjectClass::SixtyFourBit, DataEncoding::LittleEndian);
    let quiet = elfy(&["-s"], Some(&path));
    let loud = elfy(&["-s", "-v"], Some(&path));
    assert!(loud.status.success());
    assert_eq!(quiet.stdout, loud.stdout);
    assert!(stderr(&loud).contains("elfy: 8 section headers"));
}

#[test]
fn no_report_flag_prints_usage() {
    let out = elfy(&[], Some(Path::new("whatever")));
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(stderr(&out).contains("Usage:"));
}

#[test]
fn missing_file_argument() {
    let out = elfy(&["-h"], None);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stderr(&out), "elfy: ELF file missing\n");
}

#[test]
fn unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent");
    let out = elfy(&["-h"], Some(&path));
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(
        stderr(&out),
        format!(
            "elfy: cannot open {}: I/O error: entity not found\n",
            path.display()
        )
    );
}

#[test]
fn not_an_elf_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script.sh");
    std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    let out = elfy(&["-h"], Some(&path));
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(
        stderr(&out),
        format!("elfy: cannot parse {}: not an ELF object\n", path.display())
    );
}

#[test]
fn failing_section_does_not_print_partially() {
    let (_dir, path) = sample_file(ObjectClass::SixtyFourBit, DataEncoding::LittleEndian);
    // Chop off the section header table.
    let mut data = std::fs::read(&path).unwrap();
    data.truncate(data.len() - 10);
    std::fs::write(&path, data).unwrap();

    let out = elfy(&["-p", "-s"], Some(&path));
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.starts_with("Program Headers\n\n"));
    assert!(!text.contains("Section Headers"));
    assert_eq!(
        stderr(&out),
        "elfy: failed to read section headers: section header table exceeds file bounds\n"
    );
}

#[test]
fn help_and_version() {
    let help = elfy(&["--help"], None);
    assert!(help.status.success());
    assert!(stdout(&help).contains("--dyn-syms"));

    let version = elfy(&["-V"], None);
    assert!(version.status.success());
    assert!(stdout(&version).starts_with("elfy "));
}
