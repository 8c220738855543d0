// tests/integration/end_to_end.rs
use zx_tablegen::app::render;
use zx_tablegen::config::{AiInfosConfigBuilder, IswgraphConfigBuilder, RunConfig};
use zx_tablegen_infra::Source;
use zx_tablegen_shared_kernel::TableGenError;

#[path = "../common/mod.rs"]
mod common;
use common::{DICTIONARY, DICTIONARY_TABLE, UNICODE_DATA, write_source};

fn ai_infos(path: &std::path::Path) -> RunConfig {
    RunConfig::AiInfos(
        AiInfosConfigBuilder::default()
            .source(Source::Path(path.to_path_buf()))
            .build()
            .unwrap(),
    )
}

fn iswgraph(path: &std::path::Path) -> RunConfig {
    RunConfig::Iswgraph(
        IswgraphConfigBuilder::default()
            .source(Source::Path(path.to_path_buf()))
            .build()
            .unwrap(),
    )
}

#[test]
fn dictionary_renders_full_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "gs1-syntax-dictionary.txt", DICTIONARY);
    assert_eq!(render(&ai_infos(&path)).unwrap(), DICTIONARY_TABLE);
}

#[test]
fn crlf_dictionary_renders_the_same() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "crlf.txt", &DICTIONARY.replace('\n', "\r\n"));
    assert_eq!(render(&ai_infos(&path)).unwrap(), DICTIONARY_TABLE);
}

#[test]
fn two_digit_range_expands_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "tiny.txt", "00  N2\n01-05  N1\n");
    let table = render(&ai_infos(&path)).unwrap();
    let entries: Vec<&str> = table.lines().filter(|line| line.starts_with('\t')).collect();
    assert_eq!(
        entries,
        vec![
            "\t{ \"00\", 2 },",
            "\t{ \"01\", 1 },",
            "\t{ \"02\", 1 },",
            "\t{ \"03\", 1 },",
            "\t{ \"04\", 1 },",
            "\t{ \"05\", 1 },",
        ]
    );
    assert!(table.contains("WARNING: tag not set!"));
}

#[test]
fn unparseable_line_reports_number() {
    let dir = tempfile::tempdir().unwrap();
    let broken = DICTIONARY.replace("4300      X..35", "4300      Q..35");
    let path = write_source(dir.path(), "broken.txt", &broken);
    let err = render(&ai_infos(&path)).unwrap_err();
    assert_eq!(err.line_no(), Some(11));
    assert!(err.to_string().contains("4300      Q..35"));
}

#[test]
fn unicode_data_renders_tables_and_conditions() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "UnicodeData.txt", UNICODE_DATA);
    let text = render(&iswgraph(&path)).unwrap();

    assert!(text.starts_with(
        "\t// Begin copy/paste of `zx_iswgraph()` tables output from \"zx-tablegen iswgraph\"\n\
         \t/* Unicode 15.0.0 */\n\
         \tstatic const unsigned char zx_graph_bmp[193] = {\n\
         \t\t0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, /*0040*/\n\
         \t\t0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, /*0080*/\n"
    ));
    assert!(text.contains("\t\t0x41, /*0607*/\n\t};\n\tstatic const unsigned char zx_graph_1[536] = {\n"));
    assert!(text.contains("\t\t0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, /*10BE*/\n\t};\n"));
    assert!(text.ends_with(
        "\t// Begin copy/paste of `zx_iswgraph()` if conditions output from \"zx-tablegen iswgraph\"\n\
         \tif (u <= 0x2FFFF) {\n\
         \t\treturn (u >= 0x20000 && u <= 0x2A6DF) || (u >= 0x2A700 && u <= 0x2B739);\n\
         \t}\n\
         \tif (u <= 0x3FFFF) {\n\
         \t\treturn (u >= 0x30000 && u <= 0x3134A);\n\
         \t}\n\
         \tif (u <= 0xEFFFF) {\n\
         \t\treturn u == 0xE0100 || u == 0xE01EF;\n\
         \t}\n\
         \t// End copy/paste of `zx_iswgraph()` if conditions output from \"zx-tablegen iswgraph\"\n"
    ));
}

#[test]
fn unicode_data_missing_a_plane_fails() {
    let dir = tempfile::tempdir().unwrap();
    let without_plane_3: String = UNICODE_DATA
        .lines()
        .filter(|line| !line.starts_with('3'))
        .map(|line| format!("{line}\n"))
        .collect();
    let path = write_source(dir.path(), "UnicodeData.txt", &without_plane_3);
    let err = render(&iswgraph(&path)).unwrap_err();
    assert!(err.to_string().contains("plane-layout"));
}

#[test]
fn missing_source_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = render(&iswgraph(&dir.path().join("nope.txt"))).unwrap_err();
    assert!(matches!(err, TableGenError::SourceUnavailable { .. }));
}
