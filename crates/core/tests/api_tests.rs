//! Library API integration tests
use std::fs;
use std::path::PathBuf;

use scriptura_core::*;
use tempfile::TempDir;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn get_book_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/books/{}", name)
}

fn book_names(bible: &Bible) -> Vec<&str> {
    bible.books().iter().map(Book::name).collect()
}

#[test]
fn test_convert_directory_in_canonical_order() {
    let bible = convert_path(get_fixture_path("books")).expect("should convert");

    assert_eq!(book_names(&bible), vec!["Mateo", "lucas", "1 Juan"]);
    assert!(bible.book("Genesis").is_none());
}

#[test]
fn test_parse_book_file_fixture() {
    let book = parse_book_file(get_book_fixture_path("lucas.html").as_ref(), &ConverterConfig::default())
        .expect("should parse");

    assert_eq!(book.name(), "lucas");
    assert_eq!(book.chapter_numbers(), vec![1, 2]);

    let first = book.chapter(1).unwrap();
    assert_eq!(first.verse_numbers(), vec![1, 2, 3, 4]);
    assert_eq!(
        first.verse(3),
        Some(
            "me ha parecido también a mí, después de haber investigado con diligencia todas las cosas desde su origen, escribírtelas por orden, oh excelentísimo Teófilo,"
        )
    );
    assert!(first.verse(4).unwrap().starts_with("para que conozcas"));

    let second = book.chapter(2).unwrap();
    assert_eq!(second.verse_numbers(), vec![1, 2]);
    assert!(second.verse(1).unwrap().contains("Augusto César"));
    assert_eq!(second.verse(2), Some("Este primer censo se hizo siendo Cirenio gobernador de Siria."));
}

#[test]
fn test_verse_before_first_heading_is_dropped() {
    let book = parse_book_file(get_book_fixture_path("lucas.html").as_ref(), &ConverterConfig::default())
        .expect("should parse");

    let all_text: Vec<&str> = book.chapters().flat_map(|c| c.verses().map(|(_, text)| text)).collect();
    assert!(all_text.iter().all(|text| !text.contains("antes de cualquier capítulo")));
    assert!(all_text.iter().all(|text| !text.contains("mal formado")));
}

#[test]
fn test_single_chapter_book_is_flushed() {
    let book = parse_book_file(
        get_book_fixture_path("epistolas/1 Juan.html").as_ref(),
        &ConverterConfig::default(),
    )
    .expect("should parse");

    assert_eq!(book.chapter_numbers(), vec![1]);
    assert_eq!(book.chapter(1).unwrap().verse_count(), 3);
}

#[test]
fn test_chapter_gaps_survive_assembly() {
    let bible = convert_path(get_fixture_path("books")).expect("should convert");
    let mateo = bible.book("Mateo").unwrap();
    assert_eq!(mateo.chapter_numbers(), vec![1, 3]);
}

#[test]
fn test_discover_errors() {
    assert!(matches!(
        discover_inputs(get_fixture_path("missing")),
        Err(ScripturaError::NotFound(_))
    ));
    assert!(matches!(
        discover_inputs(get_fixture_path("notas.txt")),
        Err(ScripturaError::WrongFormat(_))
    ));
    assert!(matches!(
        discover_inputs(get_fixture_path("empty")),
        Err(ScripturaError::EmptyDirectory(_))
    ));
}

#[test]
fn test_single_unmatched_file_yields_empty_bible() {
    let bible = convert_path(get_book_fixture_path("Genesis.html")).expect("should convert");
    assert!(bible.is_empty());
}

#[test]
fn test_order_independent_of_enumeration() {
    let forward: Vec<PathBuf> = vec![
        get_book_fixture_path("Mateo.html").into(),
        get_book_fixture_path("lucas.html").into(),
    ];
    let reverse: Vec<PathBuf> = vec![
        get_book_fixture_path("lucas.html").into(),
        get_book_fixture_path("Mateo.html").into(),
    ];
    let config = ConverterConfig::default();

    let a = assemble_bible(&forward, &config).unwrap();
    let b = assemble_bible(&reverse, &config).unwrap();
    assert_eq!(a, b);
    assert_eq!(book_names(&a), vec!["Mateo", "lucas"]);
}

#[test]
fn test_xml_output_is_idempotent() {
    let first = render(&convert_path(get_fixture_path("books")).unwrap(), OutputFormat::Xml, 2).unwrap();
    let second = render(&convert_path(get_fixture_path("books")).unwrap(), OutputFormat::Xml, 2).unwrap();

    assert_eq!(first, second);
    assert!(first.contains("<b n=\"Mateo\">"));
    assert!(first.find("<b n=\"Mateo\">").unwrap() < first.find("<b n=\"lucas\">").unwrap());
    assert!(first.find("<b n=\"lucas\">").unwrap() < first.find("<b n=\"1 Juan\">").unwrap());
    assert!(!first.contains("Génesis"));
}

#[test]
fn test_every_verse_appears_once_in_xml() {
    let bible = convert_path(get_fixture_path("books")).unwrap();
    let xml = convert_to_xml(&bible, &XmlConfig { indent: 0, declaration: false }).unwrap();

    assert_eq!(xml.matches("<v ").count(), bible.verse_count());
    assert_eq!(xml.matches("<c ").count(), bible.chapter_count());
}

#[test]
fn test_custom_keyword_and_books() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("john.html"),
        "<p>The Gospel of John, Chapter 1<p>1 In the beginning was the Word.<p>Chapter 2<p>1 And the third day",
    )
    .unwrap();

    let config = ConverterConfig::builder()
        .chapter_keyword("chapter")
        .canonical_books(["Matthew", "John"])
        .build();
    let bible = BibleAssembler::with_config(config).convert(tmp.path()).unwrap();

    let john = bible.book("john").unwrap();
    assert_eq!(john.chapter_numbers(), vec![1, 2]);
    assert_eq!(john.chapter(1).unwrap().verse(1), Some("In the beginning was the Word."));
}

#[test]
fn test_order_parsed_books() {
    let config = ConverterConfig::default();
    let books = vec![
        parse_book("Romanos", "<p>capítulo 1<p>1 Pablo, siervo de Jesucristo", &config),
        parse_book("Hechos", "<p>capítulo 1<p>1 En el primer tratado", &config),
    ];

    let bible = BibleAssembler::new().order_books(books);
    assert_eq!(book_names(&bible), vec!["Hechos", "Romanos"]);
}

#[cfg(feature = "json")]
#[test]
fn test_json_feature() {
    let bible = convert_path(get_fixture_path("books")).unwrap();
    let json = render(&bible, OutputFormat::Json, 0).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["books"][0]["name"], "Mateo");
    assert_eq!(value["books"].as_array().unwrap().len(), 3);
}
