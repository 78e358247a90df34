use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::model::EmojiRecord;
use crate::pipeline::{self, FilterSelection};
use crate::runner::{Options, Runner, RunnerError};
use crate::source::{DatasetSource, SourceError};
use crate::state::{AppState, Event, LoadStatus};

const SAMPLE_JSON: &str = r#"[
  {"name":"grinning face","category":"smileys and people","group":"face positive","htmlCode":["&#128512;"],"unicode":["U+1F600"]},
  {"name":"dog face","category":"animals and nature","group":"animal mammal","htmlCode":["&#128054;"],"unicode":["U+1F436"]},
  {"name":"beaming face","category":"smileys and people","group":"face positive","htmlCode":["&#128513;"],"unicode":["U+1F601"]}
]"#;

fn three_records() -> Vec<EmojiRecord> {
    vec![
        EmojiRecord::new("grinning", "smileys", "face", &["U+1F600"]),
        EmojiRecord::new("dog", "animals", "animal", &["U+1F436"]),
        EmojiRecord::new("beaming", "smileys", "face", &["U+1F601"]),
    ]
}

async fn serve_once(status_line: &'static str, body: String) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });
    format!("http://{addr}/api/all")
}

fn http_options(url: String) -> Options {
    Options {
        source: DatasetSource::Http(url),
        timeout_seconds: Some(5),
        use_system_proxy: false,
        ..Options::default()
    }
}

#[test]
fn end_to_end_group_selection() {
    let records = three_records();
    let vocab = pipeline::extract_options(&records);
    assert_eq!(vocab.groups.len(), 2);
    assert_eq!(vocab.groups, vec!["face", "animal"]);

    let state = AppState::default()
        .apply(Event::DatasetLoaded(records))
        .apply(Event::SelectGroup(Some("face".to_string())))
        .apply(Event::Submit);
    let view = state.view();
    let names: Vec<_> = view.page.items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["grinning", "beaming"]);
}

#[test]
fn twenty_five_matches_make_three_pages() {
    let records: Vec<EmojiRecord> = (0..25)
        .map(|i| EmojiRecord::new(&format!("e{i}"), "c", "g", &["U+1F600"]))
        .collect();
    let filtered = pipeline::apply_filter(&records, &FilterSelection::default());
    let page = pipeline::paginate(&filtered, 1, 10, 10);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total_pages(), 3);
}

#[test]
fn window_last_branch_for_page_fifteen_of_twenty() {
    let window: Vec<usize> = pipeline::page_window(15, 20, 10).collect();
    assert_eq!(window, (11..=20).collect::<Vec<_>>());
}

#[test]
fn vocabulary_covers_every_value() {
    let records = crate::model::parse_records(SAMPLE_JSON).unwrap();
    let vocab = pipeline::extract_options(&records);
    for r in records.iter() {
        assert!(vocab.groups.contains(&r.group));
        assert!(vocab.categories.contains(&r.category));
    }
    assert_eq!(vocab.categories.len(), 2);
}

#[test]
fn glyph_contract() {
    assert_eq!(crate::glyph::display_glyph("U+1F600"), "😀");
    assert_eq!(crate::glyph::display_glyph("U+FFFFFFFF"), "");
    assert_eq!(crate::glyph::display_glyph("U+ZZ"), "");
}

#[test]
fn runner_rejects_bad_options() {
    assert!(matches!(
        Runner::new(Options {
            page_size: 0,
            ..Options::default()
        }),
        Err(RunnerError::InvalidPageSize { value: 0 })
    ));
    assert!(matches!(
        Runner::new(Options {
            window_cap: 0,
            ..Options::default()
        }),
        Err(RunnerError::InvalidWindowCap { value: 0 })
    ));
    assert!(matches!(
        Runner::new(Options {
            source: DatasetSource::Http("not a url".to_string()),
            ..Options::default()
        }),
        Err(RunnerError::InvalidUrl { .. })
    ));
    assert!(matches!(
        Runner::new(Options {
            source: DatasetSource::FilePath(" ".to_string()),
            ..Options::default()
        }),
        Err(RunnerError::EmptyFilePath)
    ));
}

#[tokio::test]
async fn runner_applies_initial_selection_and_page() {
    let records: Vec<EmojiRecord> = (0..30)
        .map(|i| {
            let group = if i < 20 { "face" } else { "animal" };
            EmojiRecord::new(&format!("e{i}"), "c", group, &["U+1F600"])
        })
        .collect();
    let runner = Runner::new(Options {
        source: DatasetSource::Inline(records),
        selection: FilterSelection::new(Some("face".to_string()), None),
        page: 9,
        page_size: 10,
        ..Options::default()
    })
    .unwrap();
    let result = runner.run().await;
    assert!(result.load_error.is_none());
    let view = result.state.view();
    assert_eq!(view.matched, 20);
    assert_eq!(view.page.state.current_page, 2);
    assert_eq!(view.page.items[0].name, "e10");
}

#[tokio::test]
async fn loads_from_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emojis.json");
    std::fs::write(&path, SAMPLE_JSON).unwrap();
    let runner = Runner::new(Options {
        source: DatasetSource::FilePath(path.to_string_lossy().to_string()),
        ..Options::default()
    })
    .unwrap();
    let result = runner.run().await;
    assert_eq!(result.state.status(), LoadStatus::Ready);
    assert_eq!(result.state.dataset().len(), 3);
    assert_eq!(result.state.dataset()[1].glyph(), "\u{1F436}");
}

#[tokio::test]
async fn missing_file_stays_loading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let runner = Runner::new(Options {
        source: DatasetSource::FilePath(path.to_string_lossy().to_string()),
        ..Options::default()
    })
    .unwrap();
    let result = runner.run().await;
    assert_eq!(result.state.status(), LoadStatus::Loading);
    assert!(matches!(result.load_error, Some(SourceError::FileRead { .. })));
    assert!(result.state.view().page.items.is_empty());
}

#[tokio::test]
async fn loads_over_http() {
    let url = serve_once("200 OK", SAMPLE_JSON.to_string()).await;
    let result = Runner::new(http_options(url)).unwrap().run().await;
    assert!(result.load_error.is_none(), "{:?}", result.load_error);
    let view = result.state.view();
    assert_eq!(view.status, LoadStatus::Ready);
    assert_eq!(view.vocabulary.groups, vec!["face positive", "animal mammal"]);
}

#[tokio::test]
async fn http_error_status_stays_loading() {
    let url = serve_once("503 Service Unavailable", "{}".to_string()).await;
    let result = Runner::new(http_options(url)).unwrap().run().await;
    assert!(matches!(
        result.load_error,
        Some(SourceError::Status { status: 503, .. })
    ));
    assert_eq!(result.state.status(), LoadStatus::Loading);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let url = serve_once("200 OK", "{\"not\":\"a list\"}".to_string()).await;
    let result = Runner::new(http_options(url)).unwrap().run().await;
    assert!(matches!(result.load_error, Some(SourceError::Decode { .. })));
    assert_eq!(result.state.status(), LoadStatus::Loading);
}

#[tokio::test]
async fn refused_connection_stays_loading() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let result = Runner::new(http_options(format!("http://{addr}/api/all")))
        .unwrap()
        .run()
        .await;
    assert!(matches!(result.load_error, Some(SourceError::Request { .. })));
    assert_eq!(result.state.status(), LoadStatus::Loading);
}
