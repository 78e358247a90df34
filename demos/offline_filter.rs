use emojihub::model::EmojiRecord;
use emojihub::output;
use emojihub::state::{AppState, Event};

fn main() {
    let records = vec![
        EmojiRecord::new("grinning face", "smileys and people", "face positive", &["U+1F600"]),
        EmojiRecord::new("dog face", "animals and nature", "animal mammal", &["U+1F436"]),
        EmojiRecord::new("cat face", "animals and nature", "animal mammal", &["U+1F431"]),
    ];

    let state = AppState::new(2, 10).apply_all([
        Event::DatasetLoaded(records),
        Event::SelectCategory(Some("animals and nature".to_string())),
        Event::Submit,
    ]);

    print!(
        "{}",
        String::from_utf8_lossy(&output::render_text(&state.view()))
    );
}
