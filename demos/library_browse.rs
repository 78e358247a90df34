use emojihub::pipeline::FilterSelection;
use emojihub::runner::{Options, Runner};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(Options {
        selection: FilterSelection::new(Some("face positive".to_string()), None),
        page_size: 5,
        timeout_seconds: Some(10),
        ..Options::default()
    })?;
    let result = runner.run().await;
    if let Some(e) = result.load_error.as_ref() {
        eprintln!("load failed: {e}");
    }

    let view = result.state.view();
    println!("Matches: {} of {}", view.matched, view.dataset_len);
    for r in view.page.items.iter() {
        println!("{} {} ({})", r.glyph(), r.name, r.category);
    }
    println!("Pages: {:?}", view.page.window);

    Ok(())
}
