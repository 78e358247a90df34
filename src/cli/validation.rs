use crate::cli::args::CliArgs;
use crate::output::OutputFormat;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if args.page == Some(0) {
        return Err("invalid page, expected positive integer".to_string());
    }
    if args.page_size == Some(0) {
        return Err("invalid page-size, expected positive integer".to_string());
    }
    if args.window == Some(0) {
        return Err("invalid window, expected positive integer".to_string());
    }
    if let Some(raw) = args.output_format.as_deref() {
        if OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --format '{raw}', expected text, json, xml or html"
            ));
        }
    }
    if let Some(raw) = args.url.as_deref() {
        reqwest::Url::parse(raw).map_err(|e| format!("invalid --url '{raw}': {e}"))?;
    }
    if args.url.is_some() && args.input_file.is_some() {
        return Err("use either --url or --input-file, not both".to_string());
    }
    if args.interactive && (args.list_groups || args.list_categories) {
        return Err("--interactive cannot be combined with --list-groups/--list-categories".to_string());
    }
    Ok(())
}
