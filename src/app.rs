use std::io::Write;
use std::time::Duration;

use clap::{error::ErrorKind, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::args::CliArgs;
use crate::cli::session::{self, Command};
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::output::{self, OutputFormat};
use crate::pipeline::{FilterSelection, DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_CAP};
use crate::runner::{Options, Runner};
use crate::source::{DatasetSource, DEFAULT_ENDPOINT};
use crate::state::{AppState, Event};

fn print_banner() {
    eprintln!(
        "{} {} {}",
        "emojihub".bold().yellow(),
        concat!("v", env!("CARGO_PKG_VERSION")).bold().white(),
        "- emoji catalogue browser".dimmed()
    );
    eprintln!();
}

fn format_kv_line(label: &str, value: &str) -> String {
    format!(":: {:<10}: {}\n", label, value)
}

#[derive(Debug, Clone)]
struct RunConfig {
    source: DatasetSource,
    timeout: Option<u64>,
    proxy: Option<String>,
    selection: FilterSelection,
    page: usize,
    page_size: usize,
    window: usize,
    output: Option<String>,
    output_format: OutputFormat,
    no_color: bool,
    verbose: u8,
    list_groups: bool,
    list_categories: bool,
    interactive: bool,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    // A CLI source replaces any source from the config file.
    let (url, input_file) = if args.url.is_some() || args.input_file.is_some() {
        (args.url, args.input_file)
    } else {
        (cfg.url, cfg.input_file)
    };
    let source = match (url, input_file) {
        (_, Some(path)) if !path.trim().is_empty() => {
            DatasetSource::FilePath(config::expand_tilde(path.trim()).to_string_lossy().to_string())
        }
        (Some(url), _) if !url.trim().is_empty() => {
            let url = url.trim().to_string();
            reqwest::Url::parse(&url).map_err(|e| format!("invalid url '{url}': {e}"))?;
            DatasetSource::Http(url)
        }
        _ => DatasetSource::Http(DEFAULT_ENDPOINT.to_string()),
    };

    let timeout = args.timeout.or(cfg.timeout).filter(|t| *t > 0);
    let proxy = args
        .proxy
        .or(cfg.proxy)
        .filter(|p| !p.trim().is_empty());

    let page_size = args.page_size.or(cfg.page_size).unwrap_or(DEFAULT_PAGE_SIZE);
    if page_size == 0 {
        return Err("invalid page_size, expected positive integer".to_string());
    }
    let window = args.window.or(cfg.window).unwrap_or(DEFAULT_WINDOW_CAP);
    if window == 0 {
        return Err("invalid window, expected positive integer".to_string());
    }
    let page = args.page.unwrap_or(1);

    let selection = FilterSelection::new(
        args.group.or(cfg.group),
        args.category.or(cfg.category),
    );

    let output = args.output.or(cfg.output).filter(|o| !o.trim().is_empty());
    let output_format = match args.output_format.or(cfg.output_format) {
        Some(raw) => OutputFormat::parse(&raw)
            .ok_or_else(|| format!("invalid output format '{raw}'"))?,
        None => output
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Text),
    };

    Ok(RunConfig {
        source,
        timeout,
        proxy,
        selection,
        page,
        page_size,
        window,
        output,
        output_format,
        no_color,
        verbose: args.verbose,
        list_groups: args.list_groups,
        list_categories: args.list_categories,
        interactive: args.interactive,
    })
}

fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_draw_target(ProgressDrawTarget::stderr());
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("fetching emojis");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

async fn write_output(path: Option<&str>, bytes: &[u8]) -> Result<(), String> {
    match path {
        Some(path) => tokio::fs::write(path, bytes)
            .await
            .map_err(|e| format!("failed to write output file {path}: {e}")),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|_| stdout.flush())
                .map_err(|e| format!("failed to write to stdout: {e}"))
        }
    }
}

/// Handles one line of an interactive session, returning the next state and
/// whether the session should end.
fn step_session(state: AppState, line: &str, out: &mut Vec<u8>) -> (AppState, bool) {
    let command = match session::parse_command(line) {
        Ok(Some(command)) => command,
        Ok(None) => return (state, false),
        Err(e) => {
            out.extend_from_slice(format!("{e}\n").as_bytes());
            return (state, false);
        }
    };
    match command {
        Command::Quit => return (state, true),
        Command::Help => out.extend_from_slice(session::HELP.as_bytes()),
        Command::Show => out.extend_from_slice(&output::render_text(&state.view())),
        Command::ListGroups => {
            out.extend_from_slice(&output::render_vocabulary(&state.view().vocabulary.groups))
        }
        Command::ListCategories => out.extend_from_slice(&output::render_vocabulary(
            &state.view().vocabulary.categories,
        )),
        Command::Apply(event) => {
            let pending_only = matches!(event, Event::SelectGroup(_) | Event::SelectCategory(_));
            let state = state.apply(event);
            if pending_only {
                let pending = state.pending();
                out.extend_from_slice(
                    format_kv_line(
                        "Pending",
                        &format!(
                            "group={} category={} (submit to apply)",
                            pending.group.as_deref().unwrap_or("-"),
                            pending.category.as_deref().unwrap_or("-")
                        ),
                    )
                    .as_bytes(),
                );
            } else {
                out.extend_from_slice(&output::render_text(&state.view()));
            }
            return (state, false);
        }
    }
    (state, false)
}

async fn run_interactive(mut state: AppState) -> Result<(), String> {
    print_banner();
    write_output(None, &output::render_text(&state.view())).await?;
    write_output(None, b"type 'help' for commands\n").await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| format!("failed to read stdin: {e}"))?
    {
        let mut out = Vec::new();
        let (next, quit) = step_session(state, &line, &mut out);
        state = next;
        write_output(None, &out).await?;
        if quit {
            break;
        }
    }
    Ok(())
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }
    crate::logging::init(run.verbose);

    let runner = Runner::new(Options {
        source: run.source.clone(),
        selection: run.selection.clone(),
        page: run.page,
        page_size: run.page_size,
        window_cap: run.window,
        timeout_seconds: run.timeout,
        proxy: run.proxy.clone(),
        use_system_proxy: true,
    })
    .map_err(|e| e.to_string())?;

    let spinner = loading_spinner();
    crate::logging::attach_progress(&spinner);
    let result = runner.run().await;
    crate::logging::detach_progress();
    spinner.finish_and_clear();
    log::info!("load finished in {}ms", result.elapsed.as_millis());

    let state = result.state;
    if run.list_groups || run.list_categories {
        let view = state.view();
        let mut out = Vec::new();
        if run.list_groups {
            out.extend_from_slice(&output::render_vocabulary(&view.vocabulary.groups));
        }
        if run.list_categories {
            out.extend_from_slice(&output::render_vocabulary(&view.vocabulary.categories));
        }
        return write_output(run.output.as_deref(), &out).await;
    }

    if run.interactive {
        return run_interactive(state).await;
    }

    let rendered = output::render(&state.view(), run.output_format);
    write_output(run.output.as_deref(), &rendered).await?;
    if let Some(path) = run.output.as_deref() {
        eprint!("{}", format_kv_line("Saved", path));
    }
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    let user_config_path = args.config.clone().map(|p| config::expand_tilde(&p));
    if args.init_config {
        let path = user_config_path
            .or_else(config::default_config_path)
            .ok_or_else(|| "could not determine a config path".to_string())?;
        config::ensure_default_config_file(&path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let cfg = match user_config_path.as_ref() {
        Some(path) => config::load_config(path, false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(run_async(run))?;
    Ok(())
}
