use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;

use crate::pipeline::{FilterSelection, DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_CAP};
use crate::source::{self, DatasetSource, HttpSettings, SourceError};
use crate::state::{AppState, Event};

#[derive(Clone, Debug)]
pub struct Options {
    pub source: DatasetSource,
    pub selection: FilterSelection,
    pub page: usize,
    pub page_size: usize,
    pub window_cap: usize,
    pub timeout_seconds: Option<u64>,
    pub proxy: Option<String>,
    pub use_system_proxy: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source: DatasetSource::default(),
            selection: FilterSelection::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            window_cap: DEFAULT_WINDOW_CAP,
            timeout_seconds: None,
            proxy: None,
            use_system_proxy: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("invalid page_size {value}, expected positive integer")]
    InvalidPageSize { value: usize },

    #[error("invalid window_cap {value}, expected positive integer")]
    InvalidWindowCap { value: usize },

    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    #[error("dataset file path is empty")]
    EmptyFilePath,
}

#[derive(Debug)]
pub struct BrowseResult {
    pub state: AppState,
    pub elapsed: Duration,
    /// Set when the dataset could not be loaded; `state` is then still loading.
    pub load_error: Option<SourceError>,
}

#[derive(Clone, Debug)]
pub struct Runner {
    options: Options,
}

impl Runner {
    pub fn new(options: Options) -> Result<Self, RunnerError> {
        if options.page_size == 0 {
            return Err(RunnerError::InvalidPageSize {
                value: options.page_size,
            });
        }
        if options.window_cap == 0 {
            return Err(RunnerError::InvalidWindowCap {
                value: options.window_cap,
            });
        }
        match &options.source {
            DatasetSource::Http(url) => {
                if reqwest::Url::parse(url).is_err() {
                    return Err(RunnerError::InvalidUrl { url: url.clone() });
                }
            }
            DatasetSource::FilePath(path) => {
                if path.trim().is_empty() {
                    return Err(RunnerError::EmptyFilePath);
                }
            }
            DatasetSource::Inline(_) => {}
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            timeout_seconds: self.options.timeout_seconds,
            proxy: self.options.proxy.clone(),
            use_system_proxy: self.options.use_system_proxy,
        }
    }

    /// Loads the dataset once and returns the state with the initial
    /// selection committed and the requested page applied.
    ///
    /// A load failure is logged and reported in [`BrowseResult::load_error`];
    /// it never fails the run.
    pub async fn run(&self) -> BrowseResult {
        let started_at = Instant::now();
        let state = AppState::new(self.options.page_size, self.options.window_cap);

        log::info!("loading emojis from {}", self.options.source.describe());
        let (load_event, load_error) =
            match source::load(&self.options.source, &self.http_settings()).await {
                Ok(records) => {
                    log::info!("loaded {} emojis", records.len());
                    (Event::DatasetLoaded(records), None)
                }
                Err(e) => {
                    log::error!("error fetching emojis: {e}");
                    (Event::LoadFailed(e.to_string()), Some(e))
                }
            };

        let state = state.apply_all([
            load_event,
            Event::SelectGroup(self.options.selection.group.clone()),
            Event::SelectCategory(self.options.selection.category.clone()),
            Event::Submit,
            Event::GoToPage(self.options.page),
        ]);

        BrowseResult {
            state,
            elapsed: started_at.elapsed(),
            load_error,
        }
    }
}
