use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "emojihub",
    version,
    about = "browse, filter and paginate the EmojiHub catalogue",
    long_about = "EmojiHub fetches the full emoji list once, derives the available groups and categories, and renders the matching emojis page by page.\n\nExamples:\n  emojihub\n  emojihub -g \"face positive\" -p 2\n  emojihub -k \"animals and nature\" -f html -o animals.html\n  emojihub --list-groups\n  emojihub --interactive\n\nTip: Use --config to persist settings and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the rendered page to a file instead of stdout."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'f',
        long = "fmt",
        visible_alias = "format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format: text, json, xml, html (inferred from --output when omitted)."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'u',
        long = "u",
        visible_alias = "url",
        value_name = "URL",
        help_heading = "Input",
        help = "Emoji API endpoint returning the full list."
    )]
    pub url: Option<String>,

    #[arg(
        short = 'i',
        long = "if",
        visible_alias = "input-file",
        value_name = "FILE",
        help_heading = "Input",
        help = "Load the emoji list from a local JSON file instead of the API."
    )]
    pub input_file: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.emojihub/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "ic",
        visible_alias = "init-config",
        help_heading = "Input",
        help = "Write a default config file (if missing) and exit."
    )]
    pub init_config: bool,

    #[arg(
        long = "to",
        visible_alias = "timeout",
        value_name = "SECONDS",
        help_heading = "HTTP",
        help = "Request timeout in seconds (0 or unset waits indefinitely)."
    )]
    pub timeout: Option<u64>,

    #[arg(
        short = 'x',
        long = "px",
        visible_alias = "proxy",
        value_name = "URL",
        help_heading = "HTTP",
        help = "Proxy URL for the API request."
    )]
    pub proxy: Option<String>,

    #[arg(
        short = 'g',
        long = "grp",
        visible_alias = "group",
        value_name = "NAME",
        help_heading = "Filters",
        help = "Only show emojis in this group."
    )]
    pub group: Option<String>,

    #[arg(
        short = 'k',
        long = "cat",
        visible_alias = "category",
        value_name = "NAME",
        help_heading = "Filters",
        help = "Only show emojis in this category (combines with --group)."
    )]
    pub category: Option<String>,

    #[arg(
        long = "lg",
        visible_alias = "list-groups",
        help_heading = "Filters",
        help = "Print the available groups and exit."
    )]
    pub list_groups: bool,

    #[arg(
        long = "lc",
        visible_alias = "list-categories",
        help_heading = "Filters",
        help = "Print the available categories and exit."
    )]
    pub list_categories: bool,

    #[arg(
        short = 'p',
        long = "pg",
        visible_alias = "page",
        value_name = "N",
        help_heading = "Pagination",
        help = "Page to show (clamped to the available pages)."
    )]
    pub page: Option<usize>,

    #[arg(
        short = 's',
        long = "ps",
        visible_alias = "page-size",
        value_name = "N",
        help_heading = "Pagination",
        help = "Emojis per page."
    )]
    pub page_size: Option<usize>,

    #[arg(
        short = 'w',
        long = "win",
        visible_alias = "window",
        value_name = "N",
        help_heading = "Pagination",
        help = "Maximum number of page links shown in the navigation bar."
    )]
    pub window: Option<usize>,

    #[arg(
        short = 'I',
        long = "it",
        visible_alias = "interactive",
        help_heading = "Session",
        help = "Read filter and navigation commands from stdin."
    )]
    pub interactive: bool,
}
