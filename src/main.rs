use anyhow::Result;
use clap::Parser;
use fmpick::{FilePicker, FormBinding, Labels, PickerConfig, derive_preview_url, init_tracing};

#[derive(Parser)]
#[command(
    name = "fmpick",
    version,
    about = "Interactive terminal picker for remote file-manager search APIs",
    long_about = None
)]
struct Cli {
    /// Search endpoint; queried as GET <url>?q=<term>
    #[arg(long, env = "FMPICK_SEARCH_URL")]
    search_url: String,

    /// Preview/stream endpoint prefix; defaults to the search endpoint's
    /// sibling `stream` path
    #[arg(long, env = "FMPICK_PREVIEW_URL")]
    preview_url: Option<String>,

    /// Emit the chosen id as `<field>=<id>`
    #[arg(long, conflicts_with = "model")]
    field: Option<String>,

    /// Emit the chosen id as `<model>[<attribute>]=<id>`
    #[arg(long, requires = "attribute")]
    model: Option<String>,

    /// Attribute name for --model
    #[arg(long, requires = "model")]
    attribute: Option<String>,

    /// Minimum characters before a query is issued
    #[arg(long, default_value_t = 3)]
    min_chars: usize,

    /// Debounce delay in milliseconds
    #[arg(long, default_value_t = 220)]
    debounce_ms: u64,

    /// Placeholder text shown while the input is empty
    #[arg(long)]
    placeholder: Option<String>,

    /// Text shown while waiting for search results
    #[arg(long)]
    waiting: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let preview_url = cli
        .preview_url
        .unwrap_or_else(|| derive_preview_url(&cli.search_url));

    let mut config = PickerConfig::new(cli.search_url, preview_url);
    config.min_input_length = cli.min_chars;
    config.debounce_ms = cli.debounce_ms;

    let mut labels = Labels::default();
    if let Some(placeholder) = cli.placeholder {
        labels.placeholder = placeholder;
    }
    if let Some(waiting) = cli.waiting {
        labels.waiting_for_results = waiting;
    }
    config.labels = labels;

    config.binding = match (cli.field, cli.model, cli.attribute) {
        (Some(field), _, _) => FormBinding::Field(field),
        (None, Some(model), Some(attribute)) => FormBinding::ModelAttribute { model, attribute },
        _ => FormBinding::None,
    };

    let mut picker = FilePicker::new(config.clone())?;
    if let Some(selection) = picker.run()? {
        println!("{}", config.binding.render(selection.output_value()));
    }

    Ok(())
}
