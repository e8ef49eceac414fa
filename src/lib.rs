pub mod api;
pub mod config;
pub mod picker;

pub use api::client::{HttpSearchBackend, SearchBackend};
pub use config::{FormBinding, Labels, PickerConfig, derive_preview_url};
pub use picker::FilePicker;
pub use picker::domain::models::{FileHit, FileKind, Selection};

/// Initializes tracing. Logs go to stderr so they stay off the alternate
/// screen the picker draws on.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fmpick=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
