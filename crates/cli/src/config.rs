// crates/cli/src/config.rs
use crate::args::Args;
use crate::options;
pub use letter_counts_engine::config::{Config, ConfigBuilder};
use letter_counts_engine::options as engine_options;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let format: engine_options::OutputFormat = args.format.into();

        ConfigBuilder::default()
            .inputs(args.paths)
            .files_from(args.files_from)
            .timeout(args.timeout.map(|t| t.0))
            .format(format)
            .build()
            .expect("every Config field has a default")
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Text,
    Json,
    Yaml,
    Csv,
    Table
);
