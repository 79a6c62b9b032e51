// crates/cli/src/config.rs
use crate::args::Args;
use crate::options;
pub use decl_count_engine::config::{Config, ConfigBuilder};
use decl_count_engine::options as engine_options;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let sort: Vec<_> = args
            .sort
            .map(|s| s.0)
            .unwrap_or_default()
            .into_iter()
            .map(|(k, desc)| (engine_options::SortKey::from(k), desc))
            .collect();

        let format: engine_options::OutputFormat = args.format.into();
        let output_mode: engine_options::OutputMode = args.output_mode.into();

        ConfigBuilder::default()
            .root(args.dir)
            .count_loops(args.loops)
            .strict(!args.keep_going)
            .format(format)
            .sort(sort)
            .output_mode(output_mode)
            .total_row(args.total_row)
            .build()
            .expect("Failed to build config")
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
    Table,
    Csv,
    Tsv,
    Json,
    Jsonl
);
map_enum!(options::OutputMode, engine_options::OutputMode, Total, Full);
map_enum!(
    options::SortKey,
    engine_options::SortKey,
    Decls,
    Loops,
    Lines,
    Name,
    Ext
);
