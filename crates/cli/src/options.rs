use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<letter> Count: <n>` per line
    #[default]
    Text,
    Json,
    Yaml,
    Csv,
    /// Bordered table
    Table,
}
