/// How the final report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<letter> Count: <n>` lines
    #[default]
    Text,
    Json,
    Yaml,
    Csv,
    Table,
}
