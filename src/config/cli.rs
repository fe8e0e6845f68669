use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "fluent-api")]
#[command(about = "Build and dispatch calls against the console backend API")]
pub struct CliArgs {
    /// TOML file with a [client] section
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub token: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Service segment, e.g. inventory
    pub service: String,

    /// Resource segment, e.g. collector
    pub resource: String,

    /// One of create, update, delete, get, list, collect
    pub action: String,

    #[arg(long)]
    pub id: Option<String>,

    /// Body key for --id; defaults to <resource>_id
    #[arg(long)]
    pub id_field: Option<String>,

    /// Extra body fields as key=value; values are parsed as JSON when possible
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    #[arg(long)]
    pub keyword: Option<String>,

    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long, help = "Print the call descriptor instead of sending it")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliArgs {
    pub fn id_field(&self) -> String {
        self.id_field
            .clone()
            .unwrap_or_else(|| format!("{}_id", self.resource.replace('-', "_")))
    }
}
