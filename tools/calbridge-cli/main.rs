use calbridge::prelude::*;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI mirror of `SyncFrequency`, so clap can list the choices.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FrequencyCli {
    #[value(name = "1min")]
    OneMinute,
    #[value(name = "5min")]
    FiveMinutes,
    #[value(name = "15min")]
    FifteenMinutes,
    #[value(name = "1hour")]
    OneHour,
}

impl From<FrequencyCli> for SyncFrequency {
    fn from(value: FrequencyCli) -> Self {
        match value {
            FrequencyCli::OneMinute => SyncFrequency::EveryMinute,
            FrequencyCli::FiveMinutes => SyncFrequency::EveryFiveMinutes,
            FrequencyCli::FifteenMinutes => SyncFrequency::EveryFifteenMinutes,
            FrequencyCli::OneHour => SyncFrequency::Hourly,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CalendarsCli {
    Primary,
    All,
    Custom,
}

impl From<CalendarsCli> for CalendarSelection {
    fn from(value: CalendarsCli) -> Self {
        match value {
            CalendarsCli::Primary => CalendarSelection::Primary,
            CalendarsCli::All => CalendarSelection::All,
            CalendarsCli::Custom => CalendarSelection::Custom,
        }
    }
}

/// Generate an n8n workflow that syncs Google Calendar into Zoho Calendar
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON sync config (camelCase keys)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Google OAuth client id
    #[arg(long, global = true)]
    google_client_id: Option<String>,
    /// Google OAuth client secret
    #[arg(long, global = true)]
    google_client_secret: Option<String>,
    /// Zoho OAuth client id
    #[arg(long, global = true)]
    zoho_client_id: Option<String>,
    /// Zoho OAuth client secret
    #[arg(long, global = true)]
    zoho_client_secret: Option<String>,

    /// Sync changes from both calendars (`--bidirectional=false` to turn off)
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    bidirectional: Option<bool>,
    /// Include all-day events in the sync (`--include-all-day=false` to leave them out)
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    include_all_day: Option<bool>,
    /// Leave all-day events out of the sync, same as `--include-all-day=false`
    #[arg(long, global = true, conflicts_with = "include_all_day")]
    exclude_all_day: bool,
    /// How often to sync
    #[arg(long, value_enum, global = true)]
    frequency: Option<FrequencyCli>,
    /// Which calendars to sync
    #[arg(long, value_enum, global = true)]
    calendars: Option<CalendarsCli>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run in interactive mode to be prompted for the sync settings
    #[arg(short = 'i', long, global = true, help = "Run in interactive 'human' mode")]
    human: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Save the workflow JSON to a file
    Download {
        /// Output path [default: google-zoho-calendar-sync.json]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Copy the workflow JSON to the clipboard
    Copy,
    /// Print the workflow JSON
    Preview,
    /// Print a text diagram of the workflow graph
    Graph,
    /// Save the setup guide for the people importing the workflow
    Guide {
        /// Output path [default: calendar-sync-setup-guide.txt]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show which nodes an event with the given action would reach
    Route {
        /// Value of the event's `action` field, e.g. created
        action: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(io::stderr))
        .init();

    let config = resolve_config(&cli);
    debug!(?config, "Resolved sync config");

    match cli.command {
        Commands::Download { output } => run_download(&config, output),
        Commands::Copy => run_copy(&config),
        Commands::Preview => println!("{}", workflow_json(&config)),
        Commands::Graph => print!("{}", render_graph(&generate(Some(&config)))),
        Commands::Guide { output } => {
            let path = write_setup_guide(output.as_deref())
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to save setup guide: {}", e)));
            println!("Setup guide saved to '{}'", path.display());
        }
        Commands::Route { action } => run_route(&config, &action),
    }
}

impl Cli {
    /// The config fields set on the command line. Unset flags stay `None` so they don't mask the file.
    fn flag_overrides(&self) -> SyncConfig {
        SyncConfig {
            google_client_id: self.google_client_id.clone(),
            google_client_secret: self.google_client_secret.clone(),
            zoho_client_id: self.zoho_client_id.clone(),
            zoho_client_secret: self.zoho_client_secret.clone(),
            bidirectional_sync: self.bidirectional,
            include_all_day: if self.exclude_all_day {
                Some(false)
            } else {
                self.include_all_day
            },
            sync_frequency: self.frequency.map(Into::into),
            calendar_selection: self.calendars.map(Into::into),
        }
    }
}

/// Layers config sources: file, then flags, then interactive answers.
fn resolve_config(cli: &Cli) -> SyncConfig {
    let from_file = match &cli.config {
        Some(path) => SyncConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => SyncConfig::default(),
    };

    let config = from_file.merge(cli.flag_overrides());
    if cli.human {
        run_interactive(config)
    } else {
        config
    }
}

fn workflow_json(config: &SyncConfig) -> String {
    generate(Some(config))
        .to_json_pretty()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn run_download(config: &SyncConfig, output: Option<PathBuf>) {
    let workflow = generate(Some(config));
    let path = download(&workflow, output.as_deref())
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to save workflow: {}", e)));

    println!("Workflow saved to '{}'", path.display());
    println!("  -> {} nodes, {} connections", workflow.nodes.len(), workflow.edge_count());
    println!("  -> Import it in n8n, then run `guide` for the credential setup steps.");
}

fn run_copy(config: &SyncConfig) {
    if copy_text(&workflow_json(config)) {
        println!("Workflow JSON copied to clipboard.");
    } else {
        exit_with_error("Could not copy to clipboard. Use `preview` or `download` instead.");
    }
}

fn run_route(config: &SyncConfig, action: &str) {
    let workflow = generate(Some(config));
    let route = trace_action(&workflow, action);

    println!("Routing an event with action '{}':", action);
    for node in &route.reached {
        println!("  -> {} ({})", node.name, node.id);
    }
    for guard in &route.blocked_by {
        println!("  xx stopped at {} ({})", guard.name, guard.id);
    }

    let destinations = route.destinations();
    if destinations.is_empty() {
        println!("No Zoho operation is triggered.");
    } else {
        for node in destinations {
            println!("Triggers: {}", node.name);
        }
    }
}

/// Prompts for each settings field, keeping the resolved value as the default.
fn run_interactive(config: SyncConfig) -> SyncConfig {
    println!("--- calbridge Interactive Mode ---");
    println!("Press enter to keep the value shown in brackets.\n");

    let google_client_id = prompt_for_field("Google OAuth Client ID", &config.google_client_id, false);
    let google_client_secret =
        prompt_for_field("Google OAuth Client Secret", &config.google_client_secret, true);
    let zoho_client_id = prompt_for_field("Zoho OAuth Client ID", &config.zoho_client_id, false);
    let zoho_client_secret =
        prompt_for_field("Zoho OAuth Client Secret", &config.zoho_client_secret, true);

    let bidirectional = prompt_for_bool("Bidirectional sync", config.bidirectional());
    let all_day = prompt_for_bool("Include all-day events", config.all_day_events());

    let frequency = loop {
        let answer = prompt_for_input(
            "Sync frequency (1min, 5min, 15min, 1hour)",
            Some(config.frequency().as_str()),
        );
        match answer.parse::<SyncFrequency>() {
            Ok(f) => break f,
            Err(e) => println!("{}", e),
        }
    };

    let calendars = loop {
        let answer = prompt_for_input(
            "Calendar selection (primary, all, custom)",
            Some(config.calendars().as_str()),
        );
        match answer.parse::<CalendarSelection>() {
            Ok(c) => break c,
            Err(e) => println!("{}", e),
        }
    };

    SyncConfig {
        google_client_id,
        google_client_secret,
        zoho_client_id,
        zoho_client_secret,
        bidirectional_sync: Some(bidirectional),
        include_all_day: Some(all_day),
        sync_frequency: Some(frequency),
        calendar_selection: Some(calendars),
    }
}

/// Prompts for an optional text field. Secrets are never echoed back as the default.
fn prompt_for_field(prompt_text: &str, current: &Option<String>, secret: bool) -> Option<String> {
    let shown = match current {
        Some(_) if secret => Some("********"),
        other => other.as_deref(),
    };
    let answer = prompt_for_input(prompt_text, shown);
    if answer.is_empty() || (secret && current.is_some() && Some(answer.as_str()) == shown) {
        current.clone()
    } else {
        Some(answer)
    }
}

fn prompt_for_bool(prompt_text: &str, default: bool) -> bool {
    loop {
        let answer = prompt_for_input(prompt_text, Some(if default { "y" } else { "n" }));
        match answer.to_lowercase().as_str() {
            "y" | "yes" | "true" => return true,
            "n" | "no" | "false" => return false,
            _ => println!("Please answer y or n."),
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to write prompt: {}", e));
    }

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
