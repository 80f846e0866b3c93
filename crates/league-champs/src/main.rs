use clap::builder::{styling::AnsiColor, Styles};
use clap::ColorChoice;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use miette::Result;

mod commands;
mod errors;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the Data Dragon version in use and the catalog status
    Version,
    /// Print the display name of a champion id
    Name { champion_id: u32 },
    /// Print the icon URL of a champion id
    Icon { champion_id: u32 },
    /// Resolve a (possibly misspelled or partial) champion name
    Resolve { query: String },
    /// Turn a list like "Ahri, Zed;  Yasuo" into champion ids
    Parse { input: String },
    /// Autocomplete champion names
    Search {
        query: String,

        /// Maximum number of suggestions
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// List every champion in the catalog
    List,
    /// Print the icon URL of a summoner spell id
    Spell { spell_id: u32 },
    /// Print the icon URL of an item id (0 = empty slot)
    Item { item_id: u32 },
    /// Print the ranked crest URL of a tier (omit for unranked)
    Rank { tier: Option<String> },
    /// Show or reset config.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Reset configuration to defaults
    Reset,
}

fn parse_args() -> Args {
    // Configure colored/styled help output
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Blue.on_default());

    let matches = Args::command()
        .styles(styles)
        .color(ColorChoice::Auto)
        .get_matches();

    Args::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "league_champs=warn,ltk_champions=warn".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = parse_args();
    let json = args.json;

    let cfg = match &args.command {
        Commands::Config { action } => {
            return match action {
                ConfigAction::Show => commands::show_config(),
                ConfigAction::Reset => commands::reset_config(),
            }
        }
        _ => utils::config::load_config(),
    };

    let directory = commands::load_directory(&cfg)?;

    match args.command {
        Commands::Version => commands::show_version(&directory),
        Commands::Name { champion_id } => commands::champion_name(&directory, champion_id),
        Commands::Icon { champion_id } => commands::champion_icon(&directory, champion_id),
        Commands::Resolve { query } => commands::resolve_champion(&directory, &query, json),
        Commands::Parse { input } => commands::parse_champions(&directory, &input, json),
        Commands::Search { query, limit } => {
            commands::search_champions(&directory, &query, limit, json)
        }
        Commands::List => commands::list_champions(&directory, json),
        Commands::Spell { spell_id } => commands::spell_icon(&directory, spell_id),
        Commands::Item { item_id } => commands::item_icon(&directory, item_id),
        Commands::Rank { tier } => commands::rank_emblem_icon(&directory, tier.as_deref()),
        Commands::Config { .. } => unreachable!("handled before loading"),
    }
}
