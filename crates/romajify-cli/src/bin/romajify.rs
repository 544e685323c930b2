use std::path::Path;
use std::process;

use clap::{Args, Parser, Subcommand};

use romajify::{load_settings_config, load_tables_config, settings, Scheme};
use romajify_cli::commands::romanize_ops::OutputMode;
use romajify_cli::commands::{config_ops, romanize_ops};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "romajify", version, about = "Convert kana to romaji")]
struct Cli {
    /// Kana table TOML replacing the embedded tables
    #[arg(long, global = true)]
    tables: Option<String>,
    /// Settings TOML replacing the embedded defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory for the JSON trace log (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert kana to Hepburn romaji
    Hepburn {
        /// Kana text to convert
        text: String,
        /// Convert to traditional Hepburn romaji
        #[arg(long)]
        traditional: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Convert kana to Nihon-shiki romaji
    Nihon {
        /// Kana text to convert
        text: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Convert kana to Kunrei-shiki romaji
    Kunrei {
        /// Kana text to convert
        text: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Export or validate configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Convert to uppercase
    #[arg(long)]
    upcase: bool,
    /// Show the text after each conversion step
    #[arg(long)]
    explain: bool,
    /// Show the conversion steps as JSON
    #[arg(long)]
    json: bool,
}

impl OutputArgs {
    fn mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.explain {
            OutputMode::Explain
        } else {
            OutputMode::Text
        }
    }
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the embedded kana tables
    TablesExport,
    /// Check a kana table file
    TablesValidate {
        /// Kana table TOML file
        file: String,
    },
    /// Print the embedded settings
    SettingsExport,
    /// Check a settings file
    SettingsValidate {
        /// Settings TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.log_dir {
        romajify::trace_init::init_tracing(Path::new(dir));
    }
    if let Some(ref path) = cli.tables {
        die!(
            load_tables_config(Path::new(path)),
            "Error loading kana tables: {}"
        );
    }
    if let Some(ref path) = cli.settings {
        die!(
            load_settings_config(Path::new(path)),
            "Error loading settings: {}"
        );
    }

    match cli.command {
        Command::Hepburn {
            text,
            traditional,
            output,
        } => romanize_cmd(&text, Scheme::Hepburn, traditional, &output),
        Command::Nihon { text, output } => romanize_cmd(&text, Scheme::NihonShiki, false, &output),
        Command::Kunrei { text, output } => {
            romanize_cmd(&text, Scheme::KunreiShiki, false, &output)
        }
        Command::Config { action } => match action {
            ConfigAction::TablesExport => print!("{}", config_ops::tables_export()),
            ConfigAction::TablesValidate { file } => {
                println!("{}", die!(config_ops::tables_validate(&file), "Error: {}"));
            }
            ConfigAction::SettingsExport => print!("{}", config_ops::settings_export()),
            ConfigAction::SettingsValidate { file } => {
                println!("{}", die!(config_ops::settings_validate(&file), "Error: {}"));
            }
        },
    }
}

fn romanize_cmd(text: &str, scheme: Scheme, traditional: bool, output: &OutputArgs) {
    let options = settings().options_for(scheme, output.upcase, traditional);
    let rendered = die!(
        romanize_ops::render(text, scheme, options, output.mode()),
        "Error rendering output: {}"
    );
    println!("{rendered}");
}
