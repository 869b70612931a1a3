use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use mailshape_lib::ValidationMode;

#[derive(Parser)]
#[command(name = "mailshape-cli", version, about = "Vérifie la forme d'adresses e-mail")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// write report to file (JSON/NDJSON/CSV selon --format)
    #[arg(long)]
    pub out: Option<String>,

    /// mode: standard|legacy
    #[arg(long, default_value = "standard")]
    pub mode: String,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// affiche le détail des quatre règles (whitelist, blacklist, longueur, commentaire)
    #[arg(long)]
    pub explain: bool,

    /// logs de debug sur stderr (feature `with-tracing`)
    #[cfg(feature = "with-tracing")]
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    Validate {
        /// mode: standard|legacy (prend le pas sur l'option globale)
        #[arg(long)]
        mode: Option<String>,
        email: String,
    },
    /// découpe l'adresse en partie locale et domaine (dernier '@')
    Parts { email: String },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn parsed_mode(&self) -> Result<ValidationMode> {
        mode_from_str(&self.mode)
    }
}

pub fn mode_from_str(s: &str) -> Result<ValidationMode> {
    match s {
        "standard" => Ok(ValidationMode::Standard),
        "legacy" => Ok(ValidationMode::Legacy),
        other => bail!("unknown --mode '{other}', use: standard|legacy"),
    }
}
