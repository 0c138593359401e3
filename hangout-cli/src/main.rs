mod commands;
mod logging;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangout_core::Hangout;

#[derive(Parser)]
#[command(name = "hangout")]
#[command(about = "Create event pages and view them by id")]
struct Cli {
    /// Log what hangout is doing
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log everything, with source locations
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an event and show its page
    New {
        /// Event name
        #[arg(short, long)]
        name: Option<String>,

        /// Phone number
        #[arg(short, long)]
        phone: Option<String>,

        /// Date (e.g. "2026-03-20", "2026-03-20T18:00" or "next friday 7pm")
        #[arg(short, long)]
        date: Option<String>,

        /// Where it happens
        #[arg(short, long)]
        location: Option<String>,

        /// Cost per person
        #[arg(short, long)]
        cost: Option<String>,

        /// What it is about
        #[arg(long)]
        description: Option<String>,

        /// How many people can come
        #[arg(long)]
        capacity: Option<String>,

        /// Link to show on the page (repeatable)
        #[arg(long = "link")]
        links: Vec<String>,

        /// Photo for the page
        #[arg(long)]
        image: Option<PathBuf>,

        /// Background for the page
        #[arg(long)]
        background: Option<PathBuf>,
    },
    /// Show an event page
    Show {
        /// Event id or page path (/events/<id>)
        target: String,

        /// Print the stored record as JSON
        #[arg(long)]
        json: bool,

        /// Open the Nth link of the event in the browser
        #[arg(long, value_name = "N")]
        open_link: Option<usize>,
    },
    /// Open a link the way event pages do
    OpenLink { link: String },
    /// Show config and data paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.debug, cli.verbose)?;

    match cli.command {
        Commands::New {
            name,
            phone,
            date,
            location,
            cost,
            description,
            capacity,
            links,
            image,
            background,
        } => {
            let hangout = Hangout::load()?;
            let input = commands::new::NewEvent {
                name,
                phone,
                date,
                location,
                cost,
                description,
                capacity,
                links,
                image,
                background,
            };
            commands::new::run(&hangout, input).await
        }
        Commands::Show {
            target,
            json,
            open_link,
        } => {
            let hangout = Hangout::load()?;
            commands::show::run(&hangout, &target, json, open_link)
        }
        Commands::OpenLink { link } => commands::open_link::run(&link),
        Commands::Config => commands::config::run(),
    }
}
