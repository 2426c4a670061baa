mod auth;
mod commands;
mod config;
mod render;
mod router;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::calendar::CalendarArgs;
use commands::App;
use router::Route;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "famcal")]
#[command(about = "Sign in and keep the family calendar in your terminal")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Login {
        #[arg(short, long)]
        email: Option<String>,
    },
    Signup,
    Logout,
    /// Check whether the stored session is still accepted
    Me,
    /// Open the family calendar (requires login)
    Calendar {
        /// Act as this user instead of user_id from config.toml
        #[arg(short, long)]
        user: Option<String>,

        /// Start with sample events
        #[arg(long)]
        demo: bool,
    },
    /// Navigate to an app path such as "/home"
    Open {
        path: String,

        #[arg(short, long)]
        user: Option<String>,

        #[arg(long)]
        demo: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut app = App::load()?;

    match cli.command {
        Commands::Login { email } => {
            let next = commands::auth::login(&mut app, email, None).await?;
            if next == Route::Home {
                println!("Run `famcal calendar` to open the family calendar.");
            }
            Ok(())
        }
        Commands::Signup => {
            commands::auth::signup(&mut app).await?;
            println!("Run `famcal login` to sign in.");
            Ok(())
        }
        Commands::Logout => commands::auth::logout(&mut app).await,
        Commands::Me => commands::auth::me(&mut app).await,
        Commands::Calendar { user, demo } => {
            let args = CalendarArgs { user, demo };
            commands::open(&mut app, Route::Home.path(), args).await
        }
        Commands::Open { path, user, demo } => {
            let args = CalendarArgs { user, demo };
            commands::open(&mut app, &path, args).await
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
