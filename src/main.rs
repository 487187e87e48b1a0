//! Resort Admin CLI
//!
//! Terminal front end for the resort admin pages:
//! - List rooms and make bookings
//! - Show the analytics dashboard
//! - Look up prices
//! - Manage the stored admin token

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resort_admin::config::{generate_default_config, Config, LoggingConfig};
use resort_admin::form::FormField;
use resort_admin::pages::{messages, BookingPage, DashboardPage, LoadState, PricingPage};
use resort_admin::render;
use resort_admin::{ResortClient, TokenSource};

#[derive(Parser)]
#[command(name = "resort-admin")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Admin tools for the resort booking platform")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, e.g. http://localhost:8000/api/v1
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List bookable rooms
    Rooms,

    /// Book a room
    Book {
        /// Room ID
        #[arg(long)]
        room: String,
        /// Guest name
        #[arg(long)]
        name: String,
        /// Guest email
        #[arg(long)]
        email: String,
        /// Guest phone
        #[arg(long)]
        phone: String,
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: String,
        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: String,
        /// Number of adults
        #[arg(long, default_value = "2")]
        adults: String,
        /// Number of children
        #[arg(long, default_value = "0")]
        children: String,
        /// Special requests
        #[arg(long)]
        requests: Option<String>,
    },

    /// Show booking and revenue totals (requires login)
    Dashboard,

    /// Look up the price of a stay
    Price {
        /// Room ID
        #[arg(long)]
        room: String,
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: String,
        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: String,
    },

    /// Log in and store the admin token
    Login {
        /// Admin email
        #[arg(long)]
        email: String,
        /// Admin password
        #[arg(long, env = "RESORT_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Remove the stored admin token
    Logout,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let config = generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &config)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", config),
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url.clone() {
        config.api.base_url = url;
    }

    init_tracing(&config.logging);
    tracing::debug!(base_url = %config.api.base_url, "Resort Admin v{}", env!("CARGO_PKG_VERSION"));

    let client = ResortClient::new(config.client_config()).context("Failed to create API client")?;
    let tokens = config.token_store();

    match cli.command {
        Commands::Rooms => {
            let mut page = BookingPage::new(client, config.booking.total_source);
            page.load().await;

            match page.rooms() {
                LoadState::Ready(rooms) => match cli.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rooms)?),
                    OutputFormat::Table => print!("{}", render::rooms_table(rooms)?),
                },
                LoadState::Failed(message) => fail(message),
                _ => {}
            }
        }

        Commands::Book {
            room,
            name,
            email,
            phone,
            check_in,
            check_out,
            adults,
            children,
            requests,
        } => {
            let mut page = BookingPage::new(client, config.booking.total_source);
            page.load().await;
            if let Some(message) = page.rooms().error() {
                fail(message);
            }

            for (field, value) in [
                (FormField::RoomId, room),
                (FormField::GuestName, name),
                (FormField::GuestEmail, email),
                (FormField::GuestPhone, phone),
                (FormField::CheckIn, check_in),
                (FormField::CheckOut, check_out),
                (FormField::Adults, adults),
                (FormField::Children, children),
                (FormField::SpecialRequests, requests.unwrap_or_default()),
            ] {
                page.update(field, value);
            }

            let estimate = page.estimated_total();
            if cli.format == OutputFormat::Table {
                print!("{}", render::booking_view(&page)?);
            }

            page.submit().await;
            let message = page.message().unwrap_or_default();
            let confirmed = message == messages::BOOKING_CONFIRMED;

            match cli.format {
                OutputFormat::Json => {
                    let body = serde_json::json!({
                        "confirmed": confirmed,
                        "estimated_total": estimate,
                        "total_source": config.booking.total_source.to_string(),
                        "message": message,
                        "invalid_field": page.invalid_field().map(FormField::name),
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                    if !confirmed {
                        std::process::exit(1);
                    }
                }
                OutputFormat::Table if confirmed => println!("{}", message),
                OutputFormat::Table => {
                    if let Some(field) = page.invalid_field() {
                        eprintln!("Missing or invalid: {}", field.label());
                    }
                    fail(message);
                }
            }
        }

        Commands::Dashboard => {
            if tokens.admin_token().is_none() {
                tracing::debug!("No token at {:?}", tokens.path());
            }

            let mut page = DashboardPage::new(client, &tokens);
            page.load().await;

            match (page.state(), cli.format) {
                (LoadState::Ready(stats), OutputFormat::Json) => {
                    println!("{}", serde_json::to_string_pretty(stats)?);
                }
                (LoadState::Ready(_), OutputFormat::Table) => {
                    print!("{}", render::dashboard_view(&page)?);
                }
                (LoadState::Failed(message), _) => {
                    if message == messages::UNAUTHORIZED {
                        eprintln!("Not logged in. Run: resort-admin login --email <admin email>");
                    }
                    fail(message);
                }
                _ => {}
            }
        }

        Commands::Price {
            room,
            check_in,
            check_out,
        } => {
            let mut page = PricingPage::new(client);
            page.select_room(room);
            page.set_check_in(check_in);
            page.set_check_out(check_out);
            page.check_price().await;

            if let Some(error) = page.error() {
                fail(error);
            }
            match (page.quote(), cli.format) {
                (Some(quote), OutputFormat::Json) => {
                    println!("{}", serde_json::to_string_pretty(quote)?);
                }
                _ => print!("{}", render::pricing_view(&page)?),
            }
        }

        Commands::Login { email, password } => match client.login(&email, &password).await {
            Ok(login) => {
                tokens
                    .save(&login.access_token)
                    .context("Failed to store admin token")?;
                println!("Logged in as {}", email);
                println!("Token saved to {:?}", tokens.path());
            }
            Err(e) if e.is_unauthorized() => fail("Invalid email or password"),
            Err(e) => {
                eprintln!("Cannot log in at {}", config.api.base_url);
                fail(&e.to_string());
            }
        },

        Commands::Logout => {
            tokens.clear().context("Failed to remove admin token")?;
            println!("Logged out");
        }

        // Written out before the config is loaded
        Commands::Config { .. } => {}
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("resort_admin={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
