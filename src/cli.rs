//! The `fundmychai` command-line binary.
//!
//! Drives the same flows as the original dashboard and donation page, against
//! a file-backed store instead of browser local storage:
//!
//! - `signup` / `login` / `logout` - the session flag
//! - `profile show` / `profile set` - edit the stored profile
//! - `bio` - generate the "About Me" text from name, category, and vibe
//! - `publish` - validate the profile and print its shareable link
//! - `page` - open a shareable link as a visitor and print the payment intent
//! - `ledger list` / `ledger add` - the mock transaction history
//!
//! Environment:
//! - `.env` values loaded at startup
//! - `BASE_URL`, `STORE_PATH` control link base and store location
//! - `GEMINI_API_KEY`, `GEMINI_MODEL` configure bio generation

use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use url::Url;

use fundmychai_types::{Creator, ShareLink};

use crate::bio::{BioGenerator, DEFAULT_MODEL, GeminiBioGenerator};
use crate::ledger;
use crate::page::{DonationPage, resolve_profile};
use crate::ports::Capabilities;
use crate::session;
use crate::store::{JsonFileStore, KeyValueStore};

#[derive(Parser, Debug)]
#[command(name = "fundmychai")]
#[command(version, about = "Creator donation pages over shareable UPI links")]
pub struct Cli {
    #[command(flatten)]
    config: Config,
    #[command(subcommand)]
    command: Command,
}

/// Process-wide configuration, from flags or the environment.
#[derive(Args, Debug)]
struct Config {
    /// Base address shareable links are built against
    #[arg(long, env = "BASE_URL", default_value = "https://fundmychai.app/", global = true)]
    base_url: Url,
    /// Path of the local profile/session/ledger store
    #[arg(long, env = "STORE_PATH", default_value = "fundmychai.json", global = true)]
    store_path: PathBuf,
    /// API key for bio generation
    #[arg(long, env = "GEMINI_API_KEY", global = true, hide_env_values = true)]
    gemini_api_key: Option<String>,
    /// Model used for bio generation
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL, global = true)]
    gemini_model: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account: sets the session flag and seeds a profile
    Signup {
        /// Full name for the seeded profile
        #[arg(long)]
        name: String,
    },
    /// Set the session flag
    Login,
    /// Clear the session flag
    Logout,
    /// Show or edit the stored profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Generate the profile bio
    Bio {
        /// What the creator makes ("Coding", "watercolor art", ...)
        #[arg(long)]
        category: String,
        /// Tone of the generated text
        #[arg(long, default_value = "funny")]
        vibe: String,
    },
    /// Validate the profile and print its shareable link
    Publish,
    /// Open a shareable link as a visitor
    Page {
        /// The shareable link (or any URL with a `#/c/<handle>` fragment)
        link: String,
        /// Number of chais to support with (₹50 each)
        #[arg(long, conflicts_with = "amount")]
        chai: Option<u64>,
        /// Custom amount in whole rupees
        #[arg(long)]
        amount: Option<u64>,
        /// Message for the transaction note
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Transaction history (mock and manually entered)
    Ledger {
        #[command(subcommand)]
        command: LedgerCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Print the stored profile
    Show,
    /// Update fields of the stored profile
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        handle: Option<String>,
        #[arg(long)]
        upi_id: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Avatar image URL; pass an empty string to clear it
        #[arg(long)]
        avatar_url: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum LedgerCommand {
    /// List the history with totals
    List,
    /// Record a manual entry
    Add {
        #[arg(long, default_value = "Anonymous")]
        from: String,
        /// Whole rupees
        #[arg(long)]
        amount: u64,
        #[arg(long, default_value = "")]
        message: String,
    },
}

/// Parses arguments and executes one command.
pub async fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let mut store = JsonFileStore::open(&cli.config.store_path)?;

    match cli.command {
        Command::Signup { name } => {
            let profile = session::sign_up(&mut store, &name)?;
            println!("Signed up as {}. Your dashboard is ready.", profile.name);
        }
        Command::Login => {
            session::log_in(&mut store)?;
            println!("Logged in.");
        }
        Command::Logout => {
            session::log_out(&mut store)?;
            println!("Logged out.");
        }
        Command::Profile { command } => {
            require_session(&store)?;
            match command {
                ProfileCommand::Show => {
                    let profile = session::load_profile(&store).unwrap_or_default();
                    println!("{}", serde_json::to_string_pretty(&profile)?);
                }
                ProfileCommand::Set {
                    name,
                    handle,
                    upi_id,
                    bio,
                    category,
                    avatar_url,
                } => {
                    let mut profile = session::load_profile(&store).unwrap_or_default();
                    apply(&mut profile.name, name);
                    apply(&mut profile.handle, handle);
                    apply(&mut profile.upi_id, upi_id);
                    apply(&mut profile.bio, bio);
                    apply(&mut profile.category, category);
                    if let Some(avatar_url) = avatar_url {
                        profile.avatar_url =
                            if avatar_url.is_empty() { None } else { Some(avatar_url) };
                    }
                    session::save_profile(&mut store, &profile)?;
                    println!("Profile saved.");
                }
            }
        }
        Command::Bio { category, vibe } => {
            require_session(&store)?;
            let mut profile = session::load_profile(&store).unwrap_or_default();
            if profile.name.is_empty() || category.is_empty() {
                return Err("please enter your name and what you do first".into());
            }
            let api_key = cli
                .config
                .gemini_api_key
                .ok_or("GEMINI_API_KEY is not set")?;
            let generator = GeminiBioGenerator::new(api_key, cli.config.gemini_model);
            let bio = generator.generate(&profile.name, &category, &vibe).await;
            profile.bio = bio.clone();
            profile.category = category;
            session::save_profile(&mut store, &profile)?;
            println!("{bio}");
        }
        Command::Publish => {
            require_session(&store)?;
            let profile = session::load_profile(&store).unwrap_or_default();
            if !profile.is_publishable() {
                return Err(
                    "fill in at least your name, handle, and UPI ID before publishing".into(),
                );
            }
            session::save_profile(&mut store, &profile)?;
            let url = ShareLink::for_profile(&profile).to_url(&cli.config.base_url);
            println!("{url}");
        }
        Command::Page {
            link,
            chai,
            amount,
            message,
        } => {
            let link = ShareLink::parse(&link)?;
            let creator = resolve_profile(&link, &store)?;
            let mut page = DonationPage::new(creator);
            if let Some(count) = chai {
                page.select_chai(count);
            } else if let Some(amount) = amount {
                page.select_custom(amount);
            }
            page.set_message(message);
            print_page(&mut page);
        }
        Command::Ledger { command } => {
            require_session(&store)?;
            match command {
                LedgerCommand::List => {
                    let transactions = ledger::load(&mut store)?;
                    for tx in &transactions {
                        println!(
                            "{}  ₹{:<6} {:<12} {}",
                            tx.date.format("%Y-%m-%d %H:%M"),
                            tx.amount,
                            tx.from_name,
                            tx.message
                        );
                    }
                    let stats = ledger::stats(&transactions);
                    println!("Total ₹{} from {} supporters", stats.total_inr, stats.supporters);
                }
                LedgerCommand::Add { from, amount, message } => {
                    ledger::record(&mut store, ledger::manual_entry(&from, amount, &message))?;
                    println!("Recorded ₹{amount} from {from}.");
                }
            }
        }
    }

    Ok(())
}

fn require_session(store: &dyn KeyValueStore) -> Result<(), Box<dyn Error>> {
    if session::is_authenticated(store) {
        Ok(())
    } else {
        Err("not signed in; run `fundmychai signup --name <name>` first".into())
    }
}

fn apply(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn print_page(page: &mut DonationPage) {
    let creator = page.creator().clone();
    println!("{}", creator.name);
    println!("Creates {}", creator.category);
    println!();
    println!("{}", creator.bio);
    println!();
    println!("Avatar: {}", creator.avatar_or_placeholder());
    println!("Supporting with ₹{}", page.amount_inr());

    let view = page.request_qr(&Capabilities::none());
    println!();
    println!("Scan with any UPI app, or open on mobile:");
    println!("{}", view.payload);
    println!();
    println!("UPI ID: {}", upi_display(&creator));
}

fn upi_display(creator: &Creator) -> &str {
    if creator.upi_id.is_empty() { "(not set)" } else { &creator.upi_id }
}
