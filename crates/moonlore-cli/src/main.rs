//! Moonlore CLI - team recommendations and lore lookup
//!
//! Thin terminal client over the Moonlore API.

mod api;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::{Color, Colorize};
use dialoguer::{Input, Password};

use api::MoonloreClient;
use config::Config;

#[derive(Parser)]
#[command(name = "moonlore")]
#[command(about = "Moonlore CLI - team recommendations and lore lookup", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session
    Login {
        /// Account email (will prompt if not provided)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Sign out and drop the stored session
    Logout,

    /// Show the current account
    Whoami,

    /// Recommend a team from your owned identities
    Recommend {
        /// Owned identity ids (comma-separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        owned: Vec<String>,
        /// Scenario: general, mirror-hard, or boss
        #[arg(short, long, default_value = "general")]
        scenario: String,
    },

    /// Ask a lore question
    Ask {
        /// The question
        question: String,
    },

    /// List the twelve sinners
    Sinners,

    /// List identities
    Identities {
        /// Filter by tier (S-D)
        #[arg(short, long)]
        tier: Option<String>,
        /// Filter by sinner id
        #[arg(short, long)]
        sinner: Option<String>,
        /// Filter by sin affinity
        #[arg(short, long)]
        affinity: Option<String>,
    },

    /// List E.G.O.
    Egos {
        /// Filter by sinner id
        #[arg(short, long)]
        sinner: Option<String>,
    },

    /// List abnormalities
    Abnormalities {
        /// Filter by risk level (ZAYIN-ALEPH)
        #[arg(short, long)]
        risk: Option<String>,
        /// Content locale (en/zh); defaults to the configured locale
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { email } => cmd_login(email).await,
        Commands::Logout => cmd_logout().await,
        Commands::Whoami => cmd_whoami().await,
        Commands::Recommend { owned, scenario } => cmd_recommend(owned, scenario).await,
        Commands::Ask { question } => cmd_ask(question).await,
        Commands::Sinners => cmd_sinners().await,
        Commands::Identities {
            tier,
            sinner,
            affinity,
        } => cmd_identities(tier, sinner, affinity).await,
        Commands::Egos { sinner } => cmd_egos(sinner).await,
        Commands::Abnormalities { risk, locale } => cmd_abnormalities(risk, locale).await,
        Commands::Config => cmd_config(),
    }
}

/// One place for the tier color scheme
fn tier_color(tier: &str) -> Color {
    match tier {
        "S" => Color::BrightRed,
        "A" => Color::BrightYellow,
        "B" => Color::BrightGreen,
        "C" => Color::BrightCyan,
        _ => Color::White,
    }
}

fn tier_badge(tier: &str) -> colored::ColoredString {
    format!("[{}]", tier).color(tier_color(tier)).bold()
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(email: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    let client = MoonloreClient::new(&config.base_url);

    print!("Checking server... ");
    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        _ => {
            println!("{}", "Failed".red());
            anyhow::bail!("Could not reach the Moonlore API at {}", config.base_url);
        }
    }

    let email = match email {
        Some(e) => e,
        None => Input::new()
            .with_prompt("Email")
            .interact_text()
            .context("Failed to read email")?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .context("Failed to read password")?;

    let session = client.login(&email, &password).await?;
    config.set_session(session.access_token, session.user.email.clone());
    config.save()?;

    println!(
        "{} Signed in as {} (session saved to {:?})",
        "✓".green(),
        session.user.email.cyan(),
        Config::config_path()?
    );

    Ok(())
}

async fn cmd_logout() -> Result<()> {
    let mut config = Config::load()?;

    if let Some(token) = config.access_token.clone() {
        let client = MoonloreClient::new(&config.base_url);
        if let Err(e) = client.logout(&token).await {
            // Session is dropped locally either way
            eprintln!("{} {}", "Warning:".yellow(), e);
        }
    }

    config.clear_session();
    config.save()?;
    println!("{} Signed out", "✓".green());

    Ok(())
}

async fn cmd_whoami() -> Result<()> {
    let config = Config::load()?;
    let token = config
        .access_token
        .as_ref()
        .context("Not signed in. Run 'moonlore login' first.")?;

    let client = MoonloreClient::new(&config.base_url);
    let user = client.user(token).await?;

    println!("{} ({})", user.email.cyan().bold(), user.id.dimmed());

    Ok(())
}

async fn cmd_recommend(owned: Vec<String>, scenario: String) -> Result<()> {
    let config = Config::load()?;
    let client = MoonloreClient::new(&config.base_url);

    let rec = client.recommend(&owned, &scenario).await?;

    if rec.team.is_empty() {
        println!("{}", rec.analysis.yellow());
        return Ok(());
    }

    println!("{} (score {})", "Recommended team:".bold(), score_colored(rec.score));
    for member in &rec.team {
        println!(
            "  {} {} {} {}",
            tier_badge(&member.tier),
            member.name.cyan(),
            member.attack_type.dimmed(),
            member.sin_affinity.join("/").dimmed()
        );
    }

    if !rec.synergies.is_empty() {
        println!("\n{}", "Synergies:".bold());
        for synergy in &rec.synergies {
            println!("  • {}", synergy.green());
        }
    }

    if !rec.suggested_egos.is_empty() {
        println!("\n{}", "Suggested E.G.O.:".bold());
        for ego in &rec.suggested_egos {
            println!(
                "  {} {} ({}, {})",
                tier_badge(&ego.tier),
                ego.name.cyan(),
                ego.sinner_name,
                ego.grade.dimmed()
            );
        }
    }

    println!("\n{}", rec.analysis);

    Ok(())
}

fn score_colored(score: u32) -> colored::ColoredString {
    let text = score.to_string();
    if score >= 80 {
        text.green().bold()
    } else if score >= 40 {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}

async fn cmd_ask(question: String) -> Result<()> {
    let config = Config::load()?;
    let client = MoonloreClient::new(&config.base_url);

    let response = client.ask(&question).await?;
    println!("{}", response.answer);

    Ok(())
}

async fn cmd_sinners() -> Result<()> {
    let config = Config::load()?;
    let client = MoonloreClient::new(&config.base_url);

    let sinners = client.sinners().await?;

    println!("{}", "Sinners:".bold());
    for sinner in sinners {
        println!(
            "  {:>2}. {} {} {} {}",
            sinner.number,
            sinner.name.cyan().bold(),
            sinner.id.dimmed(),
            format!("({} identities)", sinner.identities.len()).dimmed(),
            format!("\"{}\"", sinner.quote).dimmed()
        );
    }

    Ok(())
}

async fn cmd_identities(
    tier: Option<String>,
    sinner: Option<String>,
    affinity: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let client = MoonloreClient::new(&config.base_url);

    let mut filters: Vec<(&str, &str)> = Vec::new();
    if let Some(tier) = &tier {
        filters.push(("tier", tier.as_str()));
    }
    if let Some(sinner) = &sinner {
        filters.push(("sinner", sinner.as_str()));
    }
    if let Some(affinity) = &affinity {
        filters.push(("affinity", affinity.as_str()));
    }

    let identities = client.identities(&filters).await?;

    if identities.is_empty() {
        println!("No identities match.");
        return Ok(());
    }

    for identity in identities {
        println!(
            "  {} {} {} {}★ {} {}",
            tier_badge(&identity.tier),
            identity.name.cyan(),
            identity.id.dimmed(),
            identity.rarity,
            identity.attack_type,
            identity.sin_affinity.join("/").dimmed()
        );
    }

    Ok(())
}

async fn cmd_egos(sinner: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let client = MoonloreClient::new(&config.base_url);

    let mut filters: Vec<(&str, &str)> = Vec::new();
    if let Some(sinner) = &sinner {
        filters.push(("sinner", sinner.as_str()));
    }

    let egos = client.egos(&filters).await?;

    if egos.is_empty() {
        println!("No E.G.O. match.");
        return Ok(());
    }

    for ego in egos {
        println!(
            "  {} {} ({}, {})",
            tier_badge(&ego.tier),
            ego.name.cyan(),
            ego.sinner_name,
            ego.grade.dimmed()
        );
    }

    Ok(())
}

async fn cmd_abnormalities(risk: Option<String>, locale: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let client = MoonloreClient::new(&config.base_url);

    let locale = locale.unwrap_or_else(|| config.locale.clone());
    let mut filters: Vec<(&str, &str)> = vec![("locale", locale.as_str())];
    if let Some(risk) = &risk {
        filters.push(("risk", risk.as_str()));
    }

    let abnormalities = client.abnormalities(&filters).await?;

    for abnormality in abnormalities {
        println!(
            "  {} {} {} {}",
            format!("[{}]", abnormality.risk_level)
                .color(risk_color(&abnormality.risk_level))
                .bold(),
            abnormality.name.cyan(),
            abnormality.code.dimmed(),
            abnormality.damage_type.dimmed()
        );
    }

    Ok(())
}

/// Risk level color scheme, highest grades hottest
fn risk_color(risk: &str) -> Color {
    match risk {
        "ALEPH" => Color::BrightRed,
        "WAW" => Color::BrightMagenta,
        "HE" => Color::BrightYellow,
        "TETH" => Color::BrightBlue,
        _ => Color::BrightGreen,
    }
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!("  Locale: {}", config.locale);
    println!(
        "  Session: {}",
        match &config.email {
            Some(email) => email.cyan().to_string(),
            None => "Not signed in".red().to_string(),
        }
    );

    Ok(())
}
