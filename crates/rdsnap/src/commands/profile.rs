use clap::{Args, Subcommand};

use crate::profile_store::{load_profiles, profiles_path, save_profiles, Profile};

#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    command: ProfileCommand,
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Create or replace a profile
    Set {
        /// Profile name
        name: String,
        /// Management API endpoint
        #[arg(long)]
        endpoint: String,
        /// Bearer token
        #[arg(long)]
        token: Option<String>,
        /// Records requested per page (1-100)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show a profile
    Show {
        #[arg(default_value = "default")]
        name: String,
    },
    /// List configured profiles
    List,
    /// Remove a profile
    Remove { name: String },
}

pub fn run(args: ProfileArgs) -> anyhow::Result<()> {
    match args.command {
        ProfileCommand::Set {
            name,
            endpoint,
            token,
            page_size,
        } => set(name, endpoint, token, page_size),
        ProfileCommand::Show { name } => show(&name),
        ProfileCommand::List => list(),
        ProfileCommand::Remove { name } => remove(&name),
    }
}

fn set(
    name: String,
    endpoint: String,
    token: Option<String>,
    page_size: Option<usize>,
) -> anyhow::Result<()> {
    if let Some(size) = page_size {
        rdsnap_core::PageSize::new(size)?;
    }

    let mut config = load_profiles()?;
    config.profiles.insert(
        name.clone(),
        Profile {
            endpoint,
            access_token: token,
            page_size,
        },
    );
    save_profiles(&config)?;
    println!("Saved profile '{name}' to {}", profiles_path()?.display());
    Ok(())
}

fn mask(token: &str) -> String {
    if token.chars().count() > 10 {
        format!("{}...", token.chars().take(10).collect::<String>())
    } else {
        "***".to_string()
    }
}

fn show(name: &str) -> anyhow::Result<()> {
    let config = load_profiles()?;
    let entry = config
        .profiles
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("profile '{}' not found", name))?;

    println!("profile: {name}");
    println!("endpoint: {}", entry.endpoint);
    if let Some(token) = &entry.access_token {
        println!("access_token: {}", mask(token));
    }
    if let Some(size) = entry.page_size {
        println!("page_size: {size}");
    }
    Ok(())
}

fn list() -> anyhow::Result<()> {
    let config = load_profiles()?;
    if config.profiles.is_empty() {
        println!("No profiles configured");
        return Ok(());
    }
    for (name, profile) in &config.profiles {
        println!("{}\t{}", name, profile.endpoint);
    }
    Ok(())
}

fn remove(name: &str) -> anyhow::Result<()> {
    let mut config = load_profiles()?;
    if config.profiles.remove(name).is_none() {
        anyhow::bail!("profile '{}' not found", name);
    }
    save_profiles(&config)?;
    println!("Removed profile '{name}'");
    Ok(())
}
