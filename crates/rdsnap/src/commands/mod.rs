pub mod list;
pub mod profile;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List snapshots for a database instance
    List(list::ListArgs),
    /// Manage endpoint profiles
    Profile(profile::ProfileArgs),
}

impl Commands {
    pub async fn run(self) -> anyhow::Result<()> {
        match self {
            Commands::List(args) => list::run(args).await,
            Commands::Profile(args) => profile::run(args),
        }
    }
}
