use anyhow::Result;
use clap::{CommandFactory, Parser};

use kcp::application::{self, GetAction, InstallAction, SearchAction};
use kcp::registry::{GitHubRegistry, RegistryConfig, build_http_client};
use kcp::render;
use kcp::runtime::{RealRuntime, Runtime};

/// kcp - Tool in command-line for KaOS Community Packages
///
/// Searches the community registry, compares remote PKGBUILD versions
/// against the local pacman database, and drives the fetch, edit,
/// makepkg install pipeline.
#[derive(Parser, Debug)]
#[command(name = "kcp", version = env!("KCP_VERSION"), about, disable_version_flag = true)]
struct Cli {
    /// get needed files to build app
    #[arg(short = 'g', long = "get", value_name = "APP", group = "action")]
    get: Option<String>,

    /// search an app in KCP
    #[arg(short = 's', long = "search", value_name = "APP", group = "action")]
    search: Option<String>,

    /// install an app in KCP
    #[arg(short = 'i', long = "install", value_name = "APP", group = "action")]
    install: Option<String>,

    /// install as a dependence
    #[arg(long)]
    asdeps: bool,

    /// search without resolving remote versions
    #[arg(long)]
    fast: bool,

    /// print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    if let Err(err) = run(cli, &runtime).await {
        eprintln!("{}", render::error_line(&format!("{:#}", err)));
        std::process::exit(application::exit_code(&err));
    }
}

async fn run(cli: Cli, runtime: &RealRuntime) -> Result<()> {
    if cli.get.is_none() && cli.search.is_none() && cli.install.is_none() {
        Cli::command().print_help()?;
        return Ok(());
    }

    check_user(runtime)?;

    let config = RegistryConfig::default();

    if let Some(app) = cli.get.as_deref() {
        GetAction::new(runtime, &config).get(app)?;
    } else if let Some(app) = cli.search.as_deref() {
        let registry = GitHubRegistry::new(build_http_client()?, config.clone());
        let rows = SearchAction::new(runtime, &registry)
            .search(app, cli.fast)
            .await?;
        for row in &rows {
            println!("{}", render::search_entry(row));
        }
    } else if let Some(app) = cli.install.as_deref() {
        InstallAction::new(runtime, &config).install(app, cli.asdeps)?;
    }

    Ok(())
}

/// The build tool must not run as root, and nothing leading up to it
/// should either.
fn check_user(runtime: &impl Runtime) -> Result<()> {
    if runtime.is_privileged() {
        anyhow::bail!("Don't launch this program as root!");
    }
    Ok(())
}
