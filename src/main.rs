use clap::{ArgAction, Parser, Subcommand};
use structura_site::media::MediaConfiguration;
use structura_site::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "structura-site")]
#[command(about = "Static site builder for the StructuraAI marketing pages")]
#[command(long_about = "\
Static site builder for the StructuraAI marketing pages

Every page is a fixed, ordered list of sections. Each section maps a literal
content collection (pipeline stages, metrics, feature cards) through a layout
template into HTML. The /demo page embeds a video player when a video URL is
configured and shows a placeholder panel otherwise.

Routes:

  /              → index.html
  /demo          → demo/index.html
  /about         → about/index.html
  /architecture  → architecture/index.html

Run 'structura-site gen-config' to generate a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Site config file (stock defaults are used when it does not exist)
    #[arg(long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

/// Override for `[media] video_url`.
#[derive(clap::Args, Clone)]
struct MediaArgs {
    /// Demo video embed URL; an empty value shows the placeholder
    #[arg(long, env = "STRUCTURA_VIDEO_URL")]
    video_url: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Compose every page and write the HTML site
    Build(MediaArgs),
    /// Validate config and content without writing anything
    Check(MediaArgs),
    /// Print the composed page tree as JSON
    Compose {
        #[command(flatten)]
        media: MediaArgs,
        /// Only print the page at this route
        #[arg(long)]
        route: Option<String>,
    },
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Build(media_args) => {
            let site_config = config::load_config(&cli.config)?;
            let media = resolve_media(&site_config, media_args);
            println!("==> Building → {}", cli.output.display());
            let generated = generate::build(&site_config, &media, &cli.output)?;
            output::print_generate_output(&generated, &cli.output);
        }
        Command::Check(media_args) => {
            let site_config = config::load_config(&cli.config)?;
            let media = resolve_media(&site_config, media_args);
            println!("==> Checking {}", cli.config.display());
            let pages = generate::compose_site(&site_config, &media)?;
            output::print_check_output(&pages);
            println!("==> Site is valid");
        }
        Command::Compose { media, route } => {
            let site_config = config::load_config(&cli.config)?;
            let media = resolve_media(&site_config, media);
            let pages = generate::compose_site(&site_config, &media)?;
            println!("{}", generate::pages_json(&pages, route.as_deref())?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// The `--video-url` flag (or its environment variable) wins over the file.
fn resolve_media(site_config: &config::SiteConfig, args: &MediaArgs) -> MediaConfiguration {
    match &args.video_url {
        Some(url) => MediaConfiguration::new(url),
        None => site_config.media_configuration(),
    }
}

/// Diagnostics go to stderr so `compose` output stays valid JSON.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "structura_site=warn",
        1 => "structura_site=info",
        2 => "structura_site=debug",
        _ => "structura_site=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
