use clap::{Parser, Subcommand};
use folio_page::generate::{self, Site};
use folio_page::navigation::NavAction;
use folio_page::{config, output};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio-page")]
#[command(about = "One-page portfolio site generator")]
#[command(long_about = "\
One-page portfolio site generator

Builds a single index.html with a nav bar, a hero banner, your sections,
social links and a footer.

Content structure:

  content/
  ├── config.toml          # Brand, hero, colors, social links (optional)
  ├── 010-About.md         # Section (numbered = on the page, in order)
  ├── 020-Projects.md      # First '# heading' overrides the file name title
  ├── 030-Contact.md
  └── notes.md             # No number prefix = ignored

Without section files, the [[sections]] list from config.toml is used.

Run 'folio-page gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Show debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write index.html to the output directory
    Build,
    /// Validate config and sections without writing anything
    Check,
    /// Replay navigation actions and print the resulting page
    Render {
        /// `toggle`, `select:<index>`, `select:<title>` or `select:#<title>`; repeatable, applied in order
        #[arg(long = "action", short = 'a')]
        actions: Vec<String>,
        /// Print the final navigation state as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site = Site::load(&cli.source)?;
            let index = generate::generate(&site, &cli.output)?;
            output::print_build_output(&site, &index);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = Site::load(&cli.source)?;
            output::print_check_output(&site);
            println!("==> Content is valid");
        }
        Command::Render { actions, json } => {
            let site = Site::load(&cli.source)?;
            let actions = actions
                .iter()
                .map(|a| NavAction::parse(a, &site.sections))
                .collect::<Result<Vec<_>, _>>()?;

            let mut navigator = site.navigator();
            for action in actions {
                navigator.dispatch(action);
            }

            let state = navigator.state();
            if json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                for line in output::format_state(&state, &site.sections) {
                    eprintln!("{}", line);
                }
                print!("{}", site.render(&state));
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Default to warnings (debug with `--verbose`); `RUST_LOG` wins when set.
fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
