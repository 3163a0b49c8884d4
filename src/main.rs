//! Command-line shim over the Urbanfy client.
//!
//! Every command mounts the listing first, exactly like opening the app:
//!
//! ```text
//! urbanfy list --query agua
//! urbanfy show 42
//! urbanfy new --titulo "Buraco na via" --descricao "Buraco grande" \
//!     --endereco "Rua X, 100" --categoria "Infraestrutura e Mobilidade" --photo foto.jpg
//! ```

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use urbanfy::app::{failure_message, Route, SUCCESS_MESSAGE};
use urbanfy::domain::PHOTO_SLOTS;
use urbanfy::photos::FilePhotoLibrary;
use urbanfy::ui::{self, DetailViewModel, DEFAULT_COLS};
use urbanfy::{initialize, App, Category, Config, Field, HttpReportsApi, Result, UrbanfyError};

#[derive(Parser, Debug)]
#[command(name = "urbanfy", version, about = "Browse and file civic issue reports")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, env = "URBANFY_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the report service; overrides the configuration.
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List reports, optionally filtered.
    List {
        /// Accent- and case-insensitive search text.
        #[arg(long, short)]
        query: Option<String>,
    },

    /// Show one report.
    Show {
        /// Report id.
        id: String,
    },

    /// File a new report.
    New {
        #[arg(long)]
        titulo: String,

        #[arg(long)]
        descricao: String,

        #[arg(long)]
        endereco: String,

        /// One of the four category labels. Default: "Iluminação e Energia".
        #[arg(long)]
        categoria: Option<String>,

        /// Image file to attach; repeat for up to three photos.
        #[arg(long = "photo", value_name = "PATH")]
        photos: Vec<PathBuf>,
    },
}

impl Cli {
    /// Checks constraints clap cannot express on the argument definitions.
    fn check(&self) -> std::result::Result<(), clap::Error> {
        if let Command::New { photos, .. } = &self.command {
            if photos.len() > PHOTO_SLOTS {
                return Err(Self::command().error(
                    ErrorKind::TooManyValues,
                    format!(
                        "--photo can be given at most {PHOTO_SLOTS} times ({} given)",
                        photos.len()
                    ),
                ));
            }
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = cli.check() {
        e.exit();
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let base = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let mut config = base.apply_env();
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    let mut app = initialize(&config)?;
    app.arrive(&Route::Listing { refresh: None }).await?;

    match cli.command {
        Command::List { query } => {
            if let Some(query) = query {
                app.listing.set_query(&query)?;
            }
            print_listing(&app)
        }
        Command::Show { id } => show(&mut app, &id).await,
        Command::New {
            titulo,
            descricao,
            endereco,
            categoria,
            photos,
        } => {
            app.composer.set_field(Field::Titulo, &titulo)?;
            app.composer.set_field(Field::Descricao, &descricao)?;
            app.composer.set_field(Field::Endereco, &endereco)?;
            if let Some(label) = categoria {
                app.composer.set_category(label.parse::<Category>()?);
            }

            let library = FilePhotoLibrary::new(photos);
            for slot in 0..PHOTO_SLOTS {
                if library.remaining() == 0 {
                    break;
                }
                app.composer.pick_photo(&library, slot).await?;
            }

            let submission = app.submit_draft().await?;
            println!("{SUCCESS_MESSAGE}");
            if let Some(id) = &submission.created.id {
                println!("id: {id}");
            }
            println!();
            print_listing(&app)
        }
    }
}

async fn show(app: &mut App<HttpReportsApi>, id: &str) -> Result<()> {
    let Some(index) = app.listing.visible().iter().position(|r| r.id == id) else {
        if let Some(message) = app.listing.sync_state().error_message() {
            eprintln!("{message}");
        }
        return Err(UrbanfyError::Navigation(format!("no report with id {id}")));
    };

    let Some(route) = app.listing.select(index).await? else {
        return Err(UrbanfyError::Navigation(format!("no report with id {id}")));
    };

    // Round-trip through the path encoding so the detail screen only sees
    // what crosses the navigation boundary.
    let path = route.to_path();
    tracing::debug!(path = %path, "navigating");
    let Route::Detail(params) = Route::parse(&path)? else {
        return Err(UrbanfyError::Navigation(format!("unexpected route {path}")));
    };

    let mut stdout = std::io::stdout().lock();
    ui::render_detail(&mut stdout, &DetailViewModel::from(&params), DEFAULT_COLS)?;
    stdout.flush()?;
    Ok(())
}

fn print_listing(app: &App<HttpReportsApi>) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    ui::render_listing(&mut stdout, &app.listing.viewmodel(), DEFAULT_COLS)?;
    stdout.flush()?;
    Ok(())
}
