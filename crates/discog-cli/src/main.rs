//! discog catalog CLI.
//!
//! Provides the `discog` binary with subcommands for working with a local
//! album catalog:
//! - `import` loads album records from a JSON file into the SQLite catalog
//! - `list` prints the catalog (optionally one release year) as JSON
//! - `invoke` answers one API-Gateway-style proxy event and prints the response
//!
//! `list` and `invoke` go through the same `CatalogService` and router as the
//! HTTP server, so their output matches what the server would return.

use std::io::Read;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use discog_core::AlbumRecord;
use discog_server::proxy::invoke;
use discog_server::router::build_router;
use discog_server::schema::proxy::ProxyRequest;
use discog_server::service::CatalogService;
use discog_server::state::AppState;
use discog_storage::SqliteStore;

/// Album catalog tools.
#[derive(Parser)]
#[command(name = "discog", about = "Album catalog tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Load album records from a JSON array file into the catalog.
    Import {
        /// Path to the catalog database file.
        #[arg(short, long)]
        db: String,

        /// JSON file holding an array of album records.
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Print albums as JSON, oldest first.
    List {
        /// Path to the catalog database file.
        #[arg(short, long)]
        db: String,

        /// Only albums released in this year.
        #[arg(short, long)]
        year: Option<String>,
    },

    /// Answer one proxy event and print the proxy response.
    Invoke {
        /// Path to the catalog database file.
        #[arg(short, long)]
        db: String,

        /// File holding the event JSON (default: stdin).
        #[arg(short, long)]
        event: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Import { db, file } => run_import(&db, &file),
        Commands::List { db, year } => run_list(&db, year.as_deref()),
        Commands::Invoke { db, event } => run_invoke(&db, event.as_deref()),
    };
    process::exit(exit_code);
}

/// Execute the import subcommand.
///
/// Returns exit code: 0 = success, 1 = invalid input, 3 = I/O or storage error.
fn run_import(db_path: &str, file: &std::path::Path) -> i32 {
    let raw = match std::fs::read_to_string(file) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {}", file.display(), e);
            return 3;
        }
    };

    let records: Vec<AlbumRecord> = match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: '{}' is not a JSON array of albums: {}", file.display(), e);
            return 1;
        }
    };

    let store = match SqliteStore::open(db_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", db_path, e);
            return 3;
        }
    };

    match store.import_albums(&records) {
        Ok(count) => {
            println!("imported {} album(s) into {}", count, db_path);
            0
        }
        Err(discog_storage::StorageError::InvalidRecord(e)) => {
            eprintln!("Error: {}", e);
            1
        }
        Err(e) => {
            eprintln!("Error: import failed: {}", e);
            3
        }
    }
}

/// Execute the list subcommand.
fn run_list(db_path: &str, year: Option<&str>) -> i32 {
    let store = match SqliteStore::open(db_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", db_path, e);
            return 3;
        }
    };
    let service = CatalogService::new(Arc::new(store));

    let albums = match year {
        Some(year) => service.list_albums_by_year(Some(year)),
        None => service.list_albums(),
    };

    match albums {
        Ok(albums) => {
            let json = serde_json::to_string_pretty(&albums).unwrap_or_else(|e| {
                format!("{{\"error\": \"failed to serialize albums: {}\"}}", e)
            });
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            3
        }
    }
}

/// Execute the invoke subcommand.
///
/// Exits 0 whenever a proxy response was produced, whatever its status code.
fn run_invoke(db_path: &str, event_path: Option<&std::path::Path>) -> i32 {
    let raw = match event_path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map(|_| buf)
        }
    };
    let raw = match raw {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error: failed to read event: {}", e);
            return 3;
        }
    };

    let event: ProxyRequest = match serde_json::from_str(&raw) {
        Ok(event) => event,
        Err(e) => {
            eprintln!("Error: invalid proxy event: {}", e);
            return 1;
        }
    };

    let state = match AppState::new(db_path) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", db_path, e);
            return 3;
        }
    };
    let router = build_router(state);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {}", e);
            return 3;
        }
    };
    let response = runtime.block_on(invoke(&router, event));

    match serde_json::to_string_pretty(&response) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize response: {}", e);
            3
        }
    }
}
