use clap::{Parser, Subcommand};
use folio::core::catalog::Page;
use folio::core::config::{self, CliOverrides, FolioConfig};
use folio::core::search::filter_books;
use folio::core::source::BookSource;
use folio::tui;
use log::{info, warn};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "folio", about = "Browse a book catalog in the terminal")]
struct Args {
    /// Books per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Number of generated books
    #[arg(long)]
    catalog_size: Option<usize>,

    /// Simulated fetch latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive browser (default)
    Browse,
    /// Print one page of the catalog and exit
    Page {
        /// 1-based page number
        #[arg(default_value_t = 1)]
        number: usize,

        /// Only keep books whose title contains this text
        #[arg(short, long, default_value = "")]
        query: String,

        /// Emit JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (FolioConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        catalog_size: args.catalog_size,
        page_size: args.page_size,
        latency_ms: args.latency_ms,
    };
    let resolved = config::resolve(&file_config, &cli);

    // File logger: the terminal belongs to the UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        warn!("Ignoring config file: {}", e);
    }
    for warning in &resolved.warnings {
        warn!("{}", warning);
    }
    info!("Folio starting up with {:?}", resolved);

    match args.command.unwrap_or(Command::Browse) {
        Command::Browse => tui::run(resolved)?,
        Command::Page {
            number,
            query,
            json,
        } => {
            let source = tui::build_source(&resolved);
            let mut page = source.fetch_page(number).await?;
            page.books = filter_books(&page.books, &query);
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                print!("{}", format_page(&page));
            }
        }
    }
    Ok(())
}

/// One `id  title  author` line per book, then a paging summary.
fn format_page(page: &Page) -> String {
    let mut out = String::new();
    for book in &page.books {
        out.push_str(&format!("{:>4}  {}  {}\n", book.id, book.title, book.author));
    }
    let more = if page.has_more { "more pages" } else { "last page" };
    out.push_str(&format!(
        "-- page {} ({} books, {})\n",
        page.number,
        page.books.len(),
        more
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::core::catalog::Catalog;

    #[test]
    fn test_format_page() {
        let page = Catalog::generate(12).page(2, 10);
        let text = format_page(&page);
        assert_eq!(
            text,
            "  11  Book Title 11  Author 11\n  12  Book Title 12  Author 12\n-- page 2 (2 books, last page)\n"
        );
    }

    #[test]
    fn test_args_default_to_browse() {
        let args = Args::parse_from(["folio"]);
        assert!(args.command.is_none());
        assert!(args.page_size.is_none());
    }

    #[test]
    fn test_args_page_command() {
        let args = Args::parse_from(["folio", "--page-size", "5", "page", "3", "-q", "title", "--json"]);
        assert_eq!(args.page_size, Some(5));
        match args.command {
            Some(Command::Page { number, query, json }) => {
                assert_eq!(number, 3);
                assert_eq!(query, "title");
                assert!(json);
            }
            _ => panic!("expected page command"),
        }
    }
}
