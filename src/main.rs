use clap::Parser;
use logo_search::cli::{Cli, Command};
use logo_search::config::Settings;
use logo_search::domain::Phase;
use logo_search::download;
use logo_search::lookup::HttpLookup;
use logo_search::session::Session;
use logo_search::storage::{FileStore, SnapshotStore};
use logo_search::widget::Autocomplete;
use logo_search::Error;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    let store = FileStore::open(&settings.storage.path)?;
    let lookup = HttpLookup::new(settings.lookup.base_url.clone());

    // The state file is authoritative between invocations; restored text is
    // not re-fetched here.
    let (mut session, _refresh) =
        Session::mount(SnapshotStore::new(store, settings.storage.namespace.clone()))?;

    match cli.command {
        Command::Type { text } => {
            if let Some(request) = session.input(text)? {
                session.lookup(&lookup, &request).await?;
            }
        }
        Command::Select { index } => {
            let logo = session.select(index)?;
            info!("Selected {} ({})", logo.display_name(), logo.domain);
        }
        Command::Submit => {
            let (submission, follow_up) = session.submit()?;
            println!("{}", serde_json::to_string_pretty(&submission)?);
            if let Some(request) = follow_up {
                session.lookup(&lookup, &request).await?;
            }
        }
        Command::Reset => session.reset()?,
        Command::Download { out_dir } => {
            let request = session.widget().download().ok_or(Error::NoSelection)?;
            let path = download::save_to_dir(lookup.client(), &request, &out_dir).await?;
            println!("{}", path.display());
            return Ok(());
        }
        Command::Show => {}
    }

    print_widget(session.widget());
    Ok(())
}

fn print_widget(widget: &Autocomplete) {
    match widget.text() {
        "" => println!("Search: (empty)"),
        text => println!("Search: {}", text),
    }

    if widget.panel_visible() {
        if widget.suggestions().is_empty() {
            println!();
            println!("  Nothing found...");
            println!("  Search by entering it's website URL for better result.");
        } else {
            for (i, suggestion) in widget.suggestions().iter().enumerate() {
                println!("  [{}] {:<32} {}", i, suggestion.display_name(), suggestion.domain);
            }
        }
    }

    if let Some(logo) = widget.selected() {
        println!();
        println!("Selected: {}", logo.name);
        println!("  {}", logo.icon);
        println!("  run `logo-search download` to save it");
    }

    if widget.phase() == Phase::Closed && !widget.suggestions().is_empty() {
        println!("({} suggestions for the submitted value)", widget.suggestions().len());
    }
}
