//! Headless demo shell: assembles the four screens, loads each one, and
//! prints the rendered rows (or the terminal error) to stdout. Rendering
//! proper is out of this crate's hands; this binary stands in for it.

use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

use terminal::app::{App, ListPhase, Screen};
use terminal::{CurrentUser, Session};

/// How long the demo waits for all screens to settle before giving up.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(30);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let is_premium = std::env::var("LEDGER_PREMIUM").map(|v| v != "0").unwrap_or(true);
    let session = Session::new(CurrentUser {
        id: 1,
        username: "demo".to_string(),
        is_premium,
    });

    tracing::info!(premium = is_premium, "Starting ledger terminal demo shell");
    let mut app = App::new(session);

    // Visit every tab once; each first appearance kicks off a load.
    for screen in Screen::all() {
        app.navigate(*screen);
    }

    let deadline = Instant::now() + SETTLE_TIMEOUT;
    while Instant::now() < deadline {
        app.on_tick();
        if Screen::all()
            .iter()
            .all(|screen| app.state.read().list(*screen).phase != ListPhase::Loading)
        {
            break;
        }
        std::thread::sleep(Duration::from_millis(50));
    }

    let state = app.state.read();
    for screen in Screen::all() {
        let list = state.list(*screen);
        println!("== {} ==", screen.title());
        match &list.phase {
            ListPhase::Rendered => {
                if list.items.is_empty() {
                    println!("  (no items)");
                }
                for item in &list.items {
                    println!("  {}  |  {}", item.label_text, item.detail_text);
                }
            }
            ListPhase::ErrorShown(message) => println!("  error: {message}"),
            ListPhase::Loading => println!("  (timed out waiting for load)"),
            ListPhase::Idle => println!("  (never loaded)"),
        }
        println!();
    }
}
