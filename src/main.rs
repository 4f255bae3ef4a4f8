//! dashboard-sim - run dashboard page behaviors against a page file.
//!
//! Usage:
//!   dashboard-sim page.xhtml                          # load and dump the tree
//!   dashboard-sim page.xhtml hover:save leave:save    # simulate pointer moves
//!   dashboard-sim page.xhtml click:user-menu-button   # simulate clicks
//!   dashboard-sim page.xhtml --run-for 180            # keep the clock ticking

use clap::Parser;
use dashboard_ui_sim::dashboard::spawn_clock;
use dashboard_ui_sim::dump::{build_tree, describe};
use dashboard_ui_sim::event::Event;
use dashboard_ui_sim::markup::load_page_file;
use dashboard_ui_sim::{Dashboard, DashboardConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dashboard-sim")]
#[command(about = "Simulate dashboard page behaviors (tooltips, menus, clock) on a page file")]
struct Cli {
    /// XHTML page to load
    page: PathBuf,

    /// Actions applied in order after load: hover:ID, leave:ID, click:ID, tick
    #[arg(value_parser = parse_action)]
    actions: Vec<Action>,

    /// Config file (defaults to the per-user config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep the clock running for this many seconds before the final dump
    #[arg(long)]
    run_for: Option<u64>,

    /// Omit elements hidden with the `hidden` class from the dump
    #[arg(long)]
    visible_only: bool,
}

#[derive(Debug, Clone)]
enum Action {
    Hover(String),
    Leave(String),
    Click(String),
    Tick,
}

fn parse_action(s: &str) -> Result<Action, String> {
    if s == "tick" {
        return Ok(Action::Tick);
    }
    let (kind, id) = s
        .split_once(':')
        .ok_or_else(|| format!("expected KIND:ID or tick, got {:?}", s))?;
    let id = id.to_string();
    match kind {
        "hover" => Ok(Action::Hover(id)),
        "leave" => Ok(Action::Leave(id)),
        "click" => Ok(Action::Click(id)),
        other => Err(format!("unknown action {:?} (hover, leave, click, tick)", other)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match cli.config {
        Some(ref path) => DashboardConfig::load_from(path)?,
        None => DashboardConfig::load(),
    };

    let document = load_page_file(&cli.page, config.text_metrics)?;
    let mut dashboard = Dashboard::new(document, config);
    dashboard.load();

    for action in &cli.actions {
        apply(&mut dashboard, action)?;
    }

    let dashboard = match cli.run_for {
        Some(secs) => run_clock_for(dashboard, Duration::from_secs(secs))?,
        None => dashboard,
    };

    print!("{}", build_tree(dashboard.document(), cli.visible_only));
    Ok(())
}

fn apply(dashboard: &mut Dashboard, action: &Action) -> dashboard_ui_sim::Result<()> {
    match action {
        Action::Hover(id) => {
            let el = dashboard.element(id)?;
            dashboard.dispatch(Event::mouse_enter(el));
            if let Some(overlay) = dashboard.tooltips().overlay_for(el) {
                println!("tooltip: {}", describe(dashboard.document(), overlay));
            }
        }
        Action::Leave(id) => {
            let el = dashboard.element(id)?;
            dashboard.dispatch(Event::mouse_leave(el));
        }
        Action::Click(id) => {
            let el = dashboard.element(id)?;
            dashboard.dispatch(Event::click(el));
        }
        Action::Tick => {
            if let Some(time) = dashboard.update_clock() {
                println!("clock: {}", time);
            }
        }
    }
    Ok(())
}

/// Run the periodic clock on a current-thread runtime for `duration`.
fn run_clock_for(dashboard: Dashboard, duration: Duration) -> Result<Dashboard, Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build()?;
    let period = dashboard.config().clock_interval();
    let shared = Arc::new(tokio::sync::Mutex::new(dashboard));

    runtime.block_on(async {
        let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
        let handle = spawn_clock(shared.clone(), period, stop_rx);
        tokio::time::sleep(duration).await;
        let _ = stop_tx.send(true);
        let _ = handle.await;
    });

    let dashboard = Arc::try_unwrap(shared)
        .map_err(|_| "clock task still holds the dashboard")?
        .into_inner();
    Ok(dashboard)
}
