//! Long-running refresh loop behind `wishlist watch`.
//!
//! DESIGN
//! ======
//! One `select!` loop owns the controller. Fetches run on spawned tasks and
//! report back over a channel, so all state changes happen on this task and
//! the page is repainted after each one.
//!
//! SYSTEM CONTEXT
//! ==============
//! The interval's first tick fires immediately and serves as the startup
//! load. Later ticks are gated by visibility (`H` on stdin) and by the
//! controller's overlap guard. `R` reloads regardless of either.

use std::sync::Arc;

use catalog::Catalog;
use client::state::refresh::{Admission, LoadTicket, Trigger};
use client::util::date::local_now;
use client::util::schedule::{IntervalScheduler, Scheduler};
use client::util::shortcuts::{SHORTCUTS, Shortcut};
use client::{CatalogSource, Controller, HtmlPainter, JsonFileStore, LoadError, LoadOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::CliError;
use crate::config::Settings;
use crate::input::{EXTRA_KEYS, InputCommand, parse_command};
use crate::output::OutputTarget;

#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

const RESULT_QUEUE_CAPACITY: usize = 8;

type LoadResult = (LoadTicket, Result<Catalog, LoadError>);

/// Run until `Q`, Ctrl-C, or stdin error.
///
/// # Errors
///
/// Returns [`CliError`] only for startup failures (source or template setup).
pub async fn run(settings: &Settings) -> Result<(), CliError> {
    let source: Arc<dyn CatalogSource> = Arc::from(settings.catalog_source()?);
    let painter = HtmlPainter::new()?;
    let scheduler = IntervalScheduler::new(settings.refresh_period);
    let store = Arc::new(JsonFileStore::new(&settings.prefs_path));
    let mut controller = Controller::new(settings.client.clone(), store);
    controller.restore_preference();

    info!(
        source = %source.describe(),
        out = %settings.output,
        period_secs = scheduler.period().as_secs(),
        "watching wishlist"
    );
    print_banner();

    let session = Session { controller, source, painter, scheduler, output: settings.output.clone() };
    let stdin = BufReader::new(tokio::io::stdin());
    event_loop(session, stdin, ctrl_c()).await;
    Ok(())
}

/// Everything the loop owns while watching.
pub struct Session {
    pub controller: Controller,
    pub source: Arc<dyn CatalogSource>,
    pub painter: HtmlPainter,
    pub scheduler: IntervalScheduler,
    pub output: OutputTarget,
}

/// Resolves on Ctrl-C. Never resolves if the handler can't be installed.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
}

/// Drive ticks, load results and `input` commands until `Q` or `shutdown`.
///
/// `shutdown` is polled across iterations, so a signal that arrives while
/// another branch is running still stops the loop. Returns the session so
/// callers can inspect the final state.
pub async fn event_loop<R, S>(mut session: Session, input: R, shutdown: S) -> Session
where
    R: AsyncBufRead + Unpin,
    S: Future<Output = ()>,
{
    let Session { controller, source, painter, scheduler, output } = &mut session;
    publish(controller, painter, output).await;

    let (tx, mut rx) = mpsc::channel::<LoadResult>(RESULT_QUEUE_CAPACITY);
    let mut ticker = tokio::time::interval(scheduler.period());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut lines = input.lines();
    let mut input_open = true;
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                start_load(controller, source, &tx, Trigger::Scheduled, scheduler.is_visible());
            }
            Some((ticket, result)) = rx.recv() => {
                if controller.finish_load(ticket, result) != LoadOutcome::Stale {
                    publish(controller, painter, output).await;
                }
            }
            line = lines.next_line(), if input_open => match line {
                Ok(Some(line)) => match parse_command(&line) {
                    Some(InputCommand::Shortcut(Shortcut::ToggleView)) => {
                        let mode = controller.toggle_view_mode();
                        info!(%mode, "view mode");
                        publish(controller, painter, output).await;
                    }
                    Some(InputCommand::Shortcut(Shortcut::Reload)) => {
                        info!("reloading");
                        start_load(controller, source, &tx, Trigger::Manual, scheduler.is_visible());
                    }
                    Some(InputCommand::ToggleVisibility) => {
                        let visible = scheduler.toggle_visible();
                        info!(visible, "visibility changed");
                    }
                    Some(InputCommand::Quit) => break,
                    None => debug!(input = %line.trim(), "ignoring unknown command"),
                },
                Ok(None) => {
                    debug!("stdin closed; continuing on timer only");
                    input_open = false;
                }
                Err(e) => {
                    warn!(error = %e, "stdin read failed; continuing on timer only");
                    input_open = false;
                }
            },
            () = &mut shutdown => break,
        }
    }

    info!("stopped");
    session
}

/// Ask the gate for a load and, if admitted, fetch on a separate task.
fn start_load(
    controller: &mut Controller,
    source: &Arc<dyn CatalogSource>,
    tx: &mpsc::Sender<LoadResult>,
    trigger: Trigger,
    visible: bool,
) {
    let Admission::Start(ticket) = controller.begin_load(trigger, visible) else {
        return;
    };
    let source = Arc::clone(source);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = source.load().await;
        if tx.send((ticket, result)).await.is_err() {
            debug!(seq = ticket.seq, "loop gone; dropping load result");
        }
    });
}

/// Paint the current state and write it out. Failures are logged, not fatal.
pub async fn publish(controller: &Controller, painter: &HtmlPainter, output: &OutputTarget) {
    let page = controller.view(local_now());
    let html = match painter.paint(&page) {
        Ok(html) => html,
        Err(e) => {
            error!(error = %e, "page render failed");
            return;
        }
    };
    if let Err(e) = output.write_page(&html).await {
        error!(error = %e, out = %output, "failed to write page");
    } else {
        debug!(out = %output, products = page.counters.product_count, "page written");
    }
}

fn print_banner() {
    eprintln!("+---------------------------------------+");
    eprintln!("|  WISHLIST                             |");
    eprintln!("+---------------------------------------+");
    eprintln!("|  Shortcuts:                           |");
    for row in SHORTCUTS {
        eprintln!("|  {:<2} {:<34}|", row.key, row.action);
    }
    for (key, action) in EXTRA_KEYS {
        eprintln!("|  {key:<2} {action:<34}|");
    }
    eprintln!("+---------------------------------------+");
}
