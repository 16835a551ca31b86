//! extfind - gated recursive search by file extension
//!
//! Entry point for the CLI application.

use std::process::ExitCode;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::{bounded, Receiver};
use extfind::bridge::{BridgeEvent, SignalBridge};
use extfind::config::{CliArgs, FindConfig};
use extfind::{signal, Diagnostics, Results};
use tracing::{error, info, Dispatch};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let dispatch = logging(args.verbose);
    let _guard = tracing::dispatcher::set_default(&dispatch);

    match run(args, dispatch) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs, dispatch: Dispatch) -> Result<()> {
    let config = FindConfig::from_args(args).context("Invalid configuration")?;
    let diagnostics = Diagnostics::new(dispatch);

    info!(os = std::env::consts::OS, ext = %config.extension, timeout_secs = config.timeout.as_secs(), "starting");

    let (cancel_trigger, cancel) = signal();
    let (proceed_trigger, proceed) = signal();
    if config.proceed_immediately {
        proceed_trigger.fire();
    } else {
        info!(pid = std::process::id(), "waiting for SIGUSR1 to proceed");
    }

    // Setup signal handlers
    let (interrupt_tx, interrupts) = bounded(1);
    ctrlc::set_handler(move || {
        let _ = interrupt_tx.try_send(());
    })
    .context("Failed to set signal handler")?;
    let (listener, proceeds) = ProceedListener::start().context("Failed to set SIGUSR1 handler")?;

    let bridge = SignalBridge::spawn(
        config.timeout,
        interrupts,
        proceeds,
        cancel_trigger,
        proceed_trigger,
        diagnostics.clone(),
    )
    .context("Failed to start signal bridge")?;

    let mut builder = extfind::search()
        .extension(config.extension.clone())
        .cancel(cancel)
        .proceed(proceed)
        .sorted(config.sorted)
        .diagnostics(diagnostics);
    if let Some(root) = config.root.clone() {
        builder = builder.root(root);
    }

    let worker = thread::Builder::new()
        .name("extfind-search".into())
        .spawn(move || builder.run())
        .context("Failed to start search thread")?;

    // Wait for every helper thread before exiting
    let outcome = worker
        .join()
        .map_err(|_| anyhow::anyhow!("search thread panicked"))?;
    let event = bridge.finish();
    listener.close();

    let results = outcome.context("Search failed")?;
    print_results(&results);

    match event {
        BridgeEvent::Interrupted => info!("search interrupted"),
        BridgeEvent::DeadlineElapsed => info!("time budget exhausted"),
        BridgeEvent::Completed => {}
    }
    if results.cancelled {
        info!("search was cancelled before completion");
    }
    info!(
        matches = results.stats.matches,
        files = results.stats.files,
        dirs = results.stats.dirs,
        elapsed_secs = results.stats.duration.as_secs_f64(),
        "Done"
    );

    Ok(())
}

fn print_results(results: &Results) {
    let mut files: Vec<_> = results.files.values().collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    for f in files {
        println!("\tName: {}\t\t Path: {}", f.name, f.path.display());
    }
}

/// Thread forwarding SIGUSR1 into the bridge's proceed channel.
#[cfg(unix)]
struct ProceedListener {
    handle: signal_hook::iterator::Handle,
    thread: thread::JoinHandle<()>,
}

#[cfg(unix)]
impl ProceedListener {
    fn start() -> Result<(Self, Receiver<()>)> {
        use crossbeam_channel::TrySendError;
        use signal_hook::consts::SIGUSR1;
        use signal_hook::iterator::Signals;

        let (tx, rx) = bounded(1);
        let mut signals = Signals::new([SIGUSR1])?;
        let handle = signals.handle();
        let thread = thread::Builder::new()
            .name("extfind-sigusr1".into())
            .spawn(move || {
                for _ in signals.forever() {
                    // Full means a request is already pending
                    if let Err(TrySendError::Disconnected(())) = tx.try_send(()) {
                        break;
                    }
                }
            })?;
        Ok((Self { handle, thread }, rx))
    }

    /// Unregister the handler and wait for the thread.
    fn close(self) {
        self.handle.close();
        let _ = self.thread.join();
    }
}

/// No user signal here; only `--proceed` opens the gate.
#[cfg(not(unix))]
struct ProceedListener;

#[cfg(not(unix))]
impl ProceedListener {
    fn start() -> Result<(Self, Receiver<()>)> {
        Ok((Self, crossbeam_channel::never()))
    }

    fn close(self) {}
}

fn logging(verbose: bool) -> Dispatch {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("extfind=debug,warn")
        } else {
            EnvFilter::new("extfind=info,warn")
        }
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .finish();

    Dispatch::new(subscriber)
}
