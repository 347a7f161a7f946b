//! The diagnostic runner.
//!
//! Prints a banner and the environment info, then runs every probe once,
//! in order. Each probe runs inside its own failure scope: an `Err` or a
//! panic becomes a printed negative result and the next probe still runs.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use chrono::Utc;

use crate::config::LibraryConfig;
use crate::environment::EnvironmentInfo;
use crate::error::ProbeError;
use crate::probes::{default_probes, Probe, ProbeReport};
use crate::ui::UserInterface;

use super::report::{ProbeOutcome, RunReport};

/// Banner title.
pub const BANNER: &str = "Host Capability Probe";

thread_local! {
    /// Set while this thread is inside [`run_isolated`].
    static ISOLATED: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wrap the panic hook, once per process, so panics caught by
/// [`run_isolated`] are logged at debug level instead of printed. Panics
/// on any other thread, or outside a probe, reach the previous hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if ISOLATED.with(Cell::get) {
                tracing::debug!("Probe panicked: {}", info);
            } else {
                previous(info);
            }
        }));
    });
}

/// Runs probes in a fixed order and reports each one as it finishes.
pub struct DiagnosticRunner {
    libraries: LibraryConfig,
    probes: Vec<Box<dyn Probe>>,
}

impl DiagnosticRunner {
    /// Runner with the four standard probes.
    pub fn new(libraries: LibraryConfig) -> Self {
        let probes = default_probes(&libraries);
        Self { libraries, probes }
    }

    /// Runner with a custom probe list, run in the given order.
    pub fn with_probes(libraries: LibraryConfig, probes: Vec<Box<dyn Probe>>) -> Self {
        Self { libraries, probes }
    }

    /// Run the full sequence. Never fails: every probe error is captured
    /// in the returned report.
    pub fn run(&self, ui: &mut dyn UserInterface) -> RunReport {
        let generated_at = Utc::now();

        ui.show_header(BANNER);
        let environment = self.report_environment(ui);

        install_quiet_hook();

        let mut probes = Vec::with_capacity(self.probes.len());
        for (index, probe) in self.probes.iter().enumerate() {
            probes.push(self.run_probe(index + 1, probe.as_ref(), ui));
        }

        let report = RunReport {
            generated_at,
            environment,
            probes,
        };

        ui.message("");
        ui.message(&report.summary());
        tracing::debug!("{}", report.summary());

        report
    }

    /// Gather and print environment info. Individual lookups that fail are
    /// printed inline.
    pub fn report_environment(&self, ui: &mut dyn UserInterface) -> EnvironmentInfo {
        let info = EnvironmentInfo::gather(&self.libraries);
        for line in info.display_lines() {
            ui.message(&line);
        }
        info
    }

    /// Run one probe and print its result before returning.
    pub fn run_probe(
        &self,
        position: usize,
        probe: &dyn Probe,
        ui: &mut dyn UserInterface,
    ) -> ProbeOutcome {
        let label = probe.label();

        ui.message("");
        ui.label(&format!("{}. Testing {}...", position, label));
        if ui.output_mode().shows_verbose() {
            ui.detail(&format!("Candidates: {}", probe.candidates().join(", ")));
        }

        tracing::debug!("Running probe '{}'", label);
        match run_isolated(probe) {
            Ok(report) => {
                tracing::debug!("Probe '{}' succeeded", label);
                ui.success(&format!("{} successful", label));
                for line in &report.details {
                    ui.detail(line);
                }
                ProbeOutcome::passed(label, report.details)
            }
            Err(e) => {
                tracing::debug!("Probe '{}' failed: {} ({})", label, e, e.category());
                ui.failure(&format!(
                    "{} failed: {} (error type: {})",
                    label,
                    e,
                    e.category()
                ));
                ProbeOutcome::failed(label, &e)
            }
        }
    }
}

/// Run a probe, turning a panic into [`ProbeError::Panic`].
fn run_isolated(probe: &dyn Probe) -> Result<ProbeReport, ProbeError> {
    ISOLATED.with(|flag| flag.set(true));
    let result = panic::catch_unwind(AssertUnwindSafe(|| probe.run()));
    ISOLATED.with(|flag| flag.set(false));

    match result {
        Ok(result) => result,
        Err(payload) => Err(ProbeError::Panic(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
