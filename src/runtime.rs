//! The polling loop that connects the display, the store and the library.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use crate::actions::{self, ActionRegistry};
use crate::config::Config;
use crate::driver::{Driver, DriverError, ALL_DOTS};
use crate::state::{AppState, StateFile, TaskFlag};
use crate::store::{DispatchError, Store, StoreHandle, StoreLayer, Subscriber};
use crate::sync;
use crate::ui::buttons::Bindings;

/// Owns the driver for the lifetime of the UI.
pub struct Runtime<D: Driver> {
    config: Config,
    driver: D,
    bindings: Bindings,
    log_file: Option<PathBuf>,
}

impl<D: Driver> Runtime<D> {
    pub fn new(config: Config, driver: D) -> Self {
        let log_file = config.files.log_file.clone();
        Self {
            config,
            driver,
            bindings: Bindings::standard(),
            log_file,
        }
    }

    /// Log file copied by the backup entry of the system menu, when the
    /// config does not name one.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        if self.log_file.is_none() {
            self.log_file = Some(path.into());
        }
        self
    }

    /// Run until a shutdown is dispatched, then save and return the final
    /// state.
    ///
    /// `subscribers` are registered before the first dispatch.
    pub async fn run(mut self, subscribers: Vec<Subscriber>) -> anyhow::Result<Arc<AppState>> {
        let registry = ActionRegistry::standard().context("invalid reducer table")?;
        let state_file = StateFile::new(&self.config.files.state_file);
        let (store, server) = StoreLayer::new(Store::new(state_file.read(), registry));
        let server_task = tokio::spawn(server.run());

        for subscriber in subscribers {
            store.subscribe(subscriber).await?;
        }

        let dimensions = self.driver.dimensions();
        store
            .dispatch(actions::set_dimensions(dimensions))
            .await
            .with_context(|| {
                format!(
                    "driver reported unusable display size {}x{}",
                    dimensions.width, dimensions.height
                )
            })?;
        let state = store.state().await?;
        if let Err(e) = sync::sync(&state, &self.config.files.library_dir, &store).await {
            tracing::error!(error = %e, "initial library sync failed");
        }
        tracing::info!(
            width = state.dimensions.width,
            height = state.dimensions.height,
            "reader ready"
        );

        let signal_store = store.clone();
        let signal_task = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupt received");
                if let Err(e) = signal_store.dispatch(actions::shutdown()).await {
                    tracing::warn!(error = %e, "could not dispatch shutdown");
                }
            }
        });

        let mut interval =
            tokio::time::interval(Duration::from_millis(self.config.runtime.poll_interval_ms));
        loop {
            interval.tick().await;
            self.check_buttons(&store).await?;

            let state = store.state().await?;
            if state.shutting_down {
                tracing::info!("shutting down");
                break;
            }
            self.run_requested_tasks(&state, &store).await?;
        }

        signal_task.abort();
        let _ = signal_task.await;
        drop(store);

        let final_state = server_task.await.context("store task failed")?;
        state_file
            .write(&final_state)
            .with_context(|| format!("saving {}", state_file.path().display()))?;
        Ok(final_state)
    }

    /// Dispatch the actions bound to the buttons pressed since the last
    /// poll, resolved against the location at poll time.
    async fn check_buttons(&mut self, store: &StoreHandle) -> Result<(), DispatchError> {
        let presses = self.driver.buttons();
        if presses.is_empty() {
            return Ok(());
        }
        let location = store.state().await?.location;
        for action in self.bindings.resolve(location, &presses) {
            match store.dispatch(action).await {
                Ok(_) => {}
                Err(DispatchError::Disconnected) => return Err(DispatchError::Disconnected),
                Err(e) => {
                    tracing::warn!(error = %e, "button action failed");
                    self.driver.send_error_sound();
                }
            }
        }
        Ok(())
    }

    /// Carry out every operation whose flag is in progress, then mark it done.
    async fn run_requested_tasks(
        &mut self,
        state: &AppState,
        store: &StoreHandle,
    ) -> Result<(), DispatchError> {
        if state.replacing_library.is_in_progress() {
            tracing::info!("replacing library from USB stick");
            let files = &self.config.files;
            match sync::replace(&files.library_dir, &files.usb_dir, store).await {
                Ok(plan) => tracing::info!(
                    added = plan.added.len(),
                    removed = plan.removed.len(),
                    "library replaced"
                ),
                Err(e) => {
                    tracing::error!(error = %e, "library replace failed");
                    self.driver.send_error_sound();
                }
            }
            store
                .dispatch(actions::replace_library(TaskFlag::Done))
                .await?;
        }

        if state.backing_up_log.is_in_progress() {
            match self.backup_log().await {
                Ok(target) => tracing::info!(to = %target.display(), "log backed up"),
                Err(e) => {
                    tracing::error!(error = %e, "log backup failed");
                    self.driver.send_error_sound();
                }
            }
            store.dispatch(actions::backup_log(TaskFlag::Done)).await?;
        }

        if state.hardware.resetting_display.is_in_progress() {
            let result = self.driver.reset_display();
            self.report(result, "display reset");
            store.dispatch(actions::reset_display(TaskFlag::Done)).await?;
        }

        if state.hardware.warming_up.is_in_progress() {
            let result = self.warm_up();
            self.report(result, "display warm-up");
            store.dispatch(actions::warm_up(TaskFlag::Done)).await?;
        }

        Ok(())
    }

    fn warm_up(&mut self) -> Result<(), DriverError> {
        let raised = vec![ALL_DOTS; self.driver.page_length()];
        self.driver.set_braille(&raised)?;
        self.driver.clear_page()
    }

    fn report(&mut self, result: Result<(), DriverError>, operation: &str) {
        match result {
            Ok(()) => {
                tracing::info!(operation, "finished");
                self.driver.send_ok_sound();
            }
            Err(e) => {
                tracing::error!(operation, error = %e, "driver error");
                self.driver.send_error_sound();
            }
        }
    }

    async fn backup_log(&self) -> anyhow::Result<PathBuf> {
        let source = self
            .log_file
            .as_deref()
            .context("no log file configured")?;
        let target = backup_target(source, &self.config.files.usb_dir)?;
        tokio::fs::copy(source, &target)
            .await
            .with_context(|| format!("copying {} to {}", source.display(), target.display()))?;
        Ok(target)
    }
}

fn backup_target(source: &Path, usb_dir: &Path) -> anyhow::Result<PathBuf> {
    let name = source
        .file_name()
        .with_context(|| format!("log file {} has no file name", source.display()))?;
    Ok(usb_dir.join(name))
}
