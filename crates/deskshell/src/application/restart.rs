//! Use case: restart the application in place.
//!
//! A replacement process is spawned first.  Only once that succeeded does the
//! current process run its close hook (so the window geometry is saved) and
//! exit with status 0.

use tracing::{error, info};

use crate::application::config_store::ConfigStore;
use crate::application::lifecycle::LifecycleHooks;
use crate::application::ports::{DocumentRepository, HostRuntime, Platform, PlatformError};

/// Restarts the application.
///
/// With a real [`Platform`] this does not return on success.
///
/// # Errors
///
/// Returns the spawn error; the current process keeps running and its
/// lifecycle is left untouched.
pub fn restart_application<R: DocumentRepository>(
    lifecycle: &mut LifecycleHooks,
    store: &mut ConfigStore<R>,
    host: &dyn HostRuntime,
    platform: &dyn Platform,
) -> Result<(), PlatformError> {
    info!("Restarting application");
    if let Err(e) = platform.spawn_replacement() {
        error!(error = %e, "Failed to restart application");
        return Err(e);
    }
    lifecycle.before_close(store, host);
    lifecycle.on_shutdown(store);
    platform.exit(0);
    Ok(())
}
