use tracing::{error, info, warn};

use crate::errors::CherryError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Log an application error with its stable code. User errors (bad refs,
/// bad patterns) are warnings; everything else is an error.
pub fn log_app_error<E: CherryError + ?Sized>(e: &E) {
    if e.is_user_error() {
        warn!(
            event = "core.app.user_error",
            error_code = e.error_code(),
            error = %e
        );
    } else {
        error!(
            event = "core.app.error",
            error_code = e.error_code(),
            error = %e
        );
    }
}
