/// Console stop handling.
///
/// Ctrl+C and Ctrl+Break set a shared stop flag instead of killing the
/// process, so the monitor finishes its current step and `main` returns 0.
use crate::Result;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Route console interrupts to `flag`. Only the first call installs a handler.
#[cfg(windows)]
pub fn install_stop_handler(flag: Arc<AtomicBool>) -> Result<()> {
    use std::sync::atomic::Ordering;
    use std::sync::OnceLock;
    use windows::Win32::Foundation::BOOL;
    use windows::Win32::System::Console::{
        SetConsoleCtrlHandler, CTRL_BREAK_EVENT, CTRL_C_EVENT,
    };

    static STOP_FLAG: OnceLock<Arc<AtomicBool>> = OnceLock::new();

    unsafe extern "system" fn on_console_ctrl(ctrl_type: u32) -> BOOL {
        if let Some(flag) = STOP_FLAG.get() {
            flag.store(true, Ordering::Relaxed);
        }
        // Handled for interrupts; close/logoff/shutdown fall through to the
        // default handler, which terminates the process.
        BOOL::from(ctrl_type == CTRL_C_EVENT || ctrl_type == CTRL_BREAK_EVENT)
    }

    if STOP_FLAG.set(flag).is_err() {
        tracing::debug!("Console stop handler already installed");
        return Ok(());
    }

    unsafe { SetConsoleCtrlHandler(Some(on_console_ctrl), true) }
        .map_err(|e| crate::UsbSleuthError::ControlHandler(e.to_string()))?;

    tracing::debug!("Console stop handler installed");
    Ok(())
}

/// No handler is installed off Windows; the default SIGINT action applies.
#[cfg(not(windows))]
pub fn install_stop_handler(flag: Arc<AtomicBool>) -> Result<()> {
    let _ = flag;
    tracing::debug!("Console stop handler not available on this platform");
    Ok(())
}
