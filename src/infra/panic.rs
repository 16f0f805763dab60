//! # Panic Capture Module / Panic 捕获模块
//!
//! Runs fixture code under `catch_unwind`. A process-wide hook, installed
//! once, records message, location and backtrace of panics raised while
//! capture is active on the current thread and keeps them off stderr.
//! Panics outside a capture are forwarded to the previous hook.
//!
//! 在 `catch_unwind` 下运行夹具代码。一个进程级钩子（只安装一次）会记录当前线程在捕获期间
//! 发生的 panic 的消息、位置和回溯，且不会输出到 stderr。捕获范围之外的 panic 交给之前的钩子处理。

use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

static HOOK: Once = Once::new();

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static FORCE_BACKTRACE: Cell<bool> = const { Cell::new(false) };
    static LAST_PANIC: RefCell<Option<PanicReport>> = const { RefCell::new(None) };
}

/// What a caught panic left behind.
/// 被捕获的 panic 留下的信息。
#[derive(Debug)]
pub struct PanicReport {
    pub message: String,
    pub location: Option<String>,
    pub backtrace: Option<Backtrace>,
}

impl fmt::Display for PanicReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)?;
        if let Some(location) = &self.location {
            write!(f, "\n    at {location}")?;
        }
        if let Some(backtrace) = &self.backtrace {
            write!(f, "\nstack backtrace:\n{backtrace}")?;
        }
        Ok(())
    }
}

impl std::error::Error for PanicReport {}

fn install_hook() {
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !CAPTURING.with(Cell::get) {
                previous(info);
                return;
            }
            let message = payload_message(info.payload());
            let backtrace = if FORCE_BACKTRACE.with(Cell::get) {
                Backtrace::force_capture()
            } else {
                Backtrace::capture()
            };
            let report = PanicReport {
                message,
                location: info.location().map(ToString::to_string),
                backtrace: (backtrace.status() == BacktraceStatus::Captured).then_some(backtrace),
            };
            LAST_PANIC.with(|slot| *slot.borrow_mut() = Some(report));
        }));
    });
}

/// Resets the capture flag even if the closure unwinds past it.
struct CaptureGuard {
    was_capturing: bool,
}

impl CaptureGuard {
    fn enter(force_backtrace: bool) -> Self {
        FORCE_BACKTRACE.with(|f| f.set(force_backtrace));
        Self {
            was_capturing: CAPTURING.with(|c| c.replace(true)),
        }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        CAPTURING.with(|c| c.set(self.was_capturing));
    }
}

/// Runs `f`, turning a panic into a [`PanicReport`] error.
///
/// 运行 `f`，并将 panic 转换为 [`PanicReport`] 错误。
pub fn catch<R>(force_backtrace: bool, f: impl FnOnce() -> R) -> Result<R, PanicReport> {
    install_hook();
    let result = {
        let _guard = CaptureGuard::enter(force_backtrace);
        panic::catch_unwind(AssertUnwindSafe(f))
    };
    result.map_err(|payload| {
        LAST_PANIC
            .with(|slot| slot.borrow_mut().take())
            .unwrap_or_else(|| PanicReport {
                message: payload_message(payload.as_ref()),
                location: None,
                backtrace: None,
            })
    })
}

fn payload_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_passes_value_through() {
        assert_eq!(catch(false, || 40 + 2).unwrap(), 42);
    }

    #[test]
    fn test_catch_records_message_and_location() {
        let report = catch(false, || -> i32 { panic!("boom {}", 7) }).unwrap_err();
        assert_eq!(report.message, "boom 7");
        assert!(report.location.as_deref().unwrap().contains("panic.rs"));
        assert!(report.to_string().starts_with("panicked: boom 7"));
    }

    #[test]
    fn test_force_backtrace() {
        let report = catch(true, || -> () { panic!("traced") }).unwrap_err();
        assert!(report.backtrace.is_some());
        assert!(report.to_string().contains("stack backtrace:"));
    }

    #[test]
    fn test_capture_flag_restored() {
        let _ = catch(false, || -> () { panic!("first") });
        assert!(!CAPTURING.with(Cell::get));
    }
}
