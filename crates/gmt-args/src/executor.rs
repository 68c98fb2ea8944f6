//! Boundary with the component that actually runs GMT modules.
//!
//! This crate never executes anything itself. It prepares a normalized
//! [`CallArgs`] and hands it to a [`ModuleExecutor`] implementation, which
//! may call into the GMT C API, spawn a process or just record the call.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gmt_args::{ArgsResult, CallArgs, ModuleExecutor};
//!
//! struct Session;
//!
//! impl ModuleExecutor for Session {
//!     type Output = ();
//!     fn call_module(&self, module: &str, args: &CallArgs) -> ArgsResult<()> {
//!         // GMT_Call_Module(api, module, GMT_MODULE_CMD, args.to_arg_string())
//!     }
//! }
//! ```

use crate::args::CallArgs;
use crate::error::ArgsResult;
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Consumer of normalized module calls.
pub trait ModuleExecutor {
    /// Whatever the executor produces for a call.
    type Output;

    /// Run `module` with already-normalized arguments.
    ///
    /// Keyword keys are canonical option codes (or pass-through names);
    /// an empty string value means the flag is present without a value.
    fn call_module(&self, module: &str, args: &CallArgs) -> ArgsResult<Self::Output>;
}

/// A call captured by [`RecordingExecutor`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub module: String,
    pub args: CallArgs,
}

/// Executor that records calls and returns their argument string.
///
/// Useful for dry runs and tests.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingExecutor {
    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ModuleExecutor for RecordingExecutor {
    type Output = String;

    fn call_module(&self, module: &str, args: &CallArgs) -> ArgsResult<String> {
        let line = args.to_arg_string();
        info!("gmt {} {}", module, line);
        // push is the only mutation, so a poisoned log is still consistent
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                module: module.to_string(),
                args: args.clone(),
            });
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgsError;
    use std::sync::Arc;
    use std::thread;

    struct Failing;

    impl ModuleExecutor for Failing {
        type Output = ();

        fn call_module(&self, module: &str, _args: &CallArgs) -> ArgsResult<()> {
            Err(ArgsError::Executor {
                module: module.to_string(),
                message: "session closed".to_string(),
            })
        }
    }

    #[test]
    fn recording_executor_keeps_call_order() {
        let executor = RecordingExecutor::default();
        executor
            .call_module("basemap", &CallArgs::new().kwarg("B", "af"))
            .unwrap();
        executor
            .call_module("coast", &CallArgs::new().kwarg("W", "0.5p"))
            .unwrap();

        let modules: Vec<_> = executor.calls().into_iter().map(|c| c.module).collect();
        assert_eq!(modules, vec!["basemap", "coast"]);
    }

    #[test]
    fn executor_errors_propagate() {
        let err = Failing.call_module("info", &CallArgs::new()).unwrap_err();
        assert!(matches!(err, ArgsError::Executor { .. }));
    }

    #[test]
    fn recording_continues_after_a_panicking_caller() {
        let executor = Arc::new(RecordingExecutor::default());
        executor
            .call_module("basemap", &CallArgs::new().kwarg("B", "af"))
            .unwrap();

        let shared = executor.clone();
        let result = thread::spawn(move || {
            let _guard = shared.calls.lock().unwrap();
            panic!("caller died while holding the log");
        })
        .join();
        assert!(result.is_err());
        assert!(executor.calls.is_poisoned());

        let line = executor
            .call_module("info", &CallArgs::new().kwarg("I", "1/1"))
            .unwrap();
        assert_eq!(line, "-I1/1");
        let modules: Vec<_> = executor.calls().into_iter().map(|c| c.module).collect();
        assert_eq!(modules, vec!["basemap", "info"]);
    }
}
