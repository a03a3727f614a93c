//! Drives the logging facade the way an application would.
//!
//! Run with `LOGSCOPE_VERBOSE=1` to get console output on standard error, and
//! `LOGSCOPE_LEVEL=warning` to hide the lower severities.

use std::io;
use std::process::ExitCode;

use logscope::{
    Logger, LoggerScope, LoggingConfig, RootLogger, ScopeEndOptions, ScopeOptions, TextOptions,
};
use serde::Serialize;

#[derive(Serialize)]
struct Request<'a> {
    method: &'a str,
    path: &'a str,
    attempt: u32,
}

fn main() -> ExitCode {
    let config = match LoggingConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("invalid logging configuration: {error}");
            return ExitCode::FAILURE;
        }
    };

    let mut logger = config.build(Vec::new());

    logger
        .with_text_options("scope_demo", TextOptions::styled([("fontWeight", "bold")]))
        .information("started");

    let mut scope = logger.start_scope("GET /orders", ScopeOptions::styled([("color", "blue")]));
    scope
        .with_text("Sending")
        .with_object(&Request {
            method: "GET",
            path: "/orders",
            attempt: 1,
        })
        .debug("");

    let failure = io::Error::new(io::ErrorKind::TimedOut, "upstream did not answer");
    scope
        .with_text("Attempt failed:")
        .with_error(&failure)
        .with_line_break()
        .warning("retrying once");
    scope.information("succeeded on the second attempt");
    scope.end(ScopeEndOptions::default());

    let mut cancelled = logger.start_scope("prefetch", ScopeOptions::default());
    cancelled.debug("never shown");
    cancelled.end(ScopeEndOptions::dismissed());

    logger.debug("done");
    ExitCode::SUCCESS
}
