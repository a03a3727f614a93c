//! crates/logging/src/console/web.rs
//! Browser console backed by `web-sys`.

use js_sys::{Array, JSON};
use wasm_bindgen::JsValue;

use super::{Console, OutputTarget, SinkResult};
use crate::segment::LogArg;

/// Console forwarding every call to the browser's `console` object.
///
/// Text arguments are passed as strings so `%c` directives keep their
/// styling. Objects are converted to plain JavaScript values and errors to
/// `Error` instances, which the developer tools render as inspectable
/// values. The browser console reports no failure, so every call returns
/// `Ok`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebConsole;

impl WebConsole {
    /// Creates a handle on the browser console.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn to_js(arg: &LogArg) -> JsValue {
    match arg {
        LogArg::Text(text) => JsValue::from_str(text),
        LogArg::Object(value) => {
            let json = value.to_string();
            JSON::parse(&json).unwrap_or_else(|_| JsValue::from_str(&json))
        }
        LogArg::Error(error) => js_sys::Error::new(&error.to_string()).into(),
    }
}

fn to_array(args: &[LogArg]) -> Array {
    args.iter().map(to_js).collect()
}

impl OutputTarget for WebConsole {
    fn log(&self, args: &[LogArg]) -> SinkResult {
        web_sys::console::log(&to_array(args));
        Ok(())
    }

    fn warn(&self, args: &[LogArg]) -> SinkResult {
        web_sys::console::warn(&to_array(args));
        Ok(())
    }

    fn error(&self, args: &[LogArg]) -> SinkResult {
        web_sys::console::error(&to_array(args));
        Ok(())
    }
}

impl Console for WebConsole {
    fn group_collapsed(&self, label: &[LogArg]) -> SinkResult {
        web_sys::console::group_collapsed(&to_array(label));
        Ok(())
    }

    fn group_end(&self) -> SinkResult {
        web_sys::console::group_end();
        Ok(())
    }
}
