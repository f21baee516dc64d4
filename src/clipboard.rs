// Best-effort copy with a manual-selection fallback.

use futures::future::LocalBoxFuture;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument, HtmlTextAreaElement};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    #[error("clipboard API unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("manual copy failed: {0}")]
    Manual(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Async,
    Manual,
}

pub trait ClipboardBackend {
    /// `None` when the async clipboard API is not exposed.
    fn write_async(&self, text: &str) -> Option<LocalBoxFuture<'static, Result<(), CopyError>>>;

    fn write_manual(&self, text: &str) -> Result<(), CopyError>;
}

/// Tries the async API first and falls back to manual selection when it is
/// missing or rejects the write.
pub async fn copy_text<B: ClipboardBackend>(backend: &B, text: &str) -> Result<CopyMethod, CopyError> {
    match backend.write_async(text) {
        Some(write) => match write.await {
            Ok(()) => return Ok(CopyMethod::Async),
            Err(e) => log::warn!("{e}; trying manual copy"),
        },
        None => log::debug!("{}; trying manual copy", CopyError::Unavailable),
    }
    backend.write_manual(text)?;
    Ok(CopyMethod::Manual)
}

pub struct BrowserClipboard;

impl ClipboardBackend for BrowserClipboard {
    fn write_async(&self, text: &str) -> Option<LocalBoxFuture<'static, Result<(), CopyError>>> {
        let nav = window()?.navigator();
        // Insecure contexts leave `navigator.clipboard` undefined.
        let exposed = js_sys::Reflect::get(&nav, &"clipboard".into())
            .map(|v| !v.is_undefined() && !v.is_null())
            .unwrap_or(false);
        if !exposed {
            return None;
        }

        let promise = nav.clipboard().write_text(text);
        Some(Box::pin(async move {
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| CopyError::Rejected(format!("{e:?}")))
        }))
    }

    fn write_manual(&self, text: &str) -> Result<(), CopyError> {
        let manual = |msg: &str| CopyError::Manual(msg.to_string());

        let doc = window()
            .and_then(|w| w.document())
            .ok_or_else(|| manual("no document"))?;
        let body = doc.body().ok_or_else(|| manual("no body"))?;

        let area: HtmlTextAreaElement = doc
            .create_element("textarea")
            .map_err(|e| CopyError::Manual(format!("{e:?}")))?
            .dyn_into()
            .map_err(|_| manual("not a textarea"))?;
        area.set_value(text);
        // Fixed so appending it does not scroll the page.
        for (prop, value) in [("position", "fixed"), ("opacity", "0")] {
            if let Err(e) = area.style().set_property(prop, value) {
                log::warn!("could not style copy buffer {prop}: {e:?}");
            }
        }

        body.append_child(&area)
            .map_err(|e| CopyError::Manual(format!("{e:?}")))?;
        if let Err(e) = area.focus() {
            log::debug!("copy buffer did not take focus: {e:?}");
        }
        area.select();

        let copied = doc
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| manual("not an HTML document"))
            .and_then(|html| {
                html.exec_command("copy")
                    .map_err(|e| CopyError::Manual(format!("{e:?}")))
            });
        if let Err(e) = body.remove_child(&area) {
            log::warn!("copy buffer left in the document: {e:?}");
        }

        match copied? {
            true => Ok(()),
            false => Err(manual("execCommand(\"copy\") returned false")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    #[derive(Default)]
    struct FakeClipboard {
        async_api: Option<Result<(), CopyError>>,
        manual_ok: bool,
        written: RefCell<Vec<(CopyMethod, String)>>,
    }

    impl ClipboardBackend for FakeClipboard {
        fn write_async(&self, text: &str) -> Option<LocalBoxFuture<'static, Result<(), CopyError>>> {
            let result = self.async_api.clone()?;
            if result.is_ok() {
                self.written.borrow_mut().push((CopyMethod::Async, text.to_string()));
            }
            Some(Box::pin(async move { result }))
        }

        fn write_manual(&self, text: &str) -> Result<(), CopyError> {
            if !self.manual_ok {
                return Err(CopyError::Manual("blocked".into()));
            }
            self.written.borrow_mut().push((CopyMethod::Manual, text.to_string()));
            Ok(())
        }
    }

    #[test]
    fn async_api_receives_the_exact_text() {
        let cb = FakeClipboard { async_api: Some(Ok(())), ..Default::default() };
        assert_eq!(block_on(copy_text(&cb, "1234567890")), Ok(CopyMethod::Async));
        assert_eq!(*cb.written.borrow(), vec![(CopyMethod::Async, "1234567890".to_string())]);
    }

    #[test]
    fn missing_api_uses_manual_copy() {
        let cb = FakeClipboard { async_api: None, manual_ok: true, ..Default::default() };
        assert_eq!(block_on(copy_text(&cb, "1234567890")), Ok(CopyMethod::Manual));
        assert_eq!(*cb.written.borrow(), vec![(CopyMethod::Manual, "1234567890".to_string())]);
    }

    #[test]
    fn rejected_write_falls_back_to_manual_copy() {
        let cb = FakeClipboard {
            async_api: Some(Err(CopyError::Rejected("NotAllowedError".into()))),
            manual_ok: true,
            ..Default::default()
        };
        assert_eq!(block_on(copy_text(&cb, "0987654321")), Ok(CopyMethod::Manual));
    }

    #[test]
    fn both_paths_failing_reports_the_manual_error() {
        let cb = FakeClipboard { async_api: None, manual_ok: false, ..Default::default() };
        let err = block_on(copy_text(&cb, "1122334455")).unwrap_err();
        assert_eq!(err, CopyError::Manual("blocked".into()));
        assert!(cb.written.borrow().is_empty());
    }
}
