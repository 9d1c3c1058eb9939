use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{self, FutureExt, LocalBoxFuture};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Reflect;
use web_sys::{window, Document, HtmlScriptElement};

use super::error::{FailureReason, ScriptLoadError};
use super::host::ScriptHost;

type Completion = Rc<RefCell<Option<oneshot::Sender<Result<(), ScriptLoadError>>>>>;

/// The live page: `window`, its document and the wasm-bindgen executor.
pub struct BrowserHost;

impl BrowserHost {
    /// A property of `window`, or `None` if it is `undefined` or `null`.
    pub fn global(&self, name: &str) -> Option<JsValue> {
        let window = window()?;
        Reflect::get(&window, &JsValue::from_str(name))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }

    fn attach(
        &self,
        url: &str,
    ) -> Result<oneshot::Receiver<Result<(), ScriptLoadError>>, ScriptLoadError> {
        let document =
            document().ok_or_else(|| ScriptLoadError::new(url, FailureReason::NoDocument))?;
        let dom_error = |err: JsValue| {
            ScriptLoadError::new(url, FailureReason::Dom(format!("{:?}", err)))
        };

        let script: HtmlScriptElement = document
            .create_element("script")
            .map_err(dom_error)?
            .dyn_into()
            .map_err(|element| dom_error(element.into()))?;
        script.set_src(url);
        script.set_async(true);

        let (tx, rx) = oneshot::channel();
        let completion: Completion = Rc::new(RefCell::new(Some(tx)));

        let onload = {
            let completion = completion.clone();
            Closure::once_into_js(move || {
                if let Some(tx) = completion.borrow_mut().take() {
                    let _ = tx.send(Ok(()));
                }
            })
        };
        let onerror = {
            let completion = completion.clone();
            let script = script.clone();
            let url = url.to_string();
            Closure::once_into_js(move || {
                // Detach so the next attempt for this URL is not mistaken for a loaded script.
                script.remove();
                if let Some(tx) = completion.borrow_mut().take() {
                    let _ = tx.send(Err(ScriptLoadError::new(url, FailureReason::Network)));
                }
            })
        };
        script.set_onload(Some(onload.unchecked_ref()));
        script.set_onerror(Some(onerror.unchecked_ref()));

        let parent: web_sys::Node = match document.head() {
            Some(head) => head.into(),
            None => document
                .body()
                .ok_or_else(|| ScriptLoadError::new(url, FailureReason::NoDocument))?
                .into(),
        };
        parent.append_child(&script).map_err(dom_error)?;
        Ok(rx)
    }
}

impl ScriptHost for BrowserHost {
    fn script_present(&self, url: &str) -> bool {
        let Some(document) = document() else {
            return false;
        };
        let scripts = document.scripts();
        (0..scripts.length())
            .filter_map(|index| scripts.item(index))
            .any(|script| script.get_attribute("src").as_deref() == Some(url))
    }

    fn insert_script(&self, url: &str) -> LocalBoxFuture<'static, Result<(), ScriptLoadError>> {
        match self.attach(url) {
            Ok(rx) => {
                let url = url.to_string();
                async move {
                    rx.await.unwrap_or_else(|_| {
                        Err(ScriptLoadError::new(url, FailureReason::Abandoned))
                    })
                }
                .boxed_local()
            }
            Err(err) => future::ready(Err(err)).boxed_local(),
        }
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

fn document() -> Option<Document> {
    window().and_then(|window| window.document())
}
