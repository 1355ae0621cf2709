//! Host-side test doubles: small parsers and a commit recorder.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use stylesync_editor::{
    ParserHandle, ParserOptions, ParserOutput, ParserResult, StyleDocument, StyleParser,
};

pub fn style(name: &str) -> StyleDocument {
    StyleDocument::new(json!({ "name": name }))
}

/// Let every timer and spawned task run to completion (paused clock)
pub async fn settle() {
    tokio::time::sleep(Duration::from_secs(5)).await;
}

/// Line format `FMT:<name>`
#[derive(Default)]
pub struct FmtParser {
    pub writes: Arc<AtomicUsize>,
    /// Per-name serialize latency
    pub delays: HashMap<String, Duration>,
}

impl FmtParser {
    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }
}

#[async_trait]
impl StyleParser for FmtParser {
    fn title(&self) -> &str {
        "Fmt"
    }

    async fn write_style(
        &self,
        style: &StyleDocument,
        _options: &ParserOptions,
    ) -> ParserResult<ParserOutput<String>> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let name = style.name().unwrap_or_default().to_string();
        if let Some(delay) = self.delays.get(&name) {
            tokio::time::sleep(*delay).await;
        }
        Ok(ParserOutput::ok(format!("FMT:{}", name)))
    }

    async fn read_style(
        &self,
        text: &str,
        _options: &ParserOptions,
    ) -> ParserResult<ParserOutput<StyleDocument>> {
        match text.strip_prefix("FMT:") {
            Some(name) => Ok(ParserOutput::ok(style(name))),
            None => Ok(ParserOutput::failed(["expected FMT: prefix"])),
        }
    }
}

/// XML-ish format `<Style name="<name>" uom="<unit>"/>`
pub struct MarkupParser {
    pub version: &'static str,
}

#[async_trait]
impl StyleParser for MarkupParser {
    fn title(&self) -> &str {
        if self.version == "1.0.0" {
            "Markup 1.0"
        } else {
            "Markup"
        }
    }

    fn version(&self) -> Option<&str> {
        Some(self.version)
    }

    fn is_xml(&self) -> bool {
        true
    }

    async fn write_style(
        &self,
        style: &StyleDocument,
        options: &ParserOptions,
    ) -> ParserResult<ParserOutput<String>> {
        Ok(ParserOutput::ok(format!(
            r#"<Style name="{}" uom="{}"/>"#,
            style.name().unwrap_or_default(),
            options.unit_of_measure
        )))
    }

    async fn read_style(
        &self,
        text: &str,
        _options: &ParserOptions,
    ) -> ParserResult<ParserOutput<StyleDocument>> {
        let name = text
            .strip_prefix(r#"<Style name=""#)
            .and_then(|rest| rest.split('"').next());
        match name {
            Some(name) => Ok(ParserOutput::ok(style(name))),
            None => Ok(ParserOutput::failed(["not a Style element"])),
        }
    }
}

/// Format that cannot write anything
pub struct BrokenParser;

#[async_trait]
impl StyleParser for BrokenParser {
    fn title(&self) -> &str {
        "Broken"
    }

    async fn write_style(
        &self,
        _style: &StyleDocument,
        _options: &ParserOptions,
    ) -> ParserResult<ParserOutput<String>> {
        Ok(ParserOutput::failed(["unsupported symbolizer"]))
    }

    async fn read_style(
        &self,
        _text: &str,
        _options: &ParserOptions,
    ) -> ParserResult<ParserOutput<StyleDocument>> {
        Ok(ParserOutput::failed(["unsupported"]))
    }
}

/// Records every style the editor commits to the host
#[derive(Clone, Default)]
pub struct Committed(Arc<Mutex<Vec<StyleDocument>>>);

impl Committed {
    pub fn callback(&self) -> impl Fn(StyleDocument) + Send + Sync + 'static {
        let sink = self.0.clone();
        move |style: StyleDocument| sink.lock().push(style)
    }

    pub fn count(&self) -> usize {
        self.0.lock().len()
    }

    pub fn last(&self) -> Option<StyleDocument> {
        self.0.lock().last().cloned()
    }
}

pub fn handle(parser: impl StyleParser + 'static) -> ParserHandle {
    ParserHandle::new(parser)
}
