#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use dictpage::query::QueryParams;
use dictpage::request::PageSource;
use dictpage::{Error, Result};

/// One scripted answer of the fake server.
#[derive(Debug, Clone)]
pub enum Reply {
    Items(usize),
    Raw(String),
    Status(u16),
}

/// Replays scripted pages and remembers every `start` it was asked for.
/// Pages past the end of the script answer with `fallback`.
pub struct ScriptedSource {
    script: Vec<Reply>,
    fallback: Reply,
    requested: Mutex<Vec<u32>>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Reply>) -> Self {
        Self::with_fallback(script, Reply::Status(404))
    }

    pub fn with_fallback(script: Vec<Reply>, fallback: Reply) -> Self {
        Self {
            script,
            fallback,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for ScriptedSource {
    async fn fetch_page(&self, params: &QueryParams) -> Result<String> {
        self.requested.lock().unwrap().push(params.start);
        let reply = self
            .script
            .get(params.start as usize - 1)
            .unwrap_or(&self.fallback);
        match reply {
            Reply::Items(n) => Ok(page_body(*n)),
            Reply::Raw(body) => Ok(body.clone()),
            Reply::Status(status) => Err(Error::HttpStatus {
                page: params.start,
                status: *status,
            }),
        }
    }
}

/// A search response with `n` entries.
pub fn page_body(n: usize) -> String {
    let items = (0..n)
        .map(|i| format!(r#"{{"word":"가{i}","sense":[{{"definition":"뜻 {i}"}}]}}"#))
        .collect::<Vec<_>>()
        .join(",");
    format!(r#"{{"channel":{{"total":{n},"num":100,"item":[{items}]}}}}"#)
}

pub fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
