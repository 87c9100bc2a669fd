use std::sync::Mutex;

use ruen_fetch::{FetchError, FetchRequest, Fetcher};
use ruen_io::ClipboardSink;


pub const KOT_NEXT_DATA: &str = r#"{"props":{"pageProps":{"info":{"words":[{
    "translations":[
        {"tls":["cat"],"exampleRu":"Кот спит.","exampleTl":"The cat is sleeping."},
        {"tls":["tomcat"]}
    ],
    "sentences":[{"ru":"У меня есть <b>кот</b>.","tl":"I have a cat."}]
}]}}}}"#;

pub const EMPTY_NEXT_DATA: &str =
    r#"{"props":{"pageProps":{"info":{"words":[{"translations":[{"tls":[]}],"sentences":[]}]}}}}"#;

pub fn page(next_data: &str) -> Vec<u8> {
    format!(
        "<html><body><script id=\"__NEXT_DATA__\" type=\"application/json\">{next_data}</script></body></html>"
    )
    .into_bytes()
}

/// Answers every request with the same body and remembers what was asked
pub struct ScriptedFetcher {
    body: Vec<u8>,
    pub requests: Mutex<Vec<FetchRequest>>,
}

impl ScriptedFetcher {
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>, FetchError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.body.clone())
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub texts: Mutex<Vec<String>>,
    pub broken: bool,
}

impl RecordingClipboard {
    pub fn broken() -> Self {
        Self {
            texts: Mutex::new(Vec::new()),
            broken: true,
        }
    }

    pub fn last(&self) -> Option<String> {
        self.texts.lock().unwrap().last().cloned()
    }
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&self, text: &str) -> anyhow::Result<()> {
        if self.broken {
            anyhow::bail!("no display");
        }
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
