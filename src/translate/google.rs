use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::interface::{TranslateError, TranslateInterface, Translation};
use super::languages::{self, AUTO_DETECT};

/// Client for the Google web-translate endpoint (`client=gtx`)
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    service_url: String,
}

impl GoogleTranslator {
    pub fn new(service_url: String, timeout: Option<Duration>) -> Result<Self, TranslateError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            service_url: service_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve both language arguments, rejecting unknown ones before any request is sent
    fn resolve_languages(src: &str, dest: &str) -> Result<(String, String), TranslateError> {
        let src = languages::normalize(src).ok_or(TranslateError::InvalidSourceLanguage)?;
        let dest = languages::normalize(dest)
            .filter(|d| d != AUTO_DETECT)
            .ok_or(TranslateError::InvalidDestinationLanguage)?;
        Ok((src, dest))
    }
}

/// Extract the translated text and detected source language from the
/// endpoint's nested-array payload.
///
/// `body[0]` holds one `[translated, original, ...]` entry per sentence;
/// `body[2]` is the source language the service settled on.
fn parse_response(body: &Value) -> Result<(String, Option<String>), TranslateError> {
    let segments = body
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslateError::UnexpectedResponse("missing translation segments".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
        .collect();

    if text.is_empty() && !segments.is_empty() {
        return Err(TranslateError::UnexpectedResponse("no translated text".to_string()));
    }

    let detected = body.get(2).and_then(|v| v.as_str()).map(|s| s.to_lowercase());
    Ok((text, detected))
}

#[async_trait]
impl TranslateInterface for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        src: &str,
        dest: &str,
    ) -> Result<Translation, TranslateError> {
        let (src, dest) = Self::resolve_languages(src, dest)?;

        let url = format!("{}/translate_a/single", self.service_url);
        debug!("Sending translate request: src={}, dest={}, chars={}", src, dest, text.chars().count());

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", src.as_str()),
                ("tl", dest.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        let (translated, detected) = parse_response(&body)?;

        Ok(Translation {
            text: translated,
            src: detected.unwrap_or(src),
            dest,
        })
    }
}


/// Local HTTP server standing in for the translate endpoint
#[cfg(test)]
pub(crate) mod stub {
    use axum::Router;

    /// Serve `app` on an ephemeral port and return its base URL
    pub(crate) async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }
}
