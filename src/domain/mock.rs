//! Mock - Mock Definitions and Partial Edits

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// HTTP method of a mocked request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Methods offered by the editor's method bar
    pub const EDITABLE: [HttpMethod; 4] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Whether requests with this method carry a body worth editing
    pub fn has_request_body(&self) -> bool {
        !matches!(self, HttpMethod::Get | HttpMethod::Delete)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Response body format, derived from the `content-type` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Json,
    Xml,
    Html,
    PlainText,
    File,
}

impl ContentKind {
    /// Formats selectable in the editor
    pub const SELECTABLE: [ContentKind; 4] = [
        ContentKind::Json,
        ContentKind::Xml,
        ContentKind::Html,
        ContentKind::PlainText,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Json => "JSON",
            ContentKind::Xml => "XML",
            ContentKind::Html => "HTML",
            ContentKind::PlainText => "Plain text",
            ContentKind::File => "File",
        }
    }

    /// `content-type` header value for this format
    pub fn mime(&self) -> &'static str {
        match self {
            ContentKind::Json => "application/json",
            ContentKind::Xml => "text/xml",
            ContentKind::Html => "text/html",
            ContentKind::PlainText => "text/plain",
            ContentKind::File => "multipart/form-data",
        }
    }

    /// Classify a `content-type` header value
    pub fn from_content_type(value: &str) -> Option<Self> {
        let checks = [
            ("application/json", ContentKind::Json),
            ("text/xml", ContentKind::Xml),
            ("text/html", ContentKind::Html),
            ("text/plain", ContentKind::PlainText),
            ("multipart", ContentKind::File),
        ];
        checks
            .into_iter()
            .find(|(needle, _)| value.contains(needle))
            .map(|(_, kind)| kind)
    }

    /// Classify a header map by its `content-type` entry
    pub fn from_headers(headers: &BTreeMap<String, String>) -> Option<Self> {
        headers
            .get(CONTENT_TYPE)
            .and_then(|value| Self::from_content_type(value))
    }
}

/// Header key used for response content type
pub const CONTENT_TYPE: &str = "content-type";

/// The canned response returned for a mock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers (lowercase keys)
    pub headers: BTreeMap<String, String>,
    /// Response body
    pub body: String,
    /// Artificial delay in milliseconds
    pub delay: u64,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self {
            status: 200,
            headers: BTreeMap::from([(CONTENT_TYPE.to_string(), ContentKind::Json.mime().to_string())]),
            body: String::new(),
            delay: 0,
        }
    }
}

/// A mock definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mock {
    pub id: String,
    pub method: HttpMethod,
    pub url: String,
    /// Request body to match (non-GET/DELETE)
    pub params: Option<String>,
    /// Request headers to match
    pub headers: BTreeMap<String, String>,
    pub response: MockResponse,
    /// Owning group, if any
    pub group_id: Option<String>,
}

impl Mock {
    /// Apply a partial edit. Response headers merge key by key; every other
    /// present field replaces the current value.
    pub fn apply(&mut self, patch: MockPatch) {
        if let Some(method) = patch.method {
            self.method = method;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(params) = patch.params {
            self.params = Some(params);
        }
        if let Some(response) = patch.response {
            self.response.apply(response);
        }
    }

    /// Copy with `patch` applied
    #[must_use]
    pub fn patched(&self, patch: MockPatch) -> Self {
        let mut mock = self.clone();
        mock.apply(patch);
        mock
    }
}

impl MockResponse {
    fn apply(&mut self, patch: ResponsePatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(headers) = patch.headers {
            self.headers.extend(headers);
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(delay) = patch.delay {
            self.delay = delay;
        }
    }
}

/// Partial edit of a [`Mock`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockPatch {
    pub method: Option<HttpMethod>,
    pub url: Option<String>,
    pub params: Option<String>,
    pub response: Option<ResponsePatch>,
}

/// Partial edit of a [`MockResponse`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponsePatch {
    pub status: Option<u16>,
    /// Merged into the existing headers
    pub headers: Option<BTreeMap<String, String>>,
    pub body: Option<String>,
    pub delay: Option<u64>,
}

impl MockPatch {
    pub fn response(patch: ResponsePatch) -> Self {
        Self {
            response: Some(patch),
            ..Self::default()
        }
    }
}

/// A named group of mocks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
}
