//! HTTP exchange types handed to assertions by the host framework.
//!
//! A [`Response`] body may be a single-read stream. The first call to
//! [`Response::body_bytes`] drains the stream into an in-memory buffer and
//! every later call returns the same bytes, so one check can parse the body
//! as many times as it needs.

use std::collections::HashMap;
use std::fmt;
use std::io::{self, Read};

/// HTTP methods of the originating request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    /// GET request
    #[default]
    Get,
    /// POST request
    Post,
    /// PUT request
    Put,
    /// DELETE request
    Delete,
    /// PATCH request
    Patch,
    /// HEAD request
    Head,
    /// OPTIONS request
    Options,
}

impl HttpMethod {
    /// Parse from string, case-insensitively. Unknown methods map to GET.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            "PATCH" => Self::Patch,
            "HEAD" => Self::Head,
            "OPTIONS" => Self::Options,
            _ => Self::Get,
        }
    }

    /// Convert to string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

/// Response body, buffered on first read
#[derive(Default)]
pub struct ResponseBody {
    buffered: Vec<u8>,
    pending: Option<Box<dyn Read + Send>>,
    read_error: Option<io::ErrorKind>,
}

impl ResponseBody {
    /// Body backed by bytes already in memory
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            buffered: bytes.into(),
            pending: None,
            read_error: None,
        }
    }

    /// Body backed by a stream that can be read only once
    #[must_use]
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Self {
            buffered: Vec::new(),
            pending: Some(Box::new(reader)),
            read_error: None,
        }
    }

    /// Whether the stream (if any) has already been drained
    #[must_use]
    pub fn is_buffered(&self) -> bool {
        self.pending.is_none()
    }

    /// Read the body to completion, buffering it on the first call.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised by the underlying stream. A body whose
    /// stream failed keeps failing on later calls rather than exposing the
    /// partially read bytes.
    pub fn bytes(&mut self) -> io::Result<&[u8]> {
        if let Some(mut reader) = self.pending.take() {
            let mut buf = Vec::new();
            if let Err(err) = reader.read_to_end(&mut buf) {
                self.read_error = Some(err.kind());
                return Err(err);
            }
            tracing::trace!(bytes = buf.len(), "buffered response body");
            self.buffered = buf;
        }
        if let Some(kind) = self.read_error {
            return Err(io::Error::new(kind, "response body was not fully read"));
        }
        Ok(&self.buffered)
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseBody")
            .field("buffered_len", &self.buffered.len())
            .field("pending_stream", &self.pending.is_some())
            .field("read_error", &self.read_error)
            .finish()
    }
}

impl From<Vec<u8>> for ResponseBody {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&str> for ResponseBody {
    fn from(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl From<String> for ResponseBody {
    fn from(text: String) -> Self {
        Self::from_bytes(text.into_bytes())
    }
}

/// A completed HTTP response under test
#[derive(Debug)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    body: ResponseBody,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: 200,
            headers: HashMap::new(),
            body: ResponseBody::default(),
        }
    }
}

impl Response {
    /// Create an empty 200 response
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a 200 `text/html` response with the given body
    #[must_use]
    pub fn html(body: impl Into<ResponseBody>) -> Self {
        Self::new()
            .with_header("Content-Type", "text/html; charset=utf-8")
            .with_body(body)
    }

    /// Set status code
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Add a header
    #[must_use]
    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    /// Set body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<ResponseBody>) -> Self {
        self.body = body.into();
        self
    }

    /// Set a single-read streaming body
    #[must_use]
    pub fn with_reader(mut self, reader: impl Read + Send + 'static) -> Self {
        self.body = ResponseBody::from_reader(reader);
        self
    }

    /// Header value, matched case-insensitively
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Access the body
    pub fn body(&mut self) -> &mut ResponseBody {
        &mut self.body
    }

    /// Body bytes, buffering a streaming body on first access
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while draining the body stream
    pub fn body_bytes(&mut self) -> io::Result<&[u8]> {
        self.body.bytes()
    }

    /// Body as (lossily decoded) UTF-8 text
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while draining the body stream
    pub fn body_string(&mut self) -> io::Result<String> {
        Ok(String::from_utf8_lossy(self.body.bytes()?).into_owned())
    }
}

/// The request that produced a [`Response`]
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// HTTP method
    pub method: HttpMethod,
    /// Request URL or path
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Create a new request
    #[must_use]
    pub fn new(method: HttpMethod, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Create a GET request
    #[must_use]
    pub fn get(url: &str) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Add a header
    #[must_use]
    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    /// Set body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}
