// SPDX-License-Identifier: MPL-2.0
//! Incremental decoder for the `text/event-stream` wire format.
//!
//! Bytes arrive in arbitrary chunks; the decoder buffers partial lines and
//! yields complete events on blank lines. Supported framing:
//! - `LF`, `CRLF` and lone `CR` line endings (a `CRLF` split across chunks
//!   counts once)
//! - `event:`, `data:` (multiple lines joined with `\n`) and `id:`
//! - comment lines starting with `:` (used by servers as keep-alives)
//! - `retry:` and unknown fields, which are ignored since the channel is
//!   never reopened
//! - a leading byte-order mark
//!
//! An event left incomplete when the connection closes is discarded.

/// Event name used when the server does not send an `event:` field.
pub const DEFAULT_EVENT: &str = "message";

/// One dispatched server-sent event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    pub event: String,
    pub data: String,
    /// Last event id seen on this connection, if any.
    pub id: Option<String>,
}

#[derive(Debug, Default)]
pub struct SseDecoder {
    line: Vec<u8>,
    skip_lf: bool,
    started: bool,
    event_type: String,
    data: String,
    has_data: bool,
    last_id: Option<String>,
}

impl SseDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a chunk and returns every event completed by it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        let mut events = Vec::new();
        for &byte in chunk {
            if self.skip_lf {
                self.skip_lf = false;
                if byte == b'\n' {
                    continue;
                }
            }
            match byte {
                b'\n' => self.end_line(&mut events),
                b'\r' => {
                    self.end_line(&mut events);
                    self.skip_lf = true;
                }
                _ => self.line.push(byte),
            }
        }
        events
    }

    fn end_line(&mut self, events: &mut Vec<SseEvent>) {
        let raw = std::mem::take(&mut self.line);
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        if !self.started {
            self.started = true;
            if let Some(rest) = line.strip_prefix('\u{feff}') {
                line = rest.to_string();
            }
        }

        if line.is_empty() {
            if let Some(event) = self.dispatch() {
                events.push(event);
            }
            return;
        }

        if line.starts_with(':') {
            return;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line.as_str(), ""),
        };

        match field {
            "event" => self.event_type = value.to_string(),
            "data" => {
                self.data.push_str(value);
                self.data.push('\n');
                self.has_data = true;
            }
            "id" => {
                if !value.contains('\0') {
                    self.last_id = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    fn dispatch(&mut self) -> Option<SseEvent> {
        let event_type = std::mem::take(&mut self.event_type);
        if !self.has_data {
            return None;
        }
        self.has_data = false;

        let mut data = std::mem::take(&mut self.data);
        if data.ends_with('\n') {
            data.pop();
        }

        Some(SseEvent {
            event: if event_type.is_empty() {
                DEFAULT_EVENT.to_string()
            } else {
                event_type
            },
            data,
            id: self.last_id.clone(),
        })
    }
}
