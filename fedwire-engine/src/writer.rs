/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Message formatter.
//!
//! A [`Writer`] serializes a [`Message`] in canonical segment order, one record
//! per line, threading a single [`FormatOptions`](fedwire_core::FormatOptions)
//! value through every segment so the whole message shares one wire shape.

use crate::config::WriterConfig;
use crate::message::Message;
use fedwire_core::error::Result;
use std::io::Write;
use tracing::{debug, trace, warn};

/// Writes messages to a byte sink.
#[derive(Debug)]
pub struct Writer<W> {
    inner: W,
    config: WriterConfig,
}

impl<W: Write> Writer<W> {
    /// Creates a writer with default configuration.
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self::with_config(inner, WriterConfig::default())
    }

    /// Creates a writer with the given configuration.
    #[must_use]
    pub const fn with_config(inner: W, config: WriterConfig) -> Self {
        Self { inner, config }
    }

    /// Returns the writer configuration.
    #[must_use]
    pub const fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Returns a reference to the underlying sink.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consumes the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Writes a message and flushes the sink.
    ///
    /// # Errors
    /// Returns a validation error before anything is written if
    /// `validate_before_write` is set, or any I/O error from the sink.
    pub fn write(&mut self, message: &Message) -> Result<()> {
        if self.config.validate_before_write {
            message.validate().inspect_err(|e| {
                warn!("Refusing to write invalid message: {}", e);
            })?;
        }

        for segment in message.canonical() {
            let record = segment.format(self.config.format);
            trace!("Writing {}", record);
            self.inner.write_all(record.as_bytes())?;
            self.inner.write_all(self.config.line_ending.as_bytes())?;
        }
        self.inner.flush()?;

        debug!("Wrote {} segments", message.len());
        Ok(())
    }
}
