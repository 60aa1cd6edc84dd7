/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Fedwire Engine
//!
//! Message assembly and serialization for Fedwire funds-transfer messages.
//!
//! This crate provides:
//! - **Message**: An ordered collection of segments with typed access
//! - **Schema context**: Conditional segment rules keyed on business function and local instrument
//! - **Reader**: Line-oriented assembler with fast-fail validation
//! - **Writer**: Canonical-order formatter for either wire shape

pub mod config;
pub mod message;
pub mod reader;
pub mod schema;
pub mod writer;

pub use config::{ReaderConfig, ReaderConfigBuilder, WriterConfig, WriterConfigBuilder};
pub use message::Message;
pub use reader::Reader;
pub use schema::SchemaContext;
pub use writer::Writer;
