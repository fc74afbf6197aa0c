//! The transfer engine: configuration, builder, and orchestrator.
//!
//! - [`config`] - [`EngineConfig`] with the per-engine defaults
//! - [`builder`] - [`EngineBuilder`] for assembling an engine fluently
//! - [`engine`] - The [`Engine`] orchestrating probe, fetch, and merge
//!
//! # Examples
//!
//! ```rust,no_run
//! use shatter::engine::EngineBuilder;
//! use shatter::transfer::Transfer;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), shatter::Error> {
//! let engine = EngineBuilder::new()
//!     .directory(PathBuf::from("downloads"))
//!     .parts(8)
//!     .build();
//!
//! let transfer = Transfer::try_from("https://example.com/large.iso")?;
//! let completion = engine.transfer(&transfer).await?;
//! println!("saved {} bytes to {:?}", completion.size(), completion.path());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod engine;

pub use builder::EngineBuilder;
pub use config::EngineConfig;
pub use engine::Engine;
