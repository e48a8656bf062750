//! Atelier: chat command handling for AI summaries and image generation.
//!
//! This crate implements the command side of a chat-platform plugin. It
//! parses slash commands, checks the usage policy, starts summary threads,
//! and runs image generation as detached background jobs whose results are
//! uploaded and posted back to the channel.
//!
//! # Architecture
//!
//! Atelier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`command`]: Command parsing, routing and background generation jobs

pub mod command;
