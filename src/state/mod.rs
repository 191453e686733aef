/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Compression tiers and their quality lookup (level.rs)
/// - The session state machine the UI renders (session.rs)

pub mod data;
pub mod level;
pub mod session;
