//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled output through composable
//! rendering components.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`layout`]: Wrapping formatted blocks into display lines
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Width-aware text utilities and snippet painting
//! - [`theme`]: Light and dark palettes, ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{layout_section, ContentLine, LineKind};
pub use renderer::{render, render_viewmodel};
pub use theme::{Theme, Themes};
pub use viewmodel::{
    Body, EmptyState, FooterInfo, HeaderInfo, ListItem, ListView, ReadingView, SearchBarInfo,
    UIViewModel,
};
