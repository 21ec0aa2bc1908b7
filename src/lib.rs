//! Page behaviors for a static site, compiled to WebAssembly.
//!
//! Three independent behaviors run against an already-rendered page: the
//! mobile navigation toggle, the footer year stamp, and the light/dark theme
//! with persistence and OS-preference detection. Styling lives in the page's
//! CSS; this crate only flips the class markers that CSS reads.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`host`] | Traits for the page collaborators (elements, storage, media query, clock) |
//! | [`memory`] | In-memory host used by tests and non-browser embedders |
//! | [`config`] | Selectors, marker names, and the storage key |
//! | [`error`] | [`error::HostError`] |
//! | [`menu`] | Menu open/closed toggle |
//! | [`year`] | Footer year stamp |
//! | [`theme`] | [`theme::Theme`], resolution policy, and [`theme::ThemeManager`] |
//! | [`page`] | Composition root that builds and dispatches to the three behaviors |
//! | `web` | Browser bindings (`hydrate` feature only) |

pub mod config;
pub mod error;
pub mod host;
pub mod memory;
pub mod menu;
pub mod page;
pub mod theme;
pub mod year;

#[cfg(feature = "hydrate")]
pub mod web;
