//! # State, Scopes, Timers and Animation
//!
//! `bm-core` is the small retained-mode runtime the BM screen is built on.
//! There are four main pieces:
//!
//! - `Signal<T>`: observable state cell.
//! - `Composition` + `remember*`: per-mount storage bound to a composition.
//! - `Scope` / `effect`: lifecycle with cleanup on unmount.
//! - `Timers` + `AnimatedValue`: deferred work and time-based transitions,
//!   both driven by the thread's animation `Clock`.
//!
//! ## Signals
//!
//! ```rust
//! use bm_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Remembered state
//!
//! A `Composition` owns the slot table for one mounted screen. `remember`
//! called while that composition is composing returns the value created on the
//! first pass:
//!
//! ```rust
//! use bm_core::*;
//!
//! let mut composition = Composition::new();
//! let first = composition.compose(|| remember_with_key("n", || 1));
//! let again = composition.compose(|| remember_with_key("n", || 2));
//! assert_eq!(*first, 1);
//! assert_eq!(*again, 1);
//! ```
//!
//! - `remember` is order-based: the Nth call in a pass
//!   always refers to the Nth stored value.
//! - `remember_with_key` and `remember_state_with_key` are key-based and
//!   stable across conditional branches.
//!
//! ## Effects and cleanup
//!
//! `effect` runs once and registers its `Dispose` with the current scope. A
//! composition's scope is disposed on `Composition::unmount`, which is where
//! pending timers armed by the screen get canceled.
//!
//! ```rust
//! use bm_core::*;
//!
//! let mut composition = Composition::new();
//! composition.compose(|| {
//!     effect(|| {
//!         log::info!("mounted");
//!         on_unmount(|| log::info!("unmounted"))
//!     });
//! });
//! composition.unmount();
//! ```

pub mod alert;
pub mod animation;
pub mod color;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod modifier;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod timer;
pub mod view;

mod tests;

pub use alert::*;
pub use color::*;
pub use effects::*;
pub use error::*;
pub use geometry::*;
pub use modifier::*;
pub use prelude::*;
pub use runtime::*;
pub use semantics::*;
pub use signal::*;
pub use timer::*;
pub use view::*;
