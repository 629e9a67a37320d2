use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::Scope;
use crate::{Callback, Rect, Scene, ScrollCallback, Vec2};

thread_local! {
    static COMPOSER: RefCell<Option<Composer>> = const { RefCell::new(None) };
}

#[derive(Default)]
struct Composer {
    slots: Vec<Box<dyn Any>>,
    cursor: usize,
    keyed_slots: HashMap<String, Box<dyn Any>>,
}

/// Slot table and lifecycle scope of one mounted tree.
///
/// `compose` installs the slot table for the duration of the build closure,
/// so `remember*` calls inside it resolve against this composition.
/// `unmount` disposes the scope (running every registered cleanup) and drops
/// all remembered values; the next `compose` starts a fresh mount.
pub struct Composition {
    composer: Option<Composer>,
    scope: Option<Scope>,
    passes: u64,
}

impl Composition {
    pub fn new() -> Self {
        Self {
            composer: None,
            scope: None,
            passes: 0,
        }
    }

    pub fn compose<R>(&mut self, build: impl FnOnce() -> R) -> R {
        let mut composer = self.composer.take().unwrap_or_default();
        composer.cursor = 0;
        let scope = self.scope.get_or_insert_with(Scope::new).clone();

        let prev = COMPOSER.with(|c| c.borrow_mut().replace(composer));
        let out = scope.run(build);
        self.composer = COMPOSER.with(|c| std::mem::replace(&mut *c.borrow_mut(), prev));

        self.passes += 1;
        out
    }

    pub fn is_mounted(&self) -> bool {
        self.scope.is_some()
    }

    pub fn scope(&self) -> Option<&Scope> {
        self.scope.as_ref()
    }

    /// Composition passes since construction (across remounts).
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn unmount(&mut self) {
        if let Some(scope) = self.scope.take() {
            scope.dispose();
        }
        self.composer = None;
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Composition {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    enum Found<T> {
        Hit(Rc<T>),
        Miss { cursor: usize, replacing: bool },
        Outside,
    }

    let found = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let Some(c) = c.as_mut() else {
            return Found::Outside;
        };
        let cursor = c.cursor;
        c.cursor += 1;
        match c.slots.get(cursor) {
            Some(slot) => match slot.downcast_ref::<Rc<T>>() {
                Some(rc) => Found::Hit(rc.clone()),
                None => Found::Miss {
                    cursor,
                    replacing: true,
                },
            },
            None => {
                // Reserve the slot so remembers made by `init` land after it.
                c.slots.push(Box::new(()));
                Found::Miss {
                    cursor,
                    replacing: false,
                }
            }
        }
    });

    match found {
        Found::Hit(rc) => rc,
        Found::Outside => {
            log::warn!("remember called outside of a composition; value will not persist");
            Rc::new(init())
        }
        Found::Miss { cursor, replacing } => {
            if replacing {
                log::warn!(
                    "remember: slot {cursor} type changed; replacing. \
                     If this is due to conditional composition, prefer remember_with_key."
                );
            }
            // `init` may itself remember, so the table is not borrowed while it runs.
            let rc = Rc::new(init());
            COMPOSER.with(|c| {
                if let Some(c) = c.borrow_mut().as_mut() {
                    c.slots[cursor] = Box::new(rc.clone());
                }
            });
            rc
        }
    }
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();

    let existing = COMPOSER.with(|c| {
        let c = c.borrow();
        let c = c.as_ref()?;
        match c.keyed_slots.get(&key)?.downcast_ref::<Rc<T>>() {
            Some(rc) => Some(Some(rc.clone())),
            None => {
                log::warn!("remember_with_key: key '{key}' reused with a different type; replacing.");
                Some(None)
            }
        }
    });

    match existing {
        Some(Some(rc)) => rc,
        Some(None) | None => {
            let rc = Rc::new(init());
            let stored = COMPOSER.with(|c| {
                c.borrow_mut()
                    .as_mut()
                    .map(|c| c.keyed_slots.insert(key.clone(), Box::new(rc.clone())))
                    .is_some()
            });
            if !stored {
                log::warn!("remember_with_key('{key}') called outside of a composition");
            }
            rc
        }
    }
}

pub fn remember_state_with_key<T: 'static>(
    key: impl Into<String>,
    init: impl FnOnce() -> T,
) -> Rc<RefCell<T>> {
    remember_with_key(key, || RefCell::new(init()))
}

/// Output of one layout and paint pass: the scene plus input regions.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub scene: Scene,
    pub hit_regions: Vec<HitRegion>,
}

impl Frame {
    /// Top-most clickable region under `pos`.
    pub fn hit_at(&self, pos: Vec2) -> Option<&HitRegion> {
        self.hit_regions
            .iter()
            .rev()
            .filter(|h| h.on_click.is_some())
            .find(|h| h.rect.contains(pos))
    }

    pub fn hit_by_label(&self, label: &str) -> Option<&HitRegion> {
        self.hit_regions
            .iter()
            .rev()
            .find(|h| h.label.as_deref() == Some(label))
    }

    /// Top-most scroll consumer under `pos`.
    pub fn scroll_at(&self, pos: Vec2) -> Option<&HitRegion> {
        self.hit_regions
            .iter()
            .rev()
            .filter(|h| h.on_scroll.is_some())
            .find(|h| h.rect.contains(pos))
    }
}

#[derive(Clone)]
pub struct HitRegion {
    pub id: u64,
    pub rect: Rect,
    pub label: Option<String>,
    pub on_click: Option<Callback>,
    pub on_scroll: Option<ScrollCallback>,
}

impl std::fmt::Debug for HitRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRegion")
            .field("id", &self.id)
            .field("rect", &self.rect)
            .field("label", &self.label)
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .field("on_scroll", &self.on_scroll.as_ref().map(|_| "..."))
            .finish()
    }
}
