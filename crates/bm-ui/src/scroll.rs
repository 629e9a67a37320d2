//! # Scroll model
//!
//! `ScrollState` holds the vertical offset of a `ScrollArea` together with the
//! viewport and content heights reported by the layout pass. Offsets are kept
//! clamped to `0..=content - viewport`.
//!
//! ```rust
//! use bm_core::*;
//! use bm_ui::*;
//!
//! fn long_list() -> View {
//!     let state = scroll::remember_scroll_state("list");
//!     let content = Column(Modifier::new()).child(
//!         (0..100).map(|i| Text(format!("Row {i}"))).collect::<Vec<_>>()
//!     );
//!     scroll::ScrollArea(Modifier::new().fill_max_size(), state, content)
//! }
//! ```
//!
//! `layout_and_paint` clips children to the scroll node's rect, applies the
//! offset as a translation and registers a scroll hit region whose callback
//! calls `scroll_immediate`. No scrollbar is drawn.

use std::rc::Rc;

use bm_core::*;

pub struct ScrollState {
    scroll_offset: Signal<f32>,
    viewport_height: Signal<f32>,
    content_height: Signal<f32>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            scroll_offset: signal(0.0),
            viewport_height: signal(0.0),
            content_height: signal(0.0),
        }
    }

    fn max_offset(&self) -> f32 {
        (self.content_height.get() - self.viewport_height.get()).max(0.0)
    }

    pub fn set_viewport_height(&self, h: f32) {
        self.viewport_height.set(h.max(0.0));
        self.clamp_offset();
    }

    pub fn set_content_height(&self, h: f32) {
        self.content_height.set(h.max(0.0));
        self.clamp_offset();
    }

    pub fn set_offset(&self, off: f32) {
        self.scroll_offset.set(off.clamp(0.0, self.max_offset()));
    }

    fn clamp_offset(&self) {
        let max_off = self.max_offset();
        let off = self.scroll_offset.get();
        if !(0.0..=max_off).contains(&off) {
            self.scroll_offset.set(off.clamp(0.0, max_off));
        }
    }

    pub fn get(&self) -> f32 {
        self.scroll_offset.get()
    }

    /// Consume `dy`, clamp to bounds, return the leftover.
    pub fn scroll_immediate(&self, dy: f32) -> f32 {
        let before = self.scroll_offset.get();
        let new_off = (before + dy).clamp(0.0, self.max_offset());
        self.scroll_offset.set(new_off);
        dy - (new_off - before)
    }
}

pub fn remember_scroll_state(key: impl Into<String>) -> Rc<ScrollState> {
    remember_with_key(format!("scroll:{}", key.into()), ScrollState::new)
}

#[allow(non_snake_case)]
pub fn ScrollArea(modifier: Modifier, state: Rc<ScrollState>, content: View) -> View {
    let hooks = ScrollHooks {
        on_scroll: {
            let st = state.clone();
            Rc::new(move |d: Vec2| Vec2 {
                x: d.x,
                y: st.scroll_immediate(d.y),
            })
        },
        set_viewport_height: {
            let st = state.clone();
            Rc::new(move |h| st.set_viewport_height(h))
        },
        set_content_height: {
            let st = state.clone();
            Rc::new(move |h| st.set_content_height(h))
        },
        get_scroll_offset: {
            let st = state;
            Rc::new(move || st.get())
        },
    };
    View::new(0, ViewKind::ScrollV(hooks))
        .modifier(modifier)
        .with_children(vec![content])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_clamped_to_content() {
        let st = ScrollState::new();
        st.set_viewport_height(100.0);
        st.set_content_height(250.0);

        assert_eq!(st.scroll_immediate(100.0), 0.0);
        assert_eq!(st.get(), 100.0);
        let leftover = st.scroll_immediate(100.0);
        assert_eq!(st.get(), 150.0);
        assert_eq!(leftover, 50.0);
        assert_eq!(st.scroll_immediate(-500.0), -350.0);
        assert_eq!(st.get(), 0.0);
    }

    #[test]
    fn shrinking_content_pulls_offset_back() {
        let st = ScrollState::new();
        st.set_viewport_height(100.0);
        st.set_content_height(300.0);
        st.set_offset(200.0);
        st.set_content_height(150.0);
        assert_eq!(st.get(), 50.0);
    }
}
