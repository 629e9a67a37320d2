#![allow(non_snake_case)]
//! Widgets, flexbox layout and scene painting.
//!
//! Widgets are plain functions returning `View`s. `layout_and_paint` lays a
//! tree out with `taffy` and paints it into a `Frame`: a flat `Scene` of
//! rects, borders and text runs plus the hit regions a host dispatches taps
//! and scrolls to.
//!
//! Units are logical pixels throughout; text is measured with a fixed
//! advance per glyph (0.6 em for ASCII, 1 em otherwise), which is what the
//! headless host needs and keeps layout deterministic.

pub mod dialog;
pub mod scroll;

pub use dialog::AlertDialog;
pub use scroll::{ScrollArea, ScrollState, remember_scroll_state};

use std::rc::Rc;

use bm_core::*;
use smallvec::SmallVec;
use taffy::style_helpers::{auto, length, percent};
use taffy::{AvailableSpace, Display, NodeId, Overflow, Point, Position, Style, TaffyTree};
use unicode_segmentation::UnicodeSegmentation;

pub fn Surface(modifier: Modifier, child: View) -> View {
    View::new(0, ViewKind::Surface)
        .modifier(modifier)
        .with_children(vec![child])
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

/// The first child sizes the stack; every later child is laid over it.
pub fn Stack(modifier: Modifier) -> View {
    View::new(0, ViewKind::Stack).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            style: TextStyle::default(),
        },
    )
}

pub fn Spacer() -> View {
    Box(Modifier::new().flex_grow(1.0))
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Button {
            text: text.clone(),
            style: TextStyle::default(),
            on_click: Some(Rc::new(on_click)),
        },
    )
    .semantics(Semantics::new(Role::Button).label(text))
}

/// Text styling for `Text` and `Button` labels. No-op on other views.
pub trait TextStyleExt: Sized {
    fn text_style(self, f: impl FnOnce(&mut TextStyle)) -> Self;

    fn color(self, c: Color) -> Self {
        self.text_style(|s| s.color = c)
    }
    fn size(self, font_size: f32) -> Self {
        self.text_style(|s| s.font_size = font_size)
    }
    fn weight(self, w: FontWeight) -> Self {
        self.text_style(|s| s.weight = w)
    }
    fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }
    fn italic(self) -> Self {
        self.text_style(|s| s.italic = true)
    }
    fn monospace(self) -> Self {
        self.text_style(|s| s.monospace = true)
    }
    fn centered(self) -> Self {
        self.text_style(|s| s.align = TextAlign::Center)
    }
    fn line_height(self, px: f32) -> Self {
        self.text_style(|s| s.line_height = px / s.font_size.max(1.0))
    }
}

impl TextStyleExt for View {
    fn text_style(mut self, f: impl FnOnce(&mut TextStyle)) -> Self {
        if let ViewKind::Text { style, .. } | ViewKind::Button { style, .. } = &mut self.kind {
            f(style);
        }
        self
    }
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

/// Horizontal advance of one grapheme cluster. Combining marks, joiners and
/// selectors ride on the base character and add nothing.
pub fn glyph_advance(grapheme: &str, font_size: f32) -> f32 {
    match grapheme.chars().next() {
        None => 0.0,
        Some(c) if c.is_ascii() => font_size * 0.6,
        Some(_) => font_size,
    }
}

pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.graphemes(true)
        .map(|g| glyph_advance(g, font_size))
        .sum()
}

fn is_word_grapheme(g: &str) -> bool {
    g.chars()
        .next()
        .is_some_and(|c| c.is_ascii() && !c.is_ascii_whitespace())
}

/// Greedy line breaking. ASCII words stay whole; every other grapheme is its
/// own break opportunity. `None` means unbounded width.
pub fn wrap_text(text: &str, font_size: f32, max_width: Option<f32>) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let Some(max_w) = max_width else {
            lines.push(paragraph.to_string());
            continue;
        };

        let mut units: Vec<&str> = Vec::new();
        let mut word_start = None;
        for (i, g) in paragraph.grapheme_indices(true) {
            if is_word_grapheme(g) {
                word_start.get_or_insert(i);
                continue;
            }
            if let Some(start) = word_start.take() {
                units.push(&paragraph[start..i]);
            }
            units.push(g);
        }
        if let Some(start) = word_start {
            units.push(&paragraph[start..]);
        }

        let mut line = String::new();
        let mut line_w = 0.0;
        for unit in units {
            let w = text_width(unit, font_size);
            if line_w + w > max_w + 0.01 && !line.trim().is_empty() {
                lines.push(line.trim_end().to_string());
                line.clear();
                line_w = 0.0;
                if unit.trim().is_empty() {
                    continue;
                }
            }
            line.push_str(unit);
            line_w += w;
        }
        lines.push(line.trim_end().to_string());
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[derive(Clone)]
enum NodeCtx {
    Text { text: String, style: TextStyle },
    Container,
}

fn is_container(kind: &ViewKind) -> bool {
    !matches!(kind, ViewKind::Text { .. } | ViewKind::Button { .. })
}

fn style_from_modifier(m: &Modifier, kind: &ViewKind) -> Style {
    use taffy::{AlignItems, FlexDirection, JustifyContent};

    let mut s = Style {
        display: Display::Flex,
        flex_direction: match kind {
            ViewKind::Row => FlexDirection::Row,
            _ => FlexDirection::Column,
        },
        align_items: Some(if is_container(kind) {
            AlignItems::Stretch
        } else {
            AlignItems::FlexStart
        }),
        justify_content: Some(JustifyContent::FlexStart),
        ..Style::default()
    };

    if let Some(d) = m.flex_dir {
        s.flex_direction = d;
    }
    if let Some(a) = m.align_items_container {
        s.align_items = Some(a);
    }
    if let Some(j) = m.justify_content {
        s.justify_content = Some(j);
    }
    if let Some(a) = m.align_self {
        s.align_self = Some(a);
    }
    if let Some(w) = m.flex_wrap {
        s.flex_wrap = w;
    }
    if let Some(g) = m.flex_grow {
        s.flex_grow = g;
    }
    if let Some(sh) = m.flex_shrink {
        s.flex_shrink = sh;
    }

    if m.position_type == Some(PositionType::Absolute) {
        s.position = Position::Absolute;
        s.inset = taffy::Rect {
            left: m.offset_left.map(length).unwrap_or_else(auto),
            right: m.offset_right.map(length).unwrap_or_else(auto),
            top: m.offset_top.map(length).unwrap_or_else(auto),
            bottom: m.offset_bottom.map(length).unwrap_or_else(auto),
        };
    }

    if matches!(kind, ViewKind::ScrollV(_)) {
        s.overflow = Point {
            x: Overflow::Hidden,
            y: Overflow::Hidden,
        };
    }

    if let Some(pv) = m.padding_values {
        s.padding = taffy::Rect {
            left: length(pv.left),
            right: length(pv.right),
            top: length(pv.top),
            bottom: length(pv.bottom),
        };
    } else if let Some(p) = m.padding {
        s.padding = taffy::Rect {
            left: length(p),
            right: length(p),
            top: length(p),
            bottom: length(p),
        };
    }

    s.margin = taffy::Rect {
        left: m.margin_left.map(length).unwrap_or_else(|| length(0.0)),
        right: m.margin_right.map(length).unwrap_or_else(|| length(0.0)),
        top: m.margin_top.map(length).unwrap_or_else(|| length(0.0)),
        bottom: m.margin_bottom.map(length).unwrap_or_else(|| length(0.0)),
    };

    if let Some(b) = m.border {
        let w = length(b.width.max(0.0));
        s.border = taffy::Rect {
            left: w,
            right: w,
            top: w,
            bottom: w,
        };
    }

    if m.fill_max || m.fill_max_w {
        s.size.width = percent(1.0);
    }
    if m.fill_max || m.fill_max_h {
        s.size.height = percent(1.0);
    }
    if let Some(sz) = m.size {
        s.size.width = length(sz.width.max(0.0));
        s.size.height = length(sz.height.max(0.0));
    }
    if let Some(w) = m.width {
        s.size.width = length(w.max(0.0));
    }
    if let Some(h) = m.height {
        s.size.height = length(h.max(0.0));
    }

    s
}

fn build_node(
    v: &View,
    overlay: bool,
    t: &mut TaffyTree<NodeCtx>,
) -> Result<NodeId> {
    let mut style = style_from_modifier(&v.modifier, &v.kind);
    if overlay && style.position != Position::Absolute {
        style.position = Position::Absolute;
        style.inset = taffy::Rect {
            left: length(0.0),
            right: length(0.0),
            top: length(0.0),
            bottom: length(0.0),
        };
    }

    let node = match &v.kind {
        ViewKind::Text { text, style: ts } | ViewKind::Button { text, style: ts, .. } => t
            .new_leaf_with_context(
                style,
                NodeCtx::Text {
                    text: text.clone(),
                    style: *ts,
                },
            )?,
        kind => {
            let is_stack = matches!(kind, ViewKind::Stack);
            let children = v
                .children
                .iter()
                .enumerate()
                .map(|(i, c)| build_node(c, is_stack && i > 0, t))
                .collect::<Result<Vec<_>>>()?;
            let n = t.new_with_children(style, &children)?;
            t.set_node_context(n, Some(NodeCtx::Container))?;
            n
        }
    };
    Ok(node)
}

fn measure(
    known: taffy::Size<Option<f32>>,
    avail: taffy::Size<AvailableSpace>,
    ctx: Option<&mut NodeCtx>,
) -> taffy::Size<f32> {
    let Some(NodeCtx::Text { text, style }) = ctx else {
        return taffy::Size::ZERO;
    };
    let wrap_w = known.width.or(match avail.width {
        AvailableSpace::Definite(w) => Some(w),
        AvailableSpace::MinContent => Some(0.0),
        AvailableSpace::MaxContent => None,
    });
    let lines = wrap_text(text, style.font_size, wrap_w);
    let natural_w = lines
        .iter()
        .map(|l| text_width(l, style.font_size))
        .fold(0.0, f32::max);
    let line_h = style.font_size * style.line_height;
    taffy::Size {
        width: known.width.unwrap_or(natural_w),
        height: known.height.unwrap_or(line_h * lines.len().max(1) as f32),
    }
}

/// Uniform scale then translate: `p' = p * s + t`.
#[derive(Clone, Copy, Debug)]
struct Affine {
    s: f32,
    tx: f32,
    ty: f32,
}

impl Affine {
    const IDENTITY: Affine = Affine {
        s: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    fn map(&self, r: Rect) -> Rect {
        Rect {
            x: r.x * self.s + self.tx,
            y: r.y * self.s + self.ty,
            w: r.w * self.s,
            h: r.h * self.s,
        }
    }

    /// Compose with a node transform that scales about `origin` (local space).
    fn then(&self, t: Transform, origin: Vec2) -> Affine {
        let k = t.scale;
        let cx = origin.x * (1.0 - k) + t.translate_x;
        let cy = origin.y * (1.0 - k) + t.translate_y;
        Affine {
            s: self.s * k,
            tx: self.s * cx + self.tx,
            ty: self.s * cy + self.ty,
        }
    }
}

fn scale_radii(r: CornerRadii, s: f32) -> CornerRadii {
    CornerRadii {
        top_left: r.top_left * s,
        top_right: r.top_right * s,
        bottom_right: r.bottom_right * s,
        bottom_left: r.bottom_left * s,
    }
}

struct Painter<'a> {
    taffy: &'a TaffyTree<NodeCtx>,
    scene: Scene,
    hits: Vec<HitRegion>,
    next_id: u64,
    affine: Affine,
    alpha: f32,
    clips: SmallVec<[Rect; 4]>,
}

impl Painter<'_> {
    fn clip_hit(&self, r: Rect) -> Option<Rect> {
        match self.clips.last() {
            Some(c) => r.intersect(c),
            None => Some(r),
        }
    }

    fn push_hit(&mut self, rect: Rect, label: Option<String>, on_click: Option<Callback>, on_scroll: Option<ScrollCallback>) {
        let Some(rect) = self.clip_hit(rect) else {
            return;
        };
        self.hits.push(HitRegion {
            id: self.next_id,
            rect,
            label,
            on_click,
            on_scroll,
        });
    }

    fn paint_text(&mut self, content: Rect, text: &str, style: &TextStyle) {
        let line_h = style.font_size * style.line_height;
        for (i, line) in wrap_text(text, style.font_size, Some(content.w))
            .into_iter()
            .enumerate()
        {
            let w = text_width(&line, style.font_size);
            let dx = match style.align {
                TextAlign::Center => ((content.w - w) * 0.5).max(0.0),
                TextAlign::Start => 0.0,
            };
            let local = Rect {
                x: content.x + dx,
                y: content.y + i as f32 * line_h,
                w,
                h: line_h,
            };
            self.scene.nodes.push(SceneNode::Text {
                rect: self.affine.map(local),
                text: line,
                color: style.color.mul_alpha(self.alpha),
                size: style.font_size * self.affine.s,
                weight: style.weight,
                italic: style.italic,
                monospace: style.monospace,
            });
        }
    }

    fn paint(&mut self, v: &View, node: NodeId, origin: Vec2) -> Result<()> {
        let l = *self.taffy.layout(node)?;
        let local = Rect {
            x: origin.x + l.location.x,
            y: origin.y + l.location.y,
            w: l.size.width,
            h: l.size.height,
        };
        let content = Rect {
            x: local.x + l.padding.left + l.border.left,
            y: local.y + l.padding.top + l.border.top,
            w: (local.w - l.padding.left - l.padding.right - l.border.left - l.border.right)
                .max(0.0),
            h: (local.h - l.padding.top - l.padding.bottom - l.border.top - l.border.bottom)
                .max(0.0),
        };
        self.next_id += 1;

        let (saved_affine, saved_alpha) = (self.affine, self.alpha);
        if let Some(t) = v.modifier.transform {
            self.affine = self.affine.then(t, local.center());
        }
        if let Some(a) = v.modifier.alpha {
            self.alpha *= a.clamp(0.0, 1.0);
        }

        let m = &v.modifier;
        let rect = self.affine.map(local);
        let radii = scale_radii(m.radii.unwrap_or_default(), self.affine.s);
        if let Some(sh) = m.shadow {
            self.scene.nodes.push(SceneNode::Shadow {
                rect: Rect {
                    y: rect.y + sh.offset_y * self.affine.s,
                    ..rect
                },
                color: sh.color.mul_alpha(sh.opacity * self.alpha),
                radii,
                blur: sh.blur * self.affine.s,
            });
        }
        if let Some(bg) = m.background {
            self.scene.nodes.push(SceneNode::Rect {
                rect,
                color: bg.mul_alpha(self.alpha),
                radii,
            });
        }
        if let Some(b) = m.border {
            self.scene.nodes.push(SceneNode::Border {
                rect,
                color: b.color.mul_alpha(self.alpha),
                width: b.width * self.affine.s,
                radii,
            });
        }
        if let Some(sem) = &v.semantics
            && sem.role == Role::Dialog
        {
            // Modal surfaces swallow taps and scrolls aimed at what lies beneath.
            self.push_hit(
                rect,
                sem.label.clone(),
                Some(Rc::new(|| {})),
                Some(Rc::new(|_| Vec2::default())),
            );
        }

        match &v.kind {
            ViewKind::Text { text, style } => self.paint_text(content, text, style),
            ViewKind::Button {
                text,
                style,
                on_click,
            } => {
                self.paint_text(content, text, style);
                let label = v
                    .semantics
                    .as_ref()
                    .and_then(|s| s.label.clone())
                    .unwrap_or_else(|| text.clone());
                self.push_hit(rect, Some(label), on_click.clone(), None);
            }
            ViewKind::ScrollV(hooks) => {
                let kids = self.taffy.children(node)?;
                let mut content_h = 0.0f32;
                for &k in &kids {
                    let kl = *self.taffy.layout(k)?;
                    content_h = content_h.max(kl.location.y + kl.size.height);
                }
                (hooks.set_viewport_height)(local.h);
                (hooks.set_content_height)(content_h + l.padding.bottom);
                let offset = (hooks.get_scroll_offset)();

                let clip = self.clip_hit(rect).unwrap_or(Rect { w: 0.0, h: 0.0, ..rect });
                self.push_hit(rect, None, None, Some(hooks.on_scroll.clone()));
                self.scene.nodes.push(SceneNode::PushClip { rect: clip });
                self.clips.push(clip);
                let child_origin = Vec2 {
                    x: local.x,
                    y: local.y - offset,
                };
                for (c, &k) in v.children.iter().zip(&kids) {
                    self.paint(c, k, child_origin)?;
                }
                self.clips.pop();
                self.scene.nodes.push(SceneNode::PopClip);
            }
            _ => {
                let kids = self.taffy.children(node)?;
                let child_origin = Vec2 {
                    x: local.x,
                    y: local.y,
                };
                for (c, &k) in v.children.iter().zip(&kids) {
                    self.paint(c, k, child_origin)?;
                }
            }
        }

        self.affine = saved_affine;
        self.alpha = saved_alpha;
        Ok(())
    }
}

/// Lay `root` out in a `width x height` viewport and paint it.
pub fn layout_and_paint(root: &View, (width, height): (u32, u32)) -> Result<Frame> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyViewport { width, height });
    }

    let mut taffy: TaffyTree<NodeCtx> = TaffyTree::new();
    let root_node = build_node(root, false, &mut taffy)?;

    let mut rs = taffy.style(root_node)?.clone();
    rs.size.width = length(width as f32);
    rs.size.height = length(height as f32);
    taffy.set_style(root_node, rs)?;

    let available = taffy::Size {
        width: AvailableSpace::Definite(width as f32),
        height: AvailableSpace::Definite(height as f32),
    };
    taffy.compute_layout_with_measure(root_node, available, |known, avail, _node, ctx, _style| {
        measure(known, avail, ctx)
    })?;

    let mut painter = Painter {
        taffy: &taffy,
        scene: Scene {
            clear_color: root.modifier.background.unwrap_or(Color::BLACK),
            nodes: Vec::new(),
        },
        hits: Vec::new(),
        next_id: 0,
        affine: Affine::IDENTITY,
        alpha: 1.0,
        clips: SmallVec::new(),
    };
    painter.paint(root, root_node, Vec2::default())?;

    log::trace!(
        "painted {} scene nodes, {} hit regions",
        painter.scene.nodes.len(),
        painter.hits.len()
    );
    Ok(Frame {
        scene: painter.scene,
        hit_regions: painter.hits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn wrap_keeps_ascii_words_whole() {
        // 10px font -> 6px per ASCII glyph
        let lines = wrap_text("hello big world", 10.0, Some(60.0));
        assert_eq!(lines, vec!["hello big", "world"]);
    }

    #[test]
    fn wrap_breaks_between_cjk_glyphs() {
        let lines = wrap_text("功能特性", 10.0, Some(25.0));
        assert_eq!(lines, vec!["功能", "特性"]);
    }

    #[test]
    fn wrap_without_limit_is_one_line() {
        assert_eq!(wrap_text("a b c", 16.0, None), vec!["a b c"]);
        assert_eq!(wrap_text("", 16.0, Some(10.0)), vec![""]);
    }

    #[test]
    fn variation_selector_has_no_width() {
        assert_eq!(text_width("⚙️", 18.0), 18.0);
    }

    #[test]
    fn flags_stay_whole() {
        assert_eq!(text_width("🇨🇳", 18.0), 18.0);
        assert_eq!(wrap_text("🇨🇳🇨🇳", 18.0, Some(20.0)), vec!["🇨🇳", "🇨🇳"]);
    }

    #[test]
    fn combining_marks_ride_on_their_base() {
        assert_eq!(text_width("e\u{301}", 10.0), 6.0);
        assert_eq!(
            wrap_text("cafe\u{301}s ok", 10.0, Some(36.0)),
            vec!["cafe\u{301}s", "ok"]
        );
    }

    #[test]
    fn column_stacks_children_and_registers_buttons() {
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        let root = Column(Modifier::new().padding(10.0)).child((
            Text("title").size(20.0),
            Button("go", move || c.set(c.get() + 1)).size(10.0),
        ));
        let frame = layout_and_paint(&root, (200, 100)).unwrap();

        let texts: Vec<_> = frame.scene.texts().collect();
        assert_eq!(texts, vec!["title", "go"]);

        let hit = frame.hit_by_label("go").expect("button region");
        // 10 padding + one 26px line
        assert_eq!(hit.rect.y, 36.0);
        (hit.on_click.as_ref().unwrap())();
        assert_eq!(clicks.get(), 1);

        let center = hit.rect.center();
        assert!(frame.hit_at(center).is_some());
    }

    #[test]
    fn alpha_and_scale_reach_the_scene() {
        let root = Column(Modifier::new()).child(
            Box(Modifier::new()
                .size(100.0, 50.0)
                .background(Color::WHITE)
                .alpha(0.5)
                .scale(0.5)),
        );
        let frame = layout_and_paint(&root, (100, 100)).unwrap();
        let rect = frame
            .scene
            .nodes
            .iter()
            .find_map(|n| match n {
                SceneNode::Rect { rect, color, .. } => Some((*rect, *color)),
                _ => None,
            })
            .unwrap();
        assert_eq!(rect.1, Color(255, 255, 255, 128));
        assert_eq!(rect.0, Rect {
            x: 25.0,
            y: 12.5,
            w: 50.0,
            h: 25.0
        });
    }

    #[test]
    fn stack_overlays_later_children() {
        let root = Stack(Modifier::new().fill_max_size()).child((
            Column(Modifier::new()).child(Text("under")),
            Box(Modifier::new().background(Color::BLACK)),
        ));
        let frame = layout_and_paint(&root, (50, 40)).unwrap();
        let overlay = frame
            .scene
            .nodes
            .iter()
            .find_map(|n| match n {
                SceneNode::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .unwrap();
        assert_eq!(overlay, Rect {
            x: 0.0,
            y: 0.0,
            w: 50.0,
            h: 40.0
        });
    }

    #[test]
    fn empty_viewport_is_an_error() {
        let err = layout_and_paint(&Box(Modifier::new()), (0, 10)).unwrap_err();
        assert!(matches!(err, Error::EmptyViewport { .. }));
    }

    #[test]
    fn outline_snapshot() {
        let root = Row(Modifier::new().background(Color::from_hex("#e94560"))).child((
            Text("BM"),
            Box(Modifier::new().alpha(0.5).translate(0.0, 25.0)),
        ));
        insta::assert_snapshot!(root.outline(), @r#"
        Row bg=#e94560
          Text "BM"
          Box alpha=0.50 translate=(0.0,25.0)
        "#);
    }
}
