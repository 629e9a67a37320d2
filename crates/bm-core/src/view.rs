use std::fmt::Write as _;
use std::rc::Rc;

use crate::{Color, CornerRadii, Modifier, Rect, Vec2};

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;
pub type ScrollCallback = Rc<dyn Fn(Vec2) -> Vec2>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    SemiBold,
    Bold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Logical font size; layout treats one unit as one pixel.
    pub font_size: f32,
    pub weight: FontWeight,
    pub italic: bool,
    pub monospace: bool,
    pub align: TextAlign,
    /// Line height as a multiple of `font_size`.
    pub line_height: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            font_size: 16.0,
            weight: FontWeight::Normal,
            italic: false,
            monospace: false,
            align: TextAlign::Start,
            line_height: 1.3,
        }
    }
}

/// Scroll plumbing the layout pass talks to. All hooks are owned by the
/// scroll state that built the node.
#[derive(Clone)]
pub struct ScrollHooks {
    pub on_scroll: ScrollCallback,
    pub set_viewport_height: Rc<dyn Fn(f32)>,
    pub set_content_height: Rc<dyn Fn(f32)>,
    pub get_scroll_offset: Rc<dyn Fn() -> f32>,
}

#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    Stack,
    ScrollV(ScrollHooks),
    Text { text: String, style: TextStyle },
    Button {
        text: String,
        style: TextStyle,
        on_click: Option<Callback>,
    },
}

impl ViewKind {
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Surface => "Surface",
            ViewKind::Box => "Box",
            ViewKind::Row => "Row",
            ViewKind::Column => "Column",
            ViewKind::Stack => "Stack",
            ViewKind::ScrollV(_) => "ScrollV",
            ViewKind::Text { .. } => "Text",
            ViewKind::Button { .. } => "Button",
        }
    }

    /// Equality ignoring callbacks.
    fn same_shape(&self, other: &ViewKind) -> bool {
        match (self, other) {
            (ViewKind::Text { text: a, style: sa }, ViewKind::Text { text: b, style: sb }) => {
                a == b && sa == sb
            }
            (
                ViewKind::Button {
                    text: a, style: sa, ..
                },
                ViewKind::Button {
                    text: b, style: sb, ..
                },
            ) => a == b && sa == sb,
            (a, b) => a.name() == b.name(),
        }
    }
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Text { text, style } => f
                .debug_struct("Text")
                .field("text", text)
                .field("style", style)
                .finish(),
            ViewKind::Button { text, style, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("style", style)
                .field("on_click", &"<callback>")
                .finish(),
            other => f.write_str(other.name()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Same kinds, texts, styles and modifiers all the way down. Callbacks and
    /// ids are not compared.
    pub fn structurally_eq(&self, other: &View) -> bool {
        self.kind.same_shape(&other.kind)
            && self.modifier == other.modifier
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.structurally_eq(b))
    }

    /// Depth-first search for the first view matching `pred`.
    pub fn find(&self, pred: &dyn Fn(&View) -> bool) -> Option<&View> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    pub fn find_text(&self, needle: &str) -> Option<&View> {
        self.find(&|v: &View| matches!(&v.kind, ViewKind::Text { text, .. } if text == needle))
    }

    pub fn find_button(&self, label: &str) -> Option<&View> {
        self.find(&|v: &View| matches!(&v.kind, ViewKind::Button { text, .. } if text == label))
    }

    /// Indented one-line-per-node dump: kind, text and the visual modifiers.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let _ = write!(out, "{:indent$}{}", "", self.kind.name(), indent = depth * 2);
        match &self.kind {
            ViewKind::Text { text, .. } | ViewKind::Button { text, .. } => {
                let _ = write!(out, " {text:?}");
            }
            _ => {}
        }
        let m = &self.modifier;
        if let Some(bg) = m.background {
            let _ = write!(out, " bg={}", bg.to_hex());
        }
        if let Some(a) = m.alpha {
            let _ = write!(out, " alpha={a:.2}");
        }
        if let Some(t) = m.transform {
            if t.translate_x != 0.0 || t.translate_y != 0.0 {
                let _ = write!(out, " translate=({:.1},{:.1})", t.translate_x, t.translate_y);
            }
            if t.scale != 1.0 {
                let _ = write!(out, " scale={:.2}", t.scale);
            }
        }
        out.push('\n');
        for c in &self.children {
            c.write_outline(out, depth + 1);
        }
    }
}

/// Renderable scene
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    /// Every text run in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Shadow {
        rect: Rect,
        color: Color,
        radii: CornerRadii,
        blur: f32,
    },
    Rect {
        rect: Rect,
        color: Color,
        radii: CornerRadii,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radii: CornerRadii,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
        weight: FontWeight,
        italic: bool,
        monospace: bool,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
}
