use std::fmt::Write as _;

use bm_core::{Frame, Rect, Scene, SceneNode};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
    pub scene_nodes: usize,
    pub text_runs: usize,
    pub hit_regions: usize,
}

impl Metrics {
    pub fn of(frame: &Frame) -> Self {
        Self {
            scene_nodes: frame.scene.nodes.len(),
            text_runs: frame.scene.texts().count(),
            hit_regions: frame.hit_regions.len(),
        }
    }
}

fn rect(r: &Rect) -> String {
    format!("({:.0},{:.0} {:.0}x{:.0})", r.x, r.y, r.w, r.h)
}

/// One line per scene node, clip nesting shown as indentation.
pub fn describe_scene(scene: &Scene) -> String {
    let mut out = format!("clear {}\n", scene.clear_color.to_hex());
    let mut depth = 0usize;
    for node in &scene.nodes {
        if matches!(node, SceneNode::PopClip) {
            depth = depth.saturating_sub(1);
        }
        let pad = depth * 2;
        let _ = match node {
            SceneNode::Shadow { rect: r, color, blur, .. } => {
                writeln!(out, "{:pad$}shadow {} {} blur={blur:.0}", "", rect(r), color.to_hex())
            }
            SceneNode::Rect { rect: r, color, .. } => {
                writeln!(out, "{:pad$}rect {} {}", "", rect(r), color.to_hex())
            }
            SceneNode::Border {
                rect: r,
                color,
                width,
                ..
            } => writeln!(out, "{:pad$}border {} {} w={width:.0}", "", rect(r), color.to_hex()),
            SceneNode::Text {
                rect: r,
                text,
                color,
                size,
                ..
            } => writeln!(
                out,
                "{:pad$}text {} {} {size:.0}px {text:?}",
                "",
                rect(r),
                color.to_hex()
            ),
            SceneNode::PushClip { rect: r } => writeln!(out, "{:pad$}clip {}", "", rect(r)),
            SceneNode::PopClip => writeln!(out, "{:pad$}unclip", ""),
        };
        if matches!(node, SceneNode::PushClip { .. }) {
            depth += 1;
        }
    }
    out
}

/// Labelled hit regions, top-most last.
pub fn describe_controls(frame: &Frame) -> String {
    let mut out = String::new();
    for h in frame.hit_regions.iter().filter(|h| h.on_click.is_some()) {
        let _ = writeln!(
            out,
            "{} {}",
            h.label.as_deref().unwrap_or("<unlabelled>"),
            rect(&h.rect)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bm_core::Color;

    #[test]
    fn clips_indent_their_contents() {
        let r = Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 5.0,
        };
        let scene = Scene {
            clear_color: Color::BLACK,
            nodes: vec![
                SceneNode::PushClip { rect: r },
                SceneNode::Rect {
                    rect: r,
                    color: Color::WHITE,
                    radii: Default::default(),
                },
                SceneNode::PopClip,
            ],
        };
        insta::assert_snapshot!(describe_scene(&scene), @r"
        clear #000000
        clip (0,0 10x5)
          rect (0,0 10x5) #ffffff
        unclip
        ");
    }
}
