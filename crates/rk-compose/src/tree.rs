use rk_core::{Color, Frame};
use serde::Serialize;

/// A node of the visual tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Children positioned relative to an offset.
    Group(Group),
    /// A filled rectangle.
    Rect(Rect),
}

/// A translated container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Horizontal offset applied to every child.
    pub x: u32,
    /// Vertical offset applied to every child.
    pub y: u32,
    /// Child nodes, drawn in order.
    pub children: Vec<Node>,
}

/// A colored rectangle, optionally shown during only one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    /// Left edge, relative to the enclosing group.
    pub x: u32,
    /// Top edge, relative to the enclosing group.
    pub y: u32,
    /// Width in units.
    pub width: u32,
    /// Height in units.
    pub height: u32,
    /// Fill color.
    pub color: Color,
    /// The frame this rectangle belongs to; `None` means always visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<Frame>,
}

impl Rect {
    /// A rectangle visible in every frame.
    pub fn new(x: u32, y: u32, width: u32, height: u32, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
            frame: None,
        }
    }

    /// Restrict the rectangle to one animation frame.
    pub fn in_frame(mut self, frame: Frame) -> Self {
        self.frame = Some(frame);
        self
    }
}

impl Group {
    /// An empty group at an offset.
    pub fn at(x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            children: Vec::new(),
        }
    }
}

impl Node {
    /// Every rectangle in the subtree, in drawing order, with group offsets
    /// folded into absolute coordinates.
    pub fn flatten(&self) -> Vec<Rect> {
        let mut out = Vec::new();
        self.flatten_into(0, 0, &mut out);
        out
    }

    fn flatten_into(&self, dx: u32, dy: u32, out: &mut Vec<Rect>) {
        match self {
            Self::Rect(rect) => out.push(Rect {
                x: rect.x.saturating_add(dx),
                y: rect.y.saturating_add(dy),
                ..*rect
            }),
            Self::Group(group) => {
                for child in &group.children {
                    child.flatten_into(
                        dx.saturating_add(group.x),
                        dy.saturating_add(group.y),
                        out,
                    );
                }
            }
        }
    }
}

impl From<Rect> for Node {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

/// A composed room or drawing, ready for an emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    /// Id of the room or drawing that was composed.
    pub id: String,
    /// Viewport width in units.
    pub width: u32,
    /// Viewport height in units.
    pub height: u32,
    /// How long each animation frame is shown; frame-tagged rectangles
    /// alternate at this rate.
    pub frame_duration_ms: u32,
    /// The tree itself.
    pub root: Node,
}

impl Scene {
    /// The tree's rectangles in absolute coordinates.
    pub fn rects(&self) -> Vec<Rect> {
        self.root.flatten()
    }

    /// Whether any rectangle is tied to an animation frame.
    pub fn is_animated(&self) -> bool {
        self.rects().iter().any(|r| r.frame.is_some())
    }
}
