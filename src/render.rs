
use {
    crate::math::P2,
    ggez::{graphics::Color, GameResult},
};

/// What the demo needs from a renderer: a current draw colour and the
/// ability to put a line segment between two points.
pub trait LineCanvas {
    fn set_color(&mut self, color: Color);
    fn line(&mut self, a: P2, b: P2) -> GameResult;
}

#[cfg(test)]
pub(crate) mod trace {
    use super::*;

    #[derive(Clone, Copy, Debug)]
    pub enum Op {
        Color(Color),
        Line(P2, P2),
    }

    /// Records every canvas call for inspection.
    #[derive(Default)]
    pub struct TraceCanvas {
        pub ops: Vec<Op>,
    }

    impl TraceCanvas {
        pub fn new() -> TraceCanvas {
            TraceCanvas::default()
        }

        pub fn lines(&self) -> Vec<(P2, P2)> {
            self.ops.iter()
                .filter_map(|op| match op {
                    Op::Line(a, b) => Some((*a, *b)),
                    _              => None,
                })
                .collect()
        }

        pub fn colors(&self) -> Vec<Color> {
            self.ops.iter()
                .filter_map(|op| match op {
                    Op::Color(c) => Some(*c),
                    _            => None,
                })
                .collect()
        }
    }

    impl LineCanvas for TraceCanvas {
        fn set_color(&mut self, color: Color) {
            self.ops.push(Op::Color(color));
        }

        fn line(&mut self, a: P2, b: P2) -> GameResult {
            self.ops.push(Op::Line(a, b));
            Ok(())
        }
    }
}
