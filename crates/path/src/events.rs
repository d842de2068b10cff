use crate::commands::PathCommand;
use crate::geom::{CubicBezierSegment, LineSegment, QuadraticBezierSegment};
use crate::math::{point, Point};

/// Represents an event or edge of a path.
///
/// Unlike [`PathCommand`], edges carry their start position and sub-paths are
/// explicitly ended, which is what algorithms consuming paths usually need.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathEvent {
    Begin {
        at: Point,
    },
    Line {
        from: Point,
        to: Point,
    },
    Quadratic {
        from: Point,
        ctrl: Point,
        to: Point,
    },
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    End {
        last: Point,
        first: Point,
        close: bool,
    },
}

impl PathEvent {
    pub fn from(&self) -> Point {
        match *self {
            PathEvent::Line { from, .. }
            | PathEvent::Quadratic { from, .. }
            | PathEvent::Cubic { from, .. }
            | PathEvent::Begin { at: from }
            | PathEvent::End { last: from, .. } => from,
        }
    }

    pub fn to(&self) -> Point {
        match *self {
            PathEvent::Line { to, .. }
            | PathEvent::Quadratic { to, .. }
            | PathEvent::Cubic { to, .. }
            | PathEvent::Begin { at: to }
            | PathEvent::End { first: to, .. } => to,
        }
    }

    /// Invokes the callback with the line segments of this event, approximating curves
    /// according to `flattening`.
    ///
    /// `End` events produce the closing segment only when `close` is true.
    pub fn for_each_flattened<F>(
        &self,
        flattening: &crate::geom::Flattening,
        callback: &mut F,
    ) where
        F: FnMut(&LineSegment<f64>),
    {
        use crate::geom::flatten::{CUBIC_STEPS, QUADRATIC_STEPS};

        match *self {
            PathEvent::Begin { .. } => {}
            PathEvent::Line { from, to } => callback(&LineSegment { from, to }),
            PathEvent::Quadratic { from, ctrl, to } => {
                let curve = QuadraticBezierSegment { from, ctrl, to };
                flattening.for_each_flattened(&curve, QUADRATIC_STEPS, callback);
            }
            PathEvent::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let curve = CubicBezierSegment {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                };
                flattening.for_each_flattened(&curve, CUBIC_STEPS, callback);
            }
            PathEvent::End { last, first, close } => {
                if close {
                    callback(&LineSegment {
                        from: last,
                        to: first,
                    });
                }
            }
        }
    }
}

/// An iterator of [`PathEvent`] over a sequence of commands.
///
/// Commands are processed positionally, without rejecting malformed sequences:
///
/// - `MoveTo` ends the running sub-path, if any, and begins a new one.
/// - `CloseSubpath` ends the running sub-path with `close: true` and moves the
///   position back to the start of the sub-path. It is skipped if no sub-path is
///   running.
/// - A segment with no running sub-path implicitly begins one at the current
///   position, which is the origin at the start of the path.
/// - The end of the commands ends the running sub-path with `close: false`.
#[derive(Clone)]
pub struct Events<'l> {
    commands: std::slice::Iter<'l, PathCommand>,
    position: Point,
    first: Point,
    in_sub_path: bool,
    pending: Option<PathEvent>,
}

impl<'l> Events<'l> {
    pub fn new(commands: &'l [PathCommand]) -> Self {
        Events {
            commands: commands.iter(),
            position: point(0.0, 0.0),
            first: point(0.0, 0.0),
            in_sub_path: false,
            pending: None,
        }
    }

    fn edge(&mut self, edge: PathEvent) -> PathEvent {
        self.position = edge.to();
        if self.in_sub_path {
            return edge;
        }

        self.in_sub_path = true;
        self.first = edge.from();
        self.pending = Some(edge);

        PathEvent::Begin { at: self.first }
    }
}

impl<'l> Iterator for Events<'l> {
    type Item = PathEvent;

    fn next(&mut self) -> Option<PathEvent> {
        if let Some(evt) = self.pending.take() {
            return Some(evt);
        }

        loop {
            let from = self.position;
            let cmd = match self.commands.next() {
                Some(cmd) => *cmd,
                None => {
                    if !self.in_sub_path {
                        return None;
                    }
                    self.in_sub_path = false;
                    return Some(PathEvent::End {
                        last: self.position,
                        first: self.first,
                        close: false,
                    });
                }
            };

            return Some(match cmd {
                PathCommand::MoveTo(at) => {
                    let end = PathEvent::End {
                        last: self.position,
                        first: self.first,
                        close: false,
                    };
                    let begin = PathEvent::Begin { at };
                    self.position = at;
                    self.first = at;
                    if self.in_sub_path {
                        self.pending = Some(begin);
                        end
                    } else {
                        self.in_sub_path = true;
                        begin
                    }
                }
                PathCommand::LineTo(to) => self.edge(PathEvent::Line { from, to }),
                PathCommand::QuadCurveTo { ctrl, to } => {
                    self.edge(PathEvent::Quadratic { from, ctrl, to })
                }
                PathCommand::CurveTo { ctrl1, ctrl2, to } => self.edge(PathEvent::Cubic {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                }),
                PathCommand::CloseSubpath => {
                    if !self.in_sub_path {
                        continue;
                    }
                    self.in_sub_path = false;
                    self.position = self.first;
                    PathEvent::End {
                        last: from,
                        first: self.first,
                        close: true,
                    }
                }
            });
        }
    }
}

#[test]
fn events_of_two_sub_paths() {
    let commands = [
        PathCommand::MoveTo(point(0.0, 0.0)),
        PathCommand::LineTo(point(1.0, 0.0)),
        PathCommand::CloseSubpath,
        PathCommand::MoveTo(point(5.0, 5.0)),
        PathCommand::QuadCurveTo {
            ctrl: point(6.0, 6.0),
            to: point(7.0, 5.0),
        },
    ];

    let events: std::vec::Vec<PathEvent> = Events::new(&commands).collect();
    assert_eq!(
        events,
        std::vec![
            PathEvent::Begin {
                at: point(0.0, 0.0)
            },
            PathEvent::Line {
                from: point(0.0, 0.0),
                to: point(1.0, 0.0)
            },
            PathEvent::End {
                last: point(1.0, 0.0),
                first: point(0.0, 0.0),
                close: true
            },
            PathEvent::Begin {
                at: point(5.0, 5.0)
            },
            PathEvent::Quadratic {
                from: point(5.0, 5.0),
                ctrl: point(6.0, 6.0),
                to: point(7.0, 5.0)
            },
            PathEvent::End {
                last: point(7.0, 5.0),
                first: point(5.0, 5.0),
                close: false
            },
        ]
    );
}

#[test]
fn move_to_ends_running_sub_path() {
    let commands = [
        PathCommand::MoveTo(point(0.0, 0.0)),
        PathCommand::LineTo(point(1.0, 0.0)),
        PathCommand::MoveTo(point(2.0, 0.0)),
        PathCommand::MoveTo(point(3.0, 0.0)),
    ];

    let events: std::vec::Vec<PathEvent> = Events::new(&commands).collect();
    assert_eq!(events.len(), 7);
    assert_eq!(
        events[2],
        PathEvent::End {
            last: point(1.0, 0.0),
            first: point(0.0, 0.0),
            close: false
        }
    );
    assert_eq!(
        events[6],
        PathEvent::End {
            last: point(3.0, 0.0),
            first: point(3.0, 0.0),
            close: false
        }
    );
}

#[test]
fn segments_without_move_to() {
    // No leading MoveTo: the sub-path implicitly starts at the origin.
    let commands = [
        PathCommand::LineTo(point(4.0, 0.0)),
        PathCommand::LineTo(point(4.0, 4.0)),
        PathCommand::CloseSubpath,
        // After a close, drawing resumes from the start of the previous sub-path.
        PathCommand::LineTo(point(0.0, 4.0)),
        PathCommand::CloseSubpath,
        PathCommand::CloseSubpath,
    ];

    let events: std::vec::Vec<PathEvent> = Events::new(&commands).collect();
    assert_eq!(
        events,
        std::vec![
            PathEvent::Begin {
                at: point(0.0, 0.0)
            },
            PathEvent::Line {
                from: point(0.0, 0.0),
                to: point(4.0, 0.0)
            },
            PathEvent::Line {
                from: point(4.0, 0.0),
                to: point(4.0, 4.0)
            },
            PathEvent::End {
                last: point(4.0, 4.0),
                first: point(0.0, 0.0),
                close: true
            },
            PathEvent::Begin {
                at: point(0.0, 0.0)
            },
            PathEvent::Line {
                from: point(0.0, 0.0),
                to: point(0.0, 4.0)
            },
            PathEvent::End {
                last: point(0.0, 4.0),
                first: point(0.0, 0.0),
                close: true
            },
        ]
    );
}
