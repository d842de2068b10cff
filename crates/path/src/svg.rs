//! Reading and writing paths in the SVG path-data syntax.
//!
//! Supported commands are `M`, `L`, `H`, `V`, `Q`, `C` and `Z`, in absolute and
//! relative (lower case) forms. Numbers are separated by whitespace and/or commas and a
//! command letter may be omitted to repeat the previous command. Numbers following a
//! move-to are treated as line-to commands.
//!
//! ```
//! use contour_path::Path;
//!
//! let path: Path = "M 0 0 L 10 0 10 10 Z".parse().unwrap();
//! assert_eq!(path.len(), 4);
//! assert_eq!(path.to_string(), "M 0 0 L 10 0 L 10 10 Z");
//! ```

use crate::builder::{Builder, PathBuilder};
use crate::commands::PathCommand;
use crate::math::{point, Point};
use crate::path::Path;

use thiserror::Error;

use std::fmt;
use std::str::FromStr;

/// Errors reported by [`parse_path_data`]. Offsets are byte offsets into the source.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Offset {offset}: Expected number, got {src:?}.")]
    Number { src: String, offset: usize },
    #[error("Offset {offset}: Unexpected end of input.")]
    UnexpectedEnd { offset: usize },
    #[error("Offset {offset}: Invalid command {command:?}.")]
    Command { command: char, offset: usize },
    #[error("Offset {offset}: Expected a command before the coordinates.")]
    MissingCommand { offset: usize },
}

/// Parses SVG path data into a [`Path`].
///
/// Relative coordinates are resolved against the end of the previous command, or
/// against the start of the sub-path after a `Z`.
pub fn parse_path_data(src: &str) -> Result<Path, ParseError> {
    let mut parser = Parser { src, pos: 0 };
    let mut builder = Builder::new();

    let mut position = point(0.0, 0.0);
    let mut first = point(0.0, 0.0);
    let mut implicit_cmd: Option<char> = None;

    loop {
        parser.skip_separators();
        let offset = parser.pos;
        let c = match parser.current() {
            Some(c) => c,
            None => break,
        };

        let cmd = if c.is_ascii_alphabetic() {
            parser.pos += 1;
            c
        } else if starts_number(c) {
            match implicit_cmd {
                Some(cmd) => cmd,
                None => return Err(ParseError::MissingCommand { offset }),
            }
        } else {
            return Err(ParseError::Command { command: c, offset });
        };

        let is_relative = cmd.is_ascii_lowercase();
        let origin = if is_relative { position } else { point(0.0, 0.0) };

        match cmd {
            'm' | 'M' => {
                position = parser.point(origin)?;
                first = position;
                builder.move_to(position);
            }
            'l' | 'L' => {
                position = parser.point(origin)?;
                builder.line_to(position);
            }
            'h' | 'H' => {
                position = point(parser.number()? + origin.x, position.y);
                builder.line_to(position);
            }
            'v' | 'V' => {
                position = point(position.x, parser.number()? + origin.y);
                builder.line_to(position);
            }
            'q' | 'Q' => {
                let ctrl = parser.point(origin)?;
                position = parser.point(origin)?;
                builder.quadratic_bezier_to(ctrl, position);
            }
            'c' | 'C' => {
                let ctrl1 = parser.point(origin)?;
                let ctrl2 = parser.point(origin)?;
                position = parser.point(origin)?;
                builder.cubic_bezier_to(ctrl1, ctrl2, position);
            }
            'z' | 'Z' => {
                builder.close();
                position = first;
            }
            _ => {
                return Err(ParseError::Command {
                    command: cmd,
                    offset,
                });
            }
        }

        implicit_cmd = match cmd {
            'm' => Some('l'),
            'M' => Some('L'),
            'z' | 'Z' => None,
            c => Some(c),
        };
    }

    Ok(builder.build())
}

fn starts_number(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-' || c == '+'
}

struct Parser<'l> {
    src: &'l str,
    pos: usize,
}

impl<'l> Parser<'l> {
    fn current(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn current_byte(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn skip_separators(&mut self) {
        while let Some(b) = self.current_byte() {
            if !(b.is_ascii_whitespace() || b == b',') {
                break;
            }
            self.pos += 1;
        }
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.current_byte() {
            self.pos += 1;
        }
    }

    fn skip_sign(&mut self) {
        if let Some(b'-') | Some(b'+') = self.current_byte() {
            self.pos += 1;
        }
    }

    fn number(&mut self) -> Result<f64, ParseError> {
        self.skip_separators();
        let start = self.pos;
        if start >= self.src.len() {
            return Err(ParseError::UnexpectedEnd { offset: start });
        }

        self.skip_sign();
        self.skip_digits();
        if self.current_byte() == Some(b'.') {
            self.pos += 1;
            self.skip_digits();
        }
        if let Some(b'e') | Some(b'E') = self.current_byte() {
            self.pos += 1;
            self.skip_sign();
            self.skip_digits();
        }

        let text = &self.src[start..self.pos];
        text.parse::<f64>().map_err(|_| {
            let src = if text.is_empty() {
                self.current().map(String::from).unwrap_or_default()
            } else {
                text.to_string()
            };
            ParseError::Number { src, offset: start }
        })
    }

    fn point(&mut self, origin: Point) -> Result<Point, ParseError> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(point(origin.x + x, origin.y + y))
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(src: &str) -> Result<Path, ParseError> {
        parse_path_data(src)
    }
}

/// Writes the path in the SVG path-data syntax, using absolute commands only.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, cmd) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match *cmd {
                PathCommand::MoveTo(to) => write!(f, "M {} {}", to.x, to.y)?,
                PathCommand::LineTo(to) => write!(f, "L {} {}", to.x, to.y)?,
                PathCommand::QuadCurveTo { ctrl, to } => {
                    write!(f, "Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)?
                }
                PathCommand::CurveTo { ctrl1, ctrl2, to } => write!(
                    f,
                    "C {} {} {} {} {} {}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                )?,
                PathCommand::CloseSubpath => write!(f, "Z")?,
            }
        }

        Ok(())
    }
}

#[test]
fn empty() {
    assert!(parse_path_data("").unwrap().is_empty());
    assert!(parse_path_data(" \n, ").unwrap().is_empty());
}

#[test]
fn absolute_square() {
    let path = parse_path_data("M 0 0 L 1 0 L 1 1 L 0 1 Z").unwrap();
    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo(point(0.0, 0.0)),
            PathCommand::LineTo(point(1.0, 0.0)),
            PathCommand::LineTo(point(1.0, 1.0)),
            PathCommand::LineTo(point(0.0, 1.0)),
            PathCommand::CloseSubpath,
        ]
    );
}

#[test]
fn relative_and_implicit_commands() {
    let path = parse_path_data("m1,1 2,0 0,2 h-2 z l 1 1 V5 v -1 H 0").unwrap();
    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo(point(1.0, 1.0)),
            PathCommand::LineTo(point(3.0, 1.0)),
            PathCommand::LineTo(point(3.0, 3.0)),
            PathCommand::LineTo(point(1.0, 3.0)),
            PathCommand::CloseSubpath,
            // Relative to the start of the closed sub-path.
            PathCommand::LineTo(point(2.0, 2.0)),
            PathCommand::LineTo(point(2.0, 5.0)),
            PathCommand::LineTo(point(2.0, 4.0)),
            PathCommand::LineTo(point(0.0, 4.0)),
        ]
    );
}

#[test]
fn curves() {
    let path = parse_path_data("M10 10 q 5 -5 10 0 C 30 10 40 20 50 50 c 1 1 2 2 3 3").unwrap();
    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo(point(10.0, 10.0)),
            PathCommand::QuadCurveTo {
                ctrl: point(15.0, 5.0),
                to: point(20.0, 10.0),
            },
            PathCommand::CurveTo {
                ctrl1: point(30.0, 10.0),
                ctrl2: point(40.0, 20.0),
                to: point(50.0, 50.0),
            },
            PathCommand::CurveTo {
                ctrl1: point(51.0, 51.0),
                ctrl2: point(52.0, 52.0),
                to: point(53.0, 53.0),
            },
        ]
    );
}

#[test]
fn compact_numbers() {
    let path = parse_path_data("M-1.5-2L.5.5 1e1-1E-1").unwrap();
    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo(point(-1.5, -2.0)),
            PathCommand::LineTo(point(0.5, 0.5)),
            PathCommand::LineTo(point(10.0, -0.1)),
        ]
    );
}

#[test]
fn errors() {
    assert_eq!(
        parse_path_data("M 0 0 X 1"),
        Err(ParseError::Command {
            command: 'X',
            offset: 6
        })
    );
    assert_eq!(
        parse_path_data("M 0 0 # 1"),
        Err(ParseError::Command {
            command: '#',
            offset: 6
        })
    );
    assert_eq!(
        parse_path_data("M 0"),
        Err(ParseError::UnexpectedEnd { offset: 3 })
    );
    assert_eq!(
        parse_path_data("M 0 abc"),
        Err(ParseError::Number {
            src: "a".to_string(),
            offset: 4
        })
    );
    assert_eq!(
        parse_path_data("M 0 - 1"),
        Err(ParseError::Number {
            src: "-".to_string(),
            offset: 4
        })
    );
    assert_eq!(
        parse_path_data("10 10"),
        Err(ParseError::MissingCommand { offset: 0 })
    );
    assert_eq!(
        parse_path_data("M 0 0 Z 1 1"),
        Err(ParseError::MissingCommand { offset: 8 })
    );
}

#[test]
fn display_round_trip() {
    let mut builder = Path::builder();
    builder.add_ellipse(&crate::math::rect(-3.25, 1.0, 7.0, 1.0 / 3.0));
    builder.move_to(point(1.0, 2.0));
    builder.quadratic_bezier_to(point(0.1, 0.2), point(-1e-3, 1e10));
    let path = builder.build();

    let text = path.to_string();
    let parsed: Path = text.parse().unwrap();
    assert_eq!(parsed, path);

    assert_eq!(
        Path::rect(&crate::math::rect(0.0, 0.0, 2.0, 1.5)).to_string(),
        "M 0 0 L 2 0 L 2 1.5 L 0 1.5 Z"
    );
}
