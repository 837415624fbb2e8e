//! Scene description parser.
//!
//! The format is line oriented. Each directive starts with a keyword:
//!
//! ```text
//! camera 512
//!
//! sphere
//! dimension 2
//! center 0 0 -10
//! color 1 0 0
//! reflectivity 0.5
//!
//! plane
//! dimension 8 8
//! center 0 -2 -10
//! normal 0 1 0
//! headup 0 0 1
//! color 0.8 0.8 0.8
//!
//! light
//! location 0 20 -5
//! color 1 1 1
//! ```
//!
//! `sphere` and `plane` blocks run until a blank line or end of input. Any
//! key a block does not recognise stores its first value as the texture
//! name. A `light` is always the next two lines: location, then colour; the
//! leading label on each is ignored. Lines starting with `#` are comments.

use std::collections::VecDeque;

use thiserror::Error;
use whit_math::Vec3;

use crate::light::Light;
use crate::plane::Plane;
use crate::scene::Scene;
use crate::sphere::Sphere;

/// Errors that can occur while parsing a scene description.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid number at line {line}: {token:?}")]
    InvalidNumber { line: usize, token: String },

    #[error("Unexpected end of file in {0} block")]
    UnexpectedEof(&'static str),

    #[error("Scene has no camera directive")]
    MissingCamera,
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Scene description parser.
pub struct SceneParser {
    lines: VecDeque<(usize, String)>,
}

impl SceneParser {
    /// Create a new parser from file contents.
    pub fn new(content: &str) -> Self {
        let lines = content
            .lines()
            .enumerate()
            .map(|(i, s)| (i + 1, s.to_string()))
            .collect();

        Self { lines }
    }

    /// Parse the whole description into a scene.
    pub fn parse(&mut self) -> ParseResult<Scene> {
        let mut size = None;
        let mut scene = Scene::default();

        while let Some((line_num, line)) = self.lines.pop_front() {
            let mut tokens = line.split_whitespace();
            let Some(keyword) = tokens.next() else {
                continue;
            };
            if keyword.starts_with('#') {
                continue;
            }

            match keyword {
                "camera" => {
                    let token = tokens.next().ok_or_else(|| ParseError::Parse {
                        line: line_num,
                        message: "camera needs an image size".to_string(),
                    })?;
                    size = Some(token.parse::<u32>().map_err(|_| ParseError::InvalidNumber {
                        line: line_num,
                        token: token.to_string(),
                    })?);
                }
                "sphere" => scene.spheres.push(self.parse_sphere()?),
                "plane" => scene.planes.push(self.parse_plane()?),
                "light" => scene.lights.push(self.parse_light()?),
                other => {
                    log::debug!("Ignoring unknown directive {:?} at line {}", other, line_num);
                }
            }
        }

        scene.size = size.ok_or(ParseError::MissingCamera)?;
        Ok(scene)
    }

    /// Pop the next line of a block, or `None` at a blank line / end of input.
    fn next_block_line(&mut self) -> Option<(usize, String)> {
        loop {
            let (line_num, line) = self.lines.pop_front()?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            if !trimmed.starts_with('#') {
                return Some((line_num, line));
            }
        }
    }

    fn parse_sphere(&mut self) -> ParseResult<Sphere> {
        let mut sphere = Sphere::default();

        while let Some((line_num, line)) = self.next_block_line() {
            let mut fields = Fields::new(&line, line_num);
            match fields.key() {
                "dimension" => sphere.radius = fields.float()?,
                "center" => sphere.center = fields.vec3()?,
                "color" => sphere.color = fields.vec3()?,
                "reflectivity" => sphere.reflectivity = fields.float()?,
                _ => sphere.texture = fields.rest(),
            }
        }

        Ok(sphere)
    }

    fn parse_plane(&mut self) -> ParseResult<Plane> {
        let mut plane = Plane::default();

        while let Some((line_num, line)) = self.next_block_line() {
            let mut fields = Fields::new(&line, line_num);
            match fields.key() {
                "dimension" => {
                    plane.width = fields.float()?;
                    plane.height = fields.float()?;
                }
                "center" => plane.center = fields.vec3()?,
                "color" => plane.color = fields.vec3()?,
                "normal" => plane.normal = fields.vec3()?,
                "headup" => plane.headup = fields.vec3()?,
                "reflectivity" => plane.reflectivity = fields.float()?,
                _ => plane.texture = fields.rest(),
            }
        }

        Ok(plane)
    }

    fn parse_light(&mut self) -> ParseResult<Light> {
        let (line_num, line) = self
            .lines
            .pop_front()
            .ok_or(ParseError::UnexpectedEof("light"))?;
        let location = Fields::new(&line, line_num).vec3()?;

        let (line_num, line) = self
            .lines
            .pop_front()
            .ok_or(ParseError::UnexpectedEof("light"))?;
        let color = Fields::new(&line, line_num).vec3()?;

        Ok(Light::new(location, color))
    }
}

/// Whitespace-separated fields of one `key value...` line.
struct Fields<'a> {
    tokens: std::str::SplitWhitespace<'a>,
    key: &'a str,
    line: usize,
}

impl<'a> Fields<'a> {
    fn new(line: &'a str, line_num: usize) -> Self {
        let mut tokens = line.split_whitespace();
        let key = tokens.next().unwrap_or("");
        Self {
            tokens,
            key,
            line: line_num,
        }
    }

    fn key(&self) -> &'a str {
        self.key
    }

    fn float(&mut self) -> ParseResult<f32> {
        let token = self.tokens.next().ok_or_else(|| ParseError::Parse {
            line: self.line,
            message: format!("missing value for `{}`", self.key),
        })?;
        token.parse::<f32>().map_err(|_| ParseError::InvalidNumber {
            line: self.line,
            token: token.to_string(),
        })
    }

    fn vec3(&mut self) -> ParseResult<Vec3> {
        Ok(Vec3::new(self.float()?, self.float()?, self.float()?))
    }

    /// First remaining token, or empty.
    fn rest(&mut self) -> String {
        self.tokens.next().unwrap_or("").to_string()
    }
}

/// Parse a scene description string.
pub fn parse_scene(content: &str) -> ParseResult<Scene> {
    SceneParser::new(content).parse()
}
