//! Headless stand-in for the graphics collaborators.
//!
//! [`Recorder`] implements the uniform sink, the mesh provider and the texture
//! device at once and appends everything it is asked to do to a shared log.
//! Clones share the same log, so one recorder can be handed to every seam of a
//! [`crate::flow::SceneFlow`] and inspected afterwards.
//!
//! It is part of the public API rather than a test helper: tools that need a
//! scene's draw sequence without a GPU (replay diffs, headless validation of a
//! scene description) drive a `SceneFlow` with it.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

use crate::{
    data_structures::texture::{Sampling, TextureDevice},
    resources::{
        DecodedImage,
        mesh::{MeshFlags, MeshKind, MeshProvider},
    },
    uniforms::{UniformSink, UniformValue},
};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Upload {
        label: String,
        handle: u32,
        width: u32,
        height: u32,
        channels: u8,
        sampling: Sampling,
    },
    BindTexture {
        unit: usize,
        handle: u32,
    },
    Release {
        handle: u32,
    },
    Uniform {
        name: String,
        value: UniformValue,
    },
    Prepare(MeshKind),
    Draw {
        kind: MeshKind,
        flags: MeshFlags,
    },
}

#[derive(Clone, Debug, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<Command>>>,
    next_handle: Rc<Cell<u32>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, command: Command) {
        self.log.borrow_mut().push(command);
    }

    fn uniform(&self, name: &str, value: UniformValue) {
        self.push(Command::Uniform {
            name: name.to_string(),
            value,
        });
    }

    pub fn commands(&self) -> Vec<Command> {
        self.log.borrow().clone()
    }

    /// Drains the log.
    pub fn take(&self) -> Vec<Command> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    /// Most recent value written to `name`, if any.
    pub fn last_uniform(&self, name: &str) -> Option<UniformValue> {
        self.log.borrow().iter().rev().find_map(|command| match command {
            Command::Uniform { name: n, value } if n == name => Some(*value),
            _ => None,
        })
    }

    pub fn draws(&self) -> Vec<(MeshKind, MeshFlags)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|command| match command {
                Command::Draw { kind, flags } => Some((*kind, *flags)),
                _ => None,
            })
            .collect()
    }

    /// Binary transcript of the log. Two logs encode to the same bytes exactly
    /// when they hold the same commands with bit-identical values.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for command in self.log.borrow().iter() {
            encode(command, &mut out);
        }
        out
    }
}

fn encode_str(s: &str, out: &mut Vec<u8>) {
    out.extend_from_slice(bytemuck::bytes_of(&(s.len() as u32)));
    out.extend_from_slice(s.as_bytes());
}

fn encode(command: &Command, out: &mut Vec<u8>) {
    match command {
        Command::Upload {
            label,
            handle,
            width,
            height,
            channels,
            sampling,
        } => {
            out.push(0);
            encode_str(label, out);
            out.extend_from_slice(bytemuck::cast_slice(&[*handle, *width, *height]));
            out.extend_from_slice(&[
                *channels,
                sampling.wrap_u as u8,
                sampling.wrap_v as u8,
                sampling.min_filter as u8,
                sampling.mag_filter as u8,
                sampling.generate_mipmaps as u8,
            ]);
        }
        Command::BindTexture { unit, handle } => {
            out.push(1);
            out.extend_from_slice(bytemuck::cast_slice(&[*unit as u32, *handle]));
        }
        Command::Release { handle } => {
            out.push(2);
            out.extend_from_slice(bytemuck::bytes_of(handle));
        }
        Command::Uniform { name, value } => {
            out.push(3);
            encode_str(name, out);
            match value {
                UniformValue::Bool(v) => out.extend_from_slice(&[0, *v as u8]),
                UniformValue::Int(v) => {
                    out.push(1);
                    out.extend_from_slice(bytemuck::bytes_of(v));
                }
                UniformValue::Float(v) => {
                    out.push(2);
                    out.extend_from_slice(bytemuck::bytes_of(v));
                }
                UniformValue::Vec2(v) => {
                    out.push(3);
                    out.extend_from_slice(bytemuck::bytes_of(v));
                }
                UniformValue::Vec3(v) => {
                    out.push(4);
                    out.extend_from_slice(bytemuck::bytes_of(v));
                }
                UniformValue::Vec4(v) => {
                    out.push(5);
                    out.extend_from_slice(bytemuck::bytes_of(v));
                }
                UniformValue::Mat4(v) => {
                    out.push(6);
                    out.extend_from_slice(bytemuck::bytes_of(v));
                }
            }
        }
        Command::Prepare(kind) => out.extend_from_slice(&[4, *kind as u8]),
        Command::Draw { kind, flags } => out.extend_from_slice(&[
            5,
            *kind as u8,
            flags.top as u8,
            flags.bottom as u8,
            flags.sides as u8,
        ]),
    }
}

impl UniformSink for Recorder {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.uniform(name, UniformValue::Bool(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.uniform(name, UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.uniform(name, UniformValue::Float(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.uniform(name, UniformValue::Vec2(value.into()));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.uniform(name, UniformValue::Vec3(value.into()));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.uniform(name, UniformValue::Vec4(value.into()));
    }

    fn set_mat4(&mut self, name: &str, value: &Matrix4<f32>) {
        self.uniform(name, UniformValue::Mat4((*value).into()));
    }
}

impl MeshProvider for Recorder {
    fn prepare(&mut self, kind: MeshKind) {
        self.push(Command::Prepare(kind));
    }

    fn draw(&mut self, kind: MeshKind, flags: MeshFlags) {
        self.push(Command::Draw { kind, flags });
    }
}

impl TextureDevice for Recorder {
    type Handle = u32;

    fn upload(
        &mut self,
        label: &str,
        image: &DecodedImage,
        sampling: &Sampling,
    ) -> anyhow::Result<u32> {
        anyhow::ensure!(
            image.pixels.len() == image.byte_len(),
            "pixel buffer of '{}' holds {} bytes, expected {}",
            label,
            image.pixels.len(),
            image.byte_len()
        );
        let handle = self.next_handle.get() + 1;
        self.next_handle.set(handle);
        self.push(Command::Upload {
            label: label.to_string(),
            handle,
            width: image.width,
            height: image.height,
            channels: image.channels,
            sampling: *sampling,
        });
        Ok(handle)
    }

    fn bind(&mut self, unit: usize, handle: &u32) {
        self.push(Command::BindTexture {
            unit,
            handle: *handle,
        });
    }

    fn release(&mut self, handle: u32) {
        self.push(Command::Release { handle });
    }
}
