//! Pinch, pan and rotate gestures folded into a single view transform.
//!
//! The host delivers batches of changed touches; the tracker keeps a committed
//! [`zoom::ZoomState`] plus the active touch samples and emits a clamped
//! [`transform::Transform`] through a callback each time the gesture moves.
//! The host only wires platform events to the tracker and applies the emitted
//! matrix to whatever renders the scene.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`tracker`] | Gesture state machine: begin / move / end, enable / disable / set |
//! | [`zoom`] | Offset / scale / angle state, composition and offset clamping |
//! | [`transform`] | Renderable 2D affine matrix |
//! | [`touch`] | Touch phases and frozen-start touch samples |
//! | [`view`] | The [`view::HostView`] trait the tracker consumes |
//! | [`geometry`] | `Point` and `Size` primitives |
//! | [`config`] | Feature flags and scale limits |
//! | [`error`] | Configuration errors |
//! | [`consts`] | Default scale limits |
//! | [`web`] | WebAssembly binding over a canvas element and DOM touch events |

pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod touch;
pub mod tracker;
pub mod transform;
pub mod view;
pub mod web;
pub mod zoom;
