//! # Windowing Core
//!
//! Event dispatch and input state tracking for windowed applications.
//!
//! ## Features
//!
//! - **Typed Events**: single-threaded publish/subscribe with token based removal
//! - **Input Tracking**: per-frame pressed / held / released queries for keys and mouse buttons
//! - **Backend Neutral**: backends feed [`Notification`](window::Notification)s into [`WindowEvents`](window::WindowEvents)
//! - **GLFW Backend**: optional, behind the `glfw-backend` feature
//! - **File Config**: window and device settings from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use windowing_core::prelude::*;
//!
//! let events = Rc::new(WindowEvents::new());
//! let mut input = InputManager::new(Rc::clone(&events));
//!
//! // One frame
//! input.begin_frame();
//! events.dispatch(&Notification::KeyPressed(KeyCode::SPACE));
//! assert!(input.is_key_pressed(KeyCode::SPACE));
//! input.end_frame();
//!
//! // Next frame: the key is now held
//! input.begin_frame();
//! assert!(input.is_key_held(KeyCode::SPACE));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod events;
pub mod foundation;
pub mod input;
pub mod window;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, WindowingConfig},
        events::{Event, Listener, ListenerId},
        foundation::time::{Timer, Timestep},
        input::{ClickableState, InputManager, KeyCode, MouseCode},
        window::{
            CursorMode, CursorShape, DeviceSpecification, Notification, WindowEvents, WindowId,
            WindowSpecification,
        },
    };

    #[cfg(feature = "glfw-backend")]
    pub use crate::window::glfw_backend::{Device, Window, WindowError};
}
