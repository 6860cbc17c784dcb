//! Window-side notification plumbing
//!
//! A windowing backend never talks to listeners directly. It translates each
//! native event into a [`Notification`] and hands it to
//! [`WindowEvents::dispatch`], which fires the matching [`Event`] channel.
//!
//! ```text
//!  native events ──► backend ──► Notification ──► WindowEvents::dispatch
//!                                                        │
//!                                   ┌────────────────────┼──────────────────┐
//!                                   ▼                    ▼                  ▼
//!                             InputManager         user listeners      Window bookkeeping
//! ```
//!
//! # Module Organization
//!
//! - **`spec`**: serde-backed window and device creation settings
//! - **`registry`**: explicit window id -> window map owned by the device
//! - **`glfw_backend`**: GLFW implementation (feature `glfw-backend`)

pub mod registry;
pub mod spec;

#[cfg(feature = "glfw-backend")]
pub mod glfw_backend;

pub use registry::{WindowId, WindowRegistry};
pub use spec::{ClientApi, CursorMode, CursorShape, DeviceSpecification, WindowSpecification};

use crate::events::Event;
use crate::input::{KeyCode, MouseCode};

/// Raw transition reported by a windowing backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    /// Key went down
    KeyPressed(KeyCode),
    /// Key went up
    KeyReleased(KeyCode),
    /// Backend auto-repeat for a held key
    KeyRepeated(KeyCode),
    /// Mouse button went down
    MouseButtonPressed(MouseCode),
    /// Mouse button went up
    MouseButtonReleased(MouseCode),
    /// Scroll wheel / touchpad offset
    Scrolled {
        /// Horizontal offset
        x: f32,
        /// Vertical offset
        y: f32,
    },
    /// Cursor moved, in window coordinates
    CursorMoved {
        /// Cursor X
        x: f32,
        /// Cursor Y
        y: f32,
    },
    /// Window client area resized
    Resized {
        /// New width
        width: i32,
        /// New height
        height: i32,
    },
    /// Framebuffer resized (may differ from the window size on HiDPI)
    FramebufferResized {
        /// New width in pixels
        width: i32,
        /// New height in pixels
        height: i32,
    },
    /// Window moved on screen
    Moved {
        /// New X
        x: i32,
        /// New Y
        y: i32,
    },
    /// Window was iconified
    Minimized,
    /// Window came back from being iconified
    Restored,
    /// Window gained input focus
    FocusGained,
    /// Window lost input focus
    FocusLost,
    /// User asked to close the window
    CloseRequested,
}

/// Every notification channel a window exposes
///
/// Shared (through `Rc`) between the window that feeds it and whoever wants to
/// listen, e.g. an [`InputManager`](crate::input::InputManager).
#[derive(Debug, Default)]
pub struct WindowEvents {
    /// Key went down
    pub key_pressed: Event<KeyCode>,
    /// Key went up
    pub key_released: Event<KeyCode>,
    /// Key auto-repeat
    pub key_repeated: Event<KeyCode>,

    /// Mouse button went down
    pub mouse_button_pressed: Event<MouseCode>,
    /// Mouse button went up
    pub mouse_button_released: Event<MouseCode>,
    /// Scroll offset `(x, y)`
    pub mouse_scrolled: Event<(f32, f32)>,
    /// Cursor position `(x, y)`
    pub cursor_moved: Event<(f32, f32)>,

    /// Window size `(width, height)`
    pub resized: Event<(i32, i32)>,
    /// Framebuffer size `(width, height)`
    pub framebuffer_resized: Event<(i32, i32)>,
    /// Window position `(x, y)`
    pub moved: Event<(i32, i32)>,

    /// Window iconified
    pub minimized: Event<()>,
    /// Window restored from iconified state
    pub restored: Event<()>,
    /// Input focus gained
    pub focus_gained: Event<()>,
    /// Input focus lost
    pub focus_lost: Event<()>,
    /// Close requested
    pub close_requested: Event<()>,
}

impl WindowEvents {
    /// Create a set of channels with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the channel matching `notification`
    pub fn dispatch(&self, notification: &Notification) {
        match *notification {
            Notification::KeyPressed(code) => self.key_pressed.invoke(code),
            Notification::KeyReleased(code) => self.key_released.invoke(code),
            Notification::KeyRepeated(code) => self.key_repeated.invoke(code),
            Notification::MouseButtonPressed(code) => self.mouse_button_pressed.invoke(code),
            Notification::MouseButtonReleased(code) => self.mouse_button_released.invoke(code),
            Notification::Scrolled { x, y } => self.mouse_scrolled.invoke((x, y)),
            Notification::CursorMoved { x, y } => self.cursor_moved.invoke((x, y)),
            Notification::Resized { width, height } => self.resized.invoke((width, height)),
            Notification::FramebufferResized { width, height } => {
                self.framebuffer_resized.invoke((width, height));
            }
            Notification::Moved { x, y } => self.moved.invoke((x, y)),
            Notification::Minimized => self.minimized.invoke(()),
            Notification::Restored => self.restored.invoke(()),
            Notification::FocusGained => self.focus_gained.invoke(()),
            Notification::FocusLost => self.focus_lost.invoke(()),
            Notification::CloseRequested => self.close_requested.invoke(()),
        }
    }

    /// Total number of listeners across all channels
    pub fn listener_count(&self) -> usize {
        self.key_pressed.len()
            + self.key_released.len()
            + self.key_repeated.len()
            + self.mouse_button_pressed.len()
            + self.mouse_button_released.len()
            + self.mouse_scrolled.len()
            + self.cursor_moved.len()
            + self.resized.len()
            + self.framebuffer_resized.len()
            + self.moved.len()
            + self.minimized.len()
            + self.restored.len()
            + self.focus_gained.len()
            + self.focus_lost.len()
            + self.close_requested.len()
    }
}
