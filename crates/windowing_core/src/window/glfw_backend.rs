//! GLFW-based window management
//!
//! [`Device`] owns the GLFW context and a [`WindowRegistry`] of the windows it
//! created. [`Device::poll_events`] pumps GLFW and forwards every native event
//! of every window to that window's [`WindowEvents`] as a [`Notification`].
//!
//! GLFW errors are published on [`Device::errors`] as `(code, description)`
//! pairs. A default listener writes them to the log.
//!
//! GLFW must be driven from the main thread, which matches the
//! single-threaded event model of [`Event`](crate::events::Event).

use std::rc::Rc;

use thiserror::Error;

use super::{
    ClientApi, CursorMode, CursorShape, DeviceSpecification, Notification, WindowEvents, WindowId,
    WindowRegistry, WindowSpecification,
};
use crate::events::Event;
use crate::foundation::time::Timestep;
use crate::input::{KeyCode, MouseCode};

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW could not be initialised
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// GLFW refused to create the window
    #[error("Window creation failed: {0}")]
    CreationFailed(String),
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

impl From<glfw::Key> for KeyCode {
    fn from(key: glfw::Key) -> Self {
        Self(key as i32)
    }
}

impl From<glfw::MouseButton> for MouseCode {
    fn from(button: glfw::MouseButton) -> Self {
        Self(button as i32)
    }
}

impl From<CursorMode> for glfw::CursorMode {
    fn from(mode: CursorMode) -> Self {
        match mode {
            CursorMode::Normal => Self::Normal,
            CursorMode::Hidden => Self::Hidden,
            CursorMode::Disabled => Self::Disabled,
        }
    }
}

/// Closest shape GLFW 3.3 provides; shapes it lacks fall back to the arrow
fn standard_cursor(shape: CursorShape) -> glfw::StandardCursor {
    match shape {
        CursorShape::Arrow => glfw::StandardCursor::Arrow,
        CursorShape::IBeam => glfw::StandardCursor::IBeam,
        CursorShape::Crosshair => glfw::StandardCursor::Crosshair,
        CursorShape::PointingHand => glfw::StandardCursor::Hand,
        CursorShape::ResizeEw => glfw::StandardCursor::HResize,
        CursorShape::ResizeNs => glfw::StandardCursor::VResize,
        CursorShape::ResizeNwse
        | CursorShape::ResizeNesw
        | CursorShape::ResizeAll
        | CursorShape::NotAllowed => {
            log::debug!("No standard cursor for {:?}, using the arrow", shape);
            glfw::StandardCursor::Arrow
        }
    }
}

/// Payload published on [`Device::errors`]
pub fn error_payload(error: glfw::Error, description: String) -> (i32, String) {
    (error as i32, description)
}

/// GLFW error callback forwarding into `errors`
fn forward_errors(
    errors: Rc<Event<(i32, String)>>,
) -> impl FnMut(glfw::Error, String) + 'static {
    move |error, description| errors.invoke(error_payload(error, description))
}

/// Translate a native GLFW event into a backend-neutral notification
///
/// Returns `None` for events this crate has no channel for.
pub fn translate(event: &glfw::WindowEvent) -> Option<Notification> {
    use glfw::{Action, WindowEvent};

    let notification = match *event {
        WindowEvent::Key(key, _, action, _) => {
            let code = KeyCode::from(key);
            match action {
                Action::Press => Notification::KeyPressed(code),
                Action::Release => Notification::KeyReleased(code),
                Action::Repeat => Notification::KeyRepeated(code),
            }
        }
        WindowEvent::MouseButton(button, action, _) => {
            let code = MouseCode::from(button);
            match action {
                Action::Press => Notification::MouseButtonPressed(code),
                Action::Release => Notification::MouseButtonReleased(code),
                Action::Repeat => {
                    log::warn!("Ignoring repeat action for mouse button {:?}", code);
                    return None;
                }
            }
        }
        WindowEvent::Scroll(x, y) => Notification::Scrolled {
            x: x as f32,
            y: y as f32,
        },
        WindowEvent::CursorPos(x, y) => Notification::CursorMoved {
            x: x as f32,
            y: y as f32,
        },
        WindowEvent::Size(width, height) => Notification::Resized { width, height },
        WindowEvent::FramebufferSize(width, height) => {
            Notification::FramebufferResized { width, height }
        }
        WindowEvent::Pos(x, y) => Notification::Moved { x, y },
        WindowEvent::Iconify(true) => Notification::Minimized,
        WindowEvent::Iconify(false) => Notification::Restored,
        WindowEvent::Focus(true) => Notification::FocusGained,
        WindowEvent::Focus(false) => Notification::FocusLost,
        WindowEvent::Close => Notification::CloseRequested,
        _ => return None,
    };

    Some(notification)
}

/// GLFW window wrapper
///
/// Created through [`Device::create_window`]; the device owns it.
pub struct Window {
    handle: glfw::PWindow,
    receiver: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    events: Rc<WindowEvents>,
    title: String,
    cursor_mode: CursorMode,
    cursor_shape: CursorShape,
}

impl Window {
    fn new(glfw: &mut glfw::Glfw, spec: &WindowSpecification) -> WindowResult<Self> {
        glfw.window_hint(glfw::WindowHint::Resizable(spec.resizable));
        glfw.window_hint(glfw::WindowHint::Decorated(spec.decorated));
        glfw.window_hint(glfw::WindowHint::Focused(spec.focused));
        glfw.window_hint(glfw::WindowHint::Maximized(spec.maximized));
        glfw.window_hint(glfw::WindowHint::Floating(spec.floating));
        glfw.window_hint(glfw::WindowHint::Visible(spec.visible));
        glfw.window_hint(glfw::WindowHint::AutoIconify(spec.auto_iconify));

        let (mut handle, receiver) = glfw
            .create_window(spec.width, spec.height, &spec.title, glfw::WindowMode::Windowed)
            .ok_or_else(|| WindowError::CreationFailed(spec.title.clone()))?;

        handle.set_size_limits(spec.min_width, spec.min_height, spec.max_width, spec.max_height);
        handle.set_cursor_mode(spec.cursor_mode.into());
        handle.set_cursor(Some(glfw::Cursor::standard(standard_cursor(spec.cursor_shape))));

        // Set up event polling
        handle.set_key_polling(true);
        handle.set_mouse_button_polling(true);
        handle.set_cursor_pos_polling(true);
        handle.set_scroll_polling(true);
        handle.set_size_polling(true);
        handle.set_framebuffer_size_polling(true);
        handle.set_pos_polling(true);
        handle.set_iconify_polling(true);
        handle.set_focus_polling(true);
        handle.set_close_polling(true);

        Ok(Self {
            handle,
            receiver,
            events: Rc::new(WindowEvents::new()),
            title: spec.title.clone(),
            cursor_mode: spec.cursor_mode,
            cursor_shape: spec.cursor_shape,
        })
    }

    /// Forward queued native events to the notification channels
    fn dispatch_pending(&self) {
        for (_, event) in glfw::flush_messages(&self.receiver) {
            if let Some(notification) = translate(&event) {
                self.events.dispatch(&notification);
            }
        }
    }

    /// Notification channels of this window
    ///
    /// Clone the `Rc` to hand it to an [`InputManager`](crate::input::InputManager).
    pub fn events(&self) -> &Rc<WindowEvents> {
        &self.events
    }

    /// Check if the window should close
    pub fn should_close(&self) -> bool {
        self.handle.should_close()
    }

    /// Set whether the window should close
    pub fn set_should_close(&mut self, should_close: bool) {
        self.handle.set_should_close(should_close);
    }

    /// Window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Change the window title
    pub fn set_title(&mut self, title: &str) {
        self.handle.set_title(title);
        self.title = title.to_string();
    }

    /// Client area size
    pub fn size(&self) -> (i32, i32) {
        self.handle.get_size()
    }

    /// Resize the client area
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.handle.set_size(width, height);
    }

    /// Framebuffer size in pixels
    pub fn framebuffer_size(&self) -> (i32, i32) {
        self.handle.get_framebuffer_size()
    }

    /// Limit the client area size, `None` meaning unlimited
    pub fn set_size_limits(
        &mut self,
        min: (Option<u32>, Option<u32>),
        max: (Option<u32>, Option<u32>),
    ) {
        self.handle.set_size_limits(min.0, min.1, max.0, max.1);
    }

    /// Window position on screen
    pub fn position(&self) -> (i32, i32) {
        self.handle.get_pos()
    }

    /// Move the window
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.handle.set_pos(x, y);
    }

    /// Check if the window is iconified
    pub fn is_minimized(&self) -> bool {
        self.handle.is_iconified()
    }

    /// Iconify the window
    pub fn minimize(&mut self) {
        self.handle.iconify();
    }

    /// Check if the window is maximized
    pub fn is_maximized(&self) -> bool {
        self.handle.is_maximized()
    }

    /// Maximize the window
    pub fn maximize(&mut self) {
        self.handle.maximize();
    }

    /// Undo minimize / maximize
    pub fn restore(&mut self) {
        self.handle.restore();
    }

    /// Check if the window is shown
    pub fn is_visible(&self) -> bool {
        self.handle.is_visible()
    }

    /// Show the window
    pub fn show(&mut self) {
        self.handle.show();
    }

    /// Hide the window
    pub fn hide(&mut self) {
        self.handle.hide();
    }

    /// Check if the window has input focus
    pub fn is_focused(&self) -> bool {
        self.handle.is_focused()
    }

    /// Bring the window to front and give it input focus
    pub fn focus(&mut self) {
        self.handle.focus();
    }

    /// Current cursor mode
    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    /// Change the cursor mode
    pub fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.handle.set_cursor_mode(mode.into());
        self.cursor_mode = mode;
    }

    /// Current cursor shape
    pub fn cursor_shape(&self) -> CursorShape {
        self.cursor_shape
    }

    /// Change the cursor shape
    pub fn set_cursor_shape(&mut self, shape: CursorShape) {
        self.handle.set_cursor(Some(glfw::Cursor::standard(standard_cursor(shape))));
        self.cursor_shape = shape;
    }

    /// Cursor position in window coordinates
    pub fn cursor_position(&self) -> (f32, f32) {
        let (x, y) = self.handle.get_cursor_pos();
        (x as f32, y as f32)
    }

    /// Warp the cursor
    pub fn set_cursor_position(&mut self, x: f32, y: f32) {
        self.handle.set_cursor_pos(f64::from(x), f64::from(y));
    }
}

/// GLFW context plus the windows created through it
pub struct Device {
    glfw: glfw::Glfw,
    windows: WindowRegistry<Window>,
    errors: Rc<Event<(i32, String)>>,
    vsync: bool,
}

impl Device {
    /// Initialise GLFW
    ///
    /// GLFW errors, including those raised during initialisation, are
    /// published on [`Device::errors`] and written to the log.
    pub fn new(spec: &DeviceSpecification) -> WindowResult<Self> {
        let errors = Rc::new(Event::new());
        errors.subscribe(|(code, description): &(i32, String)| {
            log::error!("GLFW error {:#x}: {}", code, description);
        });

        let mut glfw = glfw::init(forward_errors(Rc::clone(&errors)))
            .map_err(|_| WindowError::InitializationFailed)?;

        let client_api = match spec.client_api {
            ClientApi::OpenGl => glfw::ClientApiHint::OpenGl,
            ClientApi::OpenGlEs => glfw::ClientApiHint::OpenGlEs,
            ClientApi::NoApi => glfw::ClientApiHint::NoApi,
        };
        glfw.window_hint(glfw::WindowHint::ClientApi(client_api));

        log::info!("GLFW initialised (client api {:?})", spec.client_api);

        Ok(Self {
            glfw,
            windows: WindowRegistry::new(),
            errors,
            vsync: spec.vsync,
        })
    }

    /// Channel carrying `(code, description)` for every GLFW error
    pub fn errors(&self) -> &Rc<Event<(i32, String)>> {
        &self.errors
    }

    /// Create a window and register it
    pub fn create_window(&mut self, spec: &WindowSpecification) -> WindowResult<WindowId> {
        let window = Window::new(&mut self.glfw, spec)?;
        let id = self.windows.insert(window);
        log::info!("Created window {:?} '{}' ({}x{})", id, spec.title, spec.width, spec.height);
        Ok(id)
    }

    /// Look up a window
    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(id)
    }

    /// Look up a window mutably
    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(id)
    }

    /// Close and forget a window; false if `id` was not registered
    pub fn destroy_window(&mut self, id: WindowId) -> bool {
        let removed = self.windows.remove(id).is_some();
        if removed {
            log::info!("Destroyed window {:?}", id);
        }
        removed
    }

    /// Number of live windows
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Process pending native events and dispatch them to every window
    ///
    /// Call this every frame.
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
        for (_, window) in self.windows.iter() {
            window.dispatch_pending();
        }
    }

    /// Check whether vsync was requested
    pub fn is_vsync_enabled(&self) -> bool {
        self.vsync
    }

    /// Set the swap interval of the current context
    ///
    /// Needs a window with a client API context made current first.
    pub fn set_vsync(&mut self, enabled: bool) {
        let interval = if enabled {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        };
        self.glfw.set_swap_interval(interval);
        self.vsync = enabled;
    }

    /// Time since GLFW was initialised
    pub fn elapsed_time(&self) -> Timestep {
        Timestep::new(self.glfw.get_time() as f32)
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        // The callback lives in GLFW's thread-local slot and holds the channel.
        self.glfw.unset_error_callback();
    }
}
