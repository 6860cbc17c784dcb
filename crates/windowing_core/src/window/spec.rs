//! Window and device creation settings
//!
//! Plain serde structs, so they can be filled from a TOML or RON file through
//! the [`Config`](crate::config::Config) trait or built in code.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// How the cursor behaves over a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CursorMode {
    /// Visible and free
    #[default]
    Normal,
    /// Hidden while over the window
    Hidden,
    /// Hidden and locked to the window (relative motion)
    Disabled,
}

/// Standard cursor shape shown over a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CursorShape {
    /// Regular arrow
    #[default]
    Arrow,
    /// Text input I-beam
    IBeam,
    /// Crosshair
    Crosshair,
    /// Pointing hand
    PointingHand,
    /// Horizontal resize arrow
    ResizeEw,
    /// Vertical resize arrow
    ResizeNs,
    /// Diagonal resize arrow, top-left to bottom-right
    ResizeNwse,
    /// Diagonal resize arrow, top-right to bottom-left
    ResizeNesw,
    /// Omni-directional resize arrow
    ResizeAll,
    /// Operation not allowed
    NotAllowed,
}

/// Client API the backend should create contexts for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClientApi {
    /// Desktop OpenGL
    OpenGl,
    /// OpenGL ES
    OpenGlEs,
    /// No context (Vulkan, Metal, DirectX, software)
    #[default]
    NoApi,
}

/// Settings used when creating a window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSpecification {
    /// Title bar text
    pub title: String,
    /// Client area width
    pub width: u32,
    /// Client area height
    pub height: u32,
    /// Smallest allowed width, `None` for no limit
    pub min_width: Option<u32>,
    /// Smallest allowed height, `None` for no limit
    pub min_height: Option<u32>,
    /// Largest allowed width, `None` for no limit
    pub max_width: Option<u32>,
    /// Largest allowed height, `None` for no limit
    pub max_height: Option<u32>,
    /// User can resize the window
    pub resizable: bool,
    /// Border and title bar
    pub decorated: bool,
    /// Take input focus on creation
    pub focused: bool,
    /// Start maximized
    pub maximized: bool,
    /// Stay above regular windows
    pub floating: bool,
    /// Start visible
    pub visible: bool,
    /// Iconify when a full screen window loses focus
    pub auto_iconify: bool,
    /// Initial cursor mode
    pub cursor_mode: CursorMode,
    /// Initial cursor shape
    pub cursor_shape: CursorShape,
}

impl WindowSpecification {
    /// Default settings with a custom title and size
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }
}

impl Default for WindowSpecification {
    fn default() -> Self {
        Self {
            title: "No title".to_string(),
            width: 1280,
            height: 720,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            resizable: true,
            decorated: true,
            focused: true,
            maximized: false,
            floating: false,
            visible: true,
            auto_iconify: true,
            cursor_mode: CursorMode::Normal,
            cursor_shape: CursorShape::Arrow,
        }
    }
}

impl Config for WindowSpecification {}

/// Settings applied once when the backend is initialised
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSpecification {
    /// Client API hint for every window created by the device
    pub client_api: ClientApi,
    /// Wait for vertical blank when swapping
    pub vsync: bool,
}

impl Default for DeviceSpecification {
    fn default() -> Self {
        Self {
            client_api: ClientApi::NoApi,
            vsync: true,
        }
    }
}

impl Config for DeviceSpecification {}
