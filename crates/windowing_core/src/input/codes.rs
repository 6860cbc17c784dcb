//! Keyboard and mouse button codes
//!
//! Both are thin newtypes over the backend's integer codes. The values of the
//! named constants follow GLFW's numbering, so a GLFW key or button converts
//! without a lookup table. Keeping them as separate types means a key code can
//! never be mistaken for a mouse button with the same number.

/// Keyboard key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub i32);

impl KeyCode {
    /// Key not known to the backend
    pub const UNKNOWN: Self = Self(-1);

    /// Space bar
    pub const SPACE: Self = Self(32);
    /// `'` key
    pub const APOSTROPHE: Self = Self(39);
    /// `,` key
    pub const COMMA: Self = Self(44);
    /// `-` key
    pub const MINUS: Self = Self(45);
    /// `.` key
    pub const PERIOD: Self = Self(46);
    /// `/` key
    pub const SLASH: Self = Self(47);

    /// `0` key
    pub const D0: Self = Self(48);
    /// `1` key
    pub const D1: Self = Self(49);
    /// `2` key
    pub const D2: Self = Self(50);
    /// `3` key
    pub const D3: Self = Self(51);
    /// `4` key
    pub const D4: Self = Self(52);
    /// `5` key
    pub const D5: Self = Self(53);
    /// `6` key
    pub const D6: Self = Self(54);
    /// `7` key
    pub const D7: Self = Self(55);
    /// `8` key
    pub const D8: Self = Self(56);
    /// `9` key
    pub const D9: Self = Self(57);

    /// A key
    pub const A: Self = Self(65);
    /// B key
    pub const B: Self = Self(66);
    /// C key
    pub const C: Self = Self(67);
    /// D key
    pub const D: Self = Self(68);
    /// E key
    pub const E: Self = Self(69);
    /// F key
    pub const F: Self = Self(70);
    /// G key
    pub const G: Self = Self(71);
    /// H key
    pub const H: Self = Self(72);
    /// I key
    pub const I: Self = Self(73);
    /// J key
    pub const J: Self = Self(74);
    /// K key
    pub const K: Self = Self(75);
    /// L key
    pub const L: Self = Self(76);
    /// M key
    pub const M: Self = Self(77);
    /// N key
    pub const N: Self = Self(78);
    /// O key
    pub const O: Self = Self(79);
    /// P key
    pub const P: Self = Self(80);
    /// Q key
    pub const Q: Self = Self(81);
    /// R key
    pub const R: Self = Self(82);
    /// S key
    pub const S: Self = Self(83);
    /// T key
    pub const T: Self = Self(84);
    /// U key
    pub const U: Self = Self(85);
    /// V key
    pub const V: Self = Self(86);
    /// W key
    pub const W: Self = Self(87);
    /// X key
    pub const X: Self = Self(88);
    /// Y key
    pub const Y: Self = Self(89);
    /// Z key
    pub const Z: Self = Self(90);

    /// Escape key
    pub const ESCAPE: Self = Self(256);
    /// Enter key
    pub const ENTER: Self = Self(257);
    /// Tab key
    pub const TAB: Self = Self(258);
    /// Backspace key
    pub const BACKSPACE: Self = Self(259);
    /// Insert key
    pub const INSERT: Self = Self(260);
    /// Delete key
    pub const DELETE: Self = Self(261);
    /// Right arrow
    pub const RIGHT: Self = Self(262);
    /// Left arrow
    pub const LEFT: Self = Self(263);
    /// Down arrow
    pub const DOWN: Self = Self(264);
    /// Up arrow
    pub const UP: Self = Self(265);
    /// Page up
    pub const PAGE_UP: Self = Self(266);
    /// Page down
    pub const PAGE_DOWN: Self = Self(267);
    /// Home key
    pub const HOME: Self = Self(268);
    /// End key
    pub const END: Self = Self(269);

    /// F1
    pub const F1: Self = Self(290);
    /// F2
    pub const F2: Self = Self(291);
    /// F3
    pub const F3: Self = Self(292);
    /// F4
    pub const F4: Self = Self(293);
    /// F5
    pub const F5: Self = Self(294);
    /// F6
    pub const F6: Self = Self(295);
    /// F7
    pub const F7: Self = Self(296);
    /// F8
    pub const F8: Self = Self(297);
    /// F9
    pub const F9: Self = Self(298);
    /// F10
    pub const F10: Self = Self(299);
    /// F11
    pub const F11: Self = Self(300);
    /// F12
    pub const F12: Self = Self(301);

    /// Left shift
    pub const LEFT_SHIFT: Self = Self(340);
    /// Left control
    pub const LEFT_CONTROL: Self = Self(341);
    /// Left alt
    pub const LEFT_ALT: Self = Self(342);
    /// Left super / command / windows key
    pub const LEFT_SUPER: Self = Self(343);
    /// Right shift
    pub const RIGHT_SHIFT: Self = Self(344);
    /// Right control
    pub const RIGHT_CONTROL: Self = Self(345);
    /// Right alt
    pub const RIGHT_ALT: Self = Self(346);
    /// Right super / command / windows key
    pub const RIGHT_SUPER: Self = Self(347);

    /// Raw backend value
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for KeyCode {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MouseCode(pub i32);

impl MouseCode {
    /// Left mouse button
    pub const LEFT: Self = Self(0);
    /// Right mouse button
    pub const RIGHT: Self = Self(1);
    /// Middle mouse button
    pub const MIDDLE: Self = Self(2);
    /// Fourth button (usually "back")
    pub const BUTTON_4: Self = Self(3);
    /// Fifth button (usually "forward")
    pub const BUTTON_5: Self = Self(4);
    /// Sixth button
    pub const BUTTON_6: Self = Self(5);
    /// Seventh button
    pub const BUTTON_7: Self = Self(6);
    /// Eighth button
    pub const BUTTON_8: Self = Self(7);

    /// Raw backend value
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for MouseCode {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}
