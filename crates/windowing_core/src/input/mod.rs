//! Input state tracking
//!
//! [`InputManager`] listens to a window's [`WindowEvents`] and keeps one
//! [`ClickableState`] per key and per mouse button. Queries are "leveled":
//! `pressed` and `released` are true for exactly one frame, `held` for as long
//! as the key stays down after that.
//!
//! # Frame protocol
//!
//! ```text
//! begin_frame()   Pressed  -> Repeated
//! poll events     raw notifications overwrite states
//! game logic      is_key_pressed / is_key_held / ...
//! end_frame()     Released -> None
//! ```
//!
//! Backend auto-repeat notifications set `Repeated` immediately, without
//! waiting for the next `begin_frame`.

pub mod codes;
pub mod states;

pub use codes::{KeyCode, MouseCode};
pub use states::{ButtonStates, ClickableState};

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{Event, ListenerId};
use crate::window::WindowEvents;

#[derive(Debug, Default)]
struct InputState {
    keys: ButtonStates<KeyCode>,
    mouse_buttons: ButtonStates<MouseCode>,
    cursor_position: (f32, f32),
    scroll_delta: (f32, f32),
}

#[derive(Debug)]
struct Subscriptions {
    key_pressed: ListenerId,
    key_released: ListenerId,
    key_repeated: ListenerId,
    mouse_button_pressed: ListenerId,
    mouse_button_released: ListenerId,
    cursor_moved: ListenerId,
    mouse_scrolled: ListenerId,
}

/// Keyboard and mouse state tracker bound to one notification source
///
/// Subscribes on construction and unsubscribes everything on drop, so the
/// source never calls into a tracker that is gone.
#[derive(Debug)]
pub struct InputManager {
    source: Rc<WindowEvents>,
    state: Rc<RefCell<InputState>>,
    subscriptions: Subscriptions,
}

impl InputManager {
    /// Start tracking the input channels of `source`
    pub fn new(source: Rc<WindowEvents>) -> Self {
        let state = Rc::new(RefCell::new(InputState::default()));

        let subscriptions = Subscriptions {
            key_pressed: Self::track_key(&source.key_pressed, &state, ClickableState::Pressed),
            key_released: Self::track_key(&source.key_released, &state, ClickableState::Released),
            key_repeated: Self::track_key(&source.key_repeated, &state, ClickableState::Repeated),
            mouse_button_pressed: Self::track_mouse(
                &source.mouse_button_pressed,
                &state,
                ClickableState::Pressed,
            ),
            mouse_button_released: Self::track_mouse(
                &source.mouse_button_released,
                &state,
                ClickableState::Released,
            ),
            cursor_moved: {
                let state = Rc::clone(&state);
                source.cursor_moved.subscribe(move |&position: &(f32, f32)| {
                    state.borrow_mut().cursor_position = position;
                })
            },
            mouse_scrolled: {
                let state = Rc::clone(&state);
                source.mouse_scrolled.subscribe(move |&(x, y): &(f32, f32)| {
                    let mut state = state.borrow_mut();
                    state.scroll_delta.0 += x;
                    state.scroll_delta.1 += y;
                })
            },
        };

        log::debug!("Input manager attached ({} listeners on source)", source.listener_count());

        Self {
            source,
            state,
            subscriptions,
        }
    }

    fn track_key(
        event: &Event<KeyCode>,
        state: &Rc<RefCell<InputState>>,
        new_state: ClickableState,
    ) -> ListenerId {
        let state = Rc::clone(state);
        event.subscribe(move |&code: &KeyCode| state.borrow_mut().keys.set(code, new_state))
    }

    fn track_mouse(
        event: &Event<MouseCode>,
        state: &Rc<RefCell<InputState>>,
        new_state: ClickableState,
    ) -> ListenerId {
        let state = Rc::clone(state);
        event.subscribe(move |&code: &MouseCode| {
            state.borrow_mut().mouse_buttons.set(code, new_state);
        })
    }

    /// Promote keys and buttons pressed last frame to held
    ///
    /// Call once at the start of every frame, before polling events.
    pub fn begin_frame(&mut self) {
        let mut state = self.state.borrow_mut();
        state.keys.promote_pressed();
        state.mouse_buttons.promote_pressed();
    }

    /// Forget keys and buttons released this frame
    ///
    /// Call once at the end of every frame, after consumers had a chance to
    /// see the released state. Also resets the scroll accumulator.
    pub fn end_frame(&mut self) {
        let mut state = self.state.borrow_mut();
        state.keys.clear_released();
        state.mouse_buttons.clear_released();
        state.scroll_delta = (0.0, 0.0);
    }

    /// Stored state of a key
    pub fn key_state(&self, key: KeyCode) -> ClickableState {
        self.state.borrow().keys.get(key)
    }

    /// Stored state of a mouse button
    pub fn mouse_button_state(&self, button: MouseCode) -> ClickableState {
        self.state.borrow().mouse_buttons.get(button)
    }

    /// Key went down this frame
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.key_state(key) == ClickableState::Pressed
    }

    /// Key has been down since an earlier frame
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.key_state(key) == ClickableState::Repeated
    }

    /// Key is pressed or held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.key_state(key).is_down()
    }

    /// Key went up this frame
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.key_state(key) == ClickableState::Released
    }

    /// Mouse button went down this frame
    pub fn is_mouse_button_pressed(&self, button: MouseCode) -> bool {
        self.mouse_button_state(button) == ClickableState::Pressed
    }

    /// Mouse button has been down since an earlier frame
    pub fn is_mouse_button_held(&self, button: MouseCode) -> bool {
        self.mouse_button_state(button) == ClickableState::Repeated
    }

    /// Mouse button is pressed or held
    pub fn is_mouse_button_down(&self, button: MouseCode) -> bool {
        self.mouse_button_state(button).is_down()
    }

    /// Mouse button went up this frame
    pub fn is_mouse_button_released(&self, button: MouseCode) -> bool {
        self.mouse_button_state(button) == ClickableState::Released
    }

    /// Last cursor position reported by the source
    pub fn mouse_position(&self) -> (f32, f32) {
        self.state.borrow().cursor_position
    }

    /// Scroll offset accumulated since the last `end_frame`
    pub fn scroll_delta(&self) -> (f32, f32) {
        self.state.borrow().scroll_delta
    }
}

impl Drop for InputManager {
    fn drop(&mut self) {
        let source = &self.source;
        let ids = &self.subscriptions;
        source.key_pressed.unsubscribe(ids.key_pressed);
        source.key_released.unsubscribe(ids.key_released);
        source.key_repeated.unsubscribe(ids.key_repeated);
        source.mouse_button_pressed.unsubscribe(ids.mouse_button_pressed);
        source.mouse_button_released.unsubscribe(ids.mouse_button_released);
        source.cursor_moved.unsubscribe(ids.cursor_moved);
        source.mouse_scrolled.unsubscribe(ids.mouse_scrolled);
        log::debug!("Input manager detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::Notification;
    use approx::assert_relative_eq;

    fn setup() -> (Rc<WindowEvents>, InputManager) {
        let source = Rc::new(WindowEvents::new());
        let input = InputManager::new(Rc::clone(&source));
        (source, input)
    }

    fn assert_key(input: &InputManager, key: KeyCode, pressed: bool, held: bool, released: bool) {
        assert_eq!(input.is_key_pressed(key), pressed, "pressed");
        assert_eq!(input.is_key_held(key), held, "held");
        assert_eq!(input.is_key_released(key), released, "released");
        assert_eq!(input.is_key_down(key), pressed || held, "down");
    }

    #[test]
    fn test_unobserved_codes_read_not_pressed() {
        let (_source, input) = setup();

        assert_key(&input, KeyCode::A, false, false, false);
        assert!(!input.is_mouse_button_pressed(MouseCode::LEFT));
        assert!(!input.is_mouse_button_held(MouseCode::LEFT));
        assert!(!input.is_mouse_button_released(MouseCode::LEFT));
        assert!(!input.is_mouse_button_down(MouseCode::LEFT));
        assert_eq!(input.key_state(KeyCode::ESCAPE), ClickableState::None);
    }

    #[test]
    fn test_press_then_begin_frame_becomes_held() {
        let (source, mut input) = setup();

        source.dispatch(&Notification::KeyPressed(KeyCode::A));
        assert_key(&input, KeyCode::A, true, false, false);

        input.begin_frame();
        assert_key(&input, KeyCode::A, false, true, false);
    }

    #[test]
    fn test_pressed_lasts_exactly_one_frame() {
        let (source, mut input) = setup();

        input.begin_frame();
        source.dispatch(&Notification::KeyPressed(KeyCode::SPACE));
        assert!(input.is_key_pressed(KeyCode::SPACE));
        input.end_frame();

        input.begin_frame();
        assert!(!input.is_key_pressed(KeyCode::SPACE));
        assert!(input.is_key_held(KeyCode::SPACE));
        input.end_frame();

        // Still held while nothing else happens
        input.begin_frame();
        assert!(input.is_key_held(KeyCode::SPACE));
    }

    #[test]
    fn test_same_frame_press_release_is_last_writer_wins() {
        let (source, mut input) = setup();

        input.begin_frame();
        source.dispatch(&Notification::KeyPressed(KeyCode::A));
        source.dispatch(&Notification::KeyReleased(KeyCode::A));

        assert_key(&input, KeyCode::A, false, false, true);
    }

    #[test]
    fn test_end_frame_clears_released() {
        let (source, mut input) = setup();

        source.dispatch(&Notification::KeyPressed(KeyCode::A));
        input.begin_frame();
        source.dispatch(&Notification::KeyReleased(KeyCode::A));
        assert!(input.is_key_released(KeyCode::A));

        input.end_frame();
        assert_key(&input, KeyCode::A, false, false, false);
        assert_eq!(input.key_state(KeyCode::A), ClickableState::None);
    }

    #[test]
    fn test_released_survives_begin_frame() {
        let (source, mut input) = setup();

        source.dispatch(&Notification::KeyReleased(KeyCode::Q));
        input.begin_frame();

        assert!(input.is_key_released(KeyCode::Q));
    }

    #[test]
    fn test_repeat_sets_held_immediately() {
        let (source, input) = setup();

        source.dispatch(&Notification::KeyRepeated(KeyCode::B));

        assert_key(&input, KeyCode::B, false, true, false);
    }

    #[test]
    fn test_press_while_held_is_a_fresh_press() {
        let (source, mut input) = setup();

        source.dispatch(&Notification::KeyPressed(KeyCode::W));
        input.begin_frame();
        assert!(input.is_key_held(KeyCode::W));

        source.dispatch(&Notification::KeyPressed(KeyCode::W));
        assert!(input.is_key_pressed(KeyCode::W));
        assert!(!input.is_key_held(KeyCode::W));
    }

    #[test]
    fn test_mouse_button_lifecycle() {
        let (source, mut input) = setup();

        source.dispatch(&Notification::MouseButtonPressed(MouseCode::RIGHT));
        assert!(input.is_mouse_button_pressed(MouseCode::RIGHT));
        assert!(input.is_mouse_button_down(MouseCode::RIGHT));

        input.begin_frame();
        assert!(input.is_mouse_button_held(MouseCode::RIGHT));

        source.dispatch(&Notification::MouseButtonReleased(MouseCode::RIGHT));
        assert!(input.is_mouse_button_released(MouseCode::RIGHT));
        assert!(!input.is_mouse_button_down(MouseCode::RIGHT));

        input.end_frame();
        assert_eq!(input.mouse_button_state(MouseCode::RIGHT), ClickableState::None);
    }

    #[test]
    fn test_key_and_mouse_spaces_are_separate() {
        let (source, input) = setup();

        // Same raw value in both spaces
        source.dispatch(&Notification::KeyPressed(KeyCode(1)));
        source.dispatch(&Notification::MouseButtonReleased(MouseCode(1)));

        assert!(input.is_key_pressed(KeyCode(1)));
        assert!(input.is_mouse_button_released(MouseCode(1)));
        assert!(!input.is_key_released(KeyCode(1)));
        assert!(!input.is_mouse_button_pressed(MouseCode(1)));
    }

    #[test]
    fn test_cursor_and_scroll_tracking() {
        let (source, mut input) = setup();

        source.dispatch(&Notification::CursorMoved { x: 10.0, y: 20.0 });
        source.dispatch(&Notification::CursorMoved { x: 12.5, y: 18.0 });
        source.dispatch(&Notification::Scrolled { x: 0.0, y: 1.0 });
        source.dispatch(&Notification::Scrolled { x: 0.5, y: 2.0 });

        let (x, y) = input.mouse_position();
        assert_relative_eq!(x, 12.5);
        assert_relative_eq!(y, 18.0);
        let (sx, sy) = input.scroll_delta();
        assert_relative_eq!(sx, 0.5);
        assert_relative_eq!(sy, 3.0);

        input.end_frame();
        assert_eq!(input.scroll_delta(), (0.0, 0.0));
        // Position is sticky across frames
        assert_relative_eq!(input.mouse_position().0, 12.5);
    }

    #[test]
    fn test_drop_releases_every_subscription() {
        let source = Rc::new(WindowEvents::new());
        let before = source.listener_count();

        let input = InputManager::new(Rc::clone(&source));
        assert_eq!(source.listener_count(), before + 7);

        drop(input);
        assert_eq!(source.listener_count(), before);

        // Notifications after the tracker is gone reach nobody
        source.dispatch(&Notification::KeyPressed(KeyCode::A));
    }

    #[test]
    fn test_two_trackers_on_one_source() {
        let source = Rc::new(WindowEvents::new());
        let mut first = InputManager::new(Rc::clone(&source));
        let second = InputManager::new(Rc::clone(&source));

        source.dispatch(&Notification::KeyPressed(KeyCode::E));
        first.begin_frame();

        assert!(first.is_key_held(KeyCode::E));
        assert!(second.is_key_pressed(KeyCode::E));

        drop(second);
        source.dispatch(&Notification::KeyReleased(KeyCode::E));
        assert!(first.is_key_released(KeyCode::E));
    }
}
