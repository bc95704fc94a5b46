use winit::event::{DeviceEvent, ElementState, Event, MouseScrollDelta, VirtualKeyCode};

pub const NUM_KEYS: usize = 255;
pub const NUM_MOUSE_BUTTONS: usize = 16;

/// Raw "is it down right now" query the per-frame input state is refreshed from.
///
/// Codes are raw table indices; for keys that is the `VirtualKeyCode`
/// discriminant.
pub trait KeyStateSource {
    fn key_down(&self, code: usize) -> bool;
    fn mouse_button_down(&self, code: usize) -> bool;
}

/// Raw device state, written by the window's event handler.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct RawInput {
    /// Stores whether a mouse button is held down
    mouse_held: [bool; NUM_MOUSE_BUTTONS],
    /// Stores whether a key is held down
    key_held: [bool; NUM_KEYS],
    /// Mouse movement since the last rollover
    mouse_delta: (f64, f64),
    /// Amount of scroll since the last rollover
    scroll_delta: (f32, f32),
}

impl Default for RawInput {
    fn default() -> Self {
        RawInput {
            mouse_held: [false; NUM_MOUSE_BUTTONS],
            key_held: [false; NUM_KEYS],
            mouse_delta: (0., 0.),
            scroll_delta: (0., 0.),
        }
    }
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event<T: 'static>(&mut self, event: &Event<T>) {
        if let Event::DeviceEvent { event, .. } = event {
            self.handle_device_event(event);
        }
    }

    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        match event {
            DeviceEvent::Button { button, state } => {
                self.set_mouse_button(*button, *state == ElementState::Pressed)
            }
            DeviceEvent::MouseMotion { delta } => {
                self.mouse_delta.0 += delta.0;
                self.mouse_delta.1 += delta.1;
            }
            DeviceEvent::MouseWheel { delta } => match delta {
                MouseScrollDelta::LineDelta(x, y) => {
                    self.scroll_delta.0 += x;
                    self.scroll_delta.1 += y;
                }
                MouseScrollDelta::PixelDelta(_pos) => {}
            },
            DeviceEvent::Key(input) => {
                if let Some(vcc) = input.virtual_keycode {
                    self.set_key(vcc, input.state == ElementState::Pressed);
                }
            }
            _ => {}
        }
    }

    pub fn set_key(&mut self, key: VirtualKeyCode, down: bool) {
        if let Some(held) = self.key_held.get_mut(key as usize) {
            *held = down;
        }
    }

    pub fn set_mouse_button(&mut self, button: u32, down: bool) {
        if let Some(held) = self.mouse_held.get_mut(button as usize) {
            *held = down;
        }
    }

    /// Clears the per-frame deltas; held state carries over.
    pub fn rollover(&mut self) {
        self.mouse_delta = (0., 0.);
        self.scroll_delta = (0., 0.);
    }

    pub fn mouse_delta(&self) -> (f64, f64) {
        self.mouse_delta
    }

    pub fn scroll_delta(&self) -> (f32, f32) {
        self.scroll_delta
    }
}

impl KeyStateSource for RawInput {
    fn key_down(&self, code: usize) -> bool {
        self.key_held.get(code).copied().unwrap_or(false)
    }

    fn mouse_button_down(&self, code: usize) -> bool {
        self.mouse_held.get(code).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy)]
struct ButtonTable<const N: usize> {
    held: [bool; N],
    pressed: [bool; N],
    released: [bool; N],
}

impl<const N: usize> ButtonTable<N> {
    fn new() -> Self {
        Self {
            held: [false; N],
            pressed: [false; N],
            released: [false; N],
        }
    }

    fn update(&mut self, mut down: impl FnMut(usize) -> bool) {
        for code in 0..N {
            let current = down(code);
            let previous = self.held[code];

            self.pressed[code] = current && !previous;
            self.released[code] = !current && previous;
            self.held[code] = current;
        }
    }

    fn get(table: &[bool; N], code: usize) -> bool {
        table.get(code).copied().unwrap_or(false)
    }
}

/// Per-frame key and mouse button state with press/release edge detection.
///
/// Call [`InputState::update`] exactly once per frame. A press or release is
/// only reported on the frame the transition was observed.
#[derive(Debug, Clone, Copy)]
pub struct InputState {
    keys: ButtonTable<NUM_KEYS>,
    mouse_buttons: ButtonTable<NUM_MOUSE_BUTTONS>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            keys: ButtonTable::new(),
            mouse_buttons: ButtonTable::new(),
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, source: &impl KeyStateSource) {
        self.keys.update(|code| source.key_down(code));
        self.mouse_buttons
            .update(|code| source.mouse_button_down(code));
    }

    /// Returns whether the key went down this frame
    pub fn key_pressed(&self, key: VirtualKeyCode) -> bool {
        ButtonTable::get(&self.keys.pressed, key as usize)
    }

    /// Returns whether the key is down right now
    pub fn key_held(&self, key: VirtualKeyCode) -> bool {
        ButtonTable::get(&self.keys.held, key as usize)
    }

    /// Returns whether the key went up this frame
    pub fn key_released(&self, key: VirtualKeyCode) -> bool {
        ButtonTable::get(&self.keys.released, key as usize)
    }

    pub fn mouse_button_pressed(&self, button: u32) -> bool {
        ButtonTable::get(&self.mouse_buttons.pressed, button as usize)
    }

    pub fn mouse_button_held(&self, button: u32) -> bool {
        ButtonTable::get(&self.mouse_buttons.held, button as usize)
    }

    pub fn mouse_button_released(&self, button: u32) -> bool {
        ButtonTable::get(&self.mouse_buttons.released, button as usize)
    }
}
