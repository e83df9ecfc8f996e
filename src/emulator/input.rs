pub const NUM_KEYS: usize = 16;

/// The hexadecimal keypad, one flag per key in the range 0..0xF.
/// Written by whatever reads the real keyboard, read by the key instructions.
/// A key stays pressed until it is released.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; NUM_KEYS],
}

impl Keypad {
    pub fn new() -> Keypad {
        Keypad::default()
    }

    /// Only the low nibble of `key` is used.
    pub fn set(&mut self, key: u8, pressed: bool) {
        self.keys[(key & 0xF) as usize] = pressed;
    }

    pub fn press(&mut self, key: u8) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: u8) {
        self.set(key, false);
    }

    pub fn release_all(&mut self) {
        self.keys = [false; NUM_KEYS];
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[(key & 0xF) as usize]
    }

    /// The lowest pressed key, if any.
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|pressed| *pressed).map(|key| key as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pressed_scans_upwards() {
        let mut keypad = Keypad::new();
        assert_eq!(keypad.first_pressed(), None);
        keypad.press(0xC);
        keypad.press(0x3);
        assert_eq!(keypad.first_pressed(), Some(0x3));
        keypad.release(0x3);
        assert_eq!(keypad.first_pressed(), Some(0xC));
    }

    #[test]
    fn keys_use_low_nibble() {
        let mut keypad = Keypad::new();
        keypad.press(0x1A);
        assert!(keypad.is_pressed(0xA));
        keypad.release_all();
        assert!(!keypad.is_pressed(0xA));
    }
}
