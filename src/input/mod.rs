//! # Input Module
//!
//! Keyboard handling for the world preview window.

use macroquad::prelude::*;

/// Something the viewer asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerInput {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
    /// Throw the current world away and generate one with a fresh seed
    Regenerate,
    ToggleEntities,
    Quit,
}

impl ViewerInput {
    /// Panning repeats while the key is held; everything else fires once per press.
    pub fn is_continuous(self) -> bool {
        matches!(
            self,
            ViewerInput::PanUp | ViewerInput::PanDown | ViewerInput::PanLeft | ViewerInput::PanRight
        )
    }
}

/// Key bindings, checked in this order.
pub const KEY_BINDINGS: &[(KeyCode, ViewerInput)] = &[
    (KeyCode::Escape, ViewerInput::Quit),
    (KeyCode::Up, ViewerInput::PanUp),
    (KeyCode::W, ViewerInput::PanUp),
    (KeyCode::Down, ViewerInput::PanDown),
    (KeyCode::S, ViewerInput::PanDown),
    (KeyCode::Left, ViewerInput::PanLeft),
    (KeyCode::A, ViewerInput::PanLeft),
    (KeyCode::Right, ViewerInput::PanRight),
    (KeyCode::D, ViewerInput::PanRight),
    (KeyCode::Equal, ViewerInput::ZoomIn),
    (KeyCode::KpAdd, ViewerInput::ZoomIn),
    (KeyCode::Minus, ViewerInput::ZoomOut),
    (KeyCode::KpSubtract, ViewerInput::ZoomOut),
    (KeyCode::R, ViewerInput::Regenerate),
    (KeyCode::E, ViewerInput::ToggleEntities),
];

/// Input bound to a key, if any.
pub fn input_for_key(key: KeyCode) -> Option<ViewerInput> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, input)| *input)
}

/// Reads the macroquad keyboard state.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Inputs triggered this frame, without duplicates.
    pub fn poll(&self) -> Vec<ViewerInput> {
        let mut inputs = Vec::new();
        for (key, input) in KEY_BINDINGS {
            let active = if input.is_continuous() {
                is_key_down(*key)
            } else {
                is_key_pressed(*key)
            };
            if active && !inputs.contains(input) {
                inputs.push(*input);
            }
        }
        inputs
    }
}
