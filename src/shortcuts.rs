//! Centralized shortcut and action system.
//!
//! Maps key events to editor actions so the event loop and the help overlay
//! share one source of truth.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    // === OVERRIDES ===
    NudgeUp,
    NudgeDown,
    NudgeUpLarge,
    NudgeDownLarge,
    ClearOverride,
    ClearAllOverrides,

    // === PARAMETERS ===
    AddStep,
    RemoveStep,
    IncreaseBase,
    DecreaseBase,
    CycleCurve,
    IncreaseIntensity,
    DecreaseIntensity,
    ToggleMode,

    // === OUTPUT ===
    CopyCss,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Quit,
}

impl Action {
    /// Stable identifier for the action.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::SelectPrevious => "select_previous",
            Self::SelectNext => "select_next",
            Self::SelectFirst => "select_first",
            Self::SelectLast => "select_last",

            Self::NudgeUp => "nudge_up",
            Self::NudgeDown => "nudge_down",
            Self::NudgeUpLarge => "nudge_up_large",
            Self::NudgeDownLarge => "nudge_down_large",
            Self::ClearOverride => "clear_override",
            Self::ClearAllOverrides => "clear_all_overrides",

            Self::AddStep => "add_step",
            Self::RemoveStep => "remove_step",
            Self::IncreaseBase => "increase_base",
            Self::DecreaseBase => "decrease_base",
            Self::CycleCurve => "cycle_curve",
            Self::IncreaseIntensity => "increase_intensity",
            Self::DecreaseIntensity => "decrease_intensity",
            Self::ToggleMode => "toggle_mode",

            Self::CopyCss => "copy_css",
            Self::ToggleHelp => "toggle_help",
            Self::Quit => "quit",
        }
    }

    /// One-line description shown in the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::SelectPrevious => "Select previous step",
            Self::SelectNext => "Select next step",
            Self::SelectFirst => "Select first step",
            Self::SelectLast => "Select last step",
            Self::NudgeUp => "Increase selected size",
            Self::NudgeDown => "Decrease selected size",
            Self::NudgeUpLarge => "Increase selected size (x10)",
            Self::NudgeDownLarge => "Decrease selected size (x10)",
            Self::ClearOverride => "Clear override on selected step",
            Self::ClearAllOverrides => "Clear all overrides",
            Self::AddStep => "Add a step",
            Self::RemoveStep => "Remove last step",
            Self::IncreaseBase => "Increase base size",
            Self::DecreaseBase => "Decrease base size",
            Self::CycleCurve => "Cycle curve type",
            Self::IncreaseIntensity => "Increase curve intensity",
            Self::DecreaseIntensity => "Decrease curve intensity",
            Self::ToggleMode => "Toggle curve / proportional",
            Self::CopyCss => "Copy CSS to clipboard",
            Self::ToggleHelp => "Toggle this help",
            Self::Quit => "Quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped for character keys: terminals disagree on whether
    /// `B` or `+` arrive with the SHIFT modifier, and the character already
    /// encodes it.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// Short human-readable form (e.g. "Shift+↑").
    #[must_use]
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Char(c) => c.to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            format!("Shift+{key}")
        } else if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

/// Shortcut registry that maps key events to actions.
pub struct ShortcutRegistry {
    bindings: HashMap<KeyBinding, Action>,
    /// Registration order, for listing in help
    order: Vec<(KeyBinding, Action)>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        };

        registry.register_editor_shortcuts();
        registry
    }

    fn register_editor_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        // === NAVIGATION ===
        self.register(K::Left, M::NONE, Action::SelectPrevious);
        self.register(K::Right, M::NONE, Action::SelectNext);
        self.register(K::Char('h'), M::NONE, Action::SelectPrevious);
        self.register(K::Char('l'), M::NONE, Action::SelectNext);
        self.register(K::Home, M::NONE, Action::SelectFirst);
        self.register(K::End, M::NONE, Action::SelectLast);

        // === OVERRIDES ===
        self.register(K::Up, M::NONE, Action::NudgeUp);
        self.register(K::Down, M::NONE, Action::NudgeDown);
        self.register(K::Char('k'), M::NONE, Action::NudgeUp);
        self.register(K::Char('j'), M::NONE, Action::NudgeDown);
        self.register(K::Up, M::SHIFT, Action::NudgeUpLarge);
        self.register(K::Down, M::SHIFT, Action::NudgeDownLarge);
        self.register(K::Char('x'), M::NONE, Action::ClearOverride);
        self.register(K::Delete, M::NONE, Action::ClearOverride);
        self.register(K::Char('r'), M::NONE, Action::ClearAllOverrides);

        // === PARAMETERS ===
        self.register(K::Char('+'), M::NONE, Action::AddStep);
        self.register(K::Char('='), M::NONE, Action::AddStep);
        self.register(K::Char('-'), M::NONE, Action::RemoveStep);
        self.register(K::Char('B'), M::NONE, Action::IncreaseBase);
        self.register(K::Char('b'), M::NONE, Action::DecreaseBase);
        self.register(K::Char('c'), M::NONE, Action::CycleCurve);
        self.register(K::Char(']'), M::NONE, Action::IncreaseIntensity);
        self.register(K::Char('['), M::NONE, Action::DecreaseIntensity);
        self.register(K::Char('m'), M::NONE, Action::ToggleMode);

        // === OUTPUT ===
        self.register(K::Char('y'), M::NONE, Action::CopyCss);

        // === HELP ===
        self.register(K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(K::Char('q'), M::NONE, Action::Quit);
        self.register(K::Esc, M::NONE, Action::Quit);
        self.register(K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert(binding, action);
        self.order.push((binding, action));
    }

    /// Look up the action for a key event.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }

    /// Check if a key event matches a specific action.
    #[must_use]
    pub fn matches(&self, event: KeyEvent, action: Action) -> bool {
        self.lookup(event) == Some(action)
    }

    /// Every action with the keys bound to it, in registration order.
    #[must_use]
    pub fn help_entries(&self) -> Vec<(String, Action)> {
        let mut entries: Vec<(String, Action)> = Vec::new();
        for (binding, action) in &self.order {
            let key = binding.display();
            match entries.iter_mut().find(|(_, a)| a == action) {
                Some((keys, _)) => {
                    keys.push_str(" / ");
                    keys.push_str(&key);
                }
                None => entries.push((key, *action)),
            }
        }
        entries
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
