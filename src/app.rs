/// App: everything the UI loop owns.
///
/// Wraps the GameSession with the screen-transient state that does not
/// belong in the state machine: the two-player setup draft, the message
/// bar, and the animation tick that drives cursor blink.

use rand::Rng;

use crate::domain::session::{GameSession, SetupError};

/// Which setup field has keyboard focus.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SetupField {
    Word,
    Category,
}

/// Transient two-player input, held only while the dialog is open.
/// Discarded on cancel and on successful submission.
#[derive(Clone, Debug)]
pub struct SetupDraft {
    pub word: String,
    pub category: String,
    pub focus: SetupField,
}

impl SetupDraft {
    fn new() -> Self {
        SetupDraft {
            word: String::new(),
            category: String::new(),
            focus: SetupField::Word,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            SetupField::Word => &mut self.word,
            SetupField::Category => &mut self.category,
        }
    }
}

pub struct App {
    pub session: GameSession,
    /// Some(..) while the two-player setup dialog is open.
    pub setup: Option<SetupDraft>,
    pub message: String,
    pub message_timer: u32,
    pub anim_tick: u32,
}

impl App {
    pub fn new() -> Self {
        App {
            session: GameSession::new(),
            setup: None,
            message: String::new(),
            message_timer: 0,
            anim_tick: 0,
        }
    }

    pub fn set_message(&mut self, msg: &str, duration: u32) {
        self.message = msg.to_string();
        self.message_timer = duration;
    }

    /// Advance animation state. Called once per tick, in every screen.
    pub fn tick(&mut self) {
        self.anim_tick = self.anim_tick.wrapping_add(1);
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message.clear();
            }
        }
    }

    // ── Round start ──

    pub fn start_single_player<R: Rng>(&mut self, rng: &mut R) {
        self.session.start_single_player(rng);
        self.message.clear();
        self.message_timer = 0;
    }

    // ── Setup dialog ──

    pub fn open_setup(&mut self) {
        self.setup = Some(SetupDraft::new());
    }

    pub fn cancel_setup(&mut self) {
        self.setup = None;
    }

    /// Submit the draft. On success the dialog closes and the round
    /// starts; on InvalidSetup the dialog and the typed text stay, with
    /// the rejection surfaced on the message bar.
    pub fn submit_setup(&mut self) {
        let Some(draft) = &self.setup else { return };
        match self.session.start_two_player(&draft.word, &draft.category) {
            Ok(()) => {
                self.setup = None;
                self.message.clear();
                self.message_timer = 0;
            }
            Err(SetupError::InvalidSetup) => {
                self.set_message("Enter both a word and a category", 40);
            }
        }
    }

    pub fn setup_type(&mut self, c: char) {
        if let Some(draft) = &mut self.setup {
            draft.focused_mut().push(c);
        }
    }

    pub fn setup_backspace(&mut self) {
        if let Some(draft) = &mut self.setup {
            draft.focused_mut().pop();
        }
    }

    pub fn setup_switch_field(&mut self) {
        if let Some(draft) = &mut self.setup {
            draft.focus = match draft.focus {
                SetupField::Word => SetupField::Category,
                SetupField::Category => SetupField::Word,
            };
        }
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
