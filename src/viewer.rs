//! Modal carousel over a snapshot of an ordered locator sequence.

/// Keys the viewer responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// One state-transition request. Keyboard and pointer adapters both reduce
/// to these, so the two input paths cannot diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxCommand {
    Previous,
    Next,
    Jump(usize),
    Close,
}

impl LightboxCommand {
    #[must_use]
    pub fn from_key(key: KeyInput) -> Self {
        match key {
            KeyInput::ArrowLeft => Self::Previous,
            KeyInput::ArrowRight => Self::Next,
            KeyInput::Escape => Self::Close,
        }
    }

    /// Pointer input on the thumbnail strip.
    #[must_use]
    pub fn from_thumbnail(index: usize) -> Self {
        Self::Jump(index)
    }
}

/// What [`Lightbox::apply`] did with a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxOutcome {
    Moved(usize),
    /// Out-of-range jump; rejected rather than clamped, so a bad index is
    /// never mistaken for a successful one.
    Rejected,
    /// The owner should drop the lightbox.
    CloseRequested,
}

/// Read-only carousel state. The sequence is snapshotted on open and fixed
/// for the lightbox's lifetime; navigating can never touch the collection
/// or record it was opened from.
#[derive(Debug, Clone)]
pub struct Lightbox {
    sequence: Vec<String>,
    current: usize,
}

impl Lightbox {
    /// Snapshots `sequence` and opens at `start`. `None` for an empty
    /// sequence or an out-of-range start index.
    #[must_use]
    pub fn open(sequence: &[String], start: usize) -> Option<Self> {
        if start >= sequence.len() {
            return None;
        }
        Some(Self {
            sequence: sequence.to_vec(),
            current: start,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.sequence[self.current]
    }

    /// Whether previous/next controls and the counter should render.
    /// Single-image sequences keep open/close but hide navigation.
    #[must_use]
    pub fn shows_navigation(&self) -> bool {
        self.sequence.len() > 1
    }

    /// Advances one item, wrapping past the end back to the first.
    pub fn next(&mut self) -> usize {
        self.current = if self.current == self.sequence.len() - 1 {
            0
        } else {
            self.current + 1
        };
        self.current
    }

    /// Goes back one item, wrapping before the start to the last.
    pub fn previous(&mut self) -> usize {
        self.current = if self.current == 0 {
            self.sequence.len() - 1
        } else {
            self.current - 1
        };
        self.current
    }

    /// Jumps straight to `index`. Out-of-range targets are rejected as a
    /// no-op; returns whether the jump happened.
    pub fn jump(&mut self, index: usize) -> bool {
        if index >= self.sequence.len() {
            return false;
        }
        self.current = index;
        true
    }

    /// The single transition function both input paths go through.
    pub fn apply(&mut self, command: LightboxCommand) -> LightboxOutcome {
        match command {
            LightboxCommand::Previous => LightboxOutcome::Moved(self.previous()),
            LightboxCommand::Next => LightboxOutcome::Moved(self.next()),
            LightboxCommand::Jump(index) => {
                if self.jump(index) {
                    LightboxOutcome::Moved(index)
                } else {
                    LightboxOutcome::Rejected
                }
            }
            LightboxCommand::Close => LightboxOutcome::CloseRequested,
        }
    }
}
