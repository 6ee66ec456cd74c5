/// Device-orientation availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPermission {
    /// Fine pointer; orientation is not used.
    #[default]
    NotApplicable,
    /// The platform gates orientation behind an explicit user prompt.
    Prompt,
    Granted,
    Denied,
}

impl MotionPermission {
    /// Initial state for a device.
    pub fn detect(is_coarse: bool, needs_prompt: bool) -> Self {
        match (is_coarse, needs_prompt) {
            (false, _) => Self::NotApplicable,
            (true, true) => Self::Prompt,
            (true, false) => Self::Granted,
        }
    }

    /// Applies the answer of a permission prompt.
    pub fn answer(self, granted: bool) -> Self {
        match self {
            Self::Prompt | Self::Denied if granted => Self::Granted,
            Self::Prompt => Self::Denied,
            other => other,
        }
    }

    pub fn allowed(&self) -> bool {
        *self == Self::Granted
    }

    /// Whether to offer the manual "Enable Motion" action.
    pub fn offer_prompt(&self) -> bool {
        matches!(self, Self::Prompt | Self::Denied)
    }
}
