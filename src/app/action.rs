use crate::audio::Cue;

/// Side effects the main loop performs on the handler's behalf.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    PlayCue { cue: Cue },
    Quit,
}
