use crate::core::{Session, SessionInput};

pub struct GameRenderState<'a> {
    pub session: &'a Session,
    pub last_input: Option<SessionInput>,
    pub last_move_accepted: bool,
}

impl<'a> GameRenderState<'a> {
    pub fn new(session: &'a Session) -> Self {
        GameRenderState {
            session,
            last_input: None,
            last_move_accepted: true,
        }
    }
}
