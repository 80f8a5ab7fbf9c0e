/// Global session state

use std::sync::{LazyLock, Mutex, PoisonError};
use crate::session::Session;

/// The one live game (thread-safe)
///
/// **Learning Point**: The host issues one action at a time, so the lock is
/// never contended; it only satisfies `static` requirements.
pub static SESSION: LazyLock<Mutex<Session>> = LazyLock::new(|| Mutex::new(Session::default()));

/// Run `f` with exclusive access to the live session
pub fn with_session<T>(f: impl FnOnce(&mut Session) -> T) -> T {
    let mut session = SESSION.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut session)
}
