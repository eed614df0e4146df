pub mod power;
pub mod scheme;
pub mod standings;
pub mod stats;
pub mod team;
pub mod teams;

use anyhow::Result;

use crate::selection::TeamSession;

/// Resolve the target team for a stats view. An explicit argument wins;
/// otherwise the session's selected team is used. Arguments are upcased so
/// `stats bos` works.
pub fn resolve_team(arg: Option<String>, session: &TeamSession) -> Result<String> {
    match arg {
        Some(abbrev) => Ok(abbrev.to_uppercase()),
        None => Ok(session.store()?.selected_team().abbreviation.to_string()),
    }
}
