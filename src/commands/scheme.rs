use anyhow::Result;

use crate::selection::TeamSession;
use crate::teams::ColorScheme;

/// Switch the active color scheme and persist the choice.
pub fn run(scheme: ColorScheme, session: &mut TeamSession) -> Result<()> {
    let store = session.store_mut()?;
    store.set_color_scheme(scheme);
    let team = store.selected_team();
    println!(
        "Using the {} palette for {}",
        scheme.as_str(),
        team.name
    );
    Ok(())
}
