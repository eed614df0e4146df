use anyhow::Result;
use tracing::warn;

use crate::config::Config;
use crate::formatting::format_header;
use crate::selection::{SelectionStore, TeamSession, PRIMARY_CHANNEL};
use crate::teams;
use crate::theme;

fn show_selection(store: &SelectionStore, config: &Config) -> String {
    let team = store.selected_team();
    let palette = store.palette();

    let mut output = String::new();
    output.push_str(&format_header(team.name, true, &config.display));
    output.push_str(&format!("Abbreviation: {}\n", team.abbreviation));
    output.push_str(&format!("City:         {}\n", team.city));
    output.push_str(&format!(
        "Division:     {} ({})\n",
        team.division, team.conference
    ));
    output.push_str(&format!("Scheme:       {}\n", store.color_scheme().as_str()));
    output.push_str(&format!(
        "Palette:      {} {} {} {}\n",
        palette.primary, palette.secondary, palette.accent, palette.text
    ));
    output
}

/// Show the current selection, or select a new team. Selection accepts any
/// abbreviation; an unknown one resolves to the catalog's first entry at
/// lookup time.
pub fn run(abbrev: Option<String>, session: &mut TeamSession, config: &Config) -> Result<()> {
    match abbrev {
        Some(raw) => {
            let abbrev = raw.to_uppercase();
            if teams::team_by_abbrev(&abbrev).is_none() {
                warn!("selecting {abbrev:?}: not a known team abbreviation");
            }
            let store = session.store_mut()?;
            store.set_team_abbrev(&abbrev);
            let team = store.selected_team();
            println!(
                "{}",
                theme::paint(
                    &format!("Selected {} ({})", team.name, team.abbreviation),
                    PRIMARY_CHANNEL
                )
            );
        }
        None => {
            let store = session.store()?;
            print!("{}", show_selection(store, config));
        }
    }
    Ok(())
}
