use crate::config::Config;
use crate::formatting::{format_header, pad};
use crate::teams::teams_by_division;

/// Width of the abbreviation column
const ABBREV_COL_WIDTH: usize = 5;

/// Width of the team name column
const NAME_COL_WIDTH: usize = 24;

pub fn format_team_catalog(config: &Config) -> String {
    let mut output = String::new();

    for (division, teams) in teams_by_division() {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format_header(division, true, &config.display));
        for team in teams {
            output.push_str(&format!(
                "{}{}{}\n",
                pad(team.abbreviation, ABBREV_COL_WIDTH),
                pad(team.name, NAME_COL_WIDTH),
                team.city
            ));
        }
    }

    output
}

pub fn run(config: &Config) {
    print!("{}", format_team_catalog(config));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teams::{ATLANTIC, CENTRAL, METROPOLITAN, PACIFIC};

    #[test]
    fn test_catalog_lists_every_division() {
        let output = format_team_catalog(&Config::default());
        for division in [ATLANTIC, METROPOLITAN, CENTRAL, PACIFIC] {
            assert!(output.contains(division));
        }
    }

    #[test]
    fn test_catalog_lists_all_32_teams() {
        let output = format_team_catalog(&Config::default());
        let team_lines = output
            .lines()
            .filter(|l| {
                !l.is_empty()
                    && l.chars().next().map(|c| c.is_ascii_uppercase()).unwrap_or(false)
                    && l.split_whitespace().next().map(|w| w.len() == 3).unwrap_or(false)
            })
            .count();
        assert_eq!(team_lines, 32);
    }
}
