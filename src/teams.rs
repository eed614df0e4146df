//! Static catalog of the 32 NHL clubs.
//!
//! Defined once at process start and never mutated. Every team carries two
//! named palettes; the selection store picks one of them and publishes it
//! as the active theme.

use std::collections::BTreeMap;

use phf::phf_map;

/// Abbreviation of the team selected when no valid persisted choice exists.
pub const DEFAULT_TEAM_ABBREV: &str = "CGY";

pub const ATLANTIC: &str = "Atlantic";
pub const METROPOLITAN: &str = "Metropolitan";
pub const CENTRAL: &str = "Central";
pub const PACIFIC: &str = "Pacific";

pub const EASTERN: &str = "Eastern";
pub const WESTERN: &str = "Western";

/// One palette: the four values published to the presentation channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamPalettes {
    pub regular: TeamColors,
    pub alternate: TeamColors,
}

/// Which of a team's two palettes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Regular,
    Alternate,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Regular => "regular",
            ColorScheme::Alternate => "alternate",
        }
    }

    /// Strict parse: anything but the two known scheme names is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "regular" => Some(ColorScheme::Regular),
            "alternate" => Some(ColorScheme::Alternate),
            _ => None,
        }
    }
}

/// Immutable catalog entry for one club.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamConfig {
    pub id: u32,
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub city: &'static str,
    pub division: &'static str,
    pub conference: &'static str,
    pub logo_url: &'static str,
    pub colors: TeamPalettes,
}

impl TeamConfig {
    pub fn palette(&self, scheme: ColorScheme) -> &TeamColors {
        match scheme {
            ColorScheme::Regular => &self.colors.regular,
            ColorScheme::Alternate => &self.colors.alternate,
        }
    }
}

const fn palette(
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
    text: &'static str,
) -> TeamColors {
    TeamColors {
        primary,
        secondary,
        accent,
        text,
    }
}

pub static NHL_TEAMS: [TeamConfig; 32] = [
    // Atlantic
    TeamConfig {
        id: 1,
        name: "Boston Bruins",
        abbreviation: "BOS",
        city: "Boston",
        division: ATLANTIC,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/BOS_light.svg",
        colors: TeamPalettes {
            regular: palette("#000000", "#FFB81C", "#FFFFFF", "#FFFFFF"),
            alternate: palette("#FFB81C", "#000000", "#FFD100", "#000000"),
        },
    },
    TeamConfig {
        id: 2,
        name: "Buffalo Sabres",
        abbreviation: "BUF",
        city: "Buffalo",
        division: ATLANTIC,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/BUF_light.svg",
        colors: TeamPalettes {
            regular: palette("#003087", "#FFB81C", "#FFFFFF", "#FFFFFF"),
            alternate: palette("#C8102E", "#000000", "#8D9093", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 3,
        name: "Detroit Red Wings",
        abbreviation: "DET",
        city: "Detroit",
        division: ATLANTIC,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/DET_light.svg",
        colors: TeamPalettes {
            regular: palette("#C8102E", "#FFFFFF", "#000000", "#FFFFFF"),
            alternate: palette("#FFFFFF", "#C8102E", "#000000", "#C8102E"),
        },
    },
    TeamConfig {
        id: 4,
        name: "Florida Panthers",
        abbreviation: "FLA",
        city: "Sunrise",
        division: ATLANTIC,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/FLA_light.svg",
        colors: TeamPalettes {
            regular: palette("#C8102E", "#041E42", "#B9975B", "#FFFFFF"),
            alternate: palette("#041E42", "#C8102E", "#B9975B", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 5,
        name: "Montreal Canadiens",
        abbreviation: "MTL",
        city: "Montreal",
        division: ATLANTIC,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/MTL_light.svg",
        colors: TeamPalettes {
            regular: palette("#A6192E", "#001E62", "#FFFFFF", "#FFFFFF"),
            alternate: palette("#001E62", "#A6192E", "#FFFFFF", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 6,
        name: "Ottawa Senators",
        abbreviation: "OTT",
        city: "Ottawa",
        division: ATLANTIC,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/OTT_light.svg",
        colors: TeamPalettes {
            regular: palette("#C8102E", "#000000", "#B9975B", "#FFFFFF"),
            alternate: palette("#000000", "#C8102E", "#B9975B", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 7,
        name: "Tampa Bay Lightning",
        abbreviation: "TBL",
        city: "Tampa Bay",
        division: ATLANTIC,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/TBL_light.svg",
        colors: TeamPalettes {
            regular: palette("#00205B", "#FFFFFF", "#A2AAAD", "#FFFFFF"),
            alternate: palette("#000000", "#00205B", "#A2AAAD", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 8,
        name: "Toronto Maple Leafs",
        abbreviation: "TOR",
        city: "Toronto",
        division: ATLANTIC,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/TOR_light.svg",
        colors: TeamPalettes {
            regular: palette("#00205B", "#FFFFFF", "#003087", "#FFFFFF"),
            alternate: palette("#046A38", "#00205B", "#FFFFFF", "#FFFFFF"),
        },
    },
    // Metropolitan
    TeamConfig {
        id: 9,
        name: "Carolina Hurricanes",
        abbreviation: "CAR",
        city: "Raleigh",
        division: METROPOLITAN,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/CAR_light.svg",
        colors: TeamPalettes {
            regular: palette("#C8102E", "#000000", "#A2AAAD", "#FFFFFF"),
            alternate: palette("#333F48", "#C8102E", "#76232F", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 10,
        name: "Columbus Blue Jackets",
        abbreviation: "CBJ",
        city: "Columbus",
        division: METROPOLITAN,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/CBJ_light.svg",
        colors: TeamPalettes {
            regular: palette("#041E42", "#C8102E", "#A2AAAD", "#FFFFFF"),
            alternate: palette("#DDCBA4", "#041E42", "#C8102E", "#041E42"),
        },
    },
    TeamConfig {
        id: 11,
        name: "New Jersey Devils",
        abbreviation: "NJD",
        city: "Newark",
        division: METROPOLITAN,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/NJD_light.svg",
        colors: TeamPalettes {
            regular: palette("#CE1126", "#000000", "#FFFFFF", "#FFFFFF"),
            alternate: palette("#000000", "#CE1126", "#FFFFFF", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 12,
        name: "New York Islanders",
        abbreviation: "NYI",
        city: "Elmont",
        division: METROPOLITAN,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/NYI_light.svg",
        colors: TeamPalettes {
            regular: palette("#003087", "#F26822", "#FFFFFF", "#FFFFFF"),
            alternate: palette("#F26822", "#003087", "#FFFFFF", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 13,
        name: "New York Rangers",
        abbreviation: "NYR",
        city: "New York",
        division: METROPOLITAN,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/NYR_light.svg",
        colors: TeamPalettes {
            regular: palette("#0032A0", "#C8102E", "#FFFFFF", "#FFFFFF"),
            alternate: palette("#000043", "#0032A0", "#C8102E", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 14,
        name: "Philadelphia Flyers",
        abbreviation: "PHI",
        city: "Philadelphia",
        division: METROPOLITAN,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/PHI_light.svg",
        colors: TeamPalettes {
            regular: palette("#F74902", "#000000", "#FFFFFF", "#FFFFFF"),
            alternate: palette("#000000", "#F74902", "#FFFFFF", "#F74902"),
        },
    },
    TeamConfig {
        id: 15,
        name: "Pittsburgh Penguins",
        abbreviation: "PIT",
        city: "Pittsburgh",
        division: METROPOLITAN,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/PIT_light.svg",
        colors: TeamPalettes {
            regular: palette("#000000", "#FFB81C", "#FFFFFF", "#FFB81C"),
            alternate: palette("#FFB81C", "#000000", "#FFFFFF", "#000000"),
        },
    },
    TeamConfig {
        id: 16,
        name: "Washington Capitals",
        abbreviation: "WSH",
        city: "Washington",
        division: METROPOLITAN,
        conference: EASTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/WSH_light.svg",
        colors: TeamPalettes {
            regular: palette("#C8102E", "#041E42", "#FFFFFF", "#FFFFFF"),
            alternate: palette("#041E42", "#C8102E", "#FFFFFF", "#FFFFFF"),
        },
    },
    // Central
    TeamConfig {
        id: 17,
        name: "Utah Hockey Club",
        abbreviation: "UTA",
        city: "Salt Lake City",
        division: CENTRAL,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/UTA_light.svg",
        colors: TeamPalettes {
            regular: palette("#010101", "#6CACE4", "#FFFFFF", "#FFFFFF"),
            alternate: palette("#6CACE4", "#010101", "#FFFFFF", "#000000"),
        },
    },
    TeamConfig {
        id: 18,
        name: "Chicago Blackhawks",
        abbreviation: "CHI",
        city: "Chicago",
        division: CENTRAL,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/CHI_light.svg",
        colors: TeamPalettes {
            regular: palette("#C8102E", "#000000", "#FFD100", "#FFFFFF"),
            alternate: palette("#000000", "#C8102E", "#FFFFFF", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 19,
        name: "Colorado Avalanche",
        abbreviation: "COL",
        city: "Denver",
        division: CENTRAL,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/COL_light.svg",
        colors: TeamPalettes {
            regular: palette("#6F263D", "#236192", "#A2AAAD", "#FFFFFF"),
            alternate: palette("#236192", "#6F263D", "#000000", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 20,
        name: "Dallas Stars",
        abbreviation: "DAL",
        city: "Dallas",
        division: CENTRAL,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/DAL_light.svg",
        colors: TeamPalettes {
            regular: palette("#00843D", "#000000", "#A2AAAD", "#FFFFFF"),
            alternate: palette("#44D62C", "#000000", "#FFFFFF", "#000000"),
        },
    },
    TeamConfig {
        id: 21,
        name: "Minnesota Wild",
        abbreviation: "MIN",
        city: "Saint Paul",
        division: CENTRAL,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/MIN_light.svg",
        colors: TeamPalettes {
            regular: palette("#154734", "#A6192E", "#EAAA00", "#FFFFFF"),
            alternate: palette("#DDCBA4", "#154734", "#A6192E", "#154734"),
        },
    },
    TeamConfig {
        id: 22,
        name: "Nashville Predators",
        abbreviation: "NSH",
        city: "Nashville",
        division: CENTRAL,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/NSH_light.svg",
        colors: TeamPalettes {
            regular: palette("#FFB81C", "#041E42", "#FFFFFF", "#041E42"),
            alternate: palette("#041E42", "#FFB81C", "#FFFFFF", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 23,
        name: "St. Louis Blues",
        abbreviation: "STL",
        city: "St. Louis",
        division: CENTRAL,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/STL_light.svg",
        colors: TeamPalettes {
            regular: palette("#002F87", "#FFB81C", "#FFFFFF", "#FFFFFF"),
            alternate: palette("#DDCBA4", "#002F87", "#FFB81C", "#002F87"),
        },
    },
    TeamConfig {
        id: 24,
        name: "Winnipeg Jets",
        abbreviation: "WPG",
        city: "Winnipeg",
        division: CENTRAL,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/WPG_light.svg",
        colors: TeamPalettes {
            regular: palette("#004C97", "#A6192E", "#A2AAAD", "#FFFFFF"),
            alternate: palette("#56B4F8", "#004C97", "#FFFFFF", "#004C97"),
        },
    },
    // Pacific
    TeamConfig {
        id: 25,
        name: "Anaheim Ducks",
        abbreviation: "ANA",
        city: "Anaheim",
        division: PACIFIC,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/ANA_light.svg",
        colors: TeamPalettes {
            regular: palette("#000000", "#CF4520", "#B9975B", "#FFFFFF"),
            alternate: palette("#00685E", "#CF4520", "#FFB81C", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 26,
        name: "Calgary Flames",
        abbreviation: "CGY",
        city: "Calgary",
        division: PACIFIC,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/CGY_light.svg",
        colors: TeamPalettes {
            regular: palette("#CE1126", "#F1BE48", "#000000", "#FFFFFF"),
            // Blasty alternate, the retro horse-head jersey
            alternate: palette("#000000", "#CE1126", "#F1BE48", "#CE1126"),
        },
    },
    TeamConfig {
        id: 27,
        name: "Edmonton Oilers",
        abbreviation: "EDM",
        city: "Edmonton",
        division: PACIFIC,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/EDM_light.svg",
        colors: TeamPalettes {
            regular: palette("#00205B", "#FF4C00", "#FFFFFF", "#FFFFFF"),
            alternate: palette("#041E42", "#FF4C00", "#FFFFFF", "#FF4C00"),
        },
    },
    TeamConfig {
        id: 28,
        name: "Los Angeles Kings",
        abbreviation: "LAK",
        city: "Los Angeles",
        division: PACIFIC,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/LAK_light.svg",
        colors: TeamPalettes {
            regular: palette("#000000", "#A2AAAD", "#FFFFFF", "#FFFFFF"),
            alternate: palette("#A2AAAD", "#000000", "#FFFFFF", "#000000"),
        },
    },
    TeamConfig {
        id: 29,
        name: "San Jose Sharks",
        abbreviation: "SJS",
        city: "San Jose",
        division: PACIFIC,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/SJS_light.svg",
        colors: TeamPalettes {
            regular: palette("#006271", "#000000", "#FFFFFF", "#FFFFFF"),
            alternate: palette("#000000", "#006271", "#E57200", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 30,
        name: "Seattle Kraken",
        abbreviation: "SEA",
        city: "Seattle",
        division: PACIFIC,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/SEA_light.svg",
        colors: TeamPalettes {
            regular: palette("#041E42", "#9CDBD9", "#6BA4B8", "#FFFFFF"),
            alternate: palette("#C8102E", "#041E42", "#9CDBD9", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 31,
        name: "Vancouver Canucks",
        abbreviation: "VAN",
        city: "Vancouver",
        division: PACIFIC,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/VAN_light.svg",
        colors: TeamPalettes {
            regular: palette("#00205B", "#00843D", "#FFFFFF", "#FFFFFF"),
            alternate: palette("#C8102E", "#FFD100", "#000000", "#FFFFFF"),
        },
    },
    TeamConfig {
        id: 32,
        name: "Vegas Golden Knights",
        abbreviation: "VGK",
        city: "Las Vegas",
        division: PACIFIC,
        conference: WESTERN,
        logo_url: "https://assets.nhle.com/logos/nhl/svg/VGK_light.svg",
        colors: TeamPalettes {
            regular: palette("#333F48", "#B9975B", "#C8102E", "#FFFFFF"),
            alternate: palette("#B9975B", "#333F48", "#C8102E", "#333F48"),
        },
    },
];

/// Abbreviation to index into [`NHL_TEAMS`].
static TEAM_INDEX: phf::Map<&'static str, usize> = phf_map! {
    "BOS" => 0,
    "BUF" => 1,
    "DET" => 2,
    "FLA" => 3,
    "MTL" => 4,
    "OTT" => 5,
    "TBL" => 6,
    "TOR" => 7,
    "CAR" => 8,
    "CBJ" => 9,
    "NJD" => 10,
    "NYI" => 11,
    "NYR" => 12,
    "PHI" => 13,
    "PIT" => 14,
    "WSH" => 15,
    "UTA" => 16,
    "CHI" => 17,
    "COL" => 18,
    "DAL" => 19,
    "MIN" => 20,
    "NSH" => 21,
    "STL" => 22,
    "WPG" => 23,
    "ANA" => 24,
    "CGY" => 25,
    "EDM" => 26,
    "LAK" => 27,
    "SJS" => 28,
    "SEA" => 29,
    "VAN" => 30,
    "VGK" => 31,
};

/// Lookup a team by its 3-letter abbreviation.
pub fn team_by_abbrev(abbrev: &str) -> Option<&'static TeamConfig> {
    TEAM_INDEX.get(abbrev).map(|&i| &NHL_TEAMS[i])
}

/// All teams grouped by division, divisions in alphabetical order.
pub fn teams_by_division() -> BTreeMap<&'static str, Vec<&'static TeamConfig>> {
    let mut divisions: BTreeMap<&'static str, Vec<&'static TeamConfig>> = BTreeMap::new();
    for team in &NHL_TEAMS {
        divisions.entry(team.division).or_default().push(team);
    }
    divisions
}
