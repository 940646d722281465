use std::fmt::{ Display, Formatter };
use std::str::FromStr;

/// In-page scroll targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Start,
    Features,
    HowItWorks,
}

impl Anchor {
    pub const ALL: [Anchor; 3] = [Anchor::Start, Anchor::Features, Anchor::HowItWorks];

    pub const fn id(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Features => "features",
            Anchor::HowItWorks => "how-it-works",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl FromStr for Anchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim_start_matches('#');
        Anchor::ALL
            .into_iter()
            .find(|anchor| anchor.id() == id)
            .ok_or_else(|| format!("unknown anchor: {}", s))
    }
}

impl Display for Anchor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
