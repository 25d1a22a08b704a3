//! Tier classification of cooked percentages

use serde::Serialize;
use std::fmt;

/// Risk band derived from a cooked percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Tier {
    /// Below 20%
    Raw,
    /// 20% to 49%
    #[serde(rename = "Medium Rare")]
    MediumRare,
    /// 50% to 79%
    #[serde(rename = "Well Done")]
    WellDone,
    /// 80% and above
    Burnt,
}

/// Colour accent a renderer uses for a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    /// Raw
    Green,
    /// Medium Rare
    Yellow,
    /// Well Done
    Orange,
    /// Burnt
    Red,
}

impl Accent {
    /// CSS colour value
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Green => "#22c55e",
            Self::Yellow => "#eab308",
            Self::Orange => "#f97316",
            Self::Red => "#dc2626",
        }
    }

    /// ANSI foreground escape sequence
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Orange => "\x1b[38;5;208m",
            Self::Red => "\x1b[31m",
        }
    }
}

impl Tier {
    /// All tiers, coolest first
    pub const ALL: [Self; 4] = [Self::Raw, Self::MediumRare, Self::WellDone, Self::Burnt];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Raw => "Raw",
            Self::MediumRare => "Medium Rare",
            Self::WellDone => "Well Done",
            Self::Burnt => "Burnt",
        }
    }

    /// Fixed descriptive sentence
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Raw => "Still raw. You're safe... for now.",
            Self::MediumRare => "Simmering. You might survive with upskilling.",
            Self::WellDone => "It's looking crispy. Have a backup plan.",
            Self::Burnt => "You are absolutely cooked. Start learning to weld.",
        }
    }

    /// Lowest percentage that falls in this tier
    #[must_use]
    pub const fn lower_bound(self) -> u8 {
        match self {
            Self::Raw => 0,
            Self::MediumRare => 20,
            Self::WellDone => 50,
            Self::Burnt => 80,
        }
    }

    /// Colour accent for renderers
    #[must_use]
    pub const fn accent(self) -> Accent {
        match self {
            Self::Raw => Accent::Green,
            Self::MediumRare => Accent::Yellow,
            Self::WellDone => Accent::Orange,
            Self::Burnt => Accent::Red,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a whole percentage. Lower bounds are inclusive: 20, 50 and 80
/// belong to the higher tier.
#[must_use]
pub const fn classify(percentage: u8) -> Tier {
    match percentage {
        80.. => Tier::Burnt,
        50..=79 => Tier::WellDone,
        20..=49 => Tier::MediumRare,
        _ => Tier::Raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0), Tier::Raw);
        assert_eq!(classify(19), Tier::Raw);
        assert_eq!(classify(20), Tier::MediumRare);
        assert_eq!(classify(49), Tier::MediumRare);
        assert_eq!(classify(50), Tier::WellDone);
        assert_eq!(classify(79), Tier::WellDone);
        assert_eq!(classify(80), Tier::Burnt);
        assert_eq!(classify(100), Tier::Burnt);
        assert_eq!(classify(u8::MAX), Tier::Burnt);
    }

    #[test]
    fn test_lower_bounds_classify_into_own_tier() {
        for tier in Tier::ALL {
            assert_eq!(classify(tier.lower_bound()), tier);
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            Tier::Burnt.description(),
            "You are absolutely cooked. Start learning to weld."
        );
        assert_eq!(Tier::Raw.description(), "Still raw. You're safe... for now.");
    }

    #[test]
    fn test_serializes_display_name() {
        assert_eq!(
            serde_json::to_string(&Tier::MediumRare).unwrap(),
            "\"Medium Rare\""
        );
        assert_eq!(Tier::WellDone.to_string(), "Well Done");
    }

    #[test]
    fn test_accents_are_distinct() {
        let accents: Vec<&str> = Tier::ALL.iter().map(|t| t.accent().css()).collect();
        for (i, a) in accents.iter().enumerate() {
            assert!(!accents[i + 1..].contains(a));
        }
    }
}
