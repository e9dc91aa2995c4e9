//! Price tiers
//!
//! The store prices products on a fixed ladder of tiers. Each tier is
//! identified in the pricing matrix by the exact label found in column 0 of
//! its row (`Free`, `Tier 1`, ... `Tier 87`).

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

macro_rules! price_tiers {
    ($($variant:ident => $label:literal),+ $(,)?) => {
        /// A discrete price tier
        ///
        /// Tiers are ordered from `Free` upwards, so a `BTreeMap<Tier, _>`
        /// iterates from the cheapest tier to the most expensive one.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub enum Tier {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Tier {
            /// Every tier, cheapest first
            pub const ALL: &'static [Tier] = &[$(Tier::$variant),+];

            /// Label used for this tier in the pricing matrix
            pub fn label(self) -> &'static str {
                match self {
                    $(Tier::$variant => $label,)+
                }
            }

            /// Parse a pricing matrix label
            ///
            /// Surrounding whitespace is ignored; otherwise the label must
            /// match exactly, including case and the space before the number.
            pub fn from_label(label: &str) -> Option<Tier> {
                match label.trim() {
                    $($label => Some(Tier::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

price_tiers! {
    Free => "Free",
    Tier1 => "Tier 1",
    Tier2 => "Tier 2",
    Tier3 => "Tier 3",
    Tier4 => "Tier 4",
    Tier5 => "Tier 5",
    Tier6 => "Tier 6",
    Tier7 => "Tier 7",
    Tier8 => "Tier 8",
    Tier9 => "Tier 9",
    Tier10 => "Tier 10",
    Tier11 => "Tier 11",
    Tier12 => "Tier 12",
    Tier13 => "Tier 13",
    Tier14 => "Tier 14",
    Tier15 => "Tier 15",
    Tier16 => "Tier 16",
    Tier17 => "Tier 17",
    Tier18 => "Tier 18",
    Tier19 => "Tier 19",
    Tier20 => "Tier 20",
    Tier21 => "Tier 21",
    Tier22 => "Tier 22",
    Tier23 => "Tier 23",
    Tier24 => "Tier 24",
    Tier25 => "Tier 25",
    Tier26 => "Tier 26",
    Tier27 => "Tier 27",
    Tier28 => "Tier 28",
    Tier29 => "Tier 29",
    Tier30 => "Tier 30",
    Tier31 => "Tier 31",
    Tier32 => "Tier 32",
    Tier33 => "Tier 33",
    Tier34 => "Tier 34",
    Tier35 => "Tier 35",
    Tier36 => "Tier 36",
    Tier37 => "Tier 37",
    Tier38 => "Tier 38",
    Tier39 => "Tier 39",
    Tier40 => "Tier 40",
    Tier41 => "Tier 41",
    Tier42 => "Tier 42",
    Tier43 => "Tier 43",
    Tier44 => "Tier 44",
    Tier45 => "Tier 45",
    Tier46 => "Tier 46",
    Tier47 => "Tier 47",
    Tier48 => "Tier 48",
    Tier49 => "Tier 49",
    Tier50 => "Tier 50",
    Tier51 => "Tier 51",
    Tier52 => "Tier 52",
    Tier53 => "Tier 53",
    Tier54 => "Tier 54",
    Tier55 => "Tier 55",
    Tier56 => "Tier 56",
    Tier57 => "Tier 57",
    Tier58 => "Tier 58",
    Tier59 => "Tier 59",
    Tier60 => "Tier 60",
    Tier61 => "Tier 61",
    Tier62 => "Tier 62",
    Tier63 => "Tier 63",
    Tier64 => "Tier 64",
    Tier65 => "Tier 65",
    Tier66 => "Tier 66",
    Tier67 => "Tier 67",
    Tier68 => "Tier 68",
    Tier69 => "Tier 69",
    Tier70 => "Tier 70",
    Tier71 => "Tier 71",
    Tier72 => "Tier 72",
    Tier73 => "Tier 73",
    Tier74 => "Tier 74",
    Tier75 => "Tier 75",
    Tier76 => "Tier 76",
    Tier77 => "Tier 77",
    Tier78 => "Tier 78",
    Tier79 => "Tier 79",
    Tier80 => "Tier 80",
    Tier81 => "Tier 81",
    Tier82 => "Tier 82",
    Tier83 => "Tier 83",
    Tier84 => "Tier 84",
    Tier85 => "Tier 85",
    Tier86 => "Tier 86",
    Tier87 => "Tier 87",
}

/// Error returned when a string is not a tier label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tier label '{0}'")]
pub struct UnknownTierLabel(pub String);

impl FromStr for Tier {
    type Err = UnknownTierLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::from_label(s).ok_or_else(|| UnknownTierLabel(s.to_string()))
    }
}

impl TryFrom<&str> for Tier {
    type Error = UnknownTierLabel;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Free", Tier::Free)]
    #[case("Tier 1", Tier::Tier1)]
    #[case("Tier 10", Tier::Tier10)]
    #[case("Tier 87", Tier::Tier87)]
    #[case("  Tier 2  ", Tier::Tier2)] // whitespace trimming
    fn test_parse_known_labels(#[case] label: &str, #[case] expected: Tier) {
        assert_eq!(label.parse::<Tier>(), Ok(expected));
    }

    #[rstest]
    #[case::compact("Tier1")]
    #[case::lowercase("free")]
    #[case::out_of_range("Tier 88")]
    #[case::zero("Tier 0")]
    #[case::empty("")]
    fn test_parse_unknown_labels(#[case] label: &str) {
        assert_eq!(
            label.parse::<Tier>(),
            Err(UnknownTierLabel(label.to_string()))
        );
    }

    #[test]
    fn test_all_tiers_ordered_and_labelled() {
        assert_eq!(Tier::ALL.len(), 88);
        assert_eq!(Tier::ALL.first(), Some(&Tier::Free));
        assert_eq!(Tier::ALL.last(), Some(&Tier::Tier87));
        assert!(Tier::ALL.windows(2).all(|pair| pair[0] < pair[1]));

        for tier in Tier::ALL {
            assert_eq!(Tier::from_label(tier.label()), Some(*tier));
        }
    }

    #[rstest]
    #[case("Tier 3", Some(Tier::Tier3))]
    #[case("  Tier 3\t", Some(Tier::Tier3))]
    #[case(" Free ", Some(Tier::Free))]
    #[case("Tier  3", None)]
    fn test_from_label_ignores_surrounding_whitespace(
        #[case] label: &str,
        #[case] expected: Option<Tier>,
    ) {
        assert_eq!(Tier::from_label(label), expected);
    }

    #[test]
    fn test_unknown_label_error_message() {
        let err = "Tier 99".parse::<Tier>().unwrap_err();
        assert_eq!(err.to_string(), "unknown tier label 'Tier 99'");

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert_eq!(boxed.to_string(), "unknown tier label 'Tier 99'");
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Tier::Tier42.to_string(), "Tier 42");
        assert_eq!(Tier::Free.to_string(), "Free");
    }
}
