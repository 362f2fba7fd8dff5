// SPDX-License-Identifier: MIT OR Apache-2.0

/// Verbosity tier of a log event.
///
/// Tiers gate emission: an event is emitted iff its tier is less than or
/// equal to the tier configured on the logger's [`Config`](crate::Config).
/// `Regular` is the strictest setting (only `Regular` events pass), `Loop`
/// the most permissive (everything passes, including per-iteration logging
/// from hot loops, which is where the name comes from).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Ordinary events, always of interest.
    Regular,
    /// Chatty events, interesting while debugging a feature.
    Verbose,
    /// Events emitted from inside loops; extremely chatty.
    Loop,
}

impl Tier {
    pub(crate) fn from_u8(value: u8) -> Tier {
        match value {
            0 => Tier::Regular,
            1 => Tier::Verbose,
            _ => Tier::Loop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tier;

    #[test]
    fn total_order() {
        assert!(Tier::Regular < Tier::Verbose);
        assert!(Tier::Verbose < Tier::Loop);
    }

    #[test]
    fn u8_round_trip() {
        for tier in [Tier::Regular, Tier::Verbose, Tier::Loop] {
            assert_eq!(Tier::from_u8(tier as u8), tier);
        }
    }

    #[test]
    fn gating_table() {
        // emit iff event tier <= current tier
        let all = [Tier::Regular, Tier::Verbose, Tier::Loop];
        for current in all {
            for event in all {
                let expect = event as u8 <= current as u8;
                assert_eq!(event <= current, expect);
            }
        }
    }
}
