use strum_macros::{Display, EnumIter};

/// Score modifier codes as the remote leaderboard service names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Modifier {
    /// Disappearing arrows
    Da,
    /// Faster song
    Fs,
    /// Super fast song
    Sf,
    /// Slower song
    Ss,
    /// Ghost notes
    Gn,
    /// No arrows
    Na,
    /// No bombs
    Nb,
    /// No fail
    Nf,
    /// No obstacles (walls)
    No,
    /// Pro mode
    Pm,
    /// Smaller notes
    Sc,
    /// Strict angles
    Sa,
    /// Old dots
    Op
}

/// The three song-speed modifiers are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedModifier {
    SuperFast,
    Faster,
    Slower
}

impl SpeedModifier {
    pub fn modifier(self) -> Modifier {
        match self {
            SpeedModifier::SuperFast => Modifier::Sf,
            SpeedModifier::Faster => Modifier::Fs,
            SpeedModifier::Slower => Modifier::Ss
        }
    }
}

/// The modifier combination a potential query is evaluated under: at most one
/// speed modifier plus any subset of the note/obstacle modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierSelection {
    pub speed: Option<SpeedModifier>,
    pub ghost_notes: bool,
    pub no_arrows: bool,
    pub no_bombs: bool,
    pub no_obstacles: bool
}

impl ModifierSelection {
    /// Builds a selection from individual command flags. When several speed
    /// flags are set, SF wins over FS wins over SS.
    pub fn from_flags(sf: bool, fs: bool, ss: bool, gn: bool, na: bool, nb: bool, no: bool) -> Self {
        let speed = if sf {
            Some(SpeedModifier::SuperFast)
        } else if fs {
            Some(SpeedModifier::Faster)
        } else if ss {
            Some(SpeedModifier::Slower)
        } else {
            None
        };

        ModifierSelection {
            speed,
            ghost_notes: gn,
            no_arrows: na,
            no_bombs: nb,
            no_obstacles: no
        }
    }

    /// Active modifier codes in display order: speed first, then GN/NA/NB/NO.
    pub fn active(&self) -> Vec<Modifier> {
        let mut mods = Vec::new();

        if let Some(speed) = self.speed {
            mods.push(speed.modifier());
        }

        if self.ghost_notes {
            mods.push(Modifier::Gn);
        }
        if self.no_arrows {
            mods.push(Modifier::Na);
        }
        if self.no_bombs {
            mods.push(Modifier::Nb);
        }
        if self.no_obstacles {
            mods.push(Modifier::No);
        }

        mods
    }

    pub fn is_empty(&self) -> bool {
        self.speed.is_none() && !self.ghost_notes && !self.no_arrows && !self.no_bombs && !self.no_obstacles
    }
}

#[cfg(test)]
mod tests {
    use crate::model::structures::modifier::{Modifier, ModifierSelection, SpeedModifier};

    #[test]
    fn test_speed_precedence() {
        let selection = ModifierSelection::from_flags(true, true, true, false, false, false, false);
        assert_eq!(selection.speed, Some(SpeedModifier::SuperFast));

        let selection = ModifierSelection::from_flags(false, true, true, false, false, false, false);
        assert_eq!(selection.speed, Some(SpeedModifier::Faster));

        let selection = ModifierSelection::from_flags(false, false, true, false, false, false, false);
        assert_eq!(selection.speed, Some(SpeedModifier::Slower));
    }

    #[test]
    fn test_active_order() {
        let selection = ModifierSelection::from_flags(false, true, false, true, false, true, false);
        assert_eq!(selection.active(), vec![Modifier::Fs, Modifier::Gn, Modifier::Nb]);
    }

    #[test]
    fn test_display_uppercase() {
        assert_eq!(Modifier::Sf.to_string(), "SF");
        assert_eq!(Modifier::Gn.to_string(), "GN");
    }

    #[test]
    fn test_empty() {
        assert!(ModifierSelection::default().is_empty());
        assert!(!ModifierSelection::from_flags(false, false, false, false, true, false, false).is_empty());
    }
}
