//! Alignment flags collected from directive tokens.

/// Layout axis addressed by a directive or a rule line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left-to-right; `-` directives and `---` rules.
    Horizontal,
    /// Top-to-bottom; `+` directives and `+++` rules.
    Vertical,
}

impl Axis {
    /// Axis selected by a directive sign character.
    #[must_use]
    pub fn from_sign(sign: u8) -> Option<Self> {
        match sign {
            b'-' => Some(Self::Horizontal),
            b'+' => Some(Self::Vertical),
            _ => None,
        }
    }

    /// Literal three-character rule marker for this axis.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Horizontal => "---",
            Self::Vertical => "+++",
        }
    }
}

/// Position along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    Start,
    Center,
    End,
}

impl Placement {
    /// Placement selected by a directive letter (`S`, `C`, `E`, any case).
    #[must_use]
    pub fn from_letter(letter: u8) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            b'S' => Some(Self::Start),
            b'C' => Some(Self::Center),
            b'E' => Some(Self::End),
            _ => None,
        }
    }
}

/// Six independent alignment flags.
///
/// Flags are never cleared once set, so text carrying both `[-S]` and `[-E]`
/// reports both `h_start` and `h_end`. Callers that need a single placement
/// per axis resolve the conflict themselves, e.g. with [`Alignment::horizontal`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Alignment {
    pub h_start: bool,
    pub h_center: bool,
    pub h_end: bool,
    pub v_start: bool,
    pub v_center: bool,
    pub v_end: bool,
}

impl Alignment {
    /// Set the flag for `placement` on `axis`.
    pub fn set(&mut self, axis: Axis, placement: Placement) {
        let flag = match (axis, placement) {
            (Axis::Horizontal, Placement::Start) => &mut self.h_start,
            (Axis::Horizontal, Placement::Center) => &mut self.h_center,
            (Axis::Horizontal, Placement::End) => &mut self.h_end,
            (Axis::Vertical, Placement::Start) => &mut self.v_start,
            (Axis::Vertical, Placement::Center) => &mut self.v_center,
            (Axis::Vertical, Placement::End) => &mut self.v_end,
        };
        *flag = true;
    }

    /// Whether the flag for `placement` on `axis` is set.
    #[must_use]
    pub fn is_set(&self, axis: Axis, placement: Placement) -> bool {
        match (axis, placement) {
            (Axis::Horizontal, Placement::Start) => self.h_start,
            (Axis::Horizontal, Placement::Center) => self.h_center,
            (Axis::Horizontal, Placement::End) => self.h_end,
            (Axis::Vertical, Placement::Start) => self.v_start,
            (Axis::Vertical, Placement::Center) => self.v_center,
            (Axis::Vertical, Placement::End) => self.v_end,
        }
    }

    /// True when no flag is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// First set horizontal placement, checked start, center, end.
    #[must_use]
    pub fn horizontal(&self) -> Option<Placement> {
        self.first_on(Axis::Horizontal)
    }

    /// First set vertical placement, checked start, center, end.
    #[must_use]
    pub fn vertical(&self) -> Option<Placement> {
        self.first_on(Axis::Vertical)
    }

    fn first_on(&self, axis: Axis) -> Option<Placement> {
        [Placement::Start, Placement::Center, Placement::End]
            .into_iter()
            .find(|&placement| self.is_set(axis, placement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Alignment::default().is_empty());
    }

    #[test]
    fn test_set_is_independent_per_flag() {
        let mut align = Alignment::default();
        align.set(Axis::Horizontal, Placement::Start);
        align.set(Axis::Horizontal, Placement::End);

        assert!(align.h_start);
        assert!(align.h_end);
        assert!(!align.h_center);
        assert!(!align.v_start);
        assert_eq!(align.horizontal(), Some(Placement::Start));
        assert_eq!(align.vertical(), None);
    }

    #[test]
    fn test_from_letter_is_case_insensitive() {
        assert_eq!(Placement::from_letter(b'c'), Some(Placement::Center));
        assert_eq!(Placement::from_letter(b'E'), Some(Placement::End));
        assert_eq!(Placement::from_letter(b'x'), None);
    }

    #[test]
    fn test_axis_marker() {
        assert_eq!(Axis::Horizontal.marker(), "---");
        assert_eq!(Axis::Vertical.marker(), "+++");
        assert_eq!(Axis::from_sign(b'*'), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_camel_case() {
        let align = Alignment {
            v_end: true,
            ..Alignment::default()
        };
        let json = serde_json::to_string(&align).unwrap();
        assert!(json.contains(r#""vEnd":true"#));
        assert!(json.contains(r#""hStart":false"#));
    }
}
