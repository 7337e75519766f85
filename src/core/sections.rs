//! Section table shared by the plot layout and the navigation menu
//!
//! A plot's position in the response selects its anchor from this table, and
//! the jump-to-section menu lists the same entries in the same order.

/// A named scroll target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub anchor: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: [Section; 9] = [
    Section { anchor: "makes", label: "Top 10 EV Makes" },
    Section { anchor: "models", label: "Top 10 EV Models" },
    Section { anchor: "type", label: "EV Type Distribution" },
    Section { anchor: "registration", label: "EV Registrations by Year" },
    Section { anchor: "range", label: "Electric Range Distribution" },
    Section { anchor: "county", label: "EV Count by County" },
    Section { anchor: "cities", label: "Top Cities Using EVs" },
    Section { anchor: "utility", label: "EV Count by Utility" },
    Section { anchor: "cafv", label: "CAFV Eligibility" },
];

/// Anchor for the plot at `index`, if the table has one
pub fn anchor_for(index: usize) -> Option<&'static str> {
    SECTIONS.get(index).map(|s| s.anchor)
}

/// Horizontal placement of a plot section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

impl Alignment {
    /// Even indices sit on the left, odd ones on the right
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Alignment::Left
        } else {
            Alignment::Right
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Alignment::Left => "left-align",
            Alignment::Right => "right-align",
        }
    }
}
