//! Formation catalog
//!
//! A fixed registry of named formations for the eight-a-side board.
//! Each template is an ordered list of exactly [`TOKEN_COUNT`] slot
//! coordinates, expressed as percentages of the field container:
//!
//! - X: 0 = left touchline, 100 = right touchline
//! - Y: 0 = opponent goal line, 100 = own goal line (the keeper slot
//!   sits near the bottom of the rendered field)
//!
//! Templates are interchangeable remap targets, not token creators:
//! switching formation moves the existing tokens, it never adds or
//! removes one. Adding a formation means adding a key with exactly
//! eight entries.

use crate::error::{BoardError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of field tokens, fixed for every formation.
///
/// The club plays eight-a-side; the board deliberately does not support
/// per-formation squad sizes.
pub const TOKEN_COUNT: usize = 8;

/// Slot coordinate in field percentages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SlotCoord {
    pub x: f32,
    pub y: f32,
}

impl SlotCoord {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Closed set of formation keys driven by the same catalog that renders
/// the host's selector buttons.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FormationKey {
    #[default]
    #[serde(rename = "3-3-1")]
    F331,
    #[serde(rename = "2-3-2")]
    F232,
    #[serde(rename = "2-4-1")]
    F241,
    #[serde(rename = "3-2-2")]
    F322,
}

impl FormationKey {
    pub const ALL: [FormationKey; 4] =
        [FormationKey::F331, FormationKey::F232, FormationKey::F241, FormationKey::F322];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormationKey::F331 => "3-3-1",
            FormationKey::F232 => "2-3-2",
            FormationKey::F241 => "2-4-1",
            FormationKey::F322 => "3-2-2",
        }
    }
}

impl FromStr for FormationKey {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "3-3-1" => Ok(FormationKey::F331),
            "2-3-2" => Ok(FormationKey::F232),
            "2-4-1" => Ok(FormationKey::F241),
            "3-2-2" => Ok(FormationKey::F322),
            other => Err(BoardError::UnknownFormation(other.to_string())),
        }
    }
}

impl std::fmt::Display for FormationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named formation: key plus its ordered slot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct FormationTemplate {
    pub key: FormationKey,
    pub slots: [SlotCoord; TOKEN_COUNT],
}

impl FormationTemplate {
    /// Template for the given key. The key set is closed, so this only
    /// fails for keys parsed from untrusted strings that slipped past
    /// `FormationKey::from_str`; it exists to keep the lookup total.
    pub fn for_key(key: FormationKey) -> &'static FormationTemplate {
        let idx = FormationKey::ALL
            .iter()
            .position(|k| *k == key)
            .expect("FormationKey::ALL covers every variant");
        &CATALOG[idx]
    }

    /// Every shipped formation, in selector order.
    pub fn all() -> &'static [FormationTemplate] {
        &*CATALOG
    }

    /// Coordinates of the slot at `index`, if the template has one.
    pub fn slot(&self, index: usize) -> Option<SlotCoord> {
        self.slots.get(index).copied()
    }
}

static CATALOG: Lazy<[FormationTemplate; 4]> = Lazy::new(|| {
    [
        // 3-3-1: keeper, back three, midfield three, lone striker
        FormationTemplate {
            key: FormationKey::F331,
            slots: [
                SlotCoord::new(50.0, 88.0), // GK
                SlotCoord::new(20.0, 70.0),
                SlotCoord::new(50.0, 65.0),
                SlotCoord::new(80.0, 70.0), // DEF
                SlotCoord::new(20.0, 40.0),
                SlotCoord::new(50.0, 40.0),
                SlotCoord::new(80.0, 40.0), // MID
                SlotCoord::new(50.0, 15.0), // FWD
            ],
        },
        // 2-3-2: two at the back, three across midfield, two up top
        FormationTemplate {
            key: FormationKey::F232,
            slots: [
                SlotCoord::new(50.0, 88.0), // GK
                SlotCoord::new(30.0, 70.0),
                SlotCoord::new(70.0, 70.0), // DEF
                SlotCoord::new(20.0, 45.0),
                SlotCoord::new(50.0, 45.0),
                SlotCoord::new(80.0, 45.0), // MID
                SlotCoord::new(35.0, 15.0),
                SlotCoord::new(65.0, 15.0), // FWD
            ],
        },
        // 2-4-1: wide midfield four behind a lone striker
        FormationTemplate {
            key: FormationKey::F241,
            slots: [
                SlotCoord::new(50.0, 88.0), // GK
                SlotCoord::new(30.0, 75.0),
                SlotCoord::new(70.0, 75.0), // DEF
                SlotCoord::new(15.0, 50.0),
                SlotCoord::new(38.0, 45.0),
                SlotCoord::new(62.0, 45.0),
                SlotCoord::new(85.0, 50.0), // MID
                SlotCoord::new(50.0, 15.0), // FWD
            ],
        },
        // 3-2-2: back three, double pivot, two forwards
        FormationTemplate {
            key: FormationKey::F322,
            slots: [
                SlotCoord::new(50.0, 88.0), // GK
                SlotCoord::new(20.0, 70.0),
                SlotCoord::new(50.0, 70.0),
                SlotCoord::new(80.0, 70.0), // DEF
                SlotCoord::new(35.0, 45.0),
                SlotCoord::new(65.0, 45.0), // MID
                SlotCoord::new(35.0, 15.0),
                SlotCoord::new(65.0, 15.0), // FWD
            ],
        },
    ]
});
