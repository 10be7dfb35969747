use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The five elements facets roll up into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Water,
    Air,
    Aether,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Fire,
        Element::Earth,
        Element::Water,
        Element::Air,
        Element::Aether,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Water => "water",
            Element::Air => "air",
            Element::Aether => "aether",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mean facet score per element plus the mean facet confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ElementalProfile {
    pub fire: f64,
    pub earth: f64,
    pub water: f64,
    pub air: f64,
    pub aether: f64,
    pub confidence: f64,
}

impl ElementalProfile {
    /// Value for one element.
    pub fn value(&self, element: Element) -> f64 {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Water => self.water,
            Element::Air => self.air,
            Element::Aether => self.aether,
        }
    }

    pub(crate) fn value_mut(&mut self, element: Element) -> &mut f64 {
        match element {
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Water => &mut self.water,
            Element::Air => &mut self.air,
            Element::Aether => &mut self.aether,
        }
    }

    /// Build a profile from per-element values in `Element::ALL` order.
    pub fn from_values(values: [f64; 5], confidence: f64) -> Self {
        let mut profile = Self {
            confidence,
            ..Self::default()
        };
        for (element, value) in Element::ALL.iter().zip(values) {
            *profile.value_mut(*element) = value;
        }
        profile
    }

    /// Element with the highest value; ties resolve to the earlier element.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Fire;
        for element in Element::ALL {
            if self.value(element) > self.value(best) {
                best = element;
            }
        }
        best
    }
}
