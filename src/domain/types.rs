// ==========================================
// DOI Dashboard - Domain Type Definitions
// ==========================================
// Logic variants, Pareto classes, verdicts and
// vendor classes used across the whole pipeline
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Logic Variant (replenishment policy A-D)
// ==========================================
// The four upstream replenishment logics are opaque inputs;
// only their identity and fixed rank (A < B < C < D) matter here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogicVariant {
    A,
    B,
    C,
    D,
}

impl LogicVariant {
    /// All variants in rank order.
    pub const ALL: [LogicVariant; 4] = [
        LogicVariant::A,
        LogicVariant::B,
        LogicVariant::C,
        LogicVariant::D,
    ];

    /// Fixed sort rank: A=1, B=2, C=3, D=4.
    pub fn rank(&self) -> u8 {
        match self {
            LogicVariant::A => 1,
            LogicVariant::B => 2,
            LogicVariant::C => 3,
            LogicVariant::D => 4,
        }
    }

    /// Label as it appears in reports and exports ("Logic A".."Logic D").
    pub fn label(&self) -> &'static str {
        match self {
            LogicVariant::A => "Logic A",
            LogicVariant::B => "Logic B",
            LogicVariant::C => "Logic C",
            LogicVariant::D => "Logic D",
        }
    }

    /// Parse from a report label ("Logic A") or bare letter ("A").
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "LOGIC A" | "A" => Some(LogicVariant::A),
            "LOGIC B" | "B" => Some(LogicVariant::B),
            "LOGIC C" | "C" => Some(LogicVariant::C),
            "LOGIC D" | "D" => Some(LogicVariant::D),
            _ => None,
        }
    }
}

impl fmt::Display for LogicVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// Pareto Class (ABC-style SKU classification)
// ==========================================
// Fixed ordered set; labels outside the set are kept verbatim
// (source exports are uncurated) and sort last.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pareto {
    X,
    A,
    B,
    C,
    D,
    NewSkuA,
    NewSkuB,
    NewSkuC,
    NewSkuD,
    NoSalesL3M,
    Other(String),
}

impl Pareto {
    /// The canonical selector order for the Pareto multi-select.
    pub const ORDERED: [Pareto; 10] = [
        Pareto::X,
        Pareto::A,
        Pareto::B,
        Pareto::C,
        Pareto::D,
        Pareto::NewSkuA,
        Pareto::NewSkuB,
        Pareto::NewSkuC,
        Pareto::NewSkuD,
        Pareto::NoSalesL3M,
    ];

    /// Position in the canonical order; `Other` sorts after all known classes.
    pub fn order_key(&self) -> usize {
        Self::ORDERED
            .iter()
            .position(|p| p == self)
            .unwrap_or(Self::ORDERED.len())
    }

    pub fn label(&self) -> &str {
        match self {
            Pareto::X => "X",
            Pareto::A => "A",
            Pareto::B => "B",
            Pareto::C => "C",
            Pareto::D => "D",
            Pareto::NewSkuA => "New SKU A",
            Pareto::NewSkuB => "New SKU B",
            Pareto::NewSkuC => "New SKU C",
            Pareto::NewSkuD => "New SKU D",
            Pareto::NoSalesL3M => "No Sales L3M",
            Pareto::Other(s) => s.as_str(),
        }
    }

    /// Parse from a raw cell value. Unknown labels are preserved, never dropped.
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "X" => Pareto::X,
            "A" => Pareto::A,
            "B" => Pareto::B,
            "C" => Pareto::C,
            "D" => Pareto::D,
            "New SKU A" => Pareto::NewSkuA,
            "New SKU B" => Pareto::NewSkuB,
            "New SKU C" => Pareto::NewSkuC,
            "New SKU D" => Pareto::NewSkuD,
            "No Sales L3M" => Pareto::NoSalesL3M,
            other => Pareto::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Pareto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// Availability Verdict (Aman / Tidak Aman)
// ==========================================
// Landed DOI below this threshold flags a SKU or vendor group as
// at risk of stock-out ("Tidak Aman").
pub const SAFE_LANDED_DOI: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Aman,
    TidakAman,
}

impl Verdict {
    /// Classify a landed-DOI figure (raw or aggregated mean).
    pub fn from_landed_doi(landed_doi: f64) -> Self {
        if landed_doi < SAFE_LANDED_DOI {
            Verdict::TidakAman
        } else {
            Verdict::Aman
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Aman => "Aman",
            Verdict::TidakAman => "Tidak Aman",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// Vendor Class (inbound simulation partition)
// ==========================================
// Frequent vendors deliver on a fixed cadence and their recommended
// quantity is spread across that cadence; regular vendors land the
// whole quantity on the row's ship date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VendorClass {
    Frequent,
    Regular,
}

impl VendorClass {
    pub fn label(&self) -> &'static str {
        match self {
            VendorClass::Frequent => "Frequent",
            VendorClass::Regular => "Regular",
        }
    }
}

impl fmt::Display for VendorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logic_rank_order() {
        assert!(LogicVariant::A.rank() < LogicVariant::B.rank());
        assert!(LogicVariant::B.rank() < LogicVariant::C.rank());
        assert!(LogicVariant::C.rank() < LogicVariant::D.rank());
    }

    #[test]
    fn test_logic_from_label() {
        assert_eq!(LogicVariant::from_label("Logic C"), Some(LogicVariant::C));
        assert_eq!(LogicVariant::from_label("d"), Some(LogicVariant::D));
        assert_eq!(LogicVariant::from_label("Logic E"), None);
    }

    #[test]
    fn test_pareto_unknown_preserved() {
        let p = Pareto::from_label("Seasonal");
        assert_eq!(p, Pareto::Other("Seasonal".to_string()));
        assert_eq!(p.label(), "Seasonal");
        assert_eq!(p.order_key(), Pareto::ORDERED.len());
    }

    #[test]
    fn test_pareto_order() {
        assert!(Pareto::X.order_key() < Pareto::A.order_key());
        assert!(Pareto::NewSkuD.order_key() < Pareto::NoSalesL3M.order_key());
    }

    #[test]
    fn test_verdict_threshold() {
        assert_eq!(Verdict::from_landed_doi(4.99), Verdict::TidakAman);
        assert_eq!(Verdict::from_landed_doi(5.0), Verdict::Aman);
        assert_eq!(Verdict::from_landed_doi(5.25), Verdict::Aman);
    }
}
