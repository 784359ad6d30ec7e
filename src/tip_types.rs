//! # Tecan Fluent tip types and liquid classes
//!
//! DiTi (disposable tip) type strings follow the pattern
//!
//! ```text
//! TOOLTYPE:LiHa.TecanDiTi/TOOLNAME:<arm>, <volume> [Filtered] SBS
//! ```
//!
//! where `<arm>` is `FCA` (Fixed Channel Arm, 8 channels) or `MCA` (Multi-Channel Arm,
//! 96 channels). [`tip_type_from_name`] resolves short names such as `"fca 200 filtered"`.

/// Fixed Channel Arm (FCA) tip types
pub mod fca {
    /// 50 µL filtered tips
    pub const TIPS_50UL_FILTERED: &str = "TOOLTYPE:LiHa.TecanDiTi/TOOLNAME:FCA, 50ul Filtered SBS";
    /// 200 µL filtered tips
    pub const TIPS_200UL_FILTERED: &str =
        "TOOLTYPE:LiHa.TecanDiTi/TOOLNAME:FCA, 200ul Filtered SBS";
    /// 1000 µL filtered tips
    pub const TIPS_1000UL_FILTERED: &str =
        "TOOLTYPE:LiHa.TecanDiTi/TOOLNAME:FCA, 1000ul Filtered SBS";

    /// 50 µL tips
    pub const TIPS_50UL: &str = "TOOLTYPE:LiHa.TecanDiTi/TOOLNAME:FCA, 50ul SBS";
    /// 200 µL tips
    pub const TIPS_200UL: &str = "TOOLTYPE:LiHa.TecanDiTi/TOOLNAME:FCA, 200ul SBS";
    /// 1000 µL tips
    pub const TIPS_1000UL: &str = "TOOLTYPE:LiHa.TecanDiTi/TOOLNAME:FCA, 1000ul SBS";

    /// Default FCA tip
    pub const DEFAULT: &str = TIPS_200UL_FILTERED;
}

/// Multi-Channel Arm (MCA) tip types
pub mod mca {
    /// 150 µL filtered tips
    pub const TIPS_150UL_FILTERED: &str =
        "TOOLTYPE:LiHa.TecanDiTi/TOOLNAME:MCA, 150ul Filtered SBS";
    /// 50 µL filtered tips
    pub const TIPS_50UL_FILTERED: &str = "TOOLTYPE:LiHa.TecanDiTi/TOOLNAME:MCA, 50ul Filtered SBS";

    /// 150 µL tips
    pub const TIPS_150UL: &str = "TOOLTYPE:LiHa.TecanDiTi/TOOLNAME:MCA, 150ul SBS";
    /// 50 µL tips
    pub const TIPS_50UL: &str = "TOOLTYPE:LiHa.TecanDiTi/TOOLNAME:MCA, 50ul SBS";

    /// Default MCA tip
    pub const DEFAULT: &str = TIPS_150UL_FILTERED;
}

/// Common liquid classes
pub mod liquid_class {
    /// Free dispense of water, single
    pub const WATER_FREE_SINGLE: &str = "Water Free Single";
    /// Free dispense of water, multi
    pub const WATER_FREE_MULTI: &str = "Water Free Multi";
    /// Wet contact dispense of water
    pub const WATER_WET: &str = "Water Wet";
    /// Serum, free single
    pub const SERUM_FREE: &str = "Serum Free Single";
    /// DMSO, free single
    pub const DMSO: &str = "DMSO Free Single";
    /// 50% glycerol, free single
    pub const GLYCEROL_50: &str = "Glycerol 50% Free Single";

    /// Default liquid class
    pub const DEFAULT: &str = WATER_FREE_SINGLE;
}

/// Resolve a short tip name to a full DiTi type string.
///
/// Names are matched loosely: `"FCA 200µl filtered"`, `"fca 1000"`, `"mca 50"`.
/// Anything that is already a `TOOLTYPE:` string is returned unchanged, and unknown
/// names fall back to [`fca::DEFAULT`].
pub fn tip_type_from_name(name: &str) -> String {
    if name.trim_start().starts_with("TOOLTYPE:") {
        return name.trim().to_string();
    }

    let name = name
        .to_lowercase()
        .replace("µl", "")
        .replace("ul", "");
    let filtered = name.contains("filter");

    let resolved = if name.contains("mca") {
        match (name.contains("50") && !name.contains("150"), filtered) {
            (true, true) => mca::TIPS_50UL_FILTERED,
            (true, false) => mca::TIPS_50UL,
            (false, true) => mca::TIPS_150UL_FILTERED,
            (false, false) => mca::TIPS_150UL,
        }
    } else if name.contains("fca") {
        if name.contains("1000") {
            if filtered { fca::TIPS_1000UL_FILTERED } else { fca::TIPS_1000UL }
        } else if name.contains("50") {
            if filtered { fca::TIPS_50UL_FILTERED } else { fca::TIPS_50UL }
        } else if filtered {
            fca::TIPS_200UL_FILTERED
        } else {
            fca::TIPS_200UL
        }
    } else {
        fca::DEFAULT
    };

    resolved.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_fca_names() {
        assert_eq!(tip_type_from_name("FCA 200µl filtered"), fca::TIPS_200UL_FILTERED);
        assert_eq!(tip_type_from_name("fca 1000"), fca::TIPS_1000UL);
        assert_eq!(tip_type_from_name("fca 50ul filtered"), fca::TIPS_50UL_FILTERED);
        assert_eq!(tip_type_from_name("fca"), fca::TIPS_200UL);
    }

    #[test]
    fn test_resolve_mca_names() {
        assert_eq!(tip_type_from_name("mca 150 filtered"), mca::TIPS_150UL_FILTERED);
        assert_eq!(tip_type_from_name("MCA 50"), mca::TIPS_50UL);
        assert_eq!(tip_type_from_name("mca"), mca::TIPS_150UL);
    }

    #[test]
    fn test_full_strings_pass_through() {
        assert_eq!(tip_type_from_name(fca::TIPS_1000UL), fca::TIPS_1000UL);
        assert_eq!(tip_type_from_name("something else"), fca::DEFAULT);
    }
}
