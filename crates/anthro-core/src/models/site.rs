use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A body site where a skinfold thickness is pinched (mm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SkinfoldSite {
    Chest,
    Axillary,
    Triceps,
    Biceps,
    Subscapular,
    Abdominal,
    Suprailiac,
    Thigh,
    Calf,
}

impl SkinfoldSite {
    pub const ALL: [SkinfoldSite; 9] = [
        SkinfoldSite::Chest,
        SkinfoldSite::Axillary,
        SkinfoldSite::Triceps,
        SkinfoldSite::Biceps,
        SkinfoldSite::Subscapular,
        SkinfoldSite::Abdominal,
        SkinfoldSite::Suprailiac,
        SkinfoldSite::Thigh,
        SkinfoldSite::Calf,
    ];

    /// Label shown to clinicians, also used in save-time rejections.
    pub fn label(&self) -> &'static str {
        match self {
            SkinfoldSite::Chest => "Peitoral",
            SkinfoldSite::Axillary => "Axilar média",
            SkinfoldSite::Triceps => "Tríceps",
            SkinfoldSite::Biceps => "Bíceps",
            SkinfoldSite::Subscapular => "Subescapular",
            SkinfoldSite::Abdominal => "Abdominal",
            SkinfoldSite::Suprailiac => "Supra-ilíaca",
            SkinfoldSite::Thigh => "Coxa",
            SkinfoldSite::Calf => "Panturrilha",
        }
    }
}

impl std::fmt::Display for SkinfoldSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A body circumference site (cm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CircumferenceSite {
    Neck,
    Chest,
    Waist,
    Abdomen,
    Hip,
    Arm,
    Thigh,
    Calf,
}

impl CircumferenceSite {
    pub const ALL: [CircumferenceSite; 8] = [
        CircumferenceSite::Neck,
        CircumferenceSite::Chest,
        CircumferenceSite::Waist,
        CircumferenceSite::Abdomen,
        CircumferenceSite::Hip,
        CircumferenceSite::Arm,
        CircumferenceSite::Thigh,
        CircumferenceSite::Calf,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CircumferenceSite::Neck => "Pescoço",
            CircumferenceSite::Chest => "Tórax",
            CircumferenceSite::Waist => "Cintura",
            CircumferenceSite::Abdomen => "Abdômen",
            CircumferenceSite::Hip => "Quadril",
            CircumferenceSite::Arm => "Braço",
            CircumferenceSite::Thigh => "Coxa",
            CircumferenceSite::Calf => "Panturrilha",
        }
    }
}

impl std::fmt::Display for CircumferenceSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
