use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageTag {
    Office,
    Gaming,
    Design,
    Student,
    Business,
}

impl UsageTag {
    pub const ALL: [UsageTag; 5] = [
        UsageTag::Office,
        UsageTag::Gaming,
        UsageTag::Design,
        UsageTag::Student,
        UsageTag::Business,
    ];
}

impl std::fmt::Display for UsageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageTag::Office => write!(f, "Office"),
            UsageTag::Gaming => write!(f, "Gaming"),
            UsageTag::Design => write!(f, "Design"),
            UsageTag::Student => write!(f, "Student"),
            UsageTag::Business => write!(f, "Business"),
        }
    }
}

impl FromStr for UsageTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "office" => Ok(UsageTag::Office),
            "gaming" => Ok(UsageTag::Gaming),
            "design" => Ok(UsageTag::Design),
            "student" => Ok(UsageTag::Student),
            "business" => Ok(UsageTag::Business),
            _ => Err(()),
        }
    }
}

/// Commercial tier classification of a product
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gama {
    Entry,
    Media,
    Alta,
    Premium,
}

impl Gama {
    pub const ALL: [Gama; 4] = [Gama::Entry, Gama::Media, Gama::Alta, Gama::Premium];
}

impl std::fmt::Display for Gama {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gama::Entry => write!(f, "Entry"),
            Gama::Media => write!(f, "Media"),
            Gama::Alta => write!(f, "Alta"),
            Gama::Premium => write!(f, "Premium"),
        }
    }
}

impl FromStr for Gama {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entry" => Ok(Gama::Entry),
            "media" => Ok(Gama::Media),
            "alta" => Ok(Gama::Alta),
            "premium" => Ok(Gama::Premium),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    New,
    LikeNew,
    Refurbished,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::New, Condition::LikeNew, Condition::Refurbished];
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::New => write!(f, "New"),
            Condition::LikeNew => write!(f, "Like new"),
            Condition::Refurbished => write!(f, "Refurbished"),
        }
    }
}

impl FromStr for Condition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Condition::New),
            "like new" | "like-new" | "likenew" => Ok(Condition::LikeNew),
            "refurbished" => Ok(Condition::Refurbished),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorBrand {
    Intel,
    Amd,
    Apple,
}

impl ProcessorBrand {
    pub const ALL: [ProcessorBrand; 3] = [
        ProcessorBrand::Intel,
        ProcessorBrand::Amd,
        ProcessorBrand::Apple,
    ];
}

impl std::fmt::Display for ProcessorBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessorBrand::Intel => write!(f, "Intel"),
            ProcessorBrand::Amd => write!(f, "AMD"),
            ProcessorBrand::Apple => write!(f, "Apple"),
        }
    }
}

impl FromStr for ProcessorBrand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "intel" => Ok(ProcessorBrand::Intel),
            "amd" => Ok(ProcessorBrand::Amd),
            "apple" => Ok(ProcessorBrand::Apple),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpuType {
    Integrated,
    Dedicated,
}

impl GpuType {
    pub const ALL: [GpuType; 2] = [GpuType::Integrated, GpuType::Dedicated];
}

impl std::fmt::Display for GpuType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GpuType::Integrated => write!(f, "Integrated"),
            GpuType::Dedicated => write!(f, "Dedicated"),
        }
    }
}

impl FromStr for GpuType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "integrated" => Ok(GpuType::Integrated),
            "dedicated" => Ok(GpuType::Dedicated),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    HD,
    FHD,
    QHD,
    UHD,
}

impl Resolution {
    pub const ALL: [Resolution; 4] = [
        Resolution::HD,
        Resolution::FHD,
        Resolution::QHD,
        Resolution::UHD,
    ];
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::HD => write!(f, "HD"),
            Resolution::FHD => write!(f, "FHD"),
            Resolution::QHD => write!(f, "QHD"),
            Resolution::UHD => write!(f, "UHD"),
        }
    }
}

impl FromStr for Resolution {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hd" | "1366x768" => Ok(Resolution::HD),
            "fhd" | "full hd" | "1920x1080" => Ok(Resolution::FHD),
            "qhd" | "2560x1440" => Ok(Resolution::QHD),
            "uhd" | "4k" | "3840x2160" => Ok(Resolution::UHD),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayType {
    IPS,
    OLED,
    VA,
    TN,
}

impl DisplayType {
    pub const ALL: [DisplayType; 4] = [
        DisplayType::IPS,
        DisplayType::OLED,
        DisplayType::VA,
        DisplayType::TN,
    ];
}

impl std::fmt::Display for DisplayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayType::IPS => write!(f, "IPS"),
            DisplayType::OLED => write!(f, "OLED"),
            DisplayType::VA => write!(f, "VA"),
            DisplayType::TN => write!(f, "TN"),
        }
    }
}

impl FromStr for DisplayType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ips" => Ok(DisplayType::IPS),
            "oled" => Ok(DisplayType::OLED),
            "va" => Ok(DisplayType::VA),
            "tn" => Ok(DisplayType::TN),
            _ => Err(()),
        }
    }
}

/// Recurrence unit for quota amounts. The multiplier rescales a
/// monthly-scale amount to the unit in question.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentFrequency {
    Weekly,
    Biweekly,
    Monthly,
}

impl PaymentFrequency {
    pub const ALL: [PaymentFrequency; 3] = [
        PaymentFrequency::Weekly,
        PaymentFrequency::Biweekly,
        PaymentFrequency::Monthly,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            PaymentFrequency::Weekly => 0.25,
            PaymentFrequency::Biweekly => 0.5,
            PaymentFrequency::Monthly => 1.0,
        }
    }
}

impl Default for PaymentFrequency {
    fn default() -> Self {
        PaymentFrequency::Monthly
    }
}

impl std::fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentFrequency::Weekly => write!(f, "Weekly"),
            PaymentFrequency::Biweekly => write!(f, "Biweekly"),
            PaymentFrequency::Monthly => write!(f, "Monthly"),
        }
    }
}

impl FromStr for PaymentFrequency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" | "week" => Ok(PaymentFrequency::Weekly),
            "biweekly" | "bi-weekly" | "fortnightly" => Ok(PaymentFrequency::Biweekly),
            "monthly" | "month" => Ok(PaymentFrequency::Monthly),
            _ => Err(()),
        }
    }
}
