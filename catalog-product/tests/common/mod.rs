//! Common test utilities and shared test data for the catalog-product crate

#![allow(dead_code)]

use catalog_product::{
    Condition, DisplayType, Gama, GpuType, PaymentFrequency, ProcessorBrand, Resolution, UsageTag,
};

/// Sample JSON payload with multiple products for testing
pub const SAMPLE_JSON: &str = r#"[
  {
    "id": "lenovo-ideapad-3",
    "brand": "lenovo",
    "usage": ["Office", "Student"],
    "price": 1200.0,
    "lowest_quota": 60.0,
    "specs": {
      "ram_gb": 8,
      "storage_gb": 256,
      "processor_brand": "Intel",
      "display_inches": 15.6,
      "resolution": "FHD",
      "display_type": "IPS",
      "gpu_type": "Integrated",
      "touch_screen": false,
      "backlit_keyboard": false,
      "numeric_keypad": true,
      "fingerprint_reader": false,
      "has_windows": true,
      "has_thunderbolt": false,
      "has_ethernet": true,
      "ram_expandable": true
    },
    "gama": "Entry",
    "condition": "New",
    "available_now": true,
    "is_new": false,
    "is_featured": true
  },
  {
    "id": "hp-omen-16",
    "brand": "hp",
    "usage": ["Gaming", "Design"],
    "price": 4200.0,
    "lowest_quota": 200.0,
    "specs": {
      "ram_gb": 32,
      "storage_gb": 1024,
      "processor_brand": "Intel",
      "display_inches": 16.1,
      "resolution": "QHD",
      "display_type": "IPS",
      "gpu_type": "Dedicated",
      "touch_screen": false,
      "backlit_keyboard": true,
      "numeric_keypad": true,
      "fingerprint_reader": false,
      "has_windows": true,
      "has_thunderbolt": true,
      "has_ethernet": true,
      "ram_expandable": true
    },
    "gama": "Alta",
    "condition": "New",
    "available_now": true,
    "is_new": true,
    "is_featured": false
  },
  {
    "id": "apple-macbook-air",
    "brand": "apple",
    "usage": ["Design", "Student"],
    "price": 5000.0,
    "lowest_quota": 220.0,
    "specs": {
      "ram_gb": 16,
      "storage_gb": 512,
      "processor_brand": "Apple",
      "display_inches": 13.6,
      "resolution": "QHD",
      "display_type": "IPS",
      "gpu_type": "Integrated",
      "touch_screen": false,
      "backlit_keyboard": true,
      "numeric_keypad": false,
      "fingerprint_reader": true,
      "has_windows": false,
      "has_thunderbolt": true,
      "has_ethernet": false,
      "ram_expandable": false
    },
    "gama": "Premium",
    "condition": "Refurbished",
    "available_now": false,
    "is_new": false,
    "is_featured": true
  }
]"#;

/// Single-product payload for simpler tests
pub const SINGLE_PRODUCT_JSON: &str = r#"[
  {
    "id": "asus-vivobook-15",
    "brand": "asus",
    "usage": ["Office"],
    "price": 1800.0,
    "lowest_quota": 80.0,
    "specs": {
      "ram_gb": 8,
      "storage_gb": 512,
      "processor_brand": "Amd",
      "display_inches": 15.6,
      "resolution": "FHD",
      "display_type": "VA",
      "gpu_type": "Integrated",
      "touch_screen": true,
      "backlit_keyboard": false,
      "numeric_keypad": true,
      "fingerprint_reader": false,
      "has_windows": true,
      "has_thunderbolt": false,
      "has_ethernet": true,
      "ram_expandable": true
    },
    "gama": "Entry",
    "condition": "LikeNew",
    "available_now": true,
    "is_new": false,
    "is_featured": false
  }
]"#;

/// Test data for enum roundtrip testing
pub fn test_usage_tag_cases() -> Vec<(UsageTag, &'static str)> {
    vec![
        (UsageTag::Office, "Office"),
        (UsageTag::Gaming, "Gaming"),
        (UsageTag::Design, "Design"),
        (UsageTag::Student, "Student"),
        (UsageTag::Business, "Business"),
    ]
}

pub fn test_gama_cases() -> Vec<(Gama, &'static str)> {
    vec![
        (Gama::Entry, "Entry"),
        (Gama::Media, "Media"),
        (Gama::Alta, "Alta"),
        (Gama::Premium, "Premium"),
    ]
}

pub fn test_condition_cases() -> Vec<(Condition, &'static str)> {
    vec![
        (Condition::New, "New"),
        (Condition::LikeNew, "Like new"),
        (Condition::Refurbished, "Refurbished"),
    ]
}

pub fn test_processor_brand_cases() -> Vec<(ProcessorBrand, &'static str)> {
    vec![
        (ProcessorBrand::Intel, "Intel"),
        (ProcessorBrand::Amd, "AMD"),
        (ProcessorBrand::Apple, "Apple"),
    ]
}

pub fn test_gpu_type_cases() -> Vec<(GpuType, &'static str)> {
    vec![
        (GpuType::Integrated, "Integrated"),
        (GpuType::Dedicated, "Dedicated"),
    ]
}

pub fn test_resolution_cases() -> Vec<(Resolution, &'static str)> {
    vec![
        (Resolution::HD, "HD"),
        (Resolution::FHD, "FHD"),
        (Resolution::QHD, "QHD"),
        (Resolution::UHD, "UHD"),
    ]
}

pub fn test_display_type_cases() -> Vec<(DisplayType, &'static str)> {
    vec![
        (DisplayType::IPS, "IPS"),
        (DisplayType::OLED, "OLED"),
        (DisplayType::VA, "VA"),
        (DisplayType::TN, "TN"),
    ]
}

pub fn test_payment_frequency_cases() -> Vec<(PaymentFrequency, &'static str)> {
    vec![
        (PaymentFrequency::Weekly, "Weekly"),
        (PaymentFrequency::Biweekly, "Biweekly"),
        (PaymentFrequency::Monthly, "Monthly"),
    ]
}

/// Test case insensitive parsing for enums
pub fn test_enum_case_insensitive<T, P>(test_cases: Vec<(&str, T)>, parse_func: P)
where
    T: std::fmt::Debug,
    P: Fn(&str) -> Result<T, ()>,
{
    for (input, expected) in test_cases {
        let parsed = parse_func(input).unwrap_or_else(|_| {
            panic!("Failed to parse enum value: {}", input);
        });
        assert_eq!(
            std::mem::discriminant(&parsed),
            std::mem::discriminant(&expected)
        );
    }
}

/// Test invalid enum parsing
pub fn test_enum_invalid_parsing<T, P>(invalid_inputs: Vec<&str>, parse_func: P)
where
    P: Fn(&str) -> Result<T, ()>,
{
    for input in invalid_inputs {
        assert!(
            parse_func(input).is_err(),
            "Expected error for input: {}",
            input
        );
    }
}
