//! Common test utilities and shared fixtures for the catalog-search crate

#![allow(dead_code)]

use catalog_product::{
    Condition, DisplayType, Gama, GpuType, ProcessorBrand, Product, ProductSpecs, Resolution,
    UsageTag,
};

/// Baseline spec record; tests override individual fields as needed
pub fn default_specs() -> ProductSpecs {
    ProductSpecs {
        ram_gb: 8,
        storage_gb: 256,
        processor_brand: ProcessorBrand::Intel,
        display_inches: 15.6,
        resolution: Resolution::FHD,
        display_type: DisplayType::IPS,
        gpu_type: GpuType::Integrated,
        touch_screen: false,
        backlit_keyboard: false,
        numeric_keypad: false,
        fingerprint_reader: false,
        has_windows: true,
        has_thunderbolt: false,
        has_ethernet: true,
        ram_expandable: true,
    }
}

/// Baseline product; tests override individual fields as needed
pub fn laptop(id: &str, brand: &str, price: f64, quota: f64) -> Product {
    Product {
        id: id.to_string(),
        brand: brand.to_string(),
        usage: vec![UsageTag::Office],
        price,
        lowest_quota: quota,
        specs: default_specs(),
        gama: Gama::Media,
        condition: Condition::New,
        available_now: true,
        is_new: false,
        is_featured: false,
    }
}

/// Ten-product catalog with three lenovo items, covering the spec, tier,
/// and flag variety the filter predicates need
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product {
            usage: vec![UsageTag::Office, UsageTag::Student],
            gama: Gama::Entry,
            is_featured: true,
            ..laptop("lenovo-ideapad-3", "lenovo", 1200.0, 60.0)
        },
        Product {
            usage: vec![UsageTag::Gaming],
            specs: ProductSpecs {
                ram_gb: 16,
                storage_gb: 512,
                processor_brand: ProcessorBrand::Amd,
                gpu_type: GpuType::Dedicated,
                backlit_keyboard: true,
                ..default_specs()
            },
            gama: Gama::Alta,
            is_new: true,
            ..laptop("lenovo-legion-5", "lenovo", 3000.0, 150.0)
        },
        Product {
            usage: vec![UsageTag::Office, UsageTag::Business],
            specs: ProductSpecs {
                ram_gb: 16,
                storage_gb: 512,
                display_inches: 14.0,
                ..default_specs()
            },
            ..laptop("hp-pavilion-14", "hp", 2500.0, 120.0)
        },
        Product {
            usage: vec![UsageTag::Design, UsageTag::Student],
            specs: ProductSpecs {
                ram_gb: 16,
                storage_gb: 512,
                processor_brand: ProcessorBrand::Apple,
                display_inches: 13.6,
                resolution: Resolution::QHD,
                backlit_keyboard: true,
                fingerprint_reader: true,
                has_windows: false,
                has_thunderbolt: true,
                has_ethernet: false,
                ram_expandable: false,
                ..default_specs()
            },
            gama: Gama::Premium,
            is_new: true,
            is_featured: true,
            ..laptop("apple-macbook-air", "apple", 5000.0, 220.0)
        },
        Product {
            usage: vec![UsageTag::Office, UsageTag::Student],
            specs: ProductSpecs {
                storage_gb: 512,
                processor_brand: ProcessorBrand::Amd,
                touch_screen: true,
                ..default_specs()
            },
            gama: Gama::Entry,
            ..laptop("asus-vivobook-15", "asus", 1800.0, 80.0)
        },
        Product {
            usage: vec![UsageTag::Business],
            specs: ProductSpecs {
                ram_gb: 32,
                storage_gb: 1024,
                display_inches: 14.0,
                resolution: Resolution::QHD,
                backlit_keyboard: true,
                fingerprint_reader: true,
                has_thunderbolt: true,
                ..default_specs()
            },
            gama: Gama::Premium,
            ..laptop("lenovo-thinkpad-x1", "lenovo", 6500.0, 300.0)
        },
        Product {
            usage: vec![UsageTag::Gaming, UsageTag::Design],
            specs: ProductSpecs {
                ram_gb: 32,
                storage_gb: 1024,
                gpu_type: GpuType::Dedicated,
                backlit_keyboard: true,
                numeric_keypad: true,
                ..default_specs()
            },
            gama: Gama::Alta,
            is_featured: true,
            ..laptop("hp-omen-16", "hp", 4200.0, 200.0)
        },
        Product {
            usage: vec![UsageTag::Business, UsageTag::Design],
            specs: ProductSpecs {
                ram_gb: 16,
                storage_gb: 512,
                display_inches: 14.0,
                display_type: DisplayType::OLED,
                touch_screen: true,
                backlit_keyboard: true,
                has_thunderbolt: true,
                ..default_specs()
            },
            gama: Gama::Alta,
            is_new: true,
            ..laptop("asus-zenbook-14", "asus", 3500.0, 170.0)
        },
        Product {
            gama: Gama::Entry,
            condition: Condition::Refurbished,
            available_now: false,
            specs: ProductSpecs {
                processor_brand: ProcessorBrand::Amd,
                ..default_specs()
            },
            ..laptop("acer-aspire-3", "acer", 1100.0, 55.0)
        },
        Product {
            usage: vec![UsageTag::Gaming],
            specs: ProductSpecs {
                ram_gb: 16,
                storage_gb: 1024,
                gpu_type: GpuType::Dedicated,
                numeric_keypad: true,
                ..default_specs()
            },
            ..laptop("msi-katana-15", "msi", 2900.0, 140.0)
        },
    ]
}

/// Ids of a product slice, for order assertions
pub fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.key()).collect()
}

/// Prices of a product slice, for order assertions
pub fn prices(products: &[Product]) -> Vec<f64> {
    products.iter().map(|p| p.price).collect()
}
