// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde_json::{Value, json};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Seed catalogs for the demo index tools. `num` acts as a lower bound: the
/// built-in samples are always included in full, and synthetic filler is
/// appended only when more are requested. Near-duplicate entries are kept on
/// purpose so relevance ranking has something to discriminate between.
pub struct SeedDocuments {}

impl SeedDocuments {
    pub fn generic(num_documents: usize) -> Vec<Value> {
        let mut docs = vec![
            json!({
                "content": "Elasticsearch is a distributed, RESTful search and analytics engine.",
                "category": "technology",
                "tags": ["search", "database", "analytics"],
            }),
            json!({
                "content": "Python is a programming language that lets you work quickly and integrate systems effectively.",
                "category": "technology",
                "tags": ["programming", "language", "development"],
            }),
            json!({
                "content": "Machine learning is a method of data analysis that automates analytical model building.",
                "category": "technology",
                "tags": ["ai", "data science", "algorithms"],
            }),
            json!({
                "content": "Climate change is a long-term change in the average weather patterns.",
                "category": "environment",
                "tags": ["climate", "global warming", "science"],
            }),
            json!({
                "content": "Renewable energy is energy that is collected from renewable resources.",
                "category": "environment",
                "tags": ["energy", "sustainability", "solar"],
            }),
            json!({
                "content": "The Great Barrier Reef is the world's largest coral reef system.",
                "category": "environment",
                "tags": ["ocean", "coral", "australia"],
            }),
            json!({
                "content": "The COVID-19 pandemic is a global pandemic of coronavirus disease 2019.",
                "category": "health",
                "tags": ["virus", "pandemic", "medicine"],
            }),
            json!({
                "content": "Exercise is any bodily activity that enhances or maintains physical fitness.",
                "category": "health",
                "tags": ["fitness", "wellness", "activity"],
            }),
            json!({
                "content": "Nutrition is the science that interprets the nutrients and other substances in food.",
                "category": "health",
                "tags": ["food", "diet", "wellness"],
            }),
            json!({
                "content": "Artificial intelligence is intelligence demonstrated by machines.",
                "category": "technology",
                "tags": ["ai", "machine learning", "computer science"],
            }),
        ];

        while docs.len() < num_documents {
            docs.push(json!({
                "content": format!("This is a test document number {}.", docs.len() + 1),
                "category": "test",
                "tags": ["test", "sample"],
            }));
        }

        docs
    }

    pub fn ecommerce(num_products: usize) -> Vec<Value> {
        let mut products = vec![
            json!({
                "product_name": "Premium Wireless Headphones",
                "description": "High-quality wireless headphones with noise cancellation and 20-hour battery life.",
                "price": 199.99,
                "brand": "SoundMaster",
                "category": "Electronics",
                "rating": 4.7,
                "in_stock": true,
                "tags": ["wireless", "headphones", "audio", "bluetooth"],
            }),
            json!({
                "product_name": "Commuter Wireless Headphones",
                "description": "Lightweight wireless headphones with noise cancellation perfect for daily commute. Foldable design with 15-hour battery life.",
                "price": 149.99,
                "brand": "SoundMaster",
                "category": "Electronics",
                "rating": 4.6,
                "in_stock": true,
                "tags": ["wireless", "headphones", "audio", "commute", "noise cancellation", "travel"],
            }),
            json!({
                "product_name": "Budget Noise Cancelling Earbuds",
                "description": "Affordable wireless earbuds with basic noise cancellation, perfect for commuting and workouts. 8-hour battery life.",
                "price": 89.99,
                "brand": "AudioBasics",
                "category": "Electronics",
                "rating": 4.3,
                "in_stock": true,
                "tags": ["wireless", "earbuds", "audio", "commute", "noise cancellation"],
            }),
            json!({
                "product_name": "TravelQuiet Pro Headphones",
                "description": "Premium noise cancellation headphones designed for commuters and travelers. Blocks out subway and traffic noise with industry-leading technology.",
                "price": 179.99,
                "brand": "AudioPro",
                "category": "Electronics",
                "rating": 4.8,
                "in_stock": true,
                "tags": ["wireless", "headphones", "audio", "commute", "noise cancellation", "premium", "travel"],
            }),
            json!({
                "product_name": "CommuterFit Wireless Earbuds",
                "description": "Ergonomic wireless earbuds with active noise cancellation technology. Perfect for daily commutes with secure fit and sweat resistance.",
                "price": 129.99,
                "brand": "FitAudio",
                "category": "Electronics",
                "rating": 4.5,
                "in_stock": true,
                "tags": ["wireless", "earbuds", "audio", "commute", "noise cancellation", "fitness"],
            }),
            json!({
                "product_name": "CityCommuter Noise Cancelling Headphones",
                "description": "On-ear wireless headphones with noise cancellation optimized for urban commuting. Compact foldable design with 25-hour battery life.",
                "price": 159.99,
                "brand": "UrbanSound",
                "category": "Electronics",
                "rating": 4.4,
                "in_stock": true,
                "tags": ["wireless", "headphones", "audio", "commute", "noise cancellation", "urban", "compact"],
            }),
            json!({
                "product_name": "Premium Wireless Headphones",
                "description": "High-quality wireless headphones with noise cancellation and 30-hour battery life.",
                "price": 219.99,
                "brand": "SoundMaster",
                "category": "Electronics",
                "rating": 4.8,
                "in_stock": true,
                "tags": ["wireless", "headphones", "audio", "bluetooth"],
            }),
            json!({
                "product_name": "Ergonomic Office Chair",
                "description": "Comfortable office chair with lumbar support and adjustable height.",
                "price": 249.99,
                "brand": "ComfortPlus",
                "category": "Furniture",
                "rating": 4.5,
                "in_stock": true,
                "tags": ["chair", "office", "ergonomic", "furniture"],
            }),
            json!({
                "product_name": "Ergonomic Office Chair",
                "description": "Comfortable office chair with lumbar support, adjustable height, and headrest.",
                "price": 269.99,
                "brand": "ComfortPlus",
                "category": "Furniture",
                "rating": 4.6,
                "in_stock": true,
                "tags": ["chair", "office", "ergonomic", "furniture"],
            }),
            json!({
                "product_name": "Smartphone XS Max",
                "description": "Latest smartphone with 6.5-inch display, 128GB storage, and triple camera system.",
                "price": 899.99,
                "brand": "TechGiant",
                "category": "Electronics",
                "rating": 4.8,
                "in_stock": true,
                "tags": ["smartphone", "mobile", "camera", "tech"],
            }),
            json!({
                "product_name": "Smartphone XS Max",
                "description": "Latest smartphone with 6.5-inch display, 256GB storage, and triple camera system.",
                "price": 999.99,
                "brand": "TechGiant",
                "category": "Electronics",
                "rating": 4.9,
                "in_stock": true,
                "tags": ["smartphone", "mobile", "camera", "tech"],
            }),
            json!({
                "product_name": "Cotton T-Shirt",
                "description": "Soft, breathable cotton t-shirt available in multiple colors.",
                "price": 19.99,
                "brand": "FashionBasics",
                "category": "Clothing",
                "rating": 4.2,
                "in_stock": true,
                "tags": ["t-shirt", "cotton", "clothing", "casual"],
            }),
            json!({
                "product_name": "Cotton T-Shirt",
                "description": "Soft, breathable cotton t-shirt available in various sizes.",
                "price": 21.99,
                "brand": "FashionBasics",
                "category": "Clothing",
                "rating": 4.3,
                "in_stock": true,
                "tags": ["t-shirt", "cotton", "clothing", "casual"],
            }),
            json!({
                "product_name": "Stainless Steel Water Bottle",
                "description": "Insulated water bottle that keeps drinks cold for 24 hours or hot for 12 hours.",
                "price": 29.99,
                "brand": "EcoHydrate",
                "category": "Kitchen",
                "rating": 4.6,
                "in_stock": true,
                "tags": ["water bottle", "stainless steel", "insulated", "eco-friendly"],
            }),
            json!({
                "product_name": "Stainless Steel Water Bottle",
                "description": "Insulated water bottle with a sleek design, keeps drinks cold for 24 hours.",
                "price": 32.99,
                "brand": "EcoHydrate",
                "category": "Kitchen",
                "rating": 4.7,
                "in_stock": true,
                "tags": ["water bottle", "stainless steel", "insulated", "eco-friendly"],
            }),
            json!({
                "product_name": "Yoga Mat",
                "description": "Non-slip yoga mat with alignment lines for proper positioning.",
                "price": 39.99,
                "brand": "ZenFitness",
                "category": "Sports",
                "rating": 4.4,
                "in_stock": true,
                "tags": ["yoga", "fitness", "exercise", "mat"],
            }),
            json!({
                "product_name": "Yoga Mat",
                "description": "Eco-friendly yoga mat with extra cushioning for comfort.",
                "price": 44.99,
                "brand": "ZenFitness",
                "category": "Sports",
                "rating": 4.5,
                "in_stock": true,
                "tags": ["yoga", "fitness", "exercise", "mat"],
            }),
            json!({
                "product_name": "Smart Watch Series 5",
                "description": "Fitness tracker and smartwatch with heart rate monitoring and GPS.",
                "price": 299.99,
                "brand": "TechGiant",
                "category": "Electronics",
                "rating": 4.5,
                "in_stock": true,
                "tags": ["smartwatch", "fitness", "wearable", "tech"],
            }),
            json!({
                "product_name": "Organic Coffee Beans",
                "description": "Fair trade, organic coffee beans with rich, bold flavor.",
                "price": 14.99,
                "brand": "MountainBrew",
                "category": "Grocery",
                "rating": 4.7,
                "in_stock": true,
                "tags": ["coffee", "organic", "fair trade", "beans"],
            }),
            json!({
                "product_name": "Leather Wallet",
                "description": "Genuine leather wallet with RFID protection and multiple card slots.",
                "price": 49.99,
                "brand": "LuxeLeather",
                "category": "Accessories",
                "rating": 4.3,
                "in_stock": true,
                "tags": ["wallet", "leather", "accessories", "RFID"],
            }),
            json!({
                "product_name": "Wireless Charging Pad",
                "description": "Fast wireless charging pad compatible with all Qi-enabled devices.",
                "price": 29.99,
                "brand": "PowerUp",
                "category": "Electronics",
                "rating": 4.2,
                "in_stock": true,
                "tags": ["charger", "wireless", "electronics", "Qi"],
            }),
            json!({
                "product_name": "Cast Iron Skillet",
                "description": "Pre-seasoned cast iron skillet for versatile cooking on any heat source.",
                "price": 34.99,
                "brand": "KitchenPro",
                "category": "Kitchen",
                "rating": 4.8,
                "in_stock": true,
                "tags": ["skillet", "cast iron", "cooking", "kitchen"],
            }),
            json!({
                "product_name": "Premium Chef's Knife",
                "description": "High-carbon stainless steel chef's knife with ergonomic handle for precision cutting.",
                "price": 49.99,
                "brand": "KitchenPro",
                "category": "Kitchen",
                "rating": 4.9,
                "in_stock": true,
                "tags": ["knife", "chef", "cooking", "kitchen", "cutting"],
            }),
            json!({
                "product_name": "Silicone Cooking Utensil Set",
                "description": "Set of 5 heat-resistant silicone cooking utensils with wooden handles.",
                "price": 29.99,
                "brand": "KitchenPro",
                "category": "Kitchen",
                "rating": 4.7,
                "in_stock": true,
                "tags": ["utensils", "cooking", "kitchen", "silicone"],
            }),
            json!({
                "product_name": "Digital Kitchen Scale",
                "description": "Precise digital kitchen scale with tare function and multiple measurement units.",
                "price": 19.99,
                "brand": "KitchenPro",
                "category": "Kitchen",
                "rating": 4.6,
                "in_stock": true,
                "tags": ["scale", "kitchen", "measuring", "baking"],
            }),
            json!({
                "product_name": "Fitness Resistance Bands Set",
                "description": "Set of 5 resistance bands of varying strengths for home workouts and physical therapy.",
                "price": 24.99,
                "brand": "FitActive",
                "category": "Sports",
                "rating": 4.7,
                "in_stock": true,
                "tags": ["fitness", "exercise", "resistance bands", "workout", "home gym"],
            }),
            json!({
                "product_name": "Insulated Hiking Water Bottle",
                "description": "Double-walled stainless steel bottle that keeps water cold for 24 hours. Perfect for hiking and outdoor activities.",
                "price": 32.99,
                "brand": "AdventureGear",
                "category": "Sports",
                "rating": 4.8,
                "in_stock": true,
                "tags": ["outdoor", "hiking", "water bottle", "insulated", "camping"],
            }),
            json!({
                "product_name": "Ultralight Packable Daypack",
                "description": "Lightweight, foldable 20L backpack for hiking and travel. Water-resistant and durable.",
                "price": 29.99,
                "brand": "AdventureGear",
                "category": "Sports",
                "rating": 4.6,
                "in_stock": true,
                "tags": ["outdoor", "hiking", "backpack", "travel", "lightweight"],
            }),
            json!({
                "product_name": "Fitness Tracker Band",
                "description": "Waterproof fitness tracker with heart rate monitor, step counter, and sleep tracking.",
                "price": 49.99,
                "brand": "FitActive",
                "category": "Electronics",
                "rating": 4.5,
                "in_stock": true,
                "tags": ["fitness", "wearable", "tracker", "exercise", "health"],
            }),
        ];

        while products.len() < num_products {
            products.push(json!({
                "product_name": format!("Test Product {}", products.len() + 1),
                "description": format!("This is a test product number {}.", products.len() + 1),
                "price": 9.99,
                "brand": "TestBrand",
                "category": "Test",
                "rating": 3.0,
                "in_stock": true,
                "tags": ["test", "sample"],
            }));
        }

        products
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
