use std::time::Duration;

use crate::{error::AppResult, models::Item, services::providers::CatalogProvider};

/// In-process catalog with optional simulated latency
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    items: Vec<Item>,
    latency: Duration,
}

impl StaticCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            latency: Duration::ZERO,
        }
    }

    /// The built-in demo catalog
    pub fn demo() -> Self {
        Self::new(demo_items())
    }

    /// Delays every read by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for StaticCatalog {
    async fn list_all(&self) -> AppResult<Vec<Item>> {
        self.simulate_latency().await;
        Ok(self.items.clone())
    }

    async fn list_featured(&self) -> AppResult<Vec<Item>> {
        self.simulate_latency().await;
        Ok(self.items.iter().filter(|item| item.featured).cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<Item>> {
        self.simulate_latency().await;
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    image: &str,
    rating: f64,
    reviews: u32,
    featured: bool,
) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        image: format!(
            "https://images.unsplash.com/{}?auto=format&fit=crop&q=80&w=1000",
            image
        ),
        rating,
        reviews,
        featured,
    }
}

fn demo_items() -> Vec<Item> {
    vec![
        item(
            "1",
            "Minimalist Smartwatch",
            "A beautifully crafted smartwatch with a minimalist design. Features heart rate monitoring, sleep tracking, and notifications.",
            349.99,
            "Wearables",
            "photo-1579586337278-3befd40fd17a",
            4.8,
            120,
            true,
        ),
        item(
            "2",
            "Wireless Earbuds",
            "Premium sound quality with active noise cancellation. Seamless connectivity and long battery life.",
            199.99,
            "Audio",
            "photo-1606220588913-b3aacb4d2f46",
            4.6,
            215,
            false,
        ),
        item(
            "3",
            "Minimalist Desk Lamp",
            "Elegant desk lamp with adjustable brightness and color temperature. Perfect for your workspace.",
            129.99,
            "Home",
            "photo-1507473885765-e6ed057f782c",
            4.5,
            86,
            false,
        ),
        item(
            "4",
            "Ultra-Thin Laptop",
            "Powerful and sleek laptop with all-day battery life. Featuring a stunning display and backlit keyboard.",
            1299.99,
            "Computers",
            "photo-1496181133206-80ce9b88a853",
            4.9,
            342,
            true,
        ),
        item(
            "5",
            "Smart Home Hub",
            "Control all your smart home devices with this simple, elegant hub. Voice controlled and easy to set up.",
            149.99,
            "Smart Home",
            "photo-1558002038-1055907df827",
            4.4,
            178,
            false,
        ),
        item(
            "6",
            "Portable Bluetooth Speaker",
            "Crisp, balanced sound with deep bass. Waterproof and dustproof with 24-hour battery life.",
            89.99,
            "Audio",
            "photo-1608043152269-423dbba4e7e1",
            4.7,
            203,
            false,
        ),
        item(
            "7",
            "Premium Notebook Set",
            "Set of 3 high-quality notebooks with premium paper. Perfect for journaling or sketching.",
            24.99,
            "Stationery",
            "photo-1531346878377-a5be20888e57",
            4.3,
            59,
            false,
        ),
        item(
            "8",
            "Mechanical Keyboard",
            "Professional-grade mechanical keyboard with customizable backlighting. Precise tactile feedback for an enhanced typing experience.",
            159.99,
            "Accessories",
            "photo-1618384887929-16ec33fab9ef",
            4.8,
            127,
            false,
        ),
    ]
}
