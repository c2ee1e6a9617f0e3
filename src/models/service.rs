use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_SERVICE_IMAGE: &str =
    "https://images.unsplash.com/photo-1581578731117-104f2a41272c?auto=format&fit=crop&q=80&w=400";

/// Fixed set of service categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Plumbing,
    Electrical,
    Cleaning,
    Carpentry,
    Painting,
    Beauty,
    Moving,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Plumbing,
        Category::Electrical,
        Category::Cleaning,
        Category::Carpentry,
        Category::Painting,
        Category::Beauty,
        Category::Moving,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Plumbing => "Plumbing",
            Category::Electrical => "Electrical",
            Category::Cleaning => "Cleaning",
            Category::Carpentry => "Carpentry",
            Category::Painting => "Painting",
            Category::Beauty => "Beauty",
            Category::Moving => "Moving",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bookable offering listed by a provider.
///
/// `provider_name` is copied from the provider at creation time and is not
/// refreshed if the provider is later renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub provider_id: String,
    pub provider_name: String,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub price: f64,
    pub duration: String,
    pub image: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
}

/// Caller-supplied fields of a new service
#[derive(Debug, Clone)]
pub struct NewService {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub price: f64,
    pub duration: String,
    pub image: Option<String>,
}

/// Partial service update; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub image: Option<String>,
}

impl Service {
    /// Create a service owned by the given provider, unrated
    pub fn new(provider_id: String, provider_name: String, fields: NewService) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            provider_id,
            provider_name,
            title: fields.title,
            category: fields.category,
            description: fields.description,
            price: fields.price,
            duration: fields.duration,
            image: image_or_default(fields.image),
            rating: 0.0,
            review_count: 0,
        }
    }

    /// Merge the provided fields over this record
    pub fn apply(&mut self, patch: ServicePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(image) = patch.image {
            self.image = image_or_default(Some(image));
        }
    }
}

fn image_or_default(image: Option<String>) -> String {
    match image {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_SERVICE_IMAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> NewService {
        NewService {
            title: "Sofa Deep Cleaning".to_string(),
            category: Category::Cleaning,
            description: "Steam clean for three-seaters".to_string(),
            price: 60.0,
            duration: "2 hours".to_string(),
            image: None,
        }
    }

    #[test]
    fn new_service_starts_unrated_with_default_image() {
        let service = Service::new("p1".to_string(), "Mike Fixit".to_string(), fields());
        assert_eq!(service.rating, 0.0);
        assert_eq!(service.review_count, 0);
        assert_eq!(service.image, DEFAULT_SERVICE_IMAGE);
    }

    #[test]
    fn apply_only_touches_provided_fields() {
        let mut service = Service::new("p1".to_string(), "Mike Fixit".to_string(), fields());
        service.apply(ServicePatch {
            price: Some(75.0),
            image: Some("  ".to_string()),
            ..Default::default()
        });

        assert_eq!(service.price, 75.0);
        assert_eq!(service.title, "Sofa Deep Cleaning");
        assert_eq!(service.image, DEFAULT_SERVICE_IMAGE);
    }

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_string(&Category::Electrical).unwrap();
        assert_eq!(json, "\"Electrical\"");
        assert_eq!(Category::ALL.len(), 7);
    }
}
