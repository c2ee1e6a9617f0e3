use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Category, NewService, ServicePatch};

/// Create service request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 120, message = "Title must be between 1 and 120 characters"))]
    pub title: String,

    pub category: Category,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[validate(length(min = 1, message = "Duration is required"))]
    pub duration: String,

    /// Empty or missing selects the default image
    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,
}

impl CreateServiceRequest {
    pub fn into_new_service(self) -> NewService {
        NewService {
            title: self.title,
            category: self.category,
            description: self.description,
            price: self.price,
            duration: self.duration,
            image: self.image,
        }
    }
}

/// Update service request; omitted fields keep their current value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, max = 120, message = "Title must be between 1 and 120 characters"))]
    pub title: Option<String>,

    pub category: Option<Category>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    #[validate(length(min = 1, message = "Duration is required"))]
    pub duration: Option<String>,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,
}

impl UpdateServiceRequest {
    pub fn into_patch(self) -> ServicePatch {
        ServicePatch {
            title: self.title,
            category: self.category,
            description: self.description,
            price: self.price,
            duration: self.duration,
            image: self.image,
        }
    }
}

/// Catalog query string: `category` is a label or `All`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}
