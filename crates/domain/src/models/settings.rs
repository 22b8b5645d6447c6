//! Singleton CMS settings models.
//!
//! Each settings family is a single row keyed by a fixed literal id. Updates
//! are atomic upserts; public reads fall back to the built-in defaults below
//! when no row has been written yet, so consumers never see a 404.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Fixed primary key shared by most singleton settings rows.
pub const SINGLETON_ID: &str = "default";

/// Fixed primary key of the booking page settings row.
pub const BOOKING_PAGE_SETTINGS_ID: &str = "booking-page-settings";

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

/// Landing page hero section configuration.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct HeroSettings {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub primary_button_text: String,
    pub primary_button_link: String,
    pub secondary_button_text: String,
    pub secondary_button_link: String,
    pub background_type: String,
    pub background_media_id: Option<i32>,
    pub background_overlay_color: String,
    pub background_overlay_opacity: i32,
    pub enable_typewriter: bool,
    pub typewriter_texts: Vec<String>,
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl HeroSettings {
    /// Built-in hero shown before any admin edit is persisted.
    pub fn default_record() -> Self {
        Self {
            id: SINGLETON_ID.to_string(),
            title: "Where Adventure Meets\nTransformation".to_string(),
            subtitle: "Experience Morocco's soul through sustainable journeys. Discover culture, \
                       embrace adventure, and create lasting connections with local communities."
                .to_string(),
            primary_button_text: "Start Your Journey".to_string(),
            primary_button_link: "/discover".to_string(),
            secondary_button_text: "Explore Clubs".to_string(),
            secondary_button_link: "/clubs".to_string(),
            background_type: "image".to_string(),
            background_media_id: None,
            background_overlay_color: "rgba(26, 54, 93, 0.7)".to_string(),
            background_overlay_opacity: 70,
            enable_typewriter: true,
            typewriter_texts: vec![],
            updated_by: None,
            updated_at: Utc::now(),
        }
    }
}

/// Partial hero update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateHeroSettingsRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Subtitle cannot be empty"))]
    pub subtitle: Option<String>,

    #[validate(length(max = 100, message = "Button text must be at most 100 characters"))]
    pub primary_button_text: Option<String>,

    #[validate(length(max = 500, message = "Button link must be at most 500 characters"))]
    pub primary_button_link: Option<String>,

    #[validate(length(max = 100, message = "Button text must be at most 100 characters"))]
    pub secondary_button_text: Option<String>,

    #[validate(length(max = 500, message = "Button link must be at most 500 characters"))]
    pub secondary_button_link: Option<String>,

    #[validate(length(max = 20, message = "Background type must be at most 20 characters"))]
    pub background_type: Option<String>,

    pub background_media_id: Option<i32>,

    #[validate(length(max = 50, message = "Overlay color must be at most 50 characters"))]
    pub background_overlay_color: Option<String>,

    #[validate(range(min = 0, max = 100, message = "Opacity must be between 0 and 100"))]
    pub background_overlay_opacity: Option<i32>,

    pub enable_typewriter: Option<bool>,
    pub typewriter_texts: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Navbar
// ---------------------------------------------------------------------------

/// Navigation bar configuration, including the ordered link list.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct NavbarSettings {
    pub id: String,
    pub logo_type: String,
    pub logo_image_id: Option<i32>,
    pub logo_text: Option<String>,
    pub logo_link: String,
    pub navigation_links: serde_json::Value,
    pub show_language_switcher: bool,
    pub available_languages: Vec<String>,
    pub login_button_text: String,
    pub login_button_link: String,
    pub show_login_button: bool,
    pub join_button_text: String,
    pub join_button_link: String,
    pub show_join_button: bool,
    pub background_color: String,
    pub text_color: String,
    pub hover_color: String,
    pub is_sticky: bool,
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl NavbarSettings {
    pub fn default_record() -> Self {
        Self {
            id: SINGLETON_ID.to_string(),
            logo_type: "image".to_string(),
            logo_image_id: None,
            logo_text: None,
            logo_link: "/".to_string(),
            navigation_links: serde_json::json!([]),
            show_language_switcher: true,
            available_languages: vec!["EN".to_string(), "FR".to_string(), "AR".to_string()],
            login_button_text: "Login".to_string(),
            login_button_link: "/admin/login".to_string(),
            show_login_button: true,
            join_button_text: "Join Us".to_string(),
            join_button_link: "/join".to_string(),
            show_join_button: true,
            background_color: "#112250".to_string(),
            text_color: "#ffffff".to_string(),
            hover_color: "#D8C18D".to_string(),
            is_sticky: true,
            updated_by: None,
            updated_at: Utc::now(),
        }
    }
}

fn validate_navigation_links(links: &serde_json::Value) -> Result<(), validator::ValidationError> {
    let items = links.as_array().ok_or_else(|| {
        let mut err = validator::ValidationError::new("navigation_links");
        err.message = Some("Navigation links must be an array".into());
        err
    })?;

    for item in items {
        let valid = item.get("label").map(|v| v.is_string()).unwrap_or(false)
            && item.get("href").map(|v| v.is_string()).unwrap_or(false);
        if !valid {
            let mut err = validator::ValidationError::new("navigation_links");
            err.message = Some("Each navigation link needs a label and an href".into());
            return Err(err);
        }
    }
    Ok(())
}

/// Partial navbar update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateNavbarSettingsRequest {
    #[validate(length(max = 20, message = "Logo type must be at most 20 characters"))]
    pub logo_type: Option<String>,

    pub logo_image_id: Option<i32>,

    #[validate(length(max = 255, message = "Logo text must be at most 255 characters"))]
    pub logo_text: Option<String>,

    #[validate(length(max = 500, message = "Logo link must be at most 500 characters"))]
    pub logo_link: Option<String>,

    #[validate(custom(function = "validate_navigation_links"))]
    pub navigation_links: Option<serde_json::Value>,

    pub show_language_switcher: Option<bool>,
    pub available_languages: Option<Vec<String>>,

    #[validate(length(max = 100, message = "Button text must be at most 100 characters"))]
    pub login_button_text: Option<String>,

    #[validate(length(max = 500, message = "Button link must be at most 500 characters"))]
    pub login_button_link: Option<String>,

    pub show_login_button: Option<bool>,

    #[validate(length(max = 100, message = "Button text must be at most 100 characters"))]
    pub join_button_text: Option<String>,

    #[validate(length(max = 500, message = "Button link must be at most 500 characters"))]
    pub join_button_link: Option<String>,

    pub show_join_button: Option<bool>,

    #[validate(custom(function = "shared::validation::validate_hex_color"))]
    pub background_color: Option<String>,

    #[validate(custom(function = "shared::validation::validate_hex_color"))]
    pub text_color: Option<String>,

    #[validate(custom(function = "shared::validation::validate_hex_color"))]
    pub hover_color: Option<String>,

    pub is_sticky: Option<bool>,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Global theme colors and custom CSS.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct ThemeSettings {
    pub id: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub custom_css: Option<String>,
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl ThemeSettings {
    pub fn default_record() -> Self {
        Self {
            id: SINGLETON_ID.to_string(),
            primary_color: "#112250".to_string(),
            secondary_color: "#D8C18D".to_string(),
            custom_css: None,
            updated_by: None,
            updated_at: Utc::now(),
        }
    }
}

/// Partial theme update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateThemeSettingsRequest {
    #[validate(custom(function = "shared::validation::validate_hex_color"))]
    pub primary_color: Option<String>,

    #[validate(custom(function = "shared::validation::validate_hex_color"))]
    pub secondary_color: Option<String>,

    pub custom_css: Option<String>,
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

/// Contact page configuration.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct ContactSettings {
    pub id: String,
    pub office_address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub office_hours: Option<String>,
    pub map_latitude: Option<f64>,
    pub map_longitude: Option<f64>,
    pub form_recipients: Vec<String>,
    pub auto_reply_enabled: bool,
    pub auto_reply_message: Option<String>,
    pub social_links: serde_json::Value,
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl ContactSettings {
    pub fn default_record() -> Self {
        Self {
            id: SINGLETON_ID.to_string(),
            office_address: None,
            email: None,
            phone: None,
            office_hours: None,
            map_latitude: None,
            map_longitude: None,
            form_recipients: vec![],
            auto_reply_enabled: false,
            auto_reply_message: None,
            social_links: serde_json::json!({}),
            updated_by: None,
            updated_at: Utc::now(),
        }
    }
}

/// Partial contact-settings update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateContactSettingsRequest {
    pub office_address: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: Option<String>,

    pub office_hours: Option<String>,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub map_latitude: Option<f64>,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub map_longitude: Option<f64>,

    pub form_recipients: Option<Vec<String>>,
    pub auto_reply_enabled: Option<bool>,
    pub auto_reply_message: Option<String>,
    pub social_links: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

/// Footer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct FooterSettings {
    pub id: String,
    pub copyright_text: Option<String>,
    pub description: Option<String>,
    pub links: serde_json::Value,
    pub social_links: serde_json::Value,
    pub newsletter_enabled: bool,
    pub newsletter_title: Option<String>,
    pub newsletter_description: Option<String>,
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl FooterSettings {
    pub fn default_record() -> Self {
        Self {
            id: SINGLETON_ID.to_string(),
            copyright_text: None,
            description: None,
            links: serde_json::json!([]),
            social_links: serde_json::json!({}),
            newsletter_enabled: true,
            newsletter_title: None,
            newsletter_description: None,
            updated_by: None,
            updated_at: Utc::now(),
        }
    }
}

/// Partial footer update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateFooterSettingsRequest {
    #[validate(length(max = 500, message = "Copyright must be at most 500 characters"))]
    pub copyright_text: Option<String>,

    pub description: Option<String>,
    pub links: Option<serde_json::Value>,
    pub social_links: Option<serde_json::Value>,
    pub newsletter_enabled: Option<bool>,

    #[validate(length(max = 255, message = "Newsletter title must be at most 255 characters"))]
    pub newsletter_title: Option<String>,

    pub newsletter_description: Option<String>,
}

// ---------------------------------------------------------------------------
// SEO
// ---------------------------------------------------------------------------

/// Site-wide SEO and analytics configuration.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct SeoSettings {
    pub id: String,
    pub site_title: Option<String>,
    pub site_description: Option<String>,
    pub keywords: Option<String>,
    pub og_image_id: Option<i32>,
    pub twitter_handle: Option<String>,
    pub google_analytics_id: Option<String>,
    pub custom_head_code: Option<String>,
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl SeoSettings {
    pub fn default_record() -> Self {
        Self {
            id: SINGLETON_ID.to_string(),
            site_title: None,
            site_description: None,
            keywords: None,
            og_image_id: None,
            twitter_handle: None,
            google_analytics_id: None,
            custom_head_code: None,
            updated_by: None,
            updated_at: Utc::now(),
        }
    }
}

/// Partial SEO update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateSeoSettingsRequest {
    #[validate(length(max = 255, message = "Site title must be at most 255 characters"))]
    pub site_title: Option<String>,

    pub site_description: Option<String>,
    pub keywords: Option<String>,
    pub og_image_id: Option<i32>,

    #[validate(length(max = 100, message = "Twitter handle must be at most 100 characters"))]
    pub twitter_handle: Option<String>,

    #[validate(length(max = 100, message = "Analytics id must be at most 100 characters"))]
    pub google_analytics_id: Option<String>,

    pub custom_head_code: Option<String>,
}

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

/// "About us" section configuration.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct AboutSettings {
    pub id: String,
    pub is_active: bool,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub image_id: Option<i32>,
    pub background_image_id: Option<i32>,
    pub background_color: Option<String>,
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl AboutSettings {
    pub fn default_record() -> Self {
        Self {
            id: SINGLETON_ID.to_string(),
            is_active: true,
            title: "About Us".to_string(),
            subtitle: None,
            description: String::new(),
            image_id: None,
            background_image_id: None,
            background_color: None,
            updated_by: None,
            updated_at: Utc::now(),
        }
    }
}

/// Partial about-section update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateAboutSettingsRequest {
    pub is_active: Option<bool>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,

    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_id: Option<i32>,
    pub background_image_id: Option<i32>,

    #[validate(length(max = 50, message = "Background color must be at most 50 characters"))]
    pub background_color: Option<String>,
}

// ---------------------------------------------------------------------------
// President message
// ---------------------------------------------------------------------------

/// "Word from the president" section configuration.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct PresidentMessageSettings {
    pub id: String,
    pub is_active: bool,
    pub title: String,
    pub president_name: String,
    pub president_role: String,
    pub message: String,
    pub quote: Option<String>,
    pub photo_id: Option<i32>,
    pub signature_id: Option<i32>,
    pub background_color: String,
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl PresidentMessageSettings {
    pub fn default_record() -> Self {
        Self {
            id: SINGLETON_ID.to_string(),
            is_active: true,
            title: "A word from the president".to_string(),
            president_name: String::new(),
            president_role: "President".to_string(),
            message: String::new(),
            quote: None,
            photo_id: None,
            signature_id: None,
            background_color: "#112250".to_string(),
            updated_by: None,
            updated_at: Utc::now(),
        }
    }
}

/// Partial president-message update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdatePresidentMessageSettingsRequest {
    pub is_active: Option<bool>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub president_name: Option<String>,

    #[validate(length(max = 255, message = "Role must be at most 255 characters"))]
    pub president_role: Option<String>,

    pub message: Option<String>,
    pub quote: Option<String>,
    pub photo_id: Option<i32>,
    pub signature_id: Option<i32>,

    #[validate(length(max = 50, message = "Background color must be at most 50 characters"))]
    pub background_color: Option<String>,
}

// ---------------------------------------------------------------------------
// Partner section
// ---------------------------------------------------------------------------

/// "Our partners" section configuration (the partner list itself lives in the
/// ordered `partners` collection).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct PartnerSettings {
    pub id: String,
    pub is_active: bool,
    pub title: String,
    pub subtitle: Option<String>,
    pub background_color: Option<String>,
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl PartnerSettings {
    pub fn default_record() -> Self {
        Self {
            id: SINGLETON_ID.to_string(),
            is_active: true,
            title: "Our Partners".to_string(),
            subtitle: None,
            background_color: None,
            updated_by: None,
            updated_at: Utc::now(),
        }
    }
}

/// Partial partner-section update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdatePartnerSettingsRequest {
    pub is_active: Option<bool>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,

    pub subtitle: Option<String>,

    #[validate(length(max = 50, message = "Background color must be at most 50 characters"))]
    pub background_color: Option<String>,
}

// ---------------------------------------------------------------------------
// Booking page
// ---------------------------------------------------------------------------

/// Booking page configuration and feature toggles.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct BookingPageSettings {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub header_background_image: Option<String>,
    pub footer_text: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub enable_reviews: bool,
    pub enable_similar_events: bool,
    pub enable_image_gallery: bool,
    pub max_participants: i32,
    pub minimum_booking_hours: i32,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl BookingPageSettings {
    pub fn default_record() -> Self {
        Self {
            id: BOOKING_PAGE_SETTINGS_ID.to_string(),
            title: "Book Your Adventure".to_string(),
            subtitle: None,
            header_background_image: None,
            footer_text: None,
            contact_email: None,
            contact_phone: None,
            enable_reviews: true,
            enable_similar_events: true,
            enable_image_gallery: true,
            max_participants: 25,
            minimum_booking_hours: 24,
            seo_title: None,
            seo_description: None,
            updated_at: Utc::now(),
        }
    }
}

/// Partial booking-page update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateBookingPageSettingsRequest {
    #[validate(length(min = 1, max = 255, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Subtitle must be at most 255 characters"))]
    pub subtitle: Option<String>,

    #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
    pub header_background_image: Option<String>,

    pub footer_text: Option<String>,

    #[validate(email(message = "Invalid contact email"))]
    pub contact_email: Option<String>,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub contact_phone: Option<String>,

    pub enable_reviews: Option<bool>,
    pub enable_similar_events: Option<bool>,
    pub enable_image_gallery: Option<bool>,

    #[validate(range(min = 1, max = 500, message = "Max participants must be between 1 and 500"))]
    pub max_participants: Option<i32>,

    #[validate(range(min = 0, message = "Minimum booking hours must be non-negative"))]
    pub minimum_booking_hours: Option<i32>,

    #[validate(length(max = 255, message = "SEO title must be at most 255 characters"))]
    pub seo_title: Option<String>,

    pub seo_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hero_has_fixed_id() {
        let hero = HeroSettings::default_record();
        assert_eq!(hero.id, SINGLETON_ID);
        assert!(hero.title.contains("Adventure"));
    }

    #[test]
    fn test_default_booking_page_uses_its_own_key() {
        let settings = BookingPageSettings::default_record();
        assert_eq!(settings.id, BOOKING_PAGE_SETTINGS_ID);
        assert_eq!(settings.max_participants, 25);
        assert_eq!(settings.minimum_booking_hours, 24);
    }

    #[test]
    fn test_navigation_links_must_be_array() {
        let request = UpdateNavbarSettingsRequest {
            navigation_links: Some(serde_json::json!({"label": "Home"})),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_navigation_links_entries_need_label_and_href() {
        let request = UpdateNavbarSettingsRequest {
            navigation_links: Some(serde_json::json!([{"label": "Home"}])),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let request = UpdateNavbarSettingsRequest {
            navigation_links: Some(serde_json::json!([
                {"label": "Home", "href": "/"},
                {"label": "Clubs", "href": "/clubs"}
            ])),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_theme_update_rejects_bad_color() {
        let request = UpdateThemeSettingsRequest {
            primary_color: Some("blue".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_theme_defaults_match_brand() {
        let theme = ThemeSettings::default_record();
        assert_eq!(theme.primary_color, "#112250");
        assert_eq!(theme.secondary_color, "#D8C18D");
    }

    #[test]
    fn test_empty_updates_validate() {
        assert!(UpdateHeroSettingsRequest::default().validate().is_ok());
        assert!(UpdateNavbarSettingsRequest::default().validate().is_ok());
        assert!(UpdateThemeSettingsRequest::default().validate().is_ok());
        assert!(UpdateContactSettingsRequest::default().validate().is_ok());
        assert!(UpdateFooterSettingsRequest::default().validate().is_ok());
        assert!(UpdateSeoSettingsRequest::default().validate().is_ok());
        assert!(UpdateAboutSettingsRequest::default().validate().is_ok());
        assert!(UpdatePresidentMessageSettingsRequest::default()
            .validate()
            .is_ok());
        assert!(UpdatePartnerSettingsRequest::default().validate().is_ok());
        assert!(UpdateBookingPageSettingsRequest::default().validate().is_ok());
    }
}
