//! Singleton CMS settings repository.
//!
//! Every settings family is one row with a fixed literal id. Updates are
//! `INSERT .. ON CONFLICT (id) DO UPDATE` so two concurrent first-writes
//! cannot race into duplicate rows: the insert arm fills unspecified columns
//! from the built-in defaults, the update arm keeps the stored values.

use domain::models::settings::{
    AboutSettings, BookingPageSettings, ContactSettings, FooterSettings, HeroSettings,
    NavbarSettings, PartnerSettings, PresidentMessageSettings, SeoSettings, ThemeSettings,
    UpdateAboutSettingsRequest, UpdateBookingPageSettingsRequest, UpdateContactSettingsRequest,
    UpdateFooterSettingsRequest, UpdateHeroSettingsRequest, UpdateNavbarSettingsRequest,
    UpdatePartnerSettingsRequest, UpdatePresidentMessageSettingsRequest, UpdateSeoSettingsRequest,
    UpdateThemeSettingsRequest, BOOKING_PAGE_SETTINGS_ID, SINGLETON_ID,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::metrics::QueryTimer;

/// Repository for singleton CMS settings rows.
#[derive(Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Hero
    // =========================================================================

    /// Fetch the hero settings row, if one has been written.
    pub async fn get_hero(&self) -> Result<Option<HeroSettings>, sqlx::Error> {
        let timer = QueryTimer::new("get_hero_settings");
        let result = sqlx::query_as::<_, HeroSettings>(
            "SELECT * FROM hero_settings WHERE id = $1",
        )
        .bind(SINGLETON_ID)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Upsert the hero settings row.
    pub async fn upsert_hero(
        &self,
        request: &UpdateHeroSettingsRequest,
        updated_by: Option<Uuid>,
    ) -> Result<HeroSettings, sqlx::Error> {
        let timer = QueryTimer::new("upsert_hero_settings");
        let result = sqlx::query_as::<_, HeroSettings>(
            r#"
            INSERT INTO hero_settings (id, title, subtitle, primary_button_text,
                primary_button_link, secondary_button_text, secondary_button_link,
                background_type, background_media_id, background_overlay_color,
                background_overlay_opacity, enable_typewriter, typewriter_texts, updated_by)
            VALUES ($1,
                COALESCE($2, E'Where Adventure Meets\nTransformation'),
                COALESCE($3, 'Experience Morocco''s soul through sustainable journeys. Discover culture, embrace adventure, and create lasting connections with local communities.'),
                COALESCE($4, 'Start Your Journey'),
                COALESCE($5, '/discover'),
                COALESCE($6, 'Explore Clubs'),
                COALESCE($7, '/clubs'),
                COALESCE($8, 'image'),
                $9,
                COALESCE($10, 'rgba(26, 54, 93, 0.7)'),
                COALESCE($11, 70),
                COALESCE($12, true),
                COALESCE($13, '{}'),
                $14)
            ON CONFLICT (id) DO UPDATE SET
                title = COALESCE($2, hero_settings.title),
                subtitle = COALESCE($3, hero_settings.subtitle),
                primary_button_text = COALESCE($4, hero_settings.primary_button_text),
                primary_button_link = COALESCE($5, hero_settings.primary_button_link),
                secondary_button_text = COALESCE($6, hero_settings.secondary_button_text),
                secondary_button_link = COALESCE($7, hero_settings.secondary_button_link),
                background_type = COALESCE($8, hero_settings.background_type),
                background_media_id = COALESCE($9, hero_settings.background_media_id),
                background_overlay_color = COALESCE($10, hero_settings.background_overlay_color),
                background_overlay_opacity = COALESCE($11, hero_settings.background_overlay_opacity),
                enable_typewriter = COALESCE($12, hero_settings.enable_typewriter),
                typewriter_texts = COALESCE($13, hero_settings.typewriter_texts),
                updated_by = COALESCE($14, hero_settings.updated_by),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(&request.title)
        .bind(&request.subtitle)
        .bind(&request.primary_button_text)
        .bind(&request.primary_button_link)
        .bind(&request.secondary_button_text)
        .bind(&request.secondary_button_link)
        .bind(&request.background_type)
        .bind(request.background_media_id)
        .bind(&request.background_overlay_color)
        .bind(request.background_overlay_opacity)
        .bind(request.enable_typewriter)
        .bind(&request.typewriter_texts)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    // =========================================================================
    // Navbar
    // =========================================================================

    /// Fetch the navbar settings row, if one has been written.
    pub async fn get_navbar(&self) -> Result<Option<NavbarSettings>, sqlx::Error> {
        let timer = QueryTimer::new("get_navbar_settings");
        let result = sqlx::query_as::<_, NavbarSettings>(
            "SELECT * FROM navbar_settings WHERE id = $1",
        )
        .bind(SINGLETON_ID)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Upsert the navbar settings row.
    pub async fn upsert_navbar(
        &self,
        request: &UpdateNavbarSettingsRequest,
        updated_by: Option<Uuid>,
    ) -> Result<NavbarSettings, sqlx::Error> {
        let timer = QueryTimer::new("upsert_navbar_settings");
        let result = sqlx::query_as::<_, NavbarSettings>(
            r#"
            INSERT INTO navbar_settings (id, logo_type, logo_image_id, logo_text, logo_link,
                navigation_links, show_language_switcher, available_languages,
                login_button_text, login_button_link, show_login_button, join_button_text,
                join_button_link, show_join_button, background_color, text_color, hover_color,
                is_sticky, updated_by)
            VALUES ($1,
                COALESCE($2, 'image'),
                $3,
                $4,
                COALESCE($5, '/'),
                COALESCE($6, '[]'::jsonb),
                COALESCE($7, true),
                COALESCE($8, '{EN,FR,AR}'),
                COALESCE($9, 'Login'),
                COALESCE($10, '/admin/login'),
                COALESCE($11, true),
                COALESCE($12, 'Join Us'),
                COALESCE($13, '/join'),
                COALESCE($14, true),
                COALESCE($15, '#112250'),
                COALESCE($16, '#ffffff'),
                COALESCE($17, '#D8C18D'),
                COALESCE($18, true),
                $19)
            ON CONFLICT (id) DO UPDATE SET
                logo_type = COALESCE($2, navbar_settings.logo_type),
                logo_image_id = COALESCE($3, navbar_settings.logo_image_id),
                logo_text = COALESCE($4, navbar_settings.logo_text),
                logo_link = COALESCE($5, navbar_settings.logo_link),
                navigation_links = COALESCE($6, navbar_settings.navigation_links),
                show_language_switcher = COALESCE($7, navbar_settings.show_language_switcher),
                available_languages = COALESCE($8, navbar_settings.available_languages),
                login_button_text = COALESCE($9, navbar_settings.login_button_text),
                login_button_link = COALESCE($10, navbar_settings.login_button_link),
                show_login_button = COALESCE($11, navbar_settings.show_login_button),
                join_button_text = COALESCE($12, navbar_settings.join_button_text),
                join_button_link = COALESCE($13, navbar_settings.join_button_link),
                show_join_button = COALESCE($14, navbar_settings.show_join_button),
                background_color = COALESCE($15, navbar_settings.background_color),
                text_color = COALESCE($16, navbar_settings.text_color),
                hover_color = COALESCE($17, navbar_settings.hover_color),
                is_sticky = COALESCE($18, navbar_settings.is_sticky),
                updated_by = COALESCE($19, navbar_settings.updated_by),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(&request.logo_type)
        .bind(request.logo_image_id)
        .bind(&request.logo_text)
        .bind(&request.logo_link)
        .bind(&request.navigation_links)
        .bind(request.show_language_switcher)
        .bind(&request.available_languages)
        .bind(&request.login_button_text)
        .bind(&request.login_button_link)
        .bind(request.show_login_button)
        .bind(&request.join_button_text)
        .bind(&request.join_button_link)
        .bind(request.show_join_button)
        .bind(&request.background_color)
        .bind(&request.text_color)
        .bind(&request.hover_color)
        .bind(request.is_sticky)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    // =========================================================================
    // Theme
    // =========================================================================

    /// Fetch the theme settings row, if one has been written.
    pub async fn get_theme(&self) -> Result<Option<ThemeSettings>, sqlx::Error> {
        let timer = QueryTimer::new("get_theme_settings");
        let result = sqlx::query_as::<_, ThemeSettings>(
            "SELECT * FROM theme_settings WHERE id = $1",
        )
        .bind(SINGLETON_ID)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Upsert the theme settings row.
    pub async fn upsert_theme(
        &self,
        request: &UpdateThemeSettingsRequest,
        updated_by: Option<Uuid>,
    ) -> Result<ThemeSettings, sqlx::Error> {
        let timer = QueryTimer::new("upsert_theme_settings");
        let result = sqlx::query_as::<_, ThemeSettings>(
            r#"
            INSERT INTO theme_settings (id, primary_color, secondary_color, custom_css, updated_by)
            VALUES ($1, COALESCE($2, '#112250'), COALESCE($3, '#D8C18D'), $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                primary_color = COALESCE($2, theme_settings.primary_color),
                secondary_color = COALESCE($3, theme_settings.secondary_color),
                custom_css = COALESCE($4, theme_settings.custom_css),
                updated_by = COALESCE($5, theme_settings.updated_by),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(&request.primary_color)
        .bind(&request.secondary_color)
        .bind(&request.custom_css)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    // =========================================================================
    // Contact
    // =========================================================================

    /// Fetch the contact settings row, if one has been written.
    pub async fn get_contact(&self) -> Result<Option<ContactSettings>, sqlx::Error> {
        let timer = QueryTimer::new("get_contact_settings");
        let result = sqlx::query_as::<_, ContactSettings>(
            "SELECT * FROM contact_settings WHERE id = $1",
        )
        .bind(SINGLETON_ID)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Upsert the contact settings row.
    pub async fn upsert_contact(
        &self,
        request: &UpdateContactSettingsRequest,
        updated_by: Option<Uuid>,
    ) -> Result<ContactSettings, sqlx::Error> {
        let timer = QueryTimer::new("upsert_contact_settings");
        let result = sqlx::query_as::<_, ContactSettings>(
            r#"
            INSERT INTO contact_settings (id, office_address, email, phone, office_hours,
                map_latitude, map_longitude, form_recipients, auto_reply_enabled,
                auto_reply_message, social_links, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, '{}'), COALESCE($9, false), $10,
                    COALESCE($11, '{}'::jsonb), $12)
            ON CONFLICT (id) DO UPDATE SET
                office_address = COALESCE($2, contact_settings.office_address),
                email = COALESCE($3, contact_settings.email),
                phone = COALESCE($4, contact_settings.phone),
                office_hours = COALESCE($5, contact_settings.office_hours),
                map_latitude = COALESCE($6, contact_settings.map_latitude),
                map_longitude = COALESCE($7, contact_settings.map_longitude),
                form_recipients = COALESCE($8, contact_settings.form_recipients),
                auto_reply_enabled = COALESCE($9, contact_settings.auto_reply_enabled),
                auto_reply_message = COALESCE($10, contact_settings.auto_reply_message),
                social_links = COALESCE($11, contact_settings.social_links),
                updated_by = COALESCE($12, contact_settings.updated_by),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(&request.office_address)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.office_hours)
        .bind(request.map_latitude)
        .bind(request.map_longitude)
        .bind(&request.form_recipients)
        .bind(request.auto_reply_enabled)
        .bind(&request.auto_reply_message)
        .bind(&request.social_links)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    // =========================================================================
    // Footer
    // =========================================================================

    /// Fetch the footer settings row, if one has been written.
    pub async fn get_footer(&self) -> Result<Option<FooterSettings>, sqlx::Error> {
        let timer = QueryTimer::new("get_footer_settings");
        let result = sqlx::query_as::<_, FooterSettings>(
            "SELECT * FROM footer_settings WHERE id = $1",
        )
        .bind(SINGLETON_ID)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Upsert the footer settings row.
    pub async fn upsert_footer(
        &self,
        request: &UpdateFooterSettingsRequest,
        updated_by: Option<Uuid>,
    ) -> Result<FooterSettings, sqlx::Error> {
        let timer = QueryTimer::new("upsert_footer_settings");
        let result = sqlx::query_as::<_, FooterSettings>(
            r#"
            INSERT INTO footer_settings (id, copyright_text, description, links, social_links,
                newsletter_enabled, newsletter_title, newsletter_description, updated_by)
            VALUES ($1, $2, $3, COALESCE($4, '[]'::jsonb), COALESCE($5, '{}'::jsonb),
                    COALESCE($6, true), $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                copyright_text = COALESCE($2, footer_settings.copyright_text),
                description = COALESCE($3, footer_settings.description),
                links = COALESCE($4, footer_settings.links),
                social_links = COALESCE($5, footer_settings.social_links),
                newsletter_enabled = COALESCE($6, footer_settings.newsletter_enabled),
                newsletter_title = COALESCE($7, footer_settings.newsletter_title),
                newsletter_description = COALESCE($8, footer_settings.newsletter_description),
                updated_by = COALESCE($9, footer_settings.updated_by),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(&request.copyright_text)
        .bind(&request.description)
        .bind(&request.links)
        .bind(&request.social_links)
        .bind(request.newsletter_enabled)
        .bind(&request.newsletter_title)
        .bind(&request.newsletter_description)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    // =========================================================================
    // SEO
    // =========================================================================

    /// Fetch the SEO settings row, if one has been written.
    pub async fn get_seo(&self) -> Result<Option<SeoSettings>, sqlx::Error> {
        let timer = QueryTimer::new("get_seo_settings");
        let result =
            sqlx::query_as::<_, SeoSettings>("SELECT * FROM seo_settings WHERE id = $1")
                .bind(SINGLETON_ID)
                .fetch_optional(&self.pool)
                .await;
        timer.record();
        result
    }

    /// Upsert the SEO settings row.
    pub async fn upsert_seo(
        &self,
        request: &UpdateSeoSettingsRequest,
        updated_by: Option<Uuid>,
    ) -> Result<SeoSettings, sqlx::Error> {
        let timer = QueryTimer::new("upsert_seo_settings");
        let result = sqlx::query_as::<_, SeoSettings>(
            r#"
            INSERT INTO seo_settings (id, site_title, site_description, keywords, og_image_id,
                twitter_handle, google_analytics_id, custom_head_code, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                site_title = COALESCE($2, seo_settings.site_title),
                site_description = COALESCE($3, seo_settings.site_description),
                keywords = COALESCE($4, seo_settings.keywords),
                og_image_id = COALESCE($5, seo_settings.og_image_id),
                twitter_handle = COALESCE($6, seo_settings.twitter_handle),
                google_analytics_id = COALESCE($7, seo_settings.google_analytics_id),
                custom_head_code = COALESCE($8, seo_settings.custom_head_code),
                updated_by = COALESCE($9, seo_settings.updated_by),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(&request.site_title)
        .bind(&request.site_description)
        .bind(&request.keywords)
        .bind(request.og_image_id)
        .bind(&request.twitter_handle)
        .bind(&request.google_analytics_id)
        .bind(&request.custom_head_code)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    // =========================================================================
    // About
    // =========================================================================

    /// Fetch the about settings row, if one has been written.
    pub async fn get_about(&self) -> Result<Option<AboutSettings>, sqlx::Error> {
        let timer = QueryTimer::new("get_about_settings");
        let result =
            sqlx::query_as::<_, AboutSettings>("SELECT * FROM about_settings WHERE id = $1")
                .bind(SINGLETON_ID)
                .fetch_optional(&self.pool)
                .await;
        timer.record();
        result
    }

    /// Upsert the about settings row.
    pub async fn upsert_about(
        &self,
        request: &UpdateAboutSettingsRequest,
        updated_by: Option<Uuid>,
    ) -> Result<AboutSettings, sqlx::Error> {
        let timer = QueryTimer::new("upsert_about_settings");
        let result = sqlx::query_as::<_, AboutSettings>(
            r#"
            INSERT INTO about_settings (id, is_active, title, subtitle, description, image_id,
                background_image_id, background_color, updated_by)
            VALUES ($1, COALESCE($2, true), COALESCE($3, 'About Us'), $4, COALESCE($5, ''),
                    $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                is_active = COALESCE($2, about_settings.is_active),
                title = COALESCE($3, about_settings.title),
                subtitle = COALESCE($4, about_settings.subtitle),
                description = COALESCE($5, about_settings.description),
                image_id = COALESCE($6, about_settings.image_id),
                background_image_id = COALESCE($7, about_settings.background_image_id),
                background_color = COALESCE($8, about_settings.background_color),
                updated_by = COALESCE($9, about_settings.updated_by),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(request.is_active)
        .bind(&request.title)
        .bind(&request.subtitle)
        .bind(&request.description)
        .bind(request.image_id)
        .bind(request.background_image_id)
        .bind(&request.background_color)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    // =========================================================================
    // President message
    // =========================================================================

    /// Fetch the president message row, if one has been written.
    pub async fn get_president_message(
        &self,
    ) -> Result<Option<PresidentMessageSettings>, sqlx::Error> {
        let timer = QueryTimer::new("get_president_message_settings");
        let result = sqlx::query_as::<_, PresidentMessageSettings>(
            "SELECT * FROM president_message_settings WHERE id = $1",
        )
        .bind(SINGLETON_ID)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Upsert the president message row.
    pub async fn upsert_president_message(
        &self,
        request: &UpdatePresidentMessageSettingsRequest,
        updated_by: Option<Uuid>,
    ) -> Result<PresidentMessageSettings, sqlx::Error> {
        let timer = QueryTimer::new("upsert_president_message_settings");
        let result = sqlx::query_as::<_, PresidentMessageSettings>(
            r#"
            INSERT INTO president_message_settings (id, is_active, title, president_name,
                president_role, message, quote, photo_id, signature_id, background_color,
                updated_by)
            VALUES ($1, COALESCE($2, true), COALESCE($3, 'A word from the president'),
                    COALESCE($4, ''), COALESCE($5, 'President'), COALESCE($6, ''), $7, $8, $9,
                    COALESCE($10, '#112250'), $11)
            ON CONFLICT (id) DO UPDATE SET
                is_active = COALESCE($2, president_message_settings.is_active),
                title = COALESCE($3, president_message_settings.title),
                president_name = COALESCE($4, president_message_settings.president_name),
                president_role = COALESCE($5, president_message_settings.president_role),
                message = COALESCE($6, president_message_settings.message),
                quote = COALESCE($7, president_message_settings.quote),
                photo_id = COALESCE($8, president_message_settings.photo_id),
                signature_id = COALESCE($9, president_message_settings.signature_id),
                background_color = COALESCE($10, president_message_settings.background_color),
                updated_by = COALESCE($11, president_message_settings.updated_by),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(request.is_active)
        .bind(&request.title)
        .bind(&request.president_name)
        .bind(&request.president_role)
        .bind(&request.message)
        .bind(&request.quote)
        .bind(request.photo_id)
        .bind(request.signature_id)
        .bind(&request.background_color)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    // =========================================================================
    // Partner section
    // =========================================================================

    /// Fetch the partner section row, if one has been written.
    pub async fn get_partner_settings(&self) -> Result<Option<PartnerSettings>, sqlx::Error> {
        let timer = QueryTimer::new("get_partner_settings");
        let result = sqlx::query_as::<_, PartnerSettings>(
            "SELECT * FROM partner_settings WHERE id = $1",
        )
        .bind(SINGLETON_ID)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Upsert the partner section row.
    pub async fn upsert_partner_settings(
        &self,
        request: &UpdatePartnerSettingsRequest,
        updated_by: Option<Uuid>,
    ) -> Result<PartnerSettings, sqlx::Error> {
        let timer = QueryTimer::new("upsert_partner_settings");
        let result = sqlx::query_as::<_, PartnerSettings>(
            r#"
            INSERT INTO partner_settings (id, is_active, title, subtitle, background_color,
                updated_by)
            VALUES ($1, COALESCE($2, true), COALESCE($3, 'Our Partners'), $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                is_active = COALESCE($2, partner_settings.is_active),
                title = COALESCE($3, partner_settings.title),
                subtitle = COALESCE($4, partner_settings.subtitle),
                background_color = COALESCE($5, partner_settings.background_color),
                updated_by = COALESCE($6, partner_settings.updated_by),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(request.is_active)
        .bind(&request.title)
        .bind(&request.subtitle)
        .bind(&request.background_color)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    // =========================================================================
    // Booking page
    // =========================================================================

    /// Fetch the booking page settings row, if one has been written.
    pub async fn get_booking_page(&self) -> Result<Option<BookingPageSettings>, sqlx::Error> {
        let timer = QueryTimer::new("get_booking_page_settings");
        let result = sqlx::query_as::<_, BookingPageSettings>(
            "SELECT * FROM booking_page_settings WHERE id = $1",
        )
        .bind(BOOKING_PAGE_SETTINGS_ID)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Upsert the booking page settings row.
    pub async fn upsert_booking_page(
        &self,
        request: &UpdateBookingPageSettingsRequest,
    ) -> Result<BookingPageSettings, sqlx::Error> {
        let timer = QueryTimer::new("upsert_booking_page_settings");
        let result = sqlx::query_as::<_, BookingPageSettings>(
            r#"
            INSERT INTO booking_page_settings (id, title, subtitle, header_background_image,
                footer_text, contact_email, contact_phone, enable_reviews,
                enable_similar_events, enable_image_gallery, max_participants,
                minimum_booking_hours, seo_title, seo_description)
            VALUES ($1, COALESCE($2, 'Book Your Adventure'), $3, $4, $5, $6, $7,
                    COALESCE($8, true), COALESCE($9, true), COALESCE($10, true),
                    COALESCE($11, 25), COALESCE($12, 24), $13, $14)
            ON CONFLICT (id) DO UPDATE SET
                title = COALESCE($2, booking_page_settings.title),
                subtitle = COALESCE($3, booking_page_settings.subtitle),
                header_background_image = COALESCE($4, booking_page_settings.header_background_image),
                footer_text = COALESCE($5, booking_page_settings.footer_text),
                contact_email = COALESCE($6, booking_page_settings.contact_email),
                contact_phone = COALESCE($7, booking_page_settings.contact_phone),
                enable_reviews = COALESCE($8, booking_page_settings.enable_reviews),
                enable_similar_events = COALESCE($9, booking_page_settings.enable_similar_events),
                enable_image_gallery = COALESCE($10, booking_page_settings.enable_image_gallery),
                max_participants = COALESCE($11, booking_page_settings.max_participants),
                minimum_booking_hours = COALESCE($12, booking_page_settings.minimum_booking_hours),
                seo_title = COALESCE($13, booking_page_settings.seo_title),
                seo_description = COALESCE($14, booking_page_settings.seo_description),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(BOOKING_PAGE_SETTINGS_ID)
        .bind(&request.title)
        .bind(&request.subtitle)
        .bind(&request.header_background_image)
        .bind(&request.footer_text)
        .bind(&request.contact_email)
        .bind(&request.contact_phone)
        .bind(request.enable_reviews)
        .bind(request.enable_similar_events)
        .bind(request.enable_image_gallery)
        .bind(request.max_participants)
        .bind(request.minimum_booking_hours)
        .bind(&request.seo_title)
        .bind(&request.seo_description)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: SettingsRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
