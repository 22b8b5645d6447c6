//! Public CMS reads.
//!
//! Singleton sections fall back to their built-in defaults when no admin has
//! written them yet, so consumers never see a 404 here. Collections return
//! active rows in display order.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::landing::{
    FocusItem, LandingSection, LandingTestimonial, Partner, SectionBlock, SiteStat, TeamMember,
};
use domain::models::settings::{
    AboutSettings, ContactSettings, FooterSettings, HeroSettings, NavbarSettings, PartnerSettings,
    PresidentMessageSettings, SeoSettings, ThemeSettings,
};
use domain::models::{ListResponse, MediaAsset};
use persistence::repositories::{
    FocusItemRepository, MediaAssetRepository, PartnerRepository, SectionRepository,
    SettingsRepository, SiteStatRepository, TeamMemberRepository, TestimonialRepository,
};

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/cms/hero
pub async fn get_hero(State(state): State<AppState>) -> Result<Json<HeroSettings>, ApiError> {
    let settings = SettingsRepository::new(state.pool.clone())
        .get_hero()
        .await?
        .unwrap_or_else(HeroSettings::default_record);
    Ok(Json(settings))
}

/// GET /api/cms/navbar
pub async fn get_navbar(State(state): State<AppState>) -> Result<Json<NavbarSettings>, ApiError> {
    let settings = SettingsRepository::new(state.pool.clone())
        .get_navbar()
        .await?
        .unwrap_or_else(NavbarSettings::default_record);
    Ok(Json(settings))
}

/// GET /api/cms/theme
pub async fn get_theme(State(state): State<AppState>) -> Result<Json<ThemeSettings>, ApiError> {
    let settings = SettingsRepository::new(state.pool.clone())
        .get_theme()
        .await?
        .unwrap_or_else(ThemeSettings::default_record);
    Ok(Json(settings))
}

/// GET /api/cms/contact
pub async fn get_contact(State(state): State<AppState>) -> Result<Json<ContactSettings>, ApiError> {
    let settings = SettingsRepository::new(state.pool.clone())
        .get_contact()
        .await?
        .unwrap_or_else(ContactSettings::default_record);
    Ok(Json(settings))
}

/// GET /api/cms/footer
pub async fn get_footer(State(state): State<AppState>) -> Result<Json<FooterSettings>, ApiError> {
    let settings = SettingsRepository::new(state.pool.clone())
        .get_footer()
        .await?
        .unwrap_or_else(FooterSettings::default_record);
    Ok(Json(settings))
}

/// GET /api/cms/seo
pub async fn get_seo(State(state): State<AppState>) -> Result<Json<SeoSettings>, ApiError> {
    let settings = SettingsRepository::new(state.pool.clone())
        .get_seo()
        .await?
        .unwrap_or_else(SeoSettings::default_record);
    Ok(Json(settings))
}

/// GET /api/cms/about
pub async fn get_about(State(state): State<AppState>) -> Result<Json<AboutSettings>, ApiError> {
    let settings = SettingsRepository::new(state.pool.clone())
        .get_about()
        .await?
        .unwrap_or_else(AboutSettings::default_record);
    Ok(Json(settings))
}

/// GET /api/cms/president-message
pub async fn get_president_message(
    State(state): State<AppState>,
) -> Result<Json<PresidentMessageSettings>, ApiError> {
    let settings = SettingsRepository::new(state.pool.clone())
        .get_president_message()
        .await?
        .unwrap_or_else(PresidentMessageSettings::default_record);
    Ok(Json(settings))
}

/// GET /api/cms/partner-settings
pub async fn get_partner_settings(
    State(state): State<AppState>,
) -> Result<Json<PartnerSettings>, ApiError> {
    let settings = SettingsRepository::new(state.pool.clone())
        .get_partner_settings()
        .await?
        .unwrap_or_else(PartnerSettings::default_record);
    Ok(Json(settings))
}

/// GET /api/cms/sections
pub async fn list_sections(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<LandingSection>>, ApiError> {
    let sections = SectionRepository::new(state.pool.clone()).list().await?;
    Ok(Json(ListResponse::new(sections)))
}

/// GET /api/cms/sections/:id/blocks
pub async fn list_section_blocks(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ListResponse<SectionBlock>>, ApiError> {
    let repo = SectionRepository::new(state.pool.clone());

    repo.find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Section not found".to_string()))?;

    let blocks = repo.list_blocks(id).await?;
    Ok(Json(ListResponse::new(blocks)))
}

/// GET /api/cms/focus-items
pub async fn list_focus_items(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<FocusItem>>, ApiError> {
    let items = FocusItemRepository::new(state.pool.clone()).list().await?;
    Ok(Json(ListResponse::new(items)))
}

/// GET /api/cms/team-members
pub async fn list_team_members(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<TeamMember>>, ApiError> {
    let members = TeamMemberRepository::new(state.pool.clone()).list().await?;
    Ok(Json(ListResponse::new(members)))
}

/// GET /api/cms/testimonials
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<LandingTestimonial>>, ApiError> {
    let testimonials = TestimonialRepository::new(state.pool.clone())
        .list_public()
        .await?;
    Ok(Json(ListResponse::new(testimonials)))
}

/// GET /api/cms/stats
pub async fn list_stats(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<SiteStat>>, ApiError> {
    let stats = SiteStatRepository::new(state.pool.clone()).list().await?;
    Ok(Json(ListResponse::new(stats)))
}

/// GET /api/cms/partners
pub async fn list_partners(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Partner>>, ApiError> {
    let partners = PartnerRepository::new(state.pool.clone()).list().await?;
    Ok(Json(ListResponse::new(partners)))
}

/// GET /api/cms/media
pub async fn list_media(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<MediaAsset>>, ApiError> {
    let assets = MediaAssetRepository::new(state.pool.clone()).list().await?;
    Ok(Json(ListResponse::new(assets)))
}
