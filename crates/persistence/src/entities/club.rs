//! Club and club-membership entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::ClubRole;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the clubs table.
#[derive(Debug, Clone, FromRow)]
pub struct ClubEntity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image: Option<String>,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub member_count: i32,
    pub features: Vec<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub website: Option<String>,
    pub social_links: serde_json::Value,
    pub rating: i32,
    pub established: Option<String>,
    pub is_active: bool,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClubEntity> for domain::models::Club {
    fn from(entity: ClubEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            long_description: entity.long_description,
            image: entity.image,
            location: entity.location,
            latitude: entity.latitude,
            longitude: entity.longitude,
            member_count: entity.member_count,
            features: entity.features,
            contact_phone: entity.contact_phone,
            contact_email: entity.contact_email,
            website: entity.website,
            social_links: entity.social_links,
            rating: entity.rating,
            established: entity.established,
            is_active: entity.is_active,
            owner_id: entity.owner_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the club_memberships table.
#[derive(Debug, Clone, FromRow)]
pub struct ClubMembershipEntity {
    pub id: i32,
    pub user_id: Uuid,
    pub club_id: i32,
    pub role: ClubRole,
    pub is_active: bool,
    pub joined_at: DateTime<Utc>,
}

impl From<ClubMembershipEntity> for domain::models::ClubMembership {
    fn from(entity: ClubMembershipEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            club_id: entity.club_id,
            role: entity.role,
            is_active: entity.is_active,
            joined_at: entity.joined_at,
        }
    }
}
