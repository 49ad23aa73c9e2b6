//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::reservation::{NewReservation, Reservation, ReservationRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::reservation;

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> Reservation {
    Reservation {
        id: m.id,
        hotel_id: m.hotel_id,
        user_id: m.user_id,
        room_id: m.room_id,
        check_in: m.check_in,
        check_out: m.check_out,
        guests: m.guests,
        confirmation: m.confirmation,
        canceled: m.canceled,
        created_at: m.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn create(&self, r: NewReservation) -> DomainResult<Reservation> {
        debug!("Creating reservation for hotel {}", r.hotel_id);

        let model = reservation::ActiveModel {
            id: NotSet,
            hotel_id: Set(r.hotel_id),
            user_id: Set(r.user_id),
            room_id: Set(r.room_id),
            check_in: Set(r.check_in),
            check_out: Set(r.check_out),
            guests: Set(r.guests),
            confirmation: Set(r.confirmation),
            canceled: Set(r.canceled),
            created_at: Set(chrono::Utc::now()),
        };
        let stored = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(stored))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn list_active_for_hotel(&self, hotel_id: i32) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::HotelId.eq(hotel_id))
            .filter(reservation::Column::Canceled.eq(false))
            .order_by_asc(reservation::Column::Confirmation)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::UserId.eq(user_id))
            .order_by_asc(reservation::Column::Confirmation)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, r: Reservation) -> DomainResult<()> {
        debug!("Updating reservation: {}", r.id);

        let existing = reservation::Entity::find_by_id(r.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: r.id.to_string(),
            });
        }

        let model = reservation::ActiveModel {
            id: Set(r.id),
            hotel_id: Set(r.hotel_id),
            user_id: Set(r.user_id),
            room_id: Set(r.room_id),
            check_in: Set(r.check_in),
            check_out: Set(r.check_out),
            guests: Set(r.guests),
            confirmation: Set(r.confirmation),
            canceled: Set(r.canceled),
            created_at: Set(r.created_at),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        debug!("Deleting reservation: {}", id);

        let result = reservation::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            });
        }

        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    use crate::domain::user::{NewUser, UserRepository, UserRole};
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::repositories::user_repository::SeaOrmUserRepository;

    async fn setup() -> (SeaOrmReservationRepository, String) {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let users = SeaOrmUserRepository::new(db.clone());
        let user = users
            .insert(NewUser {
                username: "alice".to_string(),
                email: "alice@x.com".to_string(),
                role: UserRole::Guest,
            })
            .await
            .unwrap();

        (SeaOrmReservationRepository::new(db), user.id)
    }

    fn draft(user_id: &str, hotel_id: i32, confirmation_day: u32) -> NewReservation {
        NewReservation {
            hotel_id,
            user_id: user_id.to_string(),
            room_id: 12,
            check_in: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
            guests: 2,
            confirmation: Utc.with_ymd_and_hms(2024, 1, confirmation_day, 0, 0, 0).unwrap(),
            canceled: false,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_persists_fields() {
        let (repo, user_id) = setup().await;

        let created = repo.create(draft(&user_id, 5, 10)).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.hotel_id, 5);
        assert_eq!(created.user_id, user_id);

        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn hotel_listing_filters_canceled_and_sorts_by_confirmation() {
        let (repo, user_id) = setup().await;

        let late = repo.create(draft(&user_id, 5, 20)).await.unwrap();
        let early = repo.create(draft(&user_id, 5, 10)).await.unwrap();
        let other_hotel = repo.create(draft(&user_id, 6, 15)).await.unwrap();

        let mut canceled = repo.create(draft(&user_id, 5, 15)).await.unwrap();
        canceled.cancel();
        repo.update(canceled.clone()).await.unwrap();

        let listed = repo.list_active_for_hotel(5).await.unwrap();
        let ids: Vec<i32> = listed.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![early.id, late.id]);
        assert!(!ids.contains(&other_hotel.id));
        assert!(!ids.contains(&canceled.id));
    }

    #[tokio::test]
    async fn user_listing_includes_canceled_rows() {
        let (repo, user_id) = setup().await;

        let kept = repo.create(draft(&user_id, 5, 10)).await.unwrap();
        let mut canceled = repo.create(draft(&user_id, 5, 20)).await.unwrap();
        canceled.cancel();
        repo.update(canceled.clone()).await.unwrap();

        let listed = repo.list_for_user(&user_id).await.unwrap();
        let ids: Vec<i32> = listed.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![kept.id, canceled.id]);
    }

    #[tokio::test]
    async fn update_overwrites_fields_in_place() {
        let (repo, user_id) = setup().await;

        let mut stored = repo.create(draft(&user_id, 5, 10)).await.unwrap();
        stored.room_id = 99;
        stored.guests = 4;
        repo.update(stored.clone()).await.unwrap();

        let fetched = repo.find_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(fetched.room_id, 99);
        assert_eq!(fetched.guests, 4);
        assert_eq!(fetched.user_id, user_id);
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() {
        let (repo, user_id) = setup().await;

        let mut ghost = repo.create(draft(&user_id, 5, 10)).await.unwrap();
        repo.delete(ghost.id).await.unwrap();
        ghost.guests = 3;

        let err = repo.update(ghost).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let (repo, user_id) = setup().await;

        let stored = repo.create(draft(&user_id, 5, 10)).await.unwrap();
        repo.delete(stored.id).await.unwrap();

        assert!(repo.find_by_id(stored.id).await.unwrap().is_none());
        let err = repo.delete(stored.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
