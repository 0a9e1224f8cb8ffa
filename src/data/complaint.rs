//! Complaint repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::complaint::ComplaintStatus;

/// Repository providing database operations for user complaints.
pub struct ComplaintRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComplaintRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a new complaint in status "new".
    pub async fn create(
        &self,
        user_id: i32,
        category: String,
        text: String,
    ) -> Result<entity::complaint::Model, DbErr> {
        entity::complaint::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            category: ActiveValue::Set(category),
            text: ActiveValue::Set(text),
            status: ActiveValue::Set(ComplaintStatus::New),
            handled_by: ActiveValue::Set(None),
            internal_comment: ActiveValue::Set(String::new()),
            created: ActiveValue::Set(Utc::now()),
            updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        complaint_id: i32,
    ) -> Result<Option<entity::complaint::Model>, DbErr> {
        entity::prelude::Complaint::find_by_id(complaint_id)
            .one(self.db)
            .await
    }

    /// Lists complaints, newest first, optionally filtered by status.
    pub async fn list(
        &self,
        status: Option<ComplaintStatus>,
    ) -> Result<Vec<entity::complaint::Model>, DbErr> {
        let mut query = entity::prelude::Complaint::find();

        if let Some(status) = status {
            query = query.filter(entity::complaint::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::complaint::Column::Created)
            .all(self.db)
            .await
    }

    /// Applies a triage update and records who handled it.
    ///
    /// `handled_by` is stamped on every update so the audit trail always
    /// names the last staff member who touched the complaint.
    ///
    /// # Returns
    /// - `Ok(None)` - No complaint with that id
    pub async fn update(
        &self,
        complaint_id: i32,
        status: Option<ComplaintStatus>,
        internal_comment: Option<String>,
        handled_by: i32,
    ) -> Result<Option<entity::complaint::Model>, DbErr> {
        let Some(complaint) = self.find_by_id(complaint_id).await? else {
            return Ok(None);
        };

        let mut active: entity::complaint::ActiveModel = complaint.into();

        if let Some(status) = status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(internal_comment) = internal_comment {
            active.internal_comment = ActiveValue::Set(internal_comment);
        }

        active.handled_by = ActiveValue::Set(Some(handled_by));
        active.updated = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Complaints not yet closed.
    pub async fn count_open(&self) -> Result<u64, DbErr> {
        entity::prelude::Complaint::find()
            .filter(entity::complaint::Column::Status.ne(ComplaintStatus::Closed))
            .count(self.db)
            .await
    }
}
