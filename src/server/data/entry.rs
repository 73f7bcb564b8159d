use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::entry::{Condition, EntryType};

#[derive(Clone, Debug)]
pub struct NewEntry {
    pub entry_type: EntryType,
    pub detail: String,
    pub condition: Condition,
    pub scale: i32,
    pub notes: String,
    pub date: NaiveDate,
}

/// Partial update of an entry, `None` keeps the stored value
#[derive(Clone, Debug, Default)]
pub struct EntryChanges {
    pub entry_type: Option<EntryType>,
    pub detail: Option<String>,
    pub condition: Option<Condition>,
    pub scale: Option<i32>,
    pub notes: Option<String>,
    pub date: Option<NaiveDate>,
}

pub struct EntryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EntryRepository<'a, C> {
    /// Creates a new instance of [`EntryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, owner_id: i32, entry: NewEntry) -> Result<entity::entry::Model, DbErr> {
        let entry = entity::entry::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            entry_type: ActiveValue::Set(entry.entry_type.as_str().to_string()),
            detail: ActiveValue::Set(entry.detail),
            condition: ActiveValue::Set(entry.condition.as_str().to_string()),
            scale: ActiveValue::Set(entry.scale),
            notes: ActiveValue::Set(entry.notes),
            date: ActiveValue::Set(entry.date),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    pub async fn get(&self, entry_id: i32) -> Result<Option<entity::entry::Model>, DbErr> {
        entity::prelude::Entry::find_by_id(entry_id)
            .one(self.db)
            .await
    }

    /// Gets the entries of an account, most recent date first
    pub async fn get_many_by_owner_id(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::entry::Model>, DbErr> {
        entity::prelude::Entry::find()
            .filter(entity::entry::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::entry::Column::Date)
            .order_by_desc(entity::entry::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        entry: entity::entry::Model,
        changes: EntryChanges,
    ) -> Result<entity::entry::Model, DbErr> {
        let mut entry_am = entry.clone().into_active_model();

        if let Some(entry_type) = changes.entry_type {
            entry_am.entry_type = ActiveValue::Set(entry_type.as_str().to_string());
        }
        if let Some(detail) = changes.detail {
            entry_am.detail = ActiveValue::Set(detail);
        }
        if let Some(condition) = changes.condition {
            entry_am.condition = ActiveValue::Set(condition.as_str().to_string());
        }
        if let Some(scale) = changes.scale {
            entry_am.scale = ActiveValue::Set(scale);
        }
        if let Some(notes) = changes.notes {
            entry_am.notes = ActiveValue::Set(notes);
        }
        if let Some(date) = changes.date {
            entry_am.date = ActiveValue::Set(date);
        }

        if !entry_am.is_changed() {
            return Ok(entry);
        }

        entry_am.update(self.db).await
    }

    /// Deletes an entry
    ///
    /// Returns OK regardless of the entry existing, to confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, entry_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Entry::delete_by_id(entry_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_owner_id(&self, owner_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Entry::delete_many()
            .filter(entity::entry::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await
    }
}
