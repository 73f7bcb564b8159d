use sea_orm::DatabaseConnection;

use crate::{
    model::{entry::Condition, trend::TrendPointDto},
    server::{error::Error, model::db::EntryModel, service::entry::EntryService},
};

/// Derives trend data points from log entries.
///
/// Every entry yields one point labelled with its condition and valued with its scale, no
/// trend data is stored separately.
pub struct TrendService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrendService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the points of an account in chronological order
    pub async fn list(
        &self,
        owner_id: i32,
        condition: Option<Condition>,
    ) -> Result<Vec<TrendPointDto>, Error> {
        let entries = EntryService::new(self.db).list(owner_id).await?;

        // Entries come most recent first
        let points = entries
            .into_iter()
            .rev()
            .filter(|entry| condition.is_none_or(|c| entry.condition == c))
            .map(|entry| TrendPointDto {
                entry_id: entry.id,
                item: entry.title,
                label: entry.condition,
                value: entry.scale,
                date: entry.date,
            })
            .collect();

        Ok(points)
    }

    /// Derives the point of a single entry
    pub async fn get(&self, entry: EntryModel) -> Result<TrendPointDto, Error> {
        let entry = EntryService::new(self.db).get(entry).await?;

        Ok(TrendPointDto {
            entry_id: entry.id,
            item: entry.title,
            label: entry.condition,
            value: entry.scale,
            date: entry.date,
        })
    }
}
