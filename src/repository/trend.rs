use diesel::prelude::*;

use crate::domain::trend::{NewTrendSubmission, TrendStatus, TrendSubmission};
use crate::domain::types::TrendId;
use crate::models::trend::{
    NewTrendSubmission as DbNewTrendSubmission, TrendSubmission as DbTrendSubmission,
};
use crate::repository::{
    DieselRepository, RepositoryResult, TrendListQuery, TrendReader, TrendWriter,
};

impl TrendReader for DieselRepository {
    fn list_trends(
        &self,
        query: TrendListQuery,
    ) -> RepositoryResult<(usize, Vec<TrendSubmission>)> {
        use crate::schema::trend_submissions;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = trend_submissions::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(category) = query.category {
                items = items.filter(trend_submissions::category.eq(category.as_str()));
            }
            if let Some(status) = query.status {
                items = items.filter(trend_submissions::status.eq(status.as_str()));
            }
            if let Some(spotter_id) = query.spotter_id {
                items = items.filter(trend_submissions::spotter_id.eq(spotter_id.get()));
            }
            if let Some(search) = &query.search {
                let pattern = format!("%{}%", search.to_lowercase());
                items = items.filter(
                    trend_submissions::title
                        .like(pattern.clone())
                        .or(trend_submissions::description.like(pattern)),
                );
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let items = items
            .order(trend_submissions::created_at.desc())
            .load::<DbTrendSubmission>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<TrendSubmission>, _>>()?;

        Ok((total, items))
    }

    fn get_trend_by_id(&self, id: TrendId) -> RepositoryResult<Option<TrendSubmission>> {
        use crate::schema::trend_submissions;

        let mut conn = self.conn()?;

        let trend = trend_submissions::table
            .filter(trend_submissions::id.eq(id.get()))
            .first::<DbTrendSubmission>(&mut conn)
            .optional()?;

        let trend = trend.map(TryInto::try_into).transpose()?;
        Ok(trend)
    }
}

impl TrendWriter for DieselRepository {
    fn create_trend(&self, trend: &NewTrendSubmission) -> RepositoryResult<TrendSubmission> {
        use crate::schema::trend_submissions;

        let mut conn = self.conn()?;
        let db_trend: DbNewTrendSubmission = trend.clone().into();

        let created = diesel::insert_into(trend_submissions::table)
            .values(db_trend)
            .get_result::<DbTrendSubmission>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn set_trend_status(&self, id: TrendId, status: TrendStatus) -> RepositoryResult<usize> {
        use crate::schema::trend_submissions;

        let mut conn = self.conn()?;

        let affected = diesel::update(
            trend_submissions::table.filter(trend_submissions::id.eq(id.get())),
        )
        .set((
            trend_submissions::status.eq(status.as_str()),
            trend_submissions::updated_at.eq(diesel::dsl::now),
        ))
        .execute(&mut conn)?;

        Ok(affected)
    }
}
