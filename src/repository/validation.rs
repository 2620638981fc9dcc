use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::trend::TrendSubmission;
use crate::domain::types::TrendId;
use crate::domain::validation::{NewTrendValidation, TrendValidation, ValidationVote};
use crate::models::trend::TrendSubmission as DbTrendSubmission;
use crate::models::validation::{
    NewTrendValidation as DbNewTrendValidation, TrendValidation as DbTrendValidation,
};
use crate::repository::{
    DieselRepository, RepositoryError, RepositoryResult, ValidationReader, ValidationWriter,
};

impl ValidationReader for DieselRepository {
    fn list_validations_for_trend(
        &self,
        trend_id: TrendId,
    ) -> RepositoryResult<Vec<TrendValidation>> {
        use crate::schema::trend_validations;

        let mut conn = self.conn()?;

        let validations = trend_validations::table
            .filter(trend_validations::trend_id.eq(trend_id.get()))
            .order(trend_validations::created_at.asc())
            .load::<DbTrendValidation>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<TrendValidation>, _>>()?;

        Ok(validations)
    }
}

impl ValidationWriter for DieselRepository {
    fn create_validation(
        &self,
        validation: &NewTrendValidation,
    ) -> RepositoryResult<TrendSubmission> {
        use crate::schema::{trend_submissions, trend_validations};

        let mut conn = self.conn()?;
        let db_validation: DbNewTrendValidation = validation.clone().into();
        let vote = validation.vote;
        let trend_id = validation.trend_id.get();

        let updated = conn.transaction(|conn| {
            diesel::insert_into(trend_validations::table)
                .values(db_validation)
                .execute(conn)?;

            match vote {
                ValidationVote::Verify => diesel::update(
                    trend_submissions::table.filter(trend_submissions::id.eq(trend_id)),
                )
                .set((
                    trend_submissions::approve_count.eq(trend_submissions::approve_count + 1),
                    trend_submissions::validation_count
                        .eq(trend_submissions::validation_count + 1),
                    trend_submissions::updated_at.eq(diesel::dsl::now),
                ))
                .execute(conn)?,
                ValidationVote::Reject => diesel::update(
                    trend_submissions::table.filter(trend_submissions::id.eq(trend_id)),
                )
                .set((
                    trend_submissions::reject_count.eq(trend_submissions::reject_count + 1),
                    trend_submissions::validation_count
                        .eq(trend_submissions::validation_count + 1),
                    trend_submissions::updated_at.eq(diesel::dsl::now),
                ))
                .execute(conn)?,
            };

            trend_submissions::table
                .filter(trend_submissions::id.eq(trend_id))
                .first::<DbTrendSubmission>(conn)
        });

        let updated = match updated {
            Ok(trend) => trend,
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                return Err(RepositoryError::Duplicate);
            }
            Err(DieselError::NotFound) => return Err(RepositoryError::NotFound),
            Err(e) => return Err(e.into()),
        };

        Ok(updated.try_into()?)
    }
}
