use diesel::prelude::*;

use crate::domain::payment::{NewPayment, Payment};
use crate::domain::types::PaymentId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, PaymentListQuery, PaymentReader, PaymentWriter};
use crate::schema::payments;

impl PaymentReader for DieselRepository {
    fn get_payment_by_id(&self, id: PaymentId) -> RepositoryResult<Option<Payment>> {
        use crate::models::payment::Payment as DbPayment;

        let mut conn = self.conn()?;
        let payment = payments::table
            .find(id.get())
            .first::<DbPayment>(&mut conn)
            .optional()?;

        Ok(payment.map(Into::into))
    }

    fn list_payments(&self, query: PaymentListQuery) -> RepositoryResult<(usize, Vec<Payment>)> {
        use crate::models::payment::Payment as DbPayment;

        let mut conn = self.conn()?;

        let total: i64 = payments::table
            .filter(payments::client_id.eq(query.client_id.get()))
            .count()
            .get_result(&mut conn)?;

        let mut stmt = payments::table
            .filter(payments::client_id.eq(query.client_id.get()))
            .order(payments::due_date.desc())
            .into_boxed();
        if let Some(pagination) = &query.pagination {
            let page = if pagination.page == 0 { 1 } else { pagination.page } as i64;
            let per_page = pagination.per_page as i64;
            stmt = stmt.limit(per_page).offset((page - 1) * per_page);
        }

        let items = stmt
            .load::<DbPayment>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Payment>>();

        Ok((total as usize, items))
    }
}

impl PaymentWriter for DieselRepository {
    fn create_payments(&self, new_payments: &[NewPayment]) -> RepositoryResult<usize> {
        use crate::models::payment::NewPayment as DbNewPayment;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewPayment> = new_payments.iter().map(Into::into).collect();
        let affected = diesel::insert_into(payments::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
