use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::dependent::{Dependent, NewDependent};
use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClientListQuery, ClientReader, ClientWriter, DependentWriter, DieselRepository,
};
use crate::schema::clients;

/// Applies the optional search and status filters shared by the count and
/// the page queries.
fn filtered_clients(query: &ClientListQuery) -> clients::BoxedQuery<'static, Sqlite> {
    let mut stmt = clients::table.into_boxed();

    if let Some(term) = &query.search {
        let pattern = format!("%{term}%");
        stmt = stmt.filter(
            clients::name
                .like(pattern.clone())
                .or(clients::tax_id.like(pattern.clone()))
                .or(clients::email.like(pattern.clone()))
                .or(clients::phone.like(pattern)),
        );
    }

    if let Some(status) = query.status {
        stmt = stmt.filter(clients::status.eq(status.to_string()));
    }

    stmt
}

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        use crate::models::client::Client as DbClient;

        let mut conn = self.conn()?;
        let client = clients::table
            .find(id.get())
            .first::<DbClient>(&mut conn)
            .optional()?;

        let mut client = match client {
            Some(client) => Client::try_from(client)?,
            None => return Ok(None),
        };

        client.dependents = self.list_dependents(id)?;

        Ok(Some(client))
    }

    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        use crate::models::client::Client as DbClient;

        let mut conn = self.conn()?;

        let total: i64 = filtered_clients(&query).count().get_result(&mut conn)?;

        let mut stmt = filtered_clients(&query).order(clients::id.asc());
        if let Some(pagination) = &query.pagination {
            let page = if pagination.page == 0 { 1 } else { pagination.page } as i64;
            let per_page = pagination.per_page as i64;
            stmt = stmt.limit(per_page).offset((page - 1) * per_page);
        }

        let items = stmt
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Client::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total as usize, items))
    }

    fn list_dependents(&self, client_id: ClientId) -> RepositoryResult<Vec<Dependent>> {
        use crate::models::dependent::Dependent as DbDependent;
        use crate::schema::dependents;

        let mut conn = self.conn()?;
        let items = dependents::table
            .filter(dependents::client_id.eq(client_id.get()))
            .order(dependents::id.asc())
            .load::<DbDependent>(&mut conn)?
            .into_iter()
            .map(Dependent::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }
}

impl ClientWriter for DieselRepository {
    fn create_clients(&self, new_clients: &[NewClient]) -> RepositoryResult<usize> {
        use crate::models::client::NewClient as DbNewClient;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewClient> = new_clients.iter().map(Into::into).collect();
        let affected = diesel::insert_into(clients::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_client(
        &self,
        client_id: ClientId,
        updates: &UpdateClient,
    ) -> RepositoryResult<Client> {
        use crate::models::client::{Client as DbClient, UpdateClient as DbUpdateClient};

        let mut conn = self.conn()?;
        let db_updates: DbUpdateClient = updates.into();

        let updated = diesel::update(clients::table.find(client_id.get()))
            .set((&db_updates, clients::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbClient>(&mut conn)?;

        Ok(updated.try_into()?)
    }

    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()> {
        use crate::schema::{dependents, payments};

        let mut conn = self.conn()?;

        diesel::delete(dependents::table.filter(dependents::client_id.eq(client_id.get())))
            .execute(&mut conn)?;
        diesel::delete(payments::table.filter(payments::client_id.eq(client_id.get())))
            .execute(&mut conn)?;
        diesel::delete(clients::table.find(client_id.get())).execute(&mut conn)?;

        Ok(())
    }
}

impl DependentWriter for DieselRepository {
    fn add_dependents(&self, new_dependents: &[NewDependent]) -> RepositoryResult<usize> {
        use crate::models::dependent::NewDependent as DbNewDependent;
        use crate::schema::dependents;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewDependent> = new_dependents.iter().map(Into::into).collect();
        let affected = diesel::insert_into(dependents::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
