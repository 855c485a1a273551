use serde::Deserialize;
use validator::Validate;

use crate::domain::client::NewClient;
use crate::domain::types::{
    ClientEmail, ClientName, MonthlyFee, PhoneNumber, TaxId, TypeConstraintError,
};
use crate::edit::draft::ClientField;

#[derive(Deserialize, Validate)]
/// Form data for updating an existing client.
///
/// The monetary fee and the status travel as the raw strings the user
/// typed; the typed parses happen in the draft layer.
pub struct SaveClientForm {
    /// Client identifier.
    pub id: i32,
    /// Updated display name.
    #[validate(length(min = 1))]
    pub name: String,
    /// Updated CPF.
    #[validate(length(min = 11))]
    pub tax_id: String,
    /// Updated email address.
    pub email: String,
    /// Updated contact phone number.
    pub phone: String,
    /// Updated mailing address.
    pub address: String,
    /// Updated plan name.
    #[validate(length(min = 1))]
    pub plan_name: String,
    /// Raw monthly fee input.
    pub monthly_fee: String,
    /// Raw subscription status input.
    pub status: String,
}

impl SaveClientForm {
    /// Pairs each editable field with the raw value submitted for it, in
    /// the order the form lays them out.
    pub fn field_values(&self) -> [(ClientField, &str); 8] {
        [
            (ClientField::Name, self.name.as_str()),
            (ClientField::TaxId, self.tax_id.as_str()),
            (ClientField::Email, self.email.as_str()),
            (ClientField::Phone, self.phone.as_str()),
            (ClientField::Address, self.address.as_str()),
            (ClientField::PlanName, self.plan_name.as_str()),
            (ClientField::MonthlyFee, self.monthly_fee.as_str()),
            (ClientField::Status, self.status.as_str()),
        ]
    }
}

#[derive(Deserialize, Validate)]
/// Form data for registering a new client.
pub struct AddClientForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 11))]
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[validate(length(min = 1))]
    pub plan_name: String,
    pub monthly_fee: String,
}

impl AddClientForm {
    /// Convert the form into a [`NewClient`], normalizing contact fields
    /// through the domain value objects.
    pub fn to_new_client(&self) -> Result<NewClient, TypeConstraintError> {
        let name = ClientName::new(&self.name)?;
        let tax_id = TaxId::new(&self.tax_id)?;
        let email = (!self.email.trim().is_empty())
            .then(|| ClientEmail::new(&self.email))
            .transpose()?;
        let phone = (!self.phone.trim().is_empty())
            .then(|| PhoneNumber::new(&self.phone))
            .transpose()?;
        let monthly_fee = MonthlyFee::parse(&self.monthly_fee)?;

        Ok(NewClient::new(
            name,
            tax_id,
            email,
            phone,
            Some(self.address.clone()),
            self.plan_name.clone(),
            monthly_fee,
        ))
    }
}
