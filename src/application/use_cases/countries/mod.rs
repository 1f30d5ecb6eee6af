//! Country Use Cases
//!
//! Application logic for managing countries.

mod create_country;
mod delete_country;
mod get_country_by_id;
mod list_countries;
mod update_country;

pub use create_country::CreateCountryUseCase;
pub use delete_country::DeleteCountryUseCase;
pub use get_country_by_id::GetCountryByIdUseCase;
pub use list_countries::ListCountriesUseCase;
pub use update_country::UpdateCountryUseCase;
