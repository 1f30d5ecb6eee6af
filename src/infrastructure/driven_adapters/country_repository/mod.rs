//! Country Repository Implementations

mod postgres;

pub use postgres::PostgresCountryRepository;
